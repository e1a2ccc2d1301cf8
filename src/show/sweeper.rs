//! Sweeper show
//!
//! A block of foreground LEDs travels from the start of the device to the
//! end and back, like a scanner eye. Colors come from the device's own
//! foreground and background.

use embassy_time::Duration;
use embedded_hal::delay::DelayNs;

use super::Show;
use crate::{
    OutputDriver,
    context::ShowContext,
    device::LedBuffer,
    random::RandomSource,
    signal::ShowResult,
};

/// Delay between two sweep steps
pub const DEFAULT_SWEEP_STEP: Duration = Duration::from_millis(50);

/// Default size of the moving block
pub const DEFAULT_PIXEL_COUNT: usize = 2;

/// Back-and-forth sweep of a foreground block over a device of `N` LEDs
#[derive(Debug, Clone)]
pub struct Sweeper<const N: usize> {
    pixel_count: usize,
    cycles: i32,
    step_delay: Duration,
}

impl<const N: usize> Default for Sweeper<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Sweeper<N> {
    /// Create an endless sweeper with the default block size
    pub const fn new() -> Self {
        Self {
            pixel_count: Self::clamp_pixel_count(DEFAULT_PIXEL_COUNT),
            cycles: 0,
            step_delay: DEFAULT_SWEEP_STEP,
        }
    }

    /// Requests that do not fit the device shrink to half of it.
    const fn clamp_pixel_count(requested: usize) -> usize {
        if requested < N { requested } else { N / 2 }
    }

    /// Set the block size
    #[must_use]
    pub const fn with_pixel_count(mut self, requested: usize) -> Self {
        self.pixel_count = Self::clamp_pixel_count(requested);
        self
    }

    /// Set the number of full cycles; zero or negative sweeps forever
    #[must_use]
    pub const fn with_cycles(mut self, cycles: i32) -> Self {
        self.cycles = cycles;
        self
    }

    /// Set the delay between sweep steps
    #[must_use]
    pub const fn with_step_delay(mut self, delay: Duration) -> Self {
        self.step_delay = delay;
        self
    }

    pub fn set_pixel_count(&mut self, requested: usize) {
        self.pixel_count = Self::clamp_pixel_count(requested);
    }

    pub fn set_cycles(&mut self, cycles: i32) {
        self.cycles = cycles;
    }

    /// Size of the moving block after clamping
    pub const fn pixel_count(&self) -> usize {
        self.pixel_count
    }

    pub const fn cycles(&self) -> i32 {
        self.cycles
    }

    pub const fn is_endless(&self) -> bool {
        self.cycles <= 0
    }

    /// Steps needed to move the block from one end to the other
    const fn sweep_len(&self) -> usize {
        N - self.pixel_count
    }

    /// Paint the block at the start of the device
    fn paint_start<D: OutputDriver>(&self, device: &mut LedBuffer<D, N>) {
        let foreground = device.foreground();
        let background = device.background();
        for index in 0..N {
            let color = if index < self.pixel_count {
                foreground
            } else {
                background
            };
            device.set_cell(index, color);
        }
    }

    /// Move the block from the start of the device to the end
    pub fn forward_sweep<D, T, R>(
        &self,
        device: &mut LedBuffer<D, N>,
        ctx: &mut ShowContext<'_, T, R>,
    ) -> ShowResult
    where
        D: OutputDriver,
        T: DelayNs,
        R: RandomSource,
    {
        for _ in 0..self.sweep_len() {
            device.shift_forward();
            device.flush();
            ctx.pause(self.step_delay)?;
        }
        Ok(())
    }

    /// Move the block from the end of the device back to the start
    pub fn backward_sweep<D, T, R>(
        &self,
        device: &mut LedBuffer<D, N>,
        ctx: &mut ShowContext<'_, T, R>,
    ) -> ShowResult
    where
        D: OutputDriver,
        T: DelayNs,
        R: RandomSource,
    {
        for _ in 0..self.sweep_len() {
            device.shift_backward();
            device.flush();
            ctx.pause(self.step_delay)?;
        }
        Ok(())
    }

    fn cycle<D, T, R>(
        &self,
        device: &mut LedBuffer<D, N>,
        ctx: &mut ShowContext<'_, T, R>,
    ) -> ShowResult
    where
        D: OutputDriver,
        T: DelayNs,
        R: RandomSource,
    {
        // Zero-length sweeps never pause
        ctx.checkpoint()?;
        self.forward_sweep(device, ctx)?;
        self.backward_sweep(device, ctx)
    }
}

impl<const N: usize> Show<N> for Sweeper<N> {
    fn display<D, T, R>(
        &mut self,
        device: &mut LedBuffer<D, N>,
        ctx: &mut ShowContext<'_, T, R>,
    ) -> ShowResult
    where
        D: OutputDriver,
        T: DelayNs,
        R: RandomSource,
    {
        self.paint_start(device);
        device.flush();
        ctx.checkpoint()?;

        if self.is_endless() {
            loop {
                self.cycle(device, ctx)?;
            }
        }

        for _ in 0..self.cycles {
            self.cycle(device, ctx)?;
        }
        Ok(())
    }
}
