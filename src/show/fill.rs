//! Fill-and-clear shows
//!
//! A fill-and-clear show feeds one new color into index 0 per step while the
//! rest of the device shifts forward. After `2 * N` steps every LED has been
//! painted once by the first half of the sequence and once by the second.

use embassy_time::Duration;
use embedded_hal::delay::DelayNs;

use super::Show;
use crate::{
    OutputDriver,
    color::Rgb,
    context::ShowContext,
    device::LedBuffer,
    random::RandomSource,
    signal::ShowResult,
};

/// Delay between two fill steps
pub const DEFAULT_FILL_STEP: Duration = Duration::from_millis(50);

/// Color sequence of a fill-and-clear show
pub trait FillAndClear {
    /// Color entering the device at `step`, for a device of `len` LEDs
    ///
    /// `step` runs from `0` to `2 * len - 1`.
    fn next_color(&self, step: usize, len: usize) -> Rgb;

    fn step_delay(&self) -> Duration {
        DEFAULT_FILL_STEP
    }
}

/// Run `2 * N` fill steps of `show` on `device`
pub fn fill_and_clear<F, D, T, R, const N: usize>(
    show: &F,
    device: &mut LedBuffer<D, N>,
    ctx: &mut ShowContext<'_, T, R>,
) -> ShowResult
where
    F: FillAndClear + ?Sized,
    D: OutputDriver,
    T: DelayNs,
    R: RandomSource,
{
    for step in 0..2 * N {
        device.shift_forward();
        device.set_cell(0, show.next_color(step, N));
        device.flush();

        ctx.pause(show.step_delay())?;
    }
    Ok(())
}

/// Fill the device with one color, then clear it with another
#[derive(Debug, Clone)]
pub struct FillSolid {
    foreground: Rgb,
    background: Rgb,
    step_delay: Duration,
}

impl FillSolid {
    pub const fn new(foreground: Rgb, background: Rgb) -> Self {
        Self {
            foreground,
            background,
            step_delay: DEFAULT_FILL_STEP,
        }
    }

    /// Set the delay between fill steps
    #[must_use]
    pub const fn with_step_delay(mut self, delay: Duration) -> Self {
        self.step_delay = delay;
        self
    }

    pub const fn foreground(&self) -> Rgb {
        self.foreground
    }

    pub const fn background(&self) -> Rgb {
        self.background
    }

    pub fn set_foreground(&mut self, color: Rgb) {
        self.foreground = color;
    }

    pub fn set_background(&mut self, color: Rgb) {
        self.background = color;
    }
}

impl FillAndClear for FillSolid {
    fn next_color(&self, step: usize, len: usize) -> Rgb {
        if step < len {
            self.foreground
        } else {
            self.background
        }
    }

    fn step_delay(&self) -> Duration {
        self.step_delay
    }
}

impl<const N: usize> Show<N> for FillSolid {
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
        fill_and_clear(&*self, device, ctx)
    }
}
