//! Light show system with a closed set of show variants
//!
//! Shows are stored in an enum to avoid heap allocations.
//! Each show implements the [`Show`] trait and runs synchronously until it
//! completes or the mode changes.

mod fill;
mod sparkle;
mod sweeper;

use embedded_hal::delay::DelayNs;
pub use fill::{DEFAULT_FILL_STEP, FillAndClear, FillSolid, fill_and_clear};
pub use sparkle::{DEFAULT_SPARKLE_FRAME, DEFAULT_SPARKLE_PERCENT, Sparkle};
pub use sweeper::{DEFAULT_PIXEL_COUNT, DEFAULT_SWEEP_STEP, Sweeper};

use crate::{
    OutputDriver,
    color::Rgb,
    context::ShowContext,
    device::LedBuffer,
    random::RandomSource,
    signal::ShowResult,
};

const SHOW_NAME_FILL_SOLID: &str = "fill_solid";
const SHOW_NAME_SPARKLE: &str = "sparkle";
const SHOW_NAME_SWEEPER: &str = "sweeper";

pub trait Show<const N: usize> {
    /// Play the animation on `device`
    ///
    /// Finite shows return `Ok(())` once done. Every show returns
    /// `Err(Interrupted)` as soon as it observes the cancellation signal.
    fn display<D, T, R>(
        &mut self,
        device: &mut LedBuffer<D, N>,
        ctx: &mut ShowContext<'_, T, R>,
    ) -> ShowResult
    where
        D: OutputDriver,
        T: DelayNs,
        R: RandomSource;

    /// Reset the device to its background, then play the animation
    fn run<D, T, R>(
        &mut self,
        device: &mut LedBuffer<D, N>,
        ctx: &mut ShowContext<'_, T, R>,
    ) -> ShowResult
    where
        D: OutputDriver,
        T: DelayNs,
        R: RandomSource,
    {
        device.show_background();
        self.display(device, ctx)
    }
}

/// Show slot - enum containing all possible shows
#[derive(Debug, Clone)]
pub enum LightShow<'p, const N: usize> {
    /// Fill the device one LED at a time, then clear it
    FillSolid(FillSolid),
    /// Randomly recolor LEDs every frame
    Sparkle(Sparkle<'p>),
    /// Move a block of foreground LEDs back and forth
    Sweeper(Sweeper<N>),
}

/// Known show kinds, used for logging
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShowKind {
    FillSolid,
    Sparkle,
    Sweeper,
}

impl ShowKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FillSolid => SHOW_NAME_FILL_SOLID,
            Self::Sparkle => SHOW_NAME_SPARKLE,
            Self::Sweeper => SHOW_NAME_SWEEPER,
        }
    }
}

impl<const N: usize> LightShow<'_, N> {
    pub fn kind(&self) -> ShowKind {
        match self {
            Self::FillSolid(_) => ShowKind::FillSolid,
            Self::Sparkle(_) => ShowKind::Sparkle,
            Self::Sweeper(_) => ShowKind::Sweeper,
        }
    }

    /// Give the show a new primary color before its next run
    ///
    /// Fill shows keep their own foreground, sweeps take it from the device.
    /// Sparkle picks random colors and ignores it.
    pub fn recolor<D: OutputDriver>(&mut self, color: Rgb, device: &mut LedBuffer<D, N>) {
        match self {
            Self::FillSolid(show) => show.set_foreground(color),
            Self::Sweeper(_) => device.set_foreground(color),
            Self::Sparkle(_) => {}
        }
    }
}

impl<const N: usize> Show<N> for LightShow<'_, N> {
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
        match self {
            Self::FillSolid(show) => show.display(device, ctx),
            Self::Sparkle(show) => show.display(device, ctx),
            Self::Sweeper(show) => show.display(device, ctx),
        }
    }
}
