//! Sparkle show
//!
//! Every frame each LED independently rolls a percentage and, if it falls
//! under the configured chance, takes a random palette color. LEDs that miss
//! the roll keep their previous color, so the picture evolves instead of
//! being repainted.

use embassy_time::Duration;
use embedded_hal::delay::DelayNs;

use super::Show;
use crate::{
    OutputDriver,
    color::Palette,
    context::ShowContext,
    device::LedBuffer,
    random::RandomSource,
    signal::ShowResult,
};

/// Default chance, in percent, that an LED changes color in a frame
pub const DEFAULT_SPARKLE_PERCENT: u8 = 80;

/// Delay between two sparkle frames
pub const DEFAULT_SPARKLE_FRAME: Duration = Duration::from_millis(100);

/// Rolls are drawn from `0..=100`
const ROLL_END: u32 = 101;

/// Endless random recoloring of individual LEDs
#[derive(Debug, Clone)]
pub struct Sparkle<'p> {
    palette: Palette<'p>,
    percent: u8,
    frame_delay: Duration,
}

impl<'p> Sparkle<'p> {
    pub const fn new(palette: Palette<'p>) -> Self {
        Self {
            palette,
            percent: DEFAULT_SPARKLE_PERCENT,
            frame_delay: DEFAULT_SPARKLE_FRAME,
        }
    }

    /// Set the chance an LED is recolored per frame
    ///
    /// A roll of 0 always passes, so even `0` recolors roughly one LED in a
    /// hundred.
    #[must_use]
    pub const fn with_percent(mut self, percent: u8) -> Self {
        self.percent = percent;
        self
    }

    /// Set the delay between frames
    #[must_use]
    pub const fn with_frame_delay(mut self, delay: Duration) -> Self {
        self.frame_delay = delay;
        self
    }

    pub fn set_percent(&mut self, percent: u8) {
        self.percent = percent;
    }

    pub const fn percent(&self) -> u8 {
        self.percent
    }

    /// Roll every LED once and recolor the winners
    pub fn scatter<D: OutputDriver, const N: usize>(
        &self,
        device: &mut LedBuffer<D, N>,
        rng: &mut impl RandomSource,
    ) {
        for index in 0..N {
            let roll = rng.uniform(0, ROLL_END);
            if u32::from(self.percent) >= roll {
                device.set_cell(index, self.palette.random_just_color(rng));
            }
        }
    }
}

impl<const N: usize> Show<N> for Sparkle<'_> {
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
        ctx.checkpoint()?;

        loop {
            self.scatter(device, ctx.rng());
            device.flush();

            ctx.checkpoint()?;
            ctx.pause(self.frame_delay)?;
        }
    }
}
