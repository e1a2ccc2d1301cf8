//! Collaborators shared by every running show

use embassy_time::Duration;
use embedded_hal::delay::DelayNs;

use crate::random::RandomSource;
use crate::signal::{CancellationSignal, ShowResult};

/// Delay, randomness and cancellation for a running show
///
/// Shows never block except through [`ShowContext::pause`] and
/// [`ShowContext::hold`], so the signal is observed at most one frame delay
/// after it is raised.
pub struct ShowContext<'a, T, R> {
    delay: T,
    rng: R,
    signal: &'a CancellationSignal,
}

impl<'a, T: DelayNs, R: RandomSource> ShowContext<'a, T, R> {
    pub const fn new(delay: T, rng: R, signal: &'a CancellationSignal) -> Self {
        Self { delay, rng, signal }
    }

    /// Stop here if the mode changed
    pub fn checkpoint(&self) -> ShowResult {
        self.signal.check()
    }

    /// Wait one frame, then stop if the mode changed meanwhile
    pub fn pause(&mut self, duration: Duration) -> ShowResult {
        self.hold(duration);
        self.checkpoint()
    }

    /// Wait without checking the signal
    pub fn hold(&mut self, duration: Duration) {
        let ms = u32::try_from(duration.as_millis()).unwrap_or(u32::MAX);
        self.delay.delay_ms(ms);
    }

    pub fn rng(&mut self) -> &mut R {
        &mut self.rng
    }

    pub const fn signal(&self) -> &'a CancellationSignal {
        self.signal
    }

    pub fn delay_mut(&mut self) -> &mut T {
        &mut self.delay
    }
}
