//! Cooperative cancellation shared with the mode-change interrupt

use core::fmt;
use core::sync::atomic::{AtomicBool, Ordering};

/// Marker returned when a show stopped because the mode changed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interrupted;

impl fmt::Display for Interrupted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("show interrupted by mode change")
    }
}

/// Result of a show or of one of its steps
///
/// `Err(Interrupted)` unwinds the show with `?` and leaves the LED buffer
/// in its last completed state.
pub type ShowResult<T = ()> = Result<T, Interrupted>;

/// Process-wide "stop the current show" flag
///
/// Raised from interrupt context, cleared by the scheduler once per epoch,
/// and only read by shows.
#[derive(Debug)]
pub struct CancellationSignal {
    raised: AtomicBool,
}

impl CancellationSignal {
    pub const fn new() -> Self {
        Self {
            raised: AtomicBool::new(false),
        }
    }

    /// Request the running show to stop
    pub fn raise(&self) {
        self.raised.store(true, Ordering::Release);
    }

    /// Reset the flag before the next show starts
    pub fn clear(&self) {
        self.raised.store(false, Ordering::Release);
    }

    pub fn is_raised(&self) -> bool {
        self.raised.load(Ordering::Acquire)
    }

    /// Fail with [`Interrupted`] if the flag is raised
    pub fn check(&self) -> ShowResult {
        if self.is_raised() {
            Err(Interrupted)
        } else {
            Ok(())
        }
    }
}

impl Default for CancellationSignal {
    fn default() -> Self {
        Self::new()
    }
}
