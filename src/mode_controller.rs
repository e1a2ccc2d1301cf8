//! Debounced mode selection driven by a push-button interrupt
//!
//! The edge handler is the only writer of the mode index. It runs inside a
//! critical section so the main loop always sees a consistent
//! `(mode, last_event)` pair.

use core::cell::Cell;

use critical_section::Mutex;
use embassy_time::{Duration, Instant};

use crate::signal::CancellationSignal;

/// Default minimum time between two accepted edges
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);

/// Default highest mode index
pub const DEFAULT_MAX_MODE: u8 = 9;

/// Configuration for the mode controller
#[derive(Debug, Clone, Copy)]
pub struct ModeControllerConfig {
    /// Highest valid mode index; the next edge wraps to 0
    pub max_mode: u8,
    /// Edges closer than this to the last accepted one are bounces
    pub debounce: Duration,
}

impl ModeControllerConfig {
    pub const DEFAULT: Self = Self {
        max_mode: DEFAULT_MAX_MODE,
        debounce: DEFAULT_DEBOUNCE,
    };
}

impl Default for ModeControllerConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[derive(Debug, Clone, Copy)]
struct EdgeState {
    mode: u8,
    last_event: Instant,
}

/// Mode index and cancellation flag shared with the edge interrupt
///
/// Meant to live in a `static` so both the interrupt handler and the
/// scheduler can reach it.
pub struct ModeController {
    state: Mutex<Cell<EdgeState>>,
    signal: CancellationSignal,
    config: ModeControllerConfig,
}

impl ModeController {
    pub const fn new(config: ModeControllerConfig) -> Self {
        Self {
            state: Mutex::new(Cell::new(EdgeState {
                mode: 0,
                last_event: Instant::from_ticks(0),
            })),
            signal: CancellationSignal::new(),
            config,
        }
    }

    /// Handle a raw edge from the mode button
    ///
    /// Returns `true` if the edge was accepted and the mode advanced.
    /// Edges inside the debounce window are dropped, as are edges whose
    /// window cannot be computed.
    pub fn on_edge(&self, now: Instant) -> bool {
        critical_section::with(|cs| {
            let cell = self.state.borrow(cs);
            let mut state = cell.get();

            let Some(window_end) = state.last_event.checked_add(self.config.debounce) else {
                return false;
            };
            if now < window_end {
                // Bounce
                return false;
            }

            state.last_event = now;
            state.mode = if state.mode < self.config.max_mode {
                state.mode + 1
            } else {
                0
            };
            cell.set(state);

            self.signal.raise();
            true
        })
    }

    /// Currently selected mode index
    pub fn current_mode(&self) -> u8 {
        critical_section::with(|cs| self.state.borrow(cs).get().mode)
    }

    /// Check if the mode changed since the signal was last cleared
    pub fn mode_changed(&self) -> bool {
        self.signal.is_raised()
    }

    /// Cancellation flag raised on every accepted edge
    pub const fn signal(&self) -> &CancellationSignal {
        &self.signal
    }

    pub const fn config(&self) -> &ModeControllerConfig {
        &self.config
    }
}

impl Default for ModeController {
    fn default() -> Self {
        Self::new(ModeControllerConfig::DEFAULT)
    }
}
