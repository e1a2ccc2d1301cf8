#![no_std]

mod logging;

pub mod color;
pub mod context;
pub mod device;
pub mod mode_controller;
pub mod output;
pub mod random;
pub mod show;
pub mod showcase;
pub mod signal;

pub use color::{DEFAULT_PALETTE, Palette, PaletteCursor, PaletteError, Rgb};
pub use context::ShowContext;
pub use device::LedBuffer;
pub use mode_controller::{ModeController, ModeControllerConfig};
pub use output::SmartLedsOutput;
pub use random::{RandomSource, SplitMix64};
pub use show::{FillAndClear, FillSolid, LightShow, Show, ShowKind, Sparkle, Sweeper};
pub use showcase::{Mode, ModeTable, Showcase, ShowcaseConfig, Target};
pub use signal::{CancellationSignal, Interrupted, ShowResult};

pub use embassy_time::{Duration, Instant};

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// Writes are fire-and-forget: the shows have no way to react to a failed
/// transmission.
pub trait OutputDriver {
    /// Write colors to the LED device
    fn write(&mut self, colors: &[Rgb]);
}

impl<D: OutputDriver + ?Sized> OutputDriver for &mut D {
    fn write(&mut self, colors: &[Rgb]) {
        (**self).write(colors);
    }
}
