//! Mode dispatch over a strip and a ring
//!
//! The showcase is the outer loop of the firmware. Each epoch clears the
//! cancellation signal, looks up the selected mode, resets both devices and
//! plays that mode until it finishes or the mode button is pressed again.

use embassy_time::Duration;
use embedded_hal::delay::DelayNs;
use heapless::Vec;

use crate::color::{BLACK, BLUE, DARK_BLUE, DEFAULT_PALETTE, Palette, PaletteCursor, RED, Rgb, WHITE, YELLOW};
use crate::context::ShowContext;
use crate::device::LedBuffer;
use crate::logging::{debug, info};
use crate::mode_controller::ModeController;
use crate::random::RandomSource;
use crate::show::{FillSolid, LightShow, Show, ShowKind, Sparkle, Sweeper};
use crate::signal::ShowResult;
use crate::OutputDriver;

/// Maximum number of entries in a mode table
pub const MAX_MODE_SLOTS: usize = 16;

/// How long the `Off` mode idles before the next epoch
pub const DEFAULT_OFF_HOLD: Duration = Duration::from_millis(1000);

/// How long `FlashAll` keeps each color
pub const DEFAULT_FLASH_HOLD: Duration = Duration::from_millis(1000);

const MODE_NAME_OFF: &str = "off";
const MODE_NAME_INFINITE_SWEEP: &str = "infinite_sweep";
const MODE_NAME_FLASH_ALL: &str = "flash_all";

/// Mode table indexed by the mode controller
pub type ModeTable = Vec<Mode, MAX_MODE_SLOTS>;

/// Device a mode plays on
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Target {
    Strip,
    Ring,
}

/// Something the showcase can play for a mode index
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// All devices dark
    Off,
    /// Fill and clear with the next palette color on every run
    FillSolid(Target),
    /// Finite sweeps, with the next palette color on every run
    Sweeper {
        target: Target,
        pixels: usize,
        cycles: i32,
    },
    /// Endless sweep with fixed colors
    InfiniteSweep {
        target: Target,
        foreground: Rgb,
        background: Rgb,
        pixels: usize,
    },
    /// Random sparkles
    Sparkle(Target),
    /// Both devices flash through the palette together
    FlashAll,
}

impl Mode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Off => MODE_NAME_OFF,
            Self::FillSolid(_) => ShowKind::FillSolid.as_str(),
            Self::Sweeper { .. } => ShowKind::Sweeper.as_str(),
            Self::InfiniteSweep { .. } => MODE_NAME_INFINITE_SWEEP,
            Self::Sparkle(_) => ShowKind::Sparkle.as_str(),
            Self::FlashAll => MODE_NAME_FLASH_ALL,
        }
    }
}

const DEFAULT_MODES: [Mode; 10] = [
    Mode::Off,
    Mode::FillSolid(Target::Strip),
    Mode::FillSolid(Target::Ring),
    Mode::Sweeper {
        target: Target::Strip,
        pixels: 10,
        cycles: 4,
    },
    Mode::InfiniteSweep {
        target: Target::Strip,
        foreground: RED,
        background: DARK_BLUE,
        pixels: 10,
    },
    Mode::Sweeper {
        target: Target::Ring,
        pixels: 3,
        cycles: 4,
    },
    Mode::InfiniteSweep {
        target: Target::Ring,
        foreground: BLUE,
        background: YELLOW,
        pixels: 3,
    },
    Mode::Sparkle(Target::Strip),
    Mode::Sparkle(Target::Ring),
    Mode::FlashAll,
];

/// The ten built-in modes, in button order
pub fn default_modes() -> ModeTable {
    let mut modes = ModeTable::new();
    for mode in DEFAULT_MODES {
        let _ = modes.push(mode);
    }
    modes
}

/// Configuration for the showcase
#[derive(Debug, Clone)]
pub struct ShowcaseConfig {
    /// Modes by index; indices past the end play [`Mode::FlashAll`]
    pub modes: ModeTable,
    pub off_hold: Duration,
    pub flash_hold: Duration,
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        Self {
            modes: default_modes(),
            off_hold: DEFAULT_OFF_HOLD,
            flash_hold: DEFAULT_FLASH_HOLD,
        }
    }
}

/// Borrow the device for `$target` together with the show context
macro_rules! on_target {
    ($showcase:ident, $target:expr, |$device:ident, $ctx:ident| $body:expr) => {
        match $target {
            Target::Strip => {
                let $device = &mut $showcase.strip;
                let $ctx = &mut $showcase.context;
                $body
            }
            Target::Ring => {
                let $device = &mut $showcase.ring;
                let $ctx = &mut $showcase.context;
                $body
            }
        }
    };
}

/// Scheduler that plays the selected mode on a strip and a ring
pub struct Showcase<'a, S, G, T, R, const STRIP: usize, const RING: usize> {
    strip: LedBuffer<S, STRIP>,
    ring: LedBuffer<G, RING>,
    context: ShowContext<'a, T, R>,
    controller: &'a ModeController,
    palette: Palette<'a>,
    config: ShowcaseConfig,
    last_mode: Option<u8>,
}

impl<'a, S, G, T, R, const STRIP: usize, const RING: usize> Showcase<'a, S, G, T, R, STRIP, RING>
where
    S: OutputDriver,
    G: OutputDriver,
    T: DelayNs,
    R: RandomSource,
{
    pub fn new(
        strip: LedBuffer<S, STRIP>,
        ring: LedBuffer<G, RING>,
        controller: &'a ModeController,
        delay: T,
        rng: R,
        config: ShowcaseConfig,
    ) -> Self {
        Self {
            strip,
            ring,
            context: ShowContext::new(delay, rng, controller.signal()),
            controller,
            palette: DEFAULT_PALETTE,
            config,
            last_mode: None,
        }
    }

    /// Use a custom palette for cycling and sparkle colors
    #[must_use]
    pub fn with_palette(mut self, palette: Palette<'a>) -> Self {
        self.palette = palette;
        self
    }

    /// Play modes forever
    pub fn run(&mut self) -> ! {
        loop {
            let _ = self.run_epoch();
        }
    }

    /// Play the currently selected mode once
    ///
    /// Returns `Err(Interrupted)` if the mode button ended the epoch.
    pub fn run_epoch(&mut self) -> ShowResult {
        self.context.signal().clear();

        let index = self.controller.current_mode();
        let mode = self.mode_at(index);
        if self.last_mode != Some(index) {
            info!("New mode: {} ({})", index, mode.as_str());
            self.last_mode = Some(index);
        }

        self.clear_all();

        let result = self.perform(mode);
        if result.is_err() {
            debug!("mode {} interrupted", index);
        }
        result
    }

    /// Mode played for `index`
    pub fn mode_at(&self, index: u8) -> Mode {
        self.config
            .modes
            .get(usize::from(index))
            .copied()
            .unwrap_or(Mode::FlashAll)
    }

    /// Turn both devices off
    pub fn clear_all(&mut self) {
        self.strip.clear();
        self.strip.flush();

        self.ring.clear();
        self.ring.flush();
    }

    fn perform(&mut self, mode: Mode) -> ShowResult {
        let palette = self.palette;
        match mode {
            Mode::Off => {
                self.context.hold(self.config.off_hold);
                Ok(())
            }
            Mode::FillSolid(target) => on_target!(self, target, |device, ctx| {
                device.set_background(BLACK);
                let show = LightShow::FillSolid(FillSolid::new(WHITE, BLACK));
                repeat(show, device, ctx, Some(PaletteCursor::new(palette)))
            }),
            Mode::Sweeper {
                target,
                pixels,
                cycles,
            } => on_target!(self, target, |device, ctx| {
                device.set_background(BLACK);
                let sweeper = Sweeper::new().with_pixel_count(pixels).with_cycles(cycles);
                repeat(
                    LightShow::Sweeper(sweeper),
                    device,
                    ctx,
                    Some(PaletteCursor::new(palette)),
                )
            }),
            Mode::InfiniteSweep {
                target,
                foreground,
                background,
                pixels,
            } => on_target!(self, target, |device, ctx| {
                device.set_background(background);
                device.set_foreground(foreground);
                let sweeper = Sweeper::new().with_pixel_count(pixels).with_cycles(0);
                repeat(LightShow::Sweeper(sweeper), device, ctx, None)
            }),
            Mode::Sparkle(target) => on_target!(self, target, |device, ctx| {
                repeat(LightShow::Sparkle(Sparkle::new(palette)), device, ctx, None)
            }),
            Mode::FlashAll => self.flash_all(),
        }
    }

    fn flash_all(&mut self) -> ShowResult {
        let mut cursor = PaletteCursor::new(self.palette);
        loop {
            let color = cursor.advance();

            self.ring.fill_all(color);
            self.ring.flush();

            self.strip.fill_all(color);
            self.strip.flush();

            self.context.checkpoint()?;
            self.context.pause(self.config.flash_hold)?;
        }
    }

    pub fn strip(&self) -> &LedBuffer<S, STRIP> {
        &self.strip
    }

    pub fn ring(&self) -> &LedBuffer<G, RING> {
        &self.ring
    }

    pub fn strip_mut(&mut self) -> &mut LedBuffer<S, STRIP> {
        &mut self.strip
    }

    pub fn ring_mut(&mut self) -> &mut LedBuffer<G, RING> {
        &mut self.ring
    }

    pub fn context_mut(&mut self) -> &mut ShowContext<'a, T, R> {
        &mut self.context
    }
}

/// Run `show` back to back until the mode changes
///
/// With a cursor, the show gets the next palette color before every run.
fn repeat<D, T, R, const N: usize>(
    mut show: LightShow<'_, N>,
    device: &mut LedBuffer<D, N>,
    ctx: &mut ShowContext<'_, T, R>,
    mut cursor: Option<PaletteCursor<'_>>,
) -> ShowResult
where
    D: OutputDriver,
    T: DelayNs,
    R: RandomSource,
{
    loop {
        if let Some(cursor) = cursor.as_mut() {
            show.recolor(cursor.advance(), device);
        }
        debug!("running {}", show.kind().as_str());

        show.run(device, ctx)?;
        ctx.checkpoint()?;
    }
}
