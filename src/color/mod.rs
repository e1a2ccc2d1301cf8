mod palette;

pub use palette::{DEFAULT_PALETTE, Palette, PaletteCursor, PaletteError};
use smart_leds::RGB8;

pub type Rgb = RGB8;

/// Create an RGB color from a u32 value (0xRRGGBB format)
#[allow(clippy::cast_possible_truncation)]
pub const fn rgb_from_u32(color: u32) -> Rgb {
    Rgb {
        r: ((color >> 16) & 0xFF) as u8,
        g: ((color >> 8) & 0xFF) as u8,
        b: (color & 0xFF) as u8,
    }
}

// Named colors, using the FastLED values the shows were tuned with.
pub const BLACK: Rgb = rgb_from_u32(0x00_0000);
pub const WHITE: Rgb = rgb_from_u32(0xFF_FFFF);
pub const RED: Rgb = rgb_from_u32(0xFF_0000);
pub const YELLOW: Rgb = rgb_from_u32(0xFF_FF00);
pub const GREEN: Rgb = rgb_from_u32(0x00_8000);
pub const CYAN: Rgb = rgb_from_u32(0x00_FFFF);
pub const BLUE: Rgb = rgb_from_u32(0x00_00FF);
pub const PURPLE: Rgb = rgb_from_u32(0x80_0080);
pub const DARK_BLUE: Rgb = rgb_from_u32(0x00_008B);
