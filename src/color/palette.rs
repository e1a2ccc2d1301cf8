//! Curated color palette and color selection policies
//!
//! The palette is an ordered list of visually distinct colors. The first two
//! entries are always Black and White, which lets callers pick from the whole
//! palette, everything but Black, or only the "just colors" after both.

use core::fmt;

use super::{BLACK, BLUE, CYAN, GREEN, PURPLE, RED, Rgb, WHITE, YELLOW};
use crate::random::RandomSource;

/// Number of reserved entries (Black, White) at the start of every palette
const RESERVED: usize = 2;

const DEFAULT_COLORS: [Rgb; 8] = [BLACK, WHITE, RED, YELLOW, GREEN, CYAN, BLUE, PURPLE];

/// Palette used by the built-in shows
pub const DEFAULT_PALETTE: Palette<'static> = match Palette::new(&DEFAULT_COLORS) {
    Ok(palette) => palette,
    Err(_) => panic!("default palette must start with black and white"),
};

/// Reasons a color list cannot be used as a palette
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteError {
    /// Fewer than the two reserved entries
    TooShort,
    /// Entry 0 is not Black
    FirstNotBlack,
    /// Entry 1 is not White
    SecondNotWhite,
    /// Nothing after Black and White, so there is no color to show
    NoJustColors,
}

impl fmt::Display for PaletteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooShort => f.write_str("palette needs at least black and white"),
            Self::FirstNotBlack => f.write_str("palette entry 0 must be black"),
            Self::SecondNotWhite => f.write_str("palette entry 1 must be white"),
            Self::NoJustColors => f.write_str("palette needs a color besides black and white"),
        }
    }
}

/// Immutable, shareable color palette
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette<'a> {
    colors: &'a [Rgb],
}

const fn same_color(a: Rgb, b: Rgb) -> bool {
    a.r == b.r && a.g == b.g && a.b == b.b
}

#[allow(clippy::cast_possible_truncation)]
impl<'a> Palette<'a> {
    /// Create a palette from a color list
    ///
    /// The list must start with Black followed by White and hold at least
    /// one more color.
    pub const fn new(colors: &'a [Rgb]) -> Result<Self, PaletteError> {
        if colors.len() < RESERVED {
            return Err(PaletteError::TooShort);
        }
        if !same_color(colors[0], BLACK) {
            return Err(PaletteError::FirstNotBlack);
        }
        if !same_color(colors[1], WHITE) {
            return Err(PaletteError::SecondNotWhite);
        }
        if colors.len() == RESERVED {
            return Err(PaletteError::NoJustColors);
        }
        Ok(Self { colors })
    }

    /// All colors, including Black and White
    pub const fn colors(&self) -> &'a [Rgb] {
        self.colors
    }

    /// Number of colors in the palette
    pub const fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always `false`: a palette holds at least Black and White
    pub const fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Number of colors that are neither Black nor White
    pub const fn just_len(&self) -> usize {
        self.colors.len() - RESERVED
    }

    /// Get a color from the just-colors range
    ///
    /// `offset` must be below [`Self::just_len`].
    pub const fn just_color(&self, offset: usize) -> Rgb {
        self.colors[offset + RESERVED]
    }

    /// Pick any palette color, Black and White included
    pub fn random_all(&self, rng: &mut impl RandomSource) -> Rgb {
        self.pick_from(0, rng)
    }

    /// Pick any palette color except Black
    pub fn random_no_black(&self, rng: &mut impl RandomSource) -> Rgb {
        self.pick_from(1, rng)
    }

    /// Pick a color that is neither Black nor White
    pub fn random_just_color(&self, rng: &mut impl RandomSource) -> Rgb {
        self.pick_from(RESERVED, rng)
    }

    fn pick_from(&self, first: usize, rng: &mut impl RandomSource) -> Rgb {
        let index = rng.uniform(first as u32, self.colors.len() as u32);
        self.colors[index as usize]
    }
}

impl Default for Palette<'static> {
    fn default() -> Self {
        DEFAULT_PALETTE
    }
}

/// Deterministic walk over the just colors of a palette
///
/// Each owner keeps its own cursor, so two cursors over the same palette
/// never affect each other.
#[derive(Debug, Clone, Copy)]
pub struct PaletteCursor<'a> {
    palette: Palette<'a>,
    position: usize,
}

impl<'a> PaletteCursor<'a> {
    /// Create a cursor whose first [`Self::advance`] yields the first just color
    pub const fn new(palette: Palette<'a>) -> Self {
        Self {
            palette,
            position: palette.just_len().saturating_sub(1),
        }
    }

    /// Current offset into the just-colors range
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Step to the next just color, wrapping after the last one
    pub fn advance(&mut self) -> Rgb {
        self.position += 1;
        if self.position >= self.palette.just_len() {
            self.position = 0;
        }
        self.palette.just_color(self.position)
    }
}
