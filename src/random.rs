//! Random number source consumed by the shows
//!
//! Seeding is left to the firmware: on hardware the seed usually comes from
//! the noise of a floating analog pin or a hardware RNG.

/// Source of uniformly distributed integers
pub trait RandomSource {
    /// Sample an integer in `[min, max_exclusive)`
    fn uniform(&mut self, min: u32, max_exclusive: u32) -> u32;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn uniform(&mut self, min: u32, max_exclusive: u32) -> u32 {
        (**self).uniform(min, max_exclusive)
    }
}

/// Small, fast SplitMix64 generator
///
/// Not cryptographically secure. Good enough to pick sparkle colors.
#[derive(Debug, Clone)]
pub struct SplitMix64 {
    state: u64,
}

impl SplitMix64 {
    /// Create a generator from a seed
    pub const fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Produce the next raw 64-bit value
    pub fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9e37_79b9_7f4a_7c15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
        z ^ (z >> 31)
    }
}

impl RandomSource for SplitMix64 {
    #[allow(clippy::cast_possible_truncation)]
    fn uniform(&mut self, min: u32, max_exclusive: u32) -> u32 {
        if max_exclusive <= min {
            return min;
        }
        let span = u64::from(max_exclusive - min);
        min + (self.next_u64() % span) as u32
    }
}
