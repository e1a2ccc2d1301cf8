mod common;

mod tests {
    use striptease_shows::{
        DEFAULT_PALETTE, Palette, PaletteCursor, PaletteError, SplitMix64,
        color::{BLACK, BLUE, CYAN, GREEN, PURPLE, RED, WHITE, YELLOW},
    };

    use super::common::ScriptedRandom;

    #[test]
    fn test_default_palette_layout() {
        assert_eq!(
            DEFAULT_PALETTE.colors(),
            &[BLACK, WHITE, RED, YELLOW, GREEN, CYAN, BLUE, PURPLE]
        );
        assert_eq!(DEFAULT_PALETTE.len(), 8);
        assert_eq!(DEFAULT_PALETTE.just_len(), 6);
        assert_eq!(DEFAULT_PALETTE.just_color(0), RED);
        assert_eq!(DEFAULT_PALETTE.just_color(5), PURPLE);
    }

    #[test]
    fn test_palette_requires_black_and_white() {
        assert_eq!(Palette::new(&[BLACK]), Err(PaletteError::TooShort));
        assert_eq!(
            Palette::new(&[WHITE, BLACK, RED]),
            Err(PaletteError::FirstNotBlack)
        );
        assert_eq!(
            Palette::new(&[BLACK, RED, WHITE]),
            Err(PaletteError::SecondNotWhite)
        );
        assert!(Palette::new(&[BLACK, WHITE, RED]).is_ok());
    }

    #[test]
    fn test_palette_requires_a_just_color() {
        assert_eq!(
            Palette::new(&[BLACK, WHITE]),
            Err(PaletteError::NoJustColors)
        );

        let palette = Palette::new(&[BLACK, WHITE, BLUE]).unwrap();
        let mut cursor = PaletteCursor::new(palette);
        assert_eq!(cursor.advance(), BLUE);
        assert_eq!(cursor.advance(), BLUE);
        assert_eq!(palette.random_just_color(&mut SplitMix64::new(7)), BLUE);
    }

    #[test]
    fn test_cursor_visits_each_just_color_once() {
        let mut cursor = PaletteCursor::new(DEFAULT_PALETTE);
        let just_len = DEFAULT_PALETTE.just_len();

        let first = cursor.advance();
        assert_eq!(first, RED);

        let mut seen = [first; 6];
        for slot in seen.iter_mut().skip(1) {
            *slot = cursor.advance();
        }
        assert_eq!(seen, [RED, YELLOW, GREEN, CYAN, BLUE, PURPLE]);

        // Call number `just_len` wraps around to the first color
        assert_eq!(cursor.advance(), first);
        assert_eq!(cursor.position(), 0);
        assert_eq!(just_len, seen.len());
    }

    #[test]
    fn test_cursors_are_independent() {
        let mut a = PaletteCursor::new(DEFAULT_PALETTE);
        let mut b = PaletteCursor::new(DEFAULT_PALETTE);

        assert_eq!(a.advance(), RED);
        assert_eq!(a.advance(), YELLOW);
        assert_eq!(b.advance(), RED);
    }

    #[test]
    fn test_random_just_color_skips_black_and_white() {
        let mut rng = SplitMix64::new(0x5eed);
        for _ in 0..2_000 {
            let color = DEFAULT_PALETTE.random_just_color(&mut rng);
            assert_ne!(color, BLACK);
            assert_ne!(color, WHITE);
        }
    }

    #[test]
    fn test_random_no_black_skips_black() {
        let mut rng = SplitMix64::new(42);
        let mut saw_white = false;
        for _ in 0..2_000 {
            let color = DEFAULT_PALETTE.random_no_black(&mut rng);
            assert_ne!(color, BLACK);
            saw_white |= color == WHITE;
        }
        assert!(saw_white);
    }

    #[test]
    fn test_random_all_reaches_every_color() {
        let mut rng = SplitMix64::new(7);
        let mut seen = [false; 8];
        for _ in 0..2_000 {
            let color = DEFAULT_PALETTE.random_all(&mut rng);
            let index = DEFAULT_PALETTE
                .colors()
                .iter()
                .position(|c| *c == color)
                .unwrap();
            seen[index] = true;
        }
        assert_eq!(seen, [true; 8]);
    }

    #[test]
    fn test_random_ranges_follow_reserved_entries() {
        // A raw value of 0 maps to the first entry of each range
        let mut rng = ScriptedRandom::new(&[0]);
        assert_eq!(DEFAULT_PALETTE.random_all(&mut rng), BLACK);
        assert_eq!(DEFAULT_PALETTE.random_no_black(&mut rng), WHITE);
        assert_eq!(DEFAULT_PALETTE.random_just_color(&mut rng), RED);
    }
}
