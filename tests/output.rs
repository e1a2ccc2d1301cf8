mod tests {
    use smart_leds::{RGB8, SmartLedsWrite};
    use striptease_shows::{
        LedBuffer, SmartLedsOutput,
        color::{BLUE, RED},
    };

    /// Writer that records what it was sent and always reports failure
    #[derive(Default)]
    struct FlakyWriter {
        writes: usize,
        last: heapless::Vec<RGB8, 8>,
    }

    impl SmartLedsWrite for FlakyWriter {
        type Error = ();
        type Color = RGB8;

        fn write<T, I>(&mut self, iterator: T) -> Result<(), Self::Error>
        where
            T: IntoIterator<Item = I>,
            I: Into<Self::Color>,
        {
            self.writes += 1;
            self.last.clear();
            for color in iterator {
                let _ = self.last.push(color.into());
            }
            Err(())
        }
    }

    #[test]
    fn test_flush_goes_through_smart_leds_writer() {
        let mut device: LedBuffer<_, 3> =
            LedBuffer::new(SmartLedsOutput::new(FlakyWriter::default()));
        device.fill_all(BLUE);
        device.set_cell(1, RED);
        device.flush();
        device.flush();

        let writer = device.driver().inner();
        assert_eq!(writer.writes, 2);
        assert_eq!(writer.last.as_slice(), &[BLUE, RED, BLUE]);
    }
}
