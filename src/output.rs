//! Bridge to `smart-leds` drivers

use smart_leds::SmartLedsWrite;

use crate::{OutputDriver, color::Rgb};

/// Output driver backed by any [`SmartLedsWrite`] implementation
///
/// Transmission errors are dropped: a failed frame is simply replaced by the
/// next flush.
#[derive(Debug)]
pub struct SmartLedsOutput<W> {
    inner: W,
}

impl<W> SmartLedsOutput<W> {
    pub const fn new(inner: W) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &W {
        &self.inner
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W> OutputDriver for SmartLedsOutput<W>
where
    W: SmartLedsWrite,
    W::Color: From<Rgb>,
{
    fn write(&mut self, colors: &[Rgb]) {
        let _ = self.inner.write(colors.iter().copied());
    }
}
