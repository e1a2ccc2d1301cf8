//! In-memory LED buffer for a single physical device

use crate::OutputDriver;
use crate::color::{BLACK, CYAN, Rgb, YELLOW};

/// Fixed-size LED buffer bound to a device driver
///
/// Index 0 is the entry point of the device: forward shifts push content
/// from index 0 towards `N - 1`.
#[derive(Debug)]
pub struct LedBuffer<D, const N: usize> {
    cells: [Rgb; N],
    foreground: Rgb,
    background: Rgb,
    driver: D,
}

impl<D: OutputDriver, const N: usize> LedBuffer<D, N> {
    /// Create a black buffer with yellow foreground and cyan background
    pub const fn new(driver: D) -> Self {
        Self {
            cells: [BLACK; N],
            foreground: YELLOW,
            background: CYAN,
            driver,
        }
    }

    /// Number of LEDs in the device
    pub const fn len(&self) -> usize {
        N
    }

    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Current cell colors
    pub fn cells(&self) -> &[Rgb; N] {
        &self.cells
    }

    /// Set a single LED
    ///
    /// `index` must be below `N`.
    pub fn set_cell(&mut self, index: usize, color: Rgb) {
        self.cells[index] = color;
    }

    /// Set every LED to `color`
    pub fn fill_all(&mut self, color: Rgb) {
        self.cells.fill(color);
    }

    /// Move every color one LED up, entering background at index 0
    pub fn shift_forward(&mut self) {
        if N == 0 {
            return;
        }
        self.cells.copy_within(..N - 1, 1);
        self.cells[0] = self.background;
    }

    /// Move every color one LED down, entering background at index `N - 1`
    pub fn shift_backward(&mut self) {
        if N == 0 {
            return;
        }
        self.cells.copy_within(1.., 0);
        self.cells[N - 1] = self.background;
    }

    /// Send the buffer to the device
    pub fn flush(&mut self) {
        self.driver.write(&self.cells);
    }

    pub const fn foreground(&self) -> Rgb {
        self.foreground
    }

    pub const fn background(&self) -> Rgb {
        self.background
    }

    /// Set the default foreground; cells are left untouched
    pub fn set_foreground(&mut self, color: Rgb) {
        self.foreground = color;
    }

    /// Set the default background; cells are left untouched
    pub fn set_background(&mut self, color: Rgb) {
        self.background = color;
    }

    pub fn fill_foreground(&mut self) {
        self.fill_all(self.foreground);
    }

    pub fn fill_background(&mut self) {
        self.fill_all(self.background);
    }

    /// Fill with the foreground color and flush
    pub fn show_foreground(&mut self) {
        self.fill_foreground();
        self.flush();
    }

    /// Fill with the background color and flush
    pub fn show_background(&mut self) {
        self.fill_background();
        self.flush();
    }

    /// Turn every LED off; call [`Self::flush`] to apply
    pub fn clear(&mut self) {
        self.fill_all(BLACK);
    }

    pub fn driver(&self) -> &D {
        &self.driver
    }

    pub fn driver_mut(&mut self) -> &mut D {
        &mut self.driver
    }
}
