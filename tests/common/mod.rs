//! Shared test doubles for the integration tests

#![allow(dead_code)] // Each test file uses a different subset

use embedded_hal::delay::DelayNs;
use striptease_shows::{CancellationSignal, OutputDriver, RandomSource, Rgb};

/// Largest frame a recording driver keeps
pub const MAX_RECORDED_LEDS: usize = 32;

/// Driver that counts flushes and keeps the last frame
#[derive(Debug, Default)]
pub struct RecordingDriver {
    pub flushes: usize,
    pub last_frame: heapless::Vec<Rgb, MAX_RECORDED_LEDS>,
}

impl RecordingDriver {
    pub fn new() -> Self {
        Self::default()
    }
}

impl OutputDriver for RecordingDriver {
    fn write(&mut self, colors: &[Rgb]) {
        self.flushes += 1;
        self.last_frame.clear();
        for color in colors {
            let _ = self.last_frame.push(*color);
        }
    }
}

/// Delay that returns immediately and can raise the signal after N delays
pub struct ScriptedDelay<'a> {
    signal: &'a CancellationSignal,
    raise_after: Option<usize>,
    pub calls: usize,
    pub total_ms: u64,
}

impl<'a> ScriptedDelay<'a> {
    /// Never raises the signal
    pub fn new(signal: &'a CancellationSignal) -> Self {
        Self {
            signal,
            raise_after: None,
            calls: 0,
            total_ms: 0,
        }
    }

    /// Raises the signal during the `calls`-th delay
    pub fn raising_after(signal: &'a CancellationSignal, calls: usize) -> Self {
        Self {
            raise_after: Some(calls),
            ..Self::new(signal)
        }
    }

    fn record(&mut self, ms: u64) {
        self.calls += 1;
        self.total_ms += ms;
        if self.raise_after.is_some_and(|after| self.calls >= after) {
            self.signal.raise();
        }
    }
}

impl DelayNs for ScriptedDelay<'_> {
    fn delay_ns(&mut self, ns: u32) {
        self.record(u64::from(ns) / 1_000_000);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.record(u64::from(ms));
    }
}

/// Random source replaying a fixed list of raw values
///
/// Each raw value is folded into the requested range.
pub struct ScriptedRandom<'a> {
    values: &'a [u32],
    next: usize,
}

impl<'a> ScriptedRandom<'a> {
    pub fn new(values: &'a [u32]) -> Self {
        Self { values, next: 0 }
    }

    pub fn consumed(&self) -> usize {
        self.next
    }
}

impl RandomSource for ScriptedRandom<'_> {
    fn uniform(&mut self, min: u32, max_exclusive: u32) -> u32 {
        let raw = self.values[self.next % self.values.len()];
        self.next += 1;
        min + raw % (max_exclusive - min)
    }
}
