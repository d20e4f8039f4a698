//! Single GPIO data line driven with calibrated holds.

use embedded_hal::digital::OutputPin;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::timing::{Calibration, PulseTiming, TimingError};

/// Logic level of the data line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Low,
    High,
}

/// A data line that can hold a level for a calibrated amount of time.
///
/// The conversion from nanoseconds to the line's own unit happens once, in
/// [`PulseLine::span`], so that [`PulseLine::hold`] does no arithmetic while
/// bits are being shifted out.
pub trait PulseLine {
    /// Precomputed hold duration in the line's native unit
    type Span: Copy;

    /// Convert a duration in nanoseconds to a span
    fn span(&self, nanos: u32) -> Self::Span;

    /// Drive `level` and keep it for `span`
    fn hold(&mut self, level: Level, span: Self::Span);

    /// Check that `timing` can be produced on this line
    fn check(&self, timing: &PulseTiming) -> Result<(), TimingError> {
        timing.validate()
    }
}

/// Busy-wait for a number of core clock cycles.
///
/// Implemented for closures, so a target can pass its spin primitive
/// directly, e.g. `cortex_m::asm::delay`.
pub trait CycleSpin {
    fn spin(&mut self, cycles: u32);
}

impl<F: FnMut(u32)> CycleSpin for F {
    fn spin(&mut self, cycles: u32) {
        (*self)(cycles);
    }
}

/// Bit-banged line on a push-pull output pin.
pub struct GpioLine<P: OutputPin, S: CycleSpin> {
    pin: P,
    spin: S,
    calibration: Calibration,
}

impl<P: OutputPin, S: CycleSpin> GpioLine<P, S> {
    /// Take over the pin and drive it low.
    pub fn new(mut pin: P, spin: S, calibration: Calibration) -> Self {
        // Pin errors cannot be reported on an open-loop line
        pin.set_low().ok();

        #[cfg(feature = "esp32-log")]
        println!(
            "[line] calibrated for {} Hz, {} overhead cycles",
            calibration.clock_hz(),
            calibration.overhead_cycles()
        );
        Self {
            pin,
            spin,
            calibration,
        }
    }

    pub const fn calibration(&self) -> &Calibration {
        &self.calibration
    }

    /// Give the pin and spin primitive back
    pub fn release(self) -> (P, S) {
        (self.pin, self.spin)
    }
}

impl<P: OutputPin, S: CycleSpin> PulseLine for GpioLine<P, S> {
    type Span = u32;

    fn span(&self, nanos: u32) -> u32 {
        self.calibration.cycles(nanos)
    }

    /// Checks the widths after quantization to the calibrated clock
    fn check(&self, timing: &PulseTiming) -> Result<(), TimingError> {
        self.calibration.check(timing)
    }

    #[inline]
    fn hold(&mut self, level: Level, cycles: u32) {
        match level {
            Level::High => self.pin.set_high().ok(),
            Level::Low => self.pin.set_low().ok(),
        };
        self.spin.spin(cycles);
    }
}
