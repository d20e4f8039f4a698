//! Pulse timing constants and clock calibration.
//!
//! The protocol is open-loop, so the only protection against corrupted
//! frames is checking the numbers here before the strip is driven.

use core::fmt;

/// Shortest accepted high time of a "0" bit.
pub const T0H_MIN_NS: u32 = 250;
/// Longest accepted high time of a "0" bit.
pub const T0H_MAX_NS: u32 = 400;
/// Shortest accepted high time of a "1" bit.
pub const T1H_MIN_NS: u32 = 580;
/// Longest accepted high time of a "1" bit.
pub const T1H_MAX_NS: u32 = 1000;
/// Shortest low time that still separates two bits.
pub const TL_MIN_NS: u32 = 200;
/// Shortest low hold the driver chips treat as reset/latch.
pub const RESET_MIN_US: u32 = 280;

const NANOS_PER_SECOND: u64 = 1_000_000_000;

/// Error reported by the configuration-time timing checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimingError {
    /// High time of a "0" bit is outside its window
    ZeroHigh(u32),
    /// High time of a "1" bit is outside its window
    OneHigh(u32),
    /// A low time is too short to separate bits
    LowTooShort(u32),
    /// Reset hold is shorter than the latch threshold
    ResetTooShort(u32),
    /// Clock frequency of zero
    ZeroClock,
}

impl fmt::Display for TimingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroHigh(ns) => write!(
                f,
                "0-bit high time {ns} ns outside {T0H_MIN_NS}..={T0H_MAX_NS} ns"
            ),
            Self::OneHigh(ns) => write!(
                f,
                "1-bit high time {ns} ns outside {T1H_MIN_NS}..={T1H_MAX_NS} ns"
            ),
            Self::LowTooShort(ns) => write!(f, "low time {ns} ns below {TL_MIN_NS} ns"),
            Self::ResetTooShort(us) => {
                write!(f, "reset hold {us} us below {RESET_MIN_US} us")
            }
            Self::ZeroClock => write!(f, "clock frequency is zero"),
        }
    }
}

/// Nominal pulse widths of the single-wire protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PulseTiming {
    /// High time of a "0" bit
    pub t0h_ns: u32,
    /// Low time of a "0" bit
    pub t0l_ns: u32,
    /// High time of a "1" bit
    pub t1h_ns: u32,
    /// Low time of a "1" bit
    pub t1l_ns: u32,
    /// Low hold before a frame
    pub reset_us: u32,
}

impl PulseTiming {
    /// WS2811/WS2812 timing with margin on every bound.
    pub const WS2811: Self = Self {
        t0h_ns: 300,
        t0l_ns: 900,
        t1h_ns: 800,
        t1l_ns: 450,
        reset_us: 300,
    };

    /// Check every width against the protocol windows.
    pub const fn validate(&self) -> Result<(), TimingError> {
        if self.t0h_ns < T0H_MIN_NS || self.t0h_ns > T0H_MAX_NS {
            return Err(TimingError::ZeroHigh(self.t0h_ns));
        }
        if self.t1h_ns < T1H_MIN_NS || self.t1h_ns > T1H_MAX_NS {
            return Err(TimingError::OneHigh(self.t1h_ns));
        }
        if self.t0l_ns < TL_MIN_NS {
            return Err(TimingError::LowTooShort(self.t0l_ns));
        }
        if self.t1l_ns < TL_MIN_NS {
            return Err(TimingError::LowTooShort(self.t1l_ns));
        }
        if self.reset_us < RESET_MIN_US {
            return Err(TimingError::ResetTooShort(self.reset_us));
        }
        Ok(())
    }

    /// Reset hold in nanoseconds
    pub const fn reset_ns(&self) -> u32 {
        self.reset_us.saturating_mul(1000)
    }
}

impl Default for PulseTiming {
    fn default() -> Self {
        Self::WS2811
    }
}

/// Conversion between nanoseconds and busy-wait cycles for one clock.
///
/// `overhead_cycles` is the cost of toggling the pin and entering the spin
/// loop; it is subtracted from every hold so that the pulse seen on the wire
/// matches the requested width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Calibration {
    clock_hz: u32,
    overhead_cycles: u32,
}

impl Calibration {
    pub const fn new(clock_hz: u32, overhead_cycles: u32) -> Result<Self, TimingError> {
        if clock_hz == 0 {
            return Err(TimingError::ZeroClock);
        }
        Ok(Self {
            clock_hz,
            overhead_cycles,
        })
    }

    pub const fn clock_hz(&self) -> u32 {
        self.clock_hz
    }

    pub const fn overhead_cycles(&self) -> u32 {
        self.overhead_cycles
    }

    /// Spin cycles needed to hold a level for `nanos`.
    ///
    /// Rounds up, then removes the fixed overhead.
    #[allow(clippy::cast_possible_truncation)]
    pub const fn cycles(&self, nanos: u32) -> u32 {
        let total = (nanos as u64 * self.clock_hz as u64).div_ceil(NANOS_PER_SECOND);
        let total = if total > u32::MAX as u64 {
            u32::MAX
        } else {
            total as u32
        };
        total.saturating_sub(self.overhead_cycles)
    }

    /// Width actually produced on the wire for a requested `nanos`.
    #[allow(clippy::cast_possible_truncation)]
    pub const fn realized_nanos(&self, nanos: u32) -> u32 {
        let cycles = self.cycles(nanos) as u64 + self.overhead_cycles as u64;
        let realized = cycles * NANOS_PER_SECOND / self.clock_hz as u64;
        if realized > u32::MAX as u64 {
            u32::MAX
        } else {
            realized as u32
        }
    }

    /// Check that `timing`, once quantized to this clock, still meets the
    /// protocol windows.
    pub const fn check(&self, timing: &PulseTiming) -> Result<(), TimingError> {
        if let Err(err) = timing.validate() {
            return Err(err);
        }
        let realized = PulseTiming {
            t0h_ns: self.realized_nanos(timing.t0h_ns),
            t0l_ns: self.realized_nanos(timing.t0l_ns),
            t1h_ns: self.realized_nanos(timing.t1h_ns),
            t1l_ns: self.realized_nanos(timing.t1l_ns),
            reset_us: timing.reset_us,
        };
        realized.validate()
    }
}
