//! Conversion of a free-running millisecond counter into animation ticks.
//!
//! The scheduler never blocks. The caller polls it every main-loop
//! iteration and gets back how many whole tick periods elapsed since the
//! last processed boundary.

use embassy_time::Duration;

/// Default animation tick period (10 ms).
pub const DEFAULT_TICK_PERIOD: Duration = Duration::from_millis(10);

/// Fixed-period tick scheduler with catch-up.
///
/// If the main loop is delayed, a single [`TickScheduler::consume`] call
/// reports every tick that elapsed meanwhile. The boundary advances by whole
/// periods only, so the sub-period remainder is carried over instead of
/// drifting.
///
/// Until it is anchored, the scheduler takes the first `now` it sees as the
/// starting point and reports no ticks for it, so a counter that has been
/// running since boot does not count as elapsed animation time.
#[derive(Debug, Clone, Copy)]
pub struct TickScheduler {
    period_ms: u32,
    last: u32,
    anchored: bool,
}

impl TickScheduler {
    /// Create a scheduler with the given period, anchored on the first poll.
    ///
    /// Periods shorter than a millisecond are rounded up to one.
    pub fn new(period: Duration) -> Self {
        let period_ms = u32::try_from(period.as_millis()).unwrap_or(u32::MAX);
        Self {
            period_ms: period_ms.max(1),
            last: 0,
            anchored: false,
        }
    }

    /// Tick period in milliseconds
    pub const fn period_ms(&self) -> u32 {
        self.period_ms
    }

    /// Timestamp of the last processed tick boundary
    pub const fn last(&self) -> u32 {
        self.last
    }

    /// Check if a starting point has been set
    pub const fn is_anchored(&self) -> bool {
        self.anchored
    }

    /// Restart counting from `now`
    pub fn reset(&mut self, now: u32) {
        self.last = now;
        self.anchored = true;
    }

    /// Forget the starting point; the next poll sets a new one
    pub fn unanchor(&mut self) {
        self.anchored = false;
    }

    /// Consume all whole ticks elapsed up to `now`.
    ///
    /// Uses wrapping subtraction, so the counter overflowing is harmless.
    pub fn consume(&mut self, now: u32) -> u32 {
        if !self.anchored {
            self.reset(now);
            return 0;
        }
        let ticks = now.wrapping_sub(self.last) / self.period_ms;
        self.last = self.last.wrapping_add(ticks.wrapping_mul(self.period_ms));
        ticks
    }
}

impl Default for TickScheduler {
    fn default() -> Self {
        Self::new(DEFAULT_TICK_PERIOD)
    }
}
