//! Millisecond counter shared with the timer interrupt.
//!
//! The counter is wider than the atomic access size of small cores, so reads
//! from the main loop take a snapshot inside a critical section to avoid
//! observing a half-updated value.

use core::cell::Cell;

use critical_section::Mutex;

/// Free-running millisecond counter.
///
/// Incremented by a fixed-period timer interrupt, read by the main loop.
/// Wraps around after `u32::MAX` milliseconds; consumers must use wrapping
/// subtraction.
pub struct TickCounter {
    millis: Mutex<Cell<u32>>,
}

impl TickCounter {
    /// Create a counter starting at zero.
    pub const fn new() -> Self {
        Self {
            millis: Mutex::new(Cell::new(0)),
        }
    }

    /// Advance the counter by one millisecond.
    ///
    /// Call this from the timer interrupt.
    pub fn increment(&self) {
        self.advance(1);
    }

    /// Advance the counter by `millis` milliseconds.
    pub fn advance(&self, millis: u32) {
        critical_section::with(|cs| {
            let counter = self.millis.borrow(cs);
            counter.set(counter.get().wrapping_add(millis));
        });
    }

    /// Take a consistent snapshot of the counter.
    pub fn now(&self) -> u32 {
        critical_section::with(|cs| self.millis.borrow(cs).get())
    }
}

impl Default for TickCounter {
    fn default() -> Self {
        Self::new()
    }
}
