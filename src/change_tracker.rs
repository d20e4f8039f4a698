/// Tracks whether the strip needs to be sent out again.
///
/// The flag is set by any target change and by any fade progress, and it is
/// cleared only after a transmission has been issued.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChangeTracker {
    dirty: bool,
}

impl ChangeTracker {
    pub const fn new() -> Self {
        Self { dirty: false }
    }

    /// Record a pending visual change
    pub fn mark(&mut self) {
        self.dirty = true;
    }

    /// Check if there is a change not yet transmitted
    pub const fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Run `transmit` if dirty, clearing the flag once it returns.
    ///
    /// Returns `true` if a transmission was issued.
    pub fn flush_with(&mut self, transmit: impl FnOnce()) -> bool {
        if !self.dirty {
            return false;
        }
        transmit();
        self.dirty = false;
        true
    }

    /// Forget any pending change
    pub fn clear(&mut self) {
        self.dirty = false;
    }
}
