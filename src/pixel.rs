//! Per-pixel color state.
//!
//! The store is plain data: it knows how to accept a new target, but the
//! progression of a fade over time belongs to [`crate::fade`].

use heapless::Vec;

use crate::color::{Rgb, scale_color};

/// Color state of a single strip position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pixel {
    /// Color actually rendered
    pub current: Rgb,
    /// Color at the moment the current fade began
    pub start: Rgb,
    /// Destination color, already brightness-scaled
    pub target: Rgb,
    /// Ticks consumed by the current fade
    pub elapsed: u16,
    /// Length of the current fade in ticks (0 when idle)
    pub total: u16,
}

impl Pixel {
    /// Black pixel with no pending fade
    pub const fn new() -> Self {
        Self {
            current: Rgb { r: 0, g: 0, b: 0 },
            start: Rgb { r: 0, g: 0, b: 0 },
            target: Rgb { r: 0, g: 0, b: 0 },
            elapsed: 0,
            total: 0,
        }
    }

    /// Check if a fade is in progress
    pub const fn is_fading(&self) -> bool {
        self.elapsed < self.total
    }

    /// Ticks left in the current fade
    pub const fn remaining(&self) -> u16 {
        self.total.saturating_sub(self.elapsed)
    }

    /// Start a new fade towards `target`, or assign it when `ticks` is zero.
    ///
    /// A fade always starts from the currently rendered color, so redirecting
    /// a pixel mid-fade stays visually continuous.
    pub fn retarget(&mut self, target: Rgb, ticks: u16) {
        self.target = target;
        self.elapsed = 0;
        if ticks == 0 {
            self.current = target;
            self.start = target;
            self.total = 0;
        } else {
            self.start = self.current;
            self.total = ticks;
        }
    }

    /// Snap to the target and clear the fade state.
    ///
    /// Returns `true` if the rendered color changed.
    pub fn finish(&mut self) -> bool {
        let changed = self.current != self.target;
        self.current = self.target;
        self.start = self.target;
        self.elapsed = 0;
        self.total = 0;
        changed
    }
}

/// Fixed-capacity array of pixels.
///
/// `N` is the build-time capacity; [`PixelStore::init`] decides how many of
/// them are active.
#[derive(Debug, Clone, Default)]
pub struct PixelStore<const N: usize> {
    pixels: Vec<Pixel, N>,
}

impl<const N: usize> PixelStore<N> {
    /// Create an empty store
    pub const fn new() -> Self {
        Self { pixels: Vec::new() }
    }

    /// Reset the store to `count` black pixels (capped at `N`)
    pub fn init(&mut self, count: usize) {
        self.pixels.clear();
        // Cannot fail, the count is capped at the capacity
        self.pixels.resize_default(count.min(N)).ok();
    }

    /// Number of active pixels
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Get a pixel by index
    pub fn get(&self, index: usize) -> Option<&Pixel> {
        self.pixels.get(index)
    }

    /// Rendered color of a pixel, `None` for an out-of-range index
    pub fn current(&self, index: usize) -> Option<Rgb> {
        self.pixels.get(index).map(|pixel| pixel.current)
    }

    /// Iterate over the rendered colors in strip order
    pub fn colors(&self) -> impl Iterator<Item = Rgb> + '_ {
        self.pixels.iter().map(|pixel| pixel.current)
    }

    /// Check if any pixel is mid-fade
    pub fn is_fading(&self) -> bool {
        self.pixels.iter().any(Pixel::is_fading)
    }

    pub(crate) fn pixels_mut(&mut self) -> &mut [Pixel] {
        &mut self.pixels
    }

    /// Set a new brightness-scaled target for a pixel.
    ///
    /// `duration_ticks == 0` assigns the color immediately. Returns `false`
    /// and leaves the store untouched when `index` is out of range.
    pub fn set_target(
        &mut self,
        index: usize,
        color: Rgb,
        brightness: u16,
        duration_ticks: u16,
    ) -> bool {
        let Some(pixel) = self.pixels.get_mut(index) else {
            return false;
        };
        pixel.retarget(scale_color(color, brightness), duration_ticks);
        true
    }

    /// Set the same target on every active pixel
    pub fn set_all(&mut self, color: Rgb, brightness: u16, duration_ticks: u16) {
        let target = scale_color(color, brightness);
        for pixel in &mut self.pixels {
            pixel.retarget(target, duration_ticks);
        }
    }
}
