//! Fade engine with interchangeable interpolation strategies.
//!
//! Both strategies arrive exactly at the target after the requested number
//! of ticks, however those ticks are batched:
//! - [`Linear`] jumps straight to the new elapsed position
//! - [`EaseOut`] replays its single-tick step once per elapsed tick

use core::marker::PhantomData;

use crate::color::Rgb;
use crate::math8::{lerp8, step_towards};
use crate::pixel::{Pixel, PixelStore};

/// Interpolation policy used by the [`FadeEngine`].
pub trait FadeStrategy {
    /// Advance a single pixel by `ticks`.
    ///
    /// Returns `true` if the pixel was mid-fade, i.e. its rendered color
    /// has to be sent out again.
    fn advance(pixel: &mut Pixel, ticks: u16) -> bool;
}

/// Duration-fraction strategy.
///
/// `current = start + (target - start) * elapsed / total`, an exactly linear
/// path in elapsed time that accepts multi-tick jumps.
#[derive(Debug, Clone, Copy, Default)]
pub struct Linear;

impl FadeStrategy for Linear {
    fn advance(pixel: &mut Pixel, ticks: u16) -> bool {
        if !pixel.is_fading() {
            return false;
        }

        pixel.elapsed = pixel.elapsed.saturating_add(ticks).min(pixel.total);
        if pixel.is_fading() {
            let (elapsed, total) = (pixel.elapsed, pixel.total);
            pixel.current = Rgb {
                r: lerp8(pixel.start.r, pixel.target.r, elapsed, total),
                g: lerp8(pixel.start.g, pixel.target.g, elapsed, total),
                b: lerp8(pixel.start.b, pixel.target.b, elapsed, total),
            };
        } else {
            pixel.finish();
        }
        true
    }
}

/// Remaining-step strategy.
///
/// Every tick moves each channel by `(target - current) / remaining`, at least
/// one unit. The velocity is recomputed from the live error, so movement is
/// fast early and slows towards the end.
#[derive(Debug, Clone, Copy, Default)]
pub struct EaseOut;

impl FadeStrategy for EaseOut {
    fn advance(pixel: &mut Pixel, ticks: u16) -> bool {
        if !pixel.is_fading() {
            return false;
        }

        for _ in 0..ticks.min(pixel.remaining()) {
            let remaining = pixel.remaining();
            pixel.current = Rgb {
                r: step_towards(pixel.current.r, pixel.target.r, remaining),
                g: step_towards(pixel.current.g, pixel.target.g, remaining),
                b: step_towards(pixel.current.b, pixel.target.b, remaining),
            };
            pixel.elapsed += 1;
        }

        if !pixel.is_fading() {
            pixel.finish();
        }
        true
    }
}

/// Advances every pixel of a store using the strategy `S`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FadeEngine<S: FadeStrategy = Linear> {
    strategy: PhantomData<S>,
}

impl<S: FadeStrategy> FadeEngine<S> {
    pub const fn new() -> Self {
        Self {
            strategy: PhantomData,
        }
    }

    /// Advance all pixels by `ticks` elapsed ticks.
    ///
    /// Returns `true` if any pixel was animating, i.e. the frame is dirty.
    pub fn advance<const N: usize>(&self, store: &mut PixelStore<N>, ticks: u32) -> bool {
        if ticks == 0 {
            return false;
        }
        let ticks = u16::try_from(ticks).unwrap_or(u16::MAX);

        let mut changed = false;
        for pixel in store.pixels_mut() {
            changed |= S::advance(pixel, ticks);
        }
        changed
    }
}
