//! Integer helpers for brightness scaling and fade interpolation.
//!
//! Everything here works on 8-bit channels with 16/32-bit intermediates,
//! so it stays cheap on small cores without an FPU.

/// Largest meaningful value of the 10-bit logical brightness.
pub const BRIGHTNESS_MAX: u16 = 1023;

/// Scale a channel by a 10-bit brightness.
///
/// The product is shifted right by 10, i.e. divided by 1024, so full
/// brightness (1023) maps 255 to 254. Results above 255 (brightness values
/// outside the logical range) are clamped.
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub const fn scale_brightness(channel: u8, brightness: u16) -> u8 {
    let scaled = (channel as u32 * brightness as u32) >> 10;
    if scaled > 255 { 255 } else { scaled as u8 }
}

/// Move `current` one ease-out step towards `target`.
///
/// The step is the remaining distance divided by the remaining ticks,
/// truncated toward zero, but never less than one unit while the channel
/// is still off target. With `remaining == 0` the target is returned.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub const fn step_towards(current: u8, target: u8, remaining: u16) -> u8 {
    if remaining == 0 {
        return target;
    }
    let diff = target as i32 - current as i32;
    if diff == 0 {
        return target;
    }

    let mut step = diff / remaining as i32;
    if step == 0 {
        step = if diff > 0 { 1 } else { -1 };
    }

    (current as i32 + step) as u8
}

/// Linear interpolation between `start` and `target` at `elapsed / total`.
///
/// Returns `target` once `elapsed` reaches `total`.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub const fn lerp8(start: u8, target: u8, elapsed: u16, total: u16) -> u8 {
    if elapsed >= total {
        return target;
    }
    let diff = target as i32 - start as i32;
    let value = start as i32 + (diff * elapsed as i32) / total as i32;

    if value < 0 {
        0
    } else if value > 255 {
        255
    } else {
        value as u8
    }
}

/// Convert a fade duration in milliseconds to a number of ticks.
///
/// Zero stays zero (an immediate assignment). Any other duration rounds
/// down to whole ticks but never below one, and saturates at `u16::MAX`.
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub const fn fade_ticks(fade_ms: u32, period_ms: u32) -> u16 {
    if fade_ms == 0 {
        return 0;
    }
    let period = if period_ms == 0 { 1 } else { period_ms };
    let ticks = fade_ms / period;
    if ticks == 0 {
        1
    } else if ticks > u16::MAX as u32 {
        u16::MAX
    } else {
        ticks as u16
    }
}
