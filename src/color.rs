use smart_leds::RGB8;

use crate::math8::scale_brightness;

pub type Rgb = RGB8;

/// Apply a 10-bit brightness to every channel of a color.
pub const fn scale_color(color: Rgb, brightness: u16) -> Rgb {
    Rgb {
        r: scale_brightness(color.r, brightness),
        g: scale_brightness(color.g, brightness),
        b: scale_brightness(color.b, brightness),
    }
}
