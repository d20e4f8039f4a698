//! Bit-level encoder for the single-wire WS2811/WS2812 protocol.
//!
//! Every bit is a high pulse followed by a low pulse; the width of the high
//! pulse tells the driver chip whether it is a 0 or a 1. A frame starts with
//! a low hold long enough to be taken as reset/latch.

use core::convert::Infallible;

use smart_leds::SmartLedsWrite;

use crate::color::Rgb;
use crate::line::{Level, PulseLine};
use crate::pixel::PixelStore;
use crate::timing::{PulseTiming, TimingError};

/// Order in which the three channels of a pixel go out on the wire.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ChannelOrder {
    Rgb,
    Rbg,
    /// Most common order for WS2812-class strips
    #[default]
    Grb,
    Gbr,
    Brg,
    Bgr,
}

impl ChannelOrder {
    /// Lay out a color in transmission order
    pub const fn arrange(self, color: Rgb) -> [u8; 3] {
        let Rgb { r, g, b } = color;
        match self {
            Self::Rgb => [r, g, b],
            Self::Rbg => [r, b, g],
            Self::Grb => [g, r, b],
            Self::Gbr => [g, b, r],
            Self::Brg => [b, r, g],
            Self::Bgr => [b, g, r],
        }
    }
}

/// Pulse widths converted once to the line's native unit.
#[derive(Debug, Clone, Copy)]
struct BitSpans<S: Copy> {
    t0h: S,
    t0l: S,
    t1h: S,
    t1l: S,
    reset: S,
}

/// Serializes pixels onto a [`PulseLine`].
pub struct ProtocolEncoder<L: PulseLine> {
    line: L,
    order: ChannelOrder,
    spans: BitSpans<L::Span>,
}

impl<L: PulseLine> ProtocolEncoder<L> {
    /// Create an encoder, rejecting `timing` if `line` cannot produce it.
    pub fn new(line: L, order: ChannelOrder, timing: &PulseTiming) -> Result<Self, TimingError> {
        line.check(timing)?;
        let spans = BitSpans {
            t0h: line.span(timing.t0h_ns),
            t0l: line.span(timing.t0l_ns),
            t1h: line.span(timing.t1h_ns),
            t1l: line.span(timing.t1l_ns),
            reset: line.span(timing.reset_ns()),
        };
        Ok(Self { line, order, spans })
    }

    pub const fn order(&self) -> ChannelOrder {
        self.order
    }

    pub fn set_order(&mut self, order: ChannelOrder) {
        self.order = order;
    }

    pub const fn line(&self) -> &L {
        &self.line
    }

    pub fn line_mut(&mut self) -> &mut L {
        &mut self.line
    }

    pub fn into_line(self) -> L {
        self.line
    }

    /// Send every active pixel of the store.
    pub fn transmit<const N: usize>(&mut self, pixels: &PixelStore<N>) {
        self.write_frame(pixels.colors());
    }

    /// Send a full frame: reset hold, then all colors in order.
    ///
    /// Runs with interrupts masked. A gap longer than the bit tolerance is
    /// indistinguishable from a reset and would corrupt the rest of the
    /// chain. The previous interrupt state is restored afterwards.
    pub fn write_frame(&mut self, colors: impl IntoIterator<Item = Rgb>) {
        critical_section::with(|_| {
            self.latch();
            for color in colors {
                for byte in self.order.arrange(color) {
                    self.write_byte(byte);
                }
            }
        });
    }

    /// Hold the line low long enough for the chips to latch
    fn latch(&mut self) {
        self.line.hold(Level::Low, self.spans.reset);
    }

    /// Shift out one byte, most significant bit first
    fn write_byte(&mut self, mut byte: u8) {
        for _ in 0..8 {
            if byte & 0x80 != 0 {
                self.line.hold(Level::High, self.spans.t1h);
                self.line.hold(Level::Low, self.spans.t1l);
            } else {
                self.line.hold(Level::High, self.spans.t0h);
                self.line.hold(Level::Low, self.spans.t0l);
            }
            byte <<= 1;
        }
    }
}

impl<L: PulseLine> SmartLedsWrite for ProtocolEncoder<L> {
    type Error = Infallible;
    type Color = Rgb;

    fn write<T, I>(&mut self, iterator: T) -> Result<(), Self::Error>
    where
        T: IntoIterator<Item = I>,
        I: Into<Self::Color>,
    {
        self.write_frame(iterator.into_iter().map(Into::into));
        Ok(())
    }
}
