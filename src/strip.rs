use embassy_time::{Duration, Instant};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::change_tracker::ChangeTracker;
use crate::color::Rgb;
use crate::encoder::{ChannelOrder, ProtocolEncoder};
use crate::fade::{FadeEngine, FadeStrategy, Linear};
use crate::line::PulseLine;
use crate::math8::fade_ticks;
use crate::pixel::PixelStore;
use crate::tick_scheduler::{DEFAULT_TICK_PERIOD, TickScheduler};
use crate::timing::{PulseTiming, TimingError};

/// Integrator-supplied constants of a strip
#[derive(Debug, Clone, Copy)]
pub struct StripConfig {
    /// Duration of one animation tick
    pub tick_period: Duration,
    /// Channel order expected by the strip model
    pub channel_order: ChannelOrder,
    /// Pulse widths on the data line
    pub timing: PulseTiming,
}

impl Default for StripConfig {
    fn default() -> Self {
        Self {
            tick_period: DEFAULT_TICK_PERIOD,
            channel_order: ChannelOrder::Grb,
            timing: PulseTiming::WS2811,
        }
    }
}

/// LED strip with per-pixel fades.
///
/// `N` is the maximum number of pixels, `S` the fade strategy.
///
/// # Usage
///
/// ```ignore
/// let mut strip: Strip<_, 66> = Strip::new(line, StripConfig::default())?;
/// strip.init(66);
/// strip.show();
///
/// loop {
///     strip.tick(COUNTER.now());
/// }
/// ```
pub struct Strip<L: PulseLine, const N: usize, S: FadeStrategy = Linear> {
    encoder: ProtocolEncoder<L>,
    scheduler: TickScheduler,
    engine: FadeEngine<S>,
    pixels: PixelStore<N>,
    tracker: ChangeTracker,
}

impl<L: PulseLine, const N: usize, S: FadeStrategy> Strip<L, N, S> {
    /// Create a strip on the given line with no active pixels.
    ///
    /// Fails if the configured timing cannot be produced on `line`.
    /// Call [`Strip::init`] before use.
    pub fn new(line: L, config: StripConfig) -> Result<Self, TimingError> {
        Ok(Self {
            encoder: ProtocolEncoder::new(line, config.channel_order, &config.timing)?,
            scheduler: TickScheduler::new(config.tick_period),
            engine: FadeEngine::new(),
            pixels: PixelStore::new(),
            tracker: ChangeTracker::new(),
        })
    }

    /// Activate `pixel_count` black pixels (capped at `N`) with no pending
    /// fade and nothing to transmit.
    ///
    /// Tick counting restarts from the next [`Strip::tick`] call.
    pub fn init(&mut self, pixel_count: usize) {
        self.pixels.init(pixel_count);
        self.tracker.clear();
        self.scheduler.unanchor();

        #[cfg(feature = "esp32-log")]
        println!(
            "[strip] init: {} pixels, tick {} ms",
            self.pixels.len(),
            self.scheduler.period_ms()
        );
    }

    /// Set a new target color for one pixel.
    ///
    /// The color is scaled by `brightness` (0..=1023) right away. A zero
    /// `fade_ms` assigns it immediately, anything else fades over at least
    /// one tick. An out-of-range index is ignored.
    pub fn set_pixel(&mut self, index: usize, r: u8, g: u8, b: u8, brightness: u16, fade_ms: u32) {
        let ticks = fade_ticks(fade_ms, self.scheduler.period_ms());
        let applied = self
            .pixels
            .set_target(index, Rgb { r, g, b }, brightness, ticks);
        if !applied {
            #[cfg(feature = "esp32-log")]
            println!(
                "[strip] set_pixel: index {} out of range ({})",
                index,
                self.pixels.len()
            );
            return;
        }
        self.tracker.mark();
    }

    /// Set the same target color on every pixel.
    pub fn set_all(&mut self, r: u8, g: u8, b: u8, brightness: u16, fade_ms: u32) {
        let ticks = fade_ticks(fade_ms, self.scheduler.period_ms());
        self.pixels.set_all(Rgb { r, g, b }, brightness, ticks);
        if !self.pixels.is_empty() {
            self.tracker.mark();
        }
    }

    /// Main loop step.
    ///
    /// Consumes the ticks elapsed up to `now_ms`, advances the fades and
    /// sends the strip out if anything changed or is still fading. The first
    /// call after [`Strip::init`] only sets the starting point.
    pub fn tick(&mut self, now_ms: u32) {
        let ticks = self.scheduler.consume(now_ms);
        if ticks == 0 && !self.tracker.is_dirty() {
            return;
        }

        if self.engine.advance(&mut self.pixels, ticks) {
            self.tracker.mark();
        }

        let encoder = &mut self.encoder;
        let pixels = &self.pixels;
        self.tracker.flush_with(|| encoder.transmit(pixels));
    }

    /// [`Strip::tick`] driven by an [`Instant`].
    ///
    /// Only the low 32 bits of the millisecond count are used; the scheduler
    /// handles the wrap-around.
    #[allow(clippy::cast_possible_truncation)]
    pub fn tick_at(&mut self, now: Instant) {
        self.tick(now.as_millis() as u32);
    }

    /// Transmit right away regardless of pending changes.
    pub fn show(&mut self) {
        self.encoder.transmit(&self.pixels);
        self.tracker.clear();
    }

    /// Restart tick counting from `now_ms`
    pub fn reset_clock(&mut self, now_ms: u32) {
        self.scheduler.reset(now_ms);
    }

    pub const fn pixels(&self) -> &PixelStore<N> {
        &self.pixels
    }

    /// Check if a change is waiting to be transmitted
    pub const fn is_dirty(&self) -> bool {
        self.tracker.is_dirty()
    }

    /// Check if any pixel is mid-fade
    pub fn is_animating(&self) -> bool {
        self.pixels.is_fading()
    }

    pub const fn encoder(&self) -> &ProtocolEncoder<L> {
        &self.encoder
    }

    pub fn encoder_mut(&mut self) -> &mut ProtocolEncoder<L> {
        &mut self.encoder
    }
}
