#![no_std]

pub mod change_tracker;
pub mod color;
pub mod encoder;
pub mod fade;
pub mod line;
pub mod math8;
pub mod pixel;
pub mod strip;
pub mod tick_counter;
pub mod tick_scheduler;
pub mod timing;

pub use change_tracker::ChangeTracker;
pub use encoder::{ChannelOrder, ProtocolEncoder};
pub use fade::{EaseOut, FadeEngine, FadeStrategy, Linear};
pub use line::{CycleSpin, GpioLine, Level, PulseLine};
pub use pixel::{Pixel, PixelStore};
pub use strip::{Strip, StripConfig};
pub use tick_counter::TickCounter;
pub use tick_scheduler::TickScheduler;
pub use timing::{Calibration, PulseTiming, TimingError};

pub use color::Rgb;
pub use math8::BRIGHTNESS_MAX;
pub use embassy_time::{Duration, Instant};
