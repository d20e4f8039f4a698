#![allow(dead_code)]

use ws2811_fader::timing::{RESET_MIN_US, T0H_MAX_NS, T1H_MIN_NS};
use ws2811_fader::{Level, PulseLine};

/// Line that records every hold instead of driving a pin.
///
/// Spans are plain nanoseconds.
#[derive(Debug, Default)]
pub struct RecordingLine {
    pub pulses: Vec<(Level, u32)>,
}

impl PulseLine for RecordingLine {
    type Span = u32;

    fn span(&self, nanos: u32) -> u32 {
        nanos
    }

    fn hold(&mut self, level: Level, span: u32) {
        self.pulses.push((level, span));
    }
}

impl RecordingLine {
    /// Decode the recorded pulses into frames of bytes
    pub fn frames(&self) -> Vec<Vec<u8>> {
        let mut frames: Vec<Vec<u8>> = Vec::new();
        let mut byte = 0u8;
        let mut bits = 0;

        for &(level, nanos) in &self.pulses {
            match level {
                Level::Low if nanos >= RESET_MIN_US * 1000 => {
                    frames.push(Vec::new());
                    byte = 0;
                    bits = 0;
                }
                Level::Low => {}
                Level::High => {
                    let bit = if nanos >= T1H_MIN_NS {
                        1
                    } else {
                        assert!(nanos <= T0H_MAX_NS, "ambiguous high pulse {nanos} ns");
                        0
                    };
                    byte = (byte << 1) | bit;
                    bits += 1;
                    if bits == 8 {
                        frames
                            .last_mut()
                            .expect("data before reset hold")
                            .push(byte);
                        byte = 0;
                        bits = 0;
                    }
                }
            }
        }
        frames
    }

    pub fn frame_count(&self) -> usize {
        self.frames().len()
    }

    pub fn last_frame(&self) -> Vec<u8> {
        self.frames().pop().unwrap_or_default()
    }
}
