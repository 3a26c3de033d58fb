//! Proximity driven hue animation
//!
//! Two hues drift inside their own ranges: a hue rises while its sensor sees
//! nothing close, and falls back while someone stands in front of it.
//! Even pixels show the first hue, odd pixels the second.

use crate::mapper::DmxPixelMapper;
use crate::transport::DmxTransport;

/// Default hue change per frame
pub const DEFAULT_HUE_STEP: u8 = 3;

/// A hue bounded to `[min, max]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HueChannel {
    pub hue: u8,
    pub min: u8,
    pub max: u8,
    /// Hue change per frame
    pub step: u8,
}

impl HueChannel {
    pub const fn new(hue: u8, min: u8, max: u8) -> Self {
        Self {
            hue,
            min,
            max,
            step: DEFAULT_HUE_STEP,
        }
    }

    pub const fn with_step(self, step: u8) -> Self {
        Self { step, ..self }
    }

    /// Move the hue by `step` and clamp it to the range
    pub fn step_towards(&mut self, increase: bool) {
        let hue = if increase {
            self.hue.saturating_add(self.step)
        } else {
            self.hue.saturating_sub(self.step)
        };
        self.hue = hue.clamp(self.min, self.max.max(self.min));
    }
}

/// Animation state for the two-sensor installation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProximityHueState {
    pub hues: [HueChannel; 2],
    /// Distances at or beyond this (cm) count as "nobody there"
    pub threshold_cm: u16,
}

impl Default for ProximityHueState {
    fn default() -> Self {
        Self::new()
    }
}

impl ProximityHueState {
    pub const fn new() -> Self {
        Self {
            hues: [HueChannel::new(110, 100, 135), HueChannel::new(200, 171, 215)],
            threshold_cm: 50,
        }
    }

    /// Advance both hues from the latest sensor distances
    pub fn update(&mut self, distances_cm: [u16; 2]) {
        for (channel, distance) in self.hues.iter_mut().zip(distances_cm) {
            channel.step_towards(distance >= self.threshold_cm);
        }
    }

    /// Current hue of each channel
    pub fn hues(&self) -> [u8; 2] {
        [self.hues[0].hue, self.hues[1].hue]
    }

    /// Paint alternating pixels with the two hues at full saturation and value
    pub fn apply<T: DmxTransport>(&self, mapper: &mut DmxPixelMapper<T>) {
        for index in 0..mapper.num_pixels() {
            let hue = self.hues[index % 2].hue;
            mapper.set_hsv(index, hue, 255, 255, 0);
        }
    }
}

/// Per-frame update: advance the hues and repaint the strip
pub fn update_frame<T: DmxTransport>(
    state: &mut ProximityHueState,
    distances_cm: [u16; 2],
    mapper: &mut DmxPixelMapper<T>,
) {
    state.update(distances_cm);
    state.apply(mapper);
    mapper.render();
}
