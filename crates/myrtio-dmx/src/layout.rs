//! DMX layout parameters
//!
//! Each pixel maps onto a fixture occupying `channels_per_light` channels,
//! starting right after `channel_offset`. Only the first four channels of a
//! block are written (R, G, B, W in the configured order).
//!
//! Example with 10 channels per light and no offset:
//! - Channel 1 is red of the first lamp, 2 green, 3 blue, 4 white
//! - Channel 11 is red of the second lamp, 12 green, 13 blue, 14 white
//! - Channel 21 is red of the third lamp, and so on

use crate::color::ColorOrder;
use crate::error::DmxError;
use crate::transport::DMX_MAX_CHANNELS;

/// Number of logical channels every fixture must provide (R, G, B, W)
pub const CHANNELS_PER_PIXEL: u16 = 4;

/// Parameters for a DMX light strip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DmxParameters {
    /// Bus driver output pin
    pub pin: u8,
    /// Number of lights (pixels) to control
    pub num_leds: u16,
    /// Color channel order
    pub color_order: ColorOrder,
    /// Number of channels per light, at least [`CHANNELS_PER_PIXEL`]
    pub channels_per_light: u16,
    /// Offset all channel values by this amount
    pub channel_offset: u16,
    /// Highest channel value. Leave at 512 for DMX512
    pub max_channels: u16,
}

impl Default for DmxParameters {
    fn default() -> Self {
        Self::new()
    }
}

impl DmxParameters {
    pub const fn new() -> Self {
        Self {
            pin: 2,
            num_leds: 0,
            color_order: ColorOrder::Rgb,
            channels_per_light: CHANNELS_PER_PIXEL,
            channel_offset: 0,
            max_channels: DMX_MAX_CHANNELS,
        }
    }

    /// Check the parameters can describe at least one fixture
    pub const fn validate(&self) -> Result<(), DmxError> {
        if self.num_leds < 1 || self.channels_per_light < CHANNELS_PER_PIXEL {
            return Err(DmxError::BadInput);
        }
        Ok(())
    }

    /// Channel right before the first channel of a pixel's block
    ///
    /// Channel positions from the color table (1..=4) are added to this.
    pub const fn channel_base(&self, pixel: usize) -> usize {
        self.channel_offset as usize + self.channels_per_light as usize * pixel
    }

    /// Highest channel written by a render
    pub const fn last_channel(&self) -> usize {
        if self.num_leds == 0 {
            return 0;
        }
        self.channel_base(self.num_leds as usize - 1) + CHANNELS_PER_PIXEL as usize
    }

    /// Whether every rendered channel is within `max_channels`
    pub const fn fits(&self) -> bool {
        self.last_channel() <= self.max_channels as usize
    }

    /// First channel cleared on enable and teardown
    pub const fn clear_start(&self) -> u16 {
        self.channel_offset.saturating_add(1)
    }

    /// Number of channels cleared on enable and teardown
    pub const fn clear_count(&self) -> u16 {
        self.max_channels.saturating_sub(self.channel_offset)
    }
}
