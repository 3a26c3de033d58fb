//! DMX transport abstraction layer
//!
//! Provides a trait-based abstraction for DMX bus drivers,
//! allowing the pixel mapper to be hardware-agnostic.
//!
//! Channels are numbered from 1 as on the wire; slot 0 of a frame is the
//! start code.

/// Null start code for dimmer data
pub const DMX_NULL_START: u8 = 0x00;
/// Highest channel of a DMX512 universe
pub const DMX_MAX_CHANNELS: u16 = 512;
/// Start code + 512 channel slots
pub const DMX_MAX_PACKAGE_SIZE: usize = DMX_MAX_CHANNELS as usize + 1;

pub const DMX_BAUD: u32 = 250_000;
pub const BREAK_MICROS: u32 = 200;
pub const MAB_MICROS: u32 = 48;

/// Abstract DMX bus driver trait
///
/// Implement this trait to support different hardware platforms.
/// The mapper is generic over this trait and never checks whether a write
/// was accepted.
pub trait DmxTransport {
    /// Start driving the bus
    fn enable(&mut self);

    /// Stop driving the bus
    fn disable(&mut self);

    /// Set `count` consecutive channels starting at `start` to `value`
    fn set_channel_range(&mut self, start: u16, count: u16, value: u8);

    /// Set a single channel
    fn set_channel_value(&mut self, channel: u16, value: u8);
}

/// In-memory DMX512 universe
///
/// Keeps the frame that a bus driver clocks out. Writes outside
/// `1..=512` are ignored.
#[derive(Clone)]
pub struct DmxUniverse {
    frame: [u8; DMX_MAX_PACKAGE_SIZE],
    enabled: bool,
}

impl Default for DmxUniverse {
    fn default() -> Self {
        Self::new()
    }
}

impl DmxUniverse {
    pub const fn new() -> Self {
        let mut frame = [0; DMX_MAX_PACKAGE_SIZE];
        frame[0] = DMX_NULL_START;
        Self {
            frame,
            enabled: false,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Value of a channel, 0 outside the universe
    pub fn channel(&self, channel: u16) -> u8 {
        if channel == 0 {
            return 0;
        }
        self.frame.get(usize::from(channel)).copied().unwrap_or(0)
    }

    /// Channel values without the start code
    pub fn channels(&self) -> &[u8] {
        &self.frame[1..]
    }

    /// Start code followed by every channel, as sent after the break
    pub fn frame(&self) -> &[u8; DMX_MAX_PACKAGE_SIZE] {
        &self.frame
    }
}

impl DmxTransport for DmxUniverse {
    fn enable(&mut self) {
        self.enabled = true;
    }

    fn disable(&mut self) {
        self.enabled = false;
    }

    fn set_channel_range(&mut self, start: u16, count: u16, value: u8) {
        let end = (usize::from(start) + usize::from(count)).min(DMX_MAX_PACKAGE_SIZE);
        // Slot 0 holds the start code
        let start = usize::from(start.max(1));
        if start < end {
            self.frame[start..end].fill(value);
        }
    }

    fn set_channel_value(&mut self, channel: u16, value: u8) {
        if channel == 0 {
            return;
        }
        if let Some(slot) = self.frame.get_mut(usize::from(channel)) {
            *slot = value;
        }
    }
}
