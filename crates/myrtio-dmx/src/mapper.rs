//! DMX pixel mapper
//!
//! Pretends a strip of DMX fixtures is an addressable LED strip. The mapper:
//! - Validates the layout and allocates the pixel buffer
//! - Enables the transport and clears the addressable channels
//! - Exposes per-pixel setters (RGB, HSV, white)
//! - Flattens the buffer into channel writes on [`DmxPixelMapper::render`]
//! - Clears and disables the transport on teardown
//!
//! Uninitialized mappers accept every call and do nothing.

use log::{debug, info, warn};

use crate::buffer::{Pixel, PixelBuffer};
use crate::color::{ChannelTable, Rgb};
use crate::error::DmxError;
use crate::layout::DmxParameters;
use crate::transport::DmxTransport;

/// State that only exists between a successful initialization and teardown
struct Session {
    params: DmxParameters,
    table: ChannelTable,
    pixels: PixelBuffer,
}

/// DMX lights control
///
/// Generic over `T: DmxTransport` to support different bus backends.
pub struct DmxPixelMapper<T: DmxTransport> {
    /// Bus driver
    transport: T,
    /// Active layout and pixels
    session: Option<Session>,
}

impl<T: DmxTransport> DmxPixelMapper<T> {
    /// Create an uninitialized mapper
    pub const fn new(transport: T) -> Self {
        Self {
            transport,
            session: None,
        }
    }

    /// Initialize lights
    ///
    /// Must succeed before any other call has an effect. Re-initializing
    /// tears down the current session first. Invalid parameters are rejected
    /// before anything is touched.
    pub fn initialize(&mut self, params: &DmxParameters) -> Result<(), DmxError> {
        params.validate()?;

        self.shutdown();

        let pixels = PixelBuffer::new(usize::from(params.num_leds))?;
        let table = params.color_order.channel_table();

        if !params.fits() {
            warn!(
                "dmx: last channel {} exceeds max channel {}",
                params.last_channel(),
                params.max_channels
            );
        }

        // Enable and clear all channels
        self.transport.enable();
        self.transport
            .set_channel_range(params.clear_start(), params.clear_count(), 0);

        info!(
            "dmx: initialized {} lights, order {}, {} channels per light, offset {}",
            params.num_leds, params.color_order, params.channels_per_light, params.channel_offset
        );

        self.session = Some(Session {
            params: *params,
            table,
            pixels,
        });

        Ok(())
    }

    /// Clear all channels and disable the transport
    ///
    /// Does nothing when not initialized.
    pub fn shutdown(&mut self) {
        if let Some(session) = self.session.take() {
            let params = session.params;
            self.transport
                .set_channel_range(params.clear_start(), params.clear_count(), 0);
            self.transport.disable();
            debug!("dmx: transport disabled");
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.session.is_some()
    }

    /// Parameters of the active session
    pub fn parameters(&self) -> Option<&DmxParameters> {
        self.session.as_ref().map(|session| &session.params)
    }

    /// Channel table of the active session
    pub fn channel_table(&self) -> Option<ChannelTable> {
        self.session.as_ref().map(|session| session.table)
    }

    /// Get the number of pixels in strip
    pub fn num_pixels(&self) -> usize {
        self.session
            .as_ref()
            .map_or(0, |session| session.pixels.len())
    }

    pub fn pixel(&self, index: usize) -> Pixel {
        self.session
            .as_ref()
            .map(|session| session.pixels.get(index))
            .unwrap_or_default()
    }

    pub fn color(&self, index: usize) -> Rgb {
        self.pixel(index).color
    }

    pub fn white(&self, index: usize) -> u8 {
        self.pixel(index).white
    }

    pub fn set_color(&mut self, index: usize, color: Rgb, white: u8) {
        if let Some(pixels) = self.pixels_mut() {
            pixels.set_color(index, color, white);
        }
    }

    pub fn set_rgb(&mut self, index: usize, r: u8, g: u8, b: u8, white: u8) {
        if let Some(pixels) = self.pixels_mut() {
            pixels.set_rgb(index, r, g, b, white);
        }
    }

    pub fn set_hsv(&mut self, index: usize, hue: u8, sat: u8, val: u8, white: u8) {
        if let Some(pixels) = self.pixels_mut() {
            pixels.set_hsv(index, hue, sat, val, white);
        }
    }

    pub fn set_all(&mut self, r: u8, g: u8, b: u8, white: u8) {
        if let Some(pixels) = self.pixels_mut() {
            pixels.set_all(r, g, b, white);
        }
    }

    /// Write every pixel to the transport
    ///
    /// Pixel `i` lands on `offset + channels_per_light * i + position`, with
    /// positions taken from the color order table. Channels are not checked
    /// against `max_channels`.
    pub fn render(&mut self) {
        let Some(session) = &self.session else {
            return;
        };
        let table = session.table;

        for (index, pixel) in session.pixels.iter().enumerate() {
            let base = session.params.channel_base(index);
            write_channel(&mut self.transport, base + usize::from(table.red()), pixel.color.r);
            write_channel(&mut self.transport, base + usize::from(table.green()), pixel.color.g);
            write_channel(&mut self.transport, base + usize::from(table.blue()), pixel.color.b);
            write_channel(&mut self.transport, base + usize::from(table.white()), pixel.white);
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    fn pixels_mut(&mut self) -> Option<&mut PixelBuffer> {
        self.session.as_mut().map(|session| &mut session.pixels)
    }
}

impl<T: DmxTransport> Drop for DmxPixelMapper<T> {
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// Channels that do not fit a DMX address are dropped
#[inline]
fn write_channel<T: DmxTransport>(transport: &mut T, channel: usize, value: u8) {
    if let Ok(channel) = u16::try_from(channel) {
        transport.set_channel_value(channel, value);
    }
}
