//! Pixel storage
//!
//! Holds a color and a separate white intensity for each pixel. Indices
//! past the end are ignored on write and read back as black.

use alloc::vec::Vec;

use crate::color::{Rgb, rgb_from_hsv};
use crate::error::DmxError;

/// Single pixel state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Pixel {
    pub color: Rgb,
    pub white: u8,
}

impl Pixel {
    pub const fn new(color: Rgb, white: u8) -> Self {
        Self { color, white }
    }

    pub const fn from_rgbw(r: u8, g: u8, b: u8, white: u8) -> Self {
        Self {
            color: Rgb { r, g, b },
            white,
        }
    }
}

/// Fixed size pixel buffer
#[derive(Debug, Clone, Default)]
pub struct PixelBuffer {
    pixels: Vec<Pixel>,
}

impl PixelBuffer {
    /// Allocate a zeroed buffer for `count` pixels
    ///
    /// Fails with [`DmxError::AllocationFailure`] when the allocator cannot
    /// provide the storage.
    pub fn new(count: usize) -> Result<Self, DmxError> {
        let mut pixels = Vec::new();
        pixels
            .try_reserve_exact(count)
            .map_err(|_| DmxError::AllocationFailure)?;
        pixels.resize(count, Pixel::default());

        Ok(Self { pixels })
    }

    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Get pixel state, black when out of range
    pub fn get(&self, index: usize) -> Pixel {
        self.pixels.get(index).copied().unwrap_or_default()
    }

    /// Get pixel color, black when out of range
    pub fn color(&self, index: usize) -> Rgb {
        self.get(index).color
    }

    /// Get pixel white value, 0 when out of range
    pub fn white(&self, index: usize) -> u8 {
        self.get(index).white
    }

    /// Set pixel color and white value
    pub fn set_color(&mut self, index: usize, color: Rgb, white: u8) {
        if let Some(pixel) = self.pixels.get_mut(index) {
            *pixel = Pixel::new(color, white);
        }
    }

    /// Set pixel red, green, blue and white values
    pub fn set_rgb(&mut self, index: usize, r: u8, g: u8, b: u8, white: u8) {
        self.set_color(index, Rgb { r, g, b }, white);
    }

    /// Set pixel hue, saturation and value
    pub fn set_hsv(&mut self, index: usize, hue: u8, sat: u8, val: u8, white: u8) {
        if index < self.pixels.len() {
            self.set_color(index, rgb_from_hsv(hue, sat, val), white);
        }
    }

    /// Set all pixels to the same red, green, blue and white values
    pub fn set_all(&mut self, r: u8, g: u8, b: u8, white: u8) {
        self.pixels.fill(Pixel::from_rgbw(r, g, b, white));
    }

    pub fn iter(&self) -> impl Iterator<Item = &Pixel> {
        self.pixels.iter()
    }
}
