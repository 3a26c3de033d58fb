mod order;

use smart_leds::RGB8;
use smart_leds::hsv::Hsv as HSV;

pub use order::{ChannelTable, ColorOrder, ParseColorOrderError};
pub use smart_leds::hsv::hsv2rgb;

pub type Rgb = RGB8;
pub type Hsv = HSV;

/// Convert 8-bit hue, saturation and value into an RGB color
#[inline]
pub fn rgb_from_hsv(hue: u8, sat: u8, val: u8) -> Rgb {
    hsv2rgb(Hsv { hue, sat, val })
}
