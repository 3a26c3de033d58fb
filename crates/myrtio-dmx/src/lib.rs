#![no_std]

//! DMX pixel bridge
//!
//! Lets a strip of DMX fixtures be driven like an addressable LED strip.
//!
//! Architecture layers:
//! - `color` - RGB/HSV types and the channel order of a fixture
//! - `buffer` - Pixel storage (color + white per pixel)
//! - `layout` - Initialization parameters and channel address math
//! - `transport` - Bus abstraction ([`DmxTransport`] trait + in-memory universe)
//! - `mapper` - Owns a session and flattens pixels into channel writes
//! - `animation` - Proximity driven hue animation state
//! - `sensor` - Ultrasonic proximity sensor over `embedded-hal`
//!
//! The mapper is generic over `DmxTransport`, allowing different bus backends.

extern crate alloc;

pub mod animation;
pub mod buffer;
pub mod color;
pub mod error;
pub mod layout;
pub mod mapper;
pub mod sensor;
pub mod transport;

pub use animation::{HueChannel, ProximityHueState};
pub use buffer::{Pixel, PixelBuffer};
pub use color::{ChannelTable, ColorOrder, Hsv, Rgb};
pub use error::DmxError;
pub use layout::DmxParameters;
pub use mapper::DmxPixelMapper;
pub use sensor::{ProximitySensor, SensorError};
pub use transport::{DmxTransport, DmxUniverse};
