//! Channel order of a DMX fixture
//!
//! Fixtures disagree on which of their channels carries red, green, blue and
//! white. A [`ChannelTable`] stores, for each logical slot, the 1-based
//! position of that slot within the fixture's channel block.

use core::fmt;
use core::str::FromStr;

/// Order of DMX color channels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum ColorOrder {
    /// Order [R, G, B]
    #[default]
    Rgb = 0,
    /// Order [R, B, G]
    Rbg,
    /// Order [G, R, B]
    Grb,
    /// Order [G, B, R], wired as [B, R, G]
    Gbr,
    /// Order [B, R, G], wired as [G, B, R]
    Brg,
    /// Order [B, G, R]
    Bgr,

    /// Order [R, G, B, W]
    Rgbw,
    /// Order [R, B, G, W]
    Rbgw,
    /// Order [G, R, B, W]
    Grbw,
    /// Order [G, B, R, W], wired as [B, R, G, W]
    Gbrw,
    /// Order [B, R, G, W], wired as [G, B, R, W]
    Brgw,
    /// Order [B, G, R, W]
    Bgrw,

    /// Order [W, R, G, B]
    Wrgb,
    /// Order [W, R, B, G]
    Wrbg,
    /// Order [W, G, R, B]
    Wgrb,
    /// Order [W, G, B, R], wired as [W, B, R, G]
    Wgbr,
    /// Order [W, B, R, G], wired as [W, G, B, R]
    Wbrg,
    /// Order [W, B, G, R]
    Wbgr,
}

impl ColorOrder {
    /// All orders, indexed by their selector value
    pub const ALL: [ColorOrder; 18] = [
        ColorOrder::Rgb,
        ColorOrder::Rbg,
        ColorOrder::Grb,
        ColorOrder::Gbr,
        ColorOrder::Brg,
        ColorOrder::Bgr,
        ColorOrder::Rgbw,
        ColorOrder::Rbgw,
        ColorOrder::Grbw,
        ColorOrder::Gbrw,
        ColorOrder::Brgw,
        ColorOrder::Bgrw,
        ColorOrder::Wrgb,
        ColorOrder::Wrbg,
        ColorOrder::Wgrb,
        ColorOrder::Wgbr,
        ColorOrder::Wbrg,
        ColorOrder::Wbgr,
    ];

    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    pub const fn from_u8(value: u8) -> Option<Self> {
        if (value as usize) < Self::ALL.len() {
            Some(Self::ALL[value as usize])
        } else {
            None
        }
    }

    /// Lowercase name of the order, e.g. `"grbw"`
    pub const fn name(self) -> &'static str {
        match self {
            ColorOrder::Rgb => "rgb",
            ColorOrder::Rbg => "rbg",
            ColorOrder::Grb => "grb",
            ColorOrder::Gbr => "gbr",
            ColorOrder::Brg => "brg",
            ColorOrder::Bgr => "bgr",
            ColorOrder::Rgbw => "rgbw",
            ColorOrder::Rbgw => "rbgw",
            ColorOrder::Grbw => "grbw",
            ColorOrder::Gbrw => "gbrw",
            ColorOrder::Brgw => "brgw",
            ColorOrder::Bgrw => "bgrw",
            ColorOrder::Wrgb => "wrgb",
            ColorOrder::Wrbg => "wrbg",
            ColorOrder::Wgrb => "wgrb",
            ColorOrder::Wgbr => "wgbr",
            ColorOrder::Wbrg => "wbrg",
            ColorOrder::Wbgr => "wbgr",
        }
    }

    /// Resolve the channel position of each color slot
    pub const fn channel_table(self) -> ChannelTable {
        ChannelTable::from_selector(self.as_u8())
    }
}

impl fmt::Display for ColorOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unknown color order name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseColorOrderError;

impl fmt::Display for ParseColorOrderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown color order")
    }
}

impl FromStr for ColorOrder {
    type Err = ParseColorOrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|order| order.name().eq_ignore_ascii_case(s))
            .ok_or(ParseColorOrderError)
    }
}

/// 1-based channel position of the R, G, B and W slots within a fixture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelTable([u8; 4]);

impl Default for ChannelTable {
    fn default() -> Self {
        Self::RGBW
    }
}

impl ChannelTable {
    /// Red, green, blue, then white
    pub const RGBW: ChannelTable = ChannelTable([1, 2, 3, 4]);

    /// Resolve a raw color order selector
    ///
    /// Selectors are the [`ColorOrder`] discriminants. Values outside the
    /// known orders fall back to RGBW.
    pub const fn from_selector(selector: u8) -> Self {
        let positions = match selector {
            // RGB, RGBW
            0 | 6 => [1, 2, 3, 4],
            // RBG, RBGW
            1 | 7 => [1, 3, 2, 4],
            // GRB, GRBW
            2 | 8 => [2, 1, 3, 4],
            // GBR, GBRW
            3 | 9 => [2, 3, 1, 4],
            // BRG, BRGW
            4 | 10 => [3, 1, 2, 4],
            // BGR, BGRW
            5 | 11 => [3, 2, 1, 4],
            // WRGB
            12 => [2, 3, 4, 1],
            // WRBG
            13 => [2, 4, 3, 1],
            // WGRB
            14 => [3, 2, 4, 1],
            // WGBR
            15 => [3, 4, 2, 1],
            // WBRG
            16 => [4, 2, 3, 1],
            // WBGR
            17 => [4, 3, 2, 1],
            _ => [1, 2, 3, 4],
        };
        Self(positions)
    }

    /// Position of the red channel
    pub const fn red(self) -> u8 {
        self.0[0]
    }

    /// Position of the green channel
    pub const fn green(self) -> u8 {
        self.0[1]
    }

    /// Position of the blue channel
    pub const fn blue(self) -> u8 {
        self.0[2]
    }

    /// Position of the white channel
    pub const fn white(self) -> u8 {
        self.0[3]
    }

    pub const fn as_array(self) -> [u8; 4] {
        self.0
    }
}
