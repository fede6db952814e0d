//! Colour type and hex parsing.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{NodeError, Result};

/// Brightness threshold used when picking a label colour for a swatch.
pub const SWATCH_BRIGHTNESS_THRESHOLD: u8 = 125;

/// Channel order used when splitting a colour into components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChannelOrder {
    /// Red, green, blue.
    #[default]
    Rgb,
    /// Blue, green, red (reversed storage, e.g. OpenCV buffers).
    Bgr,
}

/// An opaque 24-bit RGB colour value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    /// Create a new colour from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// White.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Red (the default value of a COLOR widget).
    pub const RED: Self = Self::rgb(255, 0, 0);

    /// Parse a `#RRGGBB` or `RRGGBB` hex string (case-insensitive).
    pub fn from_hex(s: &str) -> Result<Self> {
        let hex = hex_digits(s)?;

        let r = parse_hex_byte(&hex[0..2])?;
        let g = parse_hex_byte(&hex[2..4])?;
        let b = parse_hex_byte(&hex[4..6])?;
        Ok(Self::rgb(r, g, b))
    }

    /// Lowercase `#rrggbb` form.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Components in the requested channel order.
    pub fn channels(self, order: ChannelOrder) -> (u8, u8, u8) {
        match order {
            ChannelOrder::Rgb => (self.r, self.g, self.b),
            ChannelOrder::Bgr => (self.b, self.g, self.r),
        }
    }

    /// Convert to an RGB array.
    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// The complementary colour (`255 - channel`).
    pub fn inverted(self) -> Self {
        Self::rgb(!self.r, !self.g, !self.b)
    }

    /// Perceived brightness, `(299 R + 587 G + 114 B) / 1000` rounded.
    pub fn brightness(self) -> u8 {
        let weighted = self.r as u32 * 299 + self.g as u32 * 587 + self.b as u32 * 114;
        ((weighted + 500) / 1000) as u8
    }

    /// Whether the colour is brighter than `threshold`.
    pub fn is_bright(self, threshold: u8) -> bool {
        self.brightness() > threshold
    }

    /// Black or white, whichever reads better on top of this colour.
    pub fn contrast_label(self) -> Self {
        if self.is_bright(SWATCH_BRIGHTNESS_THRESHOLD) {
            Self::BLACK
        } else {
            Self::WHITE
        }
    }
}

impl From<[u8; 3]> for Colour {
    fn from(rgb: [u8; 3]) -> Self {
        Self::rgb(rgb[0], rgb[1], rgb[2])
    }
}

impl FromStr for Colour {
    type Err = NodeError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

/// Split a hex colour string into its three channels.
///
/// `ChannelOrder::Bgr` returns the channels reversed, for consumers that
/// store pixels blue-first.
pub fn hex_to_rgb(hex: &str, order: ChannelOrder) -> Result<(u8, u8, u8)> {
    Ok(Colour::from_hex(hex)?.channels(order))
}

/// Invert a hex colour digit by digit (`0`<->`f`, `1`<->`e`, ...).
///
/// Input case is ignored; the result is always lowercase and `#`-prefixed.
pub fn invert_hex(hex: &str) -> Result<String> {
    let digits = hex_digits(hex)?;

    let mut out = String::with_capacity(7);
    out.push('#');
    for c in digits.chars() {
        // hex_digits already rejected anything that is not a hex digit
        let nibble = c.to_digit(16).unwrap_or(0);
        out.push(char::from_digit(15 - nibble, 16).unwrap_or('0'));
    }
    Ok(out)
}

/// Strip leading `#` and check for exactly six ASCII hex digits.
fn hex_digits(s: &str) -> Result<&str> {
    let hex = s.trim().trim_start_matches('#');

    if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(NodeError::Parse {
            message: format!("Invalid hex colour: {:?}", s),
            help: Some("Use #RRGGBB or RRGGBB format".to_string()),
        });
    }

    Ok(hex)
}

/// Parse a two-character hex byte.
fn parse_hex_byte(s: &str) -> Result<u8> {
    u8::from_str_radix(s, 16).map_err(|_| NodeError::Parse {
        message: format!("Invalid hex byte: {}", s),
        help: None,
    })
}
