//! Colour type and parsing.

use std::fmt;
use std::str::FromStr;

use palette::Srgb;

use crate::error::{Result, SliderError};

/// An opaque RGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// Light page background and dark-mode text.
    pub const PAPER: Self = Self::rgb(240, 240, 240);

    /// Light-mode text.
    pub const INK: Self = Self::rgb(24, 24, 24);

    /// Parse a hex colour string.
    ///
    /// Supports `#RGB` and `#RRGGBB`, with or without the leading `#`.
    pub fn from_hex(s: &str) -> Result<Self> {
        let s = s.trim();
        let hex = s.strip_prefix('#').unwrap_or(s);

        if !hex.is_ascii() {
            return Err(invalid_hex(s));
        }

        match hex.len() {
            3 => {
                let mut digits = [0u8; 3];
                for (slot, c) in digits.iter_mut().zip(hex.chars()) {
                    let d = c.to_digit(16).ok_or_else(|| invalid_hex(s))? as u8;
                    *slot = d << 4 | d;
                }
                Ok(Self::rgb(digits[0], digits[1], digits[2]))
            }
            6 => {
                let byte = |range: std::ops::Range<usize>| {
                    u8::from_str_radix(&hex[range], 16).map_err(|_| invalid_hex(s))
                };
                Ok(Self::rgb(byte(0..2)?, byte(2..4)?, byte(4..6)?))
            }
            _ => Err(invalid_hex(s)),
        }
    }

    /// Components scaled to `0.0..=1.0`, as PDF colour operators expect.
    pub fn to_unit_rgb(self) -> [f32; 3] {
        let unit: Srgb<f32> = Srgb::new(self.r, self.g, self.b).into_format();
        [unit.red, unit.green, unit.blue]
    }
}

fn invalid_hex(s: &str) -> SliderError {
    SliderError::Config {
        message: format!("Invalid hex colour: {}", s),
        help: Some("Use #RGB or #RRGGBB format".to_string()),
    }
}

impl FromStr for Colour {
    type Err = SliderError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}
