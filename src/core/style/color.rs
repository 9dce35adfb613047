//=========================================================================
// Color Values
//=========================================================================
//
// Normalized RGBA colors and the engine's hue (palette remap) index.
//
// Accepted literals:
//   "#RRGGBB"    → alpha 1.0
//   "#RRGGBBAA"
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::fmt;
use std::str::FromStr;

//=== Internal Dependencies ===============================================

use crate::core::error::{GumpError, Result};

//=== Constants ===========================================================

/// Highest hue index of the engine palette.
pub const MAX_HUE: u32 = 3000;

//=== Rgba ================================================================

/// Color with four channels normalized to `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba { r: 1.0, g: 1.0, b: 1.0, a: 1.0 };

    /// Creates a color, validating every channel is in `[0, 1]`.
    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Result<Self> {
        Ok(Self {
            r: unit_channel("r", r)?,
            g: unit_channel("g", g)?,
            b: unit_channel("b", b)?,
            a: unit_channel("a", a)?,
        })
    }

    /// Opaque color from three channels.
    pub fn rgb(r: f32, g: f32, b: f32) -> Result<Self> {
        Self::new(r, g, b, 1.0)
    }

    /// Creates a color from 8-bit channels.
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: f32::from(r) / 255.0,
            g: f32::from(g) / 255.0,
            b: f32::from(b) / 255.0,
            a: f32::from(a) / 255.0,
        }
    }

    /// Creates a color from integer channels in `[0, 255]`.
    pub fn from_channels(r: i32, g: i32, b: i32, a: i32) -> Result<Self> {
        Ok(Self::from_rgba8(
            byte_channel("r", r)?,
            byte_channel("g", g)?,
            byte_channel("b", b)?,
            byte_channel("a", a)?,
        ))
    }

    /// Parses `#RRGGBB` or `#RRGGBBAA`.
    pub fn from_hex(literal: &str) -> Result<Self> {
        let digits = literal
            .strip_prefix('#')
            .ok_or_else(|| GumpError::Parse(format!("color literal must start with '#': {literal:?}")))?;

        if digits.len() != 6 && digits.len() != 8 {
            return Err(GumpError::Parse(format!(
                "color literal must have 6 or 8 hex digits: {literal:?}"
            )));
        }

        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(GumpError::Parse(format!(
                "invalid hex digit in color literal: {literal:?}"
            )));
        }

        let channel = |i: usize| -> Result<u8> {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map_err(|e| GumpError::Parse(format!("{literal:?}: {e}")))
        };

        let a = if digits.len() == 8 { channel(6)? } else { 255 };
        Ok(Self::from_rgba8(channel(0)?, channel(2)?, channel(4)?, a))
    }

    /// Formats as `#RRGGBBAA`.
    pub fn to_hex(&self) -> String {
        let [r, g, b, a] = self.to_rgba8();
        format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
    }

    /// Converts to 8-bit channels, rounding to nearest.
    pub fn to_rgba8(&self) -> [u8; 4] {
        let q = |v: f32| (v * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b), q(self.a)]
    }

    /// Returns a copy with the alpha channel replaced.
    pub fn with_alpha(mut self, alpha: f32) -> Result<Self> {
        self.a = unit_channel("alpha", alpha)?;
        Ok(self)
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Self::WHITE
    }
}

impl FromStr for Rgba {
    type Err = GumpError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

//=== ColorValue ==========================================================

/// Either an explicit RGBA color or a hue index into the engine palette.
///
/// Only one representation is ever authoritative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColorValue {
    Rgba(Rgba),
    Hue(u32),
}

impl ColorValue {
    /// Explicit color from four normalized channels.
    pub fn rgba(r: f32, g: f32, b: f32, a: f32) -> Result<Self> {
        Rgba::new(r, g, b, a).map(Self::Rgba)
    }

    /// Explicit color from a `#RRGGBB[AA]` literal.
    pub fn from_hex(literal: &str) -> Result<Self> {
        Rgba::from_hex(literal).map(Self::Rgba)
    }

    /// Palette remap by hue index.
    pub fn hue(index: u32) -> Result<Self> {
        validate_hue(index).map(Self::Hue)
    }

    /// Returns the explicit color, or `None` in hue mode.
    ///
    /// Hue → color conversion needs the palette and is done by the renderer.
    pub fn to_rgba(&self) -> Option<Rgba> {
        match self {
            Self::Rgba(rgba) => Some(*rgba),
            Self::Hue(_) => None,
        }
    }

    pub fn as_hue(&self) -> Option<u32> {
        match self {
            Self::Hue(hue) => Some(*hue),
            Self::Rgba(_) => None,
        }
    }
}

impl From<Rgba> for ColorValue {
    fn from(rgba: Rgba) -> Self {
        Self::Rgba(rgba)
    }
}

impl FromStr for ColorValue {
    type Err = GumpError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl fmt::Display for ColorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rgba(rgba) => write!(f, "{}", rgba.to_hex()),
            Self::Hue(hue) => write!(f, "hue({hue})"),
        }
    }
}

//=== Validation Helpers ==================================================

pub(crate) fn unit_channel(field: &'static str, value: f32) -> Result<f32> {
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(GumpError::value(field, value))
    }
}

fn byte_channel(field: &'static str, value: i32) -> Result<u8> {
    u8::try_from(value).map_err(|_| GumpError::value(field, value))
}

pub(crate) fn validate_hue(index: u32) -> Result<u32> {
    if index <= MAX_HUE {
        Ok(index)
    } else {
        Err(GumpError::value("hue", index))
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
