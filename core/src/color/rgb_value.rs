// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! RGB (24-bit truecolor) color representation, the only color model that gradients in
//! this crate use.

use std::{fmt::{self, Display, Formatter},
          str::FromStr};

use nom::{Parser, character::complete::multispace0, combinator::all_consuming,
          sequence::delimited};

use super::hex_color_parser::parse_hex_color;
use crate::ParseError;

/// Represents a color in RGB (24-bit truecolor) format. Its canonical text form is
/// lowercase `#rrggbb` (see the [Display] impl).
#[derive(Clone, PartialEq, Eq, Hash, Copy, Debug, Default)]
pub struct RgbValue {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl From<(u8, u8, u8)> for RgbValue {
    fn from((red, green, blue): (u8, u8, u8)) -> Self { Self::from_u8(red, green, blue) }
}

impl RgbValue {
    #[must_use]
    pub fn from_u8(red: u8, green: u8, blue: u8) -> Self { Self { red, green, blue } }

    /// Parse a string that contains exactly one hex color, eg: `#3d3393`, `3d3393`,
    /// `#fff`. Leading and trailing whitespace is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::InvalidHexColor`] if the string isn't a 3 or 6 digit hex
    /// color.
    pub fn try_from_hex_color(input: &str) -> Result<RgbValue, ParseError> {
        match all_consuming(delimited(multispace0, parse_hex_color, multispace0))
            .parse(input)
        {
            Ok((_, color)) => Ok(color),
            Err(_) => Err(ParseError::InvalidHexColor {
                input: input.to_string(),
            }),
        }
    }

    /// Lowercase `#rrggbb`.
    #[must_use]
    pub fn to_hex_string(&self) -> String { self.to_string() }

    /// Linear interpolation between `self` and `other`, per channel:
    /// `round(self + (other - self) * t)`.
    ///
    /// `t` is expected to be in `0.0..=1.0` but it is not clamped, a value outside of this
    /// range extrapolates. The resulting channels are clamped to `0..=255`.
    #[must_use]
    pub fn interpolate(self, other: RgbValue, t: f64) -> RgbValue {
        RgbValue {
            red: lerp_channel(self.red, other.red, t),
            green: lerp_channel(self.green, other.green, t),
            blue: lerp_channel(self.blue, other.blue, t),
        }
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn lerp_channel(from: u8, to: u8, t: f64) -> u8 {
    let from = f64::from(from);
    let to = f64::from(to);
    // The clamp makes the cast lossless.
    (from + (to - from) * t).round().clamp(0.0, 255.0) as u8
}

impl Display for RgbValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }
}

impl FromStr for RgbValue {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> { Self::try_from_hex_color(s) }
}
