// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! This module contains a parser that parses a hex color string into a [`RgbValue`]
//! struct. The `#` prefix is optional, and both the short and long forms are accepted:
//! - `#RRGGBB`, eg: `#3d3393`.
//! - `#RGB`, eg: `#fff` which is the same as `#ffffff`.
//!
//! The parser does not require the input to end after the color, so that it can be
//! composed into the linear gradient parser. Use [`RgbValue::try_from_hex_color`] to
//! parse a string that must contain just a color.

use nom::{IResult,
          Parser,
          branch::alt,
          bytes::complete::{tag, take_while_m_n},
          combinator::{map, map_res, opt}};

use crate::RgbValue;

/// Parse function that generates an [`RgbValue`] struct from a valid hex color string.
///
/// The long form is tried first, so `#ffffff` is never read as `#fff` followed by `fff`.
///
/// # Errors
///
/// Returns a [`nom::Err`] if the input doesn't start w/ 3 or 6 hex digits.
pub fn parse_hex_color(input: &str) -> IResult<&str, RgbValue> {
    let (input, _) = opt(tag("#")).parse(input)?;
    alt((parse_long_form, parse_short_form)).parse(input)
}

/// `RRGGBB`
fn parse_long_form(input: &str) -> IResult<&str, RgbValue> {
    map(
        (
            helper_fns::parse_hex_seg,
            helper_fns::parse_hex_seg,
            helper_fns::parse_hex_seg,
        ),
        |(red, green, blue)| RgbValue { red, green, blue },
    )
    .parse(input)
}

/// `RGB`, each digit is repeated, so `a` becomes `aa` (`0xa * 17`).
fn parse_short_form(input: &str) -> IResult<&str, RgbValue> {
    map(
        (
            helper_fns::parse_hex_nibble,
            helper_fns::parse_hex_nibble,
            helper_fns::parse_hex_nibble,
        ),
        |(red, green, blue)| RgbValue {
            red: red * 17,
            green: green * 17,
            blue: blue * 17,
        },
    )
    .parse(input)
}

/// Helper functions to match and parse hex digits.
mod helper_fns {
    use super::*;

    /// This function is used by [`map_res`] and it returns a [Result], not [`IResult`].
    pub fn parse_str_to_hex_num(input: &str) -> Result<u8, std::num::ParseIntError> {
        u8::from_str_radix(input, 16)
    }

    /// This function is used by [`take_while_m_n`] and as long as it returns `true`
    /// items will be taken from the input.
    pub fn match_is_hex_digit(c: char) -> bool { c.is_ascii_hexdigit() }

    pub fn parse_hex_seg(input: &str) -> IResult<&str, u8> {
        map_res(
            take_while_m_n(2, 2, match_is_hex_digit),
            parse_str_to_hex_num,
        )
        .parse(input)
    }

    pub fn parse_hex_nibble(input: &str) -> IResult<&str, u8> {
        map_res(
            take_while_m_n(1, 1, match_is_hex_digit),
            parse_str_to_hex_num,
        )
        .parse(input)
    }
}
