// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! This module contains a parser for the CSS `linear-gradient(...)` function, eg:
//! `linear-gradient(30deg, #3d3393 0%, #35eb93 100%)`.
//!
//! Grammar (whitespace is allowed around every token, keywords are case insensitive):
//!
//! ```text
//! gradient   = "linear-gradient" "(" [ angle "deg" "," ] color_stop ( "," color_stop )* ")"
//! color_stop = hex_color <whitespace> number "%"
//! number     = [ "+" | "-" ] ( digits [ "." digits ] | "." digits )
//! ```
//!
//! The nom parsers here only check the shape of the text. The checks on the values
//! (stop count, stop range, stop order) are shared w/ [`LinearGradient::try_validate`] so
//! that each one can be reported w/ its own [`ParseError`] variant.

use std::str::FromStr;

use nom::{IResult,
          Parser,
          branch::alt,
          bytes::complete::tag_no_case,
          character::complete::{char, digit1, multispace0, multispace1, one_of},
          combinator::{all_consuming, map, map_res, opt, recognize, verify},
          multi::separated_list1,
          sequence::{delimited, preceded, terminated}};

use crate::{ColorStop, LinearGradient, ParseError, parse_hex_color, validate_stops};

impl LinearGradient {
    /// Parse a CSS `linear-gradient(...)` string. When the angle clause is missing the
    /// angle is `0`.
    ///
    /// ```
    /// use gradanim_core::{LinearGradient, RgbValue};
    ///
    /// let gradient = LinearGradient::try_parse("linear-gradient(#fff 0%, #000 100%)").unwrap();
    /// assert_eq!(gradient.angle, 0.0);
    /// assert_eq!(gradient.stops[0].color, RgbValue::from_u8(255, 255, 255));
    /// ```
    ///
    /// # Errors
    ///
    /// - [`ParseError::MalformedGradient`] if the text doesn't match the grammar.
    /// - [`ParseError::TooFewStops`] if there is only 1 color stop.
    /// - [`ParseError::StopPositionOutOfRange`] if a stop is outside of `0%..=100%`.
    /// - [`ParseError::StopsOutOfOrder`] if the stop positions ever decrease.
    pub fn try_parse(input: &str) -> Result<LinearGradient, ParseError> {
        let Ok((_, (angle, stops))) = all_consuming(parse_linear_gradient).parse(input)
        else {
            return Err(ParseError::MalformedGradient {
                input: input.to_string(),
            });
        };

        validate_stops(&stops, || input.to_string())?;

        Ok(LinearGradient::new(angle, stops))
    }
}

impl FromStr for LinearGradient {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> { Self::try_parse(s) }
}

/// Returns the angle (`0` if it is missing) and the color stops, in the order they were
/// written.
pub fn parse_linear_gradient(input: &str) -> IResult<&str, (f64, Vec<ColorStop>)> {
    let (input, _) = (
        multispace0,
        tag_no_case("linear-gradient"),
        multispace0,
        char('('),
    )
        .parse(input)?;
    let (input, maybe_angle) = opt(parse_angle_clause).parse(input)?;
    let (input, stops) = separated_list1(char(','), parse_color_stop).parse(input)?;
    let (input, _) = (char(')'), multispace0).parse(input)?;
    Ok((input, (maybe_angle.unwrap_or(0.0), stops)))
}

/// `30deg,`
fn parse_angle_clause(input: &str) -> IResult<&str, f64> {
    terminated(
        delimited(
            multispace0,
            terminated(parse_number, preceded(multispace0, tag_no_case("deg"))),
            multispace0,
        ),
        char(','),
    )
    .parse(input)
}

/// `#3d3393 50%`
fn parse_color_stop(input: &str) -> IResult<&str, ColorStop> {
    delimited(
        multispace0,
        map(
            (parse_hex_color, multispace1, parse_number, char('%')),
            |(color, _, position, _)| ColorStop::new(color, position),
        ),
        multispace0,
    )
    .parse(input)
}

/// `12`, `-12.5`, `+.5`. No exponents, and no `inf` or `nan`. A run of digits too long to
/// fit in a finite [f64] is rejected too.
fn parse_number(input: &str) -> IResult<&str, f64> {
    verify(
        map_res(
            recognize((
                opt(one_of("+-")),
                alt((
                    recognize((digit1, opt((char('.'), digit1)))),
                    recognize((char('.'), digit1)),
                )),
            )),
            str::parse::<f64>,
        ),
        |number: &f64| number.is_finite(),
    )
    .parse(input)
}
