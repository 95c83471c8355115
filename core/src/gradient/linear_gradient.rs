// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use smallvec::SmallVec;

use crate::{ParseError, Positioned, RgbValue, STOP_VEC_INLINE_CAPACITY};

/// The stops of a single gradient. Stays on the stack for the resolutions that are
/// normally used.
pub type StopVec = SmallVec<[ColorStop; STOP_VEC_INLINE_CAPACITY]>;

/// A color anchored at a percentage (`0.0..=100.0`) along a gradient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorStop {
    pub color: RgbValue,
    pub position: f64,
}

impl ColorStop {
    #[must_use]
    pub fn new(color: impl Into<RgbValue>, position: f64) -> Self {
        Self {
            color: color.into(),
            position,
        }
    }
}

impl Positioned for ColorStop {
    fn position(&self) -> f64 { self.position }
}

/// A CSS `linear-gradient(...)`. The stops are sorted in ascending order of position,
/// duplicate positions are allowed (that's how CSS expresses a hard color edge).
///
/// - Parse one w/ [`LinearGradient::try_parse`] or [`str::parse`].
/// - Check one that was built in code w/ [`LinearGradient::try_validate`].
/// - Write one out w/ [`LinearGradient::to_css`] or [`std::fmt::Display`].
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    /// Degrees.
    pub angle: f64,
    pub stops: StopVec,
}

impl LinearGradient {
    #[must_use]
    pub fn new(angle: f64, stops: impl IntoIterator<Item = ColorStop>) -> Self {
        Self {
            angle,
            stops: stops.into_iter().collect(),
        }
    }

    /// Checks the invariants that [`LinearGradient::try_parse`] enforces on parsed text,
    /// for a gradient that was built in code. The errors carry [`LinearGradient::to_css`]
    /// as their `input`.
    ///
    /// ```
    /// use gradanim_core::{ColorStop, LinearGradient, ParseError};
    ///
    /// let gradient = LinearGradient::new(0.0, [ColorStop::new((0, 0, 0), 0.0)]);
    /// assert!(matches!(
    ///     gradient.try_validate(),
    ///     Err(ParseError::TooFewStops { found: 1, .. })
    /// ));
    /// ```
    ///
    /// # Errors
    ///
    /// - [`ParseError::MalformedGradient`] if the angle isn't a finite number.
    /// - [`ParseError::TooFewStops`] if there are fewer than 2 color stops.
    /// - [`ParseError::StopPositionOutOfRange`] if a stop is outside of `0%..=100%`.
    /// - [`ParseError::StopsOutOfOrder`] if the stop positions ever decrease.
    pub fn try_validate(&self) -> Result<(), ParseError> {
        if !self.angle.is_finite() {
            return Err(ParseError::MalformedGradient {
                input: self.to_css(),
            });
        }
        validate_stops(&self.stops, || self.to_css())
    }
}

/// The stop checks shared by [`LinearGradient::try_parse`] and
/// [`LinearGradient::try_validate`]. `input` is only called to build an error.
pub(crate) fn validate_stops(
    stops: &[ColorStop],
    input: impl FnOnce() -> String,
) -> Result<(), ParseError> {
    if stops.len() < 2 {
        return Err(ParseError::TooFewStops {
            input: input(),
            found: stops.len(),
        });
    }

    if let Some(stop) = stops
        .iter()
        .find(|it| !(0.0..=100.0).contains(&it.position))
    {
        return Err(ParseError::StopPositionOutOfRange {
            input: input(),
            position: stop.position,
        });
    }

    if stops.windows(2).any(|pair| pair[1].position < pair[0].position) {
        return Err(ParseError::StopsOutOfOrder { input: input() });
    }

    Ok(())
}
