// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Errors produced while turning user-authored text into an animation.
//!
//! There are only two kinds of failure, and neither is recoverable since the input is
//! typed by a person:
//! 1. [`ParseError`] - gradient or color text that doesn't have the expected shape.
//! 2. [`ConfigError`] - the animation configuration is missing something or is out of
//!    range (too few gradients, a zero keyframe count, etc).
//!
//! Both derive [`miette::Diagnostic`] so the CLI can render them with codes and help
//! text. [`AnimError`] wraps them so library callers get a single error type.
//!
//! For more information on error types, see:
//!
//! 1. [Article](https://developerlife.com/2024/06/10/rust-miette-error-handling/)
//! 2. [Video](https://youtu.be/TmLF7vI8lKk)

use miette::Diagnostic;

/// Type alias to make it easy to work with [`AnimError`].
pub type AnimResult<T> = Result<T, AnimError>;

#[derive(Debug, Clone, PartialEq, thiserror::Error, Diagnostic)]
pub enum AnimError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),
}

#[derive(Debug, Clone, PartialEq, thiserror::Error, Diagnostic)]
pub enum ParseError {
    #[error("Invalid hex color `{input}`")]
    #[diagnostic(
        code(gradanim::parse::hex_color),
        help("Use 3 or 6 hex digits, optionally prefixed with `#`, eg: `#fff` or `#3d3393`")
    )]
    InvalidHexColor { input: String },

    #[error("Malformed linear gradient `{input}`")]
    #[diagnostic(
        code(gradanim::parse::gradient),
        help(
            "Expected `linear-gradient(<angle>deg, <color> <pos>%, <color> <pos>%, ...)`, \
             the angle clause is optional"
        )
    )]
    MalformedGradient { input: String },

    #[error("Linear gradient `{input}` has {found} color stop(s), at least 2 are required")]
    #[diagnostic(code(gradanim::parse::too_few_stops))]
    TooFewStops { input: String, found: usize },

    #[error("Color stop at {position}% in `{input}` is outside of 0%..=100%")]
    #[diagnostic(code(gradanim::parse::stop_position_out_of_range))]
    StopPositionOutOfRange { input: String, position: f64 },

    #[error("Color stops in `{input}` are not in ascending order of position")]
    #[diagnostic(
        code(gradanim::parse::stops_out_of_order),
        help("Each stop position must be greater than or equal to the one before it")
    )]
    StopsOutOfOrder { input: String },
}

#[derive(Debug, Clone, PartialEq, thiserror::Error, Diagnostic)]
pub enum ConfigError {
    #[error("Found {found} gradient(s), at least 2 are required to animate between")]
    #[diagnostic(
        code(gradanim::config::too_few_gradients),
        help("Pass pairs of timeline positions and gradients, eg: `0% <gradient> 100% <gradient>`")
    )]
    TooFewGradients { found: usize },

    #[error("Invalid timeline position `{input}`")]
    #[diagnostic(
        code(gradanim::config::timeline_position),
        help("Timeline positions are whole percentages from `0%` to `100%`, eg: `25%`")
    )]
    InvalidTimelinePosition { input: String },

    #[error("Timeline position `{position}` is not followed by a gradient")]
    #[diagnostic(code(gradanim::config::unpaired_gradient))]
    UnpairedGradientArgument { position: String },

    #[error("Invalid animation name `{name}`")]
    #[diagnostic(
        code(gradanim::config::animation_name),
        help("The name must be non empty, and only use ASCII letters, digits, `_` or `-`")
    )]
    InvalidAnimationName { name: String },

    #[error("Gradient at timeline position {timeline_position}% is invalid")]
    #[diagnostic(code(gradanim::config::gradient))]
    InvalidGradient {
        timeline_position: f64,
        #[source]
        #[diagnostic_source]
        source: ParseError,
    },

    #[error("Invalid duration `{duration}`, it must be a finite number of seconds >= 0")]
    #[diagnostic(code(gradanim::config::duration))]
    InvalidDuration { duration: f64 },

    #[error("The animation must have at least 1 keyframe step")]
    #[diagnostic(
        code(gradanim::config::keyframe_count),
        help("Increase the duration or fps, or pass an explicit keyframe count")
    )]
    ZeroKeyframeCount,

    #[error("The gradient resolution must be at least 1")]
    #[diagnostic(code(gradanim::config::gradient_resolution))]
    ZeroGradientResolution,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_parse_error_converts_into_anim_error() {
        let err: AnimError = ParseError::InvalidHexColor {
            input: "#ggg".to_string(),
        }
        .into();
        assert!(matches!(err, AnimError::Parse(ParseError::InvalidHexColor { .. })));
        assert_eq2!(err.to_string(), "Invalid hex color `#ggg`");
    }

    #[test]
    fn test_config_error_keeps_diagnostic_code() {
        let err: AnimError = ConfigError::TooFewGradients { found: 1 }.into();
        let code = err.code().map(|it| it.to_string());
        assert_eq2!(code, Some("gradanim::config::too_few_gradients".to_string()));
    }

    #[test]
    fn test_invalid_gradient_keeps_parse_error_as_source() {
        let err = ConfigError::InvalidGradient {
            timeline_position: 50.0,
            source: ParseError::TooFewStops {
                input: "linear-gradient(0.00deg)".to_string(),
                found: 0,
            },
        };
        assert_eq2!(err.to_string(), "Gradient at timeline position 50% is invalid");
        let source = std::error::Error::source(&err).map(ToString::to_string);
        assert_eq2!(
            source,
            Some(
                "Linear gradient `linear-gradient(0.00deg)` has 0 color stop(s), at least 2 \
                 are required"
                    .to_string()
            )
        );
    }
}
