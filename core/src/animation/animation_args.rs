// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The raw, unparsed configuration of an animation, as it comes from the command line.
//! Converting it into an [`AnimationSpec`] parses and validates everything.

use crate::{AnimError, AnimationSpec, ConfigError, DEFAULT_DURATION_SECS, DEFAULT_FPS,
            DEFAULT_GRADIENT_RESOLUTION, LinearGradient, TimedGradient};

#[derive(Debug, Clone, PartialEq)]
pub struct AnimationArgs {
    pub animation_name: String,
    pub gradients: Vec<RawTimedGradient>,
    pub keyframe_count: KeyframeCount,
    pub gradient_resolution: u32,
}

impl AnimationArgs {
    /// Uses the default keyframe count and gradient resolution.
    #[must_use]
    pub fn new(animation_name: impl Into<String>, gradients: Vec<RawTimedGradient>) -> Self {
        Self {
            animation_name: animation_name.into(),
            gradients,
            keyframe_count: KeyframeCount::default(),
            gradient_resolution: DEFAULT_GRADIENT_RESOLUTION,
        }
    }
}

/// A timeline position (eg: `25%`) and a CSS `linear-gradient(...)`, both unparsed.
#[derive(Debug, Clone, PartialEq)]
pub struct RawTimedGradient {
    pub pos: String,
    pub gradient: String,
}

impl RawTimedGradient {
    #[must_use]
    pub fn new(pos: impl Into<String>, gradient: impl Into<String>) -> Self {
        Self {
            pos: pos.into(),
            gradient: gradient.into(),
        }
    }

    /// Groups `[pos1, gradient1, pos2, gradient2, ...]` into pairs.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnpairedGradientArgument`] if the last position has no
    /// gradient after it.
    pub fn try_from_flat_pairs(
        args: &[impl AsRef<str>],
    ) -> Result<Vec<RawTimedGradient>, ConfigError> {
        let chunks = args.chunks_exact(2);

        if let [unpaired] = chunks.remainder() {
            return Err(ConfigError::UnpairedGradientArgument {
                position: unpaired.as_ref().to_string(),
            });
        }

        Ok(chunks
            .map(|pair| RawTimedGradient::new(pair[0].as_ref(), pair[1].as_ref()))
            .collect())
    }

    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the timeline position is invalid, or a
    /// [`crate::ParseError`] if the gradient is.
    pub fn try_parse(&self) -> Result<TimedGradient, AnimError> {
        let timeline_position = parse_timeline_position(&self.pos)?;
        let gradient = LinearGradient::try_parse(&self.gradient)?;
        Ok(TimedGradient::new(timeline_position, gradient))
    }
}

/// Parses a whole percentage from `0%` to `100%`, eg: `25%`. The `%` is required.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidTimelinePosition`] for anything else.
pub fn parse_timeline_position(input: &str) -> Result<f64, ConfigError> {
    input
        .trim()
        .strip_suffix('%')
        .and_then(|digits| digits.parse::<u8>().ok())
        .filter(|percent| *percent <= 100)
        .map(f64::from)
        .ok_or_else(|| ConfigError::InvalidTimelinePosition {
            input: input.to_string(),
        })
}

/// How many steps the animation has between its first and last keyframe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum KeyframeCount {
    Explicit(u32),
    /// `floor(duration_secs * fps)`.
    FromDuration { duration_secs: f64, fps: u32 },
}

impl Default for KeyframeCount {
    fn default() -> Self {
        KeyframeCount::FromDuration {
            duration_secs: DEFAULT_DURATION_SECS,
            fps: DEFAULT_FPS,
        }
    }
}

impl KeyframeCount {
    /// The result can be `0`, which [`AnimationSpec::try_new`] rejects.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidDuration`] if the duration is negative or not
    /// finite.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn try_resolve(self) -> Result<u32, ConfigError> {
        match self {
            KeyframeCount::Explicit(count) => Ok(count),
            KeyframeCount::FromDuration { duration_secs, fps } => {
                if !duration_secs.is_finite() || duration_secs < 0.0 {
                    return Err(ConfigError::InvalidDuration {
                        duration: duration_secs,
                    });
                }
                // Saturates at u32::MAX.
                Ok((duration_secs * f64::from(fps)).floor() as u32)
            }
        }
    }
}

impl TryFrom<AnimationArgs> for AnimationSpec {
    type Error = AnimError;

    fn try_from(args: AnimationArgs) -> Result<Self, Self::Error> {
        let timed_gradients = args
            .gradients
            .iter()
            .map(RawTimedGradient::try_parse)
            .collect::<Result<Vec<_>, _>>()?;

        let keyframe_count = args.keyframe_count.try_resolve()?;

        Ok(AnimationSpec::try_new(
            args.animation_name,
            timed_gradients,
            keyframe_count,
            args.gradient_resolution,
        )?)
    }
}
