// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{ConfigError, LinearGradient, Positioned};

/// A gradient that the animation has to pass through at `timeline_position` (a
/// percentage, `0.0..=100.0`, of the whole animation).
#[derive(Debug, Clone, PartialEq)]
pub struct TimedGradient {
    pub timeline_position: f64,
    pub gradient: LinearGradient,
}

impl TimedGradient {
    #[must_use]
    pub fn new(timeline_position: f64, gradient: LinearGradient) -> Self {
        Self {
            timeline_position,
            gradient,
        }
    }
}

impl Positioned for TimedGradient {
    fn position(&self) -> f64 { self.timeline_position }
}

/// One frame of the generated animation. Its gradient is always equalized.
#[derive(Debug, Clone, PartialEq)]
pub struct Keyframe {
    pub percentage: f64,
    pub gradient: LinearGradient,
}

/// Everything that is needed to generate an animation. The only way to make one is
/// [`AnimationSpec::try_new`], so an instance is always valid:
/// - The name can be written after `@keyframes`, and used as a file name.
/// - There are at least 2 timed gradients, sorted by timeline position.
/// - Every gradient passes [`LinearGradient::try_validate`].
/// - The keyframe count and gradient resolution are at least 1.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationSpec {
    name: String,
    timed_gradients: Vec<TimedGradient>,
    keyframe_count: u32,
    gradient_resolution: u32,
}

impl AnimationSpec {
    /// The timed gradients are sorted by timeline position. The sort is stable, so of two
    /// gradients at the same timeline position, the one that was passed in first stays
    /// first (and is the one that the generated keyframes use).
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] that applies:
    /// - [`ConfigError::InvalidAnimationName`] if `name` is empty, or contains anything
    ///   other than ASCII letters, digits, `_` and `-`.
    /// - [`ConfigError::TooFewGradients`] if there are less than 2 timed gradients.
    /// - [`ConfigError::InvalidTimelinePosition`] if a timeline position is outside of
    ///   `0.0..=100.0`.
    /// - [`ConfigError::InvalidGradient`] if a gradient fails
    ///   [`LinearGradient::try_validate`].
    /// - [`ConfigError::ZeroKeyframeCount`] and [`ConfigError::ZeroGradientResolution`].
    pub fn try_new(
        name: impl Into<String>,
        mut timed_gradients: Vec<TimedGradient>,
        keyframe_count: u32,
        gradient_resolution: u32,
    ) -> Result<Self, ConfigError> {
        let name = name.into();

        if !is_valid_animation_name(&name) {
            return Err(ConfigError::InvalidAnimationName { name });
        }

        if timed_gradients.len() < 2 {
            return Err(ConfigError::TooFewGradients {
                found: timed_gradients.len(),
            });
        }

        if let Some(it) = timed_gradients
            .iter()
            .find(|it| !(0.0..=100.0).contains(&it.timeline_position))
        {
            return Err(ConfigError::InvalidTimelinePosition {
                input: it.timeline_position.to_string(),
            });
        }

        for it in &timed_gradients {
            it.gradient
                .try_validate()
                .map_err(|source| ConfigError::InvalidGradient {
                    timeline_position: it.timeline_position,
                    source,
                })?;
        }

        if keyframe_count == 0 {
            return Err(ConfigError::ZeroKeyframeCount);
        }

        if gradient_resolution == 0 {
            return Err(ConfigError::ZeroGradientResolution);
        }

        timed_gradients.sort_by(|lhs, rhs| lhs.timeline_position.total_cmp(&rhs.timeline_position));

        Ok(Self {
            name,
            timed_gradients,
            keyframe_count,
            gradient_resolution,
        })
    }

    #[must_use]
    pub fn name(&self) -> &str { &self.name }

    /// Sorted by timeline position.
    #[must_use]
    pub fn timed_gradients(&self) -> &[TimedGradient] { &self.timed_gradients }

    /// The number of steps between the first and last keyframe. There is one more
    /// keyframe than this.
    #[must_use]
    pub fn keyframe_count(&self) -> u32 { self.keyframe_count }

    /// The number of steps between the first and last stop of each equalized gradient.
    #[must_use]
    pub fn gradient_resolution(&self) -> u32 { self.gradient_resolution }
}

fn is_valid_animation_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|it| it.is_ascii_alphanumeric() || matches!(it, '_' | '-'))
}
