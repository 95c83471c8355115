// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Generates the keyframes that animate between a number of gradients.
//!
//! 1. Every timed gradient is equalized w/ the same resolution, so they all have stops at
//!    the same positions.
//! 2. For each keyframe, the two timed gradients on either side of it (on the timeline)
//!    are found, and the keyframe's gradient is interpolated between them. The angle is
//!    interpolated, and the color of each stop is interpolated w/ the color of the stop at
//!    the same index on the other side.

use crate::{AnimResult, AnimationArgs, AnimationSpec, ColorStop, Keyframe, LinearGradient,
            TimedGradient, equalize, keyframes_to_css, nearest_bracket};

/// Parses and validates `args`, and then generates the CSS `@keyframes` block.
///
/// # Errors
///
/// Returns an [`crate::AnimError`] if `args` can't be turned into an [`AnimationSpec`].
pub fn try_generate_animation(args: AnimationArgs) -> AnimResult<String> {
    let spec = AnimationSpec::try_from(args)?;
    Ok(generate_animation(&spec))
}

/// Returns the CSS `@keyframes` block for `spec`, see [`keyframes_to_css`] for the
/// format.
#[must_use]
pub fn generate_animation(spec: &AnimationSpec) -> String {
    keyframes_to_css(&generate_keyframes(spec), spec.name())
}

/// Returns `keyframe_count + 1` keyframes, at percentages `100 * i / keyframe_count`.
/// The first keyframe is the first timed gradient (equalized), and the last one is the
/// timed gradient at the largest timeline position (equalized). Of several timed gradients
/// at the same timeline position, only the first is used.
#[must_use]
pub fn generate_keyframes(spec: &AnimationSpec) -> Vec<Keyframe> {
    let keyframe_count = spec.keyframe_count();
    let gradient_resolution = spec.gradient_resolution();

    tracing::debug!(
        name = spec.name(),
        gradient_count = spec.timed_gradients().len(),
        keyframe_count,
        gradient_resolution,
        "Generating animation"
    );

    let equalized: Vec<TimedGradient> = spec
        .timed_gradients()
        .iter()
        .map(|it| {
            TimedGradient::new(
                it.timeline_position,
                equalize(&it.gradient, gradient_resolution),
            )
        })
        .collect();

    (0..=keyframe_count)
        .filter_map(|i| {
            let percentage = 100.0 * f64::from(i) / f64::from(keyframe_count);
            let bracket = nearest_bracket(&equalized, percentage)?;
            let t = bracket.normalized_offset(percentage);
            let gradient =
                interpolate_gradients(&bracket.below.gradient, &bracket.above.gradient, t);

            tracing::trace!(percentage, t, %gradient, "Keyframe");

            Some(Keyframe {
                percentage,
                gradient,
            })
        })
        .collect()
}

/// `left` and `right` must have stops at the same positions (ie, be equalized w/ the same
/// resolution). The stop positions are taken from `left`.
fn interpolate_gradients(
    left: &LinearGradient,
    right: &LinearGradient,
    t: f64,
) -> LinearGradient {
    LinearGradient {
        angle: left.angle + (right.angle - left.angle) * t,
        stops: left
            .stops
            .iter()
            .zip(&right.stops)
            .map(|(lhs, rhs)| ColorStop::new(lhs.color.interpolate(rhs.color, t), lhs.position))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AnimError, ConfigError, CssNumber, KeyframeCount, RawTimedGradient,
                RgbValue, assert_eq2};

    const GRADIENT_1: &str = "linear-gradient(30deg, #3d3393 0%, #35eb93 100%)";
    const GRADIENT_2: &str = "linear-gradient(20deg, #6e45e2 0%, #88d3ce 100%)";

    fn timed(timeline_position: f64, gradient: &str) -> TimedGradient {
        TimedGradient::new(
            timeline_position,
            LinearGradient::try_parse(gradient).unwrap(),
        )
    }

    fn two_gradient_spec() -> AnimationSpec {
        AnimationSpec::try_new(
            "gradient_animation",
            vec![timed(0.0, GRADIENT_1), timed(100.0, GRADIENT_2)],
            24,
            8,
        )
        .unwrap()
    }

    #[test]
    fn test_keyframe_count_and_percentages() {
        let keyframes = generate_keyframes(&two_gradient_spec());
        assert_eq2!(keyframes.len(), 25);

        let percentages: Vec<String> = keyframes
            .iter()
            .map(|it| CssNumber(it.percentage).to_string())
            .collect();
        assert_eq2!(percentages[0], "0.00");
        assert_eq2!(percentages[1], "4.17");
        assert_eq2!(percentages[12], "50.00");
        assert_eq2!(percentages[24], "100.00");

        assert!(
            keyframes
                .windows(2)
                .all(|pair| pair[0].percentage < pair[1].percentage)
        );
    }

    #[test]
    fn test_first_and_last_keyframes_are_the_equalized_inputs() {
        let keyframes = generate_keyframes(&two_gradient_spec());

        let first = equalize(&LinearGradient::try_parse(GRADIENT_1).unwrap(), 8);
        let last = equalize(&LinearGradient::try_parse(GRADIENT_2).unwrap(), 8);

        assert_eq2!(keyframes[0].gradient, first);
        assert_eq2!(keyframes[24].gradient, last);
    }

    #[test]
    fn test_midpoint_keyframe_is_halfway() {
        let keyframes = generate_keyframes(&two_gradient_spec());
        let middle = &keyframes[12].gradient;

        assert_eq2!(middle.angle, 25.0);
        assert_eq2!(middle.stops.len(), 9);
        // (0x3d + 0x6e) / 2 = 85.5, (0x33 + 0x45) / 2 = 60, (0x93 + 0xe2) / 2 = 186.5
        assert_eq2!(middle.stops[0].color, RgbValue::from_u8(86, 60, 187));
        assert_eq2!(middle.stops[4].position, 50.0);
    }

    #[test]
    fn test_gradients_before_first_and_after_last_timeline_position_hold() {
        let spec = AnimationSpec::try_new(
            "hold",
            vec![timed(25.0, GRADIENT_1), timed(75.0, GRADIENT_2)],
            4,
            2,
        )
        .unwrap();
        let keyframes = generate_keyframes(&spec);

        let first = equalize(&LinearGradient::try_parse(GRADIENT_1).unwrap(), 2);
        let last = equalize(&LinearGradient::try_parse(GRADIENT_2).unwrap(), 2);

        // Percentages are 0, 25, 50, 75, 100.
        assert_eq2!(keyframes[0].gradient, first);
        assert_eq2!(keyframes[1].gradient, first);
        assert_eq2!(keyframes[3].gradient, last);
        assert_eq2!(keyframes[4].gradient, last);
    }

    #[test]
    fn test_duplicate_timeline_positions_use_the_first_gradient() {
        let red = "linear-gradient(#ff0000 0%, #ff0000 100%)";
        let green = "linear-gradient(#00ff00 0%, #00ff00 100%)";
        let blue = "linear-gradient(#0000ff 0%, #0000ff 100%)";

        let spec = AnimationSpec::try_new(
            "cut",
            vec![timed(0.0, red), timed(50.0, green), timed(50.0, blue)],
            4,
            1,
        )
        .unwrap();
        let colors: Vec<String> = generate_keyframes(&spec)
            .iter()
            .map(|it| it.gradient.stops[0].color.to_string())
            .collect();

        // 25% is halfway from red to green, from 50% on green holds.
        assert_eq2!(colors, vec!["#ff0000", "#808000", "#00ff00", "#00ff00", "#00ff00"]);
    }

    #[test]
    fn test_generate_animation_output_shape() {
        let css = generate_animation(&two_gradient_spec());

        assert!(css.starts_with("@keyframes gradient_animation \n{\n    0.00%\n    {\n"));
        assert!(css.contains(
            "        background-image: linear-gradient(30.00deg, #3d3393 0.00%, \
             #3c4a93 12.50%, "
        ));
        assert!(css.contains("    4.17%\n"));
        assert!(css.ends_with("#88d3ce 100.00%);\n    }\n}"));
        assert_eq2!(css.matches("background-image").count(), 25);
    }

    #[test]
    fn test_try_generate_animation() {
        let args = AnimationArgs {
            keyframe_count: KeyframeCount::Explicit(24),
            ..AnimationArgs::new(
                "gradient_animation",
                vec![
                    RawTimedGradient::new("0%", GRADIENT_1),
                    RawTimedGradient::new("100%", GRADIENT_2),
                ],
            )
        };
        assert_eq2!(
            try_generate_animation(args).unwrap(),
            generate_animation(&two_gradient_spec())
        );
    }

    #[test]
    fn test_try_generate_animation_with_single_gradient() {
        let args = AnimationArgs::new(
            "lonely",
            vec![RawTimedGradient::new("0%", GRADIENT_1)],
        );
        assert_eq2!(
            try_generate_animation(args),
            Err(AnimError::Config(ConfigError::TooFewGradients { found: 1 }))
        );
    }
}
