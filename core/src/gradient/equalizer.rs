// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Resamples a gradient onto a fixed grid of evenly spaced stops. Two gradients that are
//! equalized w/ the same resolution have stops at the same positions, so interpolating
//! between them is just interpolating the colors at each stop index.

use crate::{ColorStop, LinearGradient, RgbValue, StopVec, nearest_bracket};

/// Returns a gradient w/ exactly `resolution + 1` stops at positions
/// `k * 100 / resolution` for `k` in `0..=resolution`. The angle is copied as is.
///
/// The color at each grid position is interpolated between the two original stops that
/// surround it. Outside of the range covered by the original stops, the color of the
/// closest stop is used. The stop at `100%` always takes the color of the last stop at or
/// after `100%`. When stops share a position the first of them is used.
///
/// A `resolution` of `0` is treated as `1`. A gradient w/out any stops (which
/// [`LinearGradient::try_validate`] rejects) has no color to sample, so it equalizes to
/// [`RgbValue::default`] at every grid position.
///
/// ```
/// use gradanim_core::{LinearGradient, equalize};
///
/// let gradient = LinearGradient::try_parse("linear-gradient(#000 0%, #fff 100%)").unwrap();
/// let equalized = equalize(&gradient, 4);
/// assert_eq!(
///     equalized.to_css(),
///     "linear-gradient(0.00deg, #000000 0.00%, #404040 25.00%, #808080 50.00%, \
///      #bfbfbf 75.00%, #ffffff 100.00%)"
/// );
/// ```
#[must_use]
pub fn equalize(gradient: &LinearGradient, resolution: u32) -> LinearGradient {
    let resolution = resolution.max(1);

    let stops: StopVec = (0..=resolution)
        .map(|k| {
            let position = grid_position(k, resolution);
            let color = match nearest_bracket(&gradient.stops, position) {
                None => RgbValue::default(),
                Some(bracket) if k == resolution => bracket.above.color,
                Some(bracket) if bracket.has_zero_width() => bracket.below.color,
                Some(bracket) => {
                    let u = bracket.normalized_offset(position);
                    bracket.below.color.interpolate(bracket.above.color, u)
                }
            };
            ColorStop::new(color, position)
        })
        .collect();

    LinearGradient {
        angle: gradient.angle,
        stops,
    }
}

/// `k * 100 / resolution`, the position of the `k`th stop of an equalized gradient.
#[must_use]
pub fn grid_position(k: u32, resolution: u32) -> f64 {
    100.0 * f64::from(k) / f64::from(resolution)
}
