// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{self, Display, Formatter};

/// Formats an [f64] w/ exactly 2 decimal places, the way every number in the generated
/// CSS is written (angles, stop positions, keyframe percentages).
///
/// - Ties round away from zero on the decimal value, so `3.125` is written as `3.13`.
/// - Negative zero is written as `0.00`.
///
/// ```
/// use gradanim_core::CssNumber;
/// assert_eq!(CssNumber(4.166_666).to_string(), "4.17");
/// assert_eq!(CssNumber(-0.0).to_string(), "0.00");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CssNumber(pub f64);

impl Display for CssNumber {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        // Adding 0.0 turns -0.0 into 0.0.
        let rounded = (self.0 * 100.0).round() / 100.0 + 0.0;
        write!(f, "{rounded:.2}")
    }
}
