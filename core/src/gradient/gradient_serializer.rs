// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{self, Display, Formatter};

use crate::{ColorStop, CssNumber, LinearGradient};

impl LinearGradient {
    /// `linear-gradient(<angle>deg, <color> <position>%, ...)`. Every number is written w/
    /// 2 decimal places (see [`CssNumber`]) and the stops are written in stored order.
    ///
    /// ```
    /// use gradanim_core::{ColorStop, LinearGradient};
    ///
    /// let gradient = LinearGradient::new(
    ///     30.0,
    ///     [ColorStop::new((0x3d, 0x33, 0x93), 0.0), ColorStop::new((0x35, 0xeb, 0x93), 100.0)],
    /// );
    /// assert_eq!(
    ///     gradient.to_css(),
    ///     "linear-gradient(30.00deg, #3d3393 0.00%, #35eb93 100.00%)"
    /// );
    /// ```
    #[must_use]
    pub fn to_css(&self) -> String { self.to_string() }
}

impl Display for LinearGradient {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "linear-gradient({}deg", CssNumber(self.angle))?;
        for stop in &self.stops {
            write!(f, ", {stop}")?;
        }
        write!(f, ")")
    }
}

/// `<color> <position>%`
impl Display for ColorStop {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}%", self.color, CssNumber(self.position))
    }
}
