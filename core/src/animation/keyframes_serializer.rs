// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::Write;

use crate::{CssNumber, Keyframe};

const INDENT: &str = "    ";

/// Renders a CSS `@keyframes` block. The layout (including the space after the name, and
/// no newline after the closing brace) is fixed, so the output can be diffed against
/// stylesheets that were generated before:
///
/// ```text
/// @keyframes <name> 
/// {
///     0.00%
///     {
///         background-image: linear-gradient(...);
///     }
///     ...
/// }
/// ```
#[must_use]
pub fn keyframes_to_css(keyframes: &[Keyframe], name: &str) -> String {
    let mut acc = format!("@keyframes {name} \n{{\n");

    for keyframe in keyframes {
        // Writing to a String never fails.
        let _ = write!(
            acc,
            "{INDENT}{percentage}%\n\
             {INDENT}{{\n\
             {INDENT}{INDENT}background-image: {gradient};\n\
             {INDENT}}}\n",
            percentage = CssNumber(keyframe.percentage),
            gradient = keyframe.gradient,
        );
    }

    acc.push('}');
    acc
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ColorStop, LinearGradient, assert_eq2};

    #[test]
    fn test_keyframes_to_css() {
        let keyframes = [
            Keyframe {
                percentage: 0.0,
                gradient: LinearGradient::new(
                    30.0,
                    [
                        ColorStop::new((0x3d, 0x33, 0x93), 0.0),
                        ColorStop::new((0x35, 0xeb, 0x93), 100.0),
                    ],
                ),
            },
            Keyframe {
                percentage: 100.0 / 3.0,
                gradient: LinearGradient::new(
                    20.0,
                    [
                        ColorStop::new((0x6e, 0x45, 0xe2), 0.0),
                        ColorStop::new((0x88, 0xd3, 0xce), 100.0),
                    ],
                ),
            },
        ];

        let expected = "@keyframes glow \n\
                        {\n    \
                            0.00%\n    \
                            {\n        \
                                background-image: linear-gradient(30.00deg, #3d3393 0.00%, #35eb93 100.00%);\n    \
                            }\n    \
                            33.33%\n    \
                            {\n        \
                                background-image: linear-gradient(20.00deg, #6e45e2 0.00%, #88d3ce 100.00%);\n    \
                            }\n\
                        }";

        assert_eq2!(keyframes_to_css(&keyframes, "glow"), expected);
    }

    #[test]
    fn test_no_keyframes() {
        assert_eq2!(keyframes_to_css(&[], "empty"), "@keyframes empty \n{\n}");
    }
}
