// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod hex_color_parser;
pub mod rgb_value;

// Re-export.
pub use hex_color_parser::*;
pub use rgb_value::*;
