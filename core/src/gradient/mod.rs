// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod equalizer;
pub mod gradient_parser;
pub mod gradient_serializer;
pub mod linear_gradient;
pub mod position_lookup;

// Re-export.
pub use equalizer::*;
pub use gradient_parser::*;
pub use linear_gradient::*;
pub use position_lookup::*;
