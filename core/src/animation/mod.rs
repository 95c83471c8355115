// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod animation_args;
pub mod animation_spec;
pub mod generator;
pub mod keyframes_serializer;

// Re-export.
pub use animation_args::*;
pub use animation_spec::*;
pub use generator::*;
pub use keyframes_serializer::*;
