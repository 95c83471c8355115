// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod clap_config;
pub mod launcher;

// Re-export.
pub use clap_config::*;
pub use launcher::*;
