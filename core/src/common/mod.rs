// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod common_result_and_error;
pub mod constants;
pub mod css_number;

// Re-export.
pub use common_result_and_error::*;
pub use constants::*;
pub use css_number::*;
