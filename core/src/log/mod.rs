// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Logging is done w/ [`tracing`] and is **disabled** by default. Enable it w/
//! [`try_initialize_logging_global`] (apps) or [`try_initialize_logging_thread_local`]
//! (tests), then use the [`tracing::info!`], [`tracing::debug!`], etc. macros as usual.

// Attach sources.
pub mod public_api;
pub mod rolling_file_appender_impl;
pub mod tracing_config;
pub mod tracing_init;

// Re-export.
pub use public_api::*;
pub use rolling_file_appender_impl::*;
pub use tracing_config::*;
pub use tracing_init::*;
