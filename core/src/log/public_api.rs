// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use tracing::dispatcher;
use tracing_core::LevelFilter;

use crate::{TracingConfig, ok};

/// Sets the global default subscriber, which once set, can't be unset or changed. This is
/// great for apps.
///
/// Logging is **DISABLED** by **default**. If `options` has a level filter of
/// [`LevelFilter::OFF`] then this does nothing, and the [`tracing::info!`],
/// [`tracing::debug!`], etc. macros produce no output.
///
/// `options` is anything that converts into a [`TracingConfig`], eg: a [`LevelFilter`]
/// (logs to [`crate::DEFAULT_LOG_FILE_NAME`]), a [`crate::DisplayPreference`] or a
/// [`crate::WriterConfig`].
///
/// # Errors
///
/// Returns an error if the log file can't be created, or if a global subscriber has
/// already been set.
pub fn try_initialize_logging_global(options: impl Into<TracingConfig>) -> miette::Result<()> {
    let it: TracingConfig = options.into();

    // Early return if the level filter is off.
    if matches!(it.get_level_filter(), LevelFilter::OFF) {
        return ok!();
    }

    it.install_global()
}

/// Same as [`try_initialize_logging_global`], except that the subscriber is only set for
/// the current thread, and only until the returned guard is dropped. This is great for
/// tests.
///
/// Returns [None] if the level filter is [`LevelFilter::OFF`].
///
/// # Errors
///
/// Returns an error if the log file can't be created.
pub fn try_initialize_logging_thread_local(
    options: impl Into<TracingConfig>,
) -> miette::Result<Option<dispatcher::DefaultGuard>> {
    let it: TracingConfig = options.into();

    // Early return if the level filter is off.
    if matches!(it.get_level_filter(), LevelFilter::OFF) {
        return Ok(None);
    }

    it.install_thread_local().map(Some)
}

#[cfg(test)]
mod tests {
    use gradanim_test_fixtures::try_create_temp_dir;

    use super::*;
    use crate::WriterConfig;

    #[test]
    fn test_level_off_does_nothing() {
        let guard = try_initialize_logging_thread_local(LevelFilter::OFF).unwrap();
        assert!(guard.is_none());
        // Would fail w/ an error if a global subscriber was set.
        try_initialize_logging_global(LevelFilter::OFF).unwrap();
    }

    #[test]
    fn test_thread_local_logging_to_file() {
        let temp_dir = try_create_temp_dir().unwrap();
        let file_path = temp_dir.join("test.log");

        let guard = try_initialize_logging_thread_local(TracingConfig {
            level_filter: LevelFilter::DEBUG,
            writer_config: WriterConfig::File(file_path.to_string_lossy().to_string()),
        })
        .unwrap();
        assert!(guard.is_some());

        tracing::info!(answer = 42, "info message");
        tracing::debug!("debug message");
        tracing::trace!("trace message");
        drop(guard);

        let output = std::fs::read_to_string(&file_path).unwrap();
        assert!(output.contains("info message"));
        assert!(output.contains("answer=42"));
        assert!(output.contains("debug message"));
        assert!(!output.contains("trace message"));
        // The file layer doesn't write ANSI escape sequences.
        assert!(!output.contains('\u{1b}'));
    }
}
