// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::path::Path;

use miette::IntoDiagnostic;
use tracing_appender::rolling::{RollingFileAppender, Rotation};

/// Creates a file appender that never rotates, so all the log output ends up in exactly
/// the file at `path_str`. The parent directory is created if it doesn't exist, and a
/// bare file name is relative to the current working directory.
///
/// # Errors
///
/// Returns an error if `path_str` doesn't end in a file name, or if the file can't be
/// opened for appending.
pub fn try_create_rolling_file_appender(path_str: &str) -> miette::Result<RollingFileAppender> {
    let path = Path::new(path_str);

    let Some(file_name) = path.file_name().and_then(|it| it.to_str()) else {
        miette::bail!("Log file path `{path_str}` does not end in a file name");
    };

    let parent_dir = match path.parent() {
        Some(it) if !it.as_os_str().is_empty() => it,
        _ => Path::new("."),
    };

    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name)
        .build(parent_dir)
        .into_diagnostic()
}
