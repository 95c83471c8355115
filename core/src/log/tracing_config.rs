// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::ops::Add;

use miette::IntoDiagnostic;
use tracing::dispatcher::DefaultGuard;
use tracing_core::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::try_create_layers;

/// Configures where log output goes and how verbose it is. Instead of building one by
/// hand, you can convert a [`LevelFilter`], a [`DisplayPreference`] or a
/// [`WriterConfig`] into one, and compose them w/ `+`:
///
/// ```
/// use gradanim_core::{DisplayPreference, TracingConfig, WriterConfig};
/// use tracing_core::LevelFilter;
///
/// let config: TracingConfig =
///     TracingConfig::from(LevelFilter::TRACE) + DisplayPreference::Stderr.into();
/// assert_eq!(config.level_filter, LevelFilter::TRACE);
/// assert_eq!(
///     config.writer_config,
///     WriterConfig::DisplayAndFile(DisplayPreference::Stderr, "log.txt".to_string())
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TracingConfig {
    pub level_filter: LevelFilter,
    pub writer_config: WriterConfig,
}

#[derive(Debug, Clone, PartialEq)]
pub enum WriterConfig {
    None,
    Display(DisplayPreference),
    /// Path to the log file.
    File(String),
    DisplayAndFile(DisplayPreference, String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayPreference {
    Stdout,
    Stderr,
}

pub const DEFAULT_LOG_FILE_NAME: &str = "log.txt";

impl TracingConfig {
    #[must_use]
    pub fn get_level_filter(&self) -> LevelFilter { self.level_filter }

    #[must_use]
    pub fn get_writer_config(&self) -> WriterConfig { self.writer_config.clone() }

    /// Sets the global default subscriber, which once set, can't be unset or changed.
    ///
    /// # Errors
    ///
    /// Returns an error if the log file can't be created, or if a global subscriber has
    /// already been set.
    pub fn install_global(self) -> miette::Result<()> {
        let layers = try_create_layers(self)?;
        tracing_subscriber::registry()
            .with(layers)
            .try_init()
            .into_diagnostic()
    }

    /// Sets a subscriber for the current thread only, until the returned guard is dropped.
    ///
    /// # Errors
    ///
    /// Returns an error if the log file can't be created.
    pub fn install_thread_local(self) -> miette::Result<DefaultGuard> {
        let layers = try_create_layers(self)?;
        Ok(tracing_subscriber::registry().with(layers).set_default())
    }
}

impl From<LevelFilter> for TracingConfig {
    fn from(level_filter: LevelFilter) -> Self {
        Self {
            level_filter,
            writer_config: WriterConfig::File(DEFAULT_LOG_FILE_NAME.to_string()),
        }
    }
}

impl From<tracing::Level> for TracingConfig {
    fn from(level: tracing::Level) -> Self { LevelFilter::from_level(level).into() }
}

impl From<DisplayPreference> for TracingConfig {
    fn from(display_preference: DisplayPreference) -> Self {
        Self {
            level_filter: LevelFilter::DEBUG,
            writer_config: WriterConfig::Display(display_preference),
        }
    }
}

impl From<WriterConfig> for TracingConfig {
    fn from(writer_config: WriterConfig) -> Self {
        Self {
            level_filter: LevelFilter::DEBUG,
            writer_config,
        }
    }
}

/// The more verbose level filter wins, and the writer configs are merged.
impl Add for TracingConfig {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            level_filter: self.level_filter.max(rhs.level_filter),
            writer_config: self.writer_config + rhs.writer_config,
        }
    }
}

/// Merge two [`WriterConfig`]s. For each of display and file, the `rhs` value clobbers
/// the `self` value if it has one.
impl Add for WriterConfig {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        let (lhs_display, lhs_file) = self.into_parts();
        let (rhs_display, rhs_file) = rhs.into_parts();
        WriterConfig::from_parts(rhs_display.or(lhs_display), rhs_file.or(lhs_file))
    }
}

impl WriterConfig {
    fn into_parts(self) -> (Option<DisplayPreference>, Option<String>) {
        match self {
            WriterConfig::None => (None, None),
            WriterConfig::Display(display) => (Some(display), None),
            WriterConfig::File(file) => (None, Some(file)),
            WriterConfig::DisplayAndFile(display, file) => (Some(display), Some(file)),
        }
    }

    fn from_parts(display: Option<DisplayPreference>, file: Option<String>) -> Self {
        match (display, file) {
            (None, None) => WriterConfig::None,
            (Some(display), None) => WriterConfig::Display(display),
            (None, Some(file)) => WriterConfig::File(file),
            (Some(display), Some(file)) => WriterConfig::DisplayAndFile(display, file),
        }
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_level_filter_into_config_logs_to_default_file() {
        let config: TracingConfig = LevelFilter::INFO.into();
        assert_eq2!(
            config,
            TracingConfig {
                level_filter: LevelFilter::INFO,
                writer_config: WriterConfig::File(DEFAULT_LOG_FILE_NAME.to_string()),
            }
        );
    }

    #[test]
    fn test_level_into_config() {
        let config: TracingConfig = tracing::Level::WARN.into();
        assert_eq2!(config.get_level_filter(), LevelFilter::WARN);
    }

    #[test_case(
        WriterConfig::None,
        WriterConfig::File("a.log".into()),
        WriterConfig::File("a.log".into())
        ; "none plus file"
    )]
    #[test_case(
        WriterConfig::File("a.log".into()),
        WriterConfig::File("b.log".into()),
        WriterConfig::File("b.log".into())
        ; "rhs file clobbers lhs file"
    )]
    #[test_case(
        WriterConfig::Display(DisplayPreference::Stdout),
        WriterConfig::File("a.log".into()),
        WriterConfig::DisplayAndFile(DisplayPreference::Stdout, "a.log".into())
        ; "display plus file"
    )]
    #[test_case(
        WriterConfig::DisplayAndFile(DisplayPreference::Stdout, "a.log".into()),
        WriterConfig::Display(DisplayPreference::Stderr),
        WriterConfig::DisplayAndFile(DisplayPreference::Stderr, "a.log".into())
        ; "rhs display clobbers lhs display"
    )]
    #[test_case(
        WriterConfig::Display(DisplayPreference::Stderr),
        WriterConfig::None,
        WriterConfig::Display(DisplayPreference::Stderr)
        ; "display plus none"
    )]
    fn test_add_writer_configs(lhs: WriterConfig, rhs: WriterConfig, expected: WriterConfig) {
        assert_eq2!(lhs + rhs, expected);
    }

    #[test]
    fn test_add_configs_picks_more_verbose_level() {
        let config = TracingConfig::from(LevelFilter::WARN)
            + TracingConfig {
                level_filter: LevelFilter::ERROR,
                writer_config: WriterConfig::None,
            };
        assert_eq2!(config.level_filter, LevelFilter::WARN);
        assert_eq2!(
            config.writer_config,
            WriterConfig::File(DEFAULT_LOG_FILE_NAME.to_string())
        );
    }
}
