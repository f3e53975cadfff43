//! Logging configuration and the file writer it describes

use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_appender::rolling::{self, RollingFileAppender};

/// How often the JSON log file rolls over
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum LogRotation {
    Hourly,
    #[default]
    Daily,
    /// Single log file
    Never,
}

impl LogRotation {
    /// Lenient: anything unrecognised rolls daily
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "hourly" => Self::Hourly,
            "never" => Self::Never,
            _ => Self::Daily,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hourly => "hourly",
            Self::Daily => "daily",
            Self::Never => "never",
        }
    }

    fn appender(self, dir: &Path, prefix: &str) -> RollingFileAppender {
        match self {
            Self::Hourly => rolling::hourly(dir, prefix),
            Self::Daily => rolling::daily(dir, prefix),
            Self::Never => rolling::never(dir, prefix),
        }
    }
}

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// trace, debug, info, warn, error
    pub level: String,
    /// JSON file output next to the TUI buffer or stdout
    pub file_enabled: bool,
    pub file_dir: PathBuf,
    pub file_rotation: LogRotation,
    /// "folio" -> "folio.2026-01-15"
    pub file_prefix: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file_enabled: false,
            file_dir: PathBuf::from("./logs"),
            file_rotation: LogRotation::Daily,
            file_prefix: "folio".to_string(),
        }
    }
}

/// `[logging]` as written in the config file
#[derive(Debug, Deserialize, Default)]
pub struct FileLogging {
    pub level: Option<String>,
    pub file_enabled: Option<bool>,
    pub file_dir: Option<String>,
    pub file_rotation: Option<String>,
    pub file_prefix: Option<String>,
}

impl LoggingConfig {
    pub fn from_file(file: Option<FileLogging>) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();

        Self {
            level: file
                .level
                .map(|l| l.trim().to_ascii_lowercase())
                .filter(|l| !l.is_empty())
                .unwrap_or(defaults.level),
            file_enabled: file.file_enabled.unwrap_or(defaults.file_enabled),
            file_dir: file.file_dir.map(PathBuf::from).unwrap_or(defaults.file_dir),
            file_rotation: file
                .file_rotation
                .as_deref()
                .map(LogRotation::parse)
                .unwrap_or(defaults.file_rotation),
            file_prefix: file.file_prefix.unwrap_or(defaults.file_prefix),
        }
    }

    /// Filter used when RUST_LOG is unset
    pub fn filter_directive(&self) -> String {
        format!("folio={},tower_http=debug,axum=debug", self.level)
    }

    /// Rolling, non-blocking file writer. `None` when file logging is off or
    /// the directory cannot be created (logging continues without it).
    /// The guard must be held for the life of the program so logs flush.
    pub fn file_writer(&self) -> Option<(NonBlocking, WorkerGuard)> {
        if !self.file_enabled {
            return None;
        }
        if let Err(e) = std::fs::create_dir_all(&self.file_dir) {
            eprintln!(
                "Warning: Could not create log directory {:?}: {}",
                self.file_dir, e
            );
            return None;
        }
        let appender = self.file_rotation.appender(&self.file_dir, &self.file_prefix);
        Some(tracing_appender::non_blocking(appender))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_level_is_normalised() {
        let config = LoggingConfig::from_file(Some(FileLogging {
            level: Some(" DEBUG ".into()),
            ..Default::default()
        }));
        assert_eq!(config.filter_directive(), "folio=debug,tower_http=debug,axum=debug");
    }

    #[test]
    fn disabled_file_logging_has_no_writer() {
        assert!(LoggingConfig::default().file_writer().is_none());
    }
}
