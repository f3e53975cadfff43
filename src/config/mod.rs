//! Configuration for folio
//!
//! Configuration is loaded in order of precedence:
//! 1. Environment variables (highest priority)
//! 2. Config file (~/.config/folio/config.toml)
//! 3. Built-in defaults (lowest priority)

use anyhow::{Context, Result};
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::PathBuf;

// ─────────────────────────────────────────────────────────────────────────────
// Submodules
// ─────────────────────────────────────────────────────────────────────────────

mod mail;
mod observability;
mod page;
mod serialization;

#[cfg(test)]
mod tests;

// ─────────────────────────────────────────────────────────────────────────────
// Re-exports
// ─────────────────────────────────────────────────────────────────────────────

pub use mail::{FileMail, MailConfig};
pub use observability::{FileLogging, LogRotation, LoggingConfig};
pub use page::{EffectsConfig, FileEffects, FileTyping, TypingConfig};

// ─────────────────────────────────────────────────────────────────────────────
// Constants
// ─────────────────────────────────────────────────────────────────────────────

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

const DEFAULT_BIND: &str = "127.0.0.1:3000";
const DEFAULT_THEME: &str = "Folio Dark";

// ─────────────────────────────────────────────────────────────────────────────
// Application Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Address the contact relay listens on
    pub bind_addr: SocketAddr,

    /// Portfolio content file; bundled content when unset
    pub content_path: Option<PathBuf>,

    /// Whether to run the TUI (disabled for headless relay mode)
    pub enable_tui: bool,

    /// Theme name: "Folio Dark", "Folio Light", "Terminal"
    pub theme: String,

    /// Hero headline typing animation
    pub typing: TypingConfig,

    /// Pointer and ambient effects
    pub effects: EffectsConfig,

    /// Contact relay mail provider
    pub mail: MailConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            content_path: None,
            enable_tui: true,
            theme: DEFAULT_THEME.to_string(),
            typing: TypingConfig::default(),
            effects: EffectsConfig::default(),
            mail: MailConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// File Configuration (deserialization layer)
// ─────────────────────────────────────────────────────────────────────────────

/// Config file structure (subset of Config that makes sense to persist)
#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileConfig {
    pub bind_addr: Option<String>,
    pub content_path: Option<String>,
    pub theme: Option<String>,

    /// Optional [typing] section
    pub typing: Option<FileTyping>,

    /// Optional [effects] section
    pub effects: Option<FileEffects>,

    /// Optional [mail] section
    pub mail: Option<FileMail>,

    /// Optional [logging] section
    pub logging: Option<FileLogging>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Configuration Loading
// ─────────────────────────────────────────────────────────────────────────────

impl Config {
    /// Get the config file path: ~/.config/folio/config.toml
    /// Uses Unix-style ~/.config on all platforms for consistency
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("folio").join("config.toml"))
    }

    /// Create config file with defaults if it doesn't exist
    pub fn ensure_config_exists() {
        let Some(path) = Self::config_path() else {
            return;
        };

        if path.exists() {
            return;
        }

        if let Some(parent) = path.parent() {
            if std::fs::create_dir_all(parent).is_err() {
                return; // config is optional
            }
        }

        let _ = std::fs::write(&path, Self::default().to_toml());
    }

    /// Overwrite the config file with the default template
    pub fn reset_config_file() -> Result<PathBuf> {
        let path = Self::config_path().context("Could not determine home directory")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        std::fs::write(&path, Self::default().to_toml())
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(path)
    }

    /// Load file config if it exists
    ///
    /// A config file that exists but cannot be parsed is fatal: the process
    /// exits with a framed error instead of silently using defaults.
    fn load_file_config() -> FileConfig {
        let Some(path) = Self::config_path() else {
            return FileConfig::default();
        };

        match std::fs::read_to_string(&path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => config,
                Err(e) => {
                    config_error("Failed to parse configuration file", &path, &e.to_string());
                    eprintln!("  Tip: Check for:\n");
                    eprintln!("    - Missing quotes around string values");
                    eprintln!("    - Invalid boolean values (use true/false)");
                    eprintln!("    - Typos in section names\n");
                    eprintln!("  To reset, run `folio config --reset`.\n");
                    std::process::exit(1);
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => FileConfig::default(),
            Err(e) => {
                config_error("Cannot read configuration file", &path, &e.to_string());
                std::process::exit(1);
            }
        }
    }

    /// Load configuration: env vars > file > defaults
    pub fn from_env() -> Self {
        let file = Self::load_file_config();
        match Self::resolve(file, |key| std::env::var(key).ok()) {
            Ok(config) => config,
            Err(e) => {
                let path = Self::config_path().unwrap_or_default();
                config_error("Invalid configuration value", &path, &format!("{:#}", e));
                std::process::exit(1);
            }
        }
    }

    /// Merge a parsed file with an environment lookup
    pub(crate) fn resolve(file: FileConfig, env: impl Fn(&str) -> Option<String>) -> Result<Self> {
        // Bind address: env > file > default
        let bind_addr = env("FOLIO_BIND")
            .or(file.bind_addr)
            .unwrap_or_else(|| DEFAULT_BIND.to_string());
        let bind_addr: SocketAddr = bind_addr
            .parse()
            .with_context(|| format!("Invalid bind address: {bind_addr}"))?;

        // Content file: env > file > bundled
        let content_path = env("FOLIO_CONTENT")
            .or(file.content_path)
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        // TUI toggle: env only (runtime flag)
        let enable_tui = env("FOLIO_NO_TUI")
            .map(|v| v != "1" && v.to_lowercase() != "true")
            .unwrap_or(true);

        // Theme: env > file > default
        let theme = env("FOLIO_THEME")
            .or(file.theme)
            .unwrap_or_else(|| DEFAULT_THEME.to_string());

        let typing = TypingConfig::from_file(file.typing);
        let effects = EffectsConfig::from_file(file.effects);
        let logging = LoggingConfig::from_file(file.logging);

        // Mail: API key from env only, never persisted
        let mail = MailConfig::from_file(file.mail, env("RESEND_API_KEY"));

        Ok(Self {
            bind_addr,
            content_path,
            enable_tui,
            theme,
            typing,
            effects,
            mail,
            logging,
        })
    }

    /// Base URL the TUI contact form posts to
    pub fn relay_url(&self) -> String {
        format!("http://{}", self.bind_addr)
    }
}

fn config_error(headline: &str, path: &std::path::Path, detail: &str) {
    eprintln!("\n╔══════════════════════════════════════════════════════════════╗");
    eprintln!("║  CONFIG ERROR - {:<45}║", headline);
    eprintln!("╚══════════════════════════════════════════════════════════════╝\n");
    eprintln!("  File: {}\n", path.display());
    eprintln!("  Error: {}\n", detail);
}
