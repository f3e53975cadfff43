//! Configuration tests
//!
//! The template written by `to_toml()` must parse back through `FileConfig`,
//! and every persisted field must survive the trip.

use super::*;
use std::collections::HashMap;

fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

// ─────────────────────────────────────────────────────────────────────────────
// Round-trip tests
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_config_roundtrip_default() {
    let config = Config::default();
    let toml_str = config.to_toml();

    let parsed: Result<FileConfig, _> = toml::from_str(&toml_str);
    assert!(
        parsed.is_ok(),
        "Default config should round-trip.\nTOML:\n{}\nError: {:?}",
        toml_str,
        parsed.err()
    );
}

#[test]
fn test_config_roundtrip_preserves_values() {
    let mut config = Config::default();
    config.theme = "Terminal".to_string();
    config.content_path = Some(PathBuf::from("/srv/folio/content.toml"));
    config.typing.speed_ms = 60;
    config.typing.delay_ms = 1800;
    config.effects.cursor_trail = false;
    config.effects.magnetic_strength = 0.5;
    config.mail.to = vec!["a@example.com".to_string(), "b@example.com".to_string()];
    config.logging.file_enabled = true;
    config.logging.file_rotation = LogRotation::Hourly;

    let file: FileConfig = toml::from_str(&config.to_toml()).unwrap();
    let resolved = Config::resolve(file, |_| None).unwrap();

    assert_eq!(resolved.theme, "Terminal");
    assert_eq!(
        resolved.content_path,
        Some(PathBuf::from("/srv/folio/content.toml"))
    );
    assert_eq!(resolved.typing, config.typing);
    assert_eq!(resolved.effects, config.effects);
    assert_eq!(resolved.mail.to, config.mail.to);
    assert!(resolved.logging.file_enabled);
    assert_eq!(resolved.logging.file_rotation, LogRotation::Hourly);
}

#[test]
fn test_template_never_contains_api_key() {
    let mut config = Config::default();
    config.mail.api_key = Some("re_secret".to_string());
    let toml_str = config.to_toml();
    assert!(!toml_str.contains("re_secret"));
    assert!(toml_str.contains("RESEND_API_KEY"));
}

#[test]
fn test_template_documents_every_section() {
    let toml_str = Config::default().to_toml();
    for section in ["[typing]", "[effects]", "[mail]", "[logging]"] {
        assert!(
            toml_str.contains(section),
            "{} missing from TOML output!\nTOML output:\n{}",
            section,
            toml_str
        );
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Precedence
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_env_overrides_file() {
    let file: FileConfig = toml::from_str(
        r#"
bind_addr = "127.0.0.1:4000"
theme = "Folio Light"
"#,
    )
    .unwrap();
    let env = env_from(&[
        ("FOLIO_BIND", "0.0.0.0:8081"),
        ("FOLIO_NO_TUI", "1"),
        ("RESEND_API_KEY", "re_123"),
    ]);

    let config = Config::resolve(file, env).unwrap();
    assert_eq!(config.bind_addr.to_string(), "0.0.0.0:8081");
    assert_eq!(config.theme, "Folio Light");
    assert!(!config.enable_tui);
    assert!(config.mail.is_configured());
    assert_eq!(config.relay_url(), "http://0.0.0.0:8081");
}

#[test]
fn test_defaults_without_file_or_env() {
    let config = Config::resolve(FileConfig::default(), |_| None).unwrap();
    assert_eq!(config.bind_addr.to_string(), "127.0.0.1:3000");
    assert!(config.enable_tui);
    assert!(config.content_path.is_none());
    assert!(!config.mail.is_configured());
    assert_eq!(config.typing.speed_ms, 80);
    assert_eq!(config.typing.delay_ms, 2500);
}

#[test]
fn test_blank_api_key_is_unconfigured() {
    let config = Config::resolve(FileConfig::default(), env_from(&[("RESEND_API_KEY", "  ")])).unwrap();
    assert!(!config.mail.is_configured());
}

#[test]
fn test_invalid_bind_address_is_an_error() {
    let result = Config::resolve(FileConfig::default(), env_from(&[("FOLIO_BIND", "not-an-addr")]));
    assert!(result.is_err());
}

#[test]
fn test_zero_typing_speed_is_clamped() {
    let file: FileConfig = toml::from_str("[typing]\nspeed_ms = 0\n").unwrap();
    let config = Config::resolve(file, |_| None).unwrap();
    assert_eq!(config.typing.speed_ms, 1);
}

#[test]
fn test_unknown_rotation_falls_back_to_daily() {
    assert_eq!(LogRotation::parse("weekly"), LogRotation::Daily);
    assert_eq!(LogRotation::parse("HOURLY"), LogRotation::Hourly);
}
