//! Tests for config

use super::*;
use proptest::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_config_default_values() {
    let config = Config::default();
    assert_eq!(config.clipboard.backend, ClipboardBackend::Auto);
    assert_eq!(config.server.url, "http://localhost:8080");
    assert_eq!(config.notification.duration_ms, 3000);
    assert!(config.editor.initial_secret.is_none());
}

#[test]
fn test_parse_clipboard_backends() {
    for (name, expected) in [
        ("auto", ClipboardBackend::Auto),
        ("system", ClipboardBackend::System),
        ("osc52", ClipboardBackend::Osc52),
    ] {
        let toml = format!("[clipboard]\nbackend = \"{}\"\n", name);
        let config: Config = toml::from_str(&toml).unwrap();
        assert_eq!(config.clipboard.backend, expected);
    }
}

#[test]
fn test_missing_file_returns_defaults_without_warning() {
    let dir = tempfile::tempdir().unwrap();
    let result = load_config_from(&dir.path().join("config.toml"));

    assert!(result.warning.is_none());
    assert_eq!(result.config.server.url, "http://localhost:8080");
}

#[test]
fn test_load_valid_file() {
    let file = write_config(
        r#"
[server]
url = "https://seal.internal"

[notification]
duration_ms = 1500
"#,
    );

    let result = load_config_from(file.path());

    assert!(result.warning.is_none());
    assert_eq!(result.config.server.url, "https://seal.internal");
    assert_eq!(result.config.notification.duration_ms, 1500);
    assert_eq!(result.config.notification.exit_transition_ms, 200);
}

#[test]
fn test_invalid_file_returns_defaults_with_warning() {
    let file = write_config("[clipboard]\nbackend = \"invalid\"\n");

    let result = load_config_from(file.path());

    let warning = result.warning.unwrap();
    assert!(warning.starts_with("Invalid config:"), "got: {}", warning);
    assert_eq!(result.config.clipboard.backend, ClipboardBackend::Auto);
}

#[test]
fn test_unreadable_path_returns_warning() {
    // A directory exists but cannot be read as a file
    let dir = tempfile::tempdir().unwrap();

    let result = load_config_from(dir.path());

    let warning = result.warning.unwrap();
    assert!(warning.starts_with("Failed to read config:"), "got: {}", warning);
}

#[test]
fn test_config_path_location() {
    let path = get_config_path();
    assert!(path.ends_with(".config/sealui/config.toml"));
}

// Malformed TOML always falls back to defaults and reports why
proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_malformed_toml_fallback(
        malformed in prop::sample::select(vec![
            "[server\nurl = \"http://x\"",
            "[server]\nurl = http://x",
            "[server]\n url",
            "server]\nurl = \"http://x\"",
            "[notification]\nbell = \"yes",
            "[notification]\nduration_ms = \"soon\"",
        ])
    ) {
        let file = write_config(malformed);

        let result = load_config_from(file.path());

        prop_assert!(result.warning.is_some());
        prop_assert_eq!(result.config.server.url.as_str(), "http://localhost:8080");
        prop_assert_eq!(result.config.notification.duration_ms, 3000);
    }
}
