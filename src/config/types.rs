// Configuration type definitions

use std::collections::BTreeMap;
use std::time::Duration;

use serde::Deserialize;

/// Clipboard backend selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ClipboardBackend {
    #[default]
    Auto,
    System,
    Osc52,
}

/// Clipboard configuration section
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClipboardConfig {
    #[serde(default)]
    pub backend: ClipboardBackend,
}

/// Backend server section
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_server_url")]
    pub url: String,
    #[serde(default)]
    pub disable_load_secrets: bool,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Sent with every request, e.g. a session cookie
    #[serde(default)]
    pub headers: BTreeMap<String, String>,
}

fn default_server_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            url: default_server_url(),
            disable_load_secrets: false,
            timeout_secs: default_timeout_secs(),
            headers: BTreeMap::new(),
        }
    }
}

/// Notification section
#[derive(Debug, Clone, Deserialize)]
pub struct NotificationConfig {
    #[serde(default = "default_duration_ms")]
    pub duration_ms: u64,
    #[serde(default = "default_exit_transition_ms")]
    pub exit_transition_ms: u64,
    /// Ring the terminal bell for assertive announcements
    #[serde(default = "default_bell")]
    pub bell: bool,
}

fn default_duration_ms() -> u64 {
    3000
}

fn default_exit_transition_ms() -> u64 {
    200
}

fn default_bell() -> bool {
    true
}

impl NotificationConfig {
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }

    pub fn exit_transition(&self) -> Duration {
        Duration::from_millis(self.exit_transition_ms)
    }
}

impl Default for NotificationConfig {
    fn default() -> Self {
        NotificationConfig {
            duration_ms: default_duration_ms(),
            exit_transition_ms: default_exit_transition_ms(),
            bell: default_bell(),
        }
    }
}

/// Editor section
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EditorConfig {
    /// Shown in the secret editor at startup when no file is given
    #[serde(default)]
    pub initial_secret: Option<String>,
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub notification: NotificationConfig,
    #[serde(default)]
    pub clipboard: ClipboardConfig,
    #[serde(default)]
    pub editor: EditorConfig,
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
