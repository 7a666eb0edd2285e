//! Secret manifest handling
//!
//! Converts the secret editor's text between YAML and JSON, toggles Base64
//! encoding of `data` values and prepares the payload sent for sealing.
//! Parsing and encoding are delegated to `serde_yaml`, `serde_json` and
//! `base64`.

mod convert;
mod encoding;

pub use convert::{TextFormat, convert_text, detect_format, json_to_yaml, yaml_to_json};
pub use encoding::{ToggleReport, is_base64, seal_payload, toggle_encoding};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("Please enter some text")]
    Empty,

    #[error("Invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Secret has no 'data' section")]
    MissingData,

    #[error("Secret 'data' must be a mapping of keys to values")]
    InvalidData,
}
