//! Base64 handling for secret `data` values

use base64::{Engine as _, engine::general_purpose::STANDARD};
use serde_json::Value;

use super::ManifestError;
use super::convert::yaml_to_json;

/// What a toggle did to the `data` values
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ToggleReport {
    pub decoded: usize,
    pub encoded: usize,
    pub skipped: usize,
}

impl ToggleReport {
    /// Message for the notification shown after a toggle
    pub fn summary(&self) -> String {
        match (self.decoded, self.encoded) {
            (0, 0) => "Nothing to encode or decode".to_string(),
            (0, _) => "Text successfully encoded to Base64".to_string(),
            (_, 0) => "Text successfully decoded".to_string(),
            (d, e) => format!("Decoded {} and encoded {} values", d, e),
        }
    }
}

/// True when `s` decodes as standard Base64 and re-encodes to itself
pub fn is_base64(s: &str) -> bool {
    STANDARD
        .decode(s)
        .map(|bytes| STANDARD.encode(bytes) == s)
        .unwrap_or(false)
}

enum Toggled {
    Decoded(String),
    Encoded(String),
    Skipped,
}

fn toggle_value(value: &Value) -> Toggled {
    match value {
        Value::String(s) if is_base64(s) => match STANDARD.decode(s) {
            Ok(bytes) => match String::from_utf8(bytes) {
                Ok(text) => Toggled::Decoded(text),
                Err(_) => Toggled::Skipped,
            },
            Err(_) => Toggled::Skipped,
        },
        Value::String(s) => Toggled::Encoded(STANDARD.encode(s)),
        Value::Number(n) => Toggled::Encoded(STANDARD.encode(n.to_string())),
        Value::Bool(b) => Toggled::Encoded(STANDARD.encode(b.to_string())),
        Value::Null | Value::Array(_) | Value::Object(_) => Toggled::Skipped,
    }
}

/// Flip every `data` value between Base64 and plain text.
///
/// Works on a copy; the input is left untouched.
pub fn toggle_encoding(secret: &Value) -> Result<(Value, ToggleReport), ManifestError> {
    let mut toggled = secret.clone();
    let data = toggled
        .get_mut("data")
        .ok_or(ManifestError::MissingData)?
        .as_object_mut()
        .ok_or(ManifestError::InvalidData)?;

    let mut report = ToggleReport::default();
    for (key, value) in data.iter_mut() {
        match toggle_value(value) {
            Toggled::Decoded(text) => {
                *value = Value::String(text);
                report.decoded += 1;
            }
            Toggled::Encoded(text) => {
                *value = Value::String(text);
                report.encoded += 1;
            }
            Toggled::Skipped => {
                log::debug!("Left data key '{}' unchanged", key);
                report.skipped += 1;
            }
        }
    }

    Ok((toggled, report))
}

/// Build the JSON body for a seal request from the editor text.
///
/// The backend expects encoded values, so a secret whose first `data`
/// value is plain text gets encoded before sending.
pub fn seal_payload(text: &str) -> Result<Value, ManifestError> {
    let secret = yaml_to_json(text)?;
    let data = secret
        .get("data")
        .ok_or(ManifestError::MissingData)?
        .as_object()
        .ok_or(ManifestError::InvalidData)?;

    let needs_encoding = match data.values().next() {
        Some(Value::String(first)) => !is_base64(first),
        Some(_) => true,
        None => false,
    };

    if needs_encoding {
        let (encoded, _) = toggle_encoding(&secret)?;
        Ok(encoded)
    } else {
        Ok(secret)
    }
}

#[cfg(test)]
#[path = "encoding_tests.rs"]
mod encoding_tests;
