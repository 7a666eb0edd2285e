use thiserror::Error;

use crate::config::ClipboardBackend;

use super::{osc52, system};

pub type ClipboardResult = Result<(), ClipboardError>;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("system clipboard unavailable: {0}")]
    SystemUnavailable(String),

    #[error("clipboard write failed: {0}")]
    Write(String),

    #[error("text too large for terminal clipboard ({0} bytes)")]
    TooLarge(usize),
}

pub fn copy_to_clipboard(text: &str, backend: ClipboardBackend) -> ClipboardResult {
    match backend {
        ClipboardBackend::System => system::copy(text),
        ClipboardBackend::Osc52 => osc52::copy(text),
        ClipboardBackend::Auto => system::copy(text).or_else(|e| {
            log::debug!("system clipboard failed, falling back to OSC 52: {}", e);
            osc52::copy(text)
        }),
    }
}
