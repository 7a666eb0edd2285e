//! OSC 52 clipboard backend
//!
//! Sets the clipboard through a terminal escape sequence. Works over SSH and
//! inside tmux when the terminal allows it.

use base64::{Engine as _, engine::general_purpose::STANDARD};
use std::io::{self, Write};

use super::backend::{ClipboardError, ClipboardResult};

/// Many terminals silently drop longer sequences
pub const MAX_ENCODED_LEN: usize = 100_000;

pub fn copy(text: &str) -> ClipboardResult {
    let mut stdout = io::stdout().lock();
    write_sequence(&mut stdout, text)
}

/// Writes `\x1b]52;c;{base64}\x07` to `out`
pub fn write_sequence<W: Write>(out: &mut W, text: &str) -> ClipboardResult {
    let encoded = STANDARD.encode(text);
    if encoded.len() > MAX_ENCODED_LEN {
        return Err(ClipboardError::TooLarge(text.len()));
    }

    write!(out, "\x1b]52;c;{}\x07", encoded)
        .and_then(|_| out.flush())
        .map_err(|e| ClipboardError::Write(e.to_string()))
}
