//! Copying the focused pane

use crate::app::{App, Focus};

use super::backend::copy_to_clipboard;

/// Copy the focused pane's text and report the outcome as a notification
pub fn copy_focused(app: &mut App) {
    let (text, what) = match app.focus {
        Focus::SecretEditor => (app.editor.secret_text(), "secret"),
        Focus::SealedOutput => (app.editor.sealed_text(), "sealed secret"),
    };

    if text.trim().is_empty() {
        app.notification.show_warning("Nothing to copy");
        return;
    }

    match copy_to_clipboard(&text, app.clipboard_backend) {
        Ok(()) => {
            app.notification.show_success(&format!("Copied {}!", what));
        }
        Err(e) => {
            log::warn!("copy failed: {}", e);
            app.notification.show_error(&format!("Copy failed: {}", e));
        }
    }
}
