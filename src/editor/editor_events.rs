use ratatui::crossterm::event::{KeyCode, KeyEvent};
use tui_textarea::Input;

use crate::app::{App, Focus};

/// Route a key to the focused pane
pub fn handle_editor_key(app: &mut App, key: KeyEvent) {
    match app.focus {
        Focus::SecretEditor => {
            if app.editor.secret.input(Input::from(key)) {
                app.editor.refresh_format();
            }
        }
        Focus::SealedOutput => {
            if is_navigation_key(key) {
                app.editor.sealed.input(Input::from(key));
            }
        }
    }
}

/// Insert pasted text into the secret editor
pub fn handle_paste(app: &mut App, text: &str) {
    if app.focus != Focus::SecretEditor {
        return;
    }
    // Terminals paste with \r line endings
    let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
    app.editor.secret.insert_str(normalized);
    app.editor.refresh_format();
}

/// The sealed output is read-only: only cursor movement gets through
fn is_navigation_key(key: KeyEvent) -> bool {
    matches!(
        key.code,
        KeyCode::Up
            | KeyCode::Down
            | KeyCode::Left
            | KeyCode::Right
            | KeyCode::Home
            | KeyCode::End
            | KeyCode::PageUp
            | KeyCode::PageDown
    )
}

#[cfg(test)]
#[path = "editor_events_tests.rs"]
mod editor_events_tests;
