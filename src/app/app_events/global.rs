use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::super::app_state::App;
use crate::clipboard;

/// Keys that work regardless of focus. Returns true when consumed.
pub fn handle_global_keys(app: &mut App, key: KeyEvent) -> bool {
    if !key.modifiers.contains(KeyModifiers::CONTROL) {
        if key.code == KeyCode::Tab && !app.secrets.is_visible() {
            app.toggle_focus();
            return true;
        }
        return false;
    }

    match key.code {
        KeyCode::Char('c') | KeyCode::Char('q') => {
            app.should_quit = true;
            true
        }
        KeyCode::Char('d') => {
            app.dismiss_newest_notification();
            true
        }
        // Everything below is unavailable while the popup is open
        _ if app.secrets.is_visible() => false,
        KeyCode::Char('l') => {
            app.open_secret_list();
            true
        }
        KeyCode::Char('s') => {
            app.seal();
            true
        }
        KeyCode::Char('e') => {
            app.toggle_encoding();
            true
        }
        KeyCode::Char('f') => {
            app.convert_format();
            true
        }
        KeyCode::Char('v') => {
            app.validate();
            true
        }
        KeyCode::Char('y') => {
            clipboard::clipboard_events::copy_focused(app);
            true
        }
        _ => false,
    }
}

#[cfg(test)]
#[path = "global_tests.rs"]
mod global_tests;
