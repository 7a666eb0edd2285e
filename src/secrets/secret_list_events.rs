use ratatui::crossterm::event::{KeyCode, KeyEvent};

use crate::app::App;

/// Handle keys while the secret list popup is visible
///
/// The popup is modal: every key is consumed.
pub fn handle_secret_list_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Down | KeyCode::Char('j') => app.secrets.select_next(),
        KeyCode::Up | KeyCode::Char('k') => app.secrets.select_previous(),
        KeyCode::Enter => app.load_selected_secret(),
        KeyCode::Esc => app.secrets.close(),
        _ => {}
    }
}
