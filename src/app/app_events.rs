use ratatui::crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use std::io;
use std::time::Duration;

use super::app_state::App;
use super::mouse_events;
use crate::editor;
use crate::secrets;

mod global;

const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(100);
/// Shorter poll while notifications animate so enter/exit frames keep coming
const ANIMATION_POLL_TIMEOUT: Duration = Duration::from_millis(33);

impl App {
    pub fn handle_events(&mut self) -> io::Result<()> {
        self.poll_backend();
        self.notification.tick();
        self.process_announcements();

        if event::poll(self.poll_timeout())? {
            match event::read()? {
                Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    self.handle_key_event(key_event);
                }
                Event::Mouse(mouse_event) => {
                    mouse_events::handle_mouse_event(self, mouse_event);
                }
                Event::Paste(text) => {
                    editor::editor_events::handle_paste(self, &text);
                }
                Event::Resize(width, height) => {
                    self.notification
                        .set_viewport(ratatui::layout::Rect::new(0, 0, width, height));
                }
                _ => {}
            }
        }
        Ok(())
    }

    fn poll_timeout(&self) -> Duration {
        if self.notification.needs_redraw() {
            ANIMATION_POLL_TIMEOUT
        } else {
            EVENT_POLL_TIMEOUT
        }
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if global::handle_global_keys(self, key) {
            return;
        }

        if self.secrets.is_visible() {
            secrets::secret_list_events::handle_secret_list_key(self, key);
            return;
        }

        editor::editor_events::handle_editor_key(self, key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test_helpers::{connect_fake_backend, ctrl, key, test_app_with_secret};
    use ratatui::crossterm::event::KeyCode;

    #[test]
    fn test_keys_reach_editor() {
        let mut app = test_app_with_secret("");

        app.handle_key_event(key(KeyCode::Char('a')));

        assert_eq!(app.editor.secret_text(), "a");
    }

    #[test]
    fn test_popup_captures_keys() {
        let mut app = test_app_with_secret("");
        let _backend = connect_fake_backend(&mut app);
        app.handle_key_event(ctrl('l'));

        app.handle_key_event(key(KeyCode::Char('a')));
        app.handle_key_event(key(KeyCode::Esc));

        assert_eq!(app.editor.secret_text(), "");
        assert!(!app.secrets.is_visible());
    }

    #[test]
    fn test_poll_timeout_shortens_while_animating() {
        let mut app = test_app_with_secret("");
        assert_eq!(app.poll_timeout(), EVENT_POLL_TIMEOUT);

        app.notification.show_info("hi");
        assert_eq!(app.poll_timeout(), ANIMATION_POLL_TIMEOUT);
    }
}
