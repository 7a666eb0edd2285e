//! Shared test utilities for sealui
//!
//! This module provides common test fixtures and helper functions
//! used across multiple test modules.

#[cfg(test)]
pub mod test_helpers {
    use std::sync::mpsc::{self, Receiver, Sender};

    use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::layout::Rect;

    use crate::app::App;
    use crate::backend::{BackendRequest, BackendResponse};
    use crate::config::Config;
    use crate::notification::Severity;

    /// A plain secret with unencoded values
    pub const PLAIN_SECRET: &str = "apiVersion: v1
kind: Secret
metadata:
  name: db-creds
  namespace: prod
data:
  username: admin
";

    /// Helper to create App with default config for tests
    ///
    /// The notification viewport is set so notifications mount like they
    /// would after the first render.
    pub fn test_app() -> App {
        let mut app = App::new(None, &Config::default());
        app.notification.set_viewport(Rect::new(0, 0, 100, 30));
        app
    }

    pub fn test_app_with_secret(secret: &str) -> App {
        let mut app = App::new(Some(secret.to_string()), &Config::default());
        app.notification.set_viewport(Rect::new(0, 0, 100, 30));
        app
    }

    /// Channel ends the test plays the backend worker with
    pub struct FakeBackend {
        pub requests: Receiver<BackendRequest>,
        pub responses: Sender<BackendResponse>,
    }

    impl FakeBackend {
        pub fn next_request(&self) -> Option<BackendRequest> {
            self.requests.try_recv().ok()
        }
    }

    pub fn connect_fake_backend(app: &mut App) -> FakeBackend {
        let (request_tx, request_rx) = mpsc::channel();
        let (response_tx, response_rx) = mpsc::channel();
        app.set_backend_channels(request_tx, response_rx);
        FakeBackend {
            requests: request_rx,
            responses: response_tx,
        }
    }

    /// Message and severity of the newest notification
    pub fn last_notification(app: &App) -> Option<(String, Severity)> {
        app.notification
            .children()
            .last()
            .map(|n| (n.message.clone(), n.severity))
    }

    /// Helper to create a KeyEvent without modifiers
    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    /// Helper to create a Ctrl+<char> KeyEvent
    pub fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }
}
