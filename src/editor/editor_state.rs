use ratatui::style::Style;
use tui_textarea::TextArea;

use crate::manifest::{TextFormat, detect_format};
use crate::theme;

/// Shown in the secret editor when nothing else is provided
pub const DEFAULT_SECRET_TEMPLATE: &str = "apiVersion: v1
kind: Secret
metadata:
  name: my-secret
  namespace: default
type: Opaque
data:
  username: admin
  password: change-me
";

fn create_textarea(text: &str, placeholder: &str) -> TextArea<'static> {
    let mut textarea = TextArea::from(text.lines().map(str::to_string));
    textarea.set_cursor_line_style(Style::default());
    textarea.set_cursor_style(theme::editor::CURSOR);
    textarea.set_style(Style::default().fg(theme::editor::TEXT));
    textarea.set_placeholder_text(placeholder);
    textarea.set_placeholder_style(Style::default().fg(theme::editor::PLACEHOLDER));
    textarea
}

const SECRET_PLACEHOLDER: &str = "Paste a Secret manifest (YAML or JSON), or press Ctrl+L";
const SEALED_PLACEHOLDER: &str = "Press Ctrl+S to seal the secret";

/// Text of the two editor panes
pub struct EditorState {
    pub secret: TextArea<'static>,
    pub sealed: TextArea<'static>,
    secret_format: TextFormat,
}

impl EditorState {
    pub fn new(initial_secret: &str) -> Self {
        Self {
            secret: create_textarea(initial_secret, SECRET_PLACEHOLDER),
            sealed: create_textarea("", SEALED_PLACEHOLDER),
            secret_format: detect_format(initial_secret),
        }
    }

    pub fn secret_text(&self) -> String {
        self.secret.lines().join("\n")
    }

    pub fn sealed_text(&self) -> String {
        self.sealed.lines().join("\n")
    }

    pub fn set_secret_text(&mut self, text: &str) {
        self.secret = create_textarea(text, SECRET_PLACEHOLDER);
        self.secret_format = detect_format(text);
    }

    pub fn set_sealed_text(&mut self, text: &str) {
        self.sealed = create_textarea(text, SEALED_PLACEHOLDER);
    }

    pub fn secret_format(&self) -> TextFormat {
        self.secret_format
    }

    /// Re-detect the format after the user edited the secret
    pub fn refresh_format(&mut self) {
        self.secret_format = detect_format(&self.secret_text());
    }
}
