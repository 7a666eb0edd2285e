use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::{App, Focus};
use crate::theme;

macro_rules! hints {
    ($($key:literal => $desc:literal),+ $(,)?) => {
        vec![$(($key, $desc)),+]
    };
}

fn get_context_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let mut hints = if app.secrets.is_visible() {
        hints!["\u{2191}\u{2193}/jk" => "Navigate", "Enter" => "Load", "Esc" => "Close"]
    } else if app.focus == Focus::SealedOutput {
        hints!["Ctrl+V" => "Validate", "Ctrl+Y" => "Copy", "Tab" => "Edit Secret", "Ctrl+L" => "Secrets", "Ctrl+C" => "Quit"]
    } else {
        hints!["Ctrl+S" => "Seal", "Ctrl+E" => "Encode/Decode", "Ctrl+F" => "YAML/JSON", "Ctrl+L" => "Secrets", "Ctrl+Y" => "Copy", "Tab" => "Sealed Output", "Ctrl+C" => "Quit"]
    };

    if app.notification.active_count() > 0 {
        hints.push(("Ctrl+D", "Dismiss"));
    }
    hints
}

fn build_styled_spans(hints: &[(&'static str, &'static str)]) -> Vec<Span<'static>> {
    let key_style = Style::default().fg(theme::help_line::KEY);
    let desc_style = Style::default().fg(theme::help_line::DESCRIPTION);
    let sep_style = Style::default().fg(theme::help_line::SEPARATOR);

    let mut spans = Vec::with_capacity(hints.len() * 4 + 1);
    spans.push(Span::raw(" "));

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" \u{2022} ", sep_style));
        }
        spans.push(Span::styled(*key, key_style));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, desc_style));
    }

    spans
}

pub fn render_line(app: &App, frame: &mut Frame, area: Rect) {
    let hints = get_context_hints(app);
    let spans = build_styled_spans(&hints);
    let help = Paragraph::new(Line::from(spans));
    frame.render_widget(help, area);
}

#[cfg(test)]
#[path = "help_line_render_tests.rs"]
mod help_line_render_tests;
