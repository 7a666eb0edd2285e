//! Tests for help_line_render

use super::*;
use crate::app::Focus;
use crate::test_utils::test_helpers::{connect_fake_backend, test_app};
use ratatui::Terminal;
use ratatui::backend::TestBackend;

fn render_help_line_to_string(app: &App, width: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, 1)).unwrap();
    terminal
        .draw(|f| {
            let area = f.area();
            render_line(app, f, area);
        })
        .unwrap();
    terminal.backend().to_string()
}

#[test]
fn test_secret_editor_hints() {
    let app = test_app();

    let output = render_help_line_to_string(&app, 160);

    assert!(output.contains("Ctrl+S Seal"));
    assert!(output.contains("Ctrl+E Encode/Decode"));
    assert!(output.contains("Ctrl+F YAML/JSON"));
    assert!(!output.contains("Validate"));
}

#[test]
fn test_sealed_output_hints() {
    let mut app = test_app();
    app.focus = Focus::SealedOutput;

    let output = render_help_line_to_string(&app, 160);

    assert!(output.contains("Ctrl+V Validate"));
    assert!(output.contains("Ctrl+Y Copy"));
    assert!(!output.contains("Encode/Decode"));
}

#[test]
fn test_popup_hints_take_precedence() {
    let mut app = test_app();
    let _backend = connect_fake_backend(&mut app);
    app.open_secret_list();
    app.focus = Focus::SealedOutput;

    let output = render_help_line_to_string(&app, 160);

    assert!(output.contains("Enter Load"));
    assert!(output.contains("Esc Close"));
    assert!(!output.contains("Validate"));
}

#[test]
fn test_dismiss_hint_only_with_notifications() {
    let mut app = test_app();
    let output = render_help_line_to_string(&app, 160);
    assert!(!output.contains("Dismiss"));

    app.notification.show_info("hello");
    let output = render_help_line_to_string(&app, 160);
    assert!(output.contains("Ctrl+D Dismiss"));
}

#[test]
fn test_hints_separated_by_bullets() {
    let spans = build_styled_spans(&[("a", "A"), ("b", "B")]);
    let text: String = spans.iter().map(|s| s.content.as_ref()).collect();

    assert_eq!(text, " a A \u{2022} b B");
}
