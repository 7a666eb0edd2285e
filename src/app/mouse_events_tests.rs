//! Tests for mouse routing

use super::*;
use crate::backend::{BackendRequest, BackendResponse, SecretRef};
use crate::test_utils::test_helpers::{connect_fake_backend, test_app};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::crossterm::event::KeyModifiers;
use ratatui::layout::Rect;

fn click(column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::empty(),
    }
}

fn draw(app: &mut App) {
    let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
    terminal.draw(|frame| app.render(frame)).unwrap();
}

#[test]
fn test_click_focuses_panes() {
    let mut app = test_app();
    app.layout_regions.secret_editor = Some(Rect::new(0, 0, 50, 28));
    app.layout_regions.sealed_output = Some(Rect::new(50, 0, 50, 28));

    handle_mouse_event(&mut app, click(60, 5));
    assert_eq!(app.focus, Focus::SealedOutput);

    handle_mouse_event(&mut app, click(10, 5));
    assert_eq!(app.focus, Focus::SecretEditor);
}

#[test]
fn test_non_left_click_ignored() {
    let mut app = test_app();
    app.layout_regions.sealed_output = Some(Rect::new(50, 0, 50, 28));

    let mut event = click(60, 5);
    event.kind = MouseEventKind::Down(MouseButton::Right);
    handle_mouse_event(&mut app, event);

    assert_eq!(app.focus, Focus::SecretEditor);
}

#[test]
fn test_click_close_glyph_dismisses_notification() {
    let mut app = test_app();
    let id = app.notification.show_error("Sealing failed").unwrap();
    draw(&mut app);

    let (_, rect) = app.notification.container().unwrap().close_targets()[0];
    handle_mouse_event(&mut app, click(rect.x + 1, rect.y));

    assert!(!app.notification.is_active(id));
}

#[test]
fn test_click_outside_popup_closes_it() {
    let mut app = test_app();
    let _backend = connect_fake_backend(&mut app);
    app.open_secret_list();
    draw(&mut app);

    handle_mouse_event(&mut app, click(0, 0));

    assert!(!app.secrets.is_visible());
    // closing the popup does not also move focus
    assert_eq!(app.focus, Focus::SecretEditor);
}

#[test]
fn test_click_secret_loads_it() {
    let mut app = test_app();
    let backend = connect_fake_backend(&mut app);
    app.open_secret_list();
    let _ = backend.next_request();
    app.handle_backend_response(BackendResponse::SecretList(Ok(vec![
        SecretRef {
            name: "db".to_string(),
            namespace: "prod".to_string(),
        },
        SecretRef {
            name: "api".to_string(),
            namespace: "dev".to_string(),
        },
    ])));
    draw(&mut app);

    let list = app.layout_regions.secret_list.unwrap();
    // second entry: border row, then two rows for the first secret
    handle_mouse_event(&mut app, click(list.x + 5, list.y + 1 + ROWS_PER_SECRET));

    assert!(!app.secrets.is_visible());
    assert!(matches!(
        backend.next_request(),
        Some(BackendRequest::FetchSecret { name, .. }) if name == "api"
    ));
}

#[test]
fn test_click_popup_border_does_nothing() {
    let mut app = test_app();
    let backend = connect_fake_backend(&mut app);
    app.open_secret_list();
    let _ = backend.next_request();
    app.handle_backend_response(BackendResponse::SecretList(Ok(vec![SecretRef {
        name: "db".to_string(),
        namespace: "prod".to_string(),
    }])));
    draw(&mut app);

    let list = app.layout_regions.secret_list.unwrap();
    handle_mouse_event(&mut app, click(list.x + 5, list.y));

    assert!(app.secrets.is_visible());
    assert!(backend.next_request().is_none());
}
