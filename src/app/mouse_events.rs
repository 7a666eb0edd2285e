//! Mouse event dispatcher
//!
//! Routes clicks to notification close controls, the secret list, or the
//! editor panes.

use ratatui::crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use super::app_state::{App, Focus};
use crate::layout::{Region, region_at};
use crate::secrets::secret_list_render::ROWS_PER_SECRET;

/// Handle mouse events by routing to appropriate handlers
pub fn handle_mouse_event(app: &mut App, mouse: MouseEvent) {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return;
    }

    // Notifications are drawn on top of everything
    if app.notification.close_at(mouse.column, mouse.row) {
        return;
    }

    let region = region_at(&app.layout_regions, mouse.column, mouse.row);

    // Clicking outside the popup dismisses it
    if app.secrets.is_visible() && region != Some(Region::SecretList) {
        app.secrets.close();
        return;
    }

    match region {
        Some(Region::SecretList) => click_secret_list(app, mouse),
        Some(Region::SecretEditor) => app.focus = Focus::SecretEditor,
        Some(Region::SealedOutput) => app.focus = Focus::SealedOutput,
        None => {}
    }
}

fn click_secret_list(app: &mut App, mouse: MouseEvent) {
    let Some(list_rect) = app.layout_regions.secret_list else {
        return;
    };

    // Inside the border
    let inner_y = list_rect.y.saturating_add(1);
    let inner_bottom = list_rect.y + list_rect.height.saturating_sub(1);
    if mouse.row < inner_y || mouse.row >= inner_bottom {
        return;
    }

    let row = (mouse.row - inner_y) / ROWS_PER_SECRET;
    if app.secrets.select_visible_row(row as usize) {
        app.load_selected_secret();
    }
}

#[cfg(test)]
#[path = "mouse_events_tests.rs"]
mod mouse_events_tests;
