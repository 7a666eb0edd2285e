//! Notification rendering
//!
//! Draws the notification container as a stack of boxes in the top-right
//! corner of the frame. Rendering also drives the animation side of the
//! state machine: it reports finished exit fades and counts frames for
//! the enter transition.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::clock::Clock;
use super::notification_manager::NotificationManager;
use super::notification_state::{NotificationStyle, Phase};
use crate::theme;
use crate::widgets::popup;

const MARGIN_X: u16 = 2;
const MARGIN_Y: u16 = 1;
const BOX_HEIGHT: u16 = 3;
const MAX_BOX_WIDTH: u16 = 60;
const CLOSE_GLYPH: &str = "\u{00d7}";

/// Render every notification in the container
///
/// Call after the rest of the UI so notifications draw on top.
pub fn render_notifications<C: Clock>(frame: &mut Frame, manager: &mut NotificationManager<C>) {
    let frame_area = frame.area();
    manager.set_viewport(frame_area);
    manager.tick();

    if !manager.has_container() {
        return;
    }

    let mut finished = Vec::new();
    let mut drawable = Vec::new();
    for notification in manager.children() {
        match manager.exit_progress(notification.id) {
            Some(progress) if progress >= 1.0 => finished.push(notification.id),
            _ => drawable.push(notification.clone()),
        }
    }

    let max_width = MAX_BOX_WIDTH.min(frame_area.width.saturating_sub(MARGIN_X * 2));
    let mut targets = Vec::new();
    let mut y = frame_area.y + MARGIN_Y;

    for notification in &drawable {
        if y + BOX_HEIGHT > frame_area.y + frame_area.height || max_width < 5 {
            break;
        }

        let content = format!(" {} {}", notification.severity.icon(), notification.message);
        // icon line + room for the close control
        let wanted = Line::raw(content.as_str()).width().saturating_add(6);
        let width = wanted.min(usize::from(max_width)) as u16;
        let x = frame_area.x + frame_area.width.saturating_sub(width + MARGIN_X);
        let area = Rect {
            x,
            y,
            width,
            height: BOX_HEIGHT,
        };

        let style = if notification.is_shown() {
            notification.style()
        } else {
            faded_style()
        };
        draw_box(frame, area, &content, style, notification.phase);

        let close_area = Rect {
            x: area.x + area.width.saturating_sub(4),
            y: area.y + 1,
            width: 3,
            height: 1,
        };
        draw_close_control(frame, close_area, style);
        targets.push((notification.id, close_area));

        y += BOX_HEIGHT;
    }

    manager.set_close_targets(targets);
    for id in finished {
        manager.transition_ended(id);
    }
    manager.on_frame();
}

fn faded_style() -> NotificationStyle {
    NotificationStyle {
        fg: theme::notification::FADED.fg,
        bg: theme::notification::FADED.bg,
        border: theme::notification::FADED.border,
    }
}

fn draw_box(frame: &mut Frame, area: Rect, content: &str, style: NotificationStyle, phase: Phase) {
    popup::clear_area(frame, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(style.border).bg(style.bg))
        .style(Style::default().bg(style.bg));

    let mut text_style = Style::default().fg(style.fg).bg(style.bg);
    if matches!(phase, Phase::Dismissing { .. }) {
        text_style = text_style.add_modifier(Modifier::DIM);
    }

    let paragraph = Paragraph::new(Line::from(Span::styled(content.to_string(), text_style)))
        .block(block);
    frame.render_widget(paragraph, area);
}

fn draw_close_control(frame: &mut Frame, area: Rect, style: NotificationStyle) {
    let glyph = Paragraph::new(Line::from(Span::styled(
        format!(" {} ", CLOSE_GLYPH),
        Style::default()
            .fg(style.fg)
            .bg(style.bg)
            .add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(glyph, area);
}

/// Ids currently drawn, top to bottom (test helper)
#[cfg(test)]
pub fn drawn_ids<C: Clock>(
    manager: &NotificationManager<C>,
) -> Vec<super::notification_state::NotificationId> {
    manager
        .container()
        .map(|c| c.close_targets().iter().map(|(id, _)| *id).collect())
        .unwrap_or_default()
}

#[cfg(test)]
#[path = "notification_render_tests.rs"]
mod notification_render_tests;
