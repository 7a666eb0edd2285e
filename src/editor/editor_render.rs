use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders},
};

use crate::app::{App, Focus};
use crate::theme;

/// Side by side at this width and above, stacked below it
const SIDE_BY_SIDE_MIN_WIDTH: u16 = 100;

/// Render the secret and sealed-output panes
///
/// Returns `(secret_rect, sealed_rect)` for region tracking.
pub fn render_panes(app: &mut App, frame: &mut Frame, area: Rect) -> (Rect, Rect) {
    let layout = if area.width >= SIDE_BY_SIDE_MIN_WIDTH {
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).split(area)
    } else {
        Layout::vertical([Constraint::Percentage(50), Constraint::Percentage(50)]).split(area)
    };
    let (secret_area, sealed_area) = (layout[0], layout[1]);

    let secret_focused = app.focus == Focus::SecretEditor;
    let format_label = app.editor.secret_format().label();
    let secret_title = Line::from(vec![
        Span::raw(" Secret "),
        Span::styled(
            format!("[{}] ", format_label),
            Style::default().fg(theme::editor::FORMAT_BADGE),
        ),
    ]);
    let secret_border = if secret_focused {
        theme::editor::BORDER_FOCUSED
    } else {
        theme::editor::BORDER_UNFOCUSED
    };
    app.editor.secret.set_block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(secret_title)
            .border_style(Style::default().fg(secret_border)),
    );
    app.editor.secret.set_cursor_style(if secret_focused {
        theme::editor::CURSOR
    } else {
        Style::default()
    });
    frame.render_widget(&app.editor.secret, secret_area);

    let sealed_focused = app.focus == Focus::SealedOutput;
    let mut sealed_title = vec![Span::raw(" Sealed Secret ")];
    if let Some(label) = app.busy_label() {
        sealed_title.push(Span::styled(
            format!("{}\u{2026} ", label),
            Style::default()
                .fg(theme::editor::BUSY)
                .add_modifier(Modifier::ITALIC),
        ));
    }
    let sealed_border = if sealed_focused {
        theme::editor::OUTPUT_BORDER_FOCUSED
    } else {
        theme::editor::BORDER_UNFOCUSED
    };
    app.editor.sealed.set_block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(Line::from(sealed_title))
            .title_bottom(Line::from(" read-only ").right_aligned())
            .border_style(Style::default().fg(sealed_border)),
    );
    app.editor.sealed.set_cursor_style(if sealed_focused {
        theme::editor::CURSOR
    } else {
        Style::default()
    });
    frame.render_widget(&app.editor.sealed, sealed_area);

    (secret_area, sealed_area)
}
