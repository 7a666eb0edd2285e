use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

use super::secret_list_state::{ListStatus, MAX_VISIBLE_SECRETS, SecretListState};
use crate::theme;
use crate::widgets::popup;

const POPUP_WIDTH: u16 = 56;
/// Each secret takes a name line and a namespace line
pub const ROWS_PER_SECRET: u16 = 2;

/// Render the secret list popup centered in `area`
///
/// Returns the popup area for region tracking.
pub fn render_popup(state: &SecretListState, frame: &mut Frame, area: Rect) -> Option<Rect> {
    let content_rows = match state.status() {
        ListStatus::Loaded(secrets) if !secrets.is_empty() => {
            secrets.len().min(MAX_VISIBLE_SECRETS) as u16 * ROWS_PER_SECRET
        }
        _ => 1,
    };
    let popup_area = popup::centered_popup(area, POPUP_WIDTH, content_rows + 2);
    if popup_area.width < 10 || popup_area.height < 3 {
        return None;
    }

    popup::clear_area(frame, popup_area);

    let title = match state.status() {
        ListStatus::Loaded(secrets) => format!(" Secrets ({}) ", secrets.len()),
        _ => " Secrets ".to_string(),
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(title)
        .title_bottom(Line::from(" Enter load \u{2022} Esc close ").right_aligned())
        .border_style(Style::default().fg(theme::secrets::BORDER))
        .style(Style::default().bg(theme::secrets::BACKGROUND));

    match state.status() {
        ListStatus::Loading => {
            render_message(frame, popup_area, block, "Loading secrets...", theme::secrets::LOADING)
        }
        ListStatus::Failed(message) => {
            render_message(frame, popup_area, block, message, theme::secrets::ERROR)
        }
        ListStatus::Loaded(secrets) if secrets.is_empty() => render_message(
            frame,
            popup_area,
            block,
            "\u{1f512} No secrets found.",
            theme::secrets::EMPTY,
        ),
        ListStatus::Loaded(_) => {
            let max_text_len = (popup_area.width as usize).saturating_sub(8);
            let items: Vec<ListItem> = state
                .visible_secrets()
                .map(|(index, secret)| {
                    let selected = index == state.selected_index();
                    let (indicator, bg) = if selected {
                        (" \u{25ba} ", theme::secrets::ITEM_SELECTED_BG)
                    } else {
                        ("   ", theme::secrets::BACKGROUND)
                    };

                    let mut name_style = Style::default().fg(theme::secrets::NAME).bg(bg);
                    if selected {
                        name_style = name_style.add_modifier(Modifier::BOLD);
                    } else {
                        name_style = name_style.fg(theme::secrets::ITEM_NORMAL_FG);
                    }

                    let name_line = Line::from(vec![
                        Span::styled(
                            indicator,
                            Style::default()
                                .fg(theme::secrets::ITEM_SELECTED_INDICATOR)
                                .bg(bg),
                        ),
                        Span::styled(truncate(&secret.name, max_text_len), name_style),
                    ]);
                    let namespace_line = Line::from(vec![
                        Span::styled("   Namespace: ", theme::secrets::NAMESPACE_LABEL.bg(bg)),
                        Span::styled(
                            truncate(&secret.namespace, max_text_len),
                            Style::default().fg(theme::secrets::NAMESPACE).bg(bg),
                        ),
                    ]);

                    ListItem::new(vec![name_line, namespace_line])
                        .style(Style::default().bg(bg))
                })
                .collect();

            frame.render_widget(List::new(items).block(block), popup_area);
        }
    }

    Some(popup_area)
}

fn render_message(
    frame: &mut Frame,
    area: Rect,
    block: Block,
    message: &str,
    color: ratatui::style::Color,
) {
    let paragraph = Paragraph::new(Line::from(Span::styled(
        format!(" {}", message),
        Style::default().fg(color),
    )))
    .block(block);
    frame.render_widget(paragraph, area);
}

fn truncate(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        let truncated: String = text.chars().take(max_len.saturating_sub(1)).collect();
        format!("{}\u{2026}", truncated)
    } else {
        text.to_string()
    }
}

#[cfg(test)]
#[path = "secret_list_render_tests.rs"]
mod secret_list_render_tests;
