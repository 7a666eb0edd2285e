use ratatui::{Frame, layout::Rect, widgets::Clear};

/// Centers a `width` x `height` box inside `area`, clamped to its size
pub fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let popup_width = width.min(area.width);
    let popup_height = height.min(area.height);

    let popup_x = area.x + (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = area.y + (area.height.saturating_sub(popup_height)) / 2;

    Rect {
        x: popup_x,
        y: popup_y,
        width: popup_width,
        height: popup_height,
    }
}

pub fn clear_area(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::widgets::Paragraph;

    #[test]
    fn test_centered_popup_basic() {
        let popup = centered_popup(Rect::new(0, 0, 100, 50), 40, 20);

        assert_eq!(popup, Rect::new(30, 15, 40, 20));
    }

    #[test]
    fn test_centered_popup_respects_area_offset() {
        let popup = centered_popup(Rect::new(10, 5, 60, 20), 40, 10);

        assert_eq!(popup, Rect::new(20, 10, 40, 10));
    }

    #[test]
    fn test_centered_popup_too_large_is_clamped() {
        let popup = centered_popup(Rect::new(0, 0, 100, 50), 200, 100);

        assert_eq!(popup, Rect::new(0, 0, 100, 50));
    }

    #[test]
    fn test_clear_area_blanks_cells() {
        let mut terminal = Terminal::new(TestBackend::new(10, 3)).unwrap();
        terminal
            .draw(|frame| {
                frame.render_widget(Paragraph::new("xxxxxxxxxx"), frame.area());
                clear_area(frame, Rect::new(0, 0, 5, 1));
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        assert_eq!(buffer[(0, 0)].symbol(), " ");
        assert_eq!(buffer[(5, 0)].symbol(), "x");
    }
}
