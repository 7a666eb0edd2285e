use ratatui::{
    Frame,
    layout::{Constraint, Layout},
};

use super::app_state::App;
use crate::notification::render_notifications;

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        self.layout_regions.clear();

        let layout =
            Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).split(frame.area());
        let (editor_area, help_area) = (layout[0], layout[1]);

        let (secret_rect, sealed_rect) =
            crate::editor::editor_render::render_panes(self, frame, editor_area);
        self.layout_regions.secret_editor = Some(secret_rect);
        self.layout_regions.sealed_output = Some(sealed_rect);

        crate::help::help_line_render::render_line(self, frame, help_area);

        if self.secrets.is_visible()
            && let Some(list_rect) =
                crate::secrets::secret_list_render::render_popup(&self.secrets, frame, editor_area)
        {
            self.layout_regions.secret_list = Some(list_rect);
        }

        render_notifications(frame, &mut self.notification);
    }
}

#[cfg(test)]
#[path = "app_render_tests.rs"]
mod app_render_tests;
