//! Centralized theme configuration for all UI components.
//!
//! All colors and styles are defined here. When adding or modifying UI components:
//! - Add new colors to the appropriate module
//! - Use `theme::module::CONSTANT` in render files
//! - Do NOT hardcode `Color::*` values directly in render files
//!
//! Theme: Galaxy - Purple/pink accents with deep space blue background

use ratatui::style::{Color, Modifier, Style};

/// Core color palette - shared base colors.
pub mod palette {
    use super::*;

    pub const TEXT: Color = Color::Rgb(236, 236, 244);
    pub const TEXT_DIM: Color = Color::Rgb(90, 92, 119);
    pub const TEXT_MUTED: Color = Color::Rgb(130, 133, 158);

    pub const BG_DARK: Color = Color::Rgb(26, 26, 46);
    pub const BG_HOVER: Color = Color::Rgb(45, 45, 72);

    pub const SUCCESS: Color = Color::Rgb(107, 203, 119);
    pub const WARNING: Color = Color::Rgb(255, 217, 61);
    pub const ERROR: Color = Color::Rgb(224, 108, 117);
    pub const INFO: Color = Color::Rgb(0, 217, 255);

    pub const CURSOR: Style = Style::new().add_modifier(Modifier::REVERSED);
}

/// Secret and sealed-output editor panes
pub mod editor {
    use super::*;

    pub const BORDER_FOCUSED: Color = Color::Rgb(0, 217, 255); // Electric cyan
    pub const BORDER_UNFOCUSED: Color = Color::Rgb(90, 92, 119);
    pub const OUTPUT_BORDER_FOCUSED: Color = Color::Rgb(107, 203, 119); // Fresh green
    pub const TEXT: Color = Color::Rgb(236, 236, 244);
    pub const PLACEHOLDER: Color = Color::Rgb(90, 92, 119);
    pub const FORMAT_BADGE: Color = Color::Rgb(198, 120, 221); // Vibrant purple
    pub const BUSY: Color = Color::Rgb(255, 217, 61);
    pub const CURSOR: Style = Style::new().add_modifier(Modifier::REVERSED);
}

/// Secret list popup
pub mod secrets {
    use super::*;

    pub const BORDER: Color = Color::Rgb(0, 217, 255);
    pub const BACKGROUND: Color = Color::Rgb(26, 26, 46);

    pub const ITEM_SELECTED_BG: Color = Color::Rgb(45, 45, 72);
    pub const ITEM_SELECTED_INDICATOR: Color = Color::Rgb(0, 217, 255);
    pub const ITEM_NORMAL_FG: Color = Color::Rgb(180, 182, 200);

    pub const NAME: Color = Color::Rgb(236, 236, 244);
    pub const NAMESPACE: Color = Color::Rgb(130, 133, 158);
    pub const NAMESPACE_LABEL: Style = Style::new()
        .fg(Color::Rgb(130, 133, 158))
        .add_modifier(Modifier::BOLD);

    pub const EMPTY: Color = Color::Rgb(90, 92, 119);
    pub const LOADING: Color = Color::Rgb(255, 217, 61);
    pub const ERROR: Color = Color::Rgb(224, 108, 117);
}

pub mod notification {
    use super::*;

    pub struct NotificationColors {
        pub fg: Color,
        pub bg: Color,
        pub border: Color,
    }

    pub const INFO: NotificationColors = NotificationColors {
        fg: Color::Rgb(236, 236, 244),
        bg: Color::Rgb(55, 55, 85),
        border: Color::Rgb(130, 133, 158),
    };

    pub const SUCCESS: NotificationColors = NotificationColors {
        fg: Color::Rgb(26, 26, 46),
        bg: Color::Rgb(107, 203, 119),
        border: Color::Rgb(140, 225, 150),
    };

    pub const WARNING: NotificationColors = NotificationColors {
        fg: Color::Rgb(26, 26, 46),
        bg: Color::Rgb(255, 217, 61),
        border: Color::Rgb(255, 217, 61),
    };

    pub const ERROR: NotificationColors = NotificationColors {
        fg: Color::Rgb(236, 236, 244),
        bg: Color::Rgb(224, 108, 117),
        border: Color::Rgb(255, 135, 145),
    };

    /// Entering and leaving notifications
    pub const FADED: NotificationColors = NotificationColors {
        fg: Color::Rgb(130, 133, 158),
        bg: Color::Rgb(35, 35, 58),
        border: Color::Rgb(90, 92, 119),
    };
}

/// Help line (bottom status bar) styles
pub mod help_line {
    use super::*;

    pub const KEY: Color = Color::Rgb(130, 133, 158);
    pub const DESCRIPTION: Color = Color::Rgb(90, 92, 119);
    pub const SEPARATOR: Color = Color::Rgb(90, 92, 119);
}
