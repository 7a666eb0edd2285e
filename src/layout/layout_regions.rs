//! Layout regions tracking for UI components
//!
//! Tracks where UI components are rendered for position-aware mouse interactions.

use ratatui::layout::Rect;

/// Identifies a UI component region
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    SecretEditor,
    SealedOutput,
    SecretList,
}

/// Tracks rendered areas of UI components
///
/// Updated during each render pass. Regions are `None` when the component is not visible.
/// Notification close controls are tracked by the notification manager itself.
#[derive(Default, Clone, Debug)]
pub struct LayoutRegions {
    pub secret_editor: Option<Rect>,
    pub sealed_output: Option<Rect>,
    /// Only populated while the popup is open
    pub secret_list: Option<Rect>,
}

impl LayoutRegions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all regions before a new render pass
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
