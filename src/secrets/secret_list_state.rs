use crate::backend::SecretRef;

/// Maximum number of secrets shown at once in the popup.
pub const MAX_VISIBLE_SECRETS: usize = 10;

/// What the popup currently has to show
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListStatus {
    Loading,
    Loaded(Vec<SecretRef>),
    Failed(String),
}

/// State of the secret list popup
#[derive(Debug)]
pub struct SecretListState {
    visible: bool,
    status: ListStatus,
    selected_index: usize,
    scroll_offset: usize,
}

impl Default for SecretListState {
    fn default() -> Self {
        Self::new()
    }
}

impl SecretListState {
    pub fn new() -> Self {
        Self {
            visible: false,
            status: ListStatus::Loading,
            selected_index: 0,
            scroll_offset: 0,
        }
    }

    /// Show the popup in its loading state. The caller fetches the list.
    pub fn open(&mut self) {
        self.visible = true;
        self.status = ListStatus::Loading;
        self.selected_index = 0;
        self.scroll_offset = 0;
    }

    pub fn close(&mut self) {
        self.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn status(&self) -> &ListStatus {
        &self.status
    }

    pub fn is_loading(&self) -> bool {
        self.status == ListStatus::Loading
    }

    pub fn set_secrets(&mut self, secrets: Vec<SecretRef>) {
        self.status = ListStatus::Loaded(secrets);
        self.selected_index = 0;
        self.scroll_offset = 0;
    }

    pub fn set_error(&mut self, message: String) {
        self.status = ListStatus::Failed(message);
    }

    pub fn secrets(&self) -> &[SecretRef] {
        match &self.status {
            ListStatus::Loaded(secrets) => secrets,
            _ => &[],
        }
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    pub fn selected(&self) -> Option<&SecretRef> {
        self.secrets().get(self.selected_index)
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    pub fn select_next(&mut self) {
        let count = self.secrets().len();
        if count > 0 && self.selected_index + 1 < count {
            self.selected_index += 1;
            if self.selected_index >= self.scroll_offset + MAX_VISIBLE_SECRETS {
                self.scroll_offset = self.selected_index + 1 - MAX_VISIBLE_SECRETS;
            }
        }
    }

    pub fn select_previous(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
            if self.selected_index < self.scroll_offset {
                self.scroll_offset = self.selected_index;
            }
        }
    }

    /// Select by position inside the visible window (mouse clicks)
    pub fn select_visible_row(&mut self, row: usize) -> bool {
        let index = self.scroll_offset + row;
        if index < self.secrets().len() && row < MAX_VISIBLE_SECRETS {
            self.selected_index = index;
            true
        } else {
            false
        }
    }

    /// Secrets in the visible window, paired with their absolute index
    pub fn visible_secrets(&self) -> impl Iterator<Item = (usize, &SecretRef)> {
        self.secrets()
            .iter()
            .enumerate()
            .skip(self.scroll_offset)
            .take(MAX_VISIBLE_SECRETS)
    }
}

#[cfg(test)]
#[path = "secret_list_state_tests.rs"]
mod secret_list_state_tests;
