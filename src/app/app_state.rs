use std::sync::mpsc::{Receiver, Sender};

use crate::backend::{BackendRequest, BackendResponse};
use crate::config::{ClipboardBackend, Config};
use crate::editor::{DEFAULT_SECRET_TEMPLATE, EditorState};
use crate::layout::LayoutRegions;
use crate::notification::NotificationManager;
use crate::secrets::SecretListState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    SecretEditor,
    SealedOutput,
}

/// Backend requests waiting for an answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pending {
    ListSecrets,
    FetchSecret,
    Seal,
    Validate,
}

impl Pending {
    pub fn label(self) -> &'static str {
        match self {
            Pending::ListSecrets => "Loading secrets",
            Pending::FetchSecret => "Loading secret",
            Pending::Seal => "Sealing",
            Pending::Validate => "Validating",
        }
    }
}

pub struct App {
    pub editor: EditorState,
    pub focus: Focus,
    pub secrets: SecretListState,
    pub notification: NotificationManager,
    pub clipboard_backend: ClipboardBackend,
    pub load_secrets_enabled: bool,
    pub bell_enabled: bool,
    pub layout_regions: LayoutRegions,
    pub should_quit: bool,
    pub(crate) pending: Vec<Pending>,
    pub(crate) bell_requested: bool,
    pub(crate) backend_tx: Option<Sender<BackendRequest>>,
    pub(crate) backend_rx: Option<Receiver<BackendResponse>>,
}

impl App {
    /// `initial_secret` wins over the configured one, which wins over the template
    pub fn new(initial_secret: Option<String>, config: &Config) -> Self {
        let secret = initial_secret
            .or_else(|| config.editor.initial_secret.clone())
            .unwrap_or_else(|| DEFAULT_SECRET_TEMPLATE.to_string());

        let notification = NotificationManager::new().with_timing(
            config.notification.duration(),
            config.notification.exit_transition(),
        );

        Self {
            editor: EditorState::new(&secret),
            focus: Focus::SecretEditor,
            secrets: SecretListState::new(),
            notification,
            clipboard_backend: config.clipboard.backend,
            load_secrets_enabled: !config.server.disable_load_secrets,
            bell_enabled: config.notification.bell,
            layout_regions: LayoutRegions::new(),
            should_quit: false,
            pending: Vec::new(),
            bell_requested: false,
            backend_tx: None,
            backend_rx: None,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn set_backend_channels(
        &mut self,
        request_tx: Sender<BackendRequest>,
        response_rx: Receiver<BackendResponse>,
    ) {
        self.backend_tx = Some(request_tx);
        self.backend_rx = Some(response_rx);
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::SecretEditor => Focus::SealedOutput,
            Focus::SealedOutput => Focus::SecretEditor,
        };
    }

    pub fn is_pending(&self, pending: Pending) -> bool {
        self.pending.contains(&pending)
    }

    /// Label of the most recent request still in flight
    pub fn busy_label(&self) -> Option<&'static str> {
        self.pending.last().map(|p| p.label())
    }

    /// True once per assertive announcement batch when the bell is enabled
    pub fn take_bell(&mut self) -> bool {
        std::mem::take(&mut self.bell_requested)
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
