//! User actions and backend responses
//!
//! Every outcome, good or bad, is reported through the notification manager.

use serde_json::Value;

use super::app_state::{App, Focus, Pending};
use crate::backend::{BackendRequest, BackendResponse, ValidationOutcome};
use crate::manifest::{self, ManifestError, TextFormat};
use crate::notification::Politeness;

const EMPTY_INPUT: &str = "Please enter some text";
const FETCH_FAILED: &str = "Failed to fetch secret data.";

impl App {
    /// Open the secret list popup and request the list
    pub fn open_secret_list(&mut self) {
        if !self.load_secrets_enabled {
            self.notification.show_warning("Loading secrets is disabled");
            return;
        }

        self.secrets.open();
        if !self.send(BackendRequest::ListSecrets, Pending::ListSecrets) {
            self.secrets.set_error("Backend unavailable".to_string());
        }
    }

    /// Close the popup and load the selected secret into the editor
    pub fn load_selected_secret(&mut self) {
        let Some(secret) = self.secrets.selected().cloned() else {
            return;
        };
        self.secrets.close();
        self.send(
            BackendRequest::FetchSecret {
                namespace: secret.namespace,
                name: secret.name,
            },
            Pending::FetchSecret,
        );
    }

    pub fn seal(&mut self) {
        if self.is_pending(Pending::Seal) {
            return;
        }

        let text = self.editor.secret_text();
        if text.trim().is_empty() {
            self.notification.show_error(EMPTY_INPUT);
            return;
        }

        match manifest::seal_payload(&text) {
            Ok(secret) => {
                self.send(BackendRequest::Seal { secret }, Pending::Seal);
            }
            Err(e) => {
                self.notification.show_error(&e.to_string());
            }
        }
    }

    /// Flip the `data` values between Base64 and plain text, keeping the
    /// editor's current format
    pub fn toggle_encoding(&mut self) {
        let text = self.editor.secret_text();
        let result = manifest::yaml_to_json(&text)
            .and_then(|secret| manifest::toggle_encoding(&secret))
            .and_then(|(toggled, report)| {
                let rendered = render_in_format(&toggled, self.editor.secret_format())?;
                Ok((rendered, report))
            });

        match result {
            Ok((rendered, report)) => {
                self.editor.set_secret_text(&rendered);
                if report.decoded + report.encoded == 0 {
                    self.notification.show_info(&report.summary());
                } else {
                    self.notification.show_success(&report.summary());
                }
            }
            Err(e) => {
                self.notification.show_error(&e.to_string());
            }
        }
    }

    /// Convert the secret editor between YAML and JSON
    pub fn convert_format(&mut self) {
        match manifest::convert_text(&self.editor.secret_text()) {
            Ok((converted, format)) => {
                self.editor.set_secret_text(&converted);
                self.notification
                    .show_info(&format!("Converted to {}", format.label()));
            }
            Err(e) => {
                self.notification.show_error(&e.to_string());
            }
        }
    }

    pub fn validate(&mut self) {
        if self.is_pending(Pending::Validate) {
            return;
        }

        let sealed_yaml = self.editor.sealed_text();
        if sealed_yaml.trim().is_empty() {
            self.notification
                .show_error("Nothing to validate. Seal a secret first");
            return;
        }

        self.send(BackendRequest::Validate { sealed_yaml }, Pending::Validate);
    }

    pub fn dismiss_newest_notification(&mut self) {
        if !self.notification.close_newest() {
            log::debug!("No notification to dismiss");
        }
    }

    /// Apply every backend response that has arrived
    pub fn poll_backend(&mut self) {
        let mut responses = Vec::new();
        let mut disconnected = false;
        if let Some(rx) = &self.backend_rx {
            loop {
                match rx.try_recv() {
                    Ok(response) => responses.push(response),
                    Err(std::sync::mpsc::TryRecvError::Empty) => break,
                    Err(std::sync::mpsc::TryRecvError::Disconnected) => {
                        disconnected = true;
                        break;
                    }
                }
            }
        }

        for response in responses {
            self.handle_backend_response(response);
        }

        if disconnected {
            log::error!("Backend worker disconnected");
            self.backend_tx = None;
            self.backend_rx = None;
            if !self.pending.is_empty() {
                self.pending.clear();
                self.notification.show_error("Backend worker stopped");
            }
        }
    }

    pub fn handle_backend_response(&mut self, response: BackendResponse) {
        match response {
            BackendResponse::SecretList(result) => {
                self.finish(Pending::ListSecrets);
                match result {
                    Ok(secrets) => {
                        log::debug!("Loaded {} secrets", secrets.len());
                        self.secrets.set_secrets(secrets);
                    }
                    Err(e) => {
                        log::error!("Error fetching secrets: {}", e);
                        self.secrets.set_error(e.to_string());
                        self.notification.show_error(&e.to_string());
                    }
                }
            }
            BackendResponse::Secret {
                namespace,
                name,
                result,
            } => {
                self.finish(Pending::FetchSecret);
                let rendered = result
                    .map_err(|e| e.to_string())
                    .and_then(|secret| manifest::json_to_yaml(&secret).map_err(|e| e.to_string()));
                match rendered {
                    Ok(yaml) => {
                        self.editor.set_secret_text(&yaml);
                        self.focus = Focus::SecretEditor;
                        self.notification
                            .show_success(&format!("Loaded {}/{}", namespace, name));
                    }
                    Err(e) => {
                        log::error!("Error fetching secret {}/{}: {}", namespace, name, e);
                        self.notification.show_error(FETCH_FAILED);
                    }
                }
            }
            BackendResponse::Sealed(result) => {
                self.finish(Pending::Seal);
                let rendered = result
                    .map_err(|e| e.to_string())
                    .and_then(|sealed| manifest::json_to_yaml(&sealed).map_err(|e| e.to_string()));
                match rendered {
                    Ok(yaml) => {
                        self.editor.set_sealed_text(&yaml);
                        self.notification.show_success("Secret sealed");
                    }
                    Err(e) => {
                        log::error!("Error sealing secret: {}", e);
                        self.notification
                            .show_error(&format!("Sealing failed: {}", e));
                    }
                }
            }
            BackendResponse::Validated(result) => {
                self.finish(Pending::Validate);
                match result {
                    Ok(ValidationOutcome::Valid) => {
                        self.notification.show_success("Sealed secret is valid");
                    }
                    Ok(ValidationOutcome::Invalid(reason)) => {
                        self.notification
                            .show_error(&format!("Validation failed: {}", reason));
                    }
                    Err(e) => {
                        self.notification.show_error(&e.to_string());
                    }
                }
            }
            BackendResponse::Crashed(message) => {
                self.pending.clear();
                self.notification
                    .show_error(&format!("Backend worker crashed: {}", message));
            }
        }
    }

    /// Log queued announcements and request the bell for assertive ones
    pub fn process_announcements(&mut self) {
        for announcement in self.notification.take_announcements() {
            log::info!(
                "[{:?}] {}",
                announcement.politeness,
                announcement.message
            );
            if announcement.politeness == Politeness::Assertive && self.bell_enabled {
                self.bell_requested = true;
            }
        }
    }

    fn send(&mut self, request: BackendRequest, pending: Pending) -> bool {
        let sent = self
            .backend_tx
            .as_ref()
            .is_some_and(|tx| tx.send(request).is_ok());

        if sent {
            self.pending.push(pending);
        } else {
            log::error!("Backend unavailable for {:?}", pending);
            self.notification.show_error("Backend unavailable");
        }
        sent
    }

    fn finish(&mut self, pending: Pending) {
        if let Some(pos) = self.pending.iter().position(|p| *p == pending) {
            self.pending.remove(pos);
        }
    }
}

fn render_in_format(secret: &Value, format: TextFormat) -> Result<String, ManifestError> {
    match format {
        TextFormat::Yaml => manifest::json_to_yaml(secret),
        TextFormat::Json => Ok(serde_json::to_string_pretty(secret)?),
    }
}

#[cfg(test)]
#[path = "app_actions_tests.rs"]
mod app_actions_tests;
