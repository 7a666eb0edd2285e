//! Backend worker thread
//!
//! Owns a single-threaded tokio runtime and serves one request at a time.
//! The UI sends `BackendRequest`s and polls for `BackendResponse`s without
//! blocking.

use std::panic::{self, AssertUnwindSafe};
use std::sync::mpsc::{Receiver, Sender};

use serde_json::Value;

use super::BackendError;
use super::client::{SecretRef, SecretsClient, ValidationOutcome};
use crate::config::ServerConfig;

#[derive(Debug, Clone)]
pub enum BackendRequest {
    ListSecrets,
    FetchSecret { namespace: String, name: String },
    Seal { secret: Value },
    Validate { sealed_yaml: String },
}

#[derive(Debug, Clone)]
pub enum BackendResponse {
    SecretList(Result<Vec<SecretRef>, BackendError>),
    Secret {
        namespace: String,
        name: String,
        result: Result<Value, BackendError>,
    },
    Sealed(Result<Value, BackendError>),
    Validated(Result<ValidationOutcome, BackendError>),
    /// The worker died and will not answer anything else
    Crashed(String),
}

/// Spawn the backend worker thread
///
/// A client that cannot be built from `config` is not fatal: every request
/// is answered with the construction error instead.
pub fn spawn_worker(
    config: &ServerConfig,
    request_rx: Receiver<BackendRequest>,
    response_tx: Sender<BackendResponse>,
) {
    let client = SecretsClient::from_config(config);
    match &client {
        Ok(client) => log::debug!("backend worker targeting {}", client.base_url()),
        Err(e) => log::warn!("backend worker has no usable client: {}", e),
    }

    std::thread::spawn(move || {
        let panic_tx = response_tx.clone();
        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            let rt = match tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
            {
                Ok(rt) => rt,
                Err(e) => {
                    log::error!("Failed to create backend runtime: {}", e);
                    let _ = response_tx.send(BackendResponse::Crashed(e.to_string()));
                    return;
                }
            };

            rt.block_on(worker_loop(client, request_rx, response_tx));
        }));

        if let Err(e) = result {
            let panic_msg = if let Some(s) = e.downcast_ref::<&str>() {
                s.to_string()
            } else if let Some(s) = e.downcast_ref::<String>() {
                s.clone()
            } else {
                "Unknown panic".to_string()
            };
            log::error!("Backend worker thread panicked: {}", panic_msg);
            let _ = panic_tx.send(BackendResponse::Crashed(panic_msg));
        }
    });
}

/// Process requests until the request channel closes
async fn worker_loop(
    client: Result<SecretsClient, BackendError>,
    request_rx: Receiver<BackendRequest>,
    response_tx: Sender<BackendResponse>,
) {
    // blocking recv() is fine on this dedicated thread
    while let Ok(request) = request_rx.recv() {
        log::debug!("Backend request: {:?}", request);
        let response = handle_request(&client, request).await;
        if response_tx.send(response).is_err() {
            break;
        }
    }
    log::debug!("Backend worker exiting");
}

async fn handle_request(
    client: &Result<SecretsClient, BackendError>,
    request: BackendRequest,
) -> BackendResponse {
    let client = match client {
        Ok(client) => client,
        Err(e) => return error_response(request, e.clone()),
    };

    match request {
        BackendRequest::ListSecrets => BackendResponse::SecretList(client.list_secrets().await),
        BackendRequest::FetchSecret { namespace, name } => {
            let result = client.fetch_secret(&namespace, &name).await;
            BackendResponse::Secret {
                namespace,
                name,
                result,
            }
        }
        BackendRequest::Seal { secret } => BackendResponse::Sealed(client.seal(&secret).await),
        BackendRequest::Validate { sealed_yaml } => {
            BackendResponse::Validated(client.validate(&sealed_yaml).await)
        }
    }
}

fn error_response(request: BackendRequest, error: BackendError) -> BackendResponse {
    match request {
        BackendRequest::ListSecrets => BackendResponse::SecretList(Err(error)),
        BackendRequest::FetchSecret { namespace, name } => BackendResponse::Secret {
            namespace,
            name,
            result: Err(error),
        },
        BackendRequest::Seal { .. } => BackendResponse::Sealed(Err(error)),
        BackendRequest::Validate { .. } => BackendResponse::Validated(Err(error)),
    }
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
