//! Sealed-secrets backend access
//!
//! `SecretsClient` talks to the web backend over HTTP. The UI never calls it
//! directly: requests go through a worker thread (`spawn_worker`) so that the
//! event loop is never blocked on the network.

mod client;
mod worker;

pub use client::{SecretRef, SecretsClient, ValidationOutcome};
pub use worker::{BackendRequest, BackendResponse, spawn_worker};

use thiserror::Error;

/// Errors that can occur while talking to the backend
#[derive(Debug, Clone, Error)]
pub enum BackendError {
    /// Configured server URL cannot be used
    #[error("Invalid server URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// Request never got a response
    #[error("Network error: {0}")]
    Network(String),

    /// Backend answered with a non-success status
    #[error("HTTP error {code}: {message}")]
    Status { code: u16, message: String },

    /// Response body was not what we expected
    #[error("Invalid response: {0}")]
    Decode(String),
}
