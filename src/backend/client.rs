//! HTTP client for the sealed-secrets web backend
//!
//! Endpoints:
//! - `GET  /api/secrets`                  existing secrets, `{"secrets": [{name, namespace}]}`
//! - `GET  /api/secret/{namespace}/{name}` one secret as JSON
//! - `POST /api/kubeseal`                 JSON secret in, sealed secret JSON out
//! - `POST /api/validate`                 YAML sealed secret in, `OK` or the reason as text

use std::time::Duration;

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Response, Url};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::BackendError;
use crate::config::ServerConfig;

/// A secret the backend can hand out
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecretRef {
    pub name: String,
    pub namespace: String,
}

#[derive(Debug, Deserialize)]
struct SecretList {
    #[serde(default)]
    secrets: Option<Vec<SecretRef>>,
}

/// Result of asking the backend to validate a sealed secret
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    Valid,
    Invalid(String),
}

#[derive(Debug, Clone)]
pub struct SecretsClient {
    client: Client,
    base: Url,
}

impl SecretsClient {
    pub fn from_config(config: &ServerConfig) -> Result<Self, BackendError> {
        let base = Url::parse(config.url.trim()).map_err(|e| BackendError::InvalidUrl {
            url: config.url.clone(),
            reason: e.to_string(),
        })?;
        if base.cannot_be_a_base() {
            return Err(BackendError::InvalidUrl {
                url: config.url.clone(),
                reason: "not a hierarchical URL".to_string(),
            });
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .default_headers(build_headers(config))
            .build()
            .map_err(|e| BackendError::Network(e.to_string()))?;

        Ok(Self { client, base })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    pub async fn list_secrets(&self) -> Result<Vec<SecretRef>, BackendError> {
        let url = self.endpoint(&["api", "secrets"]);
        let response = self.send(self.client.get(url)).await?;
        let list: SecretList = decode_json(response).await?;
        Ok(list.secrets.unwrap_or_default())
    }

    pub async fn fetch_secret(&self, namespace: &str, name: &str) -> Result<Value, BackendError> {
        let url = self.endpoint(&["api", "secret", namespace, name]);
        let response = self.send(self.client.get(url)).await?;
        decode_json(response).await
    }

    pub async fn seal(&self, secret: &Value) -> Result<Value, BackendError> {
        let url = self.endpoint(&["api", "kubeseal"]);
        let response = self.send(self.client.post(url).json(secret)).await?;
        decode_json(response).await
    }

    /// A 400 answer means the backend rejected the sealed secret; its body
    /// says why.
    pub async fn validate(&self, sealed_yaml: &str) -> Result<ValidationOutcome, BackendError> {
        let url = self.endpoint(&["api", "validate"]);
        let request = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/yaml")
            .body(sealed_yaml.to_string());

        let response = request
            .send()
            .await
            .map_err(|e| BackendError::Network(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(ValidationOutcome::Valid);
        }

        let reason = status.canonical_reason().unwrap_or("Unknown error");
        let body = response.text().await.unwrap_or_default();
        let message = error_message(&body, reason);
        if status == reqwest::StatusCode::BAD_REQUEST {
            Ok(ValidationOutcome::Invalid(message))
        } else {
            Err(BackendError::Status {
                code: status.as_u16(),
                message,
            })
        }
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        // cannot_be_a_base() was rejected in from_config
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> Result<Response, BackendError> {
        let response = request
            .send()
            .await
            .map_err(|e| BackendError::Network(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let reason = status.canonical_reason().unwrap_or("Unknown error");
        let body = response.text().await.unwrap_or_default();
        Err(BackendError::Status {
            code: status.as_u16(),
            message: error_message(&body, reason),
        })
    }
}

fn build_headers(config: &ServerConfig) -> HeaderMap {
    let mut headers = HeaderMap::new();
    for (name, value) in &config.headers {
        match (
            HeaderName::from_bytes(name.as_bytes()),
            HeaderValue::from_str(value),
        ) {
            (Ok(name), Ok(value)) => {
                headers.insert(name, value);
            }
            _ => log::warn!("Ignoring invalid header '{}' from config", name),
        }
    }
    headers
}

async fn decode_json<T: serde::de::DeserializeOwned>(response: Response) -> Result<T, BackendError> {
    let body = response
        .text()
        .await
        .map_err(|e| BackendError::Network(e.to_string()))?;
    serde_json::from_str(&body).map_err(|e| BackendError::Decode(e.to_string()))
}

/// Best human-readable message from an error response: a JSON `message`
/// field, otherwise the body text, otherwise the status reason.
pub(crate) fn error_message(body: &str, reason: &str) -> String {
    if let Ok(value) = serde_json::from_str::<Value>(body)
        && let Some(message) = value.get("message").and_then(Value::as_str)
        && !message.trim().is_empty()
    {
        return message.trim().to_string();
    }

    let body = body.trim();
    if body.is_empty() {
        reason.to_string()
    } else {
        body.to_string()
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod client_tests;
