//! Tests for the backend worker thread

use super::*;
use std::sync::mpsc;
use std::time::Duration;

fn unusable_config() -> ServerConfig {
    ServerConfig {
        url: "not a url".to_string(),
        ..ServerConfig::default()
    }
}

#[test]
fn test_worker_answers_with_client_error() {
    let (request_tx, request_rx) = mpsc::channel();
    let (response_tx, response_rx) = mpsc::channel();
    spawn_worker(&unusable_config(), request_rx, response_tx);

    request_tx.send(BackendRequest::ListSecrets).unwrap();

    match response_rx.recv_timeout(Duration::from_secs(5)).unwrap() {
        BackendResponse::SecretList(Err(BackendError::InvalidUrl { url, .. })) => {
            assert_eq!(url, "not a url");
        }
        other => panic!("Expected invalid url error, got {:?}", other),
    }
}

#[test]
fn test_worker_keeps_request_identity_on_error() {
    let (request_tx, request_rx) = mpsc::channel();
    let (response_tx, response_rx) = mpsc::channel();
    spawn_worker(&unusable_config(), request_rx, response_tx);

    request_tx
        .send(BackendRequest::FetchSecret {
            namespace: "prod".to_string(),
            name: "db-creds".to_string(),
        })
        .unwrap();

    match response_rx.recv_timeout(Duration::from_secs(5)).unwrap() {
        BackendResponse::Secret {
            namespace,
            name,
            result,
        } => {
            assert_eq!(namespace, "prod");
            assert_eq!(name, "db-creds");
            assert!(result.is_err());
        }
        other => panic!("Expected secret response, got {:?}", other),
    }
}

#[test]
fn test_worker_answers_in_order() {
    let (request_tx, request_rx) = mpsc::channel();
    let (response_tx, response_rx) = mpsc::channel();
    spawn_worker(&unusable_config(), request_rx, response_tx);

    request_tx
        .send(BackendRequest::Seal {
            secret: serde_json::json!({}),
        })
        .unwrap();
    request_tx
        .send(BackendRequest::Validate {
            sealed_yaml: String::new(),
        })
        .unwrap();

    assert!(matches!(
        response_rx.recv_timeout(Duration::from_secs(5)).unwrap(),
        BackendResponse::Sealed(Err(_))
    ));
    assert!(matches!(
        response_rx.recv_timeout(Duration::from_secs(5)).unwrap(),
        BackendResponse::Validated(Err(_))
    ));
}

#[test]
fn test_worker_exits_when_requests_close() {
    let (request_tx, request_rx) = mpsc::channel::<BackendRequest>();
    let (response_tx, response_rx) = mpsc::channel();
    spawn_worker(&unusable_config(), request_rx, response_tx);

    drop(request_tx);

    // The worker drops its sender on exit
    assert!(matches!(
        response_rx.recv_timeout(Duration::from_secs(5)),
        Err(mpsc::RecvTimeoutError::Disconnected)
    ));
}
