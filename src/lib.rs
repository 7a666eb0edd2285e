//! sealui library - Terminal UI for sealing Kubernetes secrets
//!
//! This library exposes the core functionality of sealui for testing purposes.

pub mod app;
pub mod backend;
pub mod clipboard;
pub mod config;
pub mod editor;
pub mod error;
pub mod help;
pub mod layout;
pub mod manifest;
pub mod notification;
pub mod secrets;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export commonly used types for convenience
pub use app::{App, Focus};
pub use config::Config;
