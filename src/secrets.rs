//! Secret list popup
//!
//! Lists the secrets the backend exposes and loads the chosen one into the
//! secret editor.

pub mod secret_list_events;
pub mod secret_list_render;
mod secret_list_state;

pub use secret_list_state::{ListStatus, MAX_VISIBLE_SECRETS, SecretListState};
