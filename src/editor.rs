//! Secret and sealed-output editor panes

pub mod editor_events;
pub mod editor_render;
mod editor_state;

pub use editor_state::{DEFAULT_SECRET_TEMPLATE, EditorState};
