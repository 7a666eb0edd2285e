//! Notification module for sealui
//!
//! Transient messages ("snackbars") that report the outcome of user
//! actions. Any component can report through the application's single
//! [`NotificationManager`].

pub mod clock;
mod notification_manager;
mod notification_render;
mod notification_state;

pub use clock::{Clock, ManualClock, SystemClock};
pub use notification_manager::{
    Announcement, DEFAULT_EXIT_TRANSITION, FALLBACK_GRACE, NotificationContainer,
    NotificationManager,
};
pub use notification_render::render_notifications;
pub use notification_state::{
    DEFAULT_DURATION, MIN_DURATION, Notification, NotificationId, Phase, Politeness, Role,
    Severity,
};
