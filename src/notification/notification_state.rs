//! Notification types
//!
//! A notification is a transient message with a severity, a display
//! duration and its own dismissal state machine. The manager owns the
//! collection; this module defines what one notification is.

use std::time::{Duration, Instant};

use crate::theme;

/// Auto-dismiss delay used when the caller does not pick one.
pub const DEFAULT_DURATION: Duration = Duration::from_millis(3000);

/// Shortest auto-dismiss delay. Shorter requests are raised to this so a
/// notification is never shown for zero time.
pub const MIN_DURATION: Duration = Duration::from_millis(250);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(pub u64);

/// Notification severity - determines style and announcement urgency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

/// How a screen reader (or the terminal bell) should treat an announcement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Politeness {
    /// Queued behind the current announcement
    Polite,
    /// Interrupts whatever is being announced
    Assertive,
}

/// Semantic role of a notification, mirroring live-region roles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Status,
    Alert,
}

impl Severity {
    /// Parse a severity name. Unknown names fall back to `Info`.
    pub fn parse(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "success" => Severity::Success,
            "warning" | "warn" => Severity::Warning,
            "error" => Severity::Error,
            _ => Severity::Info,
        }
    }

    pub fn role(self) -> Role {
        match self {
            Severity::Error | Severity::Warning => Role::Alert,
            Severity::Info | Severity::Success => Role::Status,
        }
    }

    pub fn politeness(self) -> Politeness {
        match self.role() {
            Role::Alert => Politeness::Assertive,
            Role::Status => Politeness::Polite,
        }
    }

    pub fn icon(self) -> char {
        match self {
            Severity::Info => 'i',
            Severity::Success => '\u{2713}',
            Severity::Warning => '!',
            Severity::Error => '\u{2717}',
        }
    }

    pub fn style(self) -> NotificationStyle {
        let colors = match self {
            Severity::Info => &theme::notification::INFO,
            Severity::Success => &theme::notification::SUCCESS,
            Severity::Warning => &theme::notification::WARNING,
            Severity::Error => &theme::notification::ERROR,
        };
        NotificationStyle {
            fg: colors.fg,
            bg: colors.bg,
            border: colors.border,
        }
    }
}

/// Colors used to draw a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationStyle {
    pub fg: ratatui::style::Color,
    pub bg: ratatui::style::Color,
    pub border: ratatui::style::Color,
}

/// Dismissal state machine: `PendingDisplay -> Visible -> Dismissing -> Removed`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Inserted but not shown yet; `frames` counts render passes since insertion
    PendingDisplay { frames: u8 },
    Visible,
    /// Exit transition running since `since`
    Dismissing { since: Instant },
    Removed,
}

impl Phase {
    pub fn name(self) -> &'static str {
        match self {
            Phase::PendingDisplay { .. } => "pending-display",
            Phase::Visible => "visible",
            Phase::Dismissing { .. } => "dismissing",
            Phase::Removed => "removed",
        }
    }
}

/// A single notification with message, timing, and dismissal state
#[derive(Debug, Clone)]
pub struct Notification {
    pub id: NotificationId,
    pub message: String,
    pub severity: Severity,
    pub duration: Duration,
    pub created_at: Instant,
    pub phase: Phase,
    /// Auto-dismiss deadline; `None` once it fired or was cancelled
    pub timer: Option<Instant>,
}

impl Notification {
    pub fn new(
        id: NotificationId,
        message: &str,
        severity: Severity,
        duration: Duration,
        now: Instant,
    ) -> Self {
        let duration = duration.max(MIN_DURATION);
        Self {
            id,
            message: sanitize_message(message),
            severity,
            duration,
            created_at: now,
            phase: Phase::PendingDisplay { frames: 0 },
            timer: Some(now + duration),
        }
    }

    pub fn style(&self) -> NotificationStyle {
        self.severity.style()
    }

    pub fn is_shown(&self) -> bool {
        self.phase == Phase::Visible
    }

    pub fn timer_due(&self, now: Instant) -> bool {
        self.timer.is_some_and(|deadline| now >= deadline)
    }
}

/// Messages are drawn as plain text. Control characters (including ESC)
/// become spaces so a message cannot smuggle terminal escape sequences.
pub fn sanitize_message(message: &str) -> String {
    message
        .chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect()
}

#[cfg(test)]
#[path = "notification_state_tests.rs"]
mod notification_state_tests;
