//! Notification manager
//!
//! Owns the shared container, the active set and one dismissal state
//! machine per notification. The application constructs exactly one
//! manager and passes it to whatever needs to report an outcome.
//!
//! Timing is deadline based: `tick` fires due auto-dismiss timers and the
//! removal fallback, `on_frame` advances the enter transition once per
//! drawn frame, and the renderer reports `transition_ended` when a
//! notification's exit fade has finished playing.

use std::collections::{HashSet, VecDeque};
use std::time::{Duration, Instant};

use ratatui::layout::Rect;

use super::clock::{Clock, SystemClock};
use super::notification_state::{
    DEFAULT_DURATION, Notification, NotificationId, Phase, Politeness, Severity,
};

/// Exit fade length used when none is configured.
pub const DEFAULT_EXIT_TRANSITION: Duration = Duration::from_millis(200);

/// Extra time granted to the exit transition before a dismissing
/// notification is removed without the renderer's signal.
pub const FALLBACK_GRACE: Duration = Duration::from_millis(150);

/// Smallest viewport a container can be mounted in.
pub const MIN_ATTACH_WIDTH: u16 = 12;
pub const MIN_ATTACH_HEIGHT: u16 = 3;

/// Render passes a new notification waits before it is shown.
const ENTER_FRAMES: u8 = 2;

/// Shared surface that holds every notification not yet removed
#[derive(Debug, Default)]
pub struct NotificationContainer {
    children: Vec<Notification>,
    close_targets: Vec<(NotificationId, Rect)>,
}

impl NotificationContainer {
    pub fn children(&self) -> &[Notification] {
        &self.children
    }

    pub fn close_targets(&self) -> &[(NotificationId, Rect)] {
        &self.close_targets
    }

    fn child_mut(&mut self, id: NotificationId) -> Option<&mut Notification> {
        self.children.iter_mut().find(|n| n.id == id)
    }
}

/// A pending screen-reader style announcement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Announcement {
    pub id: NotificationId,
    pub politeness: Politeness,
    pub message: String,
}

pub struct NotificationManager<C: Clock = SystemClock> {
    clock: C,
    viewport: Option<Rect>,
    container: Option<NotificationContainer>,
    active: HashSet<NotificationId>,
    next_id: u64,
    default_duration: Duration,
    exit_transition: Duration,
    announcements: VecDeque<Announcement>,
    transitions: Option<Vec<(NotificationId, Phase)>>,
}

impl NotificationManager<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for NotificationManager<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> NotificationManager<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            clock,
            viewport: None,
            container: None,
            active: HashSet::new(),
            next_id: 1,
            default_duration: DEFAULT_DURATION,
            exit_transition: DEFAULT_EXIT_TRANSITION,
            announcements: VecDeque::new(),
            transitions: None,
        }
    }

    /// Override the default auto-dismiss delay and the exit fade length
    pub fn with_timing(mut self, default_duration: Duration, exit_transition: Duration) -> Self {
        self.default_duration = default_duration;
        self.exit_transition = exit_transition;
        self
    }

    /// Record every phase change so tests can inspect the sequence
    pub fn with_transition_log(mut self) -> Self {
        self.transitions = Some(Vec::new());
        self
    }

    /// Update the attach point. Called with the frame area on every draw.
    pub fn set_viewport(&mut self, area: Rect) {
        self.viewport = Some(area);
    }

    pub fn viewport(&self) -> Option<Rect> {
        self.viewport
    }

    pub fn default_duration(&self) -> Duration {
        self.default_duration
    }

    pub fn exit_transition(&self) -> Duration {
        self.exit_transition
    }

    pub fn now(&self) -> Instant {
        self.clock.now()
    }

    /// Show a notification. Fire-and-forget: when there is nowhere to
    /// mount the container the call does nothing and returns `None`.
    pub fn show(
        &mut self,
        message: &str,
        severity: Severity,
        duration: Duration,
    ) -> Option<NotificationId> {
        if !self.ensure_container() {
            log::debug!("notification dropped, no attach point: {}", message);
            return None;
        }

        let id = NotificationId(self.next_id);
        self.next_id += 1;

        let now = self.clock.now();
        let notification = Notification::new(id, message, severity, duration, now);
        let politeness = severity.politeness();
        let text = notification.message.clone();
        let phase = notification.phase;

        self.container.as_mut()?.children.push(notification);
        self.active.insert(id);
        self.record(id, phase);
        self.announce(Announcement {
            id,
            politeness,
            message: text,
        });

        log::debug!("notification {:?} shown ({:?}): {}", id, severity, message);
        Some(id)
    }

    pub fn show_info(&mut self, message: &str) -> Option<NotificationId> {
        self.show(message, Severity::Info, self.default_duration)
    }

    pub fn show_success(&mut self, message: &str) -> Option<NotificationId> {
        self.show(message, Severity::Success, self.default_duration)
    }

    pub fn show_warning(&mut self, message: &str) -> Option<NotificationId> {
        self.show(message, Severity::Warning, self.default_duration)
    }

    pub fn show_error(&mut self, message: &str) -> Option<NotificationId> {
        self.show(message, Severity::Error, self.default_duration)
    }

    /// Manual close: cancels the auto-dismiss timer and dismisses now
    pub fn close(&mut self, id: NotificationId) {
        if let Some(notification) = self.container.as_mut().and_then(|c| c.child_mut(id)) {
            notification.timer = None;
        }
        self.dismiss(id);
    }

    /// Close the most recently shown notification that is still active
    pub fn close_newest(&mut self) -> bool {
        match self.active.iter().max().copied() {
            Some(id) => {
                self.close(id);
                true
            }
            None => false,
        }
    }

    /// Close the notification whose close control covers the given cell
    pub fn close_at(&mut self, column: u16, row: u16) -> bool {
        let hit = self.container.as_ref().and_then(|c| {
            c.close_targets
                .iter()
                .find(|(_, rect)| contains(rect, column, row))
                .map(|(id, _)| *id)
        });

        match hit {
            Some(id) if self.active.contains(&id) => {
                self.close(id);
                true
            }
            _ => false,
        }
    }

    /// Fire due auto-dismiss timers and force removal of notifications
    /// whose exit transition never reported completion
    pub fn tick(&mut self) {
        let now = self.clock.now();
        let Some(container) = self.container.as_mut() else {
            return;
        };

        let mut due = Vec::new();
        let mut stale = Vec::new();
        let removal_deadline = self.exit_transition + FALLBACK_GRACE;

        for notification in container.children.iter_mut() {
            if notification.timer_due(now) {
                notification.timer = None;
                due.push(notification.id);
            }
            if let Phase::Dismissing { since } = notification.phase
                && now.duration_since(since) >= removal_deadline
            {
                stale.push(notification.id);
            }
        }

        for id in due {
            self.dismiss(id);
        }
        for id in stale {
            log::debug!("notification {:?} removed by fallback", id);
            self.remove(id);
        }
    }

    /// Advance enter transitions by one drawn frame
    pub fn on_frame(&mut self) {
        let Some(container) = self.container.as_mut() else {
            return;
        };

        let mut shown = Vec::new();
        for notification in container.children.iter_mut() {
            if let Phase::PendingDisplay { frames } = notification.phase {
                let frames = frames.saturating_add(1);
                notification.phase = if frames >= ENTER_FRAMES {
                    shown.push(notification.id);
                    Phase::Visible
                } else {
                    Phase::PendingDisplay { frames }
                };
            }
        }

        for id in shown {
            self.record(id, Phase::Visible);
        }
    }

    /// Exit transition completion signal. Ignored unless the notification
    /// is dismissing.
    pub fn transition_ended(&mut self, id: NotificationId) {
        self.remove(id);
    }

    /// Fraction of the exit fade played so far, `None` unless dismissing
    pub fn exit_progress(&self, id: NotificationId) -> Option<f32> {
        let notification = self.get(id)?;
        let Phase::Dismissing { since } = notification.phase else {
            return None;
        };
        if self.exit_transition.is_zero() {
            return Some(1.0);
        }
        let elapsed = self.clock.now().duration_since(since);
        Some((elapsed.as_secs_f32() / self.exit_transition.as_secs_f32()).min(1.0))
    }

    pub fn set_close_targets(&mut self, targets: Vec<(NotificationId, Rect)>) {
        if let Some(container) = self.container.as_mut() {
            container.close_targets = targets;
        }
    }

    pub fn get(&self, id: NotificationId) -> Option<&Notification> {
        self.container
            .as_ref()?
            .children
            .iter()
            .find(|n| n.id == id)
    }

    /// Current phase; `Removed` once the notification left the container
    pub fn phase(&self, id: NotificationId) -> Option<Phase> {
        match self.get(id) {
            Some(notification) => Some(notification.phase),
            None if id.0 > 0 && id.0 < self.next_id => Some(Phase::Removed),
            None => None,
        }
    }

    pub fn is_active(&self, id: NotificationId) -> bool {
        self.active.contains(&id)
    }

    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    pub fn has_container(&self) -> bool {
        self.container.is_some()
    }

    pub fn container(&self) -> Option<&NotificationContainer> {
        self.container.as_ref()
    }

    pub fn children(&self) -> &[Notification] {
        self.container
            .as_ref()
            .map(|c| c.children.as_slice())
            .unwrap_or(&[])
    }

    pub fn children_count(&self) -> usize {
        self.children().len()
    }

    /// True while anything is drawn or animating, so the UI keeps redrawing
    pub fn needs_redraw(&self) -> bool {
        !self.children().is_empty()
    }

    pub fn take_announcements(&mut self) -> Vec<Announcement> {
        self.announcements.drain(..).collect()
    }

    pub fn take_transitions(&mut self) -> Vec<(NotificationId, Phase)> {
        self.transitions
            .as_mut()
            .map(std::mem::take)
            .unwrap_or_default()
    }

    fn ensure_container(&mut self) -> bool {
        if self.container.is_some() {
            return true;
        }

        match self.viewport {
            Some(area) if area.width >= MIN_ATTACH_WIDTH && area.height >= MIN_ATTACH_HEIGHT => {
                log::debug!("notification container mounted in {:?}", area);
                self.container = Some(NotificationContainer::default());
                true
            }
            _ => false,
        }
    }

    /// Shared by timer expiry and manual close. The first caller wins;
    /// later calls find the id gone from the active set and return.
    fn dismiss(&mut self, id: NotificationId) {
        if !self.active.remove(&id) {
            return;
        }

        let now = self.clock.now();
        let Some(notification) = self.container.as_mut().and_then(|c| c.child_mut(id)) else {
            return;
        };

        // A pending notification still passes through Visible so the
        // recorded sequence never skips a state.
        let was_pending = matches!(notification.phase, Phase::PendingDisplay { .. });
        let dismissing = Phase::Dismissing { since: now };
        notification.phase = dismissing;

        if was_pending {
            self.record(id, Phase::Visible);
        }
        self.record(id, dismissing);
        self.drop_announcement(id);
    }

    fn remove(&mut self, id: NotificationId) {
        let Some(container) = self.container.as_mut() else {
            return;
        };
        let Some(index) = container
            .children
            .iter()
            .position(|n| n.id == id && matches!(n.phase, Phase::Dismissing { .. }))
        else {
            return;
        };

        container.children.remove(index);
        container.close_targets.retain(|(target, _)| *target != id);
        self.record(id, Phase::Removed);
    }

    fn announce(&mut self, announcement: Announcement) {
        if announcement.politeness == Politeness::Assertive {
            self.announcements
                .retain(|queued| queued.politeness == Politeness::Assertive);
        }
        self.announcements.push_back(announcement);
    }

    fn drop_announcement(&mut self, id: NotificationId) {
        self.announcements.retain(|queued| queued.id != id);
    }

    fn record(&mut self, id: NotificationId, phase: Phase) {
        if let Some(log) = self.transitions.as_mut() {
            log.push((id, phase));
        }
    }
}

fn contains(rect: &Rect, x: u16, y: u16) -> bool {
    x >= rect.x && x < rect.x + rect.width && y >= rect.y && y < rect.y + rect.height
}

#[cfg(test)]
#[path = "notification_manager_tests.rs"]
mod notification_manager_tests;
