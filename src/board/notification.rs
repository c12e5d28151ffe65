//! Single-slot transient notification
//!
//! A notification is shown after each write outcome and cleared after a
//! fixed delay. Every `show` hands out a fresh [`NotificationId`]; a clear
//! only takes effect when it carries the id of the notification currently
//! shown, so an older timer firing late never wipes a newer message.

use std::time::Duration;

/// How long a notification stays visible
pub const NOTIFICATION_DURATION: Duration = Duration::from_millis(3000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// Monotonically increasing notification identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NotificationId(u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: NotificationId,
    pub text: String,
    pub kind: NotificationKind,
}

impl Notification {
    pub fn icon(&self) -> &'static str {
        match self.kind {
            NotificationKind::Success => "✓",
            NotificationKind::Error => "✗",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct NotificationSlot {
    current: Option<Notification>,
    next_id: u64,
}

impl NotificationSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a notification, replacing whatever is visible.
    ///
    /// Returns the id the caller must pass to [`clear`](Self::clear) once
    /// the display delay has elapsed.
    pub fn show(&mut self, text: impl Into<String>, kind: NotificationKind) -> NotificationId {
        self.next_id += 1;
        let id = NotificationId(self.next_id);
        self.current = Some(Notification {
            id,
            text: text.into(),
            kind,
        });
        id
    }

    pub fn success(&mut self, text: impl Into<String>) -> NotificationId {
        self.show(text, NotificationKind::Success)
    }

    pub fn error(&mut self, text: impl Into<String>) -> NotificationId {
        self.show(text, NotificationKind::Error)
    }

    /// Clear the slot if `id` is still the visible notification
    pub fn clear(&mut self, id: NotificationId) -> bool {
        match &self.current {
            Some(current) if current.id == id => {
                self.current = None;
                true
            }
            _ => false,
        }
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_none()
    }
}
