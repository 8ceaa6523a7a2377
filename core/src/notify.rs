//! Single-slot notification banner.
//!
//! Showing a notification replaces whatever is on screen. Every
//! notification gets a fresh id, and the dismiss timers carry that id, so a
//! timer belonging to a replaced notification finds a different id in the
//! slot and does nothing.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Info,
}

impl NotificationKind {
    pub fn class(self) -> &'static str {
        match self {
            Self::Success => "notification notification-success",
            Self::Error => "notification notification-error",
            Self::Info => "notification notification-info",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Success => "fa-solid fa-circle-check",
            Self::Error => "fa-solid fa-triangle-exclamation",
            Self::Info => "fa-solid fa-circle-info",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationPhase {
    Visible,
    /// Sliding out; removed once the transition finishes
    Leaving,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: u32,
    pub kind: NotificationKind,
    pub message: String,
    pub phase: NotificationPhase,
}

#[derive(Debug, Clone, Default)]
pub struct NotificationSlot {
    current: Option<Notification>,
    next_id: u32,
}

impl NotificationSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a notification, replacing the current one. Returns its id.
    pub fn show(&mut self, kind: NotificationKind, message: impl Into<String>) -> u32 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        if let Some(old) = self.current.replace(Notification {
            id,
            kind,
            message: message.into(),
            phase: NotificationPhase::Visible,
        }) {
            tracing::debug!(replaced = old.id, id, "notification replaced");
        }
        id
    }

    /// Start the slide-out for `id`. False if `id` is no longer current or
    /// is already leaving.
    pub fn begin_dismiss(&mut self, id: u32) -> bool {
        match self.current.as_mut() {
            Some(n) if n.id == id && n.phase == NotificationPhase::Visible => {
                n.phase = NotificationPhase::Leaving;
                true
            }
            _ => false,
        }
    }

    /// Remove `id` after its slide-out. False if something else is showing.
    pub fn remove(&mut self, id: u32) -> bool {
        if self.current.as_ref().is_some_and(|n| n.id == id) {
            self.current = None;
            true
        } else {
            false
        }
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }
}
