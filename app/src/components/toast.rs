//! Notification banner shown after form submissions.
//!
//! Provides a global toast manager accessible via context. Only one
//! notification is on screen at a time; a new one replaces the old.

use dioxus::prelude::*;
use folio_core::notify::{NotificationKind, NotificationPhase, NotificationSlot};
use folio_types::NotificationConfig;
use gloo_timers::future::TimeoutFuture;

/// Global toast manager for showing notifications.
///
/// Access via `use_toast()` from any component.
#[derive(Clone, Copy)]
pub struct ToastManager {
    slot: Signal<NotificationSlot>,
    visible_ms: u32,
    slide_out_ms: u32,
}

impl ToastManager {
    pub fn new(config: &NotificationConfig) -> Self {
        Self {
            slot: Signal::new(NotificationSlot::new()),
            visible_ms: config.visible_ms,
            slide_out_ms: config.slide_out_ms,
        }
    }

    /// Show a notification, replacing the current one.
    ///
    /// Auto-dismisses after the configured visible time.
    pub fn show(&mut self, kind: NotificationKind, message: impl Into<String>) {
        let id = self.slot.write().show(kind, message);

        let manager = *self;
        spawn(async move {
            TimeoutFuture::new(manager.visible_ms).await;
            manager.slide_out(id).await;
        });
    }

    /// Manually dismiss a notification by ID.
    pub fn dismiss(&mut self, id: u32) {
        let manager = *self;
        spawn(async move {
            manager.slide_out(id).await;
        });
    }

    async fn slide_out(mut self, id: u32) {
        // Replaced or already leaving: the newer timer owns the slot
        if !self.slot.write().begin_dismiss(id) {
            return;
        }
        TimeoutFuture::new(self.slide_out_ms).await;
        self.slot.write().remove(id);
    }
}

/// Initialize toast provider at app root.
pub fn use_toast_provider(config: &NotificationConfig) -> ToastManager {
    let config = config.clone();
    use_context_provider(move || ToastManager::new(&config))
}

/// Get the toast manager from context.
pub fn use_toast() -> ToastManager {
    use_context::<ToastManager>()
}

/// Toast container component - renders the active notification.
///
/// Place this once at the end of your main layout.
#[component]
pub fn ToastFrame() -> Element {
    let mut manager = use_toast();
    let slot = manager.slot.read();

    let Some(toast) = slot.current() else {
        return rsx! {};
    };
    let id = toast.id;
    let class = match toast.phase {
        NotificationPhase::Visible => format!("{} show", toast.kind.class()),
        NotificationPhase::Leaving => format!("{} hide", toast.kind.class()),
    };

    rsx! {
        div { class: "{class}", role: "status",
            span { class: "notification-icon",
                i { class: toast.kind.icon() }
            }
            span { class: "notification-message", "{toast.message}" }
            button {
                class: "notification-close",
                aria_label: "Close notification",
                onclick: move |_| manager.dismiss(id),
                "X"
            }
        }
    }
}
