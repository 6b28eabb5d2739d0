//! Toast notifications
//!
//! `NotificationService` is provided once in `App`; any component can push a
//! [`Notification`] and `Toaster` (rendered by the shell) displays it until it
//! self-dismisses or the user closes it.

mod toaster;

pub use toaster::Toaster;

use contracts::shared::notification::Notification;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// How long a toast stays on screen
pub const DISMISS_AFTER_MS: u32 = 4000;

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub notification: Notification,
}

/// Centralized toast stack
#[derive(Clone, Copy)]
pub struct NotificationService {
    toasts: RwSignal<Vec<Toast>>,
    next_id: RwSignal<u64>,
}

impl NotificationService {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(1),
        }
    }

    /// Показать уведомление; оно исчезнет само через DISMISS_AFTER_MS
    pub fn show(&self, notification: Notification) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);

        log::debug!("toast #{}: {}", id, notification.title);
        self.toasts.update(|toasts| toasts.push(Toast { id, notification }));

        let svc = *self;
        spawn_local(async move {
            TimeoutFuture::new(DISMISS_AFTER_MS).await;
            svc.dismiss(id);
        });
    }

    /// Removing an already dismissed toast is a no-op
    pub fn dismiss(&self, id: u64) {
        self.toasts.update(|toasts| toasts.retain(|t| t.id != id));
    }

    pub fn toasts(&self) -> Vec<Toast> {
        self.toasts.get()
    }
}

impl Default for NotificationService {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_notifications() -> NotificationService {
    use_context::<NotificationService>().expect("NotificationService not provided in context")
}
