use super::{use_notifications, Toast};
use crate::shared::icons::icon;
use contracts::shared::notification::NotificationKind;
use leptos::prelude::*;

#[component]
pub fn Toaster() -> impl IntoView {
    let notifications = use_notifications();

    view! {
        <div class="toaster" aria-live="polite">
            <For
                each=move || notifications.toasts()
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    let class = match toast.notification.kind {
                        NotificationKind::Success => "toast toast--success",
                        NotificationKind::Info => "toast toast--info",
                    };
                    view! {
                        <div class=class role="status">
                            <div class="toast__body">
                                <div class="toast__title">{toast.notification.title}</div>
                                <div class="toast__description">{toast.notification.description}</div>
                            </div>
                            <button
                                class="toast__close"
                                aria-label="Dismiss"
                                on:click=move |_| notifications.dismiss(id)
                            >
                                {icon("x")}
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
