//! Mock admin panel
//!
//! Все данные статичны: действия только показывают уведомление.

mod bookings;
mod dashboard;
mod packages;
mod portfolio;

use crate::shared::components::PageHeader;
use crate::shared::icons::icon;
use crate::shared::notification::NotificationService;
use bookings::BookingsTab;
use contracts::domain::a005_admin::{AdminItemKind, AdminPanelState, AdminTab};
use dashboard::DashboardTab;
use leptos::prelude::*;
use packages::PackagesTab;
use portfolio::PortfolioTab;

fn tab_icon(tab: AdminTab) -> &'static str {
    match tab {
        AdminTab::Dashboard => "star",
        AdminTab::Bookings => "calendar",
        AdminTab::Packages => "package",
        AdminTab::Portfolio => "image",
    }
}

/// Save handler shared by the add forms
fn save_item(
    state: RwSignal<AdminPanelState>,
    notifications: NotificationService,
    kind: AdminItemKind,
) {
    if let Some(notification) = state.try_update(|s| s.save_item(kind)) {
        log::debug!("Admin mock save: {}", kind.label());
        notifications.show(notification);
    }
}

/// CSS modifier for a status badge
fn status_badge_variant(code: &str) -> &'static str {
    match code {
        "confirmed" | "published" => "success",
        "pending" => "primary",
        "cancelled" => "outline",
        _ => "neutral",
    }
}

#[component]
pub fn AdminPanel() -> impl IntoView {
    let state = RwSignal::new(AdminPanelState::default());
    let active_tab = Memo::new(move |_| state.with(|s| s.active_tab));

    view! {
        <div class="page">
            <PageHeader
                title="Admin Dashboard"
                subtitle="Manage your photography business"
            />

            <div class="tabs">
                <div class="tabs__list">
                    {AdminTab::all()
                        .into_iter()
                        .map(|tab| view! {
                            <button
                                class=move || {
                                    if active_tab.get() == tab {
                                        "tabs__trigger tabs__trigger--active"
                                    } else {
                                        "tabs__trigger"
                                    }
                                }
                                on:click=move |_| state.update(|s| s.select_tab(tab))
                            >
                                {icon(tab_icon(tab))}
                                <span>{tab.label()}</span>
                            </button>
                        })
                        .collect_view()}
                </div>

                <div class="tabs__content">
                    {move || match active_tab.get() {
                        AdminTab::Dashboard => view! { <DashboardTab /> }.into_any(),
                        AdminTab::Bookings => view! { <BookingsTab state=state /> }.into_any(),
                        AdminTab::Packages => view! { <PackagesTab state=state /> }.into_any(),
                        AdminTab::Portfolio => view! { <PortfolioTab state=state /> }.into_any(),
                    }}
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a005_admin::{BookingStatus, PublishStatus};

    #[test]
    fn test_status_badge_variant() {
        assert_eq!(status_badge_variant(BookingStatus::Confirmed.code()), "success");
        assert_eq!(status_badge_variant(BookingStatus::Pending.code()), "primary");
        assert_eq!(status_badge_variant(BookingStatus::Cancelled.code()), "outline");
        assert_eq!(status_badge_variant(BookingStatus::Completed.code()), "neutral");
        assert_eq!(status_badge_variant(PublishStatus::Published.code()), "success");
        assert_eq!(status_badge_variant(PublishStatus::Draft.code()), "neutral");
    }
}
