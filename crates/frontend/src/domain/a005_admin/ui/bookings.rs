use super::status_badge_variant;
use crate::shared::components::ui::{Badge, Select};
use crate::shared::notification::use_notifications;
use contracts::domain::a005_admin::{AdminPanelState, BookingStatus, SAMPLE_BOOKINGS};
use contracts::shared::site_info::SITE;
use leptos::prelude::*;

#[component]
pub fn BookingsTab(state: RwSignal<AdminPanelState>) -> impl IntoView {
    let notifications = use_notifications();
    let status_options: Vec<(String, String)> = BookingStatus::all()
        .into_iter()
        .map(|s| (s.code().to_string(), s.display_name().to_string()))
        .collect();

    view! {
        <div class="panel">
            <h2 class="panel__title">"Manage Bookings"</h2>
            <div class="admin__list">
                {SAMPLE_BOOKINGS
                    .iter()
                    .map(|booking| {
                        let booking_id = booking.id;
                        let on_status = Callback::new(move |code: String| {
                            let Some(status) = BookingStatus::from_code(&code) else {
                                log::warn!("Unknown booking status '{}'", code);
                                return;
                            };
                            log::debug!(
                                "Admin mock status change: booking {} -> {}",
                                booking_id,
                                code
                            );
                            notifications.show(state.with_untracked(|s| s.change_status(status)));
                        });
                        view! {
                            <div class="admin__row admin__row--booking">
                                <div>
                                    <p class="admin__row-title">{booking.client}</p>
                                    <p class="admin__row-meta">{booking.event}</p>
                                </div>
                                <div class="admin__row-meta">
                                    <p>{booking.date}</p>
                                    <p>{format!("{} Package", booking.package)}</p>
                                </div>
                                <div class="admin__row-side">
                                    <Badge variant=status_badge_variant(booking.status.code())>
                                        {booking.status.code()}
                                    </Badge>
                                    <span class="admin__row-amount">{SITE.currency.format(booking.total)}</span>
                                    <Select
                                        class="admin__status-select"
                                        value=booking.status.code().to_string()
                                        options=status_options.clone()
                                        on_change=on_status
                                    />
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
