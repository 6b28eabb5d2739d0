use super::status_badge_variant;
use crate::shared::components::ui::Badge;
use crate::shared::components::StatCard;
use contracts::domain::a005_admin::{recent_bookings, DASHBOARD_STATS};
use contracts::shared::site_info::SITE;
use leptos::prelude::*;

const RECENT_LIMIT: usize = 3;

#[component]
pub fn DashboardTab() -> impl IntoView {
    let stats = DASHBOARD_STATS;

    view! {
        <div class="grid grid--4 admin__stats">
            <StatCard
                label="Total Bookings"
                value=stats.total_bookings.to_string()
                icon_name="calendar"
                accent="blue"
            />
            <StatCard
                label="This Month"
                value=stats.this_month.to_string()
                icon_name="users"
                accent="green"
            />
            <StatCard
                label="Revenue"
                value=SITE.currency.format(stats.revenue)
                icon_name="star"
                accent="purple"
            />
            <StatCard
                label="Portfolio Items"
                value=stats.portfolio_items.to_string()
                icon_name="image"
                accent="orange"
            />
        </div>

        <div class="panel">
            <h2 class="panel__title">"Recent Bookings"</h2>
            <div class="admin__list">
                {recent_bookings(RECENT_LIMIT)
                    .iter()
                    .map(|booking| view! {
                        <div class="admin__row">
                            <div>
                                <p class="admin__row-title">{booking.client}</p>
                                <p class="admin__row-meta">{format!("{} - {}", booking.event, booking.date)}</p>
                            </div>
                            <div class="admin__row-side">
                                <Badge variant=status_badge_variant(booking.status.code())>
                                    {booking.status.code()}
                                </Badge>
                                <span class="admin__row-amount">{SITE.currency.format(booking.total)}</span>
                            </div>
                        </div>
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
