//! Формы отдельных шагов мастера

use super::view_model::BookingWizardViewModel;
use crate::shared::components::ui::{Badge, Input, Select, Textarea};
use crate::shared::format::{format_long_date, today_iso};
use crate::shared::icons::icon;
use contracts::domain::a001_package::aggregate::PACKAGES;
use contracts::domain::a002_add_on::aggregate::ADD_ONS;
use contracts::domain::a003_booking::{BookingDraft, DraftField};
use contracts::enums::EventType;
use contracts::shared::site_info::SITE;
use leptos::prelude::*;

fn bind(vm: BookingWizardViewModel, read: fn(&BookingDraft) -> String) -> Signal<String> {
    Signal::derive(move || vm.draft_value(read))
}

fn on_field(vm: BookingWizardViewModel, make: fn(String) -> DraftField) -> Callback<String> {
    Callback::new(move |value| vm.set_field(make(value)))
}

#[component]
pub fn EventDetailsStep(vm: BookingWizardViewModel) -> impl IntoView {
    let event_types: Vec<(String, String)> = EventType::all()
        .into_iter()
        .map(|t| (t.value().to_string(), t.label().to_string()))
        .collect();

    view! {
        <div class="form__grid">
            <Input
                id="event-date"
                label="Event Date"
                input_type="date"
                required=true
                min=today_iso()
                value=bind(vm, |d| d.event_date.clone())
                on_input=on_field(vm, DraftField::EventDate)
            />
            <Input
                id="event-time"
                label="Event Time"
                input_type="time"
                value=bind(vm, |d| d.event_time.clone())
                on_input=on_field(vm, DraftField::EventTime)
            />
        </div>
        <Select
            id="event-type"
            label="Event Type"
            required=true
            placeholder="Select event type"
            options=event_types
            value=bind(vm, |d| d.event_type.clone())
            on_change=on_field(vm, DraftField::EventType)
        />
        <Input
            id="location"
            label="Location"
            required=true
            placeholder="Event venue or address"
            value=bind(vm, |d| d.location.clone())
            on_input=on_field(vm, DraftField::Location)
        />
        <Input
            id="guest-count"
            label="Expected Guest Count"
            input_type="number"
            placeholder="Number of guests"
            value=bind(vm, |d| d.guest_count.clone())
            on_input=on_field(vm, DraftField::GuestCount)
        />
    }
}

#[component]
pub fn PackageSelectionStep(vm: BookingWizardViewModel) -> impl IntoView {
    view! {
        <div class="grid grid--3">
            {PACKAGES
                .iter()
                .map(|package| {
                    let id = package.id;
                    let is_selected = move || vm.draft_value(|d| d.is_package_selected(id));
                    view! {
                        <div
                            class=move || {
                                if is_selected() {
                                    "choice-card choice-card--selected"
                                } else {
                                    "choice-card"
                                }
                            }
                            on:click=move |_| vm.set_field(DraftField::Package(id.to_string()))
                        >
                            <div class="choice-card__header">
                                <h3 class="choice-card__title">{package.name}</h3>
                                {package.popular.then(|| view! { <Badge variant="primary">"Popular"</Badge> })}
                            </div>
                            <div class="choice-card__price">{SITE.currency.format(package.price)}</div>
                            <p class="choice-card__meta">{package.duration}</p>
                            <Show when=is_selected>
                                <Badge variant="success">"Selected"</Badge>
                            </Show>
                        </div>
                    }
                })
                .collect_view()}
        </div>

        <h3 class="wizard__subtitle">"Add-ons (Optional)"</h3>
        <div class="grid grid--2">
            {ADD_ONS
                .iter()
                .map(|add_on| {
                    let id = add_on.id;
                    let is_selected = move || vm.draft_value(|d| d.has_add_on(id));
                    view! {
                        <div
                            class=move || {
                                if is_selected() {
                                    "add-on-tile add-on-tile--selected"
                                } else {
                                    "add-on-tile"
                                }
                            }
                            on:click=move |_| vm.toggle_add_on(id)
                        >
                            <span class="add-on-tile__check">
                                {move || is_selected().then(|| icon("check"))}
                            </span>
                            <span class="add-on-tile__name">{add_on.name}</span>
                            <span class="add-on-tile__price">{SITE.currency.format_extra(add_on.price)}</span>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn ContactInfoStep(vm: BookingWizardViewModel) -> impl IntoView {
    view! {
        <Input
            id="contact-name"
            label="Full Name"
            required=true
            placeholder="Your full name"
            value=bind(vm, |d| d.contact_name.clone())
            on_input=on_field(vm, DraftField::ContactName)
        />
        <div class="form__grid">
            <Input
                id="email"
                label="Email Address"
                input_type="email"
                required=true
                placeholder="your@email.com"
                value=bind(vm, |d| d.email.clone())
                on_input=on_field(vm, DraftField::Email)
            />
            <Input
                id="phone"
                label="Phone Number"
                input_type="tel"
                required=true
                placeholder="(555) 123-4567"
                value=bind(vm, |d| d.phone.clone())
                on_input=on_field(vm, DraftField::Phone)
            />
        </div>
        <Textarea
            id="details"
            label="Additional Details"
            rows=4
            placeholder="Tell us more about your event, special requests, or any questions you have..."
            value=bind(vm, |d| d.details.clone())
            on_input=on_field(vm, DraftField::Details)
        />
    }
}

#[component]
pub fn ReviewStep(vm: BookingWizardViewModel) -> impl IntoView {
    let draft = move || vm.draft_value(|d| d.clone());
    let event_type_label = move || {
        let value = vm.draft_value(|d| d.event_type.clone());
        EventType::from_value(&value)
            .map(|t| t.label().to_string())
            .unwrap_or(value)
    };

    view! {
        <div class="review">
            <div class="review__section">
                <h3 class="review__title">"Event Details"</h3>
                <dl class="review__list">
                    <dt>"Date:"</dt>
                    <dd>{move || format_long_date(&draft().event_date)}</dd>
                    <dt>"Time:"</dt>
                    <dd>{move || draft().event_time_or_tbd().to_string()}</dd>
                    <dt>"Type:"</dt>
                    <dd>{event_type_label}</dd>
                    <dt>"Location:"</dt>
                    <dd>{move || draft().location}</dd>
                    <dt>"Guests:"</dt>
                    <dd>{move || draft().guest_count_or_unspecified().to_string()}</dd>
                </dl>
            </div>

            <div class="review__section">
                <h3 class="review__title">"Contact Information"</h3>
                <dl class="review__list">
                    <dt>"Name:"</dt>
                    <dd>{move || draft().contact_name}</dd>
                    <dt>"Email:"</dt>
                    <dd>{move || draft().email}</dd>
                    <dt>"Phone:"</dt>
                    <dd>{move || draft().phone}</dd>
                </dl>
            </div>

            <div class="review__section review__section--wide">
                <h3 class="review__title">"Package & Pricing"</h3>
                {move || {
                    let summary = vm.summary();
                    view! {
                        <ul class="review__prices">
                            {summary
                                .lines
                                .into_iter()
                                .map(|line| {
                                    let amount = if line.is_add_on {
                                        SITE.currency.format_extra(line.amount)
                                    } else {
                                        SITE.currency.format(line.amount)
                                    };
                                    view! {
                                        <li class="review__price-line">
                                            <span>{line.label}</span>
                                            <span>{amount}</span>
                                        </li>
                                    }
                                })
                                .collect_view()}
                            <li class="review__price-line review__price-line--total">
                                <span>"Total"</span>
                                <span>{SITE.currency.format(summary.total)}</span>
                            </li>
                        </ul>
                    }
                }}
            </div>

            {move || {
                let details = draft().details;
                (!details.is_empty()).then(|| view! {
                    <div class="review__section review__section--wide">
                        <h3 class="review__title">"Additional Details"</h3>
                        <p class="review__details">{details}</p>
                    </div>
                })
            }}
        </div>
    }
}
