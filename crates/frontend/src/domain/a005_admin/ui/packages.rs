use super::save_item;
use crate::shared::components::ui::{Badge, Button, Input, Textarea};
use crate::shared::icons::icon;
use crate::shared::notification::use_notifications;
use contracts::domain::a005_admin::{admin_packages, AdminItemKind, AdminPanelState};
use contracts::shared::site_info::SITE;
use leptos::prelude::*;

#[component]
fn AddPackageForm(state: RwSignal<AdminPanelState>) -> impl IntoView {
    let notifications = use_notifications();
    let name = RwSignal::new(String::new());
    let price = RwSignal::new(String::new());
    let duration = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());

    view! {
        <div class="panel admin__form">
            <h3 class="panel__title">"Add New Package"</h3>
            <div class="form__grid">
                <Input
                    id="package-name"
                    label="Package Name"
                    placeholder="e.g., Premium"
                    value=name
                    on_input=Callback::new(move |v| name.set(v))
                />
                <Input
                    id="package-price"
                    label="Price"
                    input_type="number"
                    placeholder="999"
                    value=price
                    on_input=Callback::new(move |v| price.set(v))
                />
            </div>
            <Input
                id="package-duration"
                label="Duration"
                placeholder="e.g., 6 hours"
                value=duration
                on_input=Callback::new(move |v| duration.set(v))
            />
            <Textarea
                id="package-description"
                label="Description"
                placeholder="Package description..."
                value=description
                on_input=Callback::new(move |v| description.set(v))
            />
            <div class="admin__form-actions">
                <Button on_click=Callback::new(move |_| save_item(state, notifications, AdminItemKind::Package))>
                    "Save Package"
                </Button>
                <Button variant="outline" on_click=Callback::new(move |_| state.update(|s| s.cancel_add_form()))>
                    "Cancel"
                </Button>
            </div>
        </div>
    }
}

#[component]
pub fn PackagesTab(state: RwSignal<AdminPanelState>) -> impl IntoView {
    let show_form = Memo::new(move |_| state.with(|s| s.show_add_form));

    view! {
        <div class="admin__toolbar">
            <h2 class="panel__title">"Manage Packages"</h2>
            <Button on_click=Callback::new(move |_| state.update(|s| s.open_add_form()))>
                {icon("plus")}
                "Add Package"
            </Button>
        </div>

        <Show when=move || show_form.get()>
            <AddPackageForm state=state />
        </Show>

        <div class="grid grid--3">
            {admin_packages()
                .into_iter()
                .map(|package| view! {
                    <div class="panel admin__card">
                        <div class="admin__card-header">
                            <h3 class="admin__row-title">{package.name}</h3>
                            <Badge variant=if package.active { "success" } else { "neutral" }>
                                {if package.active { "Active" } else { "Inactive" }}
                            </Badge>
                        </div>
                        <div class="admin__card-price">{SITE.currency.format(package.price)}</div>
                        <p class="admin__row-meta">{package.duration}</p>
                        <div class="admin__card-actions">
                            <Button size="sm" variant="outline">{icon("edit")}</Button>
                            <Button size="sm" variant="outline">{icon("delete")}</Button>
                        </div>
                    </div>
                })
                .collect_view()}
        </div>
    }
}
