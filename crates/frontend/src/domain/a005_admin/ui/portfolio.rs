use super::{save_item, status_badge_variant};
use crate::shared::components::ui::{Badge, Button, Input, Select};
use crate::shared::icons::icon;
use crate::shared::notification::use_notifications;
use contracts::domain::a004_portfolio::aggregate::PortfolioCategory;
use contracts::domain::a005_admin::{AdminItemKind, AdminPanelState, ADMIN_PORTFOLIO};
use leptos::prelude::*;

#[component]
fn UploadPhotosForm(state: RwSignal<AdminPanelState>) -> impl IntoView {
    let notifications = use_notifications();
    let title = RwSignal::new(String::new());
    let category = RwSignal::new(String::new());
    let categories: Vec<(String, String)> = PortfolioCategory::all()
        .into_iter()
        .map(|c| (c.code().to_string(), c.display_name().to_string()))
        .collect();

    view! {
        <div class="panel admin__form">
            <h3 class="panel__title">"Upload New Photos"</h3>
            <div class="form__grid">
                <Input
                    id="portfolio-title"
                    label="Title"
                    placeholder="Event title"
                    value=title
                    on_input=Callback::new(move |v| title.set(v))
                />
                <Select
                    id="portfolio-category"
                    label="Category"
                    placeholder="Select category"
                    value=category
                    options=categories
                    on_change=Callback::new(move |v| category.set(v))
                />
            </div>
            <div class="form__group">
                <label class="form__label" for="portfolio-files">"Photos"</label>
                <input id="portfolio-files" class="form__input" type="file" multiple=true accept="image/*" />
            </div>
            <div class="admin__form-actions">
                <Button on_click=Callback::new(move |_| save_item(state, notifications, AdminItemKind::PortfolioItem))>
                    "Upload Photos"
                </Button>
                <Button variant="outline" on_click=Callback::new(move |_| state.update(|s| s.cancel_add_form()))>
                    "Cancel"
                </Button>
            </div>
        </div>
    }
}

#[component]
pub fn PortfolioTab(state: RwSignal<AdminPanelState>) -> impl IntoView {
    let show_form = Memo::new(move |_| state.with(|s| s.show_add_form));

    view! {
        <div class="admin__toolbar">
            <h2 class="panel__title">"Manage Portfolio"</h2>
            <Button on_click=Callback::new(move |_| state.update(|s| s.open_add_form()))>
                {icon("upload")}
                "Upload Photos"
            </Button>
        </div>

        <Show when=move || show_form.get()>
            <UploadPhotosForm state=state />
        </Show>

        <div class="grid grid--3">
            {ADMIN_PORTFOLIO
                .iter()
                .map(|entry| view! {
                    <div class="panel admin__card">
                        <div class="admin__card-thumb">{icon("camera")}</div>
                        <h3 class="admin__row-title">{entry.title}</h3>
                        <div class="admin__card-header">
                            <Badge variant="outline">{entry.category.display_name()}</Badge>
                            <Badge variant=status_badge_variant(entry.status.code())>
                                {entry.status.code()}
                            </Badge>
                        </div>
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
