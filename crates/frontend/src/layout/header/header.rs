use crate::layout::global_context::{AppGlobalContext, Section};
use crate::shared::icons::icon;
use contracts::shared::site_info::SITE;
use leptos::prelude::*;

#[component]
fn NavButton(section: Section, #[prop(optional)] mobile: bool) -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    let base = if mobile { "nav__mobile-link" } else { "nav__link" };
    let class = move || {
        if ctx.active.get() == section {
            format!("{} {}--active", base, base)
        } else {
            base.to_string()
        }
    };

    view! {
        <button class=class on:click=move |_| ctx.navigate(section)>
            {section.label()}
        </button>
    }
}

#[component]
pub fn Header() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    view! {
        <nav data-zone="header" class="nav">
            <div class="nav__content">
                <button class="nav__brand" on:click=move |_| ctx.navigate(Section::Home)>
                    {icon("camera")}
                    <span class="nav__title">{SITE.brand}</span>
                </button>

                <div class="nav__links">
                    {Section::all()
                        .into_iter()
                        .map(|section| view! { <NavButton section=section /> })
                        .collect_view()}
                </div>

                <button
                    class="nav__menu-toggle"
                    aria-label="Toggle menu"
                    on:click=move |_| ctx.toggle_menu()
                >
                    {move || if ctx.menu_open.get() { icon("x") } else { icon("menu") }}
                </button>
            </div>

            <Show when=move || ctx.menu_open.get()>
                <div class="nav__mobile">
                    {Section::all()
                        .into_iter()
                        .map(|section| view! { <NavButton section=section mobile=true /> })
                        .collect_view()}
                </div>
            </Show>
        </nav>
    }
}
