use leptos::prelude::*;

/// PageHeader component - title block at the top of each site section
#[component]
pub fn PageHeader(
    #[prop(into)]
    title: String,

    #[prop(optional, into)]
    subtitle: MaybeProp<String>,

    /// Centered hero-style header (public pages) vs left-aligned (admin)
    #[prop(optional)]
    centered: bool,
) -> impl IntoView {
    let class = if centered {
        "page-header page-header--centered"
    } else {
        "page-header"
    };

    view! {
        <div class=class>
            <h1 class="page-header__title">{title}</h1>
            {move || subtitle.get().map(|s| view! {
                <p class="page-header__subtitle">{s}</p>
            })}
        </div>
    }
}
