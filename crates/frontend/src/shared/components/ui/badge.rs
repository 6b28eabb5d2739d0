use super::modifier;
use leptos::prelude::*;

const VARIANTS: [&str; 5] = ["primary", "success", "outline", "overlay", "neutral"];

/// Pill label: package popularity, booking and publish statuses, categories
#[component]
pub fn Badge(
    /// One of "primary", "success", "outline", "overlay"; anything else is "neutral"
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    #[prop(optional, into)]
    class: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    let classes = move || {
        format!(
            "badge {} {}",
            modifier("badge", variant.get(), &VARIANTS, "neutral"),
            class.get().unwrap_or_default()
        )
    };

    view! { <span class=classes>{children()}</span> }
}
