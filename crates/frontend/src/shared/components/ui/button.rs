use super::modifier;
use leptos::ev::MouseEvent;
use leptos::prelude::*;

const VARIANTS: [&str; 4] = ["primary", "secondary", "outline", "ghost"];

/// Action button; "Next"/"Previous" in the wizard rely on the reactive `disabled`
#[component]
pub fn Button(
    /// "primary" (default), "secondary", "outline" or "ghost"
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// "sm", "md" (default) or "lg"
    #[prop(optional, into)]
    size: MaybeProp<String>,
    #[prop(optional, into)]
    class: MaybeProp<String>,
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    #[prop(optional)]
    on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let classes = move || {
        let mut parts = vec![
            "button".to_string(),
            modifier("button", variant.get(), &VARIANTS, "primary"),
        ];
        if let Some(size @ ("sm" | "lg")) = size.get().as_deref() {
            parts.push(format!("button--{}", size));
        }
        parts.extend(class.get());
        parts.join(" ")
    };

    view! {
        <button
            type="button"
            class=classes
            disabled=move || disabled.get().unwrap_or_default()
            on:click=move |ev| {
                if let Some(handler) = on_click {
                    handler.run(ev);
                }
            }
        >
            {children()}
        </button>
    }
}
