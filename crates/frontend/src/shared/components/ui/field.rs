//! Labelled form controls bound to `Signal<String>` values
//!
//! Поля не валидируют ввод сами: доступность "Next" решает мастер.

use leptos::ev::Event;
use leptos::prelude::*;

/// `<label>` shared by every control; required fields get a trailing " *"
#[component]
fn FieldLabel(
    #[prop(into)] for_id: Signal<String>,
    text: MaybeProp<String>,
    required: bool,
) -> impl IntoView {
    move || {
        text.get().map(|text| {
            let text = if required { format!("{} *", text) } else { text };
            view! { <label class="form__label" for=move || for_id.get()>{text}</label> }
        })
    }
}

/// Forwards the control's current value to an optional callback
fn forward(handler: Option<Callback<String>>) -> impl Fn(Event) + 'static {
    move |ev| {
        if let Some(handler) = handler {
            handler.run(event_target_value(&ev));
        }
    }
}

#[component]
pub fn Input(
    #[prop(optional, into)]
    label: MaybeProp<String>,
    #[prop(into)]
    value: Signal<String>,
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// "text" (default), "date", "time", "number", "email", "tel"
    #[prop(optional, into)]
    input_type: MaybeProp<String>,
    /// `min` hint for date/number inputs; never enforced
    #[prop(optional, into)]
    min: MaybeProp<String>,
    #[prop(optional)]
    required: bool,
    #[prop(optional, into)]
    id: MaybeProp<String>,
) -> impl IntoView {
    let id = Signal::derive(move || id.get().unwrap_or_default());

    view! {
        <div class="form__group">
            <FieldLabel for_id=id text=label required=required />
            <input
                id=move || id.get()
                class="form__input"
                type=move || input_type.get().unwrap_or_else(|| "text".to_string())
                placeholder=move || placeholder.get()
                min=move || min.get()
                prop:value=move || value.get()
                on:input=forward(on_input)
            />
        </div>
    }
}

/// Dropdown over `(value, label)` pairs with an optional disabled placeholder
#[component]
pub fn Select(
    #[prop(optional, into)]
    label: MaybeProp<String>,
    #[prop(into)]
    value: Signal<String>,
    #[prop(optional)]
    on_change: Option<Callback<String>>,
    #[prop(into)]
    options: Signal<Vec<(String, String)>>,
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    #[prop(optional)]
    required: bool,
    #[prop(optional, into)]
    id: MaybeProp<String>,
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let id = Signal::derive(move || id.get().unwrap_or_default());
    let group_class = move || format!("form__group {}", class.get().unwrap_or_default());

    view! {
        <div class=group_class>
            <FieldLabel for_id=id text=label required=required />
            <select id=move || id.get() class="form__select" on:change=forward(on_change)>
                {move || placeholder.get().map(|text| view! {
                    <option value="" disabled=true selected=move || value.with(String::is_empty)>
                        {text}
                    </option>
                })}
                <For
                    each=move || options.get()
                    key=|(option_value, _)| option_value.clone()
                    children=move |(option_value, option_label)| {
                        let selected = {
                            let option_value = option_value.clone();
                            move || value.with(|current| *current == option_value)
                        };
                        view! { <option value=option_value selected=selected>{option_label}</option> }
                    }
                />
            </select>
        </div>
    }
}

#[component]
pub fn Textarea(
    #[prop(optional, into)]
    label: MaybeProp<String>,
    #[prop(into)]
    value: Signal<String>,
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    #[prop(default = 3)]
    rows: u32,
    #[prop(optional, into)]
    id: MaybeProp<String>,
) -> impl IntoView {
    let id = Signal::derive(move || id.get().unwrap_or_default());

    view! {
        <div class="form__group">
            <FieldLabel for_id=id text=label required=false />
            <textarea
                id=move || id.get()
                class="form__textarea"
                rows=rows
                placeholder=move || placeholder.get()
                prop:value=move || value.get()
                on:input=forward(on_input)
            />
        </div>
    }
}
