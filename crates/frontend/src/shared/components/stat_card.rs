use crate::shared::icons::icon;
use leptos::prelude::*;

/// Dashboard tile: label, preformatted value and a coloured icon
#[component]
pub fn StatCard(
    /// Label displayed above the value
    #[prop(into)]
    label: String,
    /// Already formatted value ("24", "$12,450")
    #[prop(into)]
    value: String,
    /// Icon name from the icon() helper
    #[prop(into)]
    icon_name: String,
    /// Icon colour: "blue", "green", "purple", "orange"
    #[prop(optional, into)]
    accent: MaybeProp<String>,
) -> impl IntoView {
    let icon_class = move || {
        format!(
            "stat-card__icon stat-card__icon--{}",
            accent.get().unwrap_or_else(|| "blue".to_string())
        )
    };

    view! {
        <div class="stat-card">
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{value}</div>
            </div>
            <div class=icon_class>
                {icon(&icon_name)}
            </div>
        </div>
    }
}
