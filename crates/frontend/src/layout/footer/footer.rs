use crate::shared::icons::icon;
use contracts::shared::site_info::SITE;
use leptos::prelude::*;

const SPECIALIZATIONS: [&str; 4] = [
    "South Indian Weddings",
    "Temple Ceremonies",
    "Cultural Festivals",
    "Heritage Family Portraits",
];

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer data-zone="footer" class="footer">
            <div class="footer__grid">
                <div>
                    <div class="footer__brand">
                        {icon("camera")}
                        <span>{SITE.brand}</span>
                    </div>
                    <p class="footer__text">
                        "South Indian heritage photography capturing life's most precious cultural moments."
                    </p>
                </div>
                <div>
                    <h3 class="footer__heading">"Contact Info"</h3>
                    <p class="footer__text">{format!("📧 {}", SITE.email)}</p>
                    <p class="footer__text">{format!("📞 {}", SITE.phone)}</p>
                    <p class="footer__text">{format!("📍 {}", SITE.city)}</p>
                </div>
                <div>
                    <h3 class="footer__heading">"Specializations"</h3>
                    <ul class="footer__list">
                        {SPECIALIZATIONS
                            .iter()
                            .map(|s| view! { <li>{*s}</li> })
                            .collect_view()}
                    </ul>
                </div>
            </div>
            <div class="footer__bottom">
                <p>
                    {format!(
                        "© {} {}. Preserving South Indian heritage through photography.",
                        SITE.copyright_year,
                        SITE.brand
                    )}
                </p>
            </div>
        </footer>
    }
}
