use crate::layout::global_context::{AppGlobalContext, Section};
use crate::shared::components::ui::Button;
use crate::shared::components::CardAnimated;
use crate::shared::icons::icon;
use contracts::shared::site_info::SITE;
use leptos::prelude::*;

struct Highlight {
    icon: &'static str,
    accent: &'static str,
    title: &'static str,
    text: &'static str,
}

const HIGHLIGHTS: [Highlight; 3] = [
    Highlight {
        icon: "camera",
        accent: "orange",
        title: "Cultural Expertise",
        text: "Deep understanding of South Indian traditions, rituals, and ceremonies. We capture every meaningful moment with cultural sensitivity.",
    },
    Highlight {
        icon: "users",
        accent: "green",
        title: "Family Heritage",
        text: "We understand the importance of family bonds and generational traditions in South Indian culture. Every photo tells your family's story.",
    },
    Highlight {
        icon: "star",
        accent: "purple",
        title: "Authentic Storytelling",
        text: "From mehendi ceremonies to temple rituals, we capture the authentic essence of your celebrations with artistic excellence.",
    },
];

/// (emoji, name, rituals)
const SPECIALIZATIONS: [(&str, &str, &str); 8] = [
    ("🌸", "Tamil Weddings", "Traditional ceremonies, Muhurtham, Sapthapadi"),
    ("🪷", "Telugu Weddings", "Pellikuthuru, Jeelakarra-Bellam, Mangalsutra"),
    ("🌺", "Kannada Weddings", "Naandi, Var Puja, Sath Phere"),
    ("🌼", "Malayalam Weddings", "Thaali, Saptapadi, Aashirwad"),
    ("🕉️", "Temple Events", "Festivals, Pujas, Abhishekam ceremonies"),
    ("🎭", "Cultural Festivals", "Diwali, Dussehra, Onam, Pongal"),
    ("📿", "Sacred Thread", "Upanayanam, Janeu ceremonies"),
    ("👶", "Naming Ceremonies", "Namakarana, Annaprashana rituals"),
];

#[component]
pub fn HomePage() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    let go_portfolio = Callback::new(move |_| ctx.navigate(Section::Portfolio));
    let go_booking = Callback::new(move |_| ctx.navigate(Section::Booking));

    view! {
        <div class="home">
            <section class="hero">
                <div class="hero__content">
                    <h1 class="hero__title">{SITE.brand}</h1>
                    <p class="hero__tagline">{SITE.tagline}</p>
                    <p class="hero__text">
                        "Capturing the essence of South Indian traditions - from grand Tamil, Telugu, Kannada & Malayalam weddings
                        to sacred temple ceremonies, vibrant festivals, and precious family moments with cultural authenticity."
                    </p>
                    <div class="hero__actions">
                        <Button size="lg" class="button--gold" on_click=go_portfolio>
                            "View Portfolio"
                            {icon("camera")}
                        </Button>
                        <Button size="lg" variant="outline" class="button--on-dark" on_click=go_booking>
                            "Book Session"
                            {icon("arrow-right")}
                        </Button>
                    </div>
                </div>
            </section>

            <section class="home__section">
                <div class="section-intro">
                    <h2 class="section-intro__title">
                        {format!("Why Choose {} for South Indian Photography?", SITE.brand)}
                    </h2>
                    <p class="section-intro__text">
                        "We understand the cultural nuances, traditional rituals, and emotional significance of South Indian ceremonies.
                        With deep respect for customs and artistic vision, we preserve your heritage beautifully."
                    </p>
                </div>
                <div class="grid grid--3">
                    {HIGHLIGHTS
                        .iter()
                        .zip((0u32..).step_by(80))
                        .map(|(h, delay)| view! {
                            <CardAnimated delay_ms=delay class=format!("highlight highlight--{}", h.accent)>
                                <div class="highlight__icon">{icon(h.icon)}</div>
                                <h3 class="highlight__title">{h.title}</h3>
                                <p class="highlight__text">{h.text}</p>
                            </CardAnimated>
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="home__section home__section--warm">
                <h2 class="section-intro__title">"Our South Indian Photography Specializations"</h2>
                <div class="grid grid--4">
                    {SPECIALIZATIONS
                        .iter()
                        .map(|(emoji, name, desc)| view! {
                            <div class="tile">
                                <div class="tile__emoji">{*emoji}</div>
                                <h3 class="tile__title">{*name}</h3>
                                <p class="tile__text">{*desc}</p>
                            </div>
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="cta cta--dark">
                <h2 class="cta__title">"Ready to Preserve Your Heritage?"</h2>
                <p class="cta__text">
                    "Let's discuss your South Indian celebration and create timeless memories together."
                </p>
                <Button size="lg" variant="secondary" on_click=go_booking>
                    "Start Your Journey"
                    {icon("calendar")}
                </Button>
            </section>
        </div>
    }
}
