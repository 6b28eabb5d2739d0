use crate::layout::global_context::{AppGlobalContext, Section};
use crate::shared::components::ui::{Badge, Button};
use crate::shared::components::PageHeader;
use crate::shared::format::format_long_date;
use contracts::domain::a004_portfolio::aggregate::{filter_items, PortfolioFilter, PORTFOLIO_ITEMS};
use leptos::prelude::*;

/// Галерея работ с фильтром по категории
#[component]
pub fn PortfolioPage() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");
    let active = RwSignal::new(PortfolioFilter::All);

    let go_booking = Callback::new(move |_| ctx.navigate(Section::Booking));

    view! {
        <div class="page">
            <PageHeader
                centered=true
                title="Our Portfolio"
                subtitle="Explore our collection of beautiful moments captured at weddings, celebrations, and special events."
            />

            <div class="portfolio__filters">
                {PortfolioFilter::all()
                    .into_iter()
                    .map(|filter| view! {
                        <Button
                            size="sm"
                            variant=Signal::derive(move || {
                                if active.get() == filter { "primary" } else { "outline" }.to_string()
                            })
                            on_click=Callback::new(move |_| active.set(filter))
                        >
                            {filter.label()}
                        </Button>
                    })
                    .collect_view()}
            </div>

            <div class="grid grid--3 portfolio__grid">
                {move || {
                    filter_items(PORTFOLIO_ITEMS, active.get())
                        .into_iter()
                        .map(|item| view! {
                            <article class="portfolio-card">
                                <div class="portfolio-card__media">
                                    <img class="portfolio-card__image" src=item.image alt=item.title />
                                    <Badge variant="overlay" class="portfolio-card__badge">
                                        {item.category.display_name()}
                                    </Badge>
                                </div>
                                <div class="portfolio-card__body">
                                    <h3 class="portfolio-card__title">{item.title}</h3>
                                    <p class="portfolio-card__description">{item.description}</p>
                                    <p class="portfolio-card__date">{format_long_date(item.date)}</p>
                                </div>
                            </article>
                        })
                        .collect_view()
                }}
            </div>

            <div class="cta cta--light">
                <h2 class="cta__title">"Love What You See?"</h2>
                <p class="cta__text">
                    "Let us capture your special moments with the same care and artistry."
                </p>
                <Button size="lg" on_click=go_booking>"Book Your Session"</Button>
            </div>
        </div>
    }
}
