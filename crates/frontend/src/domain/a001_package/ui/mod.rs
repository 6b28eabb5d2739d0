use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::ui::{Badge, Button};
use crate::shared::components::{CardAnimated, PageHeader};
use crate::shared::icons::icon;
use contracts::domain::a001_package::aggregate::{Package, PACKAGES};
use contracts::domain::a002_add_on::aggregate::ADD_ONS;
use contracts::shared::site_info::SITE;
use leptos::prelude::*;

const FAQ: [(&str, &str); 6] = [
    (
        "When will I receive my photos?",
        "Standard delivery is 2-3 weeks. Rush delivery available for additional fee.",
    ),
    (
        "Can I purchase additional hours?",
        "Yes! Additional hours can be added at $150/hour.",
    ),
    (
        "Do you travel for events?",
        "We cover the NYC area. Travel fees may apply for distant locations.",
    ),
    (
        "What's your cancellation policy?",
        "50% refund if cancelled 30+ days before event date.",
    ),
    (
        "Do you offer payment plans?",
        "Yes! 50% deposit required, balance due on event date.",
    ),
    (
        "Can I see full galleries?",
        "Full client galleries available upon request during consultation.",
    ),
];

#[component]
fn PackageCard(package: &'static Package, delay_ms: u32) -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    let class = if package.popular {
        "package-card package-card--popular"
    } else {
        "package-card"
    };
    let choose = Callback::new(move |_| ctx.book_package(package.id));

    view! {
        <CardAnimated delay_ms=delay_ms class=class>
            {package.popular.then(|| view! {
                <div class="package-card__ribbon">
                    {icon("star")}
                    <span>"MOST POPULAR"</span>
                </div>
            })}
            <div class="package-card__header">
                <h2 class="package-card__name">{package.name}</h2>
                <p class="package-card__description">{package.description}</p>
                <div class="package-card__price">{SITE.currency.format(package.price)}</div>
                <p class="package-card__meta">{package.headline()}</p>
            </div>
            <ul class="package-card__features">
                {package
                    .features
                    .iter()
                    .map(|feature| view! {
                        <li class="package-card__feature">
                            <span class="package-card__check">{icon("check")}</span>
                            <span>{*feature}</span>
                        </li>
                    })
                    .collect_view()}
            </ul>
            <Button
                size="lg"
                variant=if package.popular { "primary" } else { "secondary" }
                class="button--block"
                on_click=choose
            >
                {format!("Choose {}", package.name)}
            </Button>
        </CardAnimated>
    }
}

#[component]
pub fn PackagesPage() -> impl IntoView {
    view! {
        <div class="page page--gradient">
            <PageHeader
                centered=true
                title="Photography Packages"
                subtitle="Choose the perfect package for your event. All packages include professional editing, online gallery access, and our commitment to capturing your special moments."
            />

            <div class="grid grid--3 packages__grid">
                {PACKAGES
                    .iter()
                    .zip((0u32..).step_by(80))
                    .map(|(package, delay)| view! { <PackageCard package=package delay_ms=delay /> })
                    .collect_view()}
            </div>

            <div class="panel">
                <h2 class="panel__title">"Enhance Your Package"</h2>
                <div class="grid grid--3">
                    {ADD_ONS
                        .iter()
                        .map(|add_on| view! {
                            <div class="add-on-card">
                                <div class="add-on-card__header">
                                    <h3 class="add-on-card__name">{add_on.name}</h3>
                                    <Badge variant="outline">{SITE.currency.format_extra(add_on.price)}</Badge>
                                </div>
                                <p class="add-on-card__description">{add_on.description}</p>
                            </div>
                        })
                        .collect_view()}
                </div>
            </div>

            <div class="faq">
                <h2 class="faq__title">"Frequently Asked Questions"</h2>
                <div class="grid grid--2 faq__grid">
                    {FAQ
                        .iter()
                        .map(|(question, answer)| view! {
                            <div class="faq__item">
                                <h3 class="faq__question">{*question}</h3>
                                <p class="faq__answer">{*answer}</p>
                            </div>
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
