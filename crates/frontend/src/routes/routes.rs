use crate::domain::a001_package::ui::PackagesPage;
use crate::domain::a003_booking::ui::wizard::BookingWizardPage;
use crate::domain::a004_portfolio::ui::PortfolioPage;
use crate::domain::a005_admin::ui::AdminPanel;
use crate::layout::global_context::{AppGlobalContext, Section};
use crate::layout::Shell;
use crate::pages::home::HomePage;
use leptos::prelude::*;

/// Section → page. The single place where section ids map to views.
fn render_section(section: Section) -> AnyView {
    match section {
        Section::Home => view! { <HomePage /> }.into_any(),
        Section::Portfolio => view! { <PortfolioPage /> }.into_any(),
        Section::Packages => view! { <PackagesPage /> }.into_any(),
        Section::Booking => view! { <BookingWizardPage /> }.into_any(),
        Section::Admin => view! { <AdminPanel /> }.into_any(),
    }
}

// No leptos_router: the active section lives in AppGlobalContext and is
// mirrored into `?section=` by init_router_integration.
#[component]
pub fn AppRoutes() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    // Initialize router integration. This runs once when the component is created.
    ctx.init_router_integration();

    view! {
        <Shell>
            {move || render_section(ctx.active.get())}
        </Shell>
    }
}
