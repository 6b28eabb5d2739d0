pub mod footer;
pub mod global_context;
pub mod header;

use crate::shared::notification::Toaster;
use leptos::prelude::*;

/// Site shell.
///
/// ```text
/// +------------------------------------------+
/// |        Header (fixed navigation)         |
/// +------------------------------------------+
/// |             active section               |
/// +------------------------------------------+
/// |                 Footer                   |
/// +------------------------------------------+
/// ```
///
/// Toasts are rendered above everything, bottom-right.
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="site-layout">
            <header::Header />

            <main class="site-main">
                {children()}
            </main>

            <footer::Footer />

            <Toaster />
        </div>
    }
}
