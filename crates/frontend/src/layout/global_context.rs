use leptos::prelude::Effect;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

const SECTION_QUERY_KEY: &str = "section";

/// Top-level site section selected in the navigation bar
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Section {
    #[default]
    Home,
    Portfolio,
    Packages,
    Booking,
    Admin,
}

impl Section {
    pub fn id(&self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Portfolio => "portfolio",
            Section::Packages => "packages",
            Section::Booking => "booking",
            Section::Admin => "admin",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Portfolio => "Portfolio",
            Section::Packages => "Packages",
            Section::Booking => "Book Now",
            Section::Admin => "Admin",
        }
    }

    pub fn all() -> [Section; 5] {
        [
            Section::Home,
            Section::Portfolio,
            Section::Packages,
            Section::Booking,
            Section::Admin,
        ]
    }

    /// Unknown ids fall back to the home page
    pub fn from_id(id: &str) -> Self {
        Self::all()
            .into_iter()
            .find(|s| s.id() == id)
            .unwrap_or_default()
    }
}

/// Parse `?section=...` into a section, ignoring any other keys
pub fn section_from_query(search: &str) -> Option<Section> {
    let params: HashMap<String, String> =
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
    params.get(SECTION_QUERY_KEY).map(|id| Section::from_id(id))
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active: RwSignal<Section>,
    pub menu_open: RwSignal<bool>,
    /// Package chosen on the packages page, consumed by the booking wizard
    pub preselected_package: RwSignal<Option<String>>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(Section::Home),
            menu_open: RwSignal::new(false),
            preselected_package: RwSignal::new(None),
        }
    }

    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        if let Some(section) = section_from_query(&search) {
            self.active.set(section);
        }

        let this = *self;
        Effect::new(move |_| {
            let section = this.active.get();
            let query_string = serde_qs::to_string(&HashMap::from([(
                SECTION_QUERY_KEY.to_string(),
                section.id().to_string(),
            )]))
            .unwrap_or_default();

            let new_url = format!("?{}", query_string);

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            // Only update URL if it actually changed
            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }

    /// Switch section and close the mobile menu
    pub fn navigate(&self, section: Section) {
        log::debug!("navigate: {}", section.id());
        self.active.set(section);
        self.menu_open.set(false);
        if let Some(w) = window() {
            w.scroll_to_with_x_and_y(0.0, 0.0);
        }
    }

    /// Open the booking wizard with a package already selected
    pub fn book_package(&self, package_id: &str) {
        self.preselected_package.set(Some(package_id.to_string()));
        self.navigate(Section::Booking);
    }

    pub fn take_preselected_package(&self) -> Option<String> {
        self.preselected_package
            .try_update_untracked(|p| p.take())
            .flatten()
    }

    pub fn toggle_menu(&self) {
        self.menu_open.update(|open| *open = !*open);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_ids_round_trip() {
        for section in Section::all() {
            assert_eq!(Section::from_id(section.id()), section);
        }
        assert_eq!(Section::from_id("blog"), Section::Home);
    }

    #[test]
    fn test_section_from_query() {
        assert_eq!(section_from_query("?section=booking"), Some(Section::Booking));
        assert_eq!(section_from_query("section=admin&x=1"), Some(Section::Admin));
        assert_eq!(section_from_query(""), None);
        assert_eq!(section_from_query("?section=nope"), Some(Section::Home));
    }

    #[test]
    fn test_nav_labels() {
        let labels: Vec<&str> = Section::all().iter().map(|s| s.label()).collect();
        assert_eq!(labels, vec!["Home", "Portfolio", "Packages", "Book Now", "Admin"]);
    }
}
