use super::aggregate::BookingStatus;
use crate::shared::notification::Notification;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum AdminTab {
    #[default]
    Dashboard,
    Bookings,
    Packages,
    Portfolio,
}

impl AdminTab {
    pub fn id(&self) -> &'static str {
        match self {
            AdminTab::Dashboard => "dashboard",
            AdminTab::Bookings => "bookings",
            AdminTab::Packages => "packages",
            AdminTab::Portfolio => "portfolio",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AdminTab::Dashboard => "Dashboard",
            AdminTab::Bookings => "Bookings",
            AdminTab::Packages => "Packages",
            AdminTab::Portfolio => "Portfolio",
        }
    }

    pub fn all() -> [AdminTab; 4] {
        [
            AdminTab::Dashboard,
            AdminTab::Bookings,
            AdminTab::Packages,
            AdminTab::Portfolio,
        ]
    }
}

/// Что создаётся формой "Add" в админке
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminItemKind {
    Package,
    PortfolioItem,
}

impl AdminItemKind {
    pub fn label(&self) -> &'static str {
        match self {
            AdminItemKind::Package => "Package",
            AdminItemKind::PortfolioItem => "Portfolio Item",
        }
    }
}

/// UI state of the admin panel. Sample data is never mutated; actions only
/// return the notification to show.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AdminPanelState {
    pub active_tab: AdminTab,
    /// One flag shared by every tab's add form
    pub show_add_form: bool,
}

impl AdminPanelState {
    pub fn select_tab(&mut self, tab: AdminTab) {
        self.active_tab = tab;
    }

    pub fn open_add_form(&mut self) {
        self.show_add_form = true;
    }

    pub fn cancel_add_form(&mut self) {
        self.show_add_form = false;
    }

    /// "Save" on an add form: closes the form, nothing is stored
    pub fn save_item(&mut self, kind: AdminItemKind) -> Notification {
        self.show_add_form = false;
        Notification::new(
            format!("{} Added", kind.label()),
            format!(
                "New {} has been created successfully.",
                kind.label().to_lowercase()
            ),
        )
    }

    /// Status select on a booking row; the row itself keeps its status
    pub fn change_status(&self, status: BookingStatus) -> Notification {
        Notification::info(
            "Booking Updated",
            format!("Booking status changed to {}", status.code()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_item_closes_form() {
        let mut state = AdminPanelState::default();
        state.select_tab(AdminTab::Packages);
        state.open_add_form();

        let notice = state.save_item(AdminItemKind::Package);
        assert!(!state.show_add_form);
        assert_eq!(notice.title, "Package Added");
        assert_eq!(notice.description, "New package has been created successfully.");
    }

    #[test]
    fn test_portfolio_item_notice() {
        let mut state = AdminPanelState::default();
        let notice = state.save_item(AdminItemKind::PortfolioItem);
        assert_eq!(notice.title, "Portfolio Item Added");
        assert_eq!(notice.description, "New portfolio item has been created successfully.");
    }

    #[test]
    fn test_add_form_flag_survives_tab_switch() {
        let mut state = AdminPanelState::default();
        state.select_tab(AdminTab::Packages);
        state.open_add_form();
        state.select_tab(AdminTab::Portfolio);
        assert!(state.show_add_form);
        state.cancel_add_form();
        assert!(!state.show_add_form);
    }

    #[test]
    fn test_change_status_notice() {
        let state = AdminPanelState::default();
        let notice = state.change_status(BookingStatus::Completed);
        assert_eq!(notice.title, "Booking Updated");
        assert_eq!(notice.description, "Booking status changed to completed");
        assert_eq!(state, AdminPanelState::default());
    }
}
