//! Mock admin panel: display-only snapshots of sample data plus actions that
//! only produce notifications.

pub mod aggregate;
pub mod panel;

pub use aggregate::{
    admin_packages, recent_bookings, AdminBooking, AdminPackage, AdminPortfolioEntry,
    BookingStatus, DashboardStats, PublishStatus, ADMIN_PORTFOLIO, DASHBOARD_STATS,
    SAMPLE_BOOKINGS,
};
pub use panel::{AdminItemKind, AdminPanelState, AdminTab};
