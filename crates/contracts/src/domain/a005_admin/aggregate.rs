use crate::domain::a001_package::aggregate::PACKAGES;
use crate::domain::a004_portfolio::aggregate::PortfolioCategory;
use crate::domain::common::Price;
use serde::{Deserialize, Serialize};

// ============================================================================
// Booking status
// ============================================================================

/// Статус заявки в админке
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

impl BookingStatus {
    pub fn code(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Completed => "completed",
            BookingStatus::Cancelled => "cancelled",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "Pending",
            BookingStatus::Confirmed => "Confirmed",
            BookingStatus::Completed => "Completed",
            BookingStatus::Cancelled => "Cancelled",
        }
    }

    pub fn all() -> [BookingStatus; 4] {
        [
            BookingStatus::Pending,
            BookingStatus::Confirmed,
            BookingStatus::Completed,
            BookingStatus::Cancelled,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|s| s.code() == code)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PublishStatus {
    Published,
    Draft,
}

impl PublishStatus {
    pub fn code(&self) -> &'static str {
        match self {
            PublishStatus::Published => "published",
            PublishStatus::Draft => "draft",
        }
    }
}

// ============================================================================
// Sample rows
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdminBooking {
    pub id: u32,
    pub client: &'static str,
    pub event: &'static str,
    pub date: &'static str,
    /// Package display name
    pub package: &'static str,
    pub status: BookingStatus,
    pub total: Price,
}

pub const SAMPLE_BOOKINGS: &[AdminBooking] = &[
    AdminBooking {
        id: 1,
        client: "Sarah Johnson",
        event: "Wedding",
        date: "2024-06-15",
        package: "Premium",
        status: BookingStatus::Confirmed,
        total: 999,
    },
    AdminBooking {
        id: 2,
        client: "Mike Chen",
        event: "Birthday Party",
        date: "2024-06-20",
        package: "Essential",
        status: BookingStatus::Pending,
        total: 599,
    },
    AdminBooking {
        id: 3,
        client: "Tech Corp",
        event: "Corporate Event",
        date: "2024-06-25",
        package: "Luxury",
        status: BookingStatus::Confirmed,
        total: 1599,
    },
];

/// First `limit` sample bookings for the dashboard
pub fn recent_bookings(limit: usize) -> &'static [AdminBooking] {
    &SAMPLE_BOOKINGS[..limit.min(SAMPLE_BOOKINGS.len())]
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdminPackage {
    pub id: u32,
    pub name: &'static str,
    pub price: Price,
    pub duration: &'static str,
    pub active: bool,
}

/// Admin snapshot of the package catalog; every built-in package is active
pub fn admin_packages() -> Vec<AdminPackage> {
    PACKAGES
        .iter()
        .zip(1u32..)
        .map(|(package, id)| AdminPackage {
            id,
            name: package.name,
            price: package.price,
            duration: package.duration.unwrap_or("-"),
            active: true,
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdminPortfolioEntry {
    pub id: u32,
    pub title: &'static str,
    pub category: PortfolioCategory,
    pub status: PublishStatus,
}

pub const ADMIN_PORTFOLIO: &[AdminPortfolioEntry] = &[
    AdminPortfolioEntry {
        id: 1,
        title: "Sarah & Michael's Wedding",
        category: PortfolioCategory::Wedding,
        status: PublishStatus::Published,
    },
    AdminPortfolioEntry {
        id: 2,
        title: "Emma's Sweet 16",
        category: PortfolioCategory::Birthday,
        status: PublishStatus::Published,
    },
    AdminPortfolioEntry {
        id: 3,
        title: "Tech Corp Gala",
        category: PortfolioCategory::Corporate,
        status: PublishStatus::Draft,
    },
];

// ============================================================================
// Dashboard
// ============================================================================

/// Показатели дашборда (статичные, не вычисляются из выборки)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
    pub total_bookings: u32,
    pub this_month: u32,
    pub revenue: Price,
    pub portfolio_items: u32,
}

pub const DASHBOARD_STATS: DashboardStats = DashboardStats {
    total_bookings: 24,
    this_month: 8,
    revenue: 12_450,
    portfolio_items: 42,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes_round_trip() {
        for status in BookingStatus::all() {
            assert_eq!(BookingStatus::from_code(status.code()), Some(status));
        }
        assert_eq!(BookingStatus::from_code("archived"), None);
    }

    #[test]
    fn test_admin_packages_mirror_catalog() {
        let rows = admin_packages();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].id, 1);
        assert_eq!(rows[2].name, "Luxury");
        assert_eq!(rows[2].price, 1599);
        assert_eq!(rows[1].duration, "6 hours");
        assert!(rows.iter().all(|r| r.active));
    }

    #[test]
    fn test_recent_bookings_clamps() {
        assert_eq!(recent_bookings(2).len(), 2);
        assert_eq!(recent_bookings(10).len(), SAMPLE_BOOKINGS.len());
    }

    #[test]
    fn test_sample_totals_match_package_prices() {
        for booking in SAMPLE_BOOKINGS {
            let package = PACKAGES.iter().find(|p| p.name == booking.package);
            assert_eq!(package.map(|p| p.price), Some(booking.total));
        }
    }
}
