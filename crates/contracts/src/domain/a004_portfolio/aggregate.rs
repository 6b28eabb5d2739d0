use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ============================================================================
// Category & filter
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PortfolioCategory {
    Wedding,
    Birthday,
    Corporate,
    Family,
}

impl PortfolioCategory {
    pub fn code(&self) -> &'static str {
        match self {
            PortfolioCategory::Wedding => "wedding",
            PortfolioCategory::Birthday => "birthday",
            PortfolioCategory::Corporate => "corporate",
            PortfolioCategory::Family => "family",
        }
    }

    /// Capitalised name for badges and selects
    pub fn display_name(&self) -> &'static str {
        match self {
            PortfolioCategory::Wedding => "Wedding",
            PortfolioCategory::Birthday => "Birthday",
            PortfolioCategory::Corporate => "Corporate",
            PortfolioCategory::Family => "Family",
        }
    }

    pub fn all() -> [PortfolioCategory; 4] {
        [
            PortfolioCategory::Wedding,
            PortfolioCategory::Birthday,
            PortfolioCategory::Corporate,
            PortfolioCategory::Family,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|c| c.code() == code)
    }
}

/// Фильтр галереи: все работы или одна категория
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PortfolioFilter {
    #[default]
    All,
    Category(PortfolioCategory),
}

impl PortfolioFilter {
    pub fn id(&self) -> &'static str {
        match self {
            PortfolioFilter::All => "all",
            PortfolioFilter::Category(c) => c.code(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PortfolioFilter::All => "All Events",
            PortfolioFilter::Category(PortfolioCategory::Wedding) => "Weddings",
            PortfolioFilter::Category(PortfolioCategory::Birthday) => "Birthdays",
            PortfolioFilter::Category(PortfolioCategory::Corporate) => "Corporate",
            PortfolioFilter::Category(PortfolioCategory::Family) => "Family",
        }
    }

    /// Filter buttons in display order
    pub fn all() -> Vec<PortfolioFilter> {
        std::iter::once(PortfolioFilter::All)
            .chain(PortfolioCategory::all().into_iter().map(PortfolioFilter::Category))
            .collect()
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::all().into_iter().find(|f| f.id() == id)
    }

    pub fn matches(&self, item: &PortfolioItem) -> bool {
        match self {
            PortfolioFilter::All => true,
            PortfolioFilter::Category(c) => item.category == *c,
        }
    }
}

// ============================================================================
// Aggregate
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PortfolioItem {
    pub id: u32,
    pub title: &'static str,
    pub category: PortfolioCategory,
    /// `YYYY-MM-DD`
    pub date: &'static str,
    pub image: &'static str,
    pub description: &'static str,
}

impl PortfolioItem {
    pub fn date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.date, "%Y-%m-%d").ok()
    }
}

pub const PORTFOLIO_ITEMS: &[PortfolioItem] = &[
    PortfolioItem {
        id: 1,
        title: "Sarah & Michael's Wedding",
        category: PortfolioCategory::Wedding,
        date: "2024-05-15",
        image: "https://images.unsplash.com/photo-1519741497674-611481863552?w=600&h=400&fit=crop",
        description: "A beautiful spring wedding in Central Park",
    },
    PortfolioItem {
        id: 2,
        title: "Emma's Sweet 16",
        category: PortfolioCategory::Birthday,
        date: "2024-04-20",
        image: "https://images.unsplash.com/photo-1530103862676-de8c9debad1d?w=600&h=400&fit=crop",
        description: "A magical sweet sixteen celebration",
    },
    PortfolioItem {
        id: 3,
        title: "Tech Corp Annual Gala",
        category: PortfolioCategory::Corporate,
        date: "2024-03-10",
        image: "https://images.unsplash.com/photo-1511795409834-ef04bbd61622?w=600&h=400&fit=crop",
        description: "Professional corporate event photography",
    },
    PortfolioItem {
        id: 4,
        title: "Johnson Family Reunion",
        category: PortfolioCategory::Family,
        date: "2024-02-28",
        image: "https://images.unsplash.com/photo-1511895426328-dc8714191300?w=600&h=400&fit=crop",
        description: "Three generations celebrating together",
    },
    PortfolioItem {
        id: 5,
        title: "David & Lisa's Engagement",
        category: PortfolioCategory::Wedding,
        date: "2024-01-15",
        image: "https://images.unsplash.com/photo-1522673607200-164d1b6ce486?w=600&h=400&fit=crop",
        description: "Romantic engagement session at sunset",
    },
    PortfolioItem {
        id: 6,
        title: "Startup Launch Party",
        category: PortfolioCategory::Corporate,
        date: "2024-01-05",
        image: "https://images.unsplash.com/photo-1492684223066-81342ee5ff30?w=600&h=400&fit=crop",
        description: "Celebrating innovation and success",
    },
];

/// Items visible under `filter`, in catalog order
pub fn filter_items(items: &[PortfolioItem], filter: PortfolioFilter) -> Vec<&PortfolioItem> {
    items.iter().filter(|item| filter.matches(item)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(items: Vec<&PortfolioItem>) -> Vec<u32> {
        items.into_iter().map(|i| i.id).collect()
    }

    #[test]
    fn test_all_shows_everything() {
        assert_eq!(
            ids(filter_items(PORTFOLIO_ITEMS, PortfolioFilter::All)),
            vec![1, 2, 3, 4, 5, 6]
        );
    }

    #[test]
    fn test_category_filter_keeps_order() {
        let weddings = filter_items(
            PORTFOLIO_ITEMS,
            PortfolioFilter::Category(PortfolioCategory::Wedding),
        );
        assert_eq!(ids(weddings), vec![1, 5]);

        let corporate = filter_items(
            PORTFOLIO_ITEMS,
            PortfolioFilter::Category(PortfolioCategory::Corporate),
        );
        assert_eq!(ids(corporate), vec![3, 6]);
    }

    #[test]
    fn test_filters_in_display_order() {
        let labels: Vec<&str> = PortfolioFilter::all().iter().map(|f| f.label()).collect();
        assert_eq!(labels, vec!["All Events", "Weddings", "Birthdays", "Corporate", "Family"]);
        assert_eq!(
            PortfolioFilter::from_id("family"),
            Some(PortfolioFilter::Category(PortfolioCategory::Family))
        );
        assert_eq!(PortfolioFilter::from_id("nature"), None);
    }

    #[test]
    fn test_dates_parse() {
        for item in PORTFOLIO_ITEMS {
            assert!(item.date().is_some(), "bad date for {}", item.title);
        }
        assert_eq!(PORTFOLIO_ITEMS[0].date(), NaiveDate::from_ymd_opt(2024, 5, 15));
    }
}
