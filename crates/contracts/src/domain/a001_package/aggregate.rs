use crate::domain::common::{find_entry, CatalogEntry, Price};
use serde::Serialize;

// ============================================================================
// Aggregate
// ============================================================================

/// Photography package offered on the packages page and in the booking wizard
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Package {
    pub id: &'static str,
    pub name: &'static str,
    pub price: Price,
    pub duration: Option<&'static str>,
    /// Short deliverable line, e.g. "50+ edited photos"
    pub photos: &'static str,
    pub popular: bool,
    pub description: &'static str,
    pub features: &'static [&'static str],
}

impl CatalogEntry for Package {
    fn id(&self) -> &str {
        self.id
    }

    fn name(&self) -> &str {
        self.name
    }

    fn price(&self) -> Price {
        self.price
    }
}

impl Package {
    /// "4 hours • 50+ edited photos"
    pub fn headline(&self) -> String {
        match self.duration {
            Some(duration) => format!("{} • {}", duration, self.photos),
            None => self.photos.to_string(),
        }
    }
}

// ============================================================================
// Catalog
// ============================================================================

pub const PACKAGES: &[Package] = &[
    Package {
        id: "essential",
        name: "Essential",
        price: 599,
        duration: Some("4 hours"),
        photos: "50+ edited photos",
        popular: false,
        description: "Perfect for intimate gatherings and smaller events",
        features: &[
            "4 hours of coverage",
            "50+ professionally edited photos",
            "Online gallery access",
            "High-resolution downloads",
            "Basic photo retouching",
            "Email support",
        ],
    },
    Package {
        id: "premium",
        name: "Premium",
        price: 999,
        duration: Some("6 hours"),
        photos: "100+ edited photos",
        popular: true,
        description: "Our most popular package for weddings and major celebrations",
        features: &[
            "6 hours of coverage",
            "100+ professionally edited photos",
            "Online gallery with sharing options",
            "High-resolution downloads",
            "Advanced photo retouching",
            "15 printed photos (5x7)",
            "Priority email & phone support",
            "Second photographer available",
        ],
    },
    Package {
        id: "luxury",
        name: "Luxury",
        price: 1599,
        duration: Some("8 hours"),
        photos: "200+ edited photos",
        popular: false,
        description: "The ultimate photography experience for your special day",
        features: &[
            "8 hours of coverage",
            "200+ professionally edited photos",
            "Premium online gallery",
            "High-resolution downloads",
            "Professional retouching & color grading",
            "Custom photo album (50 pages)",
            "30 printed photos (8x10)",
            "Same-day sneak peek (5 photos)",
            "Dedicated support manager",
            "Second photographer included",
            "Drone photography (if permitted)",
        ],
    },
];

/// Найти пакет во встроенном каталоге
pub fn find_package(id: &str) -> Option<&'static Package> {
    find_entry(PACKAGES, id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_ids_are_unique() {
        for (i, a) in PACKAGES.iter().enumerate() {
            for b in &PACKAGES[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn test_find_package() {
        assert_eq!(find_package("premium").map(|p| p.price), Some(999));
        assert!(find_package("unknown-id").is_none());
    }

    #[test]
    fn test_only_premium_is_popular() {
        let popular: Vec<&str> = PACKAGES.iter().filter(|p| p.popular).map(|p| p.id).collect();
        assert_eq!(popular, vec!["premium"]);
    }

    #[test]
    fn test_headline() {
        assert_eq!(PACKAGES[0].headline(), "4 hours • 50+ edited photos");
    }
}
