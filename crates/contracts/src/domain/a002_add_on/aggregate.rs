use crate::domain::common::{find_entry, CatalogEntry, Price};
use serde::Serialize;

/// Optional extra that can be attached to any package
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddOn {
    pub id: &'static str,
    pub name: &'static str,
    pub price: Price,
    pub description: &'static str,
}

impl CatalogEntry for AddOn {
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

pub const ADD_ONS: &[AddOn] = &[
    AddOn {
        id: "extra-hour",
        name: "Additional Hour",
        price: 150,
        description: "Extend your coverage time",
    },
    AddOn {
        id: "engagement",
        name: "Engagement Session",
        price: 300,
        description: "1-hour pre-event session",
    },
    AddOn {
        id: "photo-booth",
        name: "Photo Booth Setup",
        price: 250,
        description: "DIY photo booth with props",
    },
    AddOn {
        id: "same-day-edit",
        name: "Same-Day Edit Video",
        price: 400,
        description: "3-5 minute highlight reel",
    },
    AddOn {
        id: "extra-album",
        name: "Extra Photo Album",
        price: 200,
        description: "Additional 50-page album",
    },
    AddOn {
        id: "rush-delivery",
        name: "Rush Delivery",
        price: 100,
        description: "Photos delivered within 3 days",
    },
];

pub fn find_add_on(id: &str) -> Option<&'static AddOn> {
    find_entry(ADD_ONS, id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::price_of;

    #[test]
    fn test_price_lookup() {
        assert_eq!(price_of(ADD_ONS, "photo-booth"), 250);
        assert_eq!(price_of(ADD_ONS, "drone"), 0);
    }

    #[test]
    fn test_find_add_on() {
        assert_eq!(find_add_on("rush-delivery").map(|a| a.name), Some("Rush Delivery"));
    }
}
