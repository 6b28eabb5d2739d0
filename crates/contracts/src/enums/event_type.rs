use serde::{Deserialize, Serialize};

/// Типы мероприятий, доступные в мастере бронирования
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventType {
    Wedding,
    BirthdayParty,
    CorporateEvent,
    Anniversary,
    Graduation,
    BabyShower,
    EngagementParty,
    FamilyReunion,
    Other,
}

impl EventType {
    /// Человекочитаемое название
    pub fn label(&self) -> &'static str {
        match self {
            EventType::Wedding => "Wedding",
            EventType::BirthdayParty => "Birthday Party",
            EventType::CorporateEvent => "Corporate Event",
            EventType::Anniversary => "Anniversary",
            EventType::Graduation => "Graduation",
            EventType::BabyShower => "Baby Shower",
            EventType::EngagementParty => "Engagement Party",
            EventType::FamilyReunion => "Family Reunion",
            EventType::Other => "Other",
        }
    }

    /// Значение, которое хранится в черновике (название в нижнем регистре)
    pub fn value(&self) -> &'static str {
        match self {
            EventType::Wedding => "wedding",
            EventType::BirthdayParty => "birthday party",
            EventType::CorporateEvent => "corporate event",
            EventType::Anniversary => "anniversary",
            EventType::Graduation => "graduation",
            EventType::BabyShower => "baby shower",
            EventType::EngagementParty => "engagement party",
            EventType::FamilyReunion => "family reunion",
            EventType::Other => "other",
        }
    }

    pub fn all() -> Vec<EventType> {
        vec![
            EventType::Wedding,
            EventType::BirthdayParty,
            EventType::CorporateEvent,
            EventType::Anniversary,
            EventType::Graduation,
            EventType::BabyShower,
            EventType::EngagementParty,
            EventType::FamilyReunion,
            EventType::Other,
        ]
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::all().into_iter().find(|t| t.value() == value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_is_lowercase_label() {
        for t in EventType::all() {
            assert_eq!(t.value(), t.label().to_lowercase());
        }
    }

    #[test]
    fn test_from_value() {
        assert_eq!(EventType::from_value("baby shower"), Some(EventType::BabyShower));
        assert_eq!(EventType::from_value("Wedding"), None);
    }
}
