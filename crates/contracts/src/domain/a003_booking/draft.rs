use super::error::BookingError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Черновик бронирования, которым владеет одна сессия мастера
///
/// Создаётся при открытии мастера и отбрасывается при уходе со страницы.
/// Сериализуется только для диагностического лога при отправке.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingDraft {
    pub contact_name: String,
    pub email: String,
    pub phone: String,
    /// `YYYY-MM-DD` from the date input
    pub event_date: String,
    pub event_time: String,
    /// Lowercase event type value, see [`crate::enums::EventType::value`]
    pub event_type: String,
    pub location: String,
    /// Integer as typed by the user; not parsed for validation
    pub guest_count: String,
    pub selected_package_id: String,
    pub selected_add_on_ids: BTreeSet<String>,
    pub details: String,
}

/// Обновление ровно одного скалярного поля черновика
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftField {
    ContactName(String),
    Email(String),
    Phone(String),
    EventDate(String),
    EventTime(String),
    EventType(String),
    Location(String),
    GuestCount(String),
    Package(String),
    Details(String),
}

impl DraftField {
    /// Bridge for string-keyed callers (form element ids)
    pub fn from_name(name: &str, value: impl Into<String>) -> Result<Self, BookingError> {
        let value = value.into();
        let field = match name {
            "name" => DraftField::ContactName(value),
            "email" => DraftField::Email(value),
            "phone" => DraftField::Phone(value),
            "eventDate" => DraftField::EventDate(value),
            "eventTime" => DraftField::EventTime(value),
            "eventType" => DraftField::EventType(value),
            "location" => DraftField::Location(value),
            "guestCount" => DraftField::GuestCount(value),
            "package" => DraftField::Package(value),
            "details" => DraftField::Details(value),
            other => return Err(BookingError::UnknownField(other.to_string())),
        };
        Ok(field)
    }

    pub fn name(&self) -> &'static str {
        match self {
            DraftField::ContactName(_) => "name",
            DraftField::Email(_) => "email",
            DraftField::Phone(_) => "phone",
            DraftField::EventDate(_) => "eventDate",
            DraftField::EventTime(_) => "eventTime",
            DraftField::EventType(_) => "eventType",
            DraftField::Location(_) => "location",
            DraftField::GuestCount(_) => "guestCount",
            DraftField::Package(_) => "package",
            DraftField::Details(_) => "details",
        }
    }
}

impl BookingDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Заменить одно поле; остальные поля не трогаются
    pub fn set_field(&mut self, field: DraftField) {
        match field {
            DraftField::ContactName(v) => self.contact_name = v,
            DraftField::Email(v) => self.email = v,
            DraftField::Phone(v) => self.phone = v,
            DraftField::EventDate(v) => self.event_date = v,
            DraftField::EventTime(v) => self.event_time = v,
            DraftField::EventType(v) => self.event_type = v,
            DraftField::Location(v) => self.location = v,
            DraftField::GuestCount(v) => self.guest_count = v,
            DraftField::Package(v) => self.selected_package_id = v,
            DraftField::Details(v) => self.details = v,
        }
    }

    /// Add the add-on if absent, remove it if present
    pub fn toggle_add_on(&mut self, id: &str) {
        if !self.selected_add_on_ids.remove(id) {
            self.selected_add_on_ids.insert(id.to_string());
        }
    }

    pub fn has_add_on(&self, id: &str) -> bool {
        self.selected_add_on_ids.contains(id)
    }

    pub fn is_package_selected(&self, id: &str) -> bool {
        self.selected_package_id == id
    }

    /// Время для сводки: пустое значение показывается как "TBD"
    pub fn event_time_or_tbd(&self) -> &str {
        if self.event_time.is_empty() {
            "TBD"
        } else {
            &self.event_time
        }
    }

    pub fn guest_count_or_unspecified(&self) -> &str {
        if self.guest_count.is_empty() {
            "Not specified"
        } else {
            &self.guest_count
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_field_touches_one_field() {
        let mut draft = BookingDraft::new();
        draft.set_field(DraftField::Location("Venue X".into()));

        let expected = BookingDraft {
            location: "Venue X".into(),
            ..BookingDraft::default()
        };
        assert_eq!(draft, expected);
    }

    #[test]
    fn test_set_field_replaces_value() {
        let mut draft = BookingDraft::new();
        draft.set_field(DraftField::Email("a@b.c".into()));
        draft.set_field(DraftField::Email(String::new()));
        assert!(draft.email.is_empty());
    }

    #[test]
    fn test_toggle_add_on_twice_is_identity() {
        let mut draft = BookingDraft::new();
        draft.toggle_add_on("extra-hour");
        let before = draft.selected_add_on_ids.clone();

        draft.toggle_add_on("photo-booth");
        draft.toggle_add_on("photo-booth");
        assert_eq!(draft.selected_add_on_ids, before);

        draft.toggle_add_on("extra-hour");
        assert!(draft.selected_add_on_ids.is_empty());
    }

    #[test]
    fn test_from_name() {
        assert_eq!(
            DraftField::from_name("eventDate", "2024-06-15"),
            Ok(DraftField::EventDate("2024-06-15".into()))
        );
        assert_eq!(DraftField::from_name("package", "luxury").map(|f| f.name()), Ok("package"));
        assert_eq!(
            DraftField::from_name("duration", "4"),
            Err(BookingError::UnknownField("duration".into()))
        );
    }

    #[test]
    fn test_summary_placeholders() {
        let mut draft = BookingDraft::new();
        assert_eq!(draft.event_time_or_tbd(), "TBD");
        assert_eq!(draft.guest_count_or_unspecified(), "Not specified");
        draft.set_field(DraftField::GuestCount("50".into()));
        assert_eq!(draft.guest_count_or_unspecified(), "50");
    }

    #[test]
    fn test_serializes_camel_case() {
        let mut draft = BookingDraft::new();
        draft.toggle_add_on("rush-delivery");
        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json["selectedAddOnIds"], serde_json::json!(["rush-delivery"]));
        assert!(json.get("contactName").is_some());
    }
}
