use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotificationKind {
    #[default]
    Success,
    Info,
}

/// Кратковременное уведомление (toast)
///
/// Ни одно уведомление не подтверждает реальное сохранение: все действия
/// сайта работают только в памяти.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub kind: NotificationKind,
}

impl Notification {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            kind: NotificationKind::Success,
        }
    }

    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Info,
            ..Self::new(title, description)
        }
    }

    pub fn booking_submitted() -> Self {
        Self::new(
            "Booking Request Submitted!",
            "We'll contact you within 24 hours to confirm your booking.",
        )
    }
}
