use crate::shared::notification::NotificationService;
use contracts::domain::a003_booking::{
    BookingDraft, BookingError, BookingWizard, DraftField, PriceSummary, WizardStep,
};
use contracts::shared::notification::Notification;
use leptos::prelude::*;

/// ViewModel for the booking wizard
///
/// Черновик живёт только пока открыта страница бронирования.
#[derive(Clone, Copy)]
pub struct BookingWizardViewModel {
    pub wizard: RwSignal<BookingWizard>,
}

impl BookingWizardViewModel {
    pub fn new(preselected_package: Option<String>) -> Self {
        let wizard = match preselected_package {
            Some(package_id) => BookingWizard::with_package(&package_id),
            None => BookingWizard::new(),
        };
        Self {
            wizard: RwSignal::new(wizard),
        }
    }

    pub fn step(&self) -> WizardStep {
        self.wizard.with(|w| w.step())
    }

    /// Read a value out of the current draft
    pub fn draft_value<T>(&self, read: impl FnOnce(&BookingDraft) -> T) -> T {
        self.wizard.with(|w| read(w.draft()))
    }

    pub fn summary(&self) -> PriceSummary {
        self.wizard.with(|w| w.summary())
    }

    pub fn can_go_next(&self) -> bool {
        self.wizard.with(|w| w.can_go_next())
    }

    pub fn set_field(&self, field: DraftField) {
        self.wizard.update(|w| w.set_field(field));
    }

    pub fn toggle_add_on(&self, id: &str) {
        self.wizard.update(|w| w.toggle_add_on(id));
    }

    pub fn next(&self) {
        self.wizard.update(|w| {
            w.next();
        });
    }

    pub fn previous(&self) {
        self.wizard.update(|w| w.previous());
    }

    /// Submit the booking request
    ///
    /// Nothing is sent anywhere: the draft is logged and a confirmation toast shown.
    pub fn submit_command(&self, notifications: NotificationService) {
        let Some(result) = self.wizard.try_update(|w| w.submit()) else {
            return;
        };

        match result {
            Ok(confirmation) => {
                let payload = self
                    .wizard
                    .with_untracked(|w| serde_json::to_string(w.draft()))
                    .unwrap_or_else(|e| format!("<unserializable draft: {}>", e));
                log::info!("Booking submitted: {}", payload);
                notifications.show(confirmation);
            }
            Err(BookingError::IncompleteStep(step)) => {
                log::warn!("Booking submit rejected: step {} is incomplete", step.index());
                notifications.show(Notification::info(
                    "Booking Incomplete",
                    format!("Please complete \"{}\" before submitting.", step.title()),
                ));
            }
            Err(e) => log::warn!("Booking submit ignored: {}", e),
        }
    }
}
