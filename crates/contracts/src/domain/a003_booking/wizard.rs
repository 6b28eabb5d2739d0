use super::draft::{BookingDraft, DraftField};
use super::error::BookingError;
use super::pricing::{summarize, total, PriceSummary};
use super::step::WizardStep;
use super::validation::{can_advance, first_incomplete_step};
use crate::domain::a001_package::aggregate::PACKAGES;
use crate::domain::a002_add_on::aggregate::ADD_ONS;
use crate::domain::common::Price;
use crate::shared::notification::Notification;

/// Мастер бронирования: черновик + текущий шаг
///
/// Переходы:
/// - `next`: вперёд только если текущий шаг заполнен и он не последний;
/// - `previous`: назад без проверок, не раньше первого шага;
/// - `submit`: только на шаге обзора, черновик не сбрасывается.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingWizard {
    draft: BookingDraft,
    step: WizardStep,
}

impl BookingWizard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wizard opened from a package card with that package preselected
    pub fn with_package(package_id: &str) -> Self {
        let mut wizard = Self::new();
        wizard.set_field(DraftField::Package(package_id.to_string()));
        wizard
    }

    pub fn draft(&self) -> &BookingDraft {
        &self.draft
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn set_field(&mut self, field: DraftField) {
        self.draft.set_field(field);
    }

    pub fn toggle_add_on(&mut self, id: &str) {
        self.draft.toggle_add_on(id);
    }

    /// Gate for the "Next" control
    pub fn can_go_next(&self) -> bool {
        !self.step.is_last() && can_advance(self.step, &self.draft)
    }

    /// Returns whether the step changed
    pub fn next(&mut self) -> bool {
        if !self.can_go_next() {
            return false;
        }
        match self.step.next() {
            Some(next) => {
                self.step = next;
                true
            }
            None => false,
        }
    }

    pub fn previous(&mut self) {
        self.step = self.step.previous();
    }

    /// Force the step index. Validation only gates `next`, so callers that
    /// jump directly are not blocked.
    pub fn go_to(&mut self, step: WizardStep) {
        self.step = step;
    }

    pub fn total(&self) -> Price {
        total(&self.draft, PACKAGES, ADD_ONS)
    }

    pub fn summary(&self) -> PriceSummary {
        summarize(&self.draft, PACKAGES, ADD_ONS)
    }

    /// Отправка заявки
    ///
    /// Перед подтверждением заново проверяются шаги 1–3: если пользователь
    /// вернулся назад и очистил поле, мастер переходит на первый незаполненный
    /// шаг. Черновик никуда не сохраняется и не сбрасывается.
    pub fn submit(&mut self) -> Result<Notification, BookingError> {
        if !self.step.is_last() {
            return Err(BookingError::NotOnReviewStep(self.step));
        }
        if let Some(incomplete) = first_incomplete_step(&self.draft) {
            self.step = incomplete;
            return Err(BookingError::IncompleteStep(incomplete));
        }
        Ok(Notification::booking_submitted())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_wizard() -> BookingWizard {
        let mut wizard = BookingWizard::new();
        wizard.set_field(DraftField::EventDate("2024-06-15".into()));
        wizard.set_field(DraftField::EventType("wedding".into()));
        wizard.set_field(DraftField::Location("Venue X".into()));
        wizard.set_field(DraftField::Package("essential".into()));
        wizard.set_field(DraftField::ContactName("Sarah Johnson".into()));
        wizard.set_field(DraftField::Email("sarah@example.com".into()));
        wizard.set_field(DraftField::Phone("(555) 123-4567".into()));
        wizard
    }

    #[test]
    fn test_starts_on_event_details() {
        let wizard = BookingWizard::new();
        assert_eq!(wizard.step(), WizardStep::EventDetails);
        assert!(!wizard.can_go_next());
    }

    #[test]
    fn test_next_blocked_until_step_valid() {
        let mut wizard = BookingWizard::new();
        assert!(!wizard.next());
        wizard.set_field(DraftField::EventDate("2024-06-15".into()));
        wizard.set_field(DraftField::EventType("wedding".into()));
        assert!(!wizard.next());
        wizard.set_field(DraftField::Location("Venue X".into()));
        assert!(wizard.next());
        assert_eq!(wizard.step(), WizardStep::PackageSelection);
    }

    #[test]
    fn test_walks_to_review_and_stops() {
        let mut wizard = filled_wizard();
        assert!(wizard.next());
        assert!(wizard.next());
        assert!(wizard.next());
        assert_eq!(wizard.step(), WizardStep::Review);
        assert!(!wizard.can_go_next());
        assert!(!wizard.next());
        assert_eq!(wizard.step(), WizardStep::Review);
    }

    #[test]
    fn test_previous_from_contact_info_ignores_completeness() {
        let mut wizard = BookingWizard::new();
        wizard.go_to(WizardStep::ContactInfo);
        wizard.previous();
        assert_eq!(wizard.step(), WizardStep::PackageSelection);
    }

    #[test]
    fn test_previous_stays_on_first_step() {
        let mut wizard = BookingWizard::new();
        wizard.previous();
        assert_eq!(wizard.step(), WizardStep::EventDetails);
    }

    #[test]
    fn test_no_cascade_when_earlier_field_cleared() {
        let mut wizard = filled_wizard();
        wizard.next();
        wizard.next();
        wizard.set_field(DraftField::Location(String::new()));
        assert_eq!(wizard.step(), WizardStep::ContactInfo);
        assert!(wizard.can_go_next());
    }

    #[test]
    fn test_submit_only_from_review() {
        let mut wizard = filled_wizard();
        assert_eq!(
            wizard.submit(),
            Err(BookingError::NotOnReviewStep(WizardStep::EventDetails))
        );
    }

    #[test]
    fn test_submit_confirms_and_keeps_draft() {
        let mut wizard = filled_wizard();
        wizard.go_to(WizardStep::Review);
        let before = wizard.draft().clone();

        let notice = wizard.submit().unwrap();
        assert_eq!(notice.title, "Booking Request Submitted!");
        assert_eq!(wizard.draft(), &before);
        assert_eq!(wizard.step(), WizardStep::Review);
    }

    #[test]
    fn test_submit_returns_to_first_incomplete_step() {
        let mut wizard = filled_wizard();
        wizard.go_to(WizardStep::Review);
        wizard.set_field(DraftField::Package(String::new()));

        assert_eq!(
            wizard.submit(),
            Err(BookingError::IncompleteStep(WizardStep::PackageSelection))
        );
        assert_eq!(wizard.step(), WizardStep::PackageSelection);
    }

    #[test]
    fn test_with_package_preselects() {
        let wizard = BookingWizard::with_package("luxury");
        assert_eq!(wizard.draft().selected_package_id, "luxury");
        assert_eq!(wizard.total(), 1599);
    }

    #[test]
    fn test_summary_total_matches_total() {
        let mut wizard = filled_wizard();
        wizard.toggle_add_on("extra-hour");
        wizard.toggle_add_on("photo-booth");
        assert_eq!(wizard.total(), 999);
        assert_eq!(wizard.summary().total, 999);
    }
}
