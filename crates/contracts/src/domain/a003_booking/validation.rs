use super::draft::BookingDraft;
use super::step::WizardStep;

/// Можно ли перейти с шага `step` вперёд
///
/// Проверяется только непустота обязательных полей; формат email и
/// телефона не проверяется. Шаг обзора всегда проходим.
pub fn can_advance(step: WizardStep, draft: &BookingDraft) -> bool {
    match step {
        WizardStep::EventDetails => {
            !draft.event_date.is_empty()
                && !draft.event_type.is_empty()
                && !draft.location.is_empty()
        }
        WizardStep::PackageSelection => !draft.selected_package_id.is_empty(),
        WizardStep::ContactInfo => {
            !draft.contact_name.is_empty() && !draft.email.is_empty() && !draft.phone.is_empty()
        }
        WizardStep::Review => true,
    }
}

/// Same gate for a raw step index; any index without requirements passes
pub fn can_advance_index(index: u8, draft: &BookingDraft) -> bool {
    WizardStep::from_index(index)
        .map(|step| can_advance(step, draft))
        .unwrap_or(true)
}

/// First step whose required fields are missing, if any
pub fn first_incomplete_step(draft: &BookingDraft) -> Option<WizardStep> {
    WizardStep::all()
        .into_iter()
        .find(|step| !can_advance(*step, draft))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a003_booking::draft::DraftField;

    fn step_one_draft() -> BookingDraft {
        let mut draft = BookingDraft::new();
        draft.set_field(DraftField::EventDate("2024-06-15".into()));
        draft.set_field(DraftField::EventType("wedding".into()));
        draft.set_field(DraftField::Location("Venue X".into()));
        draft
    }

    #[test]
    fn test_step_one_requires_date_type_location() {
        let complete = step_one_draft();
        assert!(can_advance(WizardStep::EventDetails, &complete));

        for missing in ["eventDate", "eventType", "location"] {
            let mut draft = complete.clone();
            draft.set_field(DraftField::from_name(missing, "").unwrap());
            assert!(
                !can_advance(WizardStep::EventDetails, &draft),
                "{} should be required",
                missing
            );
        }
    }

    #[test]
    fn test_step_one_ignores_optional_fields() {
        let mut draft = step_one_draft();
        draft.set_field(DraftField::EventTime(String::new()));
        draft.set_field(DraftField::GuestCount(String::new()));
        draft.set_field(DraftField::Details(String::new()));
        assert!(can_advance(WizardStep::EventDetails, &draft));
    }

    #[test]
    fn test_step_two_iff_package_selected() {
        let mut draft = BookingDraft::new();
        assert!(!can_advance(WizardStep::PackageSelection, &draft));
        draft.set_field(DraftField::Package("unknown-id".into()));
        assert!(can_advance(WizardStep::PackageSelection, &draft));
    }

    #[test]
    fn test_step_three_accepts_any_non_empty_contact() {
        let mut draft = BookingDraft::new();
        draft.set_field(DraftField::ContactName("A".into()));
        draft.set_field(DraftField::Email("not-an-email".into()));
        assert!(!can_advance(WizardStep::ContactInfo, &draft));
        draft.set_field(DraftField::Phone("x".into()));
        assert!(can_advance(WizardStep::ContactInfo, &draft));
    }

    #[test]
    fn test_review_and_unknown_indexes_always_pass() {
        let draft = BookingDraft::new();
        assert!(can_advance(WizardStep::Review, &draft));
        assert!(can_advance_index(4, &draft));
        assert!(can_advance_index(9, &draft));
        assert!(!can_advance_index(1, &draft));
    }

    #[test]
    fn test_first_incomplete_step() {
        let mut draft = step_one_draft();
        assert_eq!(first_incomplete_step(&draft), Some(WizardStep::PackageSelection));
        draft.set_field(DraftField::Package("essential".into()));
        assert_eq!(first_incomplete_step(&draft), Some(WizardStep::ContactInfo));
        draft.set_field(DraftField::ContactName("Sarah".into()));
        draft.set_field(DraftField::Email("s@example.com".into()));
        draft.set_field(DraftField::Phone("555".into()));
        assert_eq!(first_incomplete_step(&draft), None);
    }
}
