use super::error::BookingError;
use serde::{Deserialize, Serialize};

/// Шаг мастера бронирования
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum WizardStep {
    #[default]
    EventDetails,
    PackageSelection,
    ContactInfo,
    Review,
}

impl WizardStep {
    pub const FIRST: WizardStep = WizardStep::EventDetails;
    pub const LAST: WizardStep = WizardStep::Review;

    /// 1-based index shown in the progress indicator
    pub fn index(&self) -> u8 {
        match self {
            WizardStep::EventDetails => 1,
            WizardStep::PackageSelection => 2,
            WizardStep::ContactInfo => 3,
            WizardStep::Review => 4,
        }
    }

    pub fn from_index(index: u8) -> Result<Self, BookingError> {
        match index {
            1 => Ok(WizardStep::EventDetails),
            2 => Ok(WizardStep::PackageSelection),
            3 => Ok(WizardStep::ContactInfo),
            4 => Ok(WizardStep::Review),
            other => Err(BookingError::UnknownStep(other)),
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            WizardStep::EventDetails => "Event Details",
            WizardStep::PackageSelection => "Package Selection",
            WizardStep::ContactInfo => "Contact Info",
            WizardStep::Review => "Review & Submit",
        }
    }

    /// Card heading: "Step 2: Package Selection"
    pub fn heading(&self) -> String {
        format!("Step {}: {}", self.index(), self.title())
    }

    pub fn description(&self) -> &'static str {
        match self {
            WizardStep::EventDetails => "Tell us about your event",
            WizardStep::PackageSelection => "Choose your photography package",
            WizardStep::ContactInfo => "Your contact information",
            WizardStep::Review => "Review your booking details",
        }
    }

    pub fn all() -> [WizardStep; 4] {
        [
            WizardStep::EventDetails,
            WizardStep::PackageSelection,
            WizardStep::ContactInfo,
            WizardStep::Review,
        ]
    }

    /// Следующий шаг; `None` на последнем
    pub fn next(&self) -> Option<WizardStep> {
        WizardStep::from_index(self.index() + 1).ok()
    }

    /// Предыдущий шаг; на первом шаге остаёмся на месте
    pub fn previous(&self) -> WizardStep {
        WizardStep::from_index(self.index().saturating_sub(1)).unwrap_or(WizardStep::FIRST)
    }

    pub fn is_last(&self) -> bool {
        *self == WizardStep::LAST
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_includes_step_number() {
        assert_eq!(WizardStep::EventDetails.heading(), "Step 1: Event Details");
        assert_eq!(WizardStep::Review.heading(), "Step 4: Review & Submit");
    }

    #[test]
    fn test_index_round_trip() {
        for step in WizardStep::all() {
            assert_eq!(WizardStep::from_index(step.index()), Ok(step));
        }
        assert_eq!(WizardStep::from_index(0), Err(BookingError::UnknownStep(0)));
        assert_eq!(WizardStep::from_index(5), Err(BookingError::UnknownStep(5)));
    }

    #[test]
    fn test_next_and_previous_saturate() {
        assert_eq!(WizardStep::EventDetails.previous(), WizardStep::EventDetails);
        assert_eq!(WizardStep::ContactInfo.previous(), WizardStep::PackageSelection);
        assert_eq!(WizardStep::ContactInfo.next(), Some(WizardStep::Review));
        assert_eq!(WizardStep::Review.next(), None);
    }

    #[test]
    fn test_titles() {
        assert_eq!(WizardStep::Review.title(), "Review & Submit");
        assert_eq!(WizardStep::PackageSelection.description(), "Choose your photography package");
    }
}
