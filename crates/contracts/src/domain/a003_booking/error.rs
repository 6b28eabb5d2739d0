use super::step::WizardStep;
use thiserror::Error;

/// Ошибки домена бронирования
///
/// Ни одна из них не показывается пользователю как сбой: интерфейс
/// превращает их в навигацию по шагам мастера.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookingError {
    #[error("step index {0} is outside 1..=4")]
    UnknownStep(u8),

    #[error("unknown booking field '{0}'")]
    UnknownField(String),

    #[error("booking can only be submitted from the review step (current: {0:?})")]
    NotOnReviewStep(WizardStep),

    #[error("step {} ({}) is incomplete", .0.index(), .0.title())]
    IncompleteStep(WizardStep),
}
