//! Booking wizard domain
//!
//! - draft.rs: BookingDraft and per-field updates
//! - step.rs: the four wizard steps
//! - validation.rs: forward-navigation gate per step
//! - pricing.rs: total and itemised summary
//! - wizard.rs: step sequencer owning the draft

pub mod draft;
pub mod error;
pub mod pricing;
pub mod step;
pub mod validation;
pub mod wizard;

pub use draft::{BookingDraft, DraftField};
pub use error::BookingError;
pub use pricing::{summarize, total, PriceLine, PriceSummary};
pub use step::WizardStep;
pub use validation::{can_advance, can_advance_index, first_incomplete_step};
pub use wizard::BookingWizard;
