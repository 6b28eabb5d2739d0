pub mod currency;
pub mod event_type;

pub use currency::Currency;
pub use event_type::EventType;
