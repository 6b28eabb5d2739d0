//! Common types and traits for catalog data

pub mod catalog_entry;

// Re-exports
pub use catalog_entry::{find_entry, price_of, CatalogEntry, Price};
