//! Shared domain types for the SnapMoments site.
//!
//! Everything here is target-independent: the frontend (wasm) renders these
//! types and the backend names the site in its startup log.

pub mod domain;
pub mod enums;
pub mod shared;
