pub mod a001_package;
pub mod a002_add_on;
pub mod a003_booking;
pub mod a004_portfolio;
pub mod a005_admin;
pub mod common;
