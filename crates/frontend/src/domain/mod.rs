pub mod a001_package;
pub mod a003_booking;
pub mod a004_portfolio;
pub mod a005_admin;
