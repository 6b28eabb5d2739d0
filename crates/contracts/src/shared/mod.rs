pub mod notification;
pub mod site_info;
