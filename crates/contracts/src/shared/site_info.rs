use crate::enums::Currency;

/// Static business details rendered in the header, footer and booking page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SiteInfo {
    pub brand: &'static str,
    pub tagline: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub city: &'static str,
    /// Contact line under the booking form
    pub booking_email: &'static str,
    pub booking_phone: &'static str,
    pub currency: Currency,
    pub copyright_year: u16,
}

pub const SITE: SiteInfo = SiteInfo {
    brand: "SnapMoments",
    tagline: "South Indian Heritage Photography Specialists",
    email: "hello@snapmoments.in",
    phone: "+91 98765 43210",
    city: "Chennai, Tamil Nadu",
    booking_email: "hello@snapmoments.com",
    booking_phone: "(555) 123-4567",
    currency: Currency::Usd,
    copyright_year: 2024,
};
