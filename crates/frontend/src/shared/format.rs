/// Date formatting for display
use chrono::NaiveDate;

/// "2024-05-15" -> "May 15, 2024"; unparsable input is returned unchanged
pub fn format_long_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    match NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        Ok(date) => date.format("%B %-d, %Y").to_string(),
        Err(_) => date_str.to_string(),
    }
}

/// Value for the `min` attribute of a date input
pub fn iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Today's local date as `YYYY-MM-DD` (hint only, never validated)
pub fn today_iso() -> String {
    iso_date(chrono::Local::now().date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_long_date() {
        assert_eq!(format_long_date("2024-05-15"), "May 15, 2024");
        assert_eq!(format_long_date("2024-01-05T10:00:00Z"), "January 5, 2024");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_long_date("invalid"), "invalid");
        assert_eq!(format_long_date(""), "");
    }

    #[test]
    fn test_iso_date() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 5).unwrap();
        assert_eq!(iso_date(date), "2024-06-05");
    }
}
