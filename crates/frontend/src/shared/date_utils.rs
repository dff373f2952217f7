use chrono::{DateTime, Utc};

/// Formats a timestamp for table cells, `-` when absent.
pub fn format_date(value: Option<DateTime<Utc>>) -> String {
    match value {
        Some(dt) => dt.format("%d.%m.%Y").to_string(),
        None => "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn formats_known_date() {
        let dt = Utc.with_ymd_and_hms(2024, 6, 3, 12, 30, 0).unwrap();
        assert_eq!(format_date(Some(dt)), "03.06.2024");
    }

    #[test]
    fn missing_date_renders_dash() {
        assert_eq!(format_date(None), "-");
    }
}
