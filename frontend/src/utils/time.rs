use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

const LONG_DATE: &str = "%B %-d, %Y";

/// `November 13, 2025`
pub fn format_long_date(date: NaiveDate) -> String {
    date.format(LONG_DATE).to_string()
}

pub fn format_instant(instant: &DateTime<Utc>) -> String {
    format_long_date(instant.date_naive())
}

pub fn format_timestamp(timestamp: Option<&NaiveDateTime>) -> String {
    timestamp
        .map(|ts| format_long_date(ts.date()))
        .unwrap_or_else(|| "-".into())
}

/// Parses the value of an `<input type="date">`.
pub fn parse_input_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

pub fn to_input_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_date_has_no_zero_padding() {
        let date = NaiveDate::from_ymd_opt(2025, 11, 7).unwrap();
        assert_eq!(format_long_date(date), "November 7, 2025");
    }

    #[test]
    fn instant_uses_utc_calendar_day() {
        let instant: DateTime<Utc> = "2025-11-13T00:00:00.000+00:00".parse().unwrap();
        assert_eq!(format_instant(&instant), "November 13, 2025");
    }

    #[test]
    fn missing_timestamp_renders_dash() {
        assert_eq!(format_timestamp(None), "-");
        let ts: NaiveDateTime = "2025-11-09T15:46:58".parse().unwrap();
        assert_eq!(format_timestamp(Some(&ts)), "November 9, 2025");
    }

    #[test]
    fn input_date_round_trips() {
        let parsed = parse_input_date("2025-11-16").unwrap();
        assert_eq!(to_input_date(parsed), "2025-11-16");
        assert!(parse_input_date("").is_none());
        assert!(parse_input_date("16/11/2025").is_none());
    }
}
