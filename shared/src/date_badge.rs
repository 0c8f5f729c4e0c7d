use chrono::{DateTime, Locale, NaiveDate, NaiveDateTime, TimeZone, Utc};

/// Text shown on every line of the badge when the input is not a date
pub const INVALID_DATE_LABEL: &str = "Invalid Date";

const BADGE_LOCALE: Locale = Locale::es_ES;

/// The three lines of a date badge: weekday, day of month, month and year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateBadge {
    pub day_name: String,
    pub day_number: String,
    pub month_year: String,
}

impl DateBadge {
    /// Format a date string for the badge.
    ///
    /// Accepts a calendar date (`2024-01-01`), an ISO date-time with `T` or a
    /// space, with or without seconds, fraction and offset (`Z`, `+HH`,
    /// `+HH:MM`), or a bare `YYYY-MM` / `YYYY`. A date-time keeps the date as
    /// written in its own offset. Anything else yields the invalid-date
    /// placeholder rather than an error.
    pub fn from_date_str(date: &str) -> Self {
        match parse_badge_date(date) {
            Some(date) => Self::from_date(date),
            None => Self::invalid(),
        }
    }

    pub fn from_date(date: NaiveDate) -> Self {
        let Some(midnight) = date.and_hms_opt(0, 0, 0) else {
            return Self::invalid();
        };
        let datetime: DateTime<Utc> = Utc.from_utc_datetime(&midnight);

        Self {
            day_name: datetime.format_localized("%A", BADGE_LOCALE).to_string(),
            day_number: datetime.format("%-d").to_string(),
            month_year: datetime.format_localized("%b %Y", BADGE_LOCALE).to_string(),
        }
    }

    pub fn invalid() -> Self {
        Self {
            day_name: INVALID_DATE_LABEL.to_string(),
            day_number: INVALID_DATE_LABEL.to_string(),
            month_year: INVALID_DATE_LABEL.to_string(),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.day_number != INVALID_DATE_LABEL
    }

    /// The badge lines in display order
    pub fn lines(&self) -> [&str; 3] {
        [self.day_name.as_str(), self.day_number.as_str(), self.month_year.as_str()]
    }
}

// Date-times with an offset; `%#z` also takes `Z` and a bare `+HH`
const OFFSET_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%#z",
    "%Y-%m-%d %H:%M:%S%.f%#z",
    "%Y-%m-%dT%H:%M%#z",
    "%Y-%m-%d %H:%M%#z",
];

const LOCAL_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

fn parse_badge_date(input: &str) -> Option<NaiveDate> {
    let input = input.trim();

    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(datetime) = DateTime::parse_from_rfc3339(input) {
        return Some(datetime.date_naive());
    }
    if let Some(datetime) = OFFSET_FORMATS
        .iter()
        .find_map(|format| DateTime::parse_from_str(input, format).ok())
    {
        return Some(datetime.date_naive());
    }
    if let Some(datetime) = LOCAL_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(input, format).ok())
    {
        return Some(datetime.date());
    }

    parse_partial_date(input)
}

/// `YYYY-MM` is the first of that month, `YYYY` the first of January
fn parse_partial_date(input: &str) -> Option<NaiveDate> {
    let all_digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());

    match input.split_once('-') {
        Some((year, month)) if year.len() == 4 && month.len() == 2 && all_digits(year) && all_digits(month) => {
            NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, 1)
        }
        None if input.len() == 4 && all_digits(input) => NaiveDate::from_ymd_opt(input.parse().ok()?, 1, 1),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calendar_date_in_spanish() {
        let badge = DateBadge::from_date_str("2024-01-01");
        assert_eq!(badge.day_name, "lunes");
        assert_eq!(badge.day_number, "1");
        assert_eq!(badge.month_year, "ene 2024");
        assert!(badge.is_valid());
    }

    #[test]
    fn test_day_number_has_no_padding() {
        let badge = DateBadge::from_date_str("2025-06-09");
        assert_eq!(badge.day_number, "9");
        assert!(badge.month_year.ends_with("2025"));
    }

    #[test]
    fn test_rfc3339_uses_own_offset() {
        // Late evening in UTC-5 is already the next day in UTC
        let badge = DateBadge::from_date_str("2024-03-15T22:30:00-05:00");
        assert_eq!(badge.day_number, "15");
        assert_eq!(badge.day_name, "viernes");
    }

    #[test]
    fn test_valid_dates_always_have_three_lines() {
        let samples = [
            "2024-02-29",
            "1999-12-31",
            "2030-07-04",
            "2024-10-13T00:00:00Z",
            "2024-01-01T10:00:00",
            "2024-01-01T10:00:00.000",
            "2024-01-01T10:00Z",
            "2024-01-01 10:00:00+00",
            "2024-01-01 10:00:00.123456+00:00",
            "2024-01",
            "2024",
        ];
        for sample in samples {
            let badge = DateBadge::from_date_str(sample);
            assert!(badge.is_valid(), "{sample} should parse");
            assert_eq!(badge.lines().len(), 3);
            assert!(badge.lines().iter().all(|line| !line.is_empty()));
        }
    }

    #[test]
    fn test_iso_variants_resolve_to_the_written_day() {
        for sample in [
            "2024-01-01T10:00:00",
            "2024-01-01T10:00:00.000",
            "2024-01-01T10:00Z",
            "2024-01-01 10:00:00+00",
            "2024-01-01 23:59",
        ] {
            let badge = DateBadge::from_date_str(sample);
            assert_eq!(badge.day_name, "lunes", "{sample}");
            assert_eq!(badge.day_number, "1", "{sample}");
            assert_eq!(badge.month_year, "ene 2024", "{sample}");
        }
    }

    #[test]
    fn test_partial_dates_start_at_first_day() {
        let month = DateBadge::from_date_str("2024-03");
        assert_eq!(month.day_number, "1");
        assert_eq!(month.day_name, "viernes");

        let year = DateBadge::from_date_str("2024");
        assert_eq!(year.lines(), DateBadge::from_date_str("2024-01-01").lines());
    }

    #[test]
    fn test_malformed_input_renders_placeholder() {
        for sample in ["", "not a date", "2024-13-01", "2023-02-29", "2024-13", "24-01", "20245"] {
            let badge = DateBadge::from_date_str(sample);
            assert!(!badge.is_valid());
            assert_eq!(badge.lines(), [INVALID_DATE_LABEL; 3]);
        }
    }
}
