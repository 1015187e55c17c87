//! Tolerant calendar-date parsing for hand-written dates such as `Feb 3, 2016`.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%Y.%m.%d",
    "%b %d, %Y",
    "%B %d, %Y",
    "%b %d %Y",
    "%B %d %Y",
    "%d %b %Y",
    "%d %B %Y",
    "%d %b, %Y",
    "%d %B, %Y",
    "%b. %d, %Y",
    "%m/%d/%Y",
    "%d.%m.%Y",
];

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%b %d, %Y %H:%M",
    "%B %d, %Y %H:%M",
];

const WEEKDAYS: &[&str] = &[
    "mon",
    "tue",
    "tues",
    "wed",
    "thu",
    "thur",
    "thurs",
    "fri",
    "sat",
    "sun",
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
    "sunday",
];

/// Parse a calendar date written in any of the common English layouts.
///
/// Accepts ISO dates, month-name dates in either order, US slash dates, an optional leading
/// weekday, ordinal day suffixes (`3rd`), and an optional trailing time of day (which is
/// discarded).
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let cleaned = strip_ordinals(strip_weekday(raw.trim()));
    let cleaned = cleaned.split_whitespace().collect::<Vec<_>>().join(" ");
    if cleaned.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(&cleaned) {
        return Some(dt.date_naive());
    }
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(&cleaned, format) {
            return Some(date);
        }
    }
    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(&cleaned, format) {
            return Some(dt.date());
        }
    }
    None
}

fn strip_weekday(raw: &str) -> &str {
    let Some((first, rest)) = raw.split_once(|c: char| c == ',' || c.is_whitespace()) else {
        return raw;
    };
    let word = first.trim_end_matches('.').to_ascii_lowercase();
    if WEEKDAYS.contains(&word.as_str()) {
        rest.trim_start_matches(|c: char| c == ',' || c.is_whitespace())
    } else {
        raw
    }
}

fn strip_ordinals(raw: &str) -> String {
    raw.split(' ')
        .map(|word| {
            let trimmed = word.trim_end_matches(',');
            let comma = &word[trimmed.len()..];
            for suffix in ["st", "nd", "rd", "th"] {
                if let Some(digits) = trimmed.strip_suffix(suffix) {
                    if !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()) {
                        return format!("{digits}{comma}");
                    }
                }
            }
            word.to_string()
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(y, m, d)
    }

    #[test]
    fn parses_the_layouts_found_in_lecture_files() {
        assert_eq!(parse_date("Feb 3, 2016"), ymd(2016, 2, 3));
        assert_eq!(parse_date("February 10, 2016"), ymd(2016, 2, 10));
        assert_eq!(parse_date("2016-02-03"), ymd(2016, 2, 3));
        assert_eq!(parse_date("3 Feb 2016"), ymd(2016, 2, 3));
        assert_eq!(parse_date("02/03/2016"), ymd(2016, 2, 3));
    }

    #[test]
    fn tolerates_weekdays_ordinals_and_times() {
        assert_eq!(parse_date("Wed, Feb 3, 2016"), ymd(2016, 2, 3));
        assert_eq!(parse_date("Feb 3rd, 2016"), ymd(2016, 2, 3));
        assert_eq!(parse_date("2016-02-03T10:30:00"), ymd(2016, 2, 3));
        assert_eq!(parse_date("2016-02-03T10:30:00+01:00"), ymd(2016, 2, 3));
        assert_eq!(parse_date("  feb  3,   2016 "), ymd(2016, 2, 3));
    }

    #[test]
    fn rejects_garbage_and_impossible_dates() {
        assert_eq!(parse_date("not-a-date"), None);
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("Feb 30, 2016"), None);
        assert_eq!(parse_date("2016-13-01"), None);
    }
}
