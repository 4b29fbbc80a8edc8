//! Lenient date parsing. Anything unrecognized becomes `None`.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

const DATETIME_FORMATS: [&str; 6] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
];

const DATE_FORMATS: [&str; 4] = ["%Y-%m-%d", "%Y/%m/%d", "%Y.%m.%d", "%Y%m%d"];

/// Parse a date or date-time cell. Timezone-aware values are converted to
/// UTC; plain dates map to midnight.
pub fn parse_date(raw: &str) -> Option<NaiveDateTime> {
    let value = raw.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_utc());
    }

    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, format) {
            return Some(dt);
        }
    }

    // Trailing dots show up in Korean-style dates ("2024.03.01.").
    let date_part = value.trim_end_matches('.');
    for format in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(date_part, format) {
            return d.and_hms_opt(0, 0, 0);
        }
    }

    None
}
