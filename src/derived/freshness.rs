//! "Last checked" parsing and freshness labelling.
//!
//! Date fields come from hand-edited spreadsheets, so parsing is tolerant:
//! a handful of common formats are tried in order and anything else yields
//! `None`. Deltas are whole days between date-truncated values; a future
//! date produces a raw negative delta (no clamping).

use chrono::{NaiveDate, NaiveDateTime};

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%d %b %Y",
    "%b %d, %Y",
    "%B %d, %Y",
];

const DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];

/// Tolerant date parse; `None` for anything unrecognized.
pub fn parse_last_checked(text: &str) -> Option<NaiveDate> {
    let t = text.trim();
    if t.is_empty() {
        return None;
    }
    for fmt in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(t, fmt) {
            return Some(d);
        }
    }
    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(t, fmt) {
            return Some(dt.date());
        }
    }
    None
}

/// Parsed date and whole-day delta against `today`. Both `None` when the
/// text does not parse.
pub fn days_since(text: &str, today: NaiveDate) -> (Option<NaiveDate>, Option<i64>) {
    match parse_last_checked(text) {
        Some(d) => (Some(d), Some((today - d).num_days())),
        None => (None, None),
    }
}

/// Human label for a day delta: `Nd ago` up to a month, `Nmo ago` up to
/// half a year, `Ny ago` beyond, em dash for unknown.
pub fn freshness_label(days: Option<i64>) -> String {
    match days {
        None => "—".to_string(),
        Some(d) if d <= 30 => format!("{d}d ago"),
        Some(d) if d <= 180 => format!("{}mo ago", d / 30),
        Some(d) => format!("{}y ago", d / 365),
    }
}
