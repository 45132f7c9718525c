use chrono::{DateTime, NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::domain::entities::cell::CellDate;

static DAY_FIRST: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*(\d{1,2})[/-](\d{1,2})[/-](\d{2,4})(?:\s+.*)?$").expect("valid regex")
});

static YEAR_FIRST: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*(\d{4})[/-](\d{1,2})[/-](\d{1,2})(?:[T\s].*)?$").expect("valid regex")
});

const FREE_FORM_DATETIMES: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %I:%M:%S %p",
    "%m/%d/%Y %I:%M %p",
];

const FREE_FORM_DATES: &[&str] = &[
    "%m/%d/%Y",
    "%Y.%m.%d",
    "%d.%m.%Y",
    "%B %d, %Y",
    "%b %d, %Y",
    "%B %d %Y",
    "%b %d %Y",
    "%d %B %Y",
    "%d %b %Y",
    "%a, %d %b %Y",
    "%A, %B %d, %Y",
];

fn capture_u32(caps: &Captures<'_>, idx: usize) -> Option<u32> {
    caps.get(idx)?.as_str().parse().ok()
}

/// `D/M/Y` or `D-M-Y`. Two-digit years land in the 2000s; anything after the
/// first whitespace is ignored.
pub fn parse_day_first(text: &str) -> Option<CellDate> {
    let caps = DAY_FIRST.captures(text)?;
    let day = capture_u32(&caps, 1)?;
    let month = capture_u32(&caps, 2)?;
    let year_text = caps.get(3)?.as_str();
    let mut year: i32 = year_text.parse().ok()?;
    if year_text.len() == 2 {
        year += 2000;
    }
    NaiveDate::from_ymd_opt(year, month, day).map(CellDate::from_date)
}

/// `Y/M/D` or `Y-M-D` with a four-digit year.
pub fn parse_year_first(text: &str) -> Option<CellDate> {
    let caps = YEAR_FIRST.captures(text)?;
    let year: i32 = caps.get(1)?.as_str().parse().ok()?;
    let month = capture_u32(&caps, 2)?;
    let day = capture_u32(&caps, 3)?;
    NaiveDate::from_ymd_opt(year, month, day).map(CellDate::from_date)
}

/// Last resort: RFC 3339, RFC 2822 and a handful of common layouts.
pub fn parse_free_form(text: &str) -> Option<CellDate> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    let zoned = DateTime::parse_from_rfc3339(text).or_else(|_| DateTime::parse_from_rfc2822(text));
    if let Ok(value) = zoned {
        let local = value.naive_local();
        return Some(CellDate::from_date(local.date()).with_time(local.time()));
    }

    if let Some(value) = FREE_FORM_DATETIMES
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
    {
        return Some(CellDate::from_date(value.date()).with_time(value.time()));
    }

    FREE_FORM_DATES
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(text, fmt).ok())
        .map(CellDate::from_date)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveTime;

    use super::*;

    fn ymd(parsed: Option<CellDate>) -> Option<(i32, u32, u32)> {
        parsed.map(|d| d.ymd())
    }

    #[test]
    fn day_first_accepts_slashes_dashes_and_trailing_time() {
        assert_eq!(ymd(parse_day_first("25/12/2023")), Some((2023, 12, 25)));
        assert_eq!(ymd(parse_day_first("1-2-2024")), Some((2024, 2, 1)));
        assert_eq!(
            ymd(parse_day_first("25/12/2023 08:15:00")),
            Some((2023, 12, 25))
        );
        assert_eq!(
            parse_day_first("25/12/2023 08:15:00").and_then(|d| d.time),
            None
        );
    }

    #[test]
    fn day_first_two_digit_year_is_in_the_2000s() {
        assert_eq!(ymd(parse_day_first("5/1/99")), Some((2099, 1, 5)));
        assert_eq!(ymd(parse_day_first("05/01/07")), Some((2007, 1, 5)));
    }

    #[test]
    fn day_first_rejects_impossible_dates_and_other_layouts() {
        assert_eq!(parse_day_first("31/02/2023"), None);
        assert_eq!(parse_day_first("12/25/2023"), None);
        assert_eq!(parse_day_first("2023-12-25"), None);
        assert_eq!(parse_day_first("25/12/20231"), None);
    }

    #[test]
    fn year_first_parses_iso_like_dates() {
        assert_eq!(ymd(parse_year_first("2023-12-25")), Some((2023, 12, 25)));
        assert_eq!(ymd(parse_year_first("2023/1/5")), Some((2023, 1, 5)));
        assert_eq!(
            ymd(parse_year_first("2023-12-25T10:00:00")),
            Some((2023, 12, 25))
        );
        assert_eq!(parse_year_first("23-12-25x"), None);
    }

    #[test]
    fn free_form_handles_named_months_and_us_order() {
        assert_eq!(
            ymd(parse_free_form("December 25, 2023")),
            Some((2023, 12, 25))
        );
        assert_eq!(ymd(parse_free_form("25 Dec 2023")), Some((2023, 12, 25)));
        assert_eq!(ymd(parse_free_form("12/25/2023")), Some((2023, 12, 25)));
        assert_eq!(ymd(parse_free_form("2023.12.25")), Some((2023, 12, 25)));
    }

    #[test]
    fn free_form_keeps_time_when_given() {
        let parsed = parse_free_form("2023-12-25T10:30:00+07:00").expect("rfc3339 should parse");
        assert_eq!(parsed.ymd(), (2023, 12, 25));
        assert_eq!(parsed.time, NaiveTime::from_hms_opt(10, 30, 0));
    }

    #[test]
    fn free_form_gives_up_on_noise() {
        assert_eq!(parse_free_form("not a date"), None);
        assert_eq!(parse_free_form("   "), None);
        assert_eq!(parse_free_form("INV-0042"), None);
    }
}
