//! Relative date resolution
//!
//! Maps phrases such as "Today", "Day 7 (Week 1)" or "In 3 days" onto a
//! calendar day, counted from a reference date.

use chrono::{Days, NaiveDate, NaiveDateTime, NaiveTime};
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

static DAY_N: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"day\s+(\d+)").expect("day pattern is valid"));

static IN_N_DAYS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"in\s+(\d+)\s+days").expect("in-days pattern is valid"));

/// Resolve a relative date phrase against `reference`.
///
/// Rules are tried in order and the first match wins:
/// 1. "today" -> the reference date
/// 2. "tomorrow" -> one day later
/// 3. "day N" -> N - 1 days later, so "Day 1" is the reference date
/// 4. "in N days" -> N days later
///
/// Anything else, including offsets past the end of the calendar, resolves
/// to the reference date.
pub fn resolve(text: &str, reference: NaiveDate) -> NaiveDate {
    let text = text.to_lowercase();

    if text.contains("today") {
        return reference;
    }

    if text.contains("tomorrow") {
        if let Some(date) = reference.checked_add_days(Days::new(1)) {
            return date;
        }
    }

    if let Some(n) = capture_number(&DAY_N, &text).filter(|n| *n > 0) {
        if let Some(date) = reference.checked_add_days(Days::new(n - 1)) {
            return date;
        }
    }

    if let Some(n) = capture_number(&IN_N_DAYS, &text) {
        if let Some(date) = reference.checked_add_days(Days::new(n)) {
            return date;
        }
    }

    debug!("Unresolved relative date {:?}, using reference date", text);
    reference
}

/// Midnight at the start of `date`
pub fn midnight(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

fn capture_number(re: &Regex, text: &str) -> Option<u64> {
    re.captures(text)?.get(1)?.as_str().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 4, 10).unwrap()
    }

    fn plus(days: u64) -> NaiveDate {
        d().checked_add_days(Days::new(days)).unwrap()
    }

    #[test]
    fn test_today() {
        assert_eq!(resolve("Today", d()), d());
        assert_eq!(resolve("TODAY (start)", d()), d());
    }

    #[test]
    fn test_tomorrow() {
        assert_eq!(resolve("Tomorrow", d()), plus(1));
    }

    #[test]
    fn test_day_n() {
        assert_eq!(resolve("Day 1", d()), d());
        assert_eq!(resolve("Day 7 (Week 1)", d()), plus(6));
        assert_eq!(resolve("day 14 (week 2)", d()), plus(13));
    }

    #[test]
    fn test_in_n_days() {
        assert_eq!(resolve("In 3 days", d()), plus(3));
        assert_eq!(resolve("in 10 days", d()), plus(10));
    }

    #[test]
    fn test_fallback() {
        assert_eq!(resolve("gibberish", d()), d());
        assert_eq!(resolve("Continuous", d()), d());
        assert_eq!(resolve("", d()), d());
    }

    #[test]
    fn test_today_takes_priority_over_day_n() {
        assert_eq!(resolve("Today (Day 7)", d()), d());
    }

    #[test]
    fn test_day_zero_is_not_a_day_offset() {
        assert_eq!(resolve("Day 0", d()), d());
    }

    #[test]
    fn test_huge_offsets_fall_back() {
        assert_eq!(resolve("Day 99999999999999999999999", d()), d());
        assert_eq!(resolve("Day 18446744073709551615", d()), d());
        assert_eq!(resolve("In 18446744073709551615 days", d()), d());
    }

    #[test]
    fn test_phrases_embedded_in_longer_words() {
        assert_eq!(resolve("Within 3 days", d()), plus(3));
        assert_eq!(resolve("Sunday 14 (Week 2)", d()), plus(13));
    }

    #[test]
    fn test_midnight() {
        assert_eq!(midnight(d()), d().and_hms_opt(0, 0, 0).unwrap());
    }
}
