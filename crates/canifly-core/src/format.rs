//! Display formatting for dates, durations and skill points.
//!
//! These run once per field per render, so they stay allocation-light and
//! never fail: bad input produces a placeholder, not an error.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};

/// Placeholder produced for timestamps that cannot be parsed
pub const INVALID_DATE: &str = "Invalid Date";

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Parse the timestamp shapes the backend emits.
///
/// RFC 3339 with an offset is taken as-is. Naive date-times and bare dates
/// are read as UTC.
pub fn parse_timestamp(input: &str) -> Option<DateTime<Utc>> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|naive| naive.and_utc());
    }
    None
}

/// Render a timestamp as `Mon D, HH:MM` in local time, omitting the year.
///
/// Returns [`INVALID_DATE`] for unparsable input.
pub fn format_date(iso: &str) -> String {
    format_date_in(iso, &chrono::Local)
}

/// [`format_date`] for an explicit time zone.
pub fn format_date_in<Tz>(iso: &str, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    match parse_timestamp(iso) {
        Some(dt) => dt.with_timezone(tz).format("%b %-d, %H:%M").to_string(),
        None => INVALID_DATE.to_string(),
    }
}

/// Whole days from now until `date`, rounded up.
///
/// Past dates give zero or a negative number. `None` when unparsable.
pub fn calculate_days_from_today(date: &str) -> Option<i64> {
    parse_timestamp(date).map(|target| days_between(target, Utc::now()))
}

/// Days from `now` until `target`, rounding any partial day up.
pub fn days_between(target: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    let diff = (target - now).num_milliseconds();
    -(-diff).div_euclid(MILLIS_PER_DAY)
}

/// Human-readable remaining time for a pending plan.
pub fn format_days_remaining(days: i64) -> String {
    match days {
        d if d <= 0 => "Completed".to_string(),
        1 => "1 day".to_string(),
        d => format!("{d} days"),
    }
}

/// Skill points with thousands separators, e.g. `5,000,000`.
pub fn format_skill_points(sp: u64) -> String {
    let digits = sp.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, FixedOffset};

    #[test]
    fn test_format_date_utc() {
        assert_eq!(format_date_in("2026-01-05T14:03:00Z", &Utc), "Jan 5, 14:03");
        assert_eq!(format_date_in("2026-12-25T00:00:00Z", &Utc), "Dec 25, 00:00");
    }

    #[test]
    fn test_format_date_applies_zone() {
        let plus_two = FixedOffset::east_opt(2 * 3600).unwrap();
        assert_eq!(format_date_in("2026-03-31T23:30:00Z", &plus_two), "Apr 1, 01:30");
    }

    #[test]
    fn test_format_date_naive_forms() {
        assert_eq!(format_date_in("2026-07-04T09:15:30.250", &Utc), "Jul 4, 09:15");
        assert_eq!(format_date_in("2026-07-04", &Utc), "Jul 4, 00:00");
    }

    #[test]
    fn test_format_date_invalid() {
        assert_eq!(format_date_in("not a date", &Utc), INVALID_DATE);
        assert_eq!(format_date_in("", &Utc), INVALID_DATE);
        assert_eq!(format_date("2026-13-45"), INVALID_DATE);
    }

    #[test]
    fn test_days_between_rounds_up() {
        let now = Utc.with_ymd_and_hms(2026, 10, 18, 12, 0, 0).unwrap();
        assert_eq!(days_between(now + Duration::days(3), now), 3);
        assert_eq!(days_between(now + Duration::hours(1), now), 1);
        assert_eq!(days_between(now + Duration::hours(25), now), 2);
        assert_eq!(days_between(now, now), 0);
        assert_eq!(days_between(now - Duration::hours(1), now), 0);
        assert_eq!(days_between(now - Duration::hours(25), now), -1);
    }

    #[test]
    fn test_calculate_days_from_today() {
        let future = (Utc::now() + Duration::days(10)).to_rfc3339();
        assert_eq!(calculate_days_from_today(&future), Some(10));

        let past = (Utc::now() - Duration::days(10)).to_rfc3339();
        assert!(calculate_days_from_today(&past).unwrap() <= 0);

        assert_eq!(calculate_days_from_today("garbage"), None);
    }

    #[test]
    fn test_format_days_remaining() {
        assert_eq!(format_days_remaining(-4), "Completed");
        assert_eq!(format_days_remaining(0), "Completed");
        assert_eq!(format_days_remaining(1), "1 day");
        assert_eq!(format_days_remaining(12), "12 days");
    }

    #[test]
    fn test_format_skill_points() {
        assert_eq!(format_skill_points(0), "0");
        assert_eq!(format_skill_points(999), "999");
        assert_eq!(format_skill_points(1000), "1,000");
        assert_eq!(format_skill_points(5_000_000), "5,000,000");
        assert_eq!(format_skill_points(123_456_789), "123,456,789");
    }
}
