//! Week range and date parsing.
//!
//! All instants are local wall-clock `NaiveDateTime`s; the feed carries no zone.

use chrono::{DateTime, Datelike, Days, NaiveDate, NaiveDateTime, NaiveTime};

/// Date layouts accepted in the `Date` column.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%m/%d/%Y",
    "%Y/%m/%d",
    "%B %d, %Y",
    "%b %d, %Y",
    "%B %d %Y",
];

/// Time-of-day layouts accepted in the `Time` column.
const TIME_FORMATS: &[&str] = &[
    "%H:%M",
    "%H:%M:%S",
    "%I:%M%p",
    "%I:%M %p",
    "%I:%M:%S %p",
];

/// Inclusive Sunday-through-Saturday window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekRange {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl WeekRange {
    /// Week containing `now`: Sunday 00:00 to Saturday 23:59:59.999999999.
    /// Both ends are derived from the same snapshot.
    pub fn containing(now: NaiveDateTime) -> Self {
        let today = now.date();
        let since_sunday = u64::from(today.weekday().num_days_from_sunday());
        let sunday = today - Days::new(since_sunday);
        let saturday = sunday + Days::new(6);
        Self {
            start: sunday.and_time(NaiveTime::MIN),
            end: saturday.and_time(end_of_day()),
        }
    }

    pub fn contains(&self, instant: NaiveDateTime) -> bool {
        self.start <= instant && instant <= self.end
    }
}

fn end_of_day() -> NaiveTime {
    NaiveTime::from_hms_nano_opt(23, 59, 59, 999_999_999).unwrap_or(NaiveTime::MIN)
}

/// Whether a feed date falls inside `week`. Unparseable text is never in range.
pub fn is_date_in_week(date: &str, week: &WeekRange) -> bool {
    parse_instant(date).is_some_and(|d| week.contains(d))
}

/// Parses a date, or a date followed by a time of day, into a local instant.
/// Date-only text resolves to midnight. Returns `None` for anything else.
pub fn parse_instant(text: &str) -> Option<NaiveDateTime> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.naive_local());
    }
    for iso in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(text, iso) {
            return Some(dt);
        }
    }
    for date_fmt in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(text, date_fmt) {
            return Some(d.and_time(NaiveTime::MIN));
        }
        for time_fmt in TIME_FORMATS {
            let layout = format!("{date_fmt} {time_fmt}");
            if let Ok(dt) = NaiveDateTime::parse_from_str(text, &layout) {
                return Some(dt);
            }
        }
    }
    parse_hour_only(text)
}

/// `<date> 7PM` / `<date> 11 am`: chrono needs a minute field, so the hour
/// is split off by hand.
fn parse_hour_only(text: &str) -> Option<NaiveDateTime> {
    let lower = text.to_ascii_lowercase();
    let pm = if lower.ends_with("pm") {
        true
    } else if lower.ends_with("am") {
        false
    } else {
        return None;
    };
    let rest = text[..text.len() - 2].trim_end();
    let (date_part, hour) = rest.rsplit_once(' ')?;
    let hour: u32 = hour.parse().ok().filter(|h| (1..=12).contains(h))?;
    let time = NaiveTime::from_hms_opt(hour % 12 + if pm { 12 } else { 0 }, 0, 0)?;
    let date_part = date_part.trim_end();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(date_part, fmt).ok())
        .map(|d| d.and_time(time))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn test_week_containing_monday() {
        let week = WeekRange::containing(at(2024, 6, 10, 14, 30));
        assert_eq!(week.start, at(2024, 6, 9, 0, 0));
        assert_eq!(week.end.date(), NaiveDate::from_ymd_opt(2024, 6, 15).unwrap());
        assert!(week.contains(at(2024, 6, 15, 23, 59)));
    }

    #[test]
    fn test_week_on_sunday_and_saturday() {
        let sunday = WeekRange::containing(at(2024, 6, 9, 0, 0));
        assert_eq!(sunday.start, at(2024, 6, 9, 0, 0));
        let saturday = WeekRange::containing(at(2024, 6, 15, 23, 0));
        assert_eq!(saturday, sunday);
    }

    #[test]
    fn test_week_across_month_boundary() {
        let week = WeekRange::containing(at(2024, 3, 1, 9, 0));
        assert_eq!(week.start, at(2024, 2, 25, 0, 0));
        assert_eq!(week.end.date(), NaiveDate::from_ymd_opt(2024, 3, 2).unwrap());
    }

    #[test]
    fn test_is_date_in_week() {
        let week = WeekRange::containing(at(2024, 6, 10, 8, 0));
        assert!(is_date_in_week("2024-06-09", &week));
        assert!(is_date_in_week("06/15/2024", &week));
        assert!(is_date_in_week("June 12, 2024", &week));
        assert!(!is_date_in_week("2024-06-16", &week));
        assert!(!is_date_in_week("2024-05-01", &week));
        assert!(!is_date_in_week("06/08/2024", &week));
    }

    #[test]
    fn test_malformed_dates_never_in_range() {
        let week = WeekRange::containing(at(2024, 6, 10, 8, 0));
        for bad in ["", "   ", "not a date", "2024-13-40", "TRUE", "120"] {
            assert!(!is_date_in_week(bad, &week), "{bad:?} should be out of range");
        }
    }

    #[test]
    fn test_parse_showtime_forms() {
        assert_eq!(parse_instant("2024-06-10 19:00"), Some(at(2024, 6, 10, 19, 0)));
        assert_eq!(parse_instant("06/10/2024 7:00PM"), Some(at(2024, 6, 10, 19, 0)));
        assert_eq!(parse_instant("06/10/2024 7:15 pm"), Some(at(2024, 6, 10, 19, 15)));
        assert_eq!(parse_instant("2024-06-10T09:05"), Some(at(2024, 6, 10, 9, 5)));
        assert_eq!(parse_instant("2024-06-10 25:00"), None);
        assert_eq!(parse_instant("2024-06-10 "), Some(at(2024, 6, 10, 0, 0)));
    }

    #[test]
    fn test_parse_hour_only_times() {
        assert_eq!(parse_instant("06/10/2024 7PM"), Some(at(2024, 6, 10, 19, 0)));
        assert_eq!(parse_instant("06/10/2024 7pm"), Some(at(2024, 6, 10, 19, 0)));
        assert_eq!(parse_instant("June 12, 2024 11 AM"), Some(at(2024, 6, 12, 11, 0)));
        assert_eq!(parse_instant("2024-06-10 12am"), Some(at(2024, 6, 10, 0, 0)));
        assert_eq!(parse_instant("2024-06-10 12pm"), Some(at(2024, 6, 10, 12, 0)));
        assert_eq!(parse_instant("2024-06-10 13pm"), None);
        assert_eq!(parse_instant("7pm"), None);
    }
}
