//! Calendar arithmetic for period navigation.
//!
//! This module is the one place that knows how calendar units work: where a
//! day/week/month/year starts and ends, and what "one unit forward or back"
//! means. Everything else treats dates as opaque values, so the choice of
//! chrono stays an implementation detail of this module.
//!
//! Conventions pinned down here:
//!
//! - Weeks start on Monday and end on Sunday, always. The week boundary is
//!   not locale-dependent.
//! - The last instant of a unit has millisecond resolution: 23:59:59.999.
//! - Month and year steps clamp at month ends (chrono's `checked_add_months`
//!   policy): stepping from Jan 31 forward by one month lands on Feb 29 in a
//!   leap year and Feb 28 otherwise. This makes next-then-previous at a
//!   clamped month end non-invertible (Mar 31 -> Feb 29 -> Mar 29), which is
//!   accepted boundary behavior, not a bug.

use chrono::{Datelike, Duration, Months, NaiveDate, NaiveDateTime, NaiveTime};
use shared::{PeriodWindow, TimeRange};

/// Calendar arithmetic produced a date outside the representable range.
///
/// With validated inputs this cannot happen in normal operation; treat it as
/// a fatal precondition violation rather than something to recover from.
#[derive(Debug, thiserror::Error)]
pub enum DateRangeError {
    #[error("date arithmetic left the representable range: {0}")]
    InvalidDate(String),
}

/// First instant of the unit containing `d`.
pub fn start_of(range: TimeRange, d: NaiveDateTime) -> NaiveDateTime {
    let date = d.date();
    match range {
        TimeRange::Day => day_start(date),
        TimeRange::Week => day_start(monday_of_week(date)),
        TimeRange::Month => day_start(first_day_of_month(date)),
        TimeRange::Year => day_start(jan_first(date.year())),
    }
}

/// Last instant (23:59:59.999) of the unit containing `d`.
pub fn end_of(range: TimeRange, d: NaiveDateTime) -> NaiveDateTime {
    let date = d.date();
    match range {
        TimeRange::Day => day_end(date),
        TimeRange::Week => day_end(monday_of_week(date) + Duration::days(6)),
        TimeRange::Month => day_end(last_day_of_month(date)),
        TimeRange::Year => day_end(dec_last(date.year())),
    }
}

/// The inclusive window of the unit containing `d`.
///
/// Invariant: `start <= end`, and both bound the same calendar unit.
pub fn window(range: TimeRange, d: NaiveDateTime) -> PeriodWindow {
    PeriodWindow {
        start: start_of(range, d),
        end: end_of(range, d),
    }
}

/// Step `d` forward by exactly one unit of `range`.
pub fn add_unit(range: TimeRange, d: NaiveDateTime) -> Result<NaiveDateTime, DateRangeError> {
    let stepped = match range {
        TimeRange::Day => d.checked_add_signed(Duration::days(1)),
        TimeRange::Week => d.checked_add_signed(Duration::days(7)),
        TimeRange::Month => d.checked_add_months(Months::new(1)),
        TimeRange::Year => d.checked_add_months(Months::new(12)),
    };
    stepped.ok_or_else(|| DateRangeError::InvalidDate(format!("{} + 1 {}", d, range.as_str())))
}

/// Step `d` back by exactly one unit of `range`.
pub fn sub_unit(range: TimeRange, d: NaiveDateTime) -> Result<NaiveDateTime, DateRangeError> {
    let stepped = match range {
        TimeRange::Day => d.checked_sub_signed(Duration::days(1)),
        TimeRange::Week => d.checked_sub_signed(Duration::days(7)),
        TimeRange::Month => d.checked_sub_months(Months::new(1)),
        TimeRange::Year => d.checked_sub_months(Months::new(12)),
    };
    stepped.ok_or_else(|| DateRangeError::InvalidDate(format!("{} - 1 {}", d, range.as_str())))
}

/// Format the calendar date of `d` as a zero-padded `YYYY-MM-DD` query key.
///
/// Time of day and timezone are deliberately discarded; the API filters on
/// calendar dates only.
pub fn query_key(d: NaiveDateTime) -> String {
    format!("{:04}-{:02}-{:02}", d.year(), d.month(), d.day())
}

/// Number of days in a given month and year.
pub fn days_in_month(month: u32, year: i32) -> u32 {
    match month {
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// Gregorian leap-year rule.
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Full month name ("January" .. "December").
pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "Invalid Month",
    }
}

/// Abbreviated month name ("Jan" .. "Dec").
pub fn month_abbrev(month: u32) -> &'static str {
    match month {
        1 => "Jan",
        2 => "Feb",
        3 => "Mar",
        4 => "Apr",
        5 => "May",
        6 => "Jun",
        7 => "Jul",
        8 => "Aug",
        9 => "Sep",
        10 => "Oct",
        11 => "Nov",
        12 => "Dec",
        _ => "???",
    }
}

fn day_start(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

fn day_end(date: NaiveDate) -> NaiveDateTime {
    // Last representable instant at millisecond resolution.
    date.and_time(NaiveTime::from_hms_milli_opt(23, 59, 59, 999).unwrap())
}

fn monday_of_week(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}

fn first_day_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap()
}

fn last_day_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(days_in_month(date.month(), date.year())).unwrap()
}

fn jan_first(year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, 1, 1).unwrap()
}

fn dec_last(year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, 12, 31).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dt(year: i32, month: u32, day: u32, hour: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .and_hms_opt(hour, min, 0)
            .unwrap()
    }

    fn date_of(d: NaiveDateTime) -> (i32, u32, u32) {
        (d.year(), d.month(), d.day())
    }

    #[test]
    fn test_day_window() {
        let w = window(TimeRange::Day, dt(2025, 6, 1, 10, 0));
        assert_eq!(w.start, dt(2025, 6, 1, 0, 0));
        assert_eq!(
            w.end,
            NaiveDate::from_ymd_opt(2025, 6, 1)
                .unwrap()
                .and_hms_milli_opt(23, 59, 59, 999)
                .unwrap()
        );
    }

    #[test]
    fn test_week_window_starts_monday_ends_sunday() {
        // 2024-03-15 is a Friday; its week is Mon 2024-03-11 .. Sun 2024-03-17.
        let w = window(TimeRange::Week, dt(2024, 3, 15, 12, 30));
        assert_eq!(date_of(w.start), (2024, 3, 11));
        assert_eq!(date_of(w.end), (2024, 3, 17));

        // A Monday is its own week start, a Sunday its own week end.
        let monday = window(TimeRange::Week, dt(2024, 3, 11, 0, 0));
        assert_eq!(date_of(monday.start), (2024, 3, 11));
        let sunday = window(TimeRange::Week, dt(2024, 3, 17, 23, 0));
        assert_eq!(date_of(sunday.end), (2024, 3, 17));
    }

    #[test]
    fn test_week_window_crosses_year_boundary() {
        // 2024-12-31 is a Tuesday; its week runs Mon 2024-12-30 .. Sun 2025-01-05.
        let w = window(TimeRange::Week, dt(2024, 12, 31, 9, 0));
        assert_eq!(date_of(w.start), (2024, 12, 30));
        assert_eq!(date_of(w.end), (2025, 1, 5));
    }

    #[test]
    fn test_month_window() {
        let w = window(TimeRange::Month, dt(2024, 3, 15, 8, 0));
        assert_eq!(date_of(w.start), (2024, 3, 1));
        assert_eq!(date_of(w.end), (2024, 3, 31));

        // Leap February.
        let feb = window(TimeRange::Month, dt(2024, 2, 10, 0, 0));
        assert_eq!(date_of(feb.end), (2024, 2, 29));
        let feb = window(TimeRange::Month, dt(2025, 2, 10, 0, 0));
        assert_eq!(date_of(feb.end), (2025, 2, 28));
    }

    #[test]
    fn test_year_window() {
        let w = window(TimeRange::Year, dt(2024, 12, 31, 23, 59));
        assert_eq!(date_of(w.start), (2024, 1, 1));
        assert_eq!(date_of(w.end), (2024, 12, 31));
    }

    #[test]
    fn test_window_ordering_invariant() {
        let samples = [
            dt(2024, 1, 1, 0, 0),
            dt(2024, 2, 29, 12, 0),
            dt(2024, 12, 31, 23, 59),
            dt(2025, 7, 4, 6, 30),
        ];
        for range in TimeRange::ALL {
            for d in samples {
                let w = window(range, d);
                assert!(w.start <= w.end, "{range} window inverted for {d}");
                assert!(w.start <= d && d <= w.end, "{range} window excludes {d}");
            }
        }
    }

    #[test]
    fn test_day_and_week_steps() {
        let d = dt(2024, 3, 1, 10, 0);
        assert_eq!(date_of(add_unit(TimeRange::Day, d).unwrap()), (2024, 3, 2));
        assert_eq!(date_of(sub_unit(TimeRange::Day, d).unwrap()), (2024, 2, 29));
        assert_eq!(date_of(add_unit(TimeRange::Week, d).unwrap()), (2024, 3, 8));
        assert_eq!(date_of(sub_unit(TimeRange::Week, d).unwrap()), (2024, 2, 23));
    }

    #[test]
    fn test_month_step_clamps_at_month_end() {
        // chrono's documented policy: the day of month is clamped to the
        // target month's length. This is the rollover rule the app relies on.
        let jan31 = dt(2024, 1, 31, 9, 0);
        let feb = add_unit(TimeRange::Month, jan31).unwrap();
        assert_eq!(date_of(feb), (2024, 2, 29)); // leap year

        let mar = add_unit(TimeRange::Month, feb).unwrap();
        assert_eq!(date_of(mar), (2024, 3, 29)); // clamp sticks

        let jan31 = dt(2025, 1, 31, 9, 0);
        let feb = add_unit(TimeRange::Month, jan31).unwrap();
        assert_eq!(date_of(feb), (2025, 2, 28)); // non-leap

        let mar31 = dt(2024, 3, 31, 9, 0);
        assert_eq!(date_of(sub_unit(TimeRange::Month, mar31).unwrap()), (2024, 2, 29));
    }

    #[test]
    fn test_month_step_round_trip_non_invertible_only_at_clamp() {
        // Mid-month dates round-trip exactly.
        let d = dt(2024, 3, 15, 14, 45);
        let back = sub_unit(TimeRange::Month, add_unit(TimeRange::Month, d).unwrap()).unwrap();
        assert_eq!(back, d);

        // A clamped step loses the original day of month.
        let d = dt(2024, 3, 31, 14, 45);
        let back = sub_unit(TimeRange::Month, add_unit(TimeRange::Month, d).unwrap()).unwrap();
        assert_eq!(date_of(back), (2024, 3, 30));
    }

    #[test]
    fn test_year_step_clamps_leap_day() {
        let leap_day = dt(2024, 2, 29, 0, 0);
        assert_eq!(
            date_of(add_unit(TimeRange::Year, leap_day).unwrap()),
            (2025, 2, 28)
        );
        assert_eq!(
            date_of(sub_unit(TimeRange::Year, leap_day).unwrap()),
            (2023, 2, 28)
        );
    }

    #[test]
    fn test_query_key_is_zero_padded_calendar_date() {
        assert_eq!(query_key(dt(2024, 3, 5, 23, 59)), "2024-03-05");
        assert_eq!(query_key(dt(2024, 11, 30, 0, 0)), "2024-11-30");
        assert_eq!(query_key(dt(987, 1, 2, 12, 0)), "0987-01-02");
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(1, 2025), 31);
        assert_eq!(days_in_month(4, 2025), 30);
        assert_eq!(days_in_month(2, 2025), 28);
        assert_eq!(days_in_month(2, 2024), 29);
    }

    #[test]
    fn test_is_leap_year() {
        assert!(!is_leap_year(2025));
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(1900)); // divisible by 100 but not 400
        assert!(is_leap_year(2000));
    }

    #[test]
    fn test_month_names() {
        assert_eq!(month_name(1), "January");
        assert_eq!(month_name(12), "December");
        assert_eq!(month_name(13), "Invalid Month");
        assert_eq!(month_abbrev(3), "Mar");
        assert_eq!(month_abbrev(9), "Sep");
    }
}
