//! Template-driven date formatting and parsing for date picker widgets.
//!
//! A template such as `yyyy-mm-dd` or `dddd, d mmmm yyyy` drives both
//! directions of the codec: [`format()`] renders a [`Date`] through it and
//! [`parse()`] reads a string back with the same template. Month and weekday
//! names come from an explicit [`Locale`].

mod config;
mod consts;
mod format;
mod locale;
mod parse;
mod prelude;
mod template;
mod types;

pub use config::FormatConfig;
pub use consts::*;
pub use format::{format, format_millis};
pub use locale::{Language, Locale, LocaleError};
pub use parse::{Mismatch, ParseOutcome, parse, parse_with_diagnostics};
pub use template::{Segment, Segments, Token, tokenize};
pub use types::{days_in_month, is_leap_year};

use crate::consts::{MS_PER_HOUR, MS_PER_MINUTE, MS_PER_SECOND};
use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use types::{civil_from_days, make_day};

/// A calendar instant, stored as milliseconds since 1970-01-01T00:00:00.
///
/// The timeline has no time zone attached. Months are 0-indexed
/// (`0` = January) and days are 1-indexed, the way picker widgets
/// address them.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Into,
)]
#[serde(try_from = "i64", into = "i64")]
pub struct Date(i64);

/// Error type for constructing dates.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    /// The instant lies outside the supported range.
    #[error("Date out of range: {0} ms from epoch")]
    OutOfRange(i128),
}

impl Date {
    /// Creates a date at midnight from a year, a month and a day of month.
    ///
    /// Out-of-range months carry into the year and out-of-range days carry
    /// into the neighbouring months, so `Date::new(2014, -1, 1)` is
    /// 2013-12-01 and `Date::new(2013, 1, 31)` is 2013-03-03.
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` if the result is too far from the epoch.
    pub fn new(year: i32, month: i32, day: i32) -> Result<Self, DateError> {
        Self::from_wide_millis(i128::from(make_day(year, month, day)) * i128::from(MS_PER_DAY))
    }

    /// Creates a date from milliseconds since the epoch.
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` if `millis` exceeds `MAX_TIMESTAMP_MILLIS`.
    pub fn from_timestamp_millis(millis: i64) -> Result<Self, DateError> {
        Self::from_wide_millis(i128::from(millis))
    }

    fn from_wide_millis(millis: i128) -> Result<Self, DateError> {
        let max = i128::from(MAX_TIMESTAMP_MILLIS);
        if !(-max..=max).contains(&millis) {
            return Err(DateError::OutOfRange(millis));
        }
        // Range was checked above, so the narrowing cannot truncate
        #[allow(clippy::cast_possible_truncation)]
        let millis = millis as i64;
        Ok(Self(millis))
    }

    /// Replaces the time of day, carrying overflow into neighbouring days.
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` if the result is too far from the epoch.
    pub fn and_hms_milli(
        self,
        hours: i32,
        minutes: i32,
        seconds: i32,
        millis: i32,
    ) -> Result<Self, DateError> {
        let time = i128::from(hours) * i128::from(MS_PER_HOUR)
            + i128::from(minutes) * i128::from(MS_PER_MINUTE)
            + i128::from(seconds) * i128::from(MS_PER_SECOND)
            + i128::from(millis);
        Self::from_wide_millis(i128::from(self.days()) * i128::from(MS_PER_DAY) + time)
    }

    /// Milliseconds since the epoch
    #[inline]
    pub const fn timestamp_millis(self) -> i64 {
        self.0
    }

    const fn days(self) -> i64 {
        self.0.div_euclid(MS_PER_DAY)
    }

    const fn time_of_day(self) -> i64 {
        self.0.rem_euclid(MS_PER_DAY)
    }

    #[allow(clippy::cast_possible_truncation)]
    const fn civil(self) -> (i32, u8, u8) {
        let (year, month, day) = civil_from_days(self.days());
        // |days| <= 100,000,000 keeps the year well inside i32
        (year as i32, month, day)
    }

    /// Full year, e.g. `2014`
    pub const fn year(self) -> i32 {
        self.civil().0
    }

    /// Month of the year, 0-indexed (`0` = January)
    pub const fn month(self) -> u8 {
        self.civil().1
    }

    /// Day of the month, 1-indexed
    pub const fn day(self) -> u8 {
        self.civil().2
    }

    /// Day of the week, `0` = Sunday
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub const fn weekday(self) -> u8 {
        // 1970-01-01 was a Thursday
        (self.days() + 4).rem_euclid(DAYS_PER_WEEK as i64) as u8
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub const fn hours(self) -> u8 {
        (self.time_of_day() / MS_PER_HOUR) as u8
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub const fn minutes(self) -> u8 {
        (self.time_of_day() % MS_PER_HOUR / MS_PER_MINUTE) as u8
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub const fn seconds(self) -> u8 {
        (self.time_of_day() % MS_PER_MINUTE / MS_PER_SECOND) as u8
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub const fn milliseconds(self) -> u16 {
        (self.time_of_day() % MS_PER_SECOND) as u16
    }

    /// Whether this date falls in a leap year
    pub const fn is_leap_year(self) -> bool {
        is_leap_year(self.year())
    }

    /// Number of days in this date's month
    pub const fn days_in_month(self) -> u8 {
        let (year, month, _) = self.civil();
        days_in_month(year, month)
    }

    /// The first day of this date's month, keeping the time of day
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` at the lower edge of the supported range.
    pub fn first_day_of_month(self) -> Result<Self, DateError> {
        self.add_days(1 - i64::from(self.day()))
    }

    /// Moves by whole days, keeping the time of day
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` if the result is too far from the epoch.
    pub fn add_days(self, days: i64) -> Result<Self, DateError> {
        Self::from_wide_millis(
            i128::from(self.0) + i128::from(days) * i128::from(MS_PER_DAY),
        )
    }

    /// Moves by whole months, clamping the day to the target month's length.
    ///
    /// January 31st plus one month is the last day of February.
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` if the result is too far from the epoch.
    pub fn add_months(self, months: i32) -> Result<Self, DateError> {
        let (year, month, day) = self.civil();
        let total = i64::from(year) * 12 + i64::from(month) + i64::from(months);
        // Years of valid dates plus i32::MAX / 12 still fit in i32
        #[allow(clippy::cast_possible_truncation)]
        let (year, month) = (total.div_euclid(12) as i32, total.rem_euclid(12) as i32);
        let date = create_in_month(year, month, i32::from(day))?;
        Self::from_wide_millis(i128::from(date.0) + i128::from(self.time_of_day()))
    }

    /// Moves by whole years; February 29th lands on February 28th in
    /// non-leap years.
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` if the result is too far from the epoch.
    pub fn add_years(self, years: i32) -> Result<Self, DateError> {
        self.add_months(years.saturating_mul(12))
    }
}

impl TryFrom<i64> for Date {
    type Error = DateError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::from_timestamp_millis(value)
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (year, month, day) = self.civil();
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}.{:03}",
            year,
            month + 1,
            day,
            self.hours(),
            self.minutes(),
            self.seconds(),
            self.milliseconds()
        )
    }
}

/// Values that can stand in for a [`Date`]: the date itself or an epoch
/// timestamp in milliseconds.
///
/// Coercion yields `None` for timestamps that do not describe a valid date
/// (out of range, NaN or infinite).
pub trait IntoDate {
    fn into_date(self) -> Option<Date>;
}

impl IntoDate for Date {
    fn into_date(self) -> Option<Date> {
        Some(self)
    }
}

impl IntoDate for &Date {
    fn into_date(self) -> Option<Date> {
        Some(*self)
    }
}

impl IntoDate for i64 {
    fn into_date(self) -> Option<Date> {
        Date::from_timestamp_millis(self).ok()
    }
}

impl IntoDate for f64 {
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    fn into_date(self) -> Option<Date> {
        if !self.is_finite() || self.abs() > MAX_TIMESTAMP_MILLIS as f64 {
            return None;
        }
        Date::from_timestamp_millis(self.trunc() as i64).ok()
    }
}

/// Whether both values fall on the same calendar day.
/// Values that do not coerce to a date never match.
pub fn is_same_date(a: impl IntoDate, b: impl IntoDate) -> bool {
    match (a.into_date(), b.into_date()) {
        (Some(a), Some(b)) => a.civil() == b.civil(),
        _ => false,
    }
}

/// Whether both values fall in the same month of the same year.
pub fn is_same_month(a: impl IntoDate, b: impl IntoDate) -> bool {
    match (a.into_date(), b.into_date()) {
        (Some(a), Some(b)) => a.year() == b.year() && a.month() == b.month(),
        _ => false,
    }
}

/// Whether both values fall in the same year.
pub fn is_same_year(a: impl IntoDate, b: impl IntoDate) -> bool {
    match (a.into_date(), b.into_date()) {
        (Some(a), Some(b)) => a.year() == b.year(),
        _ => false,
    }
}

/// Creates a date inside a given month, clamping rather than rolling over.
///
/// `month` is wrapped into `0..12` without touching `year`, so month 13 is
/// February of the same year. A `day` past the end of the month becomes the
/// month's last day and a `day` below 1 becomes the 1st.
///
/// # Errors
/// Returns `DateError::OutOfRange` if the result is too far from the epoch.
pub fn create_in_month(year: i32, month: i32, day: i32) -> Result<Date, DateError> {
    let month = month.rem_euclid(MONTHS_PER_YEAR);
    // rem_euclid(12) always fits
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let last = i32::from(days_in_month(year, month as u8));
    Date::new(year, month, day.clamp(1, last))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: i32, day: i32) -> Date {
        Date::new(year, month, day).unwrap()
    }

    #[test]
    fn test_new_components() {
        let d = date(2014, 3, 20);
        assert_eq!(d.year(), 2014);
        assert_eq!(d.month(), 3);
        assert_eq!(d.day(), 20);
        assert_eq!(d.weekday(), 0, "2014-04-20 was a Sunday");
        assert_eq!(d.hours(), 0);
    }

    #[test]
    fn test_new_month_rollover() {
        assert_eq!(date(2014, -1, 1), date(2013, 11, 1));
        assert_eq!(date(2013, 13, 1), date(2014, 1, 1));
        assert_eq!(date(2013, 12, 1), date(2014, 0, 1));
    }

    #[test]
    fn test_new_day_rollover() {
        assert_eq!(date(2013, 1, 31), date(2013, 2, 3));
        assert_eq!(date(2014, 0, 0), date(2013, 11, 31));
    }

    #[test]
    fn test_new_out_of_range() {
        assert!(matches!(
            Date::new(300_000, 0, 1),
            Err(DateError::OutOfRange(_))
        ));
        assert!(Date::new(i32::MAX, i32::MAX, i32::MAX).is_err());
        assert!(Date::new(i32::MIN, i32::MIN, i32::MIN).is_err());
    }

    #[test]
    fn test_from_timestamp_millis() {
        let d = Date::from_timestamp_millis(1_397_952_000_000).unwrap();
        assert_eq!(d, date(2014, 3, 20));
        assert_eq!(d.timestamp_millis(), 1_397_952_000_000);

        assert!(Date::from_timestamp_millis(MAX_TIMESTAMP_MILLIS).is_ok());
        assert!(Date::from_timestamp_millis(MAX_TIMESTAMP_MILLIS + 1).is_err());
        assert!(Date::from_timestamp_millis(-MAX_TIMESTAMP_MILLIS - 1).is_err());
    }

    #[test]
    fn test_before_epoch() {
        let d = Date::from_timestamp_millis(-1).unwrap();
        assert_eq!((d.year(), d.month(), d.day()), (1969, 11, 31));
        assert_eq!((d.hours(), d.minutes(), d.seconds()), (23, 59, 59));
        assert_eq!(d.milliseconds(), 999);
        assert_eq!(d.weekday(), 3, "1969-12-31 was a Wednesday");
    }

    #[test]
    fn test_and_hms_milli() {
        let d = date(2014, 3, 20).and_hms_milli(13, 45, 30, 250).unwrap();
        assert_eq!((d.hours(), d.minutes(), d.seconds()), (13, 45, 30));
        assert_eq!(d.milliseconds(), 250);
        assert_eq!(d.day(), 20);

        let rolled = date(2014, 3, 20).and_hms_milli(24, 0, 0, 0).unwrap();
        assert_eq!(rolled, date(2014, 3, 21));
    }

    #[test]
    fn test_display() {
        let d = date(2014, 3, 20).and_hms_milli(8, 5, 3, 7).unwrap();
        assert_eq!(d.to_string(), "2014-04-20T08:05:03.007");
    }

    #[test]
    fn test_ordering() {
        assert!(date(2014, 3, 20) < date(2014, 3, 21));
        assert!(date(2015, 0, 1) > date(2014, 11, 31));
    }

    #[test]
    fn test_serde() {
        let d = date(2014, 3, 20);
        let json = serde_json::to_string(&d).unwrap();
        assert_eq!(json, "1397952000000");

        let parsed: Date = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, d);

        let result: Result<Date, _> = serde_json::from_str("8640000000000001");
        assert!(result.is_err());
    }

    #[test]
    fn test_into_i64() {
        let millis: i64 = date(1970, 0, 2).into();
        assert_eq!(millis, MS_PER_DAY);
    }

    #[test]
    fn test_is_same_date() {
        let morning = date(2014, 3, 20).and_hms_milli(8, 0, 0, 0).unwrap();
        let evening = date(2014, 3, 20).and_hms_milli(20, 0, 0, 0).unwrap();
        assert!(is_same_date(morning, evening));
        assert!(is_same_date(&morning, evening.timestamp_millis()));
        assert!(!is_same_date(morning, date(2014, 3, 21)));
    }

    #[test]
    fn test_is_same_month() {
        assert!(is_same_month(date(2014, 3, 1), date(2014, 3, 30)));
        assert!(!is_same_month(date(2014, 3, 1), date(2015, 3, 1)));
        assert!(!is_same_month(date(2014, 3, 1), date(2014, 4, 1)));
    }

    #[test]
    fn test_is_same_year() {
        assert!(is_same_year(date(2014, 0, 1), date(2014, 11, 31)));
        assert!(is_same_year(1_397_952_000_000_i64, date(2014, 0, 1)));
        assert!(!is_same_year(date(2014, 0, 1), date(2013, 11, 31)));
    }

    #[test]
    fn test_comparators_reject_invalid_input() {
        let valid = date(2014, 3, 20);
        assert!(!is_same_year(f64::NAN, valid));
        assert!(!is_same_year(valid, f64::INFINITY));
        assert!(!is_same_month(f64::NAN, valid));
        assert!(!is_same_date(i64::MAX, valid));
    }

    #[test]
    fn test_f64_coercion() {
        let d = 1_397_952_000_000.0_f64.into_date().unwrap();
        assert_eq!(d, date(2014, 3, 20));
        assert!(f64::NAN.into_date().is_none());
        assert!(f64::NEG_INFINITY.into_date().is_none());
        assert!(1e300_f64.into_date().is_none());
    }

    #[test]
    fn test_create_in_month_clamps() {
        struct TestCase {
            input: (i32, i32, i32),
            expected: (i32, i32, i32),
            description: &'static str,
        }

        let cases = [
            TestCase {
                input: (2013, 13, 31),
                expected: (2013, 1, 28),
                description: "month 13 wraps to February of the same year",
            },
            TestCase {
                input: (2012, 1, 31),
                expected: (2012, 1, 29),
                description: "leap February",
            },
            TestCase {
                input: (2014, 3, 31),
                expected: (2014, 3, 30),
                description: "30-day month",
            },
            TestCase {
                input: (2014, -1, 15),
                expected: (2014, 11, 15),
                description: "negative month wraps without changing the year",
            },
            TestCase {
                input: (2014, 0, 0),
                expected: (2014, 0, 1),
                description: "day below 1",
            },
            TestCase {
                input: (2014, 6, 15),
                expected: (2014, 6, 15),
                description: "valid date is untouched",
            },
        ];

        for case in &cases {
            let (y, m, d) = case.input;
            let (ey, em, ed) = case.expected;
            assert_eq!(
                create_in_month(y, m, d).unwrap(),
                date(ey, em, ed),
                "{}",
                case.description
            );
        }
    }

    #[test]
    fn test_add_months_clamps() {
        let jan31 = date(2014, 0, 31);
        assert_eq!(jan31.add_months(1).unwrap(), date(2014, 1, 28));
        assert_eq!(jan31.add_months(2).unwrap(), date(2014, 2, 31));
        assert_eq!(jan31.add_months(-1).unwrap(), date(2013, 11, 31));
        assert_eq!(jan31.add_months(13).unwrap(), date(2015, 1, 28));
    }

    #[test]
    fn test_add_months_keeps_time() {
        let d = date(2014, 0, 31).and_hms_milli(9, 30, 0, 0).unwrap();
        let next = d.add_months(1).unwrap();
        assert_eq!((next.month(), next.day(), next.hours(), next.minutes()), (1, 28, 9, 30));
    }

    #[test]
    fn test_add_years_leap_day() {
        assert_eq!(date(2012, 1, 29).add_years(1).unwrap(), date(2013, 1, 28));
        assert_eq!(date(2012, 1, 29).add_years(4).unwrap(), date(2016, 1, 29));
    }

    #[test]
    fn test_add_days() {
        assert_eq!(date(2014, 1, 28).add_days(1).unwrap(), date(2014, 2, 1));
        assert_eq!(date(2014, 0, 1).add_days(-1).unwrap(), date(2013, 11, 31));
        assert!(date(2014, 0, 1).add_days(i64::MAX).is_err());
    }

    #[test]
    fn test_month_helpers() {
        let d = date(2012, 1, 17).and_hms_milli(6, 0, 0, 0).unwrap();
        assert!(d.is_leap_year());
        assert_eq!(d.days_in_month(), 29);

        let first = d.first_day_of_month().unwrap();
        assert_eq!((first.day(), first.hours()), (1, 6));
    }
}
