use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE,
    MONTHS_PER_YEAR,
};

// Calendar helpers. Months are 0-indexed throughout.

/// Whether `year` is a leap year in the proleptic Gregorian calendar
pub const fn is_leap_year(year: i32) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

/// Number of days in a 0-indexed `month` of `year`
pub const fn days_in_month(year: i32, month: u8) -> u8 {
    debug_assert!(month < 12);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

/// Days since 1970-01-01 for a proleptic Gregorian (year, month, day), where
/// `month` is 0-indexed and `day` is 1-indexed and in range.
pub(crate) const fn days_from_civil(year: i64, month: u8, day: u8) -> i64 {
    // Howard Hinnant's algorithm, with the year starting in March
    let m = month as i64 + 1;
    let y = if m <= 2 { year - 1 } else { year };
    let era = if y >= 0 { y } else { y - 399 } / 400;
    let yoe = y - era * 400; // [0, 399]
    let doy = (153 * (m + if m > 2 { -3 } else { 9 }) + 2) / 5 + day as i64 - 1; // [0, 365]
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy; // [0, 146096]
    era * 146_097 + doe - 719_468
}

/// Inverse of [`days_from_civil`]: (year, 0-indexed month, 1-indexed day)
pub(crate) const fn civil_from_days(days: i64) -> (i64, u8, u8) {
    let z = days + 719_468; // days since 0000-03-01
    let era = if z >= 0 { z } else { z - 146_096 } / 146_097;
    let doe = z - era * 146_097; // [0, 146096]
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let y = yoe + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let d = doy - (153 * mp + 2) / 5 + 1;
    let m = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = if m <= 2 { y + 1 } else { y };
    (year, (m - 1) as u8, d as u8)
}

/// Days since the epoch for an arbitrary (year, month, day) triple.
///
/// Months outside `0..12` carry into the year and days outside the month
/// carry into neighbouring months, so `(2013, 1, 31)` lands on March 3rd.
pub(crate) const fn make_day(year: i32, month: i32, day: i32) -> i64 {
    let year = year as i64 + month.div_euclid(MONTHS_PER_YEAR) as i64;
    let month = month.rem_euclid(MONTHS_PER_YEAR) as u8;
    days_from_civil(year, month, 1) + day as i64 - 1
}
