/// Months in a year
pub const MONTHS_PER_YEAR: i32 = 12;

/// Days in a week
pub const DAYS_PER_WEEK: usize = 7;

/// Month index for February (months are 0-indexed)
pub const FEBRUARY: u8 = 1;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (months are 0-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 12] = [
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;

pub(crate) const MS_PER_SECOND: i64 = 1_000;
pub(crate) const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
pub(crate) const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
/// Milliseconds in a civil day (no leap seconds)
pub const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

/// Largest distance from the epoch, in milliseconds, a `Date` may hold
/// (100,000,000 days either side of 1970-01-01)
pub const MAX_TIMESTAMP_MILLIS: i64 = 100_000_000 * MS_PER_DAY;

/// Opens an escaped literal run in a template
pub const LITERAL_OPEN: char = '[';
/// Closes an escaped literal run in a template
pub const LITERAL_CLOSE: char = ']';

/// Template used when none is configured (ISO 8601 calendar date)
pub const DEFAULT_TEMPLATE: &str = "yyyy-mm-dd";
