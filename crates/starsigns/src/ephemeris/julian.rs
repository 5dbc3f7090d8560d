//! Julian day conversion on the Swiss Ephemeris calendar routines.

use chrono::{DateTime, Datelike, Duration, NaiveDate, TimeZone, Timelike, Utc};
use swisseph::swe::{julday, revjul};

/// SE_GREG_CAL: interpret dates in the (proleptic) Gregorian calendar
const GREG_CAL: i32 = 1;

const MILLIS_PER_HOUR: f64 = 3_600_000.0;

/// Julian day for a Gregorian calendar date with a decimal hour of day.
pub fn julian_day(year: i32, month: u32, day: u32, hour_decimal: f64) -> f64 {
    julday(year, month as i32, day as i32, hour_decimal, GREG_CAL as u32)
}

/// Julian day for a UTC instant. Only hours and minutes contribute to the
/// day fraction; seconds are dropped.
pub fn julian_day_from_datetime(dt: DateTime<Utc>) -> f64 {
    let hour_decimal = dt.hour() as f64 + dt.minute() as f64 / 60.0;
    julian_day(dt.year(), dt.month(), dt.day(), hour_decimal)
}

/// Convert a Julian day back to a UTC instant, rounded to the millisecond.
///
/// Returns `None` for non-finite input or dates chrono cannot represent.
pub fn datetime_from_julian_day(jd: f64) -> Option<DateTime<Utc>> {
    if !jd.is_finite() {
        return None;
    }

    let (year, month, day, hour_decimal) = revjul(jd, GREG_CAL);
    let month = u32::try_from(month).ok()?;
    let day = u32::try_from(day).ok()?;

    let midnight = NaiveDate::from_ymd_opt(year, month, day)?.and_hms_opt(0, 0, 0)?;
    let millis = (hour_decimal * MILLIS_PER_HOUR).round() as i64;
    let naive = midnight.checked_add_signed(Duration::milliseconds(millis))?;
    Some(Utc.from_utc_datetime(&naive))
}
