use crate::ephemeris::{julian_day_from_datetime, GeoLocation};
use crate::error::ChartError;
use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use serde::Serialize;

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%H:%M";

/// Birth moment and place, as entered by the user.
///
/// Only constructible through [`BirthInput::new`] and the parsers, so every
/// value is finite.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BirthInput {
    date: NaiveDate,
    time: NaiveTime,
    location: GeoLocation,
    timezone_offset_hours: f64,
}

impl BirthInput {
    /// Coordinates and offset are taken as given; only non-finite values
    /// are refused.
    pub fn new(
        date: NaiveDate,
        time: NaiveTime,
        latitude: f64,
        longitude: f64,
        timezone_offset_hours: f64,
    ) -> Result<Self, ChartError> {
        check_finite("latitude", latitude)?;
        check_finite("longitude", longitude)?;
        check_finite("timezone offset", timezone_offset_hours)?;

        Ok(Self {
            date,
            time,
            location: GeoLocation {
                lat: latitude,
                lon: longitude,
            },
            timezone_offset_hours,
        })
    }

    /// Parse a `YYYY-MM-DD` date and a 24-hour `HH:MM` time
    pub fn parse(
        date: &str,
        time: &str,
        latitude: f64,
        longitude: f64,
        timezone_offset_hours: f64,
    ) -> Result<Self, ChartError> {
        let parsed_date = NaiveDate::parse_from_str(date.trim(), DATE_FORMAT)
            .map_err(|e| ChartError::parse("date", date, e))?;
        let parsed_time = NaiveTime::parse_from_str(time.trim(), TIME_FORMAT)
            .map_err(|e| ChartError::parse("time", time, e))?;
        Self::new(parsed_date, parsed_time, latitude, longitude, timezone_offset_hours)
    }

    /// Like [`BirthInput::parse`], with the numeric fields still as text
    pub fn parse_text(
        date: &str,
        time: &str,
        latitude: &str,
        longitude: &str,
        timezone_offset_hours: &str,
    ) -> Result<Self, ChartError> {
        let latitude = parse_number("latitude", latitude)?;
        let longitude = parse_number("longitude", longitude)?;
        let timezone_offset_hours = parse_number("timezone offset", timezone_offset_hours)?;
        Self::parse(date, time, latitude, longitude, timezone_offset_hours)
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn time(&self) -> NaiveTime {
        self.time
    }

    pub fn location(&self) -> GeoLocation {
        self.location
    }

    pub fn latitude(&self) -> f64 {
        self.location.lat
    }

    pub fn longitude(&self) -> f64 {
        self.location.lon
    }

    /// Offset of local clock time from UTC, in hours (e.g. -5 for EST)
    pub fn timezone_offset_hours(&self) -> f64 {
        self.timezone_offset_hours
    }

    pub fn local_datetime(&self) -> NaiveDateTime {
        self.date.and_time(self.time)
    }

    /// Local clock time shifted back by the timezone offset
    pub fn utc_datetime(&self) -> Result<DateTime<Utc>, ChartError> {
        let offset_ms = (self.timezone_offset_hours * 3_600_000.0).round() as i64;
        let utc = Duration::try_milliseconds(offset_ms)
            .and_then(|offset| self.local_datetime().checked_sub_signed(offset))
            .ok_or(ChartError::InvalidInput {
                field: "timezone offset",
                value: self.timezone_offset_hours,
                expected: "an offset keeping the date representable",
            })?;
        Ok(Utc.from_utc_datetime(&utc))
    }

    pub fn julian_day(&self) -> Result<f64, ChartError> {
        Ok(julian_day_from_datetime(self.utc_datetime()?))
    }
}

fn check_finite(field: &'static str, value: f64) -> Result<(), ChartError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ChartError::InvalidInput {
            field,
            value,
            expected: "a finite number",
        })
    }
}

fn parse_number(field: &'static str, input: &str) -> Result<f64, ChartError> {
    input
        .trim()
        .parse::<f64>()
        .map_err(|e| ChartError::parse(field, input, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn test_parse_valid_input() {
        let input = BirthInput::parse("1991-06-18", "07:10", 10.522, 76.172, 5.5).unwrap();
        assert_eq!(input.date(), NaiveDate::from_ymd_opt(1991, 6, 18).unwrap());
        assert_eq!(input.time().hour(), 7);
        assert_eq!(input.time().minute(), 10);
        assert_eq!(input.location(), GeoLocation { lat: 10.522, lon: 76.172 });
        assert_eq!(input.timezone_offset_hours(), 5.5);
    }

    #[test]
    fn test_fractional_offset_shifts_utc() {
        let input = BirthInput::parse("1991-06-18", "07:10", 10.522, 76.172, 5.5).unwrap();
        let utc = input.utc_datetime().unwrap();
        assert_eq!(utc, Utc.with_ymd_and_hms(1991, 6, 18, 1, 40, 0).unwrap());
    }

    #[test]
    fn test_negative_offset_crosses_midnight() {
        let input = BirthInput::parse("1999-12-31", "22:30", 40.7128, -74.006, -5.0).unwrap();
        let utc = input.utc_datetime().unwrap();
        assert_eq!(utc, Utc.with_ymd_and_hms(2000, 1, 1, 3, 30, 0).unwrap());
    }

    #[test]
    fn test_malformed_date_and_time() {
        assert!(BirthInput::parse("not-a-date", "12:00", 0.0, 0.0, 0.0)
            .unwrap_err()
            .is_parse());
        assert!(BirthInput::parse("2001-02-29", "12:00", 0.0, 0.0, 0.0)
            .unwrap_err()
            .is_parse());
        assert!(BirthInput::parse("2000-01-01", "25:00", 0.0, 0.0, 0.0)
            .unwrap_err()
            .is_parse());
    }

    #[test]
    fn test_parse_text_rejects_bad_number() {
        let err = BirthInput::parse_text("2000-01-01", "12:00", "north", "0", "0").unwrap_err();
        assert!(err.is_parse());
        assert!(err.to_string().contains("latitude"));
    }

    #[test]
    fn test_coordinates_are_not_range_checked() {
        let input = BirthInput::parse("2000-01-01", "12:00", 91.0, 200.0, 26.0).unwrap();
        assert_eq!(input.latitude(), 91.0);
        assert_eq!(input.longitude(), 200.0);
        assert_eq!(
            input.utc_datetime().unwrap(),
            Utc.with_ymd_and_hms(1999, 12, 31, 10, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_non_finite_values_are_rejected() {
        let err = BirthInput::parse("2000-01-01", "12:00", 0.0, f64::NAN, 0.0).unwrap_err();
        assert!(matches!(err, ChartError::InvalidInput { field: "longitude", .. }));
        let err = BirthInput::parse_text("2000-01-01", "12:00", "inf", "0", "0").unwrap_err();
        assert!(matches!(err, ChartError::InvalidInput { field: "latitude", .. }));
    }

    #[test]
    fn test_unrepresentable_offset_is_an_error() {
        let input = BirthInput::parse("2000-01-01", "12:00", 0.0, 0.0, 1e15).unwrap();
        let err = input.julian_day().unwrap_err();
        assert!(matches!(err, ChartError::InvalidInput { field: "timezone offset", .. }));
    }
}
