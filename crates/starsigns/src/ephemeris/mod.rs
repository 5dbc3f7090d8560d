pub mod adapter;
pub mod julian;
pub mod types;

pub use adapter::{EphemerisError, SwissEphemerisAdapter, EPHEMERIS_PATH_ENV};
pub use julian::{datetime_from_julian_day, julian_day, julian_day_from_datetime};
pub use types::{Body, GeoLocation, PlanetPosition};

/// Source of geocentric ecliptic longitudes.
pub trait EphemerisProvider {
    /// Ecliptic longitude of `body` in degrees at Julian day `jd` (UT).
    fn longitude(&self, jd: f64, body: Body) -> Result<f64, EphemerisError>;
}

impl<P: EphemerisProvider + ?Sized> EphemerisProvider for &P {
    fn longitude(&self, jd: f64, body: Body) -> Result<f64, EphemerisError> {
        (**self).longitude(jd, body)
    }
}

impl<P: EphemerisProvider + ?Sized> EphemerisProvider for Box<P> {
    fn longitude(&self, jd: f64, body: Body) -> Result<f64, EphemerisError> {
        (**self).longitude(jd, body)
    }
}
