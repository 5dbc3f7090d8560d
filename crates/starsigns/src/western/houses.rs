//! Placeholder house placement.
//!
//! Not a real house system: the planet's longitude is offset by the
//! birthplace's geographic longitude and bucketed into 30 degree bands.
//! Latitude plays no part.

/// House (1-12) for a planet at `degree` seen from geographic `longitude`.
///
/// `((degree + longitude) div 30) mod 12 + 1` with floor division and a
/// non-negative modulo. Non-finite input lands in house 1.
pub fn house_for(degree: f64, longitude: f64) -> u8 {
    let band = ((degree + longitude) / 30.0).floor();
    if !band.is_finite() {
        return 1;
    }
    // rem_euclid may round up to 12.0 for tiny negative bands
    (band.rem_euclid(12.0) as u8) % 12 + 1
}
