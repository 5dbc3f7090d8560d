//! Zodiac signs of the tropical zodiac.
//!
//! Each sign spans a fixed 30 degree band of ecliptic longitude, starting
//! with Aries at 0 degrees.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

impl ZodiacSign {
    pub const ALL: [ZodiacSign; 12] = [
        ZodiacSign::Aries,
        ZodiacSign::Taurus,
        ZodiacSign::Gemini,
        ZodiacSign::Cancer,
        ZodiacSign::Leo,
        ZodiacSign::Virgo,
        ZodiacSign::Libra,
        ZodiacSign::Scorpio,
        ZodiacSign::Sagittarius,
        ZodiacSign::Capricorn,
        ZodiacSign::Aquarius,
        ZodiacSign::Pisces,
    ];

    pub fn from_index(index: usize) -> ZodiacSign {
        Self::ALL[index % 12]
    }

    pub fn name(self) -> &'static str {
        match self {
            ZodiacSign::Aries => "Aries",
            ZodiacSign::Taurus => "Taurus",
            ZodiacSign::Gemini => "Gemini",
            ZodiacSign::Cancer => "Cancer",
            ZodiacSign::Leo => "Leo",
            ZodiacSign::Virgo => "Virgo",
            ZodiacSign::Libra => "Libra",
            ZodiacSign::Scorpio => "Scorpio",
            ZodiacSign::Sagittarius => "Sagittarius",
            ZodiacSign::Capricorn => "Capricorn",
            ZodiacSign::Aquarius => "Aquarius",
            ZodiacSign::Pisces => "Pisces",
        }
    }
}

impl fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Get sign index (0-11) from longitude, normalizing into [0, 360) first
pub fn get_sign_index(longitude: f64) -> usize {
    let normalized = longitude.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    ((normalized / 30.0).floor() as usize) % 12
}

/// Sign containing the given ecliptic longitude
pub fn sign_for(degree: f64) -> ZodiacSign {
    ZodiacSign::from_index(get_sign_index(degree))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_boundaries() {
        assert_eq!(sign_for(0.0), ZodiacSign::Aries);
        assert_eq!(sign_for(29.9), ZodiacSign::Aries);
        assert_eq!(sign_for(30.0), ZodiacSign::Taurus);
        assert_eq!(sign_for(359.99), ZodiacSign::Pisces);
    }

    #[test]
    fn test_sign_out_of_range_is_normalized() {
        assert_eq!(sign_for(360.0), ZodiacSign::Aries);
        assert_eq!(sign_for(-0.5), ZodiacSign::Pisces);
        assert_eq!(sign_for(-1e-20), ZodiacSign::Aries);
        assert_eq!(sign_for(725.0), ZodiacSign::Aries);
    }

    #[test]
    fn test_display_matches_label() {
        assert_eq!(ZodiacSign::Sagittarius.to_string(), "Sagittarius");
    }
}
