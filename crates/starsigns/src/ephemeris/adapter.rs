use crate::ephemeris::julian::datetime_from_julian_day;
use crate::ephemeris::types::{Body, PlanetPosition};
use crate::ephemeris::EphemerisProvider;
use log::{debug, warn};
use std::env;
use std::path::{Path, PathBuf};
use swisseph::swe::calc_ut;
use thiserror::Error;

/// Errors that can occur during ephemeris calculations
#[derive(Error, Debug)]
pub enum EphemerisError {
    #[error("Ephemeris file not found at path: {path}. {message}")]
    FileNotFound { path: String, message: String },
    #[error("Failed to calculate position for {body} at JD {julian_day} ({datetime}): {message}")]
    CalculationFailed {
        body: Body,
        julian_day: f64,
        datetime: String,
        message: String,
    },
}

impl EphemerisError {
    pub fn calculation_failed(body: Body, julian_day: f64, message: impl Into<String>) -> Self {
        let datetime = datetime_from_julian_day(julian_day)
            .map(|dt| dt.to_rfc3339())
            .unwrap_or_else(|| "unrepresentable date".to_string());
        EphemerisError::CalculationFailed {
            body,
            julian_day,
            datetime,
            message: message.into(),
        }
    }
}

/// Environment variable consulted when no ephemeris path is passed in
pub const EPHEMERIS_PATH_ENV: &str = "SWISS_EPHEMERIS_PATH";

/// Read by the Swiss Ephemeris C library when no path was set through its API
const SE_EPHE_PATH_ENV: &str = "SE_EPHE_PATH";

const DEFAULT_EPHEMERIS_PATH: &str = "/usr/local/share/swisseph";

/// FLG_SWIEPH: use Swiss Ephemeris files, falling back to Moshier when absent
const FLG_SWIEPH: i32 = 2;

/// Swiss Ephemeris adapter implementation
pub struct SwissEphemerisAdapter {
    ephemeris_path: Option<PathBuf>,
    flags: i32,
}

impl SwissEphemerisAdapter {
    /// Create a new adapter with optional ephemeris path.
    ///
    /// An explicit path must exist. Without one, `SWISS_EPHEMERIS_PATH` and
    /// then the system default are tried; if neither exists the library
    /// falls back to its built-in Moshier ephemeris.
    pub fn new(ephemeris_path: Option<PathBuf>) -> Result<Self, EphemerisError> {
        let path = match ephemeris_path {
            Some(path) => {
                if !path.exists() {
                    return Err(EphemerisError::FileNotFound {
                        path: path.display().to_string(),
                        message: "Ephemeris path does not exist. Please ensure Swiss Ephemeris data files are installed.".to_string(),
                    });
                }
                Some(path)
            }
            None => {
                let candidate = env::var(EPHEMERIS_PATH_ENV)
                    .map(PathBuf::from)
                    .unwrap_or_else(|_| PathBuf::from(DEFAULT_EPHEMERIS_PATH));
                if candidate.exists() {
                    Some(candidate)
                } else {
                    warn!(
                        "No Swiss Ephemeris data at {}, using built-in Moshier ephemeris",
                        candidate.display()
                    );
                    None
                }
            }
        };

        if let Some(path) = &path {
            debug!("Using Swiss Ephemeris data from {}", path.display());
            env::set_var(SE_EPHE_PATH_ENV, path);
        }

        Ok(Self {
            ephemeris_path: path,
            flags: FLG_SWIEPH,
        })
    }

    pub fn ephemeris_path(&self) -> Option<&Path> {
        self.ephemeris_path.as_deref()
    }

    /// Calculate position for a single body
    pub fn calc_planet_position(&self, body: Body, jd: f64) -> Result<PlanetPosition, EphemerisError> {
        let result = calc_ut(jd, body.swe_id() as u32, self.flags as u32).map_err(|e| {
            EphemerisError::calculation_failed(body, jd, format!("Swiss Ephemeris error: {}", e))
        })?;

        let longitude = result.out[0];
        if !longitude.is_finite() {
            return Err(EphemerisError::calculation_failed(
                body,
                jd,
                format!("non-finite longitude {}", longitude),
            ));
        }

        Ok(PlanetPosition { lon: longitude })
    }
}

impl EphemerisProvider for SwissEphemerisAdapter {
    fn longitude(&self, jd: f64, body: Body) -> Result<f64, EphemerisError> {
        self.calc_planet_position(body, jd).map(|pos| pos.lon)
    }
}
