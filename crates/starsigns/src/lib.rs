//! Simplified natal chart calculation.
//!
//! Positions come from an [`EphemerisProvider`](ephemeris::EphemerisProvider);
//! everything above that seam (Julian day conversion, sign and house
//! classification, chart assembly) is plain Rust and testable with a stub.

pub mod chart;
pub mod ephemeris;
pub mod error;
pub mod western;

pub use chart::{
    generate_birth_chart, BirthChart, BirthInput, ChartEntry, ChartGenerator, ChartSettings,
};
pub use ephemeris::{Body, EphemerisError, EphemerisProvider, SwissEphemerisAdapter};
pub use error::ChartError;
pub use western::{house_for, sign_for, ZodiacSign};
