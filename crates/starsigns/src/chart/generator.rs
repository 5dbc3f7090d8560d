use crate::chart::data::{BirthChart, ChartEntry};
use crate::chart::input::BirthInput;
use crate::chart::settings::ChartSettings;
use crate::ephemeris::EphemerisProvider;
use crate::error::ChartError;
use log::debug;

/// Builds birth charts from an ephemeris provider
pub struct ChartGenerator<P> {
    provider: P,
    settings: ChartSettings,
}

impl<P: EphemerisProvider> ChartGenerator<P> {
    pub fn new(provider: P) -> Self {
        Self::with_settings(provider, ChartSettings::default())
    }

    pub fn with_settings(provider: P, settings: ChartSettings) -> Self {
        Self { provider, settings }
    }

    pub fn settings(&self) -> &ChartSettings {
        &self.settings
    }

    /// Compute the chart for a birth moment and place.
    ///
    /// All-or-nothing: the first provider failure aborts the chart.
    pub fn generate(&self, input: &BirthInput) -> Result<BirthChart, ChartError> {
        let jd = input.julian_day()?;
        debug!(
            "Generating chart for {} (UTC offset {}h) -> JD {:.6}",
            input.local_datetime(),
            input.timezone_offset_hours(),
            jd
        );
        self.generate_at(jd, input.longitude())
    }

    /// Compute the chart for a Julian day and geographic longitude
    pub fn generate_at(&self, jd: f64, geo_longitude: f64) -> Result<BirthChart, ChartError> {
        let mut entries = Vec::with_capacity(self.settings.bodies().len());
        for &body in self.settings.bodies() {
            let degree = self.provider.longitude(jd, body)?;
            let entry = ChartEntry::classify(degree, geo_longitude);
            debug!("{}: lon {:.4} -> {} house {}", body, degree, entry.sign, entry.house);
            entries.push((body, entry));
        }
        Ok(BirthChart::new(entries))
    }
}

/// Parse the raw inputs and compute the default ten-body chart
pub fn generate_birth_chart<P: EphemerisProvider>(
    provider: P,
    date: &str,
    time: &str,
    latitude: f64,
    longitude: f64,
    timezone_offset_hours: f64,
) -> Result<BirthChart, ChartError> {
    let input = BirthInput::parse(date, time, latitude, longitude, timezone_offset_hours)?;
    ChartGenerator::new(provider).generate(&input)
}
