use log::debug;
use serde::Deserialize;
use starsigns::ephemeris::Body;
use starsigns::ChartSettings;
use std::fs;
use std::path::{Path, PathBuf};

/// Default config locations, relative to the working directory
pub const DEFAULT_CONFIG_PATHS: [&str; 2] = ["configs/starsigns.toml", "../../configs/starsigns.toml"];

#[derive(Debug, Clone, Default)]
pub struct StarsignsSettings {
    /// Swiss Ephemeris data directory, if configured
    pub ephemeris_path: Option<PathBuf>,
    pub chart: ChartSettings,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct EphemerisToml {
    #[serde(default)]
    path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ChartToml {
    #[serde(default)]
    bodies: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RootConfigToml {
    #[serde(default)]
    ephemeris: Option<EphemerisToml>,
    #[serde(default)]
    chart: Option<ChartToml>,
}

/// Try the default locations for `configs/starsigns.toml`; `None` if absent.
pub fn read_default_config_text() -> Option<(PathBuf, String)> {
    DEFAULT_CONFIG_PATHS.iter().find_map(|p| {
        fs::read_to_string(p)
            .ok()
            .map(|text| (PathBuf::from(p), text))
    })
}

/// Parse config text into settings
pub fn parse_settings(text: &str) -> anyhow::Result<StarsignsSettings> {
    let root: RootConfigToml = toml::from_str(text)
        .map_err(|e| anyhow::anyhow!("Failed to parse starsigns config: {e}"))?;

    let ephemeris_path = root.ephemeris.and_then(|e| e.path);

    let chart = match root.chart.and_then(|c| c.bodies) {
        Some(names) => {
            let bodies = names
                .iter()
                .map(|name| name.parse::<Body>().map_err(anyhow::Error::msg))
                .collect::<anyhow::Result<Vec<Body>>>()?;
            ChartSettings::new(bodies)?
        }
        None => ChartSettings::default(),
    };

    Ok(StarsignsSettings {
        ephemeris_path,
        chart,
    })
}

/// Load settings from an explicit path, or from the default locations.
///
/// An explicit path must exist; a missing default file yields defaults.
pub fn load_settings(path: Option<&Path>) -> anyhow::Result<StarsignsSettings> {
    match path {
        Some(path) => {
            let text = fs::read_to_string(path).map_err(|e| {
                anyhow::anyhow!("Could not read config {}: {e}", path.display())
            })?;
            debug!("Loaded config from {}", path.display());
            parse_settings(&text)
        }
        None => match read_default_config_text() {
            Some((found, text)) => {
                debug!("Loaded config from {}", found.display());
                parse_settings(&text)
            }
            None => {
                debug!("No config found in {:?}, using defaults", DEFAULT_CONFIG_PATHS);
                Ok(StarsignsSettings::default())
            }
        },
    }
}
