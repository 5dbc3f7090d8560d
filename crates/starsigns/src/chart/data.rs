use crate::ephemeris::Body;
use crate::western::{house_for, sign_for, ZodiacSign};
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fmt;

/// Sign, raw longitude and placeholder house of one body
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct ChartEntry {
    pub sign: ZodiacSign,
    pub degree: f64,
    pub house: u8,
}

impl ChartEntry {
    /// Classify a raw ecliptic longitude seen from a geographic longitude
    pub fn classify(degree: f64, geo_longitude: f64) -> Self {
        Self {
            sign: sign_for(degree),
            degree,
            house: house_for(degree, geo_longitude),
        }
    }
}

impl fmt::Display for ChartEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {:.2}° (House {})", self.sign, self.degree, self.house)
    }
}

/// Chart entries keyed by body, in the order they were computed
#[derive(Debug, Clone, PartialEq)]
pub struct BirthChart {
    entries: Vec<(Body, ChartEntry)>,
}

impl BirthChart {
    pub(crate) fn new(entries: Vec<(Body, ChartEntry)>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, body: Body) -> Option<&ChartEntry> {
        self.entries
            .iter()
            .find(|(b, _)| *b == body)
            .map(|(_, entry)| entry)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Body, &ChartEntry)> {
        self.entries.iter().map(|(body, entry)| (*body, entry))
    }

    pub fn bodies(&self) -> impl Iterator<Item = Body> + '_ {
        self.entries.iter().map(|(body, _)| *body)
    }
}

impl<'a> IntoIterator for &'a BirthChart {
    type Item = &'a (Body, ChartEntry);
    type IntoIter = std::slice::Iter<'a, (Body, ChartEntry)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// One `<Name>: <Sign> at <degree>° (House <n>)` line per body
impl fmt::Display for BirthChart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (body, entry) in &self.entries {
            writeln!(f, "{}: {}", body, entry)?;
        }
        Ok(())
    }
}

// Serialized as an object keyed by body name, keeping chart order
impl Serialize for BirthChart {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (body, entry) in &self.entries {
            map.serialize_entry(body.name(), entry)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_display() {
        let entry = ChartEntry::classify(280.3712, 0.0);
        assert_eq!(entry.to_string(), "Capricorn at 280.37° (House 10)");
    }

    #[test]
    fn test_chart_lines_keep_order() {
        let chart = BirthChart::new(vec![
            (Body::Sun, ChartEntry::classify(280.0, 0.0)),
            (Body::Moon, ChartEntry::classify(15.5, 0.0)),
        ]);
        assert_eq!(
            chart.to_string(),
            "Sun: Capricorn at 280.00° (House 10)\nMoon: Aries at 15.50° (House 1)\n"
        );
    }

    #[test]
    fn test_json_is_ordered_object() {
        let chart = BirthChart::new(vec![
            (Body::Venus, ChartEntry::classify(45.0, 0.0)),
            (Body::Sun, ChartEntry::classify(0.0, 0.0)),
        ]);
        let json = serde_json::to_string(&chart).unwrap();
        assert_eq!(
            json,
            r#"{"Venus":{"sign":"Taurus","degree":45.0,"house":2},"Sun":{"sign":"Aries","degree":0.0,"house":1}}"#
        );
    }
}
