use crate::ephemeris::Body;
use crate::error::ChartError;
use serde::{Deserialize, Serialize};

/// Which bodies a chart contains, and in what order.
///
/// Serialized as the bare body list; deserializing applies the same checks
/// as [`ChartSettings::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Body>", into = "Vec<Body>")]
pub struct ChartSettings {
    bodies: Vec<Body>,
}

impl ChartSettings {
    pub fn new(bodies: Vec<Body>) -> Result<Self, ChartError> {
        if bodies.is_empty() {
            return Err(ChartError::InvalidSettings {
                message: "chart needs at least one body".to_string(),
            });
        }
        for (i, body) in bodies.iter().enumerate() {
            if bodies[..i].contains(body) {
                return Err(ChartError::InvalidSettings {
                    message: format!("{} is listed more than once", body),
                });
            }
        }
        Ok(Self { bodies })
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }
}

impl TryFrom<Vec<Body>> for ChartSettings {
    type Error = ChartError;

    fn try_from(bodies: Vec<Body>) -> Result<Self, Self::Error> {
        Self::new(bodies)
    }
}

impl From<ChartSettings> for Vec<Body> {
    fn from(settings: ChartSettings) -> Self {
        settings.bodies
    }
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            bodies: Body::ALL.to_vec(),
        }
    }
}
