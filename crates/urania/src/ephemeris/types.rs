use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Geographic location coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    pub lat: f64,
    pub lon: f64,
}

/// A body placed on the ecliptic
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CelestialBody {
    /// Display name, e.g. "Sun" or "MeanNode"
    pub name: String,
    /// Ecliptic longitude in degrees (0-360)
    pub longitude: f64,
}

impl CelestialBody {
    pub fn new(name: impl Into<String>, longitude: f64) -> Self {
        Self {
            name: name.into(),
            longitude,
        }
    }
}

/// What a positions provider is asked to compute
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartRequest {
    pub datetime: DateTime<Utc>,
    /// Birth place; houses are only available when this is set
    pub location: Option<GeoLocation>,
}

impl ChartRequest {
    pub fn new(datetime: DateTime<Utc>, location: Option<GeoLocation>) -> Self {
        Self { datetime, location }
    }
}
