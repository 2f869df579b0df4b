use crate::chart::ChartData;
use crate::ephemeris::types::{CelestialBody, ChartRequest};
use thiserror::Error;

/// Errors reported by a positions provider
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Positions provider unavailable: {0}")]
    Unavailable(String),
    #[error("Invalid chart request: {0}")]
    InvalidRequest(String),
}

/// Source of body longitudes and house cusps for a moment and place.
///
/// Implementations wrap whatever ephemeris does the astronomy. The returned
/// [`ChartData`] carries no aspects; those are derived afterwards.
pub trait PositionsProvider {
    fn compute_positions(&self, request: &ChartRequest) -> Result<ChartData, ProviderError>;
}

/// Provider answering every request with the same table of positions.
///
/// Houses are only returned for requests that carry a location.
#[derive(Debug, Clone, Default)]
pub struct FixedPositions {
    planets: Vec<CelestialBody>,
    houses: Option<Vec<f64>>,
}

impl FixedPositions {
    pub fn new(planets: Vec<CelestialBody>) -> Self {
        Self {
            planets,
            houses: None,
        }
    }

    pub fn with_houses(mut self, houses: Vec<f64>) -> Self {
        self.houses = Some(houses);
        self
    }

    /// Positions for 1990-06-15 14:30 UTC, London
    pub fn sample() -> Self {
        let planets = [
            ("Sun", 84.35),
            ("Moon", 294.56),
            ("Mercury", 72.45),
            ("Venus", 56.78),
            ("Mars", 35.23),
            ("Jupiter", 96.12),
            ("Saturn", 298.67),
            ("Uranus", 283.45),
            ("Neptune", 287.89),
            ("Pluto", 234.12),
        ]
        .into_iter()
        .map(|(name, lon)| CelestialBody::new(name, lon))
        .collect();

        Self::new(planets).with_houses(vec![
            227.0, 258.0, 289.0, 320.0, 350.0, 15.0, 46.0, 76.0, 107.0, 138.0, 169.0, 198.0,
        ])
    }

    pub fn planets(&self) -> &[CelestialBody] {
        &self.planets
    }
}

impl PositionsProvider for FixedPositions {
    fn compute_positions(&self, request: &ChartRequest) -> Result<ChartData, ProviderError> {
        let houses = match request.location {
            Some(_) => self.houses.clone(),
            None => None,
        };
        Ok(ChartData {
            planets: self.planets.clone(),
            houses,
            aspects: None,
        })
    }
}
