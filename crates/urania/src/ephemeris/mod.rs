pub mod provider;
pub mod types;

pub use provider::{FixedPositions, PositionsProvider, ProviderError};
pub use types::{CelestialBody, ChartRequest, GeoLocation};
