//! Natal chart aspects and SVG chart synthesis.
//!
//! Positions come from a [`PositionsProvider`]; [`detect_aspects`] finds the
//! aspects between them and [`ChartRenderer`] draws the wheel.

pub mod aspects;
pub mod chart;
pub mod ephemeris;
pub mod rendering;

pub use aspects::{detect_aspects, Aspect, AspectCalculator, AspectKind, AspectType};
pub use chart::{build_chart, ChartData, ChartDataError, ChartError};
pub use ephemeris::{CelestialBody, ChartRequest, FixedPositions, GeoLocation, PositionsProvider};
pub use rendering::{render_chart, ChartDocument, ChartRenderer, VisualConfig};
