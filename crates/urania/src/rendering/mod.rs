pub mod generator;
pub mod geometry;
pub mod glyphs;
pub mod primitives;
pub mod spec;
pub mod svg;
pub mod visual_config;

pub use generator::{render_chart, ChartRenderer};
pub use spec::{ChartSpec, Layer, LayerId};
pub use svg::ChartDocument;
pub use visual_config::{ConfigError, VisualConfig};
