use crate::rendering::primitives::{Point, Shape};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Drawing layers, in paint order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LayerId {
    Background,
    Zodiac,
    HouseCusps,
    Aspects,
    Planets,
}

impl LayerId {
    /// Group id used in the SVG document
    pub fn as_str(self) -> &'static str {
        match self {
            LayerId::Background => "background",
            LayerId::Zodiac => "zodiac",
            LayerId::HouseCusps => "house-cusps",
            LayerId::Aspects => "aspects",
            LayerId::Planets => "planets",
        }
    }
}

impl fmt::Display for LayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    pub id: LayerId,
    pub shapes: Vec<Shape>,
}

/// Chart specification - declarative description of chart to render
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub width: f64,
    pub height: f64,
    pub center: Point,
    pub title: String,
    /// Only the layers that have something to draw
    pub layers: Vec<Layer>,
}

impl ChartSpec {
    /// Create a new empty chart spec
    pub fn new(width: f64, height: f64, title: impl Into<String>) -> Self {
        Self {
            width,
            height,
            center: Point {
                x: width / 2.0,
                y: height / 2.0,
            },
            title: title.into(),
            layers: Vec::new(),
        }
    }

    pub fn layer(&self, id: LayerId) -> Option<&Layer> {
        self.layers.iter().find(|layer| layer.id == id)
    }

    pub fn push_layer(&mut self, id: LayerId, shapes: Vec<Shape>) {
        self.layers.push(Layer { id, shapes });
    }
}
