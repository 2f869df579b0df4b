use crate::aspects::{AspectKind, AspectType};
use crate::rendering::primitives::Color;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur when loading a visual configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse visual config: {0}")]
    Parse(String),
    #[error("Invalid color {0:?}; expected #rgb or #rrggbb")]
    InvalidColor(String),
}

/// Color for aspect lines of the given type.
///
/// Types outside the five major aspects get a neutral gray.
pub fn aspect_color(aspect_type: &AspectType) -> Color {
    match aspect_type.kind() {
        Some(AspectKind::Conjunction) => Color::BLACK,
        Some(AspectKind::Opposition) => Color::rgb(0x66, 0x66, 0x66),
        Some(AspectKind::Trine) => Color::rgb(0x00, 0x00, 0xff),
        Some(AspectKind::Square) => Color::rgb(0xff, 0x00, 0x00),
        Some(AspectKind::Sextile) => Color::rgb(0x00, 0x99, 0x00),
        None => Color::rgb(0x99, 0x99, 0x99),
    }
}

/// Styling for chart elements. Geometry is fixed and lives in
/// [`crate::rendering::geometry`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisualConfig {
    // Background rings, outermost first
    pub outer_ring_color: Color,
    pub inner_ring_color: Color,
    pub middle_ring_color: Color,
    pub core_ring_color: Color,
    pub ring_stroke_width: f64,

    // Zodiac band
    pub zodiac_fill_even: Color,
    pub zodiac_fill_odd: Color,
    pub zodiac_stroke_color: Color,
    pub zodiac_stroke_width: f64,
    pub sign_font_size: f64,

    // House cusps
    pub cusp_color: Color,
    pub cusp_width: f64,
    pub angle_cusp_color: Color,
    pub angle_cusp_width: f64,
    pub house_label_color: Color,
    pub house_label_size: f64,

    pub aspect_stroke_width: f64,
    pub aspect_opacity: f64,

    pub planet_tick_color: Color,
    pub planet_tick_width: f64,
    pub planet_font_size: f64,

    /// Font family for sign and planet glyphs
    pub glyph_font: String,
}

impl Default for VisualConfig {
    fn default() -> Self {
        let gray = |v: u8| Color::rgb(v, v, v);
        Self {
            outer_ring_color: gray(0xcc),
            inner_ring_color: gray(0x99),
            middle_ring_color: gray(0xcc),
            core_ring_color: gray(0xee),
            ring_stroke_width: 1.0,

            zodiac_fill_even: gray(0xf9),
            zodiac_fill_odd: Color::WHITE,
            zodiac_stroke_color: gray(0xdd),
            zodiac_stroke_width: 0.5,
            sign_font_size: 20.0,

            cusp_color: gray(0x99),
            cusp_width: 1.0,
            angle_cusp_color: gray(0x33),
            angle_cusp_width: 2.0,
            house_label_color: gray(0x66),
            house_label_size: 14.0,

            aspect_stroke_width: 0.5,
            aspect_opacity: 0.6,

            planet_tick_color: gray(0x33),
            planet_tick_width: 1.0,
            planet_font_size: 16.0,

            glyph_font: "serif".to_string(),
        }
    }
}

impl VisualConfig {
    /// Parse a TOML document; keys left out keep their defaults
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        log::debug!("loaded visual config from {}", path.display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = VisualConfig::from_toml_str(
            r##"
            zodiac_fill_even = "#eeeeee"
            aspect_opacity = 0.9
            "##,
        )
        .unwrap();

        assert_eq!(config.zodiac_fill_even, Color::rgb(0xee, 0xee, 0xee));
        assert_eq!(config.aspect_opacity, 0.9);
        assert_eq!(config.zodiac_fill_odd, Color::WHITE);
        assert_eq!(config.glyph_font, "serif");
    }

    #[test]
    fn test_bad_color_is_rejected() {
        let err = VisualConfig::from_toml_str(r#"cusp_color = "grey""#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().contains("grey"));
    }

    #[test]
    fn test_unrecognized_aspect_is_neutral() {
        let other = AspectType::from("quincunx".to_string());
        assert_eq!(aspect_color(&other), Color::rgb(0x99, 0x99, 0x99));
        assert_eq!(
            aspect_color(&AspectKind::Trine.into()),
            Color::rgb(0, 0, 0xff)
        );
    }
}
