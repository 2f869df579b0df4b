use crate::aspects::Aspect;
use crate::ephemeris::CelestialBody;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Errors raised while reading chart input
#[derive(Error, Debug)]
pub enum ChartDataError {
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),
    #[error("Invalid TOML: {0}")]
    InvalidToml(String),
    #[error("Missing required field: {0}")]
    MissingField(String),
    #[error("Invalid value for {field}: {message}")]
    InvalidFieldValue { field: String, message: String },
}

/// Everything the renderer draws.
///
/// `houses` and `aspects` are optional; leaving one out drops the matching
/// layer from the chart. An empty `planets` list drops the planet layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    #[serde(default)]
    pub planets: Vec<CelestialBody>,
    /// House cusps in degrees; index 0 is the Ascendant, index 9 the Midheaven
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub houses: Option<Vec<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aspects: Option<Vec<Aspect>>,
}

impl ChartData {
    pub fn new(planets: Vec<CelestialBody>) -> Self {
        Self {
            planets,
            houses: None,
            aspects: None,
        }
    }

    pub fn with_houses(mut self, houses: Vec<f64>) -> Self {
        self.houses = Some(houses);
        self
    }

    pub fn with_aspects(mut self, aspects: Vec<Aspect>) -> Self {
        self.aspects = Some(aspects);
        self
    }

    /// Parse chart input from JSON, rejecting malformed fields
    pub fn from_json(json: &str) -> Result<Self, ChartDataError> {
        let parsed: Value =
            serde_json::from_str(json).map_err(|e| ChartDataError::InvalidJson(e.to_string()))?;
        Self::from_value(parsed)
    }

    /// Parse chart input from TOML, with the same checks as [`Self::from_json`]
    pub fn from_toml(text: &str) -> Result<Self, ChartDataError> {
        let parsed: Value =
            toml::from_str(text).map_err(|e| ChartDataError::InvalidToml(e.to_string()))?;
        Self::from_value(parsed)
    }

    fn from_value(value: Value) -> Result<Self, ChartDataError> {
        validate_chart_data(&value)?;
        serde_json::from_value(value).map_err(|e| ChartDataError::InvalidFieldValue {
            field: "chart".to_string(),
            message: e.to_string(),
        })
    }
}

fn invalid(field: impl Into<String>, message: &str) -> ChartDataError {
    ChartDataError::InvalidFieldValue {
        field: field.into(),
        message: message.to_string(),
    }
}

fn validate_chart_data(value: &Value) -> Result<(), ChartDataError> {
    let obj = value
        .as_object()
        .ok_or_else(|| invalid("chart", "chart data must be an object"))?;

    if let Some(planets) = optional_array(obj, "planets")? {
        for (index, planet) in planets.iter().enumerate() {
            let path = format!("planets[{}]", index);
            let planet = planet
                .as_object()
                .ok_or_else(|| invalid(path.as_str(), "planet must be an object"))?;
            require_string(planet, "name", &path)?;
            require_number(planet, "longitude", &path)?;
        }
    }

    if let Some(houses) = optional_array(obj, "houses")? {
        for (index, cusp) in houses.iter().enumerate() {
            if !cusp.is_number() {
                return Err(invalid(
                    format!("houses[{}]", index),
                    "house cusp must be a number",
                ));
            }
        }
    }

    if let Some(aspects) = optional_array(obj, "aspects")? {
        for (index, aspect) in aspects.iter().enumerate() {
            let path = format!("aspects[{}]", index);
            let aspect = aspect
                .as_object()
                .ok_or_else(|| invalid(path.as_str(), "aspect must be an object"))?;
            require_string(aspect, "body1", &path)?;
            require_string(aspect, "body2", &path)?;
            require_number(aspect, "body1Angle", &path)?;
            require_number(aspect, "body2Angle", &path)?;
            require_string(aspect, "type", &path)?;
            require_number(aspect, "orb", &path)?;
        }
    }

    Ok(())
}

/// `Ok(None)` when the key is absent or null
fn optional_array<'a>(
    obj: &'a Map<String, Value>,
    key: &str,
) -> Result<Option<&'a Vec<Value>>, ChartDataError> {
    match obj.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Array(items)) => Ok(Some(items)),
        Some(_) => Err(invalid(key, "must be an array")),
    }
}

fn require_string(obj: &Map<String, Value>, key: &str, path: &str) -> Result<(), ChartDataError> {
    match obj.get(key) {
        None => Err(ChartDataError::MissingField(format!("{}.{}", path, key))),
        Some(Value::String(_)) => Ok(()),
        Some(_) => Err(invalid(format!("{}.{}", path, key), "must be a string")),
    }
}

fn require_number(obj: &Map<String, Value>, key: &str, path: &str) -> Result<(), ChartDataError> {
    match obj.get(key) {
        None => Err(ChartDataError::MissingField(format!("{}.{}", path, key))),
        Some(Value::Number(_)) => Ok(()),
        Some(_) => Err(invalid(format!("{}.{}", path, key), "must be a number")),
    }
}
