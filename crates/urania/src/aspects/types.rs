use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The major aspects, in the order the calculator tests them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AspectKind {
    Conjunction,
    Opposition,
    Trine,
    Square,
    Sextile,
}

impl AspectKind {
    pub const ALL: [AspectKind; 5] = [
        AspectKind::Conjunction,
        AspectKind::Opposition,
        AspectKind::Trine,
        AspectKind::Square,
        AspectKind::Sextile,
    ];

    /// Exact angle for this aspect (0, 60, 90, 120, 180)
    pub fn angle(self) -> f64 {
        match self {
            AspectKind::Conjunction => 0.0,
            AspectKind::Opposition => 180.0,
            AspectKind::Trine => 120.0,
            AspectKind::Square => 90.0,
            AspectKind::Sextile => 60.0,
        }
    }

    /// Largest orb (inclusive) at which the aspect still counts
    pub fn orb_limit(self) -> f64 {
        match self {
            AspectKind::Conjunction | AspectKind::Opposition => 10.0,
            AspectKind::Trine | AspectKind::Square => 8.0,
            AspectKind::Sextile => 6.0,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            AspectKind::Conjunction => "conjunction",
            AspectKind::Opposition => "opposition",
            AspectKind::Trine => "trine",
            AspectKind::Square => "square",
            AspectKind::Sextile => "sextile",
        }
    }
}

impl fmt::Display for AspectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for AspectKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AspectKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or(())
    }
}

/// Aspect type as carried on an [`Aspect`].
///
/// Aspects computed here are always `Known`. Aspect lists handed in by a
/// caller may name kinds this crate does not compute; those are kept verbatim
/// so they can still be drawn (in the neutral color).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AspectType {
    Known(AspectKind),
    Unknown(String),
}

impl AspectType {
    pub fn kind(&self) -> Option<AspectKind> {
        match self {
            AspectType::Known(kind) => Some(*kind),
            AspectType::Unknown(_) => None,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            AspectType::Known(kind) => kind.name(),
            AspectType::Unknown(name) => name,
        }
    }
}

impl From<AspectKind> for AspectType {
    fn from(kind: AspectKind) -> Self {
        AspectType::Known(kind)
    }
}

impl From<String> for AspectType {
    fn from(name: String) -> Self {
        match name.parse::<AspectKind>() {
            Ok(kind) => AspectType::Known(kind),
            Err(()) => AspectType::Unknown(name),
        }
    }
}

impl From<AspectType> for String {
    fn from(aspect_type: AspectType) -> Self {
        match aspect_type {
            AspectType::Known(kind) => kind.name().to_string(),
            AspectType::Unknown(name) => name,
        }
    }
}

impl PartialEq<AspectKind> for AspectType {
    fn eq(&self, other: &AspectKind) -> bool {
        self.kind() == Some(*other)
    }
}

impl fmt::Display for AspectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// An aspect between two bodies of one chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Aspect {
    pub body1: String,
    pub body2: String,
    /// Longitude of `body1` in degrees
    pub body1_angle: f64,
    /// Longitude of `body2` in degrees
    pub body2_angle: f64,
    #[serde(rename = "type")]
    pub aspect_type: AspectType,
    /// Deviation from the exact angle, in degrees
    pub orb: f64,
}

impl Aspect {
    pub fn kind(&self) -> Option<AspectKind> {
        self.aspect_type.kind()
    }
}
