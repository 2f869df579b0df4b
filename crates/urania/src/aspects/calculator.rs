use crate::aspects::types::{Aspect, AspectKind};
use crate::ephemeris::types::CelestialBody;

/// Shorter-arc distance between two longitudes, always within `[0, 180]`.
///
/// Inputs do not need to be normalized to `[0, 360)`.
pub fn angular_separation(lon1: f64, lon2: f64) -> f64 {
    let raw_diff = (lon1 - lon2).abs() % 360.0;
    raw_diff.min(360.0 - raw_diff)
}

/// Aspect calculator
pub struct AspectCalculator;

impl AspectCalculator {
    /// Create a new aspect calculator
    pub fn new() -> Self {
        Self
    }

    /// Find every aspect between every pair of bodies.
    ///
    /// Pairs are visited in index order (`i < j`) and each pair is tested
    /// against [`AspectKind::ALL`] in order, so the result order is fixed for
    /// a given input. A pair can match more than one kind; all matches are
    /// kept.
    pub fn detect(&self, bodies: &[CelestialBody]) -> Vec<Aspect> {
        let mut aspects = Vec::new();

        for (i, body1) in bodies.iter().enumerate() {
            for body2 in &bodies[i + 1..] {
                for kind in AspectKind::ALL {
                    if let Some(orb) = self.orb_for(body1.longitude, body2.longitude, kind) {
                        aspects.push(Aspect {
                            body1: body1.name.clone(),
                            body2: body2.name.clone(),
                            body1_angle: body1.longitude,
                            body2_angle: body2.longitude,
                            aspect_type: kind.into(),
                            orb,
                        });
                    }
                }
            }
        }

        log::debug!(
            "detected {} aspects across {} bodies",
            aspects.len(),
            bodies.len()
        );
        aspects
    }

    /// Orb of `kind` between two longitudes, if it is within the kind's limit
    pub fn orb_for(&self, lon1: f64, lon2: f64, kind: AspectKind) -> Option<f64> {
        let orb = (angular_separation(lon1, lon2) - kind.angle()).abs();
        (orb <= kind.orb_limit()).then_some(orb)
    }
}

impl Default for AspectCalculator {
    fn default() -> Self {
        Self::new()
    }
}

/// Shorthand for [`AspectCalculator::detect`]
pub fn detect_aspects(bodies: &[CelestialBody]) -> Vec<Aspect> {
    AspectCalculator::new().detect(bodies)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_separation_takes_shorter_arc() {
        assert_eq!(angular_separation(10.0, 350.0), 20.0);
        assert_eq!(angular_separation(350.0, 10.0), 20.0);
        assert_eq!(angular_separation(0.0, 180.0), 180.0);
    }

    #[test]
    fn test_separation_handles_unnormalized_input() {
        assert!((angular_separation(-30.0, 30.0) - 60.0).abs() < 1e-9);
        assert!((angular_separation(720.0, 0.0)).abs() < 1e-9);
    }

    #[test]
    fn test_orb_for_respects_limit() {
        let calculator = AspectCalculator::new();
        assert_eq!(calculator.orb_for(0.0, 66.0, AspectKind::Sextile), Some(6.0));
        assert_eq!(calculator.orb_for(0.0, 66.5, AspectKind::Sextile), None);
    }
}
