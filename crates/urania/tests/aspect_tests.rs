use urania::aspects::{angular_separation, detect_aspects, AspectCalculator, AspectKind};
use urania::ephemeris::{CelestialBody, FixedPositions};

fn bodies(list: &[(&str, f64)]) -> Vec<CelestialBody> {
    list.iter()
        .map(|(name, lon)| CelestialBody::new(*name, *lon))
        .collect()
}

#[test]
fn test_separation_is_symmetric_and_bounded() {
    let longitudes = [0.0, 0.5, 29.99, 90.0, 179.9, 180.0, 180.1, 270.0, 359.99];
    for &a in &longitudes {
        for &b in &longitudes {
            let ab = angular_separation(a, b);
            assert_eq!(ab, angular_separation(b, a));
            assert!((0.0..=180.0).contains(&ab), "{} vs {} gave {}", a, b, ab);
        }
    }
}

#[test]
fn test_same_longitude_is_exact_conjunction() {
    let aspects = detect_aspects(&bodies(&[("Sun", 123.4), ("Moon", 123.4)]));

    assert_eq!(aspects.len(), 1);
    assert_eq!(aspects[0].aspect_type, AspectKind::Conjunction);
    assert_eq!(aspects[0].orb, 0.0);
    assert!(aspects.iter().all(|a| a.kind() != Some(AspectKind::Opposition)));
}

#[test]
fn test_opposite_longitudes_are_exact_opposition() {
    let aspects = detect_aspects(&bodies(&[("Sun", 10.0), ("Moon", 190.0)]));

    assert_eq!(aspects.len(), 1);
    assert_eq!(aspects[0].kind(), Some(AspectKind::Opposition));
    assert_eq!(aspects[0].orb, 0.0);
}

#[test]
fn test_opposition_across_zero_degrees() {
    let aspects = detect_aspects(&bodies(&[("Sun", 355.0), ("Moon", 178.0)]));

    assert_eq!(aspects.len(), 1);
    assert_eq!(aspects[0].kind(), Some(AspectKind::Opposition));
    assert!((aspects[0].orb - 3.0).abs() < 1e-9);
}

#[test]
fn test_empty_and_single_body_yield_nothing() {
    assert!(detect_aspects(&[]).is_empty());
    assert!(detect_aspects(&bodies(&[("Sun", 0.0)])).is_empty());
}

#[test]
fn test_sun_moon_without_aspect() {
    let aspects = detect_aspects(&bodies(&[("Sun", 84.35), ("Moon", 294.56)]));
    assert!(aspects.is_empty());
}

#[test]
fn test_exact_square() {
    let aspects = detect_aspects(&bodies(&[("Sun", 0.0), ("Mars", 90.0)]));

    assert_eq!(aspects.len(), 1);
    let square = &aspects[0];
    assert_eq!(square.body1, "Sun");
    assert_eq!(square.body2, "Mars");
    assert_eq!(square.body1_angle, 0.0);
    assert_eq!(square.body2_angle, 90.0);
    assert_eq!(square.kind(), Some(AspectKind::Square));
    assert_eq!(square.orb, 0.0);
}

#[test]
fn test_orb_limits_are_inclusive_per_kind() {
    let calculator = AspectCalculator::new();

    // conjunction / opposition: 10
    assert_eq!(calculator.detect(&bodies(&[("A", 0.0), ("B", 10.0)])).len(), 1);
    assert!(calculator.detect(&bodies(&[("A", 0.0), ("B", 10.5)])).is_empty());
    // trine / square: 8
    assert_eq!(calculator.detect(&bodies(&[("A", 0.0), ("B", 128.0)])).len(), 1);
    assert!(calculator.detect(&bodies(&[("A", 0.0), ("B", 128.5)])).is_empty());
    assert_eq!(calculator.detect(&bodies(&[("A", 0.0), ("B", 98.0)])).len(), 1);
    // sextile: 6
    assert_eq!(calculator.detect(&bodies(&[("A", 0.0), ("B", 54.0)])).len(), 1);
    assert!(calculator.detect(&bodies(&[("A", 0.0), ("B", 53.5)])).is_empty());
}

#[test]
fn test_output_follows_pair_order() {
    let aspects = detect_aspects(&bodies(&[("A", 0.0), ("B", 60.0), ("C", 120.0)]));

    let summary: Vec<(&str, &str, AspectKind)> = aspects
        .iter()
        .map(|a| (a.body1.as_str(), a.body2.as_str(), a.kind().unwrap()))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("A", "B", AspectKind::Sextile),
            ("A", "C", AspectKind::Trine),
            ("B", "C", AspectKind::Sextile),
        ]
    );
}

#[test]
fn test_detection_is_deterministic() {
    let planets = FixedPositions::sample().planets().to_vec();
    assert_eq!(detect_aspects(&planets), detect_aspects(&planets));
}

#[test]
fn test_duplicate_names_are_distinct_bodies() {
    let aspects = detect_aspects(&bodies(&[("Sun", 0.0), ("Sun", 0.0), ("Sun", 180.0)]));

    let conjunctions = aspects
        .iter()
        .filter(|a| a.kind() == Some(AspectKind::Conjunction))
        .count();
    let oppositions = aspects
        .iter()
        .filter(|a| a.kind() == Some(AspectKind::Opposition))
        .count();
    assert_eq!(conjunctions, 1);
    assert_eq!(oppositions, 2);
}

#[test]
fn test_sample_chart_aspects() {
    let aspects = detect_aspects(FixedPositions::sample().planets());

    assert_eq!(aspects.len(), 11);
    let first = &aspects[0];
    assert_eq!((first.body1.as_str(), first.body2.as_str()), ("Moon", "Venus"));
    assert_eq!(first.kind(), Some(AspectKind::Trine));
    assert!((first.orb - 2.22).abs() < 1e-9);

    let mars_saturn = aspects
        .iter()
        .find(|a| a.body1 == "Mars" && a.body2 == "Saturn")
        .unwrap();
    assert_eq!(mars_saturn.kind(), Some(AspectKind::Square));
    assert!((mars_saturn.orb - 6.56).abs() < 1e-9);
}
