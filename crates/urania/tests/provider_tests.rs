use chrono::{TimeZone, Utc};
use urania::chart::{build_chart, ChartData, ChartError};
use urania::ephemeris::{
    CelestialBody, ChartRequest, FixedPositions, GeoLocation, PositionsProvider, ProviderError,
};
use urania::rendering::ChartRenderer;

fn london_request() -> ChartRequest {
    ChartRequest::new(
        Utc.with_ymd_and_hms(1990, 6, 15, 14, 30, 0).unwrap(),
        Some(GeoLocation {
            lat: 51.5074,
            lon: -0.1278,
        }),
    )
}

struct OfflineProvider;

impl PositionsProvider for OfflineProvider {
    fn compute_positions(&self, _request: &ChartRequest) -> Result<ChartData, ProviderError> {
        Err(ProviderError::Unavailable("ephemeris files missing".to_string()))
    }
}

#[test]
fn test_fixed_positions_return_table() {
    let provider = FixedPositions::new(vec![
        CelestialBody::new("Sun", 0.0),
        CelestialBody::new("Mars", 90.0),
    ])
    .with_houses(vec![0.0; 12]);

    let data = provider.compute_positions(&london_request()).unwrap();
    assert_eq!(data.planets.len(), 2);
    assert_eq!(data.houses.unwrap().len(), 12);
    assert!(data.aspects.is_none());
}

#[test]
fn test_no_houses_without_location() {
    let request = ChartRequest::new(Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap(), None);
    let data = FixedPositions::sample().compute_positions(&request).unwrap();

    assert_eq!(data.planets.len(), 10);
    assert!(data.houses.is_none());
}

#[test]
fn test_build_chart_attaches_aspects() {
    let data = build_chart(&FixedPositions::sample(), &london_request()).unwrap();

    assert_eq!(data.planets.len(), 10);
    assert_eq!(data.houses.as_ref().unwrap()[0], 227.0);
    assert_eq!(data.aspects.as_ref().unwrap().len(), 11);
}

#[test]
fn test_provider_failure_propagates() {
    let err = build_chart(&OfflineProvider, &london_request()).unwrap_err();
    assert!(matches!(err, ChartError::Provider(ProviderError::Unavailable(_))));
    assert!(err.to_string().contains("ephemeris files missing"));

    let err = ChartRenderer::new()
        .render_request(&OfflineProvider, &london_request())
        .unwrap_err();
    assert!(matches!(err, ChartError::Provider(_)));
}

#[test]
fn test_render_request_draws_every_layer() {
    let document = ChartRenderer::new()
        .render_request(&FixedPositions::sample(), &london_request())
        .unwrap();
    let svg = document.as_str();

    for id in ["background", "zodiac", "house-cusps", "aspects", "planets"] {
        assert!(svg.contains(&format!(r#"<g id="{}">"#, id)), "missing {}", id);
    }
    assert_eq!(svg.matches(r##"<use href="#dot""##).count(), 10);
}

#[test]
fn test_provider_as_trait_object() {
    let provider: Box<dyn PositionsProvider> = Box::new(FixedPositions::sample());
    let data = build_chart(provider.as_ref(), &london_request()).unwrap();
    assert!(!data.planets.is_empty());
}
