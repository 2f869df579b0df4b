use crate::aspects::Aspect;
use crate::chart::{build_chart, ChartData, ChartError};
use crate::ephemeris::{CelestialBody, ChartRequest, PositionsProvider};
use crate::rendering::geometry::{
    degree_to_pos, ANGLE_CUSP_END_RADIUS, ASPECT_DISPLAY_MAX_ORB, CANVAS_SIZE, CENTER,
    CORE_RADIUS, CUSP_END_RADIUS, HOUSE_LABEL_OFFSET, HOUSE_LABEL_RADIUS, INNER_RADIUS,
    MIDDLE_RADIUS, OUTER_RADIUS, PLANET_LABEL_INSET, PLANET_RADIUS, PLANET_TICK_LENGTH,
};
use crate::rendering::glyphs::{body_label, ZodiacSign};
use crate::rendering::primitives::{Shape, Stroke, TextAnchor};
use crate::rendering::spec::{ChartSpec, LayerId};
use crate::rendering::svg::{write_svg, ChartDocument};
use crate::rendering::visual_config::{aspect_color, VisualConfig};
use chrono::NaiveDate;

const HOUSE_COUNT: usize = 12;
/// Cusp indices drawn as chart angles (Ascendant, Midheaven)
const ANGLE_CUSPS: [usize; 2] = [0, 9];

/// Turns chart data into a [`ChartSpec`] and from there into SVG
#[derive(Debug, Clone, Default)]
pub struct ChartRenderer {
    visual_config: VisualConfig,
    date: Option<NaiveDate>,
}

impl ChartRenderer {
    /// Create a renderer with the default styling
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(visual_config: VisualConfig) -> Self {
        Self {
            visual_config,
            date: None,
        }
    }

    /// Put `date` in the document title
    pub fn dated(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn visual_config(&self) -> &VisualConfig {
        &self.visual_config
    }

    pub fn title(&self) -> String {
        match self.date {
            Some(date) => format!("Birth Chart - {}", date.format("%Y-%m-%d")),
            None => "Birth Chart".to_string(),
        }
    }

    /// Build the layered chart description for `data`
    pub fn build_spec(&self, data: &ChartData) -> ChartSpec {
        let mut spec = ChartSpec::new(CANVAS_SIZE, CANVAS_SIZE, self.title());

        spec.push_layer(LayerId::Background, self.background_shapes());
        spec.push_layer(LayerId::Zodiac, self.zodiac_shapes());

        match data.houses.as_deref() {
            Some(houses) if houses.len() >= HOUSE_COUNT => {
                spec.push_layer(LayerId::HouseCusps, self.house_shapes(houses));
            }
            Some(houses) => {
                log::warn!(
                    "only {} house cusps supplied, need {}; skipping house layer",
                    houses.len(),
                    HOUSE_COUNT
                );
            }
            None => {}
        }

        if let Some(aspects) = data.aspects.as_deref().filter(|a| !a.is_empty()) {
            spec.push_layer(LayerId::Aspects, self.aspect_shapes(aspects));
        }

        if !data.planets.is_empty() {
            spec.push_layer(LayerId::Planets, self.planet_shapes(&data.planets));
        }

        log::debug!(
            "chart layers: {}",
            spec.layers
                .iter()
                .map(|layer| layer.id.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        );
        spec
    }

    /// Render `data` to an SVG document
    pub fn render(&self, data: &ChartData) -> ChartDocument {
        write_svg(&self.build_spec(data))
    }

    /// Parse chart JSON and render it; malformed input yields an error and no
    /// document
    pub fn render_json(&self, json: &str) -> Result<ChartDocument, ChartError> {
        let data = ChartData::from_json(json)?;
        Ok(self.render(&data))
    }

    /// Fetch positions from `provider`, detect aspects and render
    pub fn render_request<P: PositionsProvider + ?Sized>(
        &self,
        provider: &P,
        request: &ChartRequest,
    ) -> Result<ChartDocument, ChartError> {
        let data = build_chart(provider, request)?;
        Ok(self.render(&data))
    }

    fn background_shapes(&self) -> Vec<Shape> {
        let cfg = &self.visual_config;
        [
            (OUTER_RADIUS, cfg.outer_ring_color),
            (INNER_RADIUS, cfg.inner_ring_color),
            (MIDDLE_RADIUS, cfg.middle_ring_color),
            (CORE_RADIUS, cfg.core_ring_color),
        ]
        .into_iter()
        .map(|(radius, color)| Shape::Circle {
            center: CENTER,
            radius,
            fill: None,
            stroke: Some(Stroke {
                color,
                width: cfg.ring_stroke_width,
            }),
        })
        .collect()
    }

    fn zodiac_shapes(&self) -> Vec<Shape> {
        let cfg = &self.visual_config;
        let label_radius = (OUTER_RADIUS + INNER_RADIUS) / 2.0;
        let mut shapes = Vec::with_capacity(ZodiacSign::ALL.len() * 2);

        for (index, sign) in ZodiacSign::ALL.into_iter().enumerate() {
            let start_angle = sign.start_longitude();
            let fill = if index % 2 == 0 {
                cfg.zodiac_fill_even
            } else {
                cfg.zodiac_fill_odd
            };

            shapes.push(Shape::SignSegment {
                sign,
                start_angle,
                end_angle: start_angle + 30.0,
                radius_inner: INNER_RADIUS,
                radius_outer: OUTER_RADIUS,
                fill,
                stroke: Some(Stroke {
                    color: cfg.zodiac_stroke_color,
                    width: cfg.zodiac_stroke_width,
                }),
            });
            shapes.push(Shape::Text {
                position: degree_to_pos(start_angle + 15.0, label_radius),
                content: sign.symbol().to_string(),
                size: cfg.sign_font_size,
                color: None,
                font_family: Some(cfg.glyph_font.clone()),
                anchor: TextAnchor::Middle,
            });
        }

        shapes
    }

    fn house_shapes(&self, houses: &[f64]) -> Vec<Shape> {
        let cfg = &self.visual_config;
        let mut shapes = Vec::with_capacity(HOUSE_COUNT * 2);

        for (index, &cusp) in houses.iter().take(HOUSE_COUNT).enumerate() {
            let is_angle = ANGLE_CUSPS.contains(&index);
            let (end_radius, color, width) = if is_angle {
                (ANGLE_CUSP_END_RADIUS, cfg.angle_cusp_color, cfg.angle_cusp_width)
            } else {
                (CUSP_END_RADIUS, cfg.cusp_color, cfg.cusp_width)
            };

            shapes.push(Shape::Line {
                from: degree_to_pos(cusp, INNER_RADIUS),
                to: degree_to_pos(cusp, end_radius),
                stroke: Stroke { color, width },
            });
            shapes.push(Shape::Text {
                position: degree_to_pos(cusp + HOUSE_LABEL_OFFSET, HOUSE_LABEL_RADIUS),
                content: (index + 1).to_string(),
                size: cfg.house_label_size,
                color: Some(cfg.house_label_color),
                font_family: None,
                anchor: TextAnchor::Middle,
            });
        }

        shapes
    }

    /// Lines for aspects tighter than [`ASPECT_DISPLAY_MAX_ORB`], in input order
    fn aspect_shapes(&self, aspects: &[Aspect]) -> Vec<Shape> {
        let cfg = &self.visual_config;
        aspects
            .iter()
            .filter(|aspect| aspect.orb < ASPECT_DISPLAY_MAX_ORB)
            .map(|aspect| Shape::AspectLine {
                from: degree_to_pos(aspect.body1_angle, PLANET_RADIUS),
                to: degree_to_pos(aspect.body2_angle, PLANET_RADIUS),
                aspect_type: aspect.aspect_type.clone(),
                color: aspect_color(&aspect.aspect_type),
                width: cfg.aspect_stroke_width,
                opacity: cfg.aspect_opacity,
            })
            .collect()
    }

    fn planet_shapes(&self, planets: &[CelestialBody]) -> Vec<Shape> {
        let cfg = &self.visual_config;
        let mut shapes = Vec::with_capacity(planets.len() * 3);

        for planet in planets {
            let pos = degree_to_pos(planet.longitude, PLANET_RADIUS);
            shapes.push(Shape::Line {
                from: degree_to_pos(planet.longitude, PLANET_RADIUS - PLANET_TICK_LENGTH),
                to: pos,
                stroke: Stroke {
                    color: cfg.planet_tick_color,
                    width: cfg.planet_tick_width,
                },
            });
            shapes.push(Shape::Marker {
                position: pos,
                symbol_id: "dot".to_string(),
                class: format!("dot {}", planet.name),
            });
            shapes.push(Shape::Text {
                position: degree_to_pos(planet.longitude, PLANET_RADIUS - PLANET_LABEL_INSET),
                content: body_label(&planet.name).into_owned(),
                size: cfg.planet_font_size,
                color: None,
                font_family: Some(cfg.glyph_font.clone()),
                anchor: TextAnchor::Middle,
            });
        }

        shapes
    }
}

/// Render `data` with the default styling
pub fn render_chart(data: &ChartData) -> ChartDocument {
    ChartRenderer::new().render(data)
}
