//! SVG serialization of a [`ChartSpec`].

use crate::rendering::geometry::degree_to_pos;
use crate::rendering::primitives::{Color, Shape, Stroke, TextAnchor};
use crate::rendering::spec::ChartSpec;
use std::fmt;

/// Radius of the `dot` symbol placed under each planet
const DOT_RADIUS: f64 = 1.2;

/// A finished SVG document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartDocument(String);

impl ChartDocument {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ChartDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ChartDocument {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Number formatting for coordinates: at most three decimals, no trailing
/// zeros, never "-0".
fn fmt_num(value: f64) -> String {
    let mut s = format!("{:.3}", value);
    if s.contains('.') {
        while s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
    }
    if s == "-0" {
        s = "0".to_string();
    }
    s
}

/// Escape text for use in element content and attribute values
pub fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}

fn stroke_attrs(stroke: Option<&Stroke>) -> String {
    match stroke {
        Some(stroke) => format!(
            r#" stroke="{}" stroke-width="{}""#,
            stroke.color.to_hex(),
            fmt_num(stroke.width)
        ),
        None => String::new(),
    }
}

fn fill_attr(fill: Option<Color>) -> String {
    match fill {
        Some(color) => format!(r#" fill="{}""#, color.to_hex()),
        None => r#" fill="none""#.to_string(),
    }
}

fn anchor_attr(anchor: TextAnchor) -> &'static str {
    match anchor {
        TextAnchor::Start => "start",
        TextAnchor::Middle => "middle",
        TextAnchor::End => "end",
    }
}

fn write_shape(out: &mut String, shape: &Shape) {
    match shape {
        Shape::Circle {
            center,
            radius,
            fill,
            stroke,
        } => {
            out.push_str(&format!(
                r#"      <circle cx="{}" cy="{}" r="{}"{}{}/>"#,
                fmt_num(center.x),
                fmt_num(center.y),
                fmt_num(*radius),
                fill_attr(*fill),
                stroke_attrs(stroke.as_ref())
            ));
        }
        Shape::SignSegment {
            start_angle,
            end_angle,
            radius_inner,
            radius_outer,
            fill,
            stroke,
            ..
        } => {
            let outer_start = degree_to_pos(*start_angle, *radius_outer);
            let inner_start = degree_to_pos(*start_angle, *radius_inner);
            let inner_end = degree_to_pos(*end_angle, *radius_inner);
            let outer_end = degree_to_pos(*end_angle, *radius_outer);
            out.push_str(&format!(
                r#"      <path d="M {},{} L {},{} A {},{} 0 0,1 {},{} L {},{} A {},{} 0 0,0 {},{}"{}{}/>"#,
                fmt_num(outer_start.x),
                fmt_num(outer_start.y),
                fmt_num(inner_start.x),
                fmt_num(inner_start.y),
                fmt_num(*radius_inner),
                fmt_num(*radius_inner),
                fmt_num(inner_end.x),
                fmt_num(inner_end.y),
                fmt_num(outer_end.x),
                fmt_num(outer_end.y),
                fmt_num(*radius_outer),
                fmt_num(*radius_outer),
                fmt_num(outer_start.x),
                fmt_num(outer_start.y),
                fill_attr(Some(*fill)),
                stroke_attrs(stroke.as_ref())
            ));
        }
        Shape::Line { from, to, stroke } => {
            out.push_str(&format!(
                r#"      <line x1="{}" y1="{}" x2="{}" y2="{}"{}/>"#,
                fmt_num(from.x),
                fmt_num(from.y),
                fmt_num(to.x),
                fmt_num(to.y),
                stroke_attrs(Some(stroke))
            ));
        }
        Shape::AspectLine {
            from,
            to,
            aspect_type,
            color,
            width,
            opacity,
        } => {
            out.push_str(&format!(
                r#"      <line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}" opacity="{}" class="aspect {}"/>"#,
                fmt_num(from.x),
                fmt_num(from.y),
                fmt_num(to.x),
                fmt_num(to.y),
                color.to_hex(),
                fmt_num(*width),
                fmt_num(*opacity),
                escape_xml(aspect_type.as_str())
            ));
        }
        Shape::Text {
            position,
            content,
            size,
            color,
            font_family,
            anchor,
        } => {
            let mut attrs = format!(
                r#"x="{}" y="{}" text-anchor="{}" dominant-baseline="middle" font-size="{}""#,
                fmt_num(position.x),
                fmt_num(position.y),
                anchor_attr(*anchor),
                fmt_num(*size)
            );
            if let Some(family) = font_family {
                attrs.push_str(&format!(r#" font-family="{}""#, escape_xml(family)));
            }
            if let Some(color) = color {
                attrs.push_str(&format!(r#" fill="{}""#, color.to_hex()));
            }
            out.push_str(&format!("      <text {}>{}</text>", attrs, escape_xml(content)));
        }
        Shape::Marker {
            position,
            symbol_id,
            class,
        } => {
            out.push_str(&format!(
                r##"      <use href="#{}" x="{}" y="{}" class="{}"/>"##,
                escape_xml(symbol_id),
                fmt_num(position.x),
                fmt_num(position.y),
                escape_xml(class)
            ));
        }
    }
    out.push('\n');
}

/// Serialize a chart spec into a standalone SVG document
pub fn write_svg(spec: &ChartSpec) -> ChartDocument {
    let mut out = String::new();

    out.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 {} {}\" id=\"chart\">\n",
        fmt_num(spec.width),
        fmt_num(spec.height)
    ));
    out.push_str(&format!("  <title>{}</title>\n", escape_xml(&spec.title)));
    out.push_str("  <defs>\n");
    out.push_str("    <g id=\"dot\">\n");
    out.push_str(&format!(
        "      <circle cx=\"0\" cy=\"0\" r=\"{}\"/>\n",
        fmt_num(DOT_RADIUS)
    ));
    out.push_str("    </g>\n");
    out.push_str("  </defs>\n");
    out.push_str("  <g id=\"main\">\n");

    for layer in &spec.layers {
        out.push_str(&format!("    <g id=\"{}\">\n", layer.id));
        for shape in &layer.shapes {
            write_shape(&mut out, shape);
        }
        out.push_str("    </g>\n");
    }

    out.push_str("  </g>\n");
    out.push_str("</svg>\n");

    ChartDocument(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fmt_num_trims() {
        assert_eq!(fmt_num(300.0), "300");
        assert_eq!(fmt_num(1.25), "1.25");
        assert_eq!(fmt_num(45.000_000_1), "45");
        assert_eq!(fmt_num(-0.000_01), "0");
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("a<b & \"c\""), "a&lt;b &amp; &quot;c&quot;");
        assert_eq!(escape_xml("☉"), "☉");
    }
}
