//! Fixed wheel geometry. All lengths are in viewport units.

use crate::rendering::primitives::Point;

/// Side of the square viewport
pub const CANVAS_SIZE: f64 = 600.0;
pub const CENTER: Point = Point {
    x: CANVAS_SIZE / 2.0,
    y: CANVAS_SIZE / 2.0,
};

/// Outer edge of the zodiac band
pub const OUTER_RADIUS: f64 = 255.0;
/// Inner edge of the zodiac band; house cusp lines start here
pub const INNER_RADIUS: f64 = 210.0;
pub const MIDDLE_RADIUS: f64 = 186.0;
pub const CORE_RADIUS: f64 = 146.0;

/// Where planet markers and aspect line ends sit
pub const PLANET_RADIUS: f64 = 149.0;
pub const PLANET_TICK_LENGTH: f64 = 20.0;
pub const PLANET_LABEL_INSET: f64 = 30.0;

/// Cusp lines for the Ascendant and Midheaven run in to this radius
pub const ANGLE_CUSP_END_RADIUS: f64 = 40.0;
pub const CUSP_END_RADIUS: f64 = 90.0;
pub const HOUSE_LABEL_RADIUS: f64 = 80.0;
/// House numbers sit this many degrees past their cusp
pub const HOUSE_LABEL_OFFSET: f64 = 5.0;

/// Aspects at or beyond this orb are not drawn, whatever their kind
pub const ASPECT_DISPLAY_MAX_ORB: f64 = 8.0;

/// Ecliptic degrees to viewport coordinates.
///
/// 0° sits at the top of the wheel and longitude grows clockwise on screen.
/// Any real `deg` is accepted.
pub fn degree_to_pos(deg: f64, radius: f64) -> Point {
    let rad = (deg - 90.0).to_radians();
    Point {
        x: CENTER.x + radius * rad.cos(),
        y: CENTER.y + radius * rad.sin(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_zero_degrees_is_top() {
        let p = degree_to_pos(0.0, 100.0);
        assert!(close(p.x, 300.0));
        assert!(close(p.y, 200.0));
    }

    #[test]
    fn test_ninety_degrees_is_right() {
        let p = degree_to_pos(90.0, 100.0);
        assert!(close(p.x, 400.0));
        assert!(close(p.y, 300.0));
    }

    #[test]
    fn test_mapping_is_periodic() {
        let a = degree_to_pos(30.0, 149.0);
        let b = degree_to_pos(-330.0, 149.0);
        assert!(close(a.x, b.x));
        assert!(close(a.y, b.y));
    }
}
