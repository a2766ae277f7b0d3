//! 2-D geometry primitives for landmark analysis.
//!
//! Joint angles are computed with the acos-of-normalized-dot-product form.
//! The atan2-of-cross-and-dot form is mathematically equivalent for the
//! unsigned angle in [0°, 180°] but can diverge in floating-point edge cases
//! near 0°/180°, so tests compare angles with a tolerance rather than exact
//! equality.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A 2-D point in frame coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point2 {
    /// Horizontal coordinate
    pub x: f32,
    /// Vertical coordinate
    pub y: f32,
}

impl Point2 {
    /// Creates a new point.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    #[must_use]
    pub fn distance_to(&self, other: Self) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// The angle at vertex `b` between the rays `b -> a` and `b -> c`, in
/// degrees, range [0, 180].
///
/// Degenerate input (either ray has zero length) yields 0 rather than
/// failing: a zero angle is treated as "not observed" everywhere downstream,
/// so collapsed landmarks simply drop out of correctness checks.
#[must_use]
pub fn angle_deg(a: Point2, b: Point2, c: Point2) -> f32 {
    let ab = Point2::new(a.x - b.x, a.y - b.y);
    let cb = Point2::new(c.x - b.x, c.y - b.y);

    let dot = ab.x * cb.x + ab.y * cb.y;
    let mag_ab = (ab.x * ab.x + ab.y * ab.y).sqrt();
    let mag_cb = (cb.x * cb.x + cb.y * cb.y).sqrt();

    if mag_ab == 0.0 || mag_cb == 0.0 {
        return 0.0;
    }

    let cos_angle = (dot / (mag_ab * mag_cb)).clamp(-1.0, 1.0);
    cos_angle.acos().to_degrees()
}

/// Absolute vertical distance between two points.
#[must_use]
pub fn vertical_gap(a: Point2, b: Point2) -> f32 {
    (a.y - b.y).abs()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn straight_line_is_180() {
        let angle = angle_deg(
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(2.0, 0.0),
        );
        assert_relative_eq!(angle, 180.0, epsilon = 0.5);
    }

    #[test]
    fn right_angle_is_90() {
        let angle = angle_deg(
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
        );
        assert_relative_eq!(angle, 90.0, epsilon = 0.5);
    }

    #[test]
    fn folded_rays_are_0() {
        let angle = angle_deg(
            Point2::new(2.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(2.0, 0.0),
        );
        assert_relative_eq!(angle, 0.0, epsilon = 0.5);
    }

    #[test]
    fn degenerate_ray_yields_0() {
        let p = Point2::new(1.0, 1.0);
        assert_eq!(angle_deg(p, p, Point2::new(2.0, 2.0)), 0.0);
        assert_eq!(angle_deg(Point2::new(2.0, 2.0), p, p), 0.0);
    }

    /// The two platform copies of the original analyzer computed this angle
    /// with different formulas (acos-of-dot vs atan2-of-cross-and-dot). Both
    /// must agree within tolerance on the unsigned angle.
    #[test]
    fn matches_atan2_form_within_tolerance() {
        let atan2_form = |a: Point2, b: Point2, c: Point2| -> f32 {
            let v1 = Point2::new(a.x - b.x, a.y - b.y);
            let v2 = Point2::new(c.x - b.x, c.y - b.y);
            let dot = v1.x * v2.x + v1.y * v2.y;
            let det = v1.x * v2.y - v1.y * v2.x;
            det.atan2(dot).to_degrees().abs()
        };

        let cases = [
            (
                Point2::new(0.0, 0.0),
                Point2::new(3.0, 1.0),
                Point2::new(5.0, -2.0),
            ),
            (
                Point2::new(-1.0, 4.0),
                Point2::new(0.0, 0.0),
                Point2::new(2.0, 2.0),
            ),
            (
                Point2::new(100.0, 250.0),
                Point2::new(120.0, 300.0),
                Point2::new(90.0, 360.0),
            ),
        ];

        for (a, b, c) in cases {
            assert_relative_eq!(angle_deg(a, b, c), atan2_form(a, b, c), epsilon = 0.5);
        }
    }

    #[test]
    fn vertical_gap_is_absolute() {
        let a = Point2::new(0.0, 10.0);
        let b = Point2::new(5.0, 4.0);
        assert_relative_eq!(vertical_gap(a, b), 6.0);
        assert_relative_eq!(vertical_gap(b, a), 6.0);
    }

    #[test]
    fn distance_is_euclidean() {
        let a = Point2::new(0.0, 0.0);
        let b = Point2::new(3.0, 4.0);
        assert_relative_eq!(a.distance_to(b), 5.0);
    }
}
