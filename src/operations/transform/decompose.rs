use tracing::debug;

use crate::geometry::curve::{AnyCurve, Curve, Line};
use crate::math::{Point3, SHORT_CURVE_TOLERANCE};

/// Bound line from `a` to `b`, or `None` when the points are closer than
/// [`SHORT_CURVE_TOLERANCE`].
#[must_use]
pub fn try_make_line(a: Point3, b: Point3) -> Option<Line> {
    if (b - a).norm() < SHORT_CURVE_TOLERANCE {
        return None;
    }
    Line::bound(a, b).ok()
}

/// Splits a curve into straight segments.
///
/// A line is returned as-is. Other bound curves become one segment per
/// pair of consecutive tessellation points, skipping pairs too short to
/// form a line. Unbound curves have no finite decomposition.
#[must_use]
pub fn lines(curve: &AnyCurve) -> Vec<Line> {
    if let AnyCurve::Line(line) = curve {
        return vec![line.clone()];
    }
    if !curve.is_bound() {
        return Vec::new();
    }
    curve
        .tessellate()
        .windows(2)
        .filter_map(|pair| {
            let line = try_make_line(pair[0], pair[1]);
            if line.is_none() {
                debug!(start = ?pair[0], end = ?pair[1], "skipping degenerate segment");
            }
            line
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::f64::consts::{PI, TAU};

    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::geometry::curve::{Arc, GenericCurve};
    use crate::math::Vector3;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    #[test]
    fn short_points_make_no_line() {
        assert!(try_make_line(p(0.0, 0.0, 0.0), p(1e-8, 0.0, 0.0)).is_none());
        let line = try_make_line(p(0.0, 0.0, 0.0), p(0.0, 2.0, 0.0)).unwrap();
        assert_abs_diff_eq!(line.length(), 2.0);
    }

    #[test]
    fn line_decomposes_to_itself() {
        let line = Line::bound(p(0.0, 0.0, 0.0), p(1.0, 2.0, 3.0)).unwrap();
        assert_eq!(lines(&line.clone().into()), vec![line]);
    }

    #[test]
    fn arc_decomposes_into_chained_chords() {
        let arc: AnyCurve = Arc::new(p(0.0, 0.0, 0.0), 3.0, Vector3::z(), Vector3::x(), 0.0, PI)
            .unwrap()
            .into();
        let chords = lines(&arc);
        assert!(chords.len() >= 4);
        assert_abs_diff_eq!(chords[0].start_point(), arc.start_point(), epsilon = 1e-9);
        assert_abs_diff_eq!(
            chords[chords.len() - 1].end_point(),
            arc.end_point(),
            epsilon = 1e-9
        );
        for pair in chords.windows(2) {
            assert_abs_diff_eq!(pair[0].end_point(), pair[1].start_point(), epsilon = 1e-9);
        }
    }

    #[test]
    fn repeated_samples_are_skipped() {
        let generic: AnyCurve = GenericCurve::new(vec![
            p(0.0, 0.0, 0.0),
            p(1.0, 0.0, 0.0),
            p(1.0, 0.0, 0.0),
            p(1.0, 1.0, 0.0),
        ])
        .unwrap()
        .into();
        assert_eq!(lines(&generic).len(), 2);
    }

    #[test]
    fn full_circle_decomposes_into_closed_loop() {
        let circle: AnyCurve = Arc::new(p(0.0, 0.0, 0.0), 1.0, Vector3::z(), Vector3::x(), 0.0, TAU)
            .unwrap()
            .into();
        let chords = lines(&circle);
        assert!(chords.len() >= 4);
        assert_abs_diff_eq!(
            chords[0].start_point(),
            chords[chords.len() - 1].end_point(),
            epsilon = 1e-9
        );
    }

    #[test]
    fn unbound_circle_has_no_segments_but_line_passes_through() {
        let circle: AnyCurve = Arc::new(p(0.0, 0.0, 0.0), 1.0, Vector3::z(), Vector3::x(), 0.0, TAU)
            .unwrap()
            .into();
        assert!(lines(&circle.make_unbound()).is_empty());
        let line: AnyCurve = Line::unbound(p(0.0, 0.0, 0.0), Vector3::x()).unwrap().into();
        assert_eq!(lines(&line).len(), 1);
    }
}
