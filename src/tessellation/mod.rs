//! Chord approximation of curved geometry.

use std::f64::consts::PI;

/// Parameters controlling tessellation quality.
#[derive(Debug, Clone, Copy)]
pub struct TessellationParams {
    /// Maximum allowed deviation (sagitta) between a curve and its chords.
    pub tolerance: f64,
    /// Minimum number of segments for curves.
    pub min_segments: usize,
    /// Maximum number of segments for curves.
    pub max_segments: usize,
}

impl Default for TessellationParams {
    fn default() -> Self {
        Self {
            tolerance: 0.01,
            min_segments: 4,
            max_segments: 256,
        }
    }
}

impl TessellationParams {
    /// Number of chords needed to approximate an arc of `radius` sweeping
    /// `abs_sweep` radians, clamped to `[min_segments, max_segments]`.
    ///
    /// When the bounds are inverted, `max_segments` wins.
    #[must_use]
    pub fn arc_segment_count(&self, radius: f64, abs_sweep: f64) -> usize {
        let max = self.max_segments.max(1);
        let min = self.min_segments.max(1).min(max);
        arc_subdivision_count(radius, abs_sweep, self.tolerance).clamp(min, max)
    }
}

/// Computes the number of line segments needed to approximate an arc
/// within the given tolerance.
fn arc_subdivision_count(radius: f64, abs_sweep: f64, tolerance: f64) -> usize {
    if radius < 1e-12 || abs_sweep < 1e-12 || tolerance <= 0.0 {
        return 1;
    }
    // From the sagitta formula: sagitta = r * (1 - cos(θ/2))
    // For a given tolerance: θ = 2 * acos(1 - tolerance/r)
    let max_angle = if tolerance >= radius {
        PI
    } else {
        2.0 * (1.0 - tolerance / radius).acos()
    };
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let n = (abs_sweep / max_angle).ceil() as usize;
    n.max(1)
}
