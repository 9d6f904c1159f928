//! Client-side kinetics projection curve (GAS-004).
//!
//! Synthesizes the small (day, ppm) series the kinetics chart draws. This
//! is cosmetic interpolation only: it rescales the single concentration
//! value the service returned across a fixed curve shape. It is not a
//! re-derivation of the server-side model and must never be read as one —
//! the chart heading says "Theoretical" for exactly that reason.

use crate::wire::PredictionResult;

/// Fractional day offsets and matching ppm fractions for the points after
/// the day-zero anchor. The final entry pins the curve to the full
/// stagnation duration at the exact predicted concentration.
const CURVE_SHAPE: [(f64, f64); 3] = [(0.3, 0.35), (0.6, 0.7), (1.0, 1.0)];

/// Illustrative ppm values shown before the first prediction arrives, so
/// the chart is never empty.
const PLACEHOLDER_PPM: [f64; 3] = [10.0, 25.0, 40.0];

/// One point on the projection curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionPoint {
    pub day: u32,
    pub ppm: f64,
}

/// Build the projection curve for the given stagnation duration.
///
/// Always starts at `(0, 0.0)`. Subsequent days are rounded from fractional
/// offsets of `days_stagnant` and forced to ascend by at least one day, so
/// short durations cannot collapse two points onto the same day. The final
/// point's ppm equals `result.predicted_ppm` exactly when a result is
/// present; without one the placeholder series is used.
pub fn synthesize(days_stagnant: i32, result: Option<&PredictionResult>) -> Vec<ProjectionPoint> {
    let mut points = vec![ProjectionPoint { day: 0, ppm: 0.0 }];

    for (i, (day_frac, ppm_frac)) in CURVE_SHAPE.iter().enumerate() {
        let rounded = (days_stagnant.max(0) as f64 * day_frac).round() as u32;
        let prev_day = points[points.len() - 1].day;
        let day = rounded.max(prev_day + 1);
        let ppm = match result {
            Some(r) => r.predicted_ppm * ppm_frac,
            None => PLACEHOLDER_PPM[i],
        };
        points.push(ProjectionPoint { day, ppm });
    }

    points
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
