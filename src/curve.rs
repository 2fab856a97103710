//! # Orbit curve sampling
//!
//! Sweeps the true anomaly through one full revolution, solving the
//! heliocentric position at each step and mapping it into scene space, to
//! produce the closed polyline the renderer draws.
//!
//! The sweep is inclusive of both 0° and 360°, so the first and last points
//! coincide and the drawn loop is seamless. Sampling is all-or-nothing: the
//! first failing sample aborts the sweep and no partial curve escapes.

use serde::Serialize;

use crate::cometa_errors::CometaError;
use crate::constants::FULL_TURN_DEG;
use crate::heliocentric::position_at;
use crate::keplerian_element::KeplerianElements;
use crate::scene_frame::{SceneFrame, ScenePosition};

/// A closed orbit polyline in scene space: `n + 1` points for sample count
/// `n ≥ 1`, first and last coinciding within floating tolerance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrbitCurve {
    points: Vec<ScenePosition>,
}

impl OrbitCurve {
    pub fn points(&self) -> &[ScenePosition] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// First and last points coincide within `tolerance` scene units.
    pub fn is_closed(&self, tolerance: f64) -> bool {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => first.distance(last) <= tolerance,
            _ => false,
        }
    }
}

/// Sample one full revolution of an orbit into a closed scene-space curve.
///
/// Generates anomalies `0°, 360/n°, …, 360°` (inclusive at both ends; a
/// sample count of 0 clamps to one subdivision, yielding the degenerate
/// 2-point closed curve), solves each through
/// [`position_at`] and maps the result with `frame`.
///
/// Pure: identical `(elements, n)` against the same frame always yield an
/// identical curve, which is what makes [`CurveCache`] sound.
///
/// Arguments
/// ---------
/// * `elements`: the orbit to trace.
/// * `n`: number of anomaly subdivisions (the curve has `n + 1` points).
/// * `frame`: AU → scene mapping applied to every sample.
///
/// Return
/// ------
/// * The closed curve, or [`CometaError::ComputationAborted`] carrying the
///   index of the first failing sample and the underlying error.
pub fn sample_orbit(
    elements: &KeplerianElements,
    n: usize,
    frame: &SceneFrame,
) -> Result<OrbitCurve, CometaError> {
    let steps = n.max(1);
    let step_deg = FULL_TURN_DEG / steps as f64;

    let mut points = Vec::with_capacity(steps + 1);
    for index in 0..=steps {
        let true_anomaly = index as f64 * step_deg;
        let sample = position_at(elements, true_anomaly)
            .and_then(|position| frame.to_scene(position))
            .map_err(|source| CometaError::ComputationAborted {
                index,
                source: Box::new(source),
            })?;
        points.push(sample);
    }

    Ok(OrbitCurve { points })
}

/// Last-value memoization of [`sample_orbit`], keyed by `(elements, n)`.
///
/// The renderer recomputes nothing between frames as long as
/// the element set identity is unchanged; a new submission or history
/// selection changes the key and invalidates the entry. Errors are never
/// cached.
#[derive(Debug, Default)]
pub struct CurveCache {
    entry: Option<((KeplerianElements, usize), OrbitCurve)>,
}

impl CurveCache {
    pub fn new() -> Self {
        CurveCache::default()
    }

    /// Return the cached curve for `(elements, n)`, recomputing on a key miss.
    pub fn curve(
        &mut self,
        elements: &KeplerianElements,
        n: usize,
        frame: &SceneFrame,
    ) -> Result<&OrbitCurve, CometaError> {
        let key = (*elements, n);
        let hit = matches!(&self.entry, Some((cached, _)) if *cached == key);
        if !hit {
            let curve = sample_orbit(elements, n, frame)?;
            self.entry = Some((key, curve));
        }

        match &self.entry {
            Some((_, curve)) => Ok(curve),
            None => unreachable!("cache entry filled on the line above"),
        }
    }

    /// Drop the cached entry.
    pub fn invalidate(&mut self) {
        self.entry = None;
    }
}

#[cfg(test)]
mod curve_test {
    use super::*;
    use approx::assert_relative_eq;

    use crate::keplerian_element::test_keplerian_element::halley_like;

    #[test]
    fn test_curve_is_closed() {
        let frame = SceneFrame::default();
        for &n in &[1usize, 2, 7, 200] {
            let curve = sample_orbit(&halley_like(), n, &frame).unwrap();
            assert_eq!(curve.len(), n + 1);
            assert!(curve.is_closed(1e-9), "open curve for n = {n}");
        }
    }

    #[test]
    fn test_zero_samples_degenerates_to_two_equal_points() {
        let frame = SceneFrame::default();
        let curve = sample_orbit(&halley_like(), 0, &frame).unwrap();
        assert_eq!(curve.len(), 2);
        let points = curve.points();
        assert_relative_eq!(points[0].x, points[1].x, epsilon = 1e-9);
        assert_relative_eq!(points[0].y, points[1].y, epsilon = 1e-9);
        assert_relative_eq!(points[0].z, points[1].z, epsilon = 1e-9);
    }

    #[test]
    fn test_sampling_is_deterministic() {
        let frame = SceneFrame::default();
        let first = sample_orbit(&halley_like(), 64, &frame).unwrap();
        let second = sample_orbit(&halley_like(), 64, &frame).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_abort_reports_first_sample() {
        let frame = SceneFrame::default();
        let mut hyperbolic = halley_like();
        hyperbolic.eccentricity = 1.5;

        match sample_orbit(&hyperbolic, 16, &frame) {
            Err(CometaError::ComputationAborted { index, source }) => {
                assert_eq!(index, 0);
                assert!(matches!(
                    *source,
                    CometaError::InvalidElement { field: "eccentricity", .. }
                ));
            }
            other => panic!("expected ComputationAborted, got {other:?}"),
        }
    }

    #[test]
    fn test_cache_returns_identical_curve_on_hit() {
        let frame = SceneFrame::default();
        let mut cache = CurveCache::new();
        let elements = halley_like();

        let first = cache.curve(&elements, 32, &frame).unwrap().clone();
        let second = cache.curve(&elements, 32, &frame).unwrap().clone();
        assert_eq!(first, second);
    }

    #[test]
    fn test_cache_invalidates_on_key_change() {
        let frame = SceneFrame::default();
        let mut cache = CurveCache::new();
        let elements = halley_like();

        let coarse = cache.curve(&elements, 8, &frame).unwrap().clone();
        let fine = cache.curve(&elements, 16, &frame).unwrap().clone();
        assert_ne!(coarse.len(), fine.len());

        let mut moved = elements;
        moved.semi_major_axis = 5.0;
        let other = cache.curve(&moved, 16, &frame).unwrap().clone();
        assert_ne!(fine, other);
    }

    #[test]
    fn test_cache_does_not_retain_errors() {
        let frame = SceneFrame::default();
        let mut cache = CurveCache::new();

        let mut hyperbolic = halley_like();
        hyperbolic.eccentricity = 1.5;
        assert!(cache.curve(&hyperbolic, 8, &frame).is_err());

        // a valid set right after the failure still samples cleanly
        let curve = cache.curve(&halley_like(), 8, &frame).unwrap();
        assert_eq!(curve.len(), 9);
    }

    #[test]
    fn test_explicit_invalidation_recomputes() {
        let frame = SceneFrame::default();
        let mut cache = CurveCache::new();
        let elements = halley_like();

        let before = cache.curve(&elements, 8, &frame).unwrap().clone();
        cache.invalidate();
        let after = cache.curve(&elements, 8, &frame).unwrap().clone();
        assert_eq!(before, after);
    }
}
