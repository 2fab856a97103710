//! # Closest-approach search
//!
//! Finds the time at which the target body comes nearest to the reference
//! body, by minimizing their heliocentric separation over a bounded window of
//! two-body motion.
//!
//! The separation over a long window oscillates with both orbital periods, so
//! the search first scans the window coarsely to bracket the best candidate,
//! then refines the bracket by golden-section down to the time tolerance.

use serde::Serialize;

use crate::cometa_errors::CometaError;
use crate::constants::Au;
use crate::heliocentric::current_position;
use crate::kepler::propagate;
use crate::keplerian_element::KeplerianElements;

/// Inverse golden ratio, the section constant of the refinement loop.
const INVPHI: f64 = 0.618_033_988_749_894_8;

/// Abscissa tolerance of the refinement, in days.
const TIME_TOLERANCE_DAYS: f64 = 1e-8;

/// Coarse-scan density: at most one sample per this many days.
const SCAN_STEP_DAYS: f64 = 30.0;

/// Bounds on the coarse-scan sample count.
const SCAN_MIN_SAMPLES: usize = 64;
const SCAN_MAX_SAMPLES: usize = 4096;

/// Time and separation of the target body's closest approach to the
/// reference body.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ApproachEvent {
    /// Days past the element sets' common reference instant.
    pub days_from_epoch: f64,
    /// Minimum heliocentric separation, in AU.
    pub distance_au: Au,
}

/// Heliocentric separation of the two bodies `t` days past epoch.
fn separation_at(
    target: &KeplerianElements,
    reference: &KeplerianElements,
    t: f64,
) -> Result<Au, CometaError> {
    let target_pos = current_position(&propagate(target, t)?)?;
    let reference_pos = current_position(&propagate(reference, t)?)?;
    Ok((target_pos - reference_pos).norm())
}

/// Find the closest approach between two bodies over `[0, window_days]`.
///
/// Both element sets must describe closed ellipses sharing the same reference
/// instant; the window must be finite and positive.
///
/// Arguments
/// ---------
/// * `target`: the body of interest (the comet).
/// * `reference`: the body approached (normally the Earth-like reference).
/// * `window_days`: length of the search window, in days.
///
/// Return
/// ------
/// * The [`ApproachEvent`] at the window's minimum separation, or
///   [`CometaError::InvalidSearchWindow`] for a degenerate window, or any
///   propagation error from the underlying two-body motion.
pub fn closest_approach(
    target: &KeplerianElements,
    reference: &KeplerianElements,
    window_days: f64,
) -> Result<ApproachEvent, CometaError> {
    if !window_days.is_finite() || window_days <= 0.0 {
        return Err(CometaError::InvalidSearchWindow { window_days });
    }
    target.validate()?;
    reference.validate()?;

    // Coarse scan: bracket the best sample between its two neighbors.
    let samples = ((window_days / SCAN_STEP_DAYS).ceil() as usize)
        .clamp(SCAN_MIN_SAMPLES, SCAN_MAX_SAMPLES);
    let step = window_days / samples as f64;

    let mut best_index = 0;
    let mut best_distance = f64::INFINITY;
    for index in 0..=samples {
        let distance = separation_at(target, reference, index as f64 * step)?;
        if distance < best_distance {
            best_distance = distance;
            best_index = index;
        }
    }

    let mut lo = step * best_index.saturating_sub(1) as f64;
    let mut hi = (step * (best_index + 1) as f64).min(window_days);

    // Golden-section refinement inside the bracket.
    let mut inner_lo = hi - INVPHI * (hi - lo);
    let mut inner_hi = lo + INVPHI * (hi - lo);
    let mut dist_lo = separation_at(target, reference, inner_lo)?;
    let mut dist_hi = separation_at(target, reference, inner_hi)?;

    while hi - lo > TIME_TOLERANCE_DAYS {
        if dist_lo < dist_hi {
            hi = inner_hi;
            inner_hi = inner_lo;
            dist_hi = dist_lo;
            inner_lo = hi - INVPHI * (hi - lo);
            dist_lo = separation_at(target, reference, inner_lo)?;
        } else {
            lo = inner_lo;
            inner_lo = inner_hi;
            dist_lo = dist_hi;
            inner_hi = lo + INVPHI * (hi - lo);
            dist_hi = separation_at(target, reference, inner_hi)?;
        }
    }

    let days_from_epoch = 0.5 * (lo + hi);
    let distance_au = separation_at(target, reference, days_from_epoch)?;

    Ok(ApproachEvent {
        days_from_epoch,
        distance_au,
    })
}
