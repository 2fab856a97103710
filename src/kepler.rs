//! # Two-body propagation of a closed orbit
//!
//! Anomaly conversions and the elliptic Kepler equation, used to advance an
//! element set in time: true anomaly → eccentric anomaly → mean anomaly,
//! advance the mean anomaly by the mean motion, then solve Kepler's equation
//! back to a true anomaly.
//!
//! All angles in this module are **radians** except at the
//! [`propagate`] boundary, which speaks the element set's degrees.
//!
//! ## See also
//!
//! * [`crate::approach`] – closest-approach search built on this propagation.
//! * Danby, *Fundamentals of Celestial Mechanics*, elliptic motion relations.

use std::f64::consts::PI;

use roots::{find_root_newton_raphson, SimpleConvergency};

use crate::cometa_errors::CometaError;
use crate::constants::{Radian, DPI, GAUSS_GRAV_SQUARED, RADEG};
use crate::keplerian_element::KeplerianElements;

/// Return the principal value of an angle in radians, in `[0, 2π)`.
pub(crate) fn principal_angle(a: Radian) -> Radian {
    a.rem_euclid(DPI)
}

/// Mean motion n = k / a^(3/2), in radians per day.
pub fn mean_motion(semi_major_axis: f64) -> f64 {
    (GAUSS_GRAV_SQUARED / semi_major_axis.powi(3)).sqrt()
}

/// Orbital period of a closed orbit, in days.
pub fn orbital_period(semi_major_axis: f64) -> f64 {
    DPI / mean_motion(semi_major_axis)
}

/// Eccentric anomaly E from true anomaly ν (elliptic case, `0 ≤ e < 1`).
///
/// Uses the quadrant-safe form
/// `E = atan2(√(1 − e²)·sin ν, e + cos ν)`,
/// equivalent to the half-angle tangent relation but free of tangent poles.
pub fn true_to_eccentric(true_anomaly: Radian, eccentricity: f64) -> Radian {
    let sin_ecc = (1.0 - eccentricity * eccentricity).sqrt() * true_anomaly.sin();
    let cos_ecc = eccentricity + true_anomaly.cos();
    principal_angle(sin_ecc.atan2(cos_ecc))
}

/// True anomaly ν from eccentric anomaly E (elliptic case).
pub fn eccentric_to_true(eccentric_anomaly: Radian, eccentricity: f64) -> Radian {
    let sin_nu = (1.0 - eccentricity * eccentricity).sqrt() * eccentric_anomaly.sin();
    let cos_nu = eccentric_anomaly.cos() - eccentricity;
    principal_angle(sin_nu.atan2(cos_nu))
}

/// Mean anomaly M = E − e·sin E.
pub fn eccentric_to_mean(eccentric_anomaly: Radian, eccentricity: f64) -> Radian {
    principal_angle(eccentric_anomaly - eccentricity * eccentric_anomaly.sin())
}

/// Solve the elliptic Kepler equation `E − e·sin E = M` for E.
///
/// Newton–Raphson on `R(E) = E − e·sin E − M`, started mid-range at `E₀ = π`
/// (the residual is monotone increasing in E, with `R'(E) = 1 − e·cos E ≥ 1 − e > 0`).
///
/// Arguments
/// ---------
/// * `mean_anomaly`: M in radians, any value (wrapped internally).
/// * `eccentricity`: e in `[0, 1)`.
///
/// Return
/// ------
/// * Eccentric anomaly E in `[0, 2π)`, or
///   [`CometaError::KeplerConvergenceFailed`] if the iteration does not settle.
pub fn solve_kepler_equation(
    mean_anomaly: Radian,
    eccentricity: f64,
) -> Result<Radian, CometaError> {
    let mean_anomaly = principal_angle(mean_anomaly);

    let f = |ecc_anom: f64| -> f64 {
        ecc_anom - eccentricity * ecc_anom.sin() - mean_anomaly
    };
    let df = |ecc_anom: f64| -> f64 { 1.0 - eccentricity * ecc_anom.cos() };

    let mut tol = SimpleConvergency {
        eps: f64::EPSILON * 1e2,
        max_iter: 50,
    };

    let ecc_anom = find_root_newton_raphson(PI, &f, &df, &mut tol)?;
    Ok(principal_angle(ecc_anom))
}

/// Advance an element set by `dt_days` of unperturbed two-body motion.
///
/// Only the true anomaly changes; the orbit's shape and orientation are
/// constants of the motion. The input set must describe a closed ellipse
/// ([`KeplerianElements::validate`] is applied first), and `dt_days` must be
/// finite.
///
/// Arguments
/// ---------
/// * `elements`: element set at the reference instant.
/// * `dt_days`: time offset in days (may be negative).
///
/// Return
/// ------
/// * The element set `dt_days` later, true anomaly in `[0, 360)` degrees.
pub fn propagate(
    elements: &KeplerianElements,
    dt_days: f64,
) -> Result<KeplerianElements, CometaError> {
    elements.validate()?;
    if !dt_days.is_finite() {
        return Err(CometaError::InvalidElement {
            field: "dt_days",
            value: dt_days,
        });
    }

    let ecc = elements.eccentricity;
    let nu_rad = elements.true_anomaly * RADEG;

    let ecc_anom = true_to_eccentric(nu_rad, ecc);
    let mean_anom = eccentric_to_mean(ecc_anom, ecc);

    let advanced_mean = mean_anom + mean_motion(elements.semi_major_axis) * dt_days;
    let advanced_ecc = solve_kepler_equation(advanced_mean, ecc)?;
    let advanced_nu = eccentric_to_true(advanced_ecc, ecc);

    Ok(KeplerianElements {
        true_anomaly: advanced_nu / RADEG,
        ..*elements
    })
}
