//! # Heliocentric position solver
//!
//! Converts a Keplerian element set plus one true-anomaly value into a single
//! Cartesian position in the heliocentric ecliptic frame (Sun at the origin,
//! reference plane aligned with the ecliptic), in AU.
//!
//! The in-plane position follows from the conic equation; the rotation into
//! the reference frame composes the classical 3-1-3 Euler sequence
//! `Rz(Ω) · Rx(i) · Rz(ω)` from per-axis rotation matrices.

use nalgebra::{Matrix3, Rotation3, Vector3};

use crate::cometa_errors::CometaError;
use crate::constants::{Au, Degree, Radian, RADEG};
use crate::keplerian_element::KeplerianElements;

/// Construct a right-handed 3×3 rotation matrix around one of the principal axes (X, Y, or Z).
///
/// This builds a [`nalgebra::Matrix3`] representing an **active rotation** of a
/// 3D vector by an angle `alpha` around the chosen axis, in the direct
/// (counter-clockwise) sense.
///
/// # Arguments
///
/// * `alpha` - Rotation angle in **radians** (positive = direct/trigonometric sense).
/// * `k` - Index of the axis of rotation:
///   * `0` → X-axis
///   * `1` → Y-axis
///   * `2` → Z-axis
///
/// # Returns
///
/// A 3×3 rotation matrix `R` such that the rotated vector is `x' = R · x`.
///
/// # Panics
///
/// Panics if `k > 2`, as only axes 0–2 are valid.
pub fn rotmt(alpha: Radian, k: usize) -> Matrix3<f64> {
    let axis = match k {
        0 => Vector3::x_axis(),
        1 => Vector3::y_axis(),
        2 => Vector3::z_axis(),
        _ => panic!("**** ROTMT: invalid axis index {k} (must be 0,1,2) ****"),
    };

    Rotation3::from_axis_angle(&axis, alpha).into()
}

/// Orbital radius r = a·(1 − e²) / (1 + e·cos ν), in AU.
fn orbital_radius(semi_major_axis: Au, eccentricity: f64, true_anomaly: Radian) -> Au {
    semi_major_axis * (1.0 - eccentricity * eccentricity)
        / (1.0 + eccentricity * true_anomaly.cos())
}

/// Compute the heliocentric ecliptic position of a body at a given true anomaly.
///
/// Pure and deterministic: identical inputs always yield the identical position.
/// The anomaly argument is taken separately from the element set so the same
/// set can be swept along its orbit without mutation (see
/// [`crate::curve::sample_orbit`]).
///
/// Arguments
/// ---------
/// * `elements`: the orbit's Keplerian element set (validated here).
/// * `true_anomaly`: angle from pericenter in **degrees**, any finite value.
///
/// Return
/// ------
/// * Position `(x, y, z)` in AU, heliocentric ecliptic frame, or
///   [`CometaError::InvalidElement`] when the element set is not a closed
///   ellipse, the anomaly is not finite, or the computed position has a
///   non-finite component.
pub fn position_at(
    elements: &KeplerianElements,
    true_anomaly: Degree,
) -> Result<Vector3<f64>, CometaError> {
    elements.validate()?;
    if !true_anomaly.is_finite() {
        return Err(CometaError::InvalidElement {
            field: "true_anomaly",
            value: true_anomaly,
        });
    }

    let incl = elements.inclination * RADEG;
    let peri = elements.periapsis_argument * RADEG;
    let node = elements.ascending_node_longitude * RADEG;
    let nu = true_anomaly * RADEG;

    let r = orbital_radius(elements.semi_major_axis, elements.eccentricity, nu);
    let in_plane = Vector3::new(r * nu.cos(), r * nu.sin(), 0.0);

    // 3-1-3 Euler sequence: pericenter about the orbit normal, inclination
    // about the node line, node about the reference pole
    let rot = rotmt(node, 2) * rotmt(incl, 0) * rotmt(peri, 2);
    let position = rot * in_plane;

    for (axis, value) in [("x", position.x), ("y", position.y), ("z", position.z)] {
        if !value.is_finite() {
            return Err(CometaError::InvalidElement { field: axis, value });
        }
    }

    Ok(position)
}

/// Position of the body at its element set's own true anomaly.
pub fn current_position(elements: &KeplerianElements) -> Result<Vector3<f64>, CometaError> {
    position_at(elements, elements.true_anomaly)
}

#[cfg(test)]
mod heliocentric_test {
    use super::*;
    use approx::assert_relative_eq;

    fn unit_circular() -> KeplerianElements {
        KeplerianElements {
            semi_major_axis: 1.0,
            eccentricity: 0.0,
            inclination: 0.0,
            ascending_node_longitude: 0.0,
            periapsis_argument: 0.0,
            true_anomaly: 0.0,
        }
    }

    #[test]
    fn test_rotmt_z_quarter_turn() {
        let rot = rotmt(std::f64::consts::FRAC_PI_2, 2);
        let rotated = rot * Vector3::new(1.0, 0.0, 0.0);
        assert_relative_eq!(rotated.x, 0.0, epsilon = 1e-15);
        assert_relative_eq!(rotated.y, 1.0, epsilon = 1e-15);
        assert_relative_eq!(rotated.z, 0.0, epsilon = 1e-15);
    }

    #[test]
    fn test_reference_case_no_rotation() {
        // a = 1, e = 0, all angles zero, ν = 0 → exactly (1, 0, 0) AU
        let pos = position_at(&unit_circular(), 0.0).unwrap();
        assert_eq!(pos, Vector3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_circular_radius_is_constant() {
        let mut elements = unit_circular();
        elements.semi_major_axis = 2.5;
        elements.inclination = 33.0;
        elements.periapsis_argument = 120.0;
        elements.ascending_node_longitude = 45.0;

        for step in 0..=36 {
            let nu = step as f64 * 10.0;
            let pos = position_at(&elements, nu).unwrap();
            assert_relative_eq!(pos.norm(), 2.5, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_in_plane_ellipse_extremes() {
        let mut elements = unit_circular();
        elements.semi_major_axis = 2.0;
        elements.eccentricity = 0.5;

        // pericenter: r = a(1 - e)
        let peri = position_at(&elements, 0.0).unwrap();
        assert_relative_eq!(peri.x, 1.0, epsilon = 1e-12);
        assert_relative_eq!(peri.y, 0.0, epsilon = 1e-12);

        // apocenter: r = a(1 + e)
        let apo = position_at(&elements, 180.0).unwrap();
        assert_relative_eq!(apo.x, -3.0, epsilon = 1e-12);
        assert_relative_eq!(apo.y, 0.0, epsilon = 1e-9);

        // planar orbit stays planar
        assert_eq!(peri.z, 0.0);
        assert_relative_eq!(apo.z, 0.0, epsilon = 1e-15);
    }

    #[test]
    fn test_node_rotation_moves_pericenter() {
        let mut elements = unit_circular();
        elements.ascending_node_longitude = 90.0;

        let pos = position_at(&elements, 0.0).unwrap();
        assert_relative_eq!(pos.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(pos.y, 1.0, epsilon = 1e-12);
        assert_relative_eq!(pos.z, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_inclination_tilts_out_of_plane() {
        let mut elements = unit_circular();
        elements.inclination = 90.0;

        // 90° past the node on a polar orbit points along +z
        let pos = position_at(&elements, 90.0).unwrap();
        assert_relative_eq!(pos.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(pos.y, 0.0, epsilon = 1e-12);
        assert_relative_eq!(pos.z, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_pericenter_argument_matches_node_rotation_in_plane() {
        // with i = 0 the two in-plane angles are interchangeable
        let mut by_peri = unit_circular();
        by_peri.periapsis_argument = 37.0;
        let mut by_node = unit_circular();
        by_node.ascending_node_longitude = 37.0;

        let p1 = position_at(&by_peri, 10.0).unwrap();
        let p2 = position_at(&by_node, 10.0).unwrap();
        assert_relative_eq!(p1.x, p2.x, epsilon = 1e-12);
        assert_relative_eq!(p1.y, p2.y, epsilon = 1e-12);
    }

    #[test]
    fn test_rejects_invalid_elements() {
        let mut parabolic = unit_circular();
        parabolic.eccentricity = 1.0;
        assert!(matches!(
            position_at(&parabolic, 0.0),
            Err(CometaError::InvalidElement { .. })
        ));

        let mut negative_axis = unit_circular();
        negative_axis.semi_major_axis = -1.0;
        assert!(position_at(&negative_axis, 0.0).is_err());

        assert!(position_at(&unit_circular(), f64::NAN).is_err());
    }

    #[test]
    fn test_out_of_range_angles_accepted() {
        let mut elements = unit_circular();
        elements.periapsis_argument = -360.0;
        let wrapped = position_at(&elements, 720.0).unwrap();
        let canonical = position_at(&unit_circular(), 0.0).unwrap();
        assert_relative_eq!(wrapped.x, canonical.x, epsilon = 1e-9);
        assert_relative_eq!(wrapped.y, canonical.y, epsilon = 1e-9);
    }
}
