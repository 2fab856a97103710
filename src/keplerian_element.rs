//! # Keplerian orbital elements
//!
//! This module defines the [`KeplerianElements`] struct, the **classical orbital
//! element representation** this crate consumes at its input boundary.
//!
//! ## What are Keplerian elements?
//!
//! The six Keplerian elements are:
//!
//! 1. **a** – Semi-major axis (AU)
//! 2. **e** – Eccentricity (unitless)
//! 3. **i** – Inclination (degrees)
//! 4. **Ω** – Longitude of ascending node (degrees)
//! 5. **ω** – Argument of periapsis (degrees)
//! 6. **ν** – True anomaly (degrees)
//!
//! The first five fix the shape and orientation of the ellipse; the true anomaly
//! is the one element that varies as the body sweeps around its orbit.
//!
//! ## Provided functionality
//!
//! - **Validation** of the closed-ellipse domain via [`KeplerianElements::validate`]:
//!   `a > 0`, `0 ≤ e < 1`, all fields finite. Open (parabolic/hyperbolic)
//!   trajectories are detected and rejected, never propagated.
//! - **Normalization** of angular elements into `[0, 360)` via
//!   [`KeplerianElements::normalized`]. Out-of-range input angles are accepted
//!   everywhere; normalization is available, not imposed.
//! - **Wire shape**: the struct deserializes from the upstream orbit-determination
//!   service's JSON field names (`largeSemiAxis`, `pericenter`, `longitude`, ...).
//!
//! ## Units
//!
//! - Lengths: **AU**
//! - Angles: **degrees** at this boundary; every internal computation converts
//!   explicitly to radians (see [`crate::constants::RADEG`]).
//!
//! ## See also
//!
//! - [`crate::heliocentric::position_at`] – element set + anomaly → Cartesian position.
//! - [`crate::kepler::propagate`] – two-body time propagation of an element set.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cometa_errors::CometaError;
use crate::constants::{
    Au, Degree, FULL_TURN_DEG, REFERENCE_ASCENDING_NODE, REFERENCE_ECCENTRICITY,
    REFERENCE_INCLINATION, REFERENCE_PERIAPSIS_ARGUMENT, REFERENCE_SEMI_MAJOR_AXIS,
    REFERENCE_TRUE_ANOMALY,
};

/// Keplerian orbital elements of a closed (elliptic) heliocentric orbit.
///
/// Units
/// -----
/// * `semi_major_axis`: Astronomical Units (AU), strictly positive.
/// * `eccentricity`: unitless, in `[0, 1)`.
/// * `inclination`: degrees (i).
/// * `ascending_node_longitude`: degrees (Ω).
/// * `periapsis_argument`: degrees (ω).
/// * `true_anomaly`: degrees (ν), the time-varying element.
///
/// Notes
/// -----
/// The struct is a plain immutable value: every derived quantity (position,
/// curve, scene) is recomputed fresh from it, and two element sets compare
/// equal field by field. Angles outside `[0, 360)` are accepted as input;
/// [`normalized`](Self::normalized) wraps them when a canonical form is needed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KeplerianElements {
    #[serde(rename = "largeSemiAxis")]
    pub semi_major_axis: Au,
    pub eccentricity: f64,
    pub inclination: Degree,
    #[serde(rename = "longitude")]
    pub ascending_node_longitude: Degree,
    #[serde(rename = "pericenter")]
    pub periapsis_argument: Degree,
    #[serde(rename = "trueAnomaly")]
    pub true_anomaly: Degree,
}

/// Wrap an angle in degrees into `[0, 360)`.
fn principal_angle_deg(a: Degree) -> Degree {
    a.rem_euclid(FULL_TURN_DEG)
}

impl KeplerianElements {
    /// The stylized Earth-like reference orbit carried by every assembled scene.
    ///
    /// Near-circular, zero inclination, ν = 0 at epoch: a stylized visual
    /// anchor, not an ephemeris-grade Earth orbit.
    pub fn earth_reference() -> Self {
        KeplerianElements {
            semi_major_axis: REFERENCE_SEMI_MAJOR_AXIS,
            eccentricity: REFERENCE_ECCENTRICITY,
            inclination: REFERENCE_INCLINATION,
            ascending_node_longitude: REFERENCE_ASCENDING_NODE,
            periapsis_argument: REFERENCE_PERIAPSIS_ARGUMENT,
            true_anomaly: REFERENCE_TRUE_ANOMALY,
        }
    }

    /// Check the closed-ellipse domain of the element set.
    ///
    /// Rejected inputs, each reported as
    /// [`CometaError::InvalidElement`] naming the offending field:
    /// * any non-finite field,
    /// * `semi_major_axis ≤ 0` (degenerate),
    /// * `eccentricity < 0`,
    /// * `eccentricity ≥ 1` (open trajectory, unsupported).
    ///
    /// Return
    /// ------
    /// * `Ok(())` when the set describes a closed ellipse.
    pub fn validate(&self) -> Result<(), CometaError> {
        let fields = [
            ("semi_major_axis", self.semi_major_axis),
            ("eccentricity", self.eccentricity),
            ("inclination", self.inclination),
            ("ascending_node_longitude", self.ascending_node_longitude),
            ("periapsis_argument", self.periapsis_argument),
            ("true_anomaly", self.true_anomaly),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(CometaError::InvalidElement { field, value });
            }
        }

        if self.semi_major_axis <= 0.0 {
            return Err(CometaError::InvalidElement {
                field: "semi_major_axis",
                value: self.semi_major_axis,
            });
        }
        if self.eccentricity < 0.0 || self.eccentricity >= 1.0 {
            return Err(CometaError::InvalidElement {
                field: "eccentricity",
                value: self.eccentricity,
            });
        }
        Ok(())
    }

    /// Return a copy with all angular elements wrapped into `[0, 360)`.
    pub fn normalized(&self) -> Self {
        KeplerianElements {
            semi_major_axis: self.semi_major_axis,
            eccentricity: self.eccentricity,
            inclination: principal_angle_deg(self.inclination),
            ascending_node_longitude: principal_angle_deg(self.ascending_node_longitude),
            periapsis_argument: principal_angle_deg(self.periapsis_argument),
            true_anomaly: principal_angle_deg(self.true_anomaly),
        }
    }
}

impl fmt::Display for KeplerianElements {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Keplerian Elements")?;
        writeln!(f, "-------------------------------------------")?;
        writeln!(
            f,
            "  a   (semi-major axis)       = {:.6} AU",
            self.semi_major_axis
        )?;
        writeln!(
            f,
            "  e   (eccentricity)          = {:.6}",
            self.eccentricity
        )?;
        writeln!(
            f,
            "  i   (inclination)           = {:.6}°",
            self.inclination
        )?;
        writeln!(
            f,
            "  Ω   (longitude of node)     = {:.6}°",
            self.ascending_node_longitude
        )?;
        writeln!(
            f,
            "  ω   (argument of periapsis) = {:.6}°",
            self.periapsis_argument
        )?;
        writeln!(f, "  ν   (true anomaly)          = {:.6}°", self.true_anomaly)
    }
}
