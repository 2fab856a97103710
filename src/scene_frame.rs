//! # Scene frame
//!
//! The fixed mapping from heliocentric ecliptic coordinates (AU) into the
//! renderer's scene space: one uniform scale plus one axis
//! remap, applied identically to every body so relative geometry and the
//! sense of rotation are preserved.
//!
//! The remap swaps the ecliptic pole onto the scene's up axis:
//! `scene = (x·s, z·s, −y·s)`.
//!
//! The scale is fixed when the frame is constructed and never mutated
//! afterwards; every consumer holds the same frame value for the lifetime of
//! the scene.

use nalgebra::Vector3;
use serde::Serialize;

use crate::cometa_errors::CometaError;
use crate::constants::SCENE_SCALE;

/// A position in scene units, as consumed by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScenePosition {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl ScenePosition {
    pub const ORIGIN: ScenePosition = ScenePosition {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub fn new(x: f64, y: f64, z: f64) -> Self {
        ScenePosition { x, y, z }
    }

    /// All three components are finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Euclidean distance to another scene position.
    pub fn distance(&self, other: &ScenePosition) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }
}

/// The process-wide AU → scene-unit mapping.
///
/// Constructed once at scene setup; [`SceneFrame::default`] uses the stock
/// scale of 100 scene units per AU.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneFrame {
    scale: f64,
}

impl Default for SceneFrame {
    fn default() -> Self {
        SceneFrame { scale: SCENE_SCALE }
    }
}

impl SceneFrame {
    pub fn new(scale: f64) -> Self {
        SceneFrame { scale }
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Map a heliocentric ecliptic position (AU) into scene space.
    ///
    /// `scene.x = p.x·s`, `scene.y = p.z·s`, `scene.z = −p.y·s`.
    ///
    /// A non-finite input coordinate is rejected with
    /// [`CometaError::NonFiniteResult`] rather than propagated into the scene.
    pub fn to_scene(&self, position: Vector3<f64>) -> Result<ScenePosition, CometaError> {
        if !(position.x.is_finite() && position.y.is_finite() && position.z.is_finite()) {
            return Err(CometaError::NonFiniteResult {
                context: "scene transform",
            });
        }

        Ok(ScenePosition {
            x: position.x * self.scale,
            y: position.z * self.scale,
            z: -position.y * self.scale,
        })
    }

    /// Scale a displacement expressed in AU along **scene** axes.
    ///
    /// Unlike [`to_scene`](Self::to_scene) no axis remap applies: the input is
    /// already in scene orientation (lateral, up, back). Used for the camera
    /// offset.
    pub fn scene_offset(&self, au: [f64; 3]) -> ScenePosition {
        ScenePosition {
            x: au[0] * self.scale,
            y: au[1] * self.scale,
            z: au[2] * self.scale,
        }
    }
}
