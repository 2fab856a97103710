//! # Camera planner
//!
//! Derives the initial camera placement from the framed body's current scene
//! position: the camera starts at a fixed displacement from the body and
//! looks at the body itself. Framing the moving body rather than the origin
//! keeps a far-out target from shrinking to a pixel next to the Sun; user
//! interaction then orbits the camera around the body of interest.

use serde::Serialize;

use crate::cometa_errors::CometaError;
use crate::scene_frame::ScenePosition;

/// Initial camera position and look-at target, in scene units.
///
/// Invariant: `target` equals the current scene position of the body the
/// camera frames.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CameraPlacement {
    pub position: ScenePosition,
    pub target: ScenePosition,
}

/// Place the camera at `target + offset`, looking at `target`.
///
/// Arguments
/// ---------
/// * `target`: the framed body's current scene position.
/// * `offset`: fixed displacement in scene units (lateral, up, back),
///   pre-scaled by the scene frame.
///
/// Return
/// ------
/// * The placement, or [`CometaError::NonFiniteResult`] if either input
///   carries a non-finite coordinate.
pub fn frame_camera(
    target: ScenePosition,
    offset: ScenePosition,
) -> Result<CameraPlacement, CometaError> {
    if !target.is_finite() {
        return Err(CometaError::NonFiniteResult {
            context: "camera target",
        });
    }
    if !offset.is_finite() {
        return Err(CometaError::NonFiniteResult {
            context: "camera offset",
        });
    }

    Ok(CameraPlacement {
        position: ScenePosition::new(
            target.x + offset.x,
            target.y + offset.y,
            target.z + offset.z,
        ),
        target,
    })
}
