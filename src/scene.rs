//! # Scene assembly
//!
//! The [`SceneAssembler`] façade wires the position solver, curve sampler,
//! scene frame, and camera planner into one call producing the full numeric
//! scene description: Sun at the origin, the Earth-like reference body and
//! its orbit, the target body and its orbit, the three orientation axis
//! markers, and the initial camera placement framed on the target.
//!
//! The assembler performs no rendering; the returned [`SceneDescription`] is
//! an immutable value handed to the renderer. Any component failure
//! propagates out unchanged, with no recovery and no substituted defaults.

use serde::Serialize;

use crate::camera::{frame_camera, CameraPlacement};
use crate::cometa_errors::CometaError;
use crate::constants::{
    AXIS_COLOR, AXIS_LENGTH_AU, CAMERA_OFFSET_AU, DEFAULT_ORBIT_SAMPLES, REFERENCE_COLOR,
    REFERENCE_RADIUS, SUN_COLOR, SUN_RADIUS, TARGET_COLOR, TARGET_RADIUS,
};
use crate::curve::{sample_orbit, OrbitCurve};
use crate::heliocentric::current_position;
use crate::keplerian_element::KeplerianElements;
use crate::scene_frame::{SceneFrame, ScenePosition};

/// One celestial body as the renderer draws it: current scene
/// position, presentation attributes, and (for orbiting bodies) the closed
/// orbit curve.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneBody {
    pub label: &'static str,
    pub position: ScenePosition,
    pub radius: f64,
    pub color: &'static str,
    pub curve: Option<OrbitCurve>,
}

/// One orientation axis: a straight reference line through the scene origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AxisMarker {
    pub start: ScenePosition,
    pub end: ScenePosition,
    pub color: &'static str,
}

/// The complete numeric scene handed to the renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneDescription {
    pub sun: SceneBody,
    pub reference: SceneBody,
    pub target: SceneBody,
    pub axes: [AxisMarker; 3],
    pub camera: CameraPlacement,
}

/// Scene-building façade.
///
/// Holds the fixed pieces of scene configuration (frame, camera offset, axis
/// half-length, curve sample count), established once at construction and
/// never mutated afterwards. [`SceneAssembler::default`] reproduces the stock
/// scene: scale 100, camera offset (3, 2, 3) AU, axes spanning ±10 AU, 200
/// curve samples.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneAssembler {
    frame: SceneFrame,
    camera_offset: ScenePosition,
    axis_length_au: f64,
    orbit_samples: usize,
}

impl Default for SceneAssembler {
    fn default() -> Self {
        SceneAssembler::new(SceneFrame::default())
    }
}

impl SceneAssembler {
    /// Build an assembler over `frame` with the stock camera offset, axis
    /// length, and sample count (all derived through the frame's scale).
    pub fn new(frame: SceneFrame) -> Self {
        SceneAssembler {
            frame,
            camera_offset: frame.scene_offset(CAMERA_OFFSET_AU),
            axis_length_au: AXIS_LENGTH_AU,
            orbit_samples: DEFAULT_ORBIT_SAMPLES,
        }
    }

    /// Replace the camera offset (scene units, already scaled).
    pub fn with_camera_offset(mut self, offset: ScenePosition) -> Self {
        self.camera_offset = offset;
        self
    }

    /// Replace the curve sample count.
    pub fn with_orbit_samples(mut self, n: usize) -> Self {
        self.orbit_samples = n;
        self
    }

    pub fn frame(&self) -> &SceneFrame {
        &self.frame
    }

    /// Assemble the scene for a target body against an explicit reference body.
    ///
    /// Arguments
    /// ---------
    /// * `target`: the user-derived element set (the comet).
    /// * `reference`: the fixed reference orbit (normally
    ///   [`KeplerianElements::earth_reference`]).
    ///
    /// Return
    /// ------
    /// * The immutable scene description, or the first component error
    ///   (invalid elements, aborted sampling, non-finite coordinate).
    pub fn assemble(
        &self,
        target: &KeplerianElements,
        reference: &KeplerianElements,
    ) -> Result<SceneDescription, CometaError> {
        let sun = SceneBody {
            label: "Sun",
            position: ScenePosition::ORIGIN,
            radius: SUN_RADIUS,
            color: SUN_COLOR,
            curve: None,
        };

        let reference_body = self.orbiting_body(
            reference,
            "Earth",
            REFERENCE_RADIUS,
            REFERENCE_COLOR,
        )?;
        let target_body = self.orbiting_body(target, "Comet", TARGET_RADIUS, TARGET_COLOR)?;

        let camera = frame_camera(target_body.position, self.camera_offset)?;

        Ok(SceneDescription {
            sun,
            reference: reference_body,
            target: target_body,
            axes: self.axis_markers(),
            camera,
        })
    }

    /// Assemble against the stock Earth-like reference orbit.
    pub fn assemble_with_default_reference(
        &self,
        target: &KeplerianElements,
    ) -> Result<SceneDescription, CometaError> {
        self.assemble(target, &KeplerianElements::earth_reference())
    }

    fn orbiting_body(
        &self,
        elements: &KeplerianElements,
        label: &'static str,
        radius: f64,
        color: &'static str,
    ) -> Result<SceneBody, CometaError> {
        let position = self.frame.to_scene(current_position(elements)?)?;
        let curve = sample_orbit(elements, self.orbit_samples, &self.frame)?;

        Ok(SceneBody {
            label,
            position,
            radius,
            color,
            curve: Some(curve),
        })
    }

    /// Three orthogonal reference lines through the origin, each spanning
    /// ±`axis_length_au` in scene units. Static scene furniture, independent
    /// of any element set.
    fn axis_markers(&self) -> [AxisMarker; 3] {
        let half = self.axis_length_au * self.frame.scale();
        let span = |x: f64, y: f64, z: f64| AxisMarker {
            start: ScenePosition::new(-x, -y, -z),
            end: ScenePosition::new(x, y, z),
            color: AXIS_COLOR,
        };

        [
            span(half, 0.0, 0.0),
            span(0.0, half, 0.0),
            span(0.0, 0.0, half),
        ]
    }
}
