//! # Constants and type definitions for cometa
//!
//! This module centralizes the **physical constants**, **conversion factors**, and **common type
//! definitions** used throughout the `cometa` library, together with the fixed presentation
//! values the assembled scene carries for its renderer.
//!
//! ## Overview
//!
//! - Astronomical constants and unit conversions (degrees ↔ radians)
//! - Scalar type aliases used across the crate
//! - Scene-space defaults: scale, axis length, camera offset, body styling
//!
//! These definitions are used by all main modules, including the position solver,
//! the curve sampler, and the scene assembler.

// -------------------------------------------------------------------------------------------------
// Physical constants and unit conversions
// -------------------------------------------------------------------------------------------------

/// 2π, useful for trigonometric conversions
pub const DPI: f64 = 2. * std::f64::consts::PI;

/// Degrees → radians
pub const RADEG: f64 = std::f64::consts::PI / 180.0;

/// One full revolution of true anomaly, in degrees
pub const FULL_TURN_DEG: f64 = 360.0;

/// Gaussian gravitational constant k (used in classical orbit dynamics)
pub const GAUSS_GRAV: f64 = 0.01720209895;

/// k², often used in Kepler's third law
pub const GAUSS_GRAV_SQUARED: f64 = GAUSS_GRAV * GAUSS_GRAV;

// -------------------------------------------------------------------------------------------------
// Scene-space defaults
// -------------------------------------------------------------------------------------------------

/// Scene units per astronomical unit (1 AU = 100 scene units)
pub const SCENE_SCALE: f64 = 100.0;

/// Number of anomaly subdivisions used to trace a full orbit
pub const DEFAULT_ORBIT_SAMPLES: usize = 200;

/// Half-length of each orientation axis marker, in AU
pub const AXIS_LENGTH_AU: f64 = 10.0;

/// Initial camera displacement from the framed body, in AU:
/// lateral, vertical, back (scene axes, pre-scaling)
pub const CAMERA_OFFSET_AU: [f64; 3] = [3.0, 2.0, 3.0];

/// Sphere radius of the Sun in scene units
pub const SUN_RADIUS: f64 = 10.0;

/// Sphere radius of the reference body in scene units
pub const REFERENCE_RADIUS: f64 = 4.0;

/// Sphere radius of the target body in scene units
pub const TARGET_RADIUS: f64 = 5.0;

/// Sun color (hex, as consumed by the renderer)
pub const SUN_COLOR: &str = "#FDB813";

/// Reference body and reference orbit color
pub const REFERENCE_COLOR: &str = "#2196F3";

/// Target body and target orbit color
pub const TARGET_COLOR: &str = "#FF5722";

/// Orientation axis marker color
pub const AXIS_COLOR: &str = "#FFFF00";

// -------------------------------------------------------------------------------------------------
// Reference body orbital elements (stylized Earth orbit)
// -------------------------------------------------------------------------------------------------

/// Reference body semi-major axis (AU)
pub const REFERENCE_SEMI_MAJOR_AXIS: Au = 1.0;

/// Reference body eccentricity
pub const REFERENCE_ECCENTRICITY: f64 = 0.0167;

/// Reference body inclination (degrees); the reference orbit is kept in the
/// ecliptic plane rather than carrying the real inclination to the invariable plane
pub const REFERENCE_INCLINATION: Degree = 0.0;

/// Reference body argument of periapsis (degrees)
pub const REFERENCE_PERIAPSIS_ARGUMENT: Degree = 102.94;

/// Reference body longitude of ascending node (degrees)
pub const REFERENCE_ASCENDING_NODE: Degree = 0.0;

/// Reference body true anomaly at epoch (degrees)
pub const REFERENCE_TRUE_ANOMALY: Degree = 0.0;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in degrees
pub type Degree = f64;
/// Angle in radians
pub type Radian = f64;
/// Distance in astronomical units
pub type Au = f64;
