pub mod approach;
pub mod camera;
pub mod cometa_errors;
pub mod constants;
pub mod curve;
pub mod heliocentric;
pub mod kepler;
pub mod keplerian_element;
pub mod scene;
pub mod scene_frame;
