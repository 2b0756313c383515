//! Look-at camera controller with museum, first-person and RTS movement
//! modes, plane geometry helpers, and parallel-axis stereo matrices.
//!
//! The camera is a plain single-owner value: it does no I/O, holds no locks,
//! and every operation is an immediate state change. Input from other
//! threads should be funnelled through a queue and applied once per frame.

mod camera;
mod error;
pub mod mode;
pub mod plane;
mod stereo;

pub use camera::{Camera, MIN_ZOOM_DISTANCE};
pub use error::CameraError;
pub use mode::{CameraMode, Direction};
pub use plane::{
    plane_intercept, plane_intercept_at, plane_intercept_at_or_zero, plane_intercept_or_zero,
    project_onto_plane,
};
pub use stereo::{Eye, FrustumBounds, is_side_by_side};
