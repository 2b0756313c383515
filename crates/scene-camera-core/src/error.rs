//! Camera error types.

/// Errors raised when the camera's rendering parameters cannot produce a
/// projection.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CameraError {
    /// A parameter required for the projection is zero.
    #[error("camera configuration error: {name} must be non-zero")]
    ZeroParameter {
        /// Name of the offending parameter.
        name: &'static str,
    },

    /// Clip planes must satisfy `0 < near < far`.
    #[error("camera configuration error: invalid clip range near={near}, far={far}")]
    InvalidClipRange {
        /// Near clip distance.
        near: f32,
        /// Far clip distance.
        far: f32,
    },
}
