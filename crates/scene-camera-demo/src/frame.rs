//! Per-frame matrix derivation for mono and side-by-side presentation.

use glam::Mat4;
use scene_camera_core::{Camera, CameraError, Eye};

/// Matrices a renderer needs for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FrameMatrices {
    /// One view over the whole surface.
    Mono { view: Mat4, projection: Mat4 },
    /// One view per eye, each covering half the surface width.
    Stereo {
        left_view: Mat4,
        left_projection: Mat4,
        right_view: Mat4,
        right_projection: Mat4,
    },
}

impl FrameMatrices {
    /// Derive the frame's matrices from the camera.
    ///
    /// In stereo, each eye's frustum uses half the camera's screen width.
    pub fn derive(camera: &Camera, stereo: bool) -> Result<Self, CameraError> {
        if !stereo {
            return Ok(Self::Mono {
                view: camera.view_matrix(),
                projection: camera.projection_matrix()?,
            });
        }

        let mut half = camera.clone();
        half.set_screen_size(camera.screen_width / 2.0, camera.screen_height);
        Ok(Self::Stereo {
            left_view: half.eye_view_matrix(Eye::Left),
            left_projection: half.eye_frustum(Eye::Left)?,
            right_view: half.eye_view_matrix(Eye::Right),
            right_projection: half.eye_frustum(Eye::Right)?,
        })
    }

    /// Whether these are per-eye matrices.
    pub fn is_stereo(&self) -> bool {
        matches!(self, Self::Stereo { .. })
    }
}
