//! Parallel-axis stereo rig: per-eye view matrices and off-axis frusta.
//!
//! Both eyes share the camera orientation and are offset sideways by half
//! the inter-pupillary distance. Parallax comes from shifting each eye's
//! frustum towards the other eye rather than toeing the eyes in.

use glam::{Mat4, Vec3, Vec4};

use crate::Camera;
use crate::camera::{require_non_zero, view_from};
use crate::error::CameraError;

/// One eye of the stereo rig.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub enum Eye {
    /// Left eye, offset along `-right`.
    Left,
    /// Right eye, offset along `+right`.
    Right,
}

impl Eye {
    /// `-1.0` for the left eye, `1.0` for the right.
    fn sign(self) -> f32 {
        match self {
            Self::Left => -1.0,
            Self::Right => 1.0,
        }
    }
}

/// Bounds of an off-axis frustum on the near plane, in camera space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrustumBounds {
    /// Left edge.
    pub left: f32,
    /// Right edge.
    pub right: f32,
    /// Bottom edge.
    pub bottom: f32,
    /// Top edge.
    pub top: f32,
    /// Near clip distance.
    pub near: f32,
    /// Far clip distance.
    pub far: f32,
}

impl FrustumBounds {
    /// OpenGL-style (`glFrustum`) projection matrix for these bounds.
    pub fn to_matrix(&self) -> Mat4 {
        let FrustumBounds {
            left,
            right,
            bottom,
            top,
            near,
            far,
        } = *self;
        let width = right - left;
        let height = top - bottom;
        let depth = far - near;
        Mat4::from_cols(
            Vec4::new(2.0 * near / width, 0.0, 0.0, 0.0),
            Vec4::new(0.0, 2.0 * near / height, 0.0, 0.0),
            Vec4::new(
                (right + left) / width,
                (top + bottom) / height,
                -(far + near) / depth,
                -1.0,
            ),
            Vec4::new(0.0, 0.0, -2.0 * far * near / depth, 0.0),
        )
    }
}

impl Camera {
    /// World-space position of one eye.
    pub fn eye_position(&self, eye: Eye) -> Vec3 {
        self.position + self.rightwards_vector() * (eye.sign() * self.ipd * 0.5)
    }

    /// View matrix for one eye: the shared orientation with the eye's own
    /// translation.
    pub fn eye_view_matrix(&self, eye: Eye) -> Mat4 {
        view_from(self.orientation, self.eye_position(eye))
    }

    /// View matrix for the left eye.
    pub fn left_eye_view_matrix(&self) -> Mat4 {
        self.eye_view_matrix(Eye::Left)
    }

    /// View matrix for the right eye.
    pub fn right_eye_view_matrix(&self) -> Mat4 {
        self.eye_view_matrix(Eye::Right)
    }

    /// Off-axis frustum bounds for one eye.
    ///
    /// `shift = (ipd / 2) * near / far`, `top = near * tan(fov / 2)`,
    /// half-width `aspect * top`. Each eye's frustum is shifted towards the
    /// other eye by `shift`.
    ///
    /// Fails if the screen size, IPD, near, far or FOV is zero, or if the
    /// clip range is not `0 < near < far`.
    pub fn eye_frustum_bounds(&self, eye: Eye) -> Result<FrustumBounds, CameraError> {
        require_non_zero("screen_height", self.screen_height)?;
        require_non_zero("screen_width", self.screen_width)?;
        require_non_zero("ipd", self.ipd)?;
        self.validate_clip_range()?;
        require_non_zero("fov", self.fov)?;

        let aspect = self.screen_width / self.screen_height;
        let shift = (self.ipd * 0.5) * self.near / self.far;
        let top = self.near * (self.fov * 0.5).tan();
        let half_width = aspect * top;
        let offset = -eye.sign() * shift;

        Ok(FrustumBounds {
            left: -half_width + offset,
            right: half_width + offset,
            bottom: -top,
            top,
            near: self.near,
            far: self.far,
        })
    }

    /// Off-axis projection matrix for one eye.
    pub fn eye_frustum(&self, eye: Eye) -> Result<Mat4, CameraError> {
        self.eye_frustum_bounds(eye).map(|bounds| bounds.to_matrix())
    }

    /// Off-axis projection matrix for the left eye.
    pub fn left_eye_frustum(&self) -> Result<Mat4, CameraError> {
        self.eye_frustum(Eye::Left)
    }

    /// Off-axis projection matrix for the right eye.
    pub fn right_eye_frustum(&self) -> Result<Mat4, CameraError> {
        self.eye_frustum(Eye::Right)
    }
}

/// Whether a display of this size should be driven side-by-side, one eye
/// per half.
pub fn is_side_by_side(screen_width: u32, screen_height: u32) -> bool {
    u64::from(screen_width) + 1 >= 2 * u64::from(screen_height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CameraMode;

    fn stereo_camera() -> Camera {
        let mut camera = Camera::new(CameraMode::Museum);
        camera.set_ipd(0.5);
        camera.fov = std::f32::consts::FRAC_PI_2;
        camera.near = 1.0;
        camera.far = 10.0;
        camera.set_screen_size(800.0, 400.0);
        camera
    }

    #[test]
    fn test_eyes_straddle_camera_position() {
        let camera = stereo_camera();
        let left = camera.eye_position(Eye::Left);
        let right = camera.eye_position(Eye::Right);
        assert!(left.abs_diff_eq(Vec3::new(-0.25, 0.0, 5.0), 1e-6));
        assert!(right.abs_diff_eq(Vec3::new(0.25, 0.0, 5.0), 1e-6));
        assert!(((left + right) * 0.5).abs_diff_eq(camera.position(), 1e-6));
    }

    #[test]
    fn test_eye_views_share_rotation() {
        let camera = stereo_camera();
        let left = camera.left_eye_view_matrix();
        let right = camera.right_eye_view_matrix();
        let mono = camera.view_matrix();
        for col in 0..3 {
            assert!(left.col(col).abs_diff_eq(mono.col(col), 1e-6));
            assert!(right.col(col).abs_diff_eq(mono.col(col), 1e-6));
        }
        assert!(!left.col(3).abs_diff_eq(right.col(3), 1e-6));
    }

    #[test]
    fn test_eye_view_maps_eye_to_origin() {
        let camera = stereo_camera();
        for eye in [Eye::Left, Eye::Right] {
            let origin = camera.eye_view_matrix(eye).transform_point3(camera.eye_position(eye));
            assert!(origin.abs_diff_eq(Vec3::ZERO, 1e-5));
        }
    }

    #[test]
    fn test_frustum_bounds_follow_shift_formula() {
        let camera = stereo_camera();
        let shift = 0.25 * 1.0 / 10.0;
        let top = 1.0; // near * tan(45deg)
        let half_width = 2.0 * top;

        let right = camera.eye_frustum_bounds(Eye::Right).unwrap();
        assert!((right.top - top).abs() < 1e-6);
        assert!((right.bottom + top).abs() < 1e-6);
        assert!((right.right - (half_width - shift)).abs() < 1e-6);
        assert!((right.left + (half_width + shift)).abs() < 1e-6);

        let left = camera.eye_frustum_bounds(Eye::Left).unwrap();
        assert!((left.right - (half_width + shift)).abs() < 1e-6);
        assert!((left.left + (half_width - shift)).abs() < 1e-6);
    }

    #[test]
    fn test_frusta_are_mirror_images() {
        let camera = stereo_camera();
        let l = camera.eye_frustum_bounds(Eye::Left).unwrap();
        let r = camera.eye_frustum_bounds(Eye::Right).unwrap();
        assert!((l.left + r.right).abs() < 1e-6);
        assert!((l.right + r.left).abs() < 1e-6);
    }

    #[test]
    fn test_symmetric_bounds_match_perspective() {
        let camera = stereo_camera();
        let bounds = FrustumBounds {
            left: -2.0,
            right: 2.0,
            bottom: -1.0,
            top: 1.0,
            near: 1.0,
            far: 10.0,
        };
        let expected = Mat4::perspective_rh_gl(camera.fov, 2.0, 1.0, 10.0);
        assert!(bounds.to_matrix().abs_diff_eq(expected, 1e-5));
    }

    #[test]
    fn test_near_plane_corners_project_to_ndc_edges() {
        let camera = stereo_camera();
        let bounds = camera.eye_frustum_bounds(Eye::Right).unwrap();
        let proj = camera.right_eye_frustum().unwrap();
        let corner = proj.project_point3(Vec3::new(bounds.right, bounds.top, -bounds.near));
        assert!(corner.abs_diff_eq(Vec3::new(1.0, 1.0, -1.0), 1e-5));
    }

    #[test]
    fn test_zero_near_is_fatal() {
        let mut camera = stereo_camera();
        camera.near = 0.0;
        assert_eq!(
            camera.right_eye_frustum(),
            Err(CameraError::ZeroParameter { name: "near" })
        );
        assert!(camera.left_eye_frustum().is_err());
    }

    #[test]
    fn test_each_zero_parameter_is_named() {
        let cases: [(&'static str, fn(&mut Camera)); 6] = [
            ("screen_height", |c| c.screen_height = 0.0),
            ("screen_width", |c| c.screen_width = 0.0),
            ("ipd", |c| c.ipd = 0.0),
            ("near", |c| c.near = 0.0),
            ("far", |c| c.far = 0.0),
            ("fov", |c| c.fov = 0.0),
        ];
        for (name, break_it) in cases {
            let mut camera = stereo_camera();
            break_it(&mut camera);
            assert_eq!(
                camera.eye_frustum(Eye::Right),
                Err(CameraError::ZeroParameter { name })
            );
        }
    }

    #[test]
    fn test_inverted_clip_range_rejected() {
        let mut camera = stereo_camera();
        camera.near = 20.0;
        assert!(matches!(
            camera.left_eye_frustum(),
            Err(CameraError::InvalidClipRange { .. })
        ));
    }

    #[test]
    fn test_side_by_side_detection() {
        assert!(is_side_by_side(3840, 1080));
        assert!(is_side_by_side(2559, 1280));
        assert!(!is_side_by_side(1920, 1080));
        assert!(!is_side_by_side(1280, 720));
    }
}
