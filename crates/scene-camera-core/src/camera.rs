//! Camera state, look-at reconstruction and mono view/projection matrices.

use std::fmt;

use glam::{EulerRot, Mat4, Quat, Vec3};
use tracing::{debug, trace, warn};

use crate::error::CameraError;
use crate::mode::{CameraMode, Direction, fps, museum, rts};
use crate::plane::plane_intercept;

/// Squared length below which two points or vectors are treated as coincident.
const DEGENERATE_EPSILON: f32 = 1e-12;

/// Closest a zoom may bring the eye to its target.
pub const MIN_ZOOM_DISTANCE: f32 = 0.01;

/// A look-at camera with three interaction modes and stereo support.
///
/// `orientation` is never composed incrementally: every operation that
/// changes the gaze rebuilds it from `look_at(position, target, up)`.
/// Translations that keep the gaze direction leave it untouched.
#[derive(Debug, Clone)]
pub struct Camera {
    pub(crate) position: Vec3,
    pub(crate) target: Vec3,
    pub(crate) up: Vec3,
    pub(crate) orientation: Quat,
    pub(crate) mode: CameraMode,
    pub(crate) ground_normal: Vec3,
    /// Inter-pupillary distance in world units.
    pub ipd: f32,
    /// Focal length in world units.
    pub focal_length: f32,
    /// Near clip plane distance (positive, `< far`).
    pub near: f32,
    /// Far clip plane distance.
    pub far: f32,
    /// Vertical field of view in radians.
    pub fov: f32,
    /// Width of the render target in pixels.
    pub screen_width: f32,
    /// Height of the render target in pixels.
    pub screen_height: f32,
    /// Lens aperture, carried for renderers that simulate depth of field.
    pub aperture: f32,
}

impl Camera {
    /// Create a camera in `mode` with that mode's default placement.
    ///
    /// Museum and FPS cameras sit at `(0, 0, 5)` looking at the origin with
    /// `+Y` up. RTS cameras sit at `(5, 5, 5)` with `+Z` up, aimed at the
    /// point where their gaze meets the ground plane.
    pub fn new(mode: CameraMode) -> Self {
        let mut camera = Self {
            position: Vec3::ZERO,
            target: Vec3::ZERO,
            up: Vec3::Y,
            orientation: Quat::IDENTITY,
            mode,
            ground_normal: Vec3::Z,
            ipd: 1.0,
            focal_length: 10.0,
            near: 1.0,
            far: 100.0,
            fov: std::f32::consts::FRAC_PI_4,
            screen_width: 1280.0,
            screen_height: 720.0,
            aperture: 0.0,
        };
        camera.seed_placement();
        camera
    }

    /// Restore the default placement for the current mode. Rendering
    /// parameters and the mode itself are kept.
    pub fn reset(&mut self) {
        self.seed_placement();
        debug!("Camera reset to {} defaults", self.mode);
    }

    fn seed_placement(&mut self) {
        self.position = Vec3::new(0.0, 0.0, 5.0);
        self.target = Vec3::ZERO;
        self.up = Vec3::Y;
        self.orientation = Quat::IDENTITY;
        self.ground_normal = Vec3::Z;

        if self.mode == CameraMode::Rts {
            self.up = Vec3::Z;
            self.position = Vec3::splat(5.0);
            let forward = (self.target - self.position).normalize();
            if let Some(hit) = plane_intercept(self.ground_normal, self.position, forward) {
                self.target = hit;
            }
        }

        self.look_at(self.target);
    }

    /// Aim the camera at `target` and rebuild the orientation from it.
    pub fn look_at(&mut self, target: Vec3) {
        self.target = target;
        self.reaim();
    }

    /// Rebuild `orientation` from the current position, target and up.
    ///
    /// A target on top of the eye, or a gaze collinear with `up`, has no
    /// defined look-at basis; the previous orientation is kept.
    pub(crate) fn reaim(&mut self) {
        let gaze = self.target - self.position;
        if gaze.length_squared() < DEGENERATE_EPSILON {
            warn!("Camera target coincides with its position, orientation unchanged");
            return;
        }
        if gaze.cross(self.up).length_squared() < DEGENERATE_EPSILON {
            warn!("Camera gaze is collinear with up vector, orientation unchanged");
            return;
        }
        let view = Mat4::look_at_rh(self.position, self.target, self.up);
        self.orientation = Quat::from_mat4(&view).normalize();
    }

    /// Rotate the eye around the target by `rotation` and re-aim.
    pub(crate) fn orbit(&mut self, rotation: Quat) {
        let offset = self.position - self.target;
        self.position = self.target + rotation * offset;
        self.reaim();
    }

    /// Move the eye `amount` towards the target along the gaze and re-aim.
    /// Negative amounts move away. The eye stops [`MIN_ZOOM_DISTANCE`]
    /// short of the target, so the gaze direction never flips.
    pub(crate) fn dolly(&mut self, amount: f32) {
        let offset = self.target - self.position;
        let distance = offset.length();
        if distance * distance < DEGENERATE_EPSILON {
            return;
        }
        let remaining = (distance - amount).max(MIN_ZOOM_DISTANCE);
        self.position = self.target - offset * (remaining / distance);
        self.reaim();
    }

    /// Teleport the eye. The orientation is not updated.
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    /// Move the eye by `delta`. The orientation is not updated.
    pub fn translate(&mut self, delta: Vec3) {
        self.position += delta;
    }

    /// Set the vertical reference vector. Takes effect on the next re-aim.
    ///
    /// FPS roll also changes `up`, and the rolled vector carries over into
    /// other modes until it is set again or the camera is [`reset`](Self::reset).
    pub fn set_up(&mut self, up: Vec3) {
        self.up = up;
    }

    /// Set the inter-pupillary distance used by the stereo matrices.
    pub fn set_ipd(&mut self, ipd: f32) {
        self.ipd = ipd;
    }

    /// Switch movement mode. Takes effect on the next move.
    pub fn set_mode(&mut self, mode: CameraMode) {
        if self.mode != mode {
            debug!("Camera mode {} -> {}", self.mode, mode);
        }
        self.mode = mode;
    }

    /// Set the ground plane normal used by RTS mode. A zero vector is ignored.
    pub fn set_ground_plane_normal(&mut self, normal: Vec3) {
        match normal.try_normalize() {
            Some(n) => self.ground_normal = n,
            None => warn!("Ignoring zero ground plane normal"),
        }
    }

    /// Set the render target size in pixels.
    pub fn set_screen_size(&mut self, width: f32, height: f32) {
        self.screen_width = width;
        self.screen_height = height;
    }

    /// Eye position in world space.
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Current look-at point in world space.
    pub fn target(&self) -> Vec3 {
        self.target
    }

    /// Vertical reference vector.
    pub fn up(&self) -> Vec3 {
        self.up
    }

    /// World-to-camera rotation.
    pub fn orientation(&self) -> Quat {
        self.orientation
    }

    /// Active movement mode.
    pub fn mode(&self) -> CameraMode {
        self.mode
    }

    /// Normal of the RTS ground plane.
    pub fn ground_plane_normal(&self) -> Vec3 {
        self.ground_normal
    }

    /// Move according to the active mode. See the per-mode modules for what
    /// each direction means; directions a mode does not use are ignored.
    pub fn move_in(&mut self, direction: Direction, amount: f32) {
        match self.mode {
            CameraMode::Museum => museum::apply(self, direction, amount),
            CameraMode::Fps => fps::apply(self, direction, amount),
            CameraMode::Rts => rts::apply(self, direction, amount),
        }
    }

    /// Move using a raw direction code. Unknown codes are ignored.
    pub fn move_by_code(&mut self, code: i32, amount: f32) {
        match Direction::from_code(code) {
            Some(direction) => self.move_in(direction, amount),
            None => trace!("Ignoring unknown direction code {code}"),
        }
    }

    /// Unit vector from the eye towards the target.
    pub fn forwards_vector(&self) -> Vec3 {
        (self.target - self.position).normalize_or_zero()
    }

    /// Unit vector to the camera's right. Zero when the gaze is collinear
    /// with `up`.
    pub fn rightwards_vector(&self) -> Vec3 {
        self.forwards_vector().cross(self.up).normalize_or_zero()
    }

    /// Camera-relative up, orthogonal to forward and right.
    pub fn upwards_vector(&self) -> Vec3 {
        self.rightwards_vector()
            .cross(self.forwards_vector())
            .normalize_or_zero()
    }

    /// World-to-camera transform: `rotation(orientation) * translation(-position)`.
    pub fn view_matrix(&self) -> Mat4 {
        view_from(self.orientation, self.position)
    }

    /// Perspective projection (OpenGL clip conventions) for mono rendering.
    pub fn projection_matrix(&self) -> Result<Mat4, CameraError> {
        require_non_zero("screen_height", self.screen_height)?;
        require_non_zero("screen_width", self.screen_width)?;
        require_non_zero("fov", self.fov)?;
        self.validate_clip_range()?;
        Ok(Mat4::perspective_rh_gl(
            self.fov,
            self.screen_width / self.screen_height,
            self.near,
            self.far,
        ))
    }

    pub(crate) fn validate_clip_range(&self) -> Result<(), CameraError> {
        require_non_zero("near", self.near)?;
        require_non_zero("far", self.far)?;
        if self.near < 0.0 || self.near >= self.far {
            return Err(CameraError::InvalidClipRange {
                near: self.near,
                far: self.far,
            });
        }
        Ok(())
    }

    /// Camera rotation in world space as `(pitch, yaw, roll)` radians.
    pub fn euler_angles(&self) -> Vec3 {
        let (yaw, pitch, roll) = self.orientation.inverse().to_euler(EulerRot::YXZ);
        Vec3::new(pitch, yaw, roll)
    }

    /// Log the full camera state at debug level.
    pub fn dump(&self) {
        debug!("{self}");
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(CameraMode::default())
    }
}

impl fmt::Display for Camera {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let angles = self.euler_angles();
        write!(
            f,
            "mode={} position={} target={} up={} euler={} ipd={} fov={} near={} far={} screen={}x{}",
            self.mode,
            self.position,
            self.target,
            self.up,
            angles,
            self.ipd,
            self.fov,
            self.near,
            self.far,
            self.screen_width,
            self.screen_height,
        )
    }
}

pub(crate) fn view_from(orientation: Quat, eye: Vec3) -> Mat4 {
    Mat4::from_quat(orientation) * Mat4::from_translation(-eye)
}

pub(crate) fn require_non_zero(name: &'static str, value: f32) -> Result<(), CameraError> {
    if value == 0.0 {
        Err(CameraError::ZeroParameter { name })
    } else {
        Ok(())
    }
}
