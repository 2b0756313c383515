//! RTS mode: pan across the ground plane, zoom along the gaze, orbit the
//! ground target.
//!
//! | direction            | effect                                        |
//! |----------------------|-----------------------------------------------|
//! | Forward / Backward   | pan along the gaze projected onto the ground  |
//! | Left / Right         | pan sideways across the ground                |
//! | Up / Down            | orbit up / down about the world Y axis        |
//! | PitchUp / PitchDown  | zoom in / out along the true gaze             |
//! | YawLeft / YawRight   | orbit left / right about the world Y axis     |
//!
//! Every orbit uses the fixed world Y axis, not the ground plane normal.
//! With the default `+Z` ground normal this tilts the view rather than
//! spinning it around the vertical, and orbit up is the same rotation as
//! orbit left.
// TODO: orbit about `ground_normal` (left/right) and the ground side
// vector (up/down) once callers that rely on the Y-axis behaviour have
// moved over.

use glam::{Quat, Vec3};
use tracing::debug;

use crate::Camera;
use crate::mode::Direction;
use crate::plane::{plane_intercept, project_onto_plane};

pub(crate) fn apply(camera: &mut Camera, direction: Direction, amount: f32) {
    let forward = camera.forwards_vector();
    let ground_forward = project_onto_plane(camera.ground_normal, forward).normalize_or_zero();
    // Points to the left of the direction of travel.
    let ground_side = camera.up.cross(ground_forward).normalize_or_zero();

    match direction {
        Direction::Forward => pan(camera, ground_forward * amount),
        Direction::Backward => pan(camera, -ground_forward * amount),
        Direction::Left => pan(camera, ground_side * amount),
        Direction::Right => pan(camera, -ground_side * amount),
        Direction::Up | Direction::YawLeft => camera.orbit(Quat::from_rotation_y(amount)),
        Direction::Down | Direction::YawRight => camera.orbit(Quat::from_rotation_y(-amount)),
        Direction::PitchUp => camera.dolly(amount),
        Direction::PitchDown => camera.dolly(-amount),
        Direction::RollLeft | Direction::RollRight => {}
    }
}

/// Slide the eye and retarget onto the ground point straight ahead. The
/// gaze direction does not change, so the orientation is left alone.
///
/// Only hits in front of the eye count. A gaze parallel to the ground or
/// pointing away from it carries the target along with the eye.
fn pan(camera: &mut Camera, delta: Vec3) {
    let forward = camera.forwards_vector();
    camera.position += delta;
    let ahead = plane_intercept(camera.ground_normal, camera.position, forward)
        .filter(|hit| (*hit - camera.position).dot(forward) > 0.0);
    match ahead {
        Some(hit) => camera.target = hit,
        None => {
            debug!("Gaze does not meet the ground ahead, carrying target with pan");
            camera.target += delta;
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{Camera, CameraMode, Direction, MIN_ZOOM_DISTANCE};
    use glam::{Mat4, Quat, Vec3};

    fn rts() -> Camera {
        Camera::new(CameraMode::Rts)
    }

    #[test]
    fn test_pan_forward_stays_at_same_height() {
        let mut camera = rts();
        camera.move_in(Direction::Forward, 1.0);
        let expected_step = Vec3::new(-1.0, -1.0, 0.0).normalize();
        assert!(camera.position().abs_diff_eq(Vec3::splat(5.0) + expected_step, 1e-5));
        assert!((camera.position().z - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_pan_retargets_onto_ground() {
        let mut camera = rts();
        camera.move_in(Direction::Forward, 2.0);
        camera.move_in(Direction::Left, 1.5);
        assert!(camera.target().z.abs() < 1e-5);
        let step = 2.0 * Vec3::new(-1.0, -1.0, 0.0).normalize();
        let side = 1.5 * Vec3::new(1.0, -1.0, 0.0).normalize();
        assert!(camera.target().abs_diff_eq(step + side, 1e-4));
    }

    #[test]
    fn test_pan_keeps_orientation() {
        let mut camera = rts();
        let orientation = camera.orientation();
        camera.move_in(Direction::Right, 3.0);
        camera.move_in(Direction::Backward, 1.0);
        assert_eq!(camera.orientation(), orientation);
        let look_at = Mat4::look_at_rh(camera.position(), camera.target(), camera.up());
        assert!(camera.view_matrix().abs_diff_eq(look_at, 1e-4));
    }

    #[test]
    fn test_pan_left_and_right_are_opposite() {
        let mut camera = rts();
        let start = camera.position();
        camera.move_in(Direction::Right, 1.0);
        let right_step = camera.position() - start;
        assert!(right_step.dot(camera.rightwards_vector()) > 0.99);
        camera.move_in(Direction::Left, 1.0);
        assert!(camera.position().abs_diff_eq(start, 1e-5));
    }

    #[test]
    fn test_zoom_moves_along_gaze_and_keeps_target() {
        let mut camera = rts();
        let start = camera.position();
        let forward = camera.forwards_vector();
        camera.move_in(Direction::PitchUp, 1.0);
        assert!(camera.position().abs_diff_eq(start + forward, 1e-5));
        camera.move_in(Direction::PitchDown, 1.0);
        assert!(camera.position().abs_diff_eq(start, 1e-5));
        assert!(camera.target().abs_diff_eq(Vec3::ZERO, 1e-5));
    }

    #[test]
    fn test_orbit_roundtrip() {
        let mut camera = rts();
        let start = camera.position();
        camera.move_in(Direction::YawLeft, 0.6);
        camera.move_in(Direction::YawRight, 0.6);
        assert!(camera.position().abs_diff_eq(start, 1e-5));
    }

    #[test]
    fn test_orbit_uses_world_y_axis() {
        let mut camera = rts();
        let offset = camera.position() - camera.target();
        camera.move_in(Direction::YawLeft, 0.5);
        let expected = camera.target() + Quat::from_rotation_y(0.5) * offset;
        assert!(camera.position().abs_diff_eq(expected, 1e-5));
        // Height above the ground changes because the axis is Y, not the
        // ground normal.
        assert!((camera.position().z - 5.0).abs() > 1e-3);
        assert!((camera.position().y - 5.0).abs() < 1e-5);
    }

    #[test]
    fn test_pan_parallel_to_ground_carries_target() {
        let mut camera = rts();
        camera.set_position(Vec3::new(0.0, 0.0, 5.0));
        camera.look_at(Vec3::new(0.0, 10.0, 5.0));
        let target = camera.target();
        camera.move_in(Direction::Forward, 1.0);
        assert!(camera.position().abs_diff_eq(Vec3::new(0.0, 1.0, 5.0), 1e-5));
        assert!(camera.target().abs_diff_eq(target + Vec3::Y, 1e-5));
    }

    #[test]
    fn test_unused_codes_are_noops() {
        let mut camera = rts();
        let position = camera.position();
        for code in [10, 11] {
            camera.move_by_code(code, 1.0);
        }
        assert_eq!(camera.position(), position);
    }

    #[test]
    fn test_orbit_up_down_uses_world_y_axis() {
        let mut camera = rts();
        let offset = camera.position() - camera.target();
        camera.move_by_code(4, 0.5);
        let expected = camera.target() + Quat::from_rotation_y(0.5) * offset;
        assert!(camera.position().abs_diff_eq(expected, 1e-5));
        assert!((camera.position().y - 5.0).abs() < 1e-5);

        camera.move_by_code(5, 0.5);
        assert!(camera.position().abs_diff_eq(Vec3::splat(5.0), 1e-5));
        let look_at = Mat4::look_at_rh(camera.position(), camera.target(), camera.up());
        assert!(camera.view_matrix().abs_diff_eq(look_at, 1e-5));
    }

    #[test]
    fn test_zoom_stops_short_of_target() {
        let mut camera = rts();
        let forward = camera.forwards_vector();
        camera.move_in(Direction::PitchUp, 100.0);
        assert!((camera.position().distance(camera.target()) - MIN_ZOOM_DISTANCE).abs() < 1e-4);
        assert!(camera.forwards_vector().abs_diff_eq(forward, 1e-4));
    }

    #[test]
    fn test_pan_with_gaze_above_horizon_keeps_direction() {
        let mut camera = rts();
        camera.set_position(Vec3::new(0.0, 0.0, 5.0));
        camera.look_at(Vec3::new(0.0, 10.0, 6.0));
        let forward = camera.forwards_vector();

        let start = camera.position();
        camera.move_in(Direction::Forward, 1.0);
        let first_step = camera.position() - start;
        assert!(camera.forwards_vector().abs_diff_eq(forward, 1e-5));
        assert!(camera.target().abs_diff_eq(Vec3::new(0.0, 11.0, 6.0), 1e-5));

        let mid = camera.position();
        camera.move_in(Direction::Forward, 1.0);
        let second_step = camera.position() - mid;
        assert!(first_step.abs_diff_eq(Vec3::Y, 1e-5));
        assert!(second_step.abs_diff_eq(first_step, 1e-5));

        let look_at = Mat4::look_at_rh(camera.position(), camera.target(), camera.up());
        assert!(camera.view_matrix().abs_diff_eq(look_at, 1e-4));
    }
}
