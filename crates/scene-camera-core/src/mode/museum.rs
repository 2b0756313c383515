//! Museum mode: orbit around a fixed target.
//!
//! Forward and backward change the distance to the target, never closer
//! than [`MIN_ZOOM_DISTANCE`](crate::MIN_ZOOM_DISTANCE). Left, right, up
//! and down swing the eye around the target about the world Y axis
//! (left/right) or X axis (up/down). Pitch, yaw and roll are ignored.

use glam::Quat;

use crate::Camera;
use crate::mode::Direction;

pub(crate) fn apply(camera: &mut Camera, direction: Direction, amount: f32) {
    match direction {
        Direction::Forward => camera.dolly(amount),
        Direction::Backward => camera.dolly(-amount),
        Direction::Left => camera.orbit(Quat::from_rotation_y(amount)),
        Direction::Right => camera.orbit(Quat::from_rotation_y(-amount)),
        Direction::Up => camera.orbit(Quat::from_rotation_x(-amount)),
        Direction::Down => camera.orbit(Quat::from_rotation_x(amount)),
        Direction::PitchUp
        | Direction::PitchDown
        | Direction::YawLeft
        | Direction::YawRight
        | Direction::RollLeft
        | Direction::RollRight => {}
    }
}
