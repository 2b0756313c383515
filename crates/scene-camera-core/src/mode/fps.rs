//! First-person mode: the eye and the look-at point move together.
//!
//! Translations carry the target along so the gaze direction is unchanged.
//! Pitch and yaw swing the target around the eye about the camera's right
//! and up axes. Roll turns the camera's `up` vector about the gaze; the
//! rolled `up` stays in effect after a mode switch until it is set again or
//! the camera is reset.

use glam::{Quat, Vec3};

use crate::Camera;
use crate::mode::Direction;

pub(crate) fn apply(camera: &mut Camera, direction: Direction, amount: f32) {
    let forward = camera.forwards_vector();
    let right = camera.rightwards_vector();
    let up = camera.upwards_vector();

    match direction {
        Direction::Forward => carry(camera, forward * amount),
        Direction::Backward => carry(camera, -forward * amount),
        Direction::Left => carry(camera, -right * amount),
        Direction::Right => carry(camera, right * amount),
        Direction::Up => carry(camera, up * amount),
        Direction::Down => carry(camera, -up * amount),
        Direction::PitchUp => turn(camera, right, amount),
        Direction::PitchDown => turn(camera, right, -amount),
        Direction::YawLeft => turn(camera, up, amount),
        Direction::YawRight => turn(camera, up, -amount),
        Direction::RollLeft => roll(camera, forward, -amount),
        Direction::RollRight => roll(camera, forward, amount),
    }
}

fn carry(camera: &mut Camera, delta: Vec3) {
    camera.position += delta;
    camera.target += delta;
    camera.reaim();
}

fn turn(camera: &mut Camera, axis: Vec3, angle: f32) {
    if axis == Vec3::ZERO {
        return;
    }
    let offset = camera.target - camera.position;
    camera.target = camera.position + Quat::from_axis_angle(axis, angle) * offset;
    camera.reaim();
}

fn roll(camera: &mut Camera, forward: Vec3, angle: f32) {
    if forward == Vec3::ZERO {
        return;
    }
    camera.up = Quat::from_axis_angle(forward, angle) * camera.up;
    camera.reaim();
}
