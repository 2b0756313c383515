//! Plane projection and ray/plane intersection helpers.
//!
//! Used by the RTS movement mode to keep panning locked to the ground plane
//! and to find the ground point the camera is aiming at.

use glam::Vec3;

/// Below this `|normal · direction|` a ray is treated as parallel to the plane.
const PARALLEL_EPSILON: f32 = 1e-6;

/// Project `vector` onto the plane with the given `normal`.
///
/// Both inputs are normalized first, so the result is the in-plane component
/// of the unit `vector`. It is not renormalized: a vector almost parallel to
/// the normal yields a very short result.
pub fn project_onto_plane(normal: Vec3, vector: Vec3) -> Vec3 {
    let n = normal.normalize_or_zero();
    let v = vector.normalize_or_zero();
    v - n * n.dot(v)
}

/// Intersect the line through `ray_origin` along `ray_direction` with the
/// plane through the world origin with normal `plane_normal`.
///
/// Returns `None` when the ray is parallel to the plane.
pub fn plane_intercept(plane_normal: Vec3, ray_origin: Vec3, ray_direction: Vec3) -> Option<Vec3> {
    plane_intercept_at(Vec3::ZERO, plane_normal, ray_origin, ray_direction)
}

/// Intersect a ray with the plane through `plane_origin` with normal
/// `plane_normal`. Returns `None` when the ray is parallel to the plane.
pub fn plane_intercept_at(
    plane_origin: Vec3,
    plane_normal: Vec3,
    ray_origin: Vec3,
    ray_direction: Vec3,
) -> Option<Vec3> {
    let denom = plane_normal.dot(ray_direction);
    if denom.abs() < PARALLEL_EPSILON {
        return None;
    }
    let t = plane_normal.dot(plane_origin - ray_origin) / denom;
    Some(ray_origin + ray_direction * t)
}

/// Like [`plane_intercept`], but returns `Vec3::ZERO` for a parallel ray.
///
/// The zero vector is indistinguishable from a genuine hit at the origin;
/// callers that care should use [`plane_intercept`].
pub fn plane_intercept_or_zero(plane_normal: Vec3, ray_origin: Vec3, ray_direction: Vec3) -> Vec3 {
    plane_intercept(plane_normal, ray_origin, ray_direction).unwrap_or(Vec3::ZERO)
}

/// Like [`plane_intercept_at`], but returns `Vec3::ZERO` for a parallel ray.
pub fn plane_intercept_at_or_zero(
    plane_origin: Vec3,
    plane_normal: Vec3,
    ray_origin: Vec3,
    ray_direction: Vec3,
) -> Vec3 {
    plane_intercept_at(plane_origin, plane_normal, ray_origin, ray_direction).unwrap_or(Vec3::ZERO)
}
