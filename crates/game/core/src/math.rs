//! Orientation helpers on top of `glam`.
//!
//! Convention: local `+Z` is forward, `+Y` is up and `+X` is right.

use glam::{Mat3, Quat, Vec3};

/// Tolerance used when comparing normalized quantities (dot products, lengths).
pub const EPSILON: f32 = 1.0e-3;

pub fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() <= EPSILON
}

/// Rotation whose forward axis points along `forward`, keeping `up` as close
/// to its up axis as possible. Falls back to world Z as reference when the two
/// are parallel.
pub fn look_rotation(forward: Vec3, up: Vec3) -> Quat {
    let forward = forward.normalize_or_zero();
    if forward == Vec3::ZERO {
        return Quat::IDENTITY;
    }

    let mut right = up.cross(forward);
    if right.length_squared() < EPSILON * EPSILON {
        right = Vec3::Z.cross(forward);
        if right.length_squared() < EPSILON * EPSILON {
            right = Vec3::X;
        }
    }
    let right = right.normalize();
    let up = forward.cross(right);

    Quat::from_mat3(&Mat3::from_cols(right, up, forward)).normalize()
}

/// Keeps only the heading (rotation about world Y) of `rotation`.
pub fn upright_yaw(rotation: Quat) -> Quat {
    let forward = rotation * Vec3::Z;
    let flat = Vec3::new(forward.x, 0.0, forward.z);
    if flat.length_squared() < EPSILON * EPSILON {
        return Quat::IDENTITY;
    }
    Quat::from_rotation_y(flat.x.atan2(flat.z))
}

/// Rotates `from` towards `to` by at most `max_degrees`.
pub fn rotate_towards(from: Quat, to: Quat, max_degrees: f32) -> Quat {
    let angle = from.angle_between(to);
    if angle <= f32::EPSILON {
        return to;
    }
    let t = max_degrees.to_radians() / angle;
    if t >= 1.0 {
        return to;
    }
    from.slerp(to, t)
}
