//! Climbing surface queries.
//!
//! Stateless predicates over a [`Raycaster`]. A miss, or a hit that fails the
//! angle/distance tests, is `None`: an expected outcome that drives the climb
//! state's branching, never an error.

use glam::Vec3;

use super::{LayerMask, RaycastHit, Raycaster};

/// Largest vertical component a surface normal may have to count as a wall.
const WALL_MAX_NORMAL_Y: f32 = 0.7;

/// Casts along `forward` and returns the hit if it is a climbable wall facing
/// the caster within `max_angle` degrees.
pub fn can_climb(
    rays: &dyn Raycaster,
    origin: Vec3,
    forward: Vec3,
    max_distance: f32,
    max_angle: f32,
) -> Option<RaycastHit> {
    let hit = rays.cast(origin, forward, max_distance, LayerMask::SOLID)?;
    climbable_towards(&hit, forward, max_angle).then_some(hit)
}

/// Validates a move of a clinging player along `move_direction`.
///
/// Resolution order:
/// 1. Something blocks the move within `max_corner_distance`: accepted only
///    if it is a climbable wall (inner corner), returned as the new wall.
/// 2. The current wall continues at the destination.
/// 3. The wall ends at the destination: try to wrap around its outer edge.
pub fn can_move(
    rays: &dyn Raycaster,
    position: Vec3,
    forward: Vec3,
    move_direction: Vec3,
    max_corner_distance: f32,
    max_distance: f32,
    max_angle: f32,
) -> Option<RaycastHit> {
    let direction = move_direction.normalize_or_zero();
    if direction == Vec3::ZERO {
        return None;
    }

    if let Some(blocker) = rays.cast(position, direction, max_corner_distance, LayerMask::SOLID) {
        return (is_wall(&blocker) && climbable_towards(&blocker, direction, max_angle))
            .then_some(blocker);
    }

    let destination = position + direction * max_corner_distance;
    if let Some(hit) = can_climb(rays, destination, forward, max_distance, max_angle) {
        return Some(hit);
    }

    let around = destination + forward.normalize_or_zero() * max_distance;
    can_climb(rays, around, -direction, max_corner_distance, max_angle).filter(is_wall)
}

/// Looks for a standable ledge above the current wall.
///
/// Succeeds when there is no ceiling within `max_corner_distance` above,
/// nothing in front at that height, and a surface within `max_ledge_slope`
/// degrees of `up` just beyond the wall top.
pub fn can_climb_up(
    rays: &dyn Raycaster,
    position: Vec3,
    up: Vec3,
    forward: Vec3,
    max_corner_distance: f32,
    max_distance: f32,
    max_ledge_slope: f32,
) -> Option<RaycastHit> {
    let up = up.normalize_or_zero();
    let forward = forward.normalize_or_zero();

    if rays
        .cast(position, up, max_corner_distance, LayerMask::SOLID)
        .is_some()
    {
        return None;
    }

    let top = position + up * max_corner_distance;
    if rays.cast(top, forward, max_distance, LayerMask::SOLID).is_some() {
        return None;
    }

    let beyond = top + forward * max_distance;
    let ledge = rays.cast(beyond, -up, max_corner_distance * 2.0, LayerMask::SOLID)?;
    (ledge.normal.angle_between(up) <= max_ledge_slope.to_radians()).then_some(ledge)
}

/// True if walkable ground lies within `distance` below `position`.
pub fn is_touching_ground(rays: &dyn Raycaster, position: Vec3, distance: f32) -> bool {
    rays.cast(position, Vec3::NEG_Y, distance, LayerMask::GROUND)
        .is_some()
}

fn climbable_towards(hit: &RaycastHit, look: Vec3, max_angle: f32) -> bool {
    hit.layers.contains(LayerMask::CLIMBABLE)
        && hit.normal.angle_between(-look) <= max_angle.to_radians()
}

fn is_wall(hit: &RaycastHit) -> bool {
    hit.normal.y.abs() < WALL_MAX_NORMAL_Y
}
