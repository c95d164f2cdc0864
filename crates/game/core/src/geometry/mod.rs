//! Raycast service and the climbing surface queries built on it.
//!
//! The physics engine is an external collaborator reached only through
//! [`Raycaster`]. [`AabbWorld`] is a small box world implementing it, used by
//! the simulation binary and by tests.
pub mod climb;
mod world;

pub use world::{AabbWorld, Solid};

use glam::Vec3;

bitflags::bitflags! {
    /// Collision layers a surface belongs to, and layer filters for casts.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct LayerMask: u32 {
        const DEFAULT = 1 << 0;
        const FLOOR = 1 << 1;
        const CLIMBABLE = 1 << 2;
        const NON_CLIMBABLE = 1 << 3;
        const INTERACTABLE = 1 << 4;
    }
}

impl LayerMask {
    /// Surfaces the player can stand on.
    pub const GROUND: Self = Self::DEFAULT.union(Self::FLOOR);

    /// Every blocking surface. Interactables are triggers and never block.
    pub const SOLID: Self = Self::DEFAULT
        .union(Self::FLOOR)
        .union(Self::CLIMBABLE)
        .union(Self::NON_CLIMBABLE);

    /// Surfaces the player may orient against while clinging.
    pub const WALL_ORIENTATION: Self = Self::SOLID.difference(Self::NON_CLIMBABLE);
}

/// Opaque identifier of the collider a cast hit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SurfaceId(pub u32);

/// Result of a successful cast. Recomputed on every query, never cached.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RaycastHit {
    pub point: Vec3,
    /// Unit normal of the surface, pointing away from it.
    pub normal: Vec3,
    pub distance: f32,
    pub surface: SurfaceId,
    pub layers: LayerMask,
}

/// Ray queries against the collision world.
pub trait Raycaster {
    /// Casts from `origin` along `direction` (need not be normalized) and returns
    /// the closest hit within `max_distance` on a surface intersecting `mask`.
    fn cast(
        &self,
        origin: Vec3,
        direction: Vec3,
        max_distance: f32,
        mask: LayerMask,
    ) -> Option<RaycastHit>;
}
