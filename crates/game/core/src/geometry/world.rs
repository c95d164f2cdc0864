//! Axis-aligned box collision world.

use glam::Vec3;

use super::{LayerMask, RaycastHit, Raycaster, SurfaceId};

/// An axis-aligned solid box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Solid {
    pub min: Vec3,
    pub max: Vec3,
    pub layers: LayerMask,
    pub surface: SurfaceId,
}

impl Solid {
    /// Builds a box from its center and half extents.
    pub fn from_center(center: Vec3, half_extents: Vec3, layers: LayerMask, surface: SurfaceId) -> Self {
        Self {
            min: center - half_extents,
            max: center + half_extents,
            layers,
            surface,
        }
    }

    /// Slab test. Returns the entry distance and entry face normal.
    ///
    /// Rays starting inside the box do not hit it.
    fn intersect(&self, origin: Vec3, dir: Vec3, max_distance: f32) -> Option<(f32, Vec3)> {
        let mut t_near = f32::NEG_INFINITY;
        let mut t_far = f32::INFINITY;
        let mut normal = Vec3::ZERO;

        for axis in 0..3 {
            let o = origin[axis];
            let d = dir[axis];
            let (lo, hi) = (self.min[axis], self.max[axis]);

            if d.abs() < f32::EPSILON {
                if o < lo || o > hi {
                    return None;
                }
                continue;
            }

            let inv = 1.0 / d;
            let (mut t0, mut t1) = ((lo - o) * inv, (hi - o) * inv);
            let mut face = Vec3::ZERO;
            face[axis] = -d.signum();
            if t0 > t1 {
                core::mem::swap(&mut t0, &mut t1);
            }

            if t0 > t_near {
                t_near = t0;
                normal = face;
            }
            t_far = t_far.min(t1);
            if t_near > t_far {
                return None;
            }
        }

        if t_near < 0.0 || t_near > max_distance {
            return None;
        }
        Some((t_near, normal))
    }
}

/// A static world made of axis-aligned boxes.
#[derive(Clone, Debug, Default)]
pub struct AabbWorld {
    solids: Vec<Solid>,
}

impl AabbWorld {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_solid(mut self, solid: Solid) -> Self {
        self.solids.push(solid);
        self
    }

    pub fn push(&mut self, solid: Solid) {
        self.solids.push(solid);
    }

    pub fn solids(&self) -> &[Solid] {
        &self.solids
    }
}

impl Raycaster for AabbWorld {
    fn cast(
        &self,
        origin: Vec3,
        direction: Vec3,
        max_distance: f32,
        mask: LayerMask,
    ) -> Option<RaycastHit> {
        let dir = direction.normalize_or_zero();
        if dir == Vec3::ZERO || max_distance <= 0.0 {
            return None;
        }

        self.solids
            .iter()
            .filter(|solid| solid.layers.intersects(mask))
            .filter_map(|solid| {
                solid
                    .intersect(origin, dir, max_distance)
                    .map(|(distance, normal)| RaycastHit {
                        point: origin + dir * distance,
                        normal,
                        distance,
                        surface: solid.surface,
                        layers: solid.layers,
                    })
            })
            .min_by(|a, b| a.distance.total_cmp(&b.distance))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wall() -> AabbWorld {
        AabbWorld::new().with_solid(Solid::from_center(
            Vec3::new(0.0, 2.0, 2.5),
            Vec3::new(2.0, 2.0, 0.5),
            LayerMask::CLIMBABLE,
            SurfaceId(7),
        ))
    }

    #[test]
    fn hits_front_face_with_outward_normal() {
        let hit = wall()
            .cast(Vec3::new(0.0, 1.0, 0.0), Vec3::Z, 5.0, LayerMask::SOLID)
            .expect("wall in front");

        assert_eq!(hit.surface, SurfaceId(7));
        assert_eq!(hit.normal, Vec3::NEG_Z);
        assert!((hit.distance - 2.0).abs() < 1e-5);
        assert!((hit.point - Vec3::new(0.0, 1.0, 2.0)).length() < 1e-5);
    }

    #[test]
    fn respects_distance_and_mask() {
        let world = wall();
        assert!(world.cast(Vec3::new(0.0, 1.0, 0.0), Vec3::Z, 1.5, LayerMask::SOLID).is_none());
        assert!(world.cast(Vec3::new(0.0, 1.0, 0.0), Vec3::Z, 5.0, LayerMask::GROUND).is_none());
    }

    #[test]
    fn misses_when_pointing_away_or_passing_beside() {
        let world = wall();
        assert!(world.cast(Vec3::new(0.0, 1.0, 0.0), Vec3::NEG_Z, 5.0, LayerMask::SOLID).is_none());
        assert!(world.cast(Vec3::new(5.0, 1.0, 0.0), Vec3::Z, 5.0, LayerMask::SOLID).is_none());
    }

    #[test]
    fn picks_closest_solid() {
        let world = wall().with_solid(Solid::from_center(
            Vec3::new(0.0, 2.0, 1.0),
            Vec3::new(2.0, 2.0, 0.25),
            LayerMask::DEFAULT,
            SurfaceId(1),
        ));

        let hit = world
            .cast(Vec3::new(0.0, 1.0, 0.0), Vec3::Z, 5.0, LayerMask::SOLID)
            .expect("front box");
        assert_eq!(hit.surface, SurfaceId(1));
    }

    #[test]
    fn downward_cast_reports_top_face() {
        let floor = AabbWorld::new().with_solid(Solid::from_center(
            Vec3::new(0.0, -0.5, 0.0),
            Vec3::new(10.0, 0.5, 10.0),
            LayerMask::FLOOR,
            SurfaceId(0),
        ));

        let hit = floor
            .cast(Vec3::new(1.0, 0.3, 1.0), Vec3::NEG_Y, 1.0, LayerMask::GROUND)
            .expect("floor below");
        assert_eq!(hit.normal, Vec3::Y);
        assert!((hit.distance - 0.3).abs() < 1e-5);
    }
}
