#![allow(dead_code)]

use glam::Vec3;
use platformer_core::{
    AabbWorld, BodyConfig, InputFrame, LayerMask, PlayerConfig, PlayerController, PlayerEnv,
    SceneId, SimBody, Solid, SurfaceId,
};

/// Frame delta that sums exactly in binary floating point.
pub const DT: f32 = 0.0625;

pub const FLOOR: SurfaceId = SurfaceId(0);
pub const WALL_A: SurfaceId = SurfaceId(1);
pub const WALL_B: SurfaceId = SurfaceId(2);

/// Floor at y = 0, a climbable wall facing -Z spanning x in [-3, 1] and a
/// second climbable wall facing -X from x = 1, forming an inner corner.
/// Both walls top out at y = 3.
pub fn course() -> AabbWorld {
    AabbWorld::new()
        .with_solid(Solid {
            min: Vec3::new(-20.0, -1.0, -20.0),
            max: Vec3::new(20.0, 0.0, 20.0),
            layers: LayerMask::FLOOR,
            surface: FLOOR,
        })
        .with_solid(Solid {
            min: Vec3::new(-3.0, -1.0, 1.0),
            max: Vec3::new(1.0, 3.0, 3.0),
            layers: LayerMask::CLIMBABLE,
            surface: WALL_A,
        })
        .with_solid(Solid {
            min: Vec3::new(1.0, -1.0, -2.0),
            max: Vec3::new(3.0, 3.0, 3.0),
            layers: LayerMask::CLIMBABLE,
            surface: WALL_B,
        })
}

pub fn controller() -> PlayerController {
    PlayerController::new(PlayerConfig::default(), SceneId(1))
}

/// Airborne body at `position`, facing +Z. Tests never step it, so it hangs
/// in place unless the controller moves it.
pub fn body_at(position: Vec3) -> SimBody {
    SimBody::new(&BodyConfig::default()).at(position).airborne()
}

pub fn step(
    controller: &mut PlayerController,
    body: &mut SimBody,
    world: &AabbWorld,
    input: InputFrame,
) {
    let mut env = PlayerEnv::with_all(body, world, &input);
    controller.update(&mut env, DT);
}

/// Runs frames holding climb until the positioning onto the wall finishes.
pub fn grab_wall(controller: &mut PlayerController, body: &mut SimBody, world: &AabbWorld) {
    let hold = InputFrame::idle().with_climb();
    step(controller, body, world, hold);
    for _ in 0..4 {
        step(controller, body, world, hold);
    }
}

pub fn assert_near(actual: Vec3, expected: Vec3) {
    assert!(
        (actual - expected).length() < 1e-4,
        "{actual:?} is not close to {expected:?}"
    );
}
