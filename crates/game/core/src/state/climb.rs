//! Wall climbing.
//!
//! Entering snaps the player onto the wall in front with a short eased
//! interpolation. While clinging, stick input moves the player along the
//! wall, around corners and, when pushing up at the top, over the ledge.
//! Stamina drains while moving and refill is paused for the whole climb.

use glam::{Quat, Vec3};
use tracing::debug;

use super::{PlayerEvent, State, StateContext, StateKind};
use crate::ability::AbilitySlot;
use crate::body::{Body, BodyEvent};
use crate::config::ClimbConfig;
use crate::env::CollaboratorError;
use crate::geometry::climb::{can_climb, can_climb_up, can_move, is_touching_ground};
use crate::geometry::{LayerMask, RaycastHit, Raycaster, SurfaceId};
use crate::math::{look_rotation, upright_yaw};
use crate::stamina::StaminaConsumer;
use crate::timer::{ActionOverTime, CountDownTimer, ProgressCurve, SceneId};

/// Input within this distance of straight up counts as climbing up.
const UP_INPUT_TOLERANCE: f32 = 0.01;
/// Fraction of the body height the feet end up above a mantled ledge.
const MANTLE_LIFT_RATIO: f32 = 0.2;

/// Outcome of one frame of wall input.
#[derive(Clone, Copy, Debug, PartialEq)]
enum WallMove {
    /// The move leads onto another surface.
    Reposition(RaycastHit),
    /// The move stays on the current wall.
    Slide(Vec3),
    /// Climbing up over the top of the wall.
    Mantle(RaycastHit),
    Hold,
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Pose {
    position: Vec3,
    rotation: Quat,
}

impl Pose {
    fn of(body: &dyn Body) -> Self {
        Self {
            position: body.position(),
            rotation: body.rotation(),
        }
    }

    fn lerp(&self, target: &Pose, t: f32) -> Self {
        Self {
            position: self.position.lerp(target.position, t),
            rotation: self.rotation.slerp(target.rotation, t),
        }
    }
}

/// Clinging to a climbable wall.
#[derive(Clone, Debug, PartialEq)]
pub struct Climb {
    consumer: StaminaConsumer,
    positioning: ActionOverTime,
    /// Returns to Jump when entering found no wall to ease onto.
    fallback: CountDownTimer,
    origin: Pose,
    target: Pose,
    current_wall: Option<SurfaceId>,
    mantling: bool,
    engaged: bool,
}

impl Climb {
    pub fn new(config: &ClimbConfig, scene: SceneId) -> Self {
        let rest = Pose {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
        };
        Self {
            consumer: StaminaConsumer::new(
                config.stamina_per_second,
                config.stamina_consuming_delay,
                scene,
            ),
            positioning: ActionOverTime::new(config.positioning_time, scene)
                .with_curve(ProgressCurve::SinBezier),
            fallback: CountDownTimer::new(config.positioning_time, scene),
            origin: rest,
            target: rest,
            current_wall: None,
            mantling: false,
            engaged: false,
        }
    }

    /// Surface the player is currently attached to.
    pub fn current_wall(&self) -> Option<SurfaceId> {
        self.current_wall
    }

    /// True while easing onto a wall or over a ledge.
    pub fn is_positioning(&self) -> bool {
        self.positioning.is_running()
    }

    pub fn is_mantling(&self) -> bool {
        self.mantling
    }

    pub fn is_consuming(&self) -> bool {
        self.consumer.is_consuming()
    }

    /// Position the current interpolation is heading to.
    pub fn target_position(&self) -> Vec3 {
        self.target.position
    }

    fn reset_position(&mut self, body: &dyn Body, hit: &RaycastHit, offset: f32) {
        self.origin = Pose::of(body);
        self.target = Pose {
            position: hit.point + hit.normal * offset,
            rotation: look_rotation(-hit.normal, Vec3::Y),
        };
        self.current_wall = Some(hit.surface);
        self.mantling = false;
        self.positioning.start();
    }

    fn get_over_cliff(&mut self, body: &dyn Body, ledge: &RaycastHit, height: f32) {
        self.origin = Pose::of(body);
        self.target = Pose {
            position: ledge.point + body.up() * height * MANTLE_LIFT_RATIO,
            rotation: body.rotation(),
        };
        self.mantling = true;
        self.positioning.start();
    }

    fn plan(
        &self,
        rays: &dyn Raycaster,
        body: &dyn Body,
        stick: glam::Vec2,
        config: &ClimbConfig,
    ) -> WallMove {
        let position = body.position();
        let (right, up, forward) = (body.right(), body.up(), body.forward());

        let mut direction = right * stick.x + up * stick.y;
        if direction.y < 0.0
            && is_touching_ground(rays, position, config.max_distance_from_corners)
        {
            direction.y = 0.0;
        }
        if direction == Vec3::ZERO {
            return WallMove::Hold;
        }

        if let Some(hit) = can_move(
            rays,
            position,
            forward,
            direction,
            config.max_distance_from_corners,
            config.max_distance_to_trigger_climb,
            config.max_climb_angle,
        ) {
            return if Some(hit.surface) == self.current_wall {
                WallMove::Slide(direction)
            } else {
                WallMove::Reposition(hit)
            };
        }

        if (direction.dot(up) - 1.0).abs() <= UP_INPUT_TOLERANCE {
            if let Some(ledge) = can_climb_up(
                rays,
                position,
                up,
                forward,
                config.max_distance_from_corners,
                config.max_distance_to_trigger_climb,
                config.max_ledge_slope,
            ) {
                return WallMove::Mantle(ledge);
            }
        }

        WallMove::Hold
    }
}

impl State for Climb {
    fn on_enter(&mut self, ctx: &mut StateContext<'_, '_>) -> Result<(), CollaboratorError> {
        if ctx.stamina.fill_state() < 1.0 {
            debug!(
                target: "platformer::state",
                fill = ctx.stamina.fill_state(),
                "too tired to climb"
            );
            ctx.change_state(StateKind::Jump);
            return Ok(());
        }

        let config = ctx.config;
        let climb = &config.climb;
        let rays = ctx.env.raycaster()?;
        ctx.env.body_ref()?;

        self.engaged = true;
        self.consumer.start();
        ctx.stamina.stop_refilling();
        ctx.emit(PlayerEvent::StartedClimbing);

        let body = ctx.env.body()?;
        body.notify(BodyEvent::Climb);
        body.set_kinematic(true);

        match can_climb(
            rays,
            body.position(),
            body.forward(),
            climb.max_distance_to_trigger_climb,
            climb.max_climb_angle,
        ) {
            Some(hit) => self.reset_position(body, &hit, climb.climbing_position_offset),
            None => {
                debug!(target: "platformer::state", "no wall in reach");
                self.fallback.start();
            }
        }
        Ok(())
    }

    fn on_update(
        &mut self,
        ctx: &mut StateContext<'_, '_>,
        dt: f32,
    ) -> Result<(), CollaboratorError> {
        let config = ctx.config;
        let climb = &config.climb;
        let rays = ctx.env.raycaster()?;
        let input = ctx.env.input()?;
        let body = ctx.env.body()?;

        let progress = self.positioning.tick(dt);
        let fallback = self.fallback.tick(dt);
        self.consumer.update(dt, ctx.stamina);

        if let Some(progress) = progress {
            let pose = self.origin.lerp(&self.target, progress);
            body.set_position(pose.position);
            body.set_rotation(pose.rotation);
        }

        let mantled = self.mantling && progress.is_some_and(|p| p >= 1.0);
        if mantled || (fallback && self.current_wall.is_none()) {
            ctx.change_state(StateKind::Jump);
            return Ok(());
        }
        if self.positioning.is_running() {
            return Ok(());
        }

        match self.plan(rays, &*body, input.horizontal(), climb) {
            WallMove::Reposition(hit) => {
                debug!(target: "platformer::state", surface = hit.surface.0, "moving onto new wall");
                self.reset_position(&*body, &hit, climb.climbing_position_offset);
            }
            WallMove::Slide(direction) => {
                if !self.consumer.is_consuming() {
                    self.consumer.start();
                }
                let position = body.position();
                body.translate(direction, climb.climb_speed, dt);
                if let Some(wall) = rays.cast(
                    position,
                    body.forward(),
                    climb.max_distance_to_trigger_climb,
                    LayerMask::WALL_ORIENTATION,
                ) {
                    body.set_rotation(look_rotation(-wall.normal, Vec3::Y));
                }
            }
            WallMove::Mantle(ledge) => {
                debug!(target: "platformer::state", "climbing over ledge");
                self.get_over_cliff(&*body, &ledge, config.body.height);
            }
            WallMove::Hold => self.consumer.stop(),
        }

        if !input.climb_held() || ctx.stamina.fill_state() < 1.0 {
            ctx.change_state(StateKind::Jump);
            ctx.emit(PlayerEvent::Jumped);
        }

        ctx.run_abilities(AbilitySlot::Wall)
    }

    fn on_exit(&mut self, ctx: &mut StateContext<'_, '_>) -> Result<(), CollaboratorError> {
        if !self.engaged {
            return Ok(());
        }
        self.engaged = false;
        self.positioning.stop();
        self.fallback.stop();
        self.consumer.stop();
        ctx.stamina.resume_refilling();

        let body = ctx.env.body()?;
        body.set_kinematic(false);
        body.set_rotation(upright_yaw(body.rotation()));
        Ok(())
    }
}
