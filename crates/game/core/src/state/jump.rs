use glam::Vec3;

use super::{PlayerEvent, State, StateContext, StateKind, planar_direction};
use crate::ability::AbilitySlot;
use crate::config::JumpConfig;
use crate::env::CollaboratorError;
use crate::geometry::climb::{can_climb, is_touching_ground};
use crate::math::{look_rotation, rotate_towards};
use crate::timer::{CountDownTimer, SceneId};

/// Default locomotion on the ground and in the air.
///
/// Moves at jump speed, turns towards the movement direction and jumps on
/// press. Walking off a ledge opens a coyote window during which a jump is
/// still accepted. Releasing jump while rising cuts the jump short.
#[derive(Clone, Debug, PartialEq)]
pub struct Jump {
    coyote: CountDownTimer,
    was_grounded: bool,
    jumped: bool,
}

impl Jump {
    pub fn new(config: &JumpConfig, scene: SceneId) -> Self {
        Self {
            coyote: CountDownTimer::new(config.coyote_time, scene),
            was_grounded: false,
            jumped: false,
        }
    }

    pub fn in_coyote_time(&self) -> bool {
        self.coyote.is_running()
    }
}

impl State for Jump {
    fn on_enter(&mut self, ctx: &mut StateContext<'_, '_>) -> Result<(), CollaboratorError> {
        self.was_grounded = !ctx.env.body()?.is_in_the_air();
        self.jumped = false;
        self.coyote.stop();
        Ok(())
    }

    fn on_update(
        &mut self,
        ctx: &mut StateContext<'_, '_>,
        dt: f32,
    ) -> Result<(), CollaboratorError> {
        let config = ctx.config;
        let rays = ctx.env.raycaster()?;
        let input = ctx.env.input()?;
        let body = ctx.env.body()?;

        self.coyote.tick(dt);

        let grounded = !body.is_in_the_air();
        let landed = grounded && !self.was_grounded;
        if self.was_grounded && !grounded && !self.jumped {
            self.coyote.start();
        }
        if grounded {
            self.jumped = false;
        }
        self.was_grounded = grounded;

        let direction = planar_direction(input.horizontal());
        let moving = direction != Vec3::ZERO;
        if moving {
            body.move_horizontally(direction, config.jump.jump_speed);
            let turn_speed = if grounded {
                config.jump.turn_speed
            } else {
                config.jump.turn_speed_in_the_air
            };
            let target = look_rotation(direction, Vec3::Y);
            body.set_rotation(rotate_towards(body.rotation(), target, turn_speed * dt));
        } else {
            body.move_horizontally(Vec3::ZERO, 0.0);
        }

        let jump_now = input.jump_pressed() && (grounded || self.coyote.is_running());
        if jump_now {
            body.jump(config.jump.jump_force);
            self.coyote.stop();
            self.jumped = true;
        } else if !grounded && !input.jump_held() && body.velocity().y > 0.0 {
            body.stop_jump(dt);
        }

        let position = body.position();
        let wall = input.climb_held()
            && ctx.stamina.fill_state() >= 1.0
            && can_climb(
                rays,
                position,
                body.forward(),
                config.climb.max_distance_to_trigger_climb,
                config.climb.max_climb_angle,
            )
            .is_some();
        let can_glide = !grounded
            && input.glide_held()
            && body.velocity().y <= 0.0
            && !is_touching_ground(rays, position, config.jump.distance_to_ground);

        if landed {
            ctx.emit(PlayerEvent::Landed);
        }
        if jump_now {
            ctx.emit(PlayerEvent::Jumped);
        }

        if wall {
            ctx.change_state(StateKind::Climb);
        } else if can_glide && ctx.stamina.fill_state() >= 1.0 {
            ctx.change_state(StateKind::Glide);
        } else if grounded && !moving && !jump_now && !input.climb_held() {
            ctx.change_state(StateKind::Idle);
        }

        let slot = if grounded {
            AbilitySlot::Floor
        } else {
            AbilitySlot::Air
        };
        ctx.run_abilities(slot)
    }

    fn on_exit(&mut self, _ctx: &mut StateContext<'_, '_>) -> Result<(), CollaboratorError> {
        self.coyote.stop();
        Ok(())
    }
}
