use glam::Vec3;

use super::{PlayerEvent, State, StateContext, StateKind, planar_direction};
use crate::ability::AbilitySlot;
use crate::config::GlideConfig;
use crate::env::CollaboratorError;
use crate::geometry::climb::is_touching_ground;
use crate::math::{look_rotation, rotate_towards};
use crate::stamina::StaminaConsumer;
use crate::timer::{ActionOverTime, CountDownTimer, ProgressCurve, SceneId};

/// Slow descent with raised drag.
///
/// After `acceleration_delay` seconds the glide ramps from its base drag and
/// speed to the accelerated values over `acceleration_time`.
#[derive(Clone, Debug, PartialEq)]
pub struct Glide {
    consumer: StaminaConsumer,
    acceleration_delay: CountDownTimer,
    acceleration: ActionOverTime,
    previous_drag: f32,
    drag: f32,
    speed: f32,
    engaged: bool,
}

impl Glide {
    pub fn new(config: &GlideConfig, scene: SceneId) -> Self {
        Self {
            consumer: StaminaConsumer::new(
                config.stamina_per_second,
                config.stamina_consumption_delay,
                scene,
            ),
            acceleration_delay: CountDownTimer::new(config.acceleration_delay, scene),
            acceleration: ActionOverTime::new(config.acceleration_time, scene)
                .with_curve(ProgressCurve::SinBezier),
            previous_drag: 0.0,
            drag: config.drag,
            speed: config.speed,
            engaged: false,
        }
    }

    pub fn drag(&self) -> f32 {
        self.drag
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn is_accelerating(&self) -> bool {
        self.acceleration.is_running()
    }
}

impl State for Glide {
    fn on_enter(&mut self, ctx: &mut StateContext<'_, '_>) -> Result<(), CollaboratorError> {
        if ctx.stamina.fill_state() < 1.0 {
            ctx.change_state(StateKind::Jump);
            return Ok(());
        }

        let config = &ctx.config.glide;
        self.drag = config.drag;
        self.speed = config.speed;

        let body = ctx.env.body()?;
        self.previous_drag = body.drag();
        body.set_drag(self.drag);

        self.engaged = true;
        self.consumer.start();
        self.acceleration_delay.start();
        ctx.stamina.stop_refilling();
        ctx.emit(PlayerEvent::StartedGliding);
        Ok(())
    }

    fn on_update(
        &mut self,
        ctx: &mut StateContext<'_, '_>,
        dt: f32,
    ) -> Result<(), CollaboratorError> {
        let config = ctx.config;
        let glide = &config.glide;
        let rays = ctx.env.raycaster()?;
        let input = ctx.env.input()?;
        let body = ctx.env.body()?;

        self.consumer.update(dt, ctx.stamina);
        if self.acceleration_delay.tick(dt) {
            self.acceleration.start();
        }
        if let Some(progress) = self.acceleration.tick(dt) {
            self.drag = glide.drag + (glide.accelerated_drag - glide.drag) * progress;
            self.speed = glide.speed + (glide.accelerated_speed - glide.speed) * progress;
        }
        body.set_drag(self.drag);

        let direction = planar_direction(input.horizontal());
        if direction != Vec3::ZERO {
            body.move_horizontally(direction, self.speed);
            let target = look_rotation(direction, Vec3::Y);
            body.set_rotation(rotate_towards(
                body.rotation(),
                target,
                config.jump.turn_speed_in_the_air * dt,
            ));
        } else {
            let forward = body.forward();
            let heading = Vec3::new(forward.x, 0.0, forward.z).normalize_or_zero();
            body.move_horizontally(heading, self.speed);
        }

        let near_ground = !body.is_in_the_air()
            || is_touching_ground(rays, body.position(), config.jump.distance_to_ground);
        if !input.glide_held() || near_ground || ctx.stamina.fill_state() < 1.0 {
            ctx.change_state(StateKind::Jump);
        }

        ctx.run_abilities(AbilitySlot::Air)
    }

    fn on_exit(&mut self, ctx: &mut StateContext<'_, '_>) -> Result<(), CollaboratorError> {
        if !self.engaged {
            return Ok(());
        }
        self.engaged = false;
        self.consumer.stop();
        self.acceleration_delay.stop();
        self.acceleration.stop();
        ctx.stamina.resume_refilling();

        ctx.env.body()?.set_drag(self.previous_drag);
        Ok(())
    }
}
