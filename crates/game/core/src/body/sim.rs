use glam::{Quat, Vec3};
use tracing::debug;

use super::{Body, BodyEvent};
use crate::config::BodyConfig;
use crate::geometry::{LayerMask, Raycaster};

/// How far above the feet the ground probe starts.
const GROUND_PROBE_LIFT: f32 = 0.3;
/// Extra reach below the feet that still counts as standing.
const GROUND_SNAP: f32 = 0.05;

type Observer = Box<dyn FnMut(BodyEvent)>;

/// Minimal point-mass body with unit mass.
///
/// Jump requests are applied on the next [`step`](Self::step): vertical
/// velocity is zeroed, then the impulse added. Falling is accelerated by
/// `fall_multiplier`, speed is clamped to `max_speed` and drag damps velocity
/// each step. A kinematic body ignores velocity entirely.
pub struct SimBody {
    config: BodyConfig,
    position: Vec3,
    rotation: Quat,
    velocity: Vec3,
    drag: f32,
    kinematic: bool,
    in_the_air: bool,
    jump_request: Option<f32>,
    observers: Vec<Observer>,
}

impl SimBody {
    pub fn new(config: &BodyConfig) -> Self {
        Self {
            config: config.clone(),
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            velocity: Vec3::ZERO,
            drag: config.default_drag,
            kinematic: false,
            in_the_air: false,
            jump_request: None,
            observers: Vec::new(),
        }
    }

    pub fn at(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    pub fn facing(mut self, rotation: Quat) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn airborne(mut self) -> Self {
        self.in_the_air = true;
        self
    }

    /// Registers an observer. Observers run in registration order.
    pub fn subscribe(&mut self, observer: impl FnMut(BodyEvent) + 'static) {
        self.observers.push(Box::new(observer));
    }

    pub fn config(&self) -> &BodyConfig {
        &self.config
    }

    pub fn has_jump_request(&self) -> bool {
        self.jump_request.is_some()
    }

    /// Integrates one physics step.
    pub fn step(&mut self, dt: f32) {
        if self.kinematic || dt <= 0.0 {
            return;
        }

        if let Some(force) = self.jump_request.take() {
            self.velocity.y = 0.0;
            self.velocity += Vec3::Y * force;
            self.emit(BodyEvent::Jump);
        }

        let gravity = self.config.gravity;
        self.velocity.y -= gravity * dt;
        if self.velocity.y < 0.5 && self.velocity.y > -10.0 {
            self.velocity.y -= gravity * (self.config.fall_multiplier - 1.0) * dt;
        }

        if self.drag > 0.0 {
            self.velocity /= 1.0 + self.drag * dt;
        }
        self.velocity = self.velocity.clamp_length_max(self.config.max_speed);

        self.position += self.velocity * dt;
    }

    /// Snaps the body onto ground found below its feet and keeps the
    /// airborne flag in sync, raising `Land` and `Jump` on changes.
    pub fn resolve_ground(&mut self, rays: &dyn Raycaster) {
        if self.kinematic {
            return;
        }

        let origin = self.position + Vec3::Y * GROUND_PROBE_LIFT;
        let ground = rays
            .cast(
                origin,
                Vec3::NEG_Y,
                GROUND_PROBE_LIFT + GROUND_SNAP,
                LayerMask::GROUND,
            )
            .filter(|_| self.velocity.y <= 0.0);

        match ground {
            Some(hit) => {
                self.position.y = hit.point.y;
                self.velocity.y = 0.0;
                if self.in_the_air {
                    self.land();
                }
            }
            None if !self.in_the_air => self.leave_ground(),
            None => {}
        }
    }

    pub fn land(&mut self) {
        self.in_the_air = false;
        self.emit(BodyEvent::Land);
    }

    pub fn leave_ground(&mut self) {
        self.in_the_air = true;
        self.emit(BodyEvent::Jump);
    }

    pub fn enter_trigger(&mut self) {
        self.emit(BodyEvent::Trigger);
    }

    fn emit(&mut self, event: BodyEvent) {
        debug!(target: "platformer::body", %event, "body event");
        for observer in &mut self.observers {
            observer(event);
        }
    }
}

impl Body for SimBody {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    fn rotation(&self) -> Quat {
        self.rotation
    }

    fn set_rotation(&mut self, rotation: Quat) {
        self.rotation = rotation.normalize();
    }

    fn velocity(&self) -> Vec3 {
        self.velocity
    }

    fn set_velocity(&mut self, velocity: Vec3) {
        self.velocity = velocity;
    }

    fn jump(&mut self, force: f32) {
        self.jump_request = Some(force);
    }

    fn stop_jump(&mut self, dt: f32) {
        self.velocity.y -= self.config.gravity * (self.config.low_jump_multiplier - 1.0) * dt;
    }

    fn push(&mut self, impulse: Vec3) {
        self.velocity += impulse;
    }

    fn set_kinematic(&mut self, kinematic: bool) {
        self.kinematic = kinematic;
        if kinematic {
            self.velocity = Vec3::ZERO;
            self.jump_request = None;
        }
    }

    fn is_kinematic(&self) -> bool {
        self.kinematic
    }

    fn drag(&self) -> f32 {
        self.drag
    }

    fn set_drag(&mut self, drag: f32) {
        self.drag = drag.max(0.0);
    }

    fn is_in_the_air(&self) -> bool {
        self.in_the_air
    }

    fn notify(&mut self, event: BodyEvent) {
        self.emit(event);
    }
}

impl core::fmt::Debug for SimBody {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SimBody")
            .field("position", &self.position)
            .field("rotation", &self.rotation)
            .field("velocity", &self.velocity)
            .field("drag", &self.drag)
            .field("kinematic", &self.kinematic)
            .field("in_the_air", &self.in_the_air)
            .field("observers", &self.observers.len())
            .finish()
    }
}
