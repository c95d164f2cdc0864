//! Movement primitives decoupled from the physics engine.
//!
//! States drive the player exclusively through [`Body`]. Hosts implement it
//! on top of their rigid body; [`SimBody`] is a minimal integrator used by the
//! simulation binary and by tests.
mod sim;

pub use sim::SimBody;

use glam::{Quat, Vec3};

/// Notifications a body broadcasts to its observers.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum BodyEvent {
    /// Touched an interactable trigger volume.
    Trigger,
    /// Jump impulse applied, or walked off a ledge.
    Jump,
    Climb,
    Land,
}

/// Physical body of the player.
///
/// Forward is local `+Z`, up is local `+Y`, right is local `+X`.
pub trait Body {
    fn position(&self) -> Vec3;

    fn set_position(&mut self, position: Vec3);

    fn rotation(&self) -> Quat;

    fn set_rotation(&mut self, rotation: Quat);

    fn velocity(&self) -> Vec3;

    fn set_velocity(&mut self, velocity: Vec3);

    /// Moves the body directly, bypassing velocity. Used while kinematic.
    fn translate(&mut self, direction: Vec3, speed: f32, dt: f32) {
        let position = self.position();
        self.set_position(position + direction * speed * dt);
    }

    /// Sets the horizontal velocity, keeping the vertical component.
    fn move_horizontally(&mut self, direction: Vec3, speed: f32) {
        let vertical = self.velocity().y;
        self.set_velocity(direction * speed + Vec3::Y * vertical);
    }

    /// Requests a jump with the given upward impulse.
    fn jump(&mut self, force: f32);

    /// Cuts a jump short while the jump button is released.
    fn stop_jump(&mut self, dt: f32);

    fn push(&mut self, impulse: Vec3);

    fn set_kinematic(&mut self, kinematic: bool);

    fn is_kinematic(&self) -> bool;

    fn drag(&self) -> f32;

    fn set_drag(&mut self, drag: f32);

    fn is_in_the_air(&self) -> bool;

    /// Broadcasts a body event raised by gameplay logic.
    fn notify(&mut self, _event: BodyEvent) {}

    fn forward(&self) -> Vec3 {
        self.rotation() * Vec3::Z
    }

    fn right(&self) -> Vec3 {
        self.rotation() * Vec3::X
    }

    fn up(&self) -> Vec3 {
        self.rotation() * Vec3::Y
    }
}
