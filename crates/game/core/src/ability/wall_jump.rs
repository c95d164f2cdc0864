use glam::Vec3;

use super::Ability;
use crate::config::WallJumpConfig;
use crate::env::CollaboratorError;
use crate::state::{PlayerEvent, StateContext, StateKind};

/// Kicks off the wall on a jump press and hands control back to Jump.
#[derive(Clone, Debug, PartialEq)]
pub struct WallJump {
    config: WallJumpConfig,
}

impl WallJump {
    pub fn new(config: WallJumpConfig) -> Self {
        Self { config }
    }
}

impl Ability for WallJump {
    fn name(&self) -> &'static str {
        "wall_jump"
    }

    fn stamina_cost(&self) -> u32 {
        self.config.stamina_cost
    }

    fn validate_trigger(&self, ctx: &StateContext<'_, '_>) -> Result<bool, CollaboratorError> {
        Ok(ctx.env.input()?.jump_pressed())
    }

    fn use_ability(&self, ctx: &mut StateContext<'_, '_>) -> Result<(), CollaboratorError> {
        let body = ctx.env.body()?;
        let away = -body.forward();
        body.push(away * self.config.push_force + Vec3::Y * self.config.jump_force);

        ctx.change_state(StateKind::Jump);
        ctx.emit(PlayerEvent::Jumped);
        Ok(())
    }
}
