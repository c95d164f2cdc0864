use glam::Vec3;

use super::{PlayerEvent, State, StateContext, StateKind};
use crate::ability::AbilitySlot;
use crate::env::CollaboratorError;

/// Standing still on the ground.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Idle;

impl Idle {
    pub fn new() -> Self {
        Self
    }
}

impl State for Idle {
    fn on_enter(&mut self, ctx: &mut StateContext<'_, '_>) -> Result<(), CollaboratorError> {
        ctx.env.body()?.move_horizontally(Vec3::ZERO, 0.0);
        Ok(())
    }

    fn on_update(
        &mut self,
        ctx: &mut StateContext<'_, '_>,
        _dt: f32,
    ) -> Result<(), CollaboratorError> {
        let input = ctx.env.input()?;
        let jump_force = ctx.config.jump.jump_force;
        let body = ctx.env.body()?;

        if input.jump_pressed() && !body.is_in_the_air() {
            body.jump(jump_force);
            ctx.emit(PlayerEvent::Jumped);
            ctx.change_state(StateKind::Jump);
        } else if body.is_in_the_air()
            || input.climb_held()
            || input.horizontal().length_squared() > 0.0
        {
            ctx.change_state(StateKind::Jump);
        }

        ctx.run_abilities(AbilitySlot::Floor)
    }

    fn on_exit(&mut self, _ctx: &mut StateContext<'_, '_>) -> Result<(), CollaboratorError> {
        Ok(())
    }
}
