use tracing::debug;

use super::{PlayerEvent, StateKind};
use crate::ability::{Abilities, AbilitySlot};
use crate::config::PlayerConfig;
use crate::env::{CollaboratorError, PlayerEnv};
use crate::stamina::Stamina;

/// Everything a state may touch during one hook call.
///
/// Built by the controller around each `on_enter`/`on_update`/`on_exit`.
/// Fields are split so a state can hold the body borrowed from `env` while
/// it updates `stamina`.
pub struct StateContext<'c, 'e> {
    pub config: &'c PlayerConfig,
    pub stamina: &'c mut Stamina,
    pub env: &'c mut PlayerEnv<'e>,
    abilities: &'c Abilities,
    events: &'c mut Vec<PlayerEvent>,
    transition: Option<StateKind>,
}

impl<'c, 'e> StateContext<'c, 'e> {
    pub fn new(
        config: &'c PlayerConfig,
        stamina: &'c mut Stamina,
        abilities: &'c Abilities,
        env: &'c mut PlayerEnv<'e>,
        events: &'c mut Vec<PlayerEvent>,
    ) -> Self {
        Self {
            config,
            stamina,
            env,
            abilities,
            events,
            transition: None,
        }
    }

    /// Requests a transition, applied by the controller once the current
    /// hook returns. The last request of a hook wins.
    pub fn change_state(&mut self, kind: StateKind) {
        if let Some(previous) = self.transition.replace(kind) {
            debug!(
                target: "platformer::state",
                %previous,
                requested = %kind,
                "transition request overridden"
            );
        }
    }

    pub fn pending_transition(&self) -> Option<StateKind> {
        self.transition
    }

    pub fn take_transition(&mut self) -> Option<StateKind> {
        self.transition.take()
    }

    /// Queues an event for end-of-frame delivery.
    pub fn emit(&mut self, event: PlayerEvent) {
        self.events.push(event);
    }

    /// Runs every ability of `slot` whose trigger validates and whose cost
    /// the stamina pool covers, consuming the cost after each use.
    pub fn run_abilities(&mut self, slot: AbilitySlot) -> Result<(), CollaboratorError> {
        let abilities = self.abilities;
        for ability in abilities.slot(slot) {
            if !ability.validate_trigger(&*self)? {
                continue;
            }

            let cost = ability.stamina_cost() as f32;
            if self.stamina.fill_state() < cost {
                debug!(
                    target: "platformer::ability",
                    ability = ability.name(),
                    cost,
                    fill = self.stamina.fill_state(),
                    "not enough stamina"
                );
                continue;
            }

            ability.use_ability(self)?;
            self.stamina.consume(cost);
            self.emit(PlayerEvent::AbilityUsed {
                name: ability.name(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use crate::ability::Ability;
    use crate::env::{InputFrame, InputSource};
    use crate::timer::SceneId;

    struct Counting {
        cost: u32,
        trigger: bool,
        uses: Rc<Cell<u32>>,
    }

    impl Ability for Counting {
        fn name(&self) -> &'static str {
            "counting"
        }

        fn stamina_cost(&self) -> u32 {
            self.cost
        }

        fn validate_trigger(&self, _ctx: &StateContext<'_, '_>) -> Result<bool, CollaboratorError> {
            Ok(self.trigger)
        }

        fn use_ability(&self, _ctx: &mut StateContext<'_, '_>) -> Result<(), CollaboratorError> {
            self.uses.set(self.uses.get() + 1);
            Ok(())
        }
    }

    struct NeedsInput;

    impl Ability for NeedsInput {
        fn name(&self) -> &'static str {
            "needs_input"
        }

        fn stamina_cost(&self) -> u32 {
            0
        }

        fn validate_trigger(&self, ctx: &StateContext<'_, '_>) -> Result<bool, CollaboratorError> {
            Ok(ctx.env.input()?.jump_pressed())
        }

        fn use_ability(&self, _ctx: &mut StateContext<'_, '_>) -> Result<(), CollaboratorError> {
            Ok(())
        }
    }

    #[test]
    fn runs_validated_affordable_abilities_and_consumes_cost() {
        let config = PlayerConfig::default();
        let mut stamina = Stamina::new(&config.stamina, SceneId(1));
        let uses = Rc::new(Cell::new(0));
        let abilities = Abilities::new()
            .with(
                AbilitySlot::Air,
                Counting {
                    cost: 30,
                    trigger: true,
                    uses: Rc::clone(&uses),
                },
            )
            .with(
                AbilitySlot::Air,
                Counting {
                    cost: 5,
                    trigger: false,
                    uses: Rc::clone(&uses),
                },
            )
            .with(
                AbilitySlot::Floor,
                Counting {
                    cost: 1,
                    trigger: true,
                    uses: Rc::clone(&uses),
                },
            );
        let mut env = PlayerEnv::empty();
        let mut events = Vec::new();

        let mut ctx = StateContext::new(&config, &mut stamina, &abilities, &mut env, &mut events);
        ctx.run_abilities(AbilitySlot::Air).expect("no collaborators needed");
        ctx.run_abilities(AbilitySlot::Air).expect("no collaborators needed");
        ctx.run_abilities(AbilitySlot::Air).expect("no collaborators needed");
        ctx.run_abilities(AbilitySlot::Air).expect("no collaborators needed");

        assert_eq!(uses.get(), 3);
        assert_eq!(stamina.fill_state(), 10.0);
        assert_eq!(
            events,
            vec![PlayerEvent::AbilityUsed { name: "counting" }; 3]
        );
    }

    #[test]
    fn missing_collaborator_propagates() {
        let config = PlayerConfig::default();
        let mut stamina = Stamina::new(&config.stamina, SceneId(1));
        let abilities = Abilities::new().with(AbilitySlot::Wall, NeedsInput);
        let mut env = PlayerEnv::empty();
        let mut events = Vec::new();

        let mut ctx = StateContext::new(&config, &mut stamina, &abilities, &mut env, &mut events);
        assert_eq!(
            ctx.run_abilities(AbilitySlot::Wall),
            Err(CollaboratorError::InputNotAvailable)
        );

        let input = InputFrame::idle().with_jump();
        let mut env = PlayerEnv::new(None, None, Some(&input as &dyn InputSource));
        let mut ctx = StateContext::new(&config, &mut stamina, &abilities, &mut env, &mut events);
        assert_eq!(ctx.run_abilities(AbilitySlot::Wall), Ok(()));
        assert_eq!(events, vec![PlayerEvent::AbilityUsed { name: "needs_input" }]);
    }

    #[test]
    fn last_transition_request_wins() {
        let config = PlayerConfig::default();
        let mut stamina = Stamina::new(&config.stamina, SceneId(1));
        let abilities = Abilities::new();
        let mut env = PlayerEnv::empty();
        let mut events = Vec::new();
        let mut ctx = StateContext::new(&config, &mut stamina, &abilities, &mut env, &mut events);

        ctx.change_state(StateKind::Climb);
        ctx.change_state(StateKind::Jump);
        assert_eq!(ctx.take_transition(), Some(StateKind::Jump));
        assert_eq!(ctx.pending_transition(), None);
    }
}
