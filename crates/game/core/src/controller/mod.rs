//! Frame driver for a single player.
//!
//! Each [`PlayerController::update`] runs, in order: stamina timers, the
//! active state's `on_update`, any transitions it requested (exit, replace,
//! enter, repeated while `on_enter` keeps redirecting) and finally the
//! delivery of queued [`PlayerEvent`]s to listeners.
mod error;

pub use error::TransitionError;

use tracing::{debug, error, warn};

use crate::ability::Abilities;
use crate::config::PlayerConfig;
use crate::env::PlayerEnv;
use crate::error::{GameError, StatePhase, StatePhaseError};
use crate::stamina::Stamina;
use crate::state::{PlayerEvent, PlayerState, State, StateContext, StateKind};
use crate::timer::SceneId;

/// Upper bound on transitions applied back to back within one call.
pub const MAX_CHAINED_TRANSITIONS: usize = 8;

type Listener = Box<dyn FnMut(&PlayerEvent)>;

/// Owns the player's state machine, stamina and abilities.
pub struct PlayerController {
    config: PlayerConfig,
    scene: SceneId,
    stamina: Stamina,
    abilities: Abilities,
    state: PlayerState,
    entered: bool,
    events: Vec<PlayerEvent>,
    listeners: Vec<Listener>,
}

impl PlayerController {
    /// Creates a controller in the default locomotion state with the stock
    /// abilities. The state is entered on the first update.
    pub fn new(config: PlayerConfig, scene: SceneId) -> Self {
        let stamina = Stamina::new(&config.stamina, scene);
        let abilities = Abilities::standard(&config);
        let state = PlayerState::new(StateKind::default(), &config, scene);
        Self {
            config,
            scene,
            stamina,
            abilities,
            state,
            entered: false,
            events: Vec::new(),
            listeners: Vec::new(),
        }
    }

    /// Replaces the initial state. Only meaningful before the first update.
    pub fn starting_in(mut self, kind: StateKind) -> Self {
        self.state = PlayerState::new(kind, &self.config, self.scene);
        self.entered = false;
        self
    }

    pub fn with_abilities(mut self, abilities: Abilities) -> Self {
        self.abilities = abilities;
        self
    }

    pub fn config(&self) -> &PlayerConfig {
        &self.config
    }

    pub fn scene(&self) -> SceneId {
        self.scene
    }

    pub fn state(&self) -> &PlayerState {
        &self.state
    }

    pub fn state_kind(&self) -> StateKind {
        self.state.kind()
    }

    pub fn stamina(&self) -> &Stamina {
        &self.stamina
    }

    pub fn stamina_mut(&mut self) -> &mut Stamina {
        &mut self.stamina
    }

    pub fn abilities_mut(&mut self) -> &mut Abilities {
        &mut self.abilities
    }

    /// Registers a listener. Listeners run in registration order, once per
    /// event, at the end of the frame that raised it.
    pub fn subscribe(&mut self, listener: impl FnMut(&PlayerEvent) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Advances the player by one frame.
    pub fn update(&mut self, env: &mut PlayerEnv<'_>, dt: f32) {
        let dt = if dt < 0.0 {
            warn!(target: "platformer::controller", dt, "negative frame delta clamped to zero");
            0.0
        } else {
            dt
        };

        self.stamina.update(dt);

        let mut requested = None;
        if !self.entered {
            requested = self.run(env, StatePhase::Enter, 0.0);
        }
        if requested.is_none() && self.entered {
            requested = self.run(env, StatePhase::Update, dt);
        }

        self.settle(env, requested);
        self.dispatch_events();
    }

    /// Forces a transition outside of the regular update.
    pub fn change_state(&mut self, kind: StateKind, env: &mut PlayerEnv<'_>) {
        self.settle(env, Some(kind));
        self.dispatch_events();
    }

    fn settle(&mut self, env: &mut PlayerEnv<'_>, requested: Option<StateKind>) {
        if let Err(error) = self.apply_transitions(env, requested) {
            error!(
                target: "platformer::controller",
                code = error.error_code(),
                %error,
                state = %self.state.kind(),
                "transition chain aborted"
            );
        }
    }

    fn apply_transitions(
        &mut self,
        env: &mut PlayerEnv<'_>,
        mut next: Option<StateKind>,
    ) -> Result<(), TransitionError> {
        let mut steps = 0;
        while let Some(kind) = next {
            if steps == MAX_CHAINED_TRANSITIONS {
                return Err(TransitionError::ChainTooDeep {
                    limit: MAX_CHAINED_TRANSITIONS,
                    last: kind,
                });
            }
            steps += 1;
            next = self.transition_to(env, kind);
        }
        Ok(())
    }

    /// Exit, replace, enter. Returns the transition requested by the new
    /// state's `on_enter`, if any.
    fn transition_to(&mut self, env: &mut PlayerEnv<'_>, kind: StateKind) -> Option<StateKind> {
        let from = self.state.kind();
        if self.entered {
            // Requests raised while leaving are dropped; the target is fixed.
            let _ = self.run(env, StatePhase::Exit, 0.0);
        }

        self.state = PlayerState::new(kind, &self.config, self.scene);
        self.entered = false;
        self.events.push(PlayerEvent::StateChanged { from, to: kind });
        debug!(target: "platformer::controller", %from, to = %kind, "state changed");

        self.run(env, StatePhase::Enter, 0.0)
    }

    /// Runs one hook of the active state. Collaborator errors are logged and
    /// swallow any transition the hook requested.
    fn run(&mut self, env: &mut PlayerEnv<'_>, phase: StatePhase, dt: f32) -> Option<StateKind> {
        let Self {
            config,
            stamina,
            abilities,
            state,
            events,
            ..
        } = self;
        let mut ctx = StateContext::new(config, stamina, abilities, env, events);

        let result = match phase {
            StatePhase::Enter => state.on_enter(&mut ctx),
            StatePhase::Update => state.on_update(&mut ctx, dt),
            StatePhase::Exit => state.on_exit(&mut ctx),
        };

        match result {
            Ok(()) => {
                if phase == StatePhase::Enter {
                    self.entered = true;
                }
                ctx.take_transition()
            }
            Err(error) => {
                let error = StatePhaseError::new(phase, error);
                warn!(
                    target: "platformer::controller",
                    state = %state.kind(),
                    code = error.error_code(),
                    %error,
                    "skipping frame"
                );
                None
            }
        }
    }

    fn dispatch_events(&mut self) {
        if self.events.is_empty() {
            return;
        }
        let events = std::mem::take(&mut self.events);
        for event in &events {
            for listener in &mut self.listeners {
                listener(event);
            }
        }
    }
}

impl core::fmt::Debug for PlayerController {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PlayerController")
            .field("scene", &self.scene)
            .field("state", &self.state)
            .field("entered", &self.entered)
            .field("stamina", &self.stamina)
            .field("abilities", &self.abilities)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
