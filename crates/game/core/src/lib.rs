//! Locomotion core for a 3D platformer character.
//!
//! `platformer-core` holds the gameplay rules that do not depend on an
//! engine: frame-driven timers, the stamina pool, climbing geometry queries
//! and the player state machine. Everything the engine owns (rigid body,
//! collision world, input devices) is reached through the [`Body`],
//! [`Raycaster`] and [`InputSource`] traits, borrowed per frame through
//! [`PlayerEnv`]. All state mutation flows through
//! [`PlayerController::update`].
pub mod ability;
pub mod body;
pub mod collectable;
pub mod config;
pub mod controller;
pub mod env;
pub mod error;
pub mod geometry;
pub mod math;
pub mod stamina;
pub mod state;
pub mod timer;

pub use ability::{Abilities, Ability, AbilitySlot, WallJump};
pub use body::{Body, BodyEvent, SimBody};
pub use collectable::{CollectablePose, CollectableSetup};
pub use config::{
    BodyConfig, ClimbConfig, ConfigError, GlideConfig, JumpConfig, PlayerConfig, StaminaConfig,
    WallJumpConfig,
};
pub use controller::{MAX_CHAINED_TRANSITIONS, PlayerController, TransitionError};
pub use env::{CollaboratorError, InputFrame, InputSource, PlayerEnv};
pub use error::{ErrorSeverity, GameError, StatePhase, StatePhaseError};
pub use geometry::{AabbWorld, LayerMask, RaycastHit, Raycaster, Solid, SurfaceId};
pub use stamina::{Stamina, StaminaConsumer, StaminaEvent};
pub use state::{PlayerEvent, PlayerState, State, StateContext, StateKind};
pub use timer::{
    ActionOverTime, CountDownTimer, ProgressCurve, ScheduledAction, ScheduledCountdown, Scheduler,
    SceneId, TickHandle, Tickable,
};
