//! Player state machine.
//!
//! Exactly one [`PlayerState`] is active at a time. States never swap
//! themselves: they request a transition through
//! [`StateContext::change_state`] and the
//! [`PlayerController`](crate::PlayerController) applies it as exit, replace,
//! enter.
mod climb;
mod context;
mod glide;
mod idle;
mod jump;

pub use climb::Climb;
pub use context::StateContext;
pub use glide::Glide;
pub use idle::Idle;
pub use jump::Jump;

use crate::config::PlayerConfig;
use crate::env::CollaboratorError;
use crate::timer::SceneId;

/// Discriminant of [`PlayerState`], used to request transitions.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum StateKind {
    Idle,
    /// Default ground and air locomotion.
    #[default]
    Jump,
    Climb,
    Glide,
}

/// Gameplay notifications, delivered to controller listeners at the end of
/// the frame in the order they were raised.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayerEvent {
    StateChanged { from: StateKind, to: StateKind },
    Jumped,
    Landed,
    StartedClimbing,
    StartedGliding,
    AbilityUsed { name: &'static str },
}

/// Lifecycle hooks shared by every player state.
pub trait State {
    fn on_enter(&mut self, ctx: &mut StateContext<'_, '_>) -> Result<(), CollaboratorError>;

    fn on_update(
        &mut self,
        ctx: &mut StateContext<'_, '_>,
        dt: f32,
    ) -> Result<(), CollaboratorError>;

    fn on_exit(&mut self, ctx: &mut StateContext<'_, '_>) -> Result<(), CollaboratorError>;
}

/// The active player state.
#[derive(Clone, Debug, PartialEq)]
pub enum PlayerState {
    Idle(Idle),
    Jump(Jump),
    Climb(Climb),
    Glide(Glide),
}

impl PlayerState {
    /// Builds a fresh, not yet entered state of the given kind.
    pub fn new(kind: StateKind, config: &PlayerConfig, scene: SceneId) -> Self {
        match kind {
            StateKind::Idle => Self::Idle(Idle::new()),
            StateKind::Jump => Self::Jump(Jump::new(&config.jump, scene)),
            StateKind::Climb => Self::Climb(Climb::new(&config.climb, scene)),
            StateKind::Glide => Self::Glide(Glide::new(&config.glide, scene)),
        }
    }

    pub fn kind(&self) -> StateKind {
        match self {
            Self::Idle(_) => StateKind::Idle,
            Self::Jump(_) => StateKind::Jump,
            Self::Climb(_) => StateKind::Climb,
            Self::Glide(_) => StateKind::Glide,
        }
    }

    pub fn as_jump(&self) -> Option<&Jump> {
        match self {
            Self::Jump(jump) => Some(jump),
            _ => None,
        }
    }

    pub fn as_climb(&self) -> Option<&Climb> {
        match self {
            Self::Climb(climb) => Some(climb),
            _ => None,
        }
    }

    pub fn as_glide(&self) -> Option<&Glide> {
        match self {
            Self::Glide(glide) => Some(glide),
            _ => None,
        }
    }
}

impl State for PlayerState {
    fn on_enter(&mut self, ctx: &mut StateContext<'_, '_>) -> Result<(), CollaboratorError> {
        match self {
            Self::Idle(state) => state.on_enter(ctx),
            Self::Jump(state) => state.on_enter(ctx),
            Self::Climb(state) => state.on_enter(ctx),
            Self::Glide(state) => state.on_enter(ctx),
        }
    }

    fn on_update(
        &mut self,
        ctx: &mut StateContext<'_, '_>,
        dt: f32,
    ) -> Result<(), CollaboratorError> {
        match self {
            Self::Idle(state) => state.on_update(ctx, dt),
            Self::Jump(state) => state.on_update(ctx, dt),
            Self::Climb(state) => state.on_update(ctx, dt),
            Self::Glide(state) => state.on_update(ctx, dt),
        }
    }

    fn on_exit(&mut self, ctx: &mut StateContext<'_, '_>) -> Result<(), CollaboratorError> {
        match self {
            Self::Idle(state) => state.on_exit(ctx),
            Self::Jump(state) => state.on_exit(ctx),
            Self::Climb(state) => state.on_exit(ctx),
            Self::Glide(state) => state.on_exit(ctx),
        }
    }
}

/// Horizontal world-space direction from the movement stick (`y` maps to `+Z`).
pub(crate) fn planar_direction(stick: glam::Vec2) -> glam::Vec3 {
    glam::Vec3::new(stick.x, 0.0, stick.y).clamp_length_max(1.0)
}
