use crate::error::{ErrorSeverity, GameError};
use crate::state::StateKind;

/// Errors raised while applying state transitions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TransitionError {
    /// States kept requesting transitions from `on_enter` without settling.
    #[error("transition chain exceeded {limit} steps (last requested: {last})")]
    ChainTooDeep { limit: usize, last: StateKind },
}

impl GameError for TransitionError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Internal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::ChainTooDeep { .. } => "TRANSITION_CHAIN_TOO_DEEP",
        }
    }
}
