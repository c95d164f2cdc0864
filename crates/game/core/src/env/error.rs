//! Collaborator access errors.

use crate::error::{ErrorSeverity, GameError};

/// A collaborator the player needs this frame was not supplied.
///
/// Missing collaborators never stop the game: the controller logs the error
/// and skips the frame, so the next frame with a complete environment
/// proceeds normally.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CollaboratorError {
    #[error("Body not available")]
    BodyNotAvailable,

    #[error("Raycaster not available")]
    RaycasterNotAvailable,

    #[error("InputSource not available")]
    InputNotAvailable,
}

impl GameError for CollaboratorError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Recoverable
    }

    fn error_code(&self) -> &'static str {
        use CollaboratorError::*;
        match self {
            BodyNotAvailable => "COLLABORATOR_BODY_NOT_AVAILABLE",
            RaycasterNotAvailable => "COLLABORATOR_RAYCASTER_NOT_AVAILABLE",
            InputNotAvailable => "COLLABORATOR_INPUT_NOT_AVAILABLE",
        }
    }
}
