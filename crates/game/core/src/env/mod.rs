//! Collaborators the player reaches each frame.
//!
//! The body, the raycast service and the input source belong to the host
//! (engine, simulation or test). [`PlayerEnv`] borrows them for the duration
//! of a single [`PlayerController::update`](crate::PlayerController::update)
//! call. Any of them may be absent; accessors report the gap as a
//! [`CollaboratorError`] instead of panicking.
mod error;
mod input;

pub use error::CollaboratorError;
pub use input::{InputFrame, InputSource};

use crate::body::Body;
use crate::geometry::Raycaster;

/// Borrowed collaborators for one frame.
pub struct PlayerEnv<'a> {
    body: Option<&'a mut dyn Body>,
    raycaster: Option<&'a dyn Raycaster>,
    input: Option<&'a dyn InputSource>,
}

impl<'a> PlayerEnv<'a> {
    pub fn new(
        body: Option<&'a mut dyn Body>,
        raycaster: Option<&'a dyn Raycaster>,
        input: Option<&'a dyn InputSource>,
    ) -> Self {
        Self {
            body,
            raycaster,
            input,
        }
    }

    pub fn with_all(
        body: &'a mut dyn Body,
        raycaster: &'a dyn Raycaster,
        input: &'a dyn InputSource,
    ) -> Self {
        Self::new(Some(body), Some(raycaster), Some(input))
    }

    pub fn empty() -> Self {
        Self {
            body: None,
            raycaster: None,
            input: None,
        }
    }

    /// Returns the Body, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `CollaboratorError::BodyNotAvailable` if no body was provided.
    pub fn body(&mut self) -> Result<&mut (dyn Body + 'a), CollaboratorError> {
        self.body
            .as_deref_mut()
            .ok_or(CollaboratorError::BodyNotAvailable)
    }

    /// Shared access to the Body, for read-only checks.
    ///
    /// # Errors
    ///
    /// Returns `CollaboratorError::BodyNotAvailable` if no body was provided.
    pub fn body_ref(&self) -> Result<&(dyn Body + 'a), CollaboratorError> {
        self.body
            .as_deref()
            .ok_or(CollaboratorError::BodyNotAvailable)
    }

    /// Returns the Raycaster, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `CollaboratorError::RaycasterNotAvailable` if no raycaster was provided.
    pub fn raycaster(&self) -> Result<&'a dyn Raycaster, CollaboratorError> {
        self.raycaster
            .ok_or(CollaboratorError::RaycasterNotAvailable)
    }

    /// Returns the InputSource, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `CollaboratorError::InputNotAvailable` if no input source was provided.
    pub fn input(&self) -> Result<&'a dyn InputSource, CollaboratorError> {
        self.input.ok_or(CollaboratorError::InputNotAvailable)
    }
}

impl core::fmt::Debug for PlayerEnv<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PlayerEnv")
            .field("body", &self.body.is_some())
            .field("raycaster", &self.raycaster.is_some())
            .field("input", &self.input.is_some())
            .finish()
    }
}
