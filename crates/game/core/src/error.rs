//! Common error infrastructure for platformer-core.
//!
//! Domain-specific errors (e.g. [`CollaboratorError`](crate::env::CollaboratorError),
//! [`ConfigError`](crate::config::ConfigError)) live next to the code that
//! raises them. This module holds what they share.
//!
//! # Design Principles
//!
//! - **Never fatal during play**: gameplay keeps running when a cosmetic or
//!   optional collaborator is missing. Errors are logged and the frame skipped.
//! - **Expected outcomes are not errors**: a raycast miss or an exhausted stamina
//!   bar drives state-machine branching and is never reported here.
//! - **Severity Classification**: errors are categorized for logging priority.

/// Severity level of an error, used for categorization and logging priority.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - the next frame may succeed.
    ///
    /// Examples: body not attached this frame, input source detached
    Recoverable,

    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: non-positive durations in tuning data
    Validation,

    /// Internal error - unexpected state inconsistency.
    ///
    /// Examples: transition chain that never settles
    Internal,

    /// Fatal error - cannot continue.
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all platformer-core errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// Identifies which hook of a player state produced an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StatePhase {
    Enter,
    Update,
    Exit,
}

impl StatePhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatePhase::Enter => "on_enter",
            StatePhase::Update => "on_update",
            StatePhase::Exit => "on_exit",
        }
    }
}

/// Associates a state hook with the underlying error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatePhaseError<E> {
    pub phase: StatePhase,
    pub error: E,
}

impl<E> StatePhaseError<E> {
    pub fn new(phase: StatePhase, error: E) -> Self {
        Self { phase, error }
    }
}

impl<E: core::fmt::Display> core::fmt::Display for StatePhaseError<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} failed: {}", self.phase.as_str(), self.error)
    }
}

impl<E: core::fmt::Display + core::fmt::Debug> std::error::Error for StatePhaseError<E> {}

impl<E: GameError> GameError for StatePhaseError<E> {
    fn severity(&self) -> ErrorSeverity {
        self.error.severity()
    }

    fn error_code(&self) -> &'static str {
        self.error.error_code()
    }
}
