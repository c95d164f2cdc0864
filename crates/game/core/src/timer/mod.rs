//! Frame-driven timers.
//!
//! Nothing in here reads a clock. Every timer advances only when its owner
//! calls `tick(dt)` with the frame delta, which keeps the whole locomotion core
//! deterministic and trivially testable.
//!
//! - [`ActionOverTime`]: normalized progress over a duration, optionally looping
//! - [`CountDownTimer`]: single-shot delayed completion
//! - [`Scheduler`]: explicit registry of tickables bound to a scene
mod action;
pub mod bezier;
mod countdown;
mod scheduler;

pub use action::{ActionOverTime, ProgressCurve};
pub use countdown::CountDownTimer;
pub use scheduler::{ScheduledAction, ScheduledCountdown, Scheduler, TickHandle, Tickable};

/// Identifies the level/scene a timer belongs to, for bulk cleanup.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SceneId(pub u32);

impl SceneId {
    pub const PERSISTENT: Self = Self(0);
}

impl core::fmt::Display for SceneId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "scene#{}", self.0)
    }
}
