//! Explicit per-frame update registry.
//!
//! Objects that need a per-frame delta but are not owned by the player
//! controller (spawn animations, delayed level events) are registered here.
//! Registration and removal are explicit; lifetime is never tied to drop order
//! elsewhere in the game.

use super::{ActionOverTime, CountDownTimer, SceneId};

/// Something that advances once per frame.
pub trait Tickable {
    fn tick(&mut self, dt: f32);

    /// Finished items are removed by the scheduler after their tick.
    fn is_finished(&self) -> bool {
        false
    }
}

/// Opaque handle returned by [`Scheduler::add`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TickHandle(u64);

struct Entry {
    handle: TickHandle,
    scene: SceneId,
    item: Box<dyn Tickable>,
}

/// Advances registered tickables in registration order.
#[derive(Default)]
pub struct Scheduler {
    entries: Vec<Entry>,
    next_handle: u64,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, scene: SceneId, item: impl Tickable + 'static) -> TickHandle {
        let handle = TickHandle(self.next_handle);
        self.next_handle += 1;
        self.entries.push(Entry {
            handle,
            scene,
            item: Box::new(item),
        });
        handle
    }

    /// Removes a single tickable. Returns `false` if the handle is unknown.
    pub fn remove(&mut self, handle: TickHandle) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.handle != handle);
        self.entries.len() != before
    }

    /// Removes every tickable bound to `scene` and returns how many were dropped.
    pub fn unload_scene(&mut self, scene: SceneId) -> usize {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.scene != scene);
        let removed = before - self.entries.len();
        tracing::debug!("unloaded {} tickables bound to {}", removed, scene);
        removed
    }

    pub fn contains(&self, handle: TickHandle) -> bool {
        self.entries.iter().any(|entry| entry.handle == handle)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Advances every registered item by `dt` and drops the finished ones.
    pub fn tick(&mut self, dt: f32) {
        let dt = if dt < 0.0 {
            tracing::warn!("negative frame delta {} clamped to zero", dt);
            0.0
        } else {
            dt
        };

        for entry in &mut self.entries {
            entry.item.tick(dt);
        }
        self.entries.retain(|entry| !entry.item.is_finished());
    }
}

/// Adapts an [`ActionOverTime`] to the callback form: `on_progress` receives
/// every reported progress value.
pub struct ScheduledAction<F>
where
    F: FnMut(f32),
{
    action: ActionOverTime,
    on_progress: F,
}

impl<F> ScheduledAction<F>
where
    F: FnMut(f32),
{
    /// Wraps and starts the action.
    pub fn start(mut action: ActionOverTime, on_progress: F) -> Self {
        action.start();
        Self {
            action,
            on_progress,
        }
    }
}

impl<F> Tickable for ScheduledAction<F>
where
    F: FnMut(f32),
{
    fn tick(&mut self, dt: f32) {
        if let Some(progress) = self.action.tick(dt) {
            (self.on_progress)(progress);
        }
    }

    fn is_finished(&self) -> bool {
        !self.action.is_running()
    }
}

/// Adapts a [`CountDownTimer`] to the callback form: `on_complete` runs once.
pub struct ScheduledCountdown<F>
where
    F: FnMut(),
{
    timer: CountDownTimer,
    on_complete: F,
}

impl<F> ScheduledCountdown<F>
where
    F: FnMut(),
{
    /// Wraps and starts the countdown.
    pub fn start(mut timer: CountDownTimer, on_complete: F) -> Self {
        timer.start();
        Self { timer, on_complete }
    }
}

impl<F> Tickable for ScheduledCountdown<F>
where
    F: FnMut(),
{
    fn tick(&mut self, dt: f32) {
        if self.timer.tick(dt) {
            (self.on_complete)();
        }
    }

    fn is_finished(&self) -> bool {
        !self.timer.is_running()
    }
}
