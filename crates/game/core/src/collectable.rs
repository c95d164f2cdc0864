//! Spawn animation for collectables.

use glam::Vec3;

use crate::timer::{ActionOverTime, ProgressCurve, SceneId, Tickable};

/// Position and scale of a collectable.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CollectablePose {
    pub position: Vec3,
    pub scale: Vec3,
}

impl CollectablePose {
    pub fn lerp(&self, target: &CollectablePose, t: f32) -> Self {
        Self {
            position: self.position.lerp(target.position, t),
            scale: self.scale.lerp(target.scale, t),
        }
    }
}

/// Eases a freshly spawned collectable into its rest pose.
///
/// Every tick reports the eased pose through `on_pose`; `on_finish` runs once,
/// on the tick that reaches the rest pose. Meant to be registered with a
/// [`Scheduler`](crate::timer::Scheduler), which drops it once finished.
pub struct CollectableSetup<P, D>
where
    P: FnMut(CollectablePose),
    D: FnOnce(),
{
    action: ActionOverTime,
    origin: CollectablePose,
    target: CollectablePose,
    on_pose: P,
    on_finish: Option<D>,
}

impl<P, D> CollectableSetup<P, D>
where
    P: FnMut(CollectablePose),
    D: FnOnce(),
{
    pub fn new(
        origin: CollectablePose,
        target: CollectablePose,
        setup_time: f32,
        scene: SceneId,
        on_pose: P,
        on_finish: D,
    ) -> Self {
        Self {
            action: ActionOverTime::new(setup_time, scene).with_curve(ProgressCurve::SinBezier),
            origin,
            target,
            on_pose,
            on_finish: Some(on_finish),
        }
    }

    pub fn start(&mut self) {
        self.action.start();
    }

    /// Starts the animation and returns it, ready for a scheduler.
    pub fn started(mut self) -> Self {
        self.start();
        self
    }
}

impl<P, D> Tickable for CollectableSetup<P, D>
where
    P: FnMut(CollectablePose),
    D: FnOnce(),
{
    fn tick(&mut self, dt: f32) {
        let Some(progress) = self.action.tick(dt) else {
            return;
        };
        (self.on_pose)(self.origin.lerp(&self.target, progress));
        if progress >= 1.0 {
            if let Some(on_finish) = self.on_finish.take() {
                on_finish();
            }
        }
    }

    fn is_finished(&self) -> bool {
        !self.action.is_running()
    }
}
