use super::SceneId;

/// Single-shot countdown that completes exactly once per arming.
///
/// Starting a timer that is already running re-arms it from the full
/// duration; it is not an error.
#[derive(Clone, Debug, PartialEq)]
pub struct CountDownTimer {
    duration: f32,
    remaining: f32,
    running: bool,
    scene: SceneId,
}

impl CountDownTimer {
    pub fn new(duration: f32, scene: SceneId) -> Self {
        Self {
            duration: duration.max(0.0),
            remaining: 0.0,
            running: false,
            scene,
        }
    }

    pub fn start(&mut self) {
        self.remaining = self.duration;
        self.running = true;
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Advances by `dt` seconds. Returns `true` on the tick the countdown elapses.
    pub fn tick(&mut self, dt: f32) -> bool {
        if !self.running {
            return false;
        }

        self.remaining -= dt.max(0.0);
        if self.remaining <= 0.0 {
            self.remaining = 0.0;
            self.running = false;
            return true;
        }
        false
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn remaining(&self) -> f32 {
        self.remaining
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }

    pub fn scene(&self) -> SceneId {
        self.scene
    }
}
