use super::SceneId;
use super::bezier::sin_bezier;

/// Shape applied to the linear `elapsed / duration` ratio before it is reported.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ProgressCurve {
    #[default]
    Linear,
    /// See [`sin_bezier`].
    SinBezier,
}

impl ProgressCurve {
    fn apply(self, t: f32) -> f32 {
        match self {
            ProgressCurve::Linear => t.clamp(0.0, 1.0),
            ProgressCurve::SinBezier => sin_bezier(t),
        }
    }
}

/// Reports normalized progress over a fixed duration, once per tick.
///
/// The owner feeds the frame delta into [`tick`](Self::tick) and applies the
/// returned progress itself. Progress is reported on every running tick,
/// including the terminal one where it equals exactly `1.0`; a non-looping
/// action stops right after that tick.
#[derive(Clone, Debug, PartialEq)]
pub struct ActionOverTime {
    duration: f32,
    elapsed: f32,
    running: bool,
    looping: bool,
    curve: ProgressCurve,
    scene: SceneId,
}

impl ActionOverTime {
    pub fn new(duration: f32, scene: SceneId) -> Self {
        Self {
            duration: duration.max(0.0),
            elapsed: 0.0,
            running: false,
            looping: false,
            curve: ProgressCurve::Linear,
            scene,
        }
    }

    #[must_use]
    pub fn looping(mut self) -> Self {
        self.looping = true;
        self
    }

    #[must_use]
    pub fn with_curve(mut self, curve: ProgressCurve) -> Self {
        self.curve = curve;
        self
    }

    /// Restarts the action from zero progress.
    pub fn start(&mut self) {
        self.elapsed = 0.0;
        self.running = true;
    }

    /// Halts advancement. Elapsed time is kept until the next `start`.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Advances by `dt` seconds and returns the shaped progress if running.
    pub fn tick(&mut self, dt: f32) -> Option<f32> {
        if !self.running {
            return None;
        }

        self.elapsed += dt.max(0.0);
        let linear = self.linear_progress();

        if linear >= 1.0 {
            if self.looping {
                self.elapsed = 0.0;
            } else {
                self.running = false;
            }
            return Some(1.0);
        }

        Some(self.curve.apply(linear))
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_looping(&self) -> bool {
        self.looping
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn scene(&self) -> SceneId {
        self.scene
    }

    fn linear_progress(&self) -> f32 {
        if self.duration <= 0.0 {
            1.0
        } else {
            (self.elapsed / self.duration).min(1.0)
        }
    }
}
