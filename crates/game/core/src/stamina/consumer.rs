use super::Stamina;
use crate::timer::{ActionOverTime, SceneId};

/// Drains a [`Stamina`] pool at a fixed rate while active.
///
/// Consumption happens in discrete steps: every `period` seconds the pool
/// loses `per_second * period`. A zero period drains continuously, every tick.
/// The consumer does not hold the pool; the owning state passes it in on
/// each [`update`](Self::update).
#[derive(Clone, Debug, PartialEq)]
pub struct StaminaConsumer {
    per_second: f32,
    period: ActionOverTime,
}

impl StaminaConsumer {
    pub fn new(per_second: f32, period: f32, scene: SceneId) -> Self {
        Self {
            per_second,
            period: ActionOverTime::new(period, scene).looping(),
        }
    }

    /// Starts (or restarts) draining from the beginning of a period.
    pub fn start(&mut self) {
        self.period.start();
    }

    pub fn stop(&mut self) {
        self.period.stop();
    }

    pub fn is_consuming(&self) -> bool {
        self.period.is_running()
    }

    pub fn update(&mut self, dt: f32, stamina: &mut Stamina) {
        if self.period.duration() <= 0.0 {
            if self.period.is_running() {
                stamina.consume(self.per_second * dt.max(0.0));
            }
            return;
        }

        if self.period.tick(dt) == Some(1.0) {
            stamina.consume(self.per_second * self.period.duration());
        }
    }
}
