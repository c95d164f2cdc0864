//! Bounded, refillable stamina pool.
//!
//! Two concerns are tracked independently:
//!
//! - **Fill level**: always within `[0, max]`.
//! - **Refill activation**: consumption pauses refill for `refill_delay`
//!   seconds, after which the pool regains one unit every `1 / refill_speed`
//!   seconds until full. Stamina-costing states disable refill entirely with
//!   [`Stamina::stop_refilling`] and re-enable it on exit.
mod consumer;

pub use consumer::StaminaConsumer;

use crate::config::StaminaConfig;
use crate::timer::{CountDownTimer, SceneId};

/// Notification emitted by [`Stamina`] to its observers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StaminaEvent {
    /// The fill level was written. `requested` is the value before clamping,
    /// `fill` the value actually stored.
    Changed { requested: f32, fill: f32 },
    /// The refill delay elapsed and periodic refill started.
    RefillStarted,
}

type Observer = Box<dyn FnMut(&StaminaEvent)>;

pub struct Stamina {
    fill: f32,
    max: f32,
    refill_speed: f32,
    refilling_active: bool,
    refill_delay: CountDownTimer,
    refill_period: CountDownTimer,
    observers: Vec<Observer>,
}

impl Stamina {
    /// Creates a full pool with refilling active.
    pub fn new(config: &StaminaConfig, scene: SceneId) -> Self {
        let max = config.max_stamina.max(0.0);
        let period = if config.refill_speed > 0.0 {
            1.0 / config.refill_speed
        } else {
            f32::INFINITY
        };

        Self {
            fill: max,
            max,
            refill_speed: config.refill_speed,
            refilling_active: true,
            refill_delay: CountDownTimer::new(config.refill_delay, scene),
            refill_period: CountDownTimer::new(period, scene),
            observers: Vec::new(),
        }
    }

    /// Registers an observer. Observers are notified in registration order.
    pub fn subscribe(&mut self, observer: impl FnMut(&StaminaEvent) + 'static) {
        self.observers.push(Box::new(observer));
    }

    pub fn fill_state(&self) -> f32 {
        self.fill
    }

    pub fn max_stamina(&self) -> f32 {
        self.max
    }

    pub fn refill_speed(&self) -> f32 {
        self.refill_speed
    }

    pub fn is_refilling_active(&self) -> bool {
        self.refilling_active
    }

    /// True while the post-consumption cooldown is counting down.
    pub fn is_refill_delayed(&self) -> bool {
        self.refill_delay.is_running()
    }

    /// True while the periodic refill tick is armed.
    pub fn is_refilling(&self) -> bool {
        self.refill_period.is_running()
    }

    /// Spends `amount` stamina and pauses passive refill.
    pub fn consume(&mut self, amount: f32) {
        if amount == 0.0 {
            return;
        }

        self.set_fill(self.fill - amount);
        self.refill_period.stop();
        if self.refilling_active {
            self.refill_delay.start();
        }
    }

    /// Disables refill until [`resume_refilling`](Self::resume_refilling).
    ///
    /// A pending refill delay is cancelled too, otherwise it would restart the
    /// periodic refill behind the caller's back.
    pub fn stop_refilling(&mut self) {
        self.refill_period.stop();
        self.refill_delay.stop();
        self.refilling_active = false;
    }

    /// Re-enables refill, starting with the full refill delay.
    pub fn resume_refilling(&mut self) {
        self.refill_delay.start();
        self.refilling_active = true;
    }

    pub fn refill_completely(&mut self) {
        self.set_fill(self.max);
    }

    /// Changes the cap. Refill restarts only while the pool is below the new cap.
    pub fn upgrade_max(&mut self, new_max: f32) {
        self.max = new_max.max(0.0);
        if self.fill > self.max {
            self.set_fill(self.max);
        }

        if self.fill < self.max {
            self.refill_period.start();
        } else {
            self.refill_period.stop();
        }
    }

    /// Advances the refill timers by one frame.
    ///
    /// The periodic timer is advanced before the delay timer so that a refill
    /// started by the delay elapsing this frame first ticks next frame.
    pub fn update(&mut self, dt: f32) {
        if self.refill_period.tick(dt) {
            self.refill_step();
        }
        if self.refill_delay.tick(dt) {
            self.start_refill();
        }
    }

    fn start_refill(&mut self) {
        tracing::debug!("stamina refill started at {}/{}", self.fill, self.max);
        self.notify(StaminaEvent::RefillStarted);
        self.refill_period.start();
    }

    fn refill_step(&mut self) {
        self.set_fill(self.fill + 1.0);
        if self.fill < self.max {
            self.refill_period.start();
        }
    }

    fn set_fill(&mut self, requested: f32) {
        self.fill = requested.clamp(0.0, self.max);
        self.notify(StaminaEvent::Changed {
            requested,
            fill: self.fill,
        });
    }

    fn notify(&mut self, event: StaminaEvent) {
        for observer in &mut self.observers {
            observer(&event);
        }
    }
}

impl core::fmt::Debug for Stamina {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Stamina")
            .field("fill", &self.fill)
            .field("max", &self.max)
            .field("refill_speed", &self.refill_speed)
            .field("refilling_active", &self.refilling_active)
            .field("refill_delay", &self.refill_delay)
            .field("refill_period", &self.refill_period)
            .field("observers", &self.observers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    fn stamina(max: f32, delay: f32, speed: f32) -> Stamina {
        Stamina::new(
            &StaminaConfig {
                max_stamina: max,
                refill_delay: delay,
                refill_speed: speed,
            },
            SceneId(1),
        )
    }

    fn assert_bounded(stamina: &Stamina) {
        assert!(stamina.fill_state() >= 0.0);
        assert!(stamina.fill_state() <= stamina.max_stamina());
    }

    #[test]
    fn consuming_zero_is_a_no_op() {
        let mut stamina = stamina(10.0, 1.0, 2.0);
        stamina.consume(4.0);
        for _ in 0..2 {
            stamina.update(0.25);
        }
        let remaining = stamina.refill_delay.remaining();

        stamina.consume(0.0);

        assert_eq!(stamina.fill_state(), 6.0);
        assert_eq!(stamina.refill_delay.remaining(), remaining);
        assert!(stamina.is_refilling_active());
    }

    #[test]
    fn consumption_rearms_delay_and_stops_refill_tick() {
        let mut stamina = stamina(10.0, 1.0, 2.0);
        stamina.consume(5.0);
        for _ in 0..5 {
            stamina.update(0.25);
        }
        assert!(stamina.is_refilling());

        stamina.consume(1.0);

        assert!(!stamina.is_refilling());
        assert!(stamina.is_refill_delayed());
        assert_eq!(stamina.refill_delay.remaining(), 1.0);
    }

    #[test]
    fn refills_one_unit_per_period_after_delay() {
        let mut stamina = stamina(10.0, 1.0, 2.0);
        stamina.consume(5.0);
        assert_eq!(stamina.fill_state(), 5.0);

        // Delay: nothing happens during the first second.
        for _ in 0..4 {
            stamina.update(0.25);
            assert_eq!(stamina.fill_state(), 5.0);
        }

        // Then one unit every half second until full.
        let mut samples = Vec::new();
        for _ in 0..12 {
            stamina.update(0.25);
            samples.push(stamina.fill_state());
        }
        assert_eq!(
            samples,
            vec![5.0, 6.0, 6.0, 7.0, 7.0, 8.0, 8.0, 9.0, 9.0, 10.0, 10.0, 10.0]
        );
        assert!(!stamina.is_refilling());
    }

    #[test]
    fn stop_refilling_freezes_fill() {
        let mut stamina = stamina(10.0, 0.5, 4.0);
        stamina.consume(6.0);
        stamina.stop_refilling();

        for _ in 0..40 {
            stamina.update(0.25);
        }

        assert_eq!(stamina.fill_state(), 4.0);
        assert!(!stamina.is_refilling_active());
    }

    #[test]
    fn consume_while_stopped_does_not_arm_delay() {
        let mut stamina = stamina(10.0, 0.5, 4.0);
        stamina.stop_refilling();
        stamina.consume(3.0);

        assert!(!stamina.is_refill_delayed());
        for _ in 0..10 {
            stamina.update(0.25);
        }
        assert_eq!(stamina.fill_state(), 7.0);
    }

    #[test]
    fn resume_refilling_rearms_delay() {
        let mut stamina = stamina(10.0, 0.5, 4.0);
        stamina.stop_refilling();
        stamina.consume(3.0);

        stamina.resume_refilling();

        assert!(stamina.is_refilling_active());
        assert!(stamina.is_refill_delayed());
        stamina.update(0.25);
        stamina.update(0.25);
        stamina.update(0.25);
        assert_eq!(stamina.fill_state(), 8.0);
    }

    #[test]
    fn fill_is_clamped_and_observers_see_request() {
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);

        let mut stamina = stamina(10.0, 1.0, 2.0);
        stamina.subscribe(move |event| sink.borrow_mut().push(*event));

        stamina.consume(25.0);
        assert_eq!(stamina.fill_state(), 0.0);
        assert_bounded(&stamina);

        assert_eq!(
            *events.borrow(),
            vec![StaminaEvent::Changed {
                requested: -15.0,
                fill: 0.0
            }]
        );
    }

    #[test]
    fn observers_run_in_registration_order() {
        let order = Rc::new(RefCell::new(Vec::new()));
        let first = Rc::clone(&order);
        let second = Rc::clone(&order);

        let mut stamina = stamina(10.0, 1.0, 2.0);
        stamina.subscribe(move |_| first.borrow_mut().push("first"));
        stamina.subscribe(move |_| second.borrow_mut().push("second"));

        stamina.consume(1.0);

        assert_eq!(*order.borrow(), vec!["first", "second"]);
    }

    #[test]
    fn refill_started_is_notified_once() {
        let started = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&started);

        let mut stamina = stamina(10.0, 0.5, 2.0);
        stamina.subscribe(move |event| {
            if *event == StaminaEvent::RefillStarted {
                *counter.borrow_mut() += 1;
            }
        });

        stamina.consume(2.0);
        for _ in 0..20 {
            stamina.update(0.25);
        }

        assert_eq!(*started.borrow(), 1);
        assert_eq!(stamina.fill_state(), 10.0);
    }

    #[test]
    fn refill_completely_leaves_timers_alone() {
        let mut stamina = stamina(10.0, 1.0, 2.0);
        stamina.consume(5.0);

        stamina.refill_completely();

        assert_eq!(stamina.fill_state(), 10.0);
        assert!(stamina.is_refill_delayed());
    }

    #[test]
    fn upgrade_when_full_does_not_start_refill() {
        let mut stamina = stamina(10.0, 1.0, 2.0);
        stamina.upgrade_max(10.0);
        assert!(!stamina.is_refilling());
    }

    #[test]
    fn upgrade_refills_towards_new_cap() {
        let mut stamina = stamina(10.0, 1.0, 2.0);
        stamina.upgrade_max(12.0);
        assert!(stamina.is_refilling());

        for _ in 0..8 {
            stamina.update(0.25);
            assert_bounded(&stamina);
        }
        assert_eq!(stamina.fill_state(), 12.0);
        assert!(!stamina.is_refilling());
    }

    #[test]
    fn downgrade_clamps_fill() {
        let mut stamina = stamina(10.0, 1.0, 2.0);
        stamina.upgrade_max(4.0);

        assert_eq!(stamina.fill_state(), 4.0);
        assert!(!stamina.is_refilling());
    }

    #[test]
    fn arbitrary_sequence_stays_bounded() {
        let mut stamina = stamina(5.0, 0.25, 8.0);
        let amounts = [3.0, -2.0, 0.0, 7.5, 1.0, -10.0, 2.5];

        for (step, amount) in amounts.iter().enumerate() {
            stamina.consume(*amount);
            assert_bounded(&stamina);
            if step % 2 == 0 {
                stamina.stop_refilling();
            } else {
                stamina.resume_refilling();
            }
            for _ in 0..3 {
                stamina.update(0.125);
                assert_bounded(&stamina);
            }
        }
        stamina.upgrade_max(3.0);
        assert_bounded(&stamina);
    }
}
