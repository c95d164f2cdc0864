mod common;

use std::cell::RefCell;
use std::rc::Rc;

use glam::{Vec2, Vec3};
use platformer_core::{
    Body, BodyConfig, InputFrame, PlayerController, PlayerEnv, PlayerEvent, SimBody, StateKind,
};

use common::*;

fn grounded_body() -> SimBody {
    SimBody::new(&BodyConfig::default()).at(Vec3::new(0.0, 0.0, -5.0))
}

#[test]
fn standing_still_settles_into_idle_and_input_wakes_it() {
    let world = course();
    let mut controller = controller();
    let mut body = grounded_body();

    step(&mut controller, &mut body, &world, InputFrame::idle());
    assert_eq!(controller.state_kind(), StateKind::Idle);

    let forward = InputFrame::moving(Vec2::Y);
    step(&mut controller, &mut body, &world, forward);
    assert_eq!(controller.state_kind(), StateKind::Jump);

    step(&mut controller, &mut body, &world, forward);
    let speed = controller.config().jump.jump_speed;
    assert_near(body.velocity(), Vec3::new(0.0, 0.0, speed));
}

#[test]
fn jump_press_from_idle_requests_a_jump() {
    let world = course();
    let mut controller = controller();
    let mut body = grounded_body();
    let events = Rc::new(RefCell::new(Vec::new()));
    {
        let events = Rc::clone(&events);
        controller.subscribe(move |event| events.borrow_mut().push(*event));
    }

    step(&mut controller, &mut body, &world, InputFrame::idle());
    step(&mut controller, &mut body, &world, InputFrame::idle().with_jump());

    assert_eq!(controller.state_kind(), StateKind::Jump);
    assert!(body.has_jump_request());
    assert_eq!(
        *events.borrow(),
        vec![
            PlayerEvent::StateChanged {
                from: StateKind::Jump,
                to: StateKind::Idle
            },
            PlayerEvent::Jumped,
            PlayerEvent::StateChanged {
                from: StateKind::Idle,
                to: StateKind::Jump
            },
        ]
    );
}

#[test]
fn missing_collaborators_skip_the_frame() {
    let world = course();
    let mut controller = controller();
    let mut body = grounded_body();

    let mut empty = PlayerEnv::empty();
    controller.update(&mut empty, DT);
    controller.update(&mut empty, DT);
    assert_eq!(controller.state_kind(), StateKind::Jump);

    step(&mut controller, &mut body, &world, InputFrame::idle());
    assert_eq!(controller.state_kind(), StateKind::Idle);
}

#[test]
fn listeners_receive_events_in_registration_order() {
    let world = course();
    let mut controller = controller();
    let mut body = grounded_body();
    let log = Rc::new(RefCell::new(Vec::new()));
    for tag in ["first", "second"] {
        let log = Rc::clone(&log);
        controller.subscribe(move |event| log.borrow_mut().push((tag, *event)));
    }

    step(&mut controller, &mut body, &world, InputFrame::idle());

    let idle = PlayerEvent::StateChanged {
        from: StateKind::Jump,
        to: StateKind::Idle,
    };
    assert_eq!(*log.borrow(), vec![("first", idle), ("second", idle)]);
}

#[test]
fn gliding_raises_drag_accelerates_and_restores_on_release() {
    let world = course();
    let mut controller = controller();
    let mut body = body_at(Vec3::new(0.0, 10.0, -5.0));
    let glide_config = controller.config().glide.clone();

    step(&mut controller, &mut body, &world, InputFrame::idle().with_glide());
    assert_eq!(controller.state_kind(), StateKind::Glide);
    assert_eq!(body.drag(), glide_config.drag);
    assert!(!controller.stamina().is_refilling_active());

    for _ in 0..30 {
        step(&mut controller, &mut body, &world, InputFrame::idle().with_glide());
    }
    let glide = controller.state().as_glide().expect("gliding");
    assert_eq!(glide.drag(), glide_config.accelerated_drag);
    assert_eq!(glide.speed(), glide_config.accelerated_speed);
    assert_eq!(body.drag(), glide_config.accelerated_drag);
    assert!(controller.stamina().fill_state() < controller.stamina().max_stamina());

    step(&mut controller, &mut body, &world, InputFrame::idle());
    assert_eq!(controller.state_kind(), StateKind::Jump);
    assert_eq!(body.drag(), 0.0);
    assert!(controller.stamina().is_refilling_active());
}

#[test]
fn gliding_is_refused_close_to_the_ground() {
    let world = course();
    let mut controller = controller();
    let mut body = body_at(Vec3::new(0.0, 0.3, -5.0));

    step(&mut controller, &mut body, &world, InputFrame::idle().with_glide());
    assert_eq!(controller.state_kind(), StateKind::Jump);
}

#[test]
fn negative_delta_does_not_move_timers_backwards() {
    let world = course();
    let mut controller = controller();
    let mut body = body_at(Vec3::new(0.0, 1.0, 0.2));
    step(&mut controller, &mut body, &world, InputFrame::idle().with_climb());

    let input = InputFrame::idle().with_climb();
    let mut env = PlayerEnv::with_all(&mut body, &world, &input);
    controller.update(&mut env, -1.0);

    let climb = controller.state().as_climb().expect("climbing");
    assert!(climb.is_positioning());
}

/// Keeps the player in Jump on the ground, then drops the floor from under it.
fn walk_off_ledge() -> (PlayerController, SimBody) {
    let world = course();
    let mut controller = controller();
    let mut body = grounded_body();
    let sideways = InputFrame::moving(Vec2::X);

    step(&mut controller, &mut body, &world, sideways);
    assert_eq!(controller.state_kind(), StateKind::Jump);

    body.leave_ground();
    step(&mut controller, &mut body, &world, sideways);
    assert!(controller.state().as_jump().expect("jumping").in_coyote_time());
    (controller, body)
}

#[test]
fn jump_inside_coyote_time_is_accepted() {
    let world = course();
    let (mut controller, mut body) = walk_off_ledge();

    step(
        &mut controller,
        &mut body,
        &world,
        InputFrame::moving(Vec2::X).with_jump(),
    );
    assert!(body.has_jump_request());
}

#[test]
fn jump_after_coyote_time_is_refused() {
    let world = course();
    let (mut controller, mut body) = walk_off_ledge();
    let sideways = InputFrame::moving(Vec2::X);

    step(&mut controller, &mut body, &world, sideways);
    step(&mut controller, &mut body, &world, sideways);
    step(&mut controller, &mut body, &world, sideways.with_jump());

    assert!(!body.has_jump_request());
    assert!(!controller.state().as_jump().expect("jumping").in_coyote_time());
}
