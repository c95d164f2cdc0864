//! Headless simulation entry point.
//!
//! Runs the player controller over a course with scripted input at a fixed
//! frame delta and logs what happens. Useful for tuning without an engine.
mod config;
mod script;

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::{Context, Result};
use config::SimConfig;
use glam::Vec3;
use platformer_content::{ConfigLoader, Course, CourseLoader};
use platformer_core::{
    Body, CollectablePose, CollectableSetup, CountDownTimer, PlayerConfig, PlayerController,
    PlayerEnv, PlayerEvent, SceneId, ScheduledCountdown, Scheduler, SimBody, StateKind,
};
use script::Script;
use tracing::{debug, info};

const COURSE_SCENE: SceneId = SceneId(1);

/// Seconds the reward collectable takes to settle.
const REWARD_SETUP_TIME: f32 = 0.5;

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    setup_logging();

    let config = SimConfig::from_env();
    info!(
        frames = config.frames,
        dt = config.dt,
        "Simulating {:.2}s",
        config.duration()
    );

    let player = load_player_config(&config)?;
    let course = load_course(&config)?;

    run(&config, player, &course);
    Ok(())
}

fn setup_logging() {
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_player_config(config: &SimConfig) -> Result<PlayerConfig> {
    match &config.player_config {
        Some(path) => ConfigLoader::load(path)
            .with_context(|| format!("Loading player config from {}", path.display())),
        None => ConfigLoader::load_embedded().context("Loading embedded player config"),
    }
}

fn load_course(config: &SimConfig) -> Result<Course> {
    match &config.course {
        Some(path) => CourseLoader::load(path)
            .with_context(|| format!("Loading course from {}", path.display())),
        None => CourseLoader::load_embedded().context("Loading embedded course"),
    }
}

#[derive(Debug, Default)]
struct Tally {
    jumps: u32,
    landings: u32,
    climbs: u32,
    glides: u32,
    abilities: u32,
    rewards: u32,
}

fn run(config: &SimConfig, player: PlayerConfig, course: &Course) {
    let script = Script::training();
    let mut body = SimBody::new(&player.body).at(course.spawn);
    body.subscribe(|event| debug!(%event, "Body event"));

    let mut controller = PlayerController::new(player, COURSE_SCENE);
    let events = Rc::new(RefCell::new(Vec::new()));
    {
        let events = Rc::clone(&events);
        controller.subscribe(move |event| events.borrow_mut().push(*event));
    }

    let mut scheduler = Scheduler::new();
    scheduler.add(
        COURSE_SCENE,
        ScheduledCountdown::start(
            CountDownTimer::new(script.duration(), COURSE_SCENE),
            || info!("Script finished"),
        ),
    );

    let mut tally = Tally::default();
    let mut climbed = false;
    let mut segment = None;

    for frame in 0..config.frames {
        let time = frame as f32 * config.dt;
        let current = script.segment_at(time);
        if current != segment {
            segment = current;
            if let Some(step) = current.and_then(|index| script.segment(index)) {
                info!(frame, time, "Script: {}", step.label);
            }
        }

        body.step(config.dt);
        body.resolve_ground(&course.world);

        let input = script.input_for_frame(frame, config.dt);
        {
            let mut env = PlayerEnv::with_all(&mut body, &course.world, &input);
            controller.update(&mut env, config.dt);
        }
        scheduler.tick(config.dt);

        for event in events.borrow_mut().drain(..) {
            info!(frame, ?event, "Player event");
            match event {
                PlayerEvent::Jumped => tally.jumps += 1,
                PlayerEvent::Landed => {
                    tally.landings += 1;
                    if climbed {
                        climbed = false;
                        tally.rewards += 1;
                        spawn_reward(&mut scheduler, body.position());
                    }
                }
                PlayerEvent::StartedClimbing => {
                    tally.climbs += 1;
                    climbed = true;
                }
                PlayerEvent::StartedGliding => tally.glides += 1,
                PlayerEvent::AbilityUsed { .. } => tally.abilities += 1,
                PlayerEvent::StateChanged { .. } => {}
            }
        }

        if controller.state_kind() == StateKind::Climb && frame % 30 == 0 {
            debug!(
                frame,
                stamina = controller.stamina().fill_state(),
                "Climbing"
            );
        }
    }

    let position = body.position();
    info!(
        state = %controller.state_kind(),
        stamina = controller.stamina().fill_state(),
        x = position.x,
        y = position.y,
        z = position.z,
        pending = scheduler.len(),
        "Simulation finished"
    );
    info!(?tally, "Summary");
}

/// Pops a collectable out of the ground next to the player after a climb.
fn spawn_reward(scheduler: &mut Scheduler, at: Vec3) {
    let origin = CollectablePose {
        position: at,
        scale: Vec3::ZERO,
    };
    let target = CollectablePose {
        position: at + Vec3::Y,
        scale: Vec3::ONE,
    };

    scheduler.add(
        COURSE_SCENE,
        CollectableSetup::new(
            origin,
            target,
            REWARD_SETUP_TIME,
            COURSE_SCENE,
            |pose| debug!(y = pose.position.y, scale = pose.scale.x, "Reward rising"),
            move || info!(x = at.x, y = at.y + 1.0, z = at.z, "Reward ready"),
        )
        .started(),
    );
}
