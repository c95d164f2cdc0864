//! Simulation settings read from the environment.
use std::env;
use std::path::PathBuf;

/// Simulation run configuration.
#[derive(Clone, Debug)]
pub struct SimConfig {
    /// Number of frames to simulate.
    pub frames: u32,
    /// Fixed frame delta in seconds.
    pub dt: f32,
    /// Player tuning file (`.toml` or `.ron`). Embedded defaults when unset.
    pub player_config: Option<PathBuf>,
    /// Course layout file (`.ron`). Embedded training course when unset.
    pub course: Option<PathBuf>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            frames: 600,
            dt: 1.0 / 60.0,
            player_config: None,
            course: None,
        }
    }
}

impl SimConfig {
    /// Construct simulation configuration from environment variables.
    ///
    /// Environment variables:
    /// - `SIM_FRAMES` - Frames to simulate (default: 600)
    /// - `SIM_DT` - Frame delta in seconds (default: 1/60, clamped to 0.001..=0.1)
    /// - `PLAYER_CONFIG` - Path to a player tuning file
    /// - `SIM_COURSE` - Path to a course layout file
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(frames) = read_env::<u32>("SIM_FRAMES") {
            config.frames = frames.max(1);
        }
        if let Some(dt) = read_env::<f32>("SIM_DT").filter(|dt| dt.is_finite()) {
            config.dt = dt.clamp(0.001, 0.1);
        }
        config.player_config = read_env::<PathBuf>("PLAYER_CONFIG");
        config.course = read_env::<PathBuf>("SIM_COURSE");

        config
    }

    /// Simulated duration in seconds.
    pub fn duration(&self) -> f32 {
        self.frames as f32 * self.dt
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
