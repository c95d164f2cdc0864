//! Tuning parameters for the player, grouped per state and ability.
//!
//! Configuration is plain data passed into the controller at construction and
//! read-only afterwards. Loaders live in `platformer-content`.

use crate::error::{ErrorSeverity, GameError};

/// Stamina pool tuning.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StaminaConfig {
    pub max_stamina: f32,
    /// Seconds after a consumption before passive refill starts.
    pub refill_delay: f32,
    /// Units refilled per second once refilling.
    pub refill_speed: f32,
}

impl Default for StaminaConfig {
    fn default() -> Self {
        Self {
            max_stamina: 100.0,
            refill_delay: 1.0,
            refill_speed: 20.0,
        }
    }
}

/// Wall climbing tuning.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ClimbConfig {
    pub climb_speed: f32,
    pub stamina_per_second: f32,
    /// Period between two stamina drains while climbing.
    pub stamina_consuming_delay: f32,
    pub max_distance_to_trigger_climb: f32,
    /// Degrees between the surface normal and the reversed look direction.
    pub max_climb_angle: f32,
    pub positioning_time: f32,
    /// Distance kept between the body and the wall.
    pub climbing_position_offset: f32,
    pub max_distance_from_corners: f32,
    /// Degrees between a ledge normal and up for the ledge to be standable.
    pub max_ledge_slope: f32,
}

impl Default for ClimbConfig {
    fn default() -> Self {
        Self {
            climb_speed: 2.0,
            stamina_per_second: 10.0,
            stamina_consuming_delay: 0.25,
            max_distance_to_trigger_climb: 1.0,
            max_climb_angle: 45.0,
            positioning_time: 0.25,
            climbing_position_offset: 0.4,
            max_distance_from_corners: 0.5,
            max_ledge_slope: 30.0,
        }
    }
}

/// Ground and air locomotion tuning.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct JumpConfig {
    pub jump_force: f32,
    pub jump_speed: f32,
    /// Degrees per second when turning on the ground.
    pub turn_speed: f32,
    /// Degrees per second when turning in the air.
    pub turn_speed_in_the_air: f32,
    /// Grace period after leaving the ground during which a jump is allowed.
    pub coyote_time: f32,
    pub distance_to_ground: f32,
}

impl Default for JumpConfig {
    fn default() -> Self {
        Self {
            jump_force: 8.0,
            jump_speed: 6.0,
            turn_speed: 720.0,
            turn_speed_in_the_air: 360.0,
            coyote_time: 0.15,
            distance_to_ground: 0.6,
        }
    }
}

/// Gliding tuning.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GlideConfig {
    pub drag: f32,
    pub speed: f32,
    pub accelerated_drag: f32,
    pub accelerated_speed: f32,
    pub stamina_per_second: f32,
    pub stamina_consumption_delay: f32,
    /// Seconds of gliding before the acceleration ramp starts.
    pub acceleration_delay: f32,
    /// Seconds the acceleration ramp takes.
    pub acceleration_time: f32,
}

impl Default for GlideConfig {
    fn default() -> Self {
        Self {
            drag: 4.0,
            speed: 5.0,
            accelerated_drag: 2.0,
            accelerated_speed: 9.0,
            stamina_per_second: 8.0,
            stamina_consumption_delay: 0.25,
            acceleration_delay: 1.0,
            acceleration_time: 0.5,
        }
    }
}

/// Push-off from a wall.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WallJumpConfig {
    pub stamina_cost: u32,
    pub jump_force: f32,
    pub push_force: f32,
}

impl Default for WallJumpConfig {
    fn default() -> Self {
        Self {
            stamina_cost: 10,
            jump_force: 7.0,
            push_force: 4.0,
        }
    }
}

/// Physical body tuning used by [`SimBody`](crate::body::SimBody).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BodyConfig {
    pub max_speed: f32,
    /// Downward acceleration magnitude (units/s²).
    pub gravity: f32,
    pub fall_multiplier: f32,
    pub low_jump_multiplier: f32,
    pub default_drag: f32,
    pub height: f32,
}

impl Default for BodyConfig {
    fn default() -> Self {
        Self {
            max_speed: 20.0,
            gravity: 9.81,
            fall_multiplier: 2.5,
            low_jump_multiplier: 2.0,
            default_drag: 0.0,
            height: 1.8,
        }
    }
}

/// Full player tuning.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PlayerConfig {
    pub stamina: StaminaConfig,
    pub climb: ClimbConfig,
    pub jump: JumpConfig,
    pub glide: GlideConfig,
    pub wall_jump: WallJumpConfig,
    pub body: BodyConfig,
}

impl PlayerConfig {
    /// Upper bound for every angle parameter, in degrees.
    pub const MAX_ANGLE: f32 = 180.0;

    pub fn new() -> Self {
        Self::default()
    }

    /// Checks that durations, speeds and angles are usable.
    ///
    /// # Errors
    ///
    /// Returns the first offending parameter.
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("stamina.max_stamina", self.stamina.max_stamina)?;
        positive("stamina.refill_speed", self.stamina.refill_speed)?;
        non_negative("stamina.refill_delay", self.stamina.refill_delay)?;

        positive("climb.climb_speed", self.climb.climb_speed)?;
        non_negative("climb.stamina_per_second", self.climb.stamina_per_second)?;
        non_negative("climb.stamina_consuming_delay", self.climb.stamina_consuming_delay)?;
        positive(
            "climb.max_distance_to_trigger_climb",
            self.climb.max_distance_to_trigger_climb,
        )?;
        angle("climb.max_climb_angle", self.climb.max_climb_angle)?;
        positive("climb.positioning_time", self.climb.positioning_time)?;
        non_negative(
            "climb.climbing_position_offset",
            self.climb.climbing_position_offset,
        )?;
        positive(
            "climb.max_distance_from_corners",
            self.climb.max_distance_from_corners,
        )?;
        angle("climb.max_ledge_slope", self.climb.max_ledge_slope)?;

        non_negative("jump.jump_force", self.jump.jump_force)?;
        positive("jump.jump_speed", self.jump.jump_speed)?;
        non_negative("jump.coyote_time", self.jump.coyote_time)?;
        positive("jump.distance_to_ground", self.jump.distance_to_ground)?;

        non_negative("glide.drag", self.glide.drag)?;
        positive("glide.speed", self.glide.speed)?;
        non_negative("glide.accelerated_drag", self.glide.accelerated_drag)?;
        positive("glide.accelerated_speed", self.glide.accelerated_speed)?;
        non_negative("glide.stamina_per_second", self.glide.stamina_per_second)?;
        non_negative(
            "glide.stamina_consumption_delay",
            self.glide.stamina_consumption_delay,
        )?;
        non_negative("glide.acceleration_delay", self.glide.acceleration_delay)?;
        non_negative("glide.acceleration_time", self.glide.acceleration_time)?;

        non_negative("wall_jump.jump_force", self.wall_jump.jump_force)?;
        non_negative("wall_jump.push_force", self.wall_jump.push_force)?;

        positive("body.max_speed", self.body.max_speed)?;
        non_negative("body.gravity", self.body.gravity)?;
        positive("body.height", self.body.height)?;

        Ok(())
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { field, value })
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value >= 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::Negative { field, value })
    }
}

fn angle(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if (0.0..=PlayerConfig::MAX_ANGLE).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::AngleOutOfRange { field, value })
    }
}

/// Invalid tuning data.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("{field} must be positive, got {value}")]
    NotPositive { field: &'static str, value: f32 },

    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f32 },

    #[error("{field} must be within 0..=180 degrees, got {value}")]
    AngleOutOfRange { field: &'static str, value: f32 },
}

impl GameError for ConfigError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            ConfigError::NotPositive { .. } => "CONFIG_NOT_POSITIVE",
            ConfigError::Negative { .. } => "CONFIG_NEGATIVE",
            ConfigError::AngleOutOfRange { .. } => "CONFIG_ANGLE_OUT_OF_RANGE",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert_eq!(PlayerConfig::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_zero_refill_speed() {
        let mut config = PlayerConfig::default();
        config.stamina.refill_speed = 0.0;

        assert_eq!(
            config.validate(),
            Err(ConfigError::NotPositive {
                field: "stamina.refill_speed",
                value: 0.0
            })
        );
    }

    #[test]
    fn rejects_angles_beyond_half_turn() {
        let mut config = PlayerConfig::default();
        config.climb.max_climb_angle = 270.0;

        let error = config.validate().unwrap_err();
        assert_eq!(error.error_code(), "CONFIG_ANGLE_OUT_OF_RANGE");
        assert_eq!(error.severity(), ErrorSeverity::Validation);
    }

    #[test]
    fn rejects_negative_glide_speed_and_nan_push_force() {
        let mut config = PlayerConfig::default();
        config.glide.speed = -1.0;
        assert_eq!(
            config.validate(),
            Err(ConfigError::NotPositive {
                field: "glide.speed",
                value: -1.0
            })
        );

        let mut config = PlayerConfig::default();
        config.glide.stamina_consumption_delay = -0.5;
        assert!(config.validate().is_err());

        let mut config = PlayerConfig::default();
        config.wall_jump.push_force = f32::NAN;
        let error = config.validate().unwrap_err();
        assert!(error.to_string().starts_with("wall_jump.push_force"));
    }

    #[test]
    fn rejects_nan() {
        let mut config = PlayerConfig::default();
        config.climb.positioning_time = f32::NAN;

        assert!(config.validate().is_err());
    }
}
