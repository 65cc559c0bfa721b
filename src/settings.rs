//! Game settings and field configuration
//!
//! Every tuning constant of the play field lives here so a JSON file can
//! override any subset of them. Missing keys fall back to [`crate::consts`].

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Errors raised while loading settings at startup
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid settings: {0}")]
    Invalid(String),
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Field ===
    pub field_width: f32,
    pub field_height: f32,
    pub floor_y: f32,
    pub ceiling_y: f32,

    // === Physics ===
    pub gravity: f32,
    pub jump_velocity: f32,
    pub scroll_speed: f32,
    /// Upper bound on the per-frame world delta (seconds)
    pub max_frame_delta: f32,

    // === Bird ===
    pub actor_width: f32,
    pub actor_height: f32,
    pub fall_decay: f32,
    pub flight_tilt_rate: f32,
    pub death_tilt_rate: f32,
    pub max_rotation: f32,
    pub min_rotation: f32,
    pub hover_amplitude: f32,
    pub hover_frequency: f32,

    // === Obstacles ===
    pub obstacle_width: f32,
    pub obstacle_height: f32,
    pub gap_height: f32,
    pub gap_y_min: f32,
    pub gap_y_max: f32,
    pub spawn_gap: f32,
    pub despawn_x: f32,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    pub muted: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,
            floor_y: FLOOR_Y,
            ceiling_y: CEILING_Y,

            gravity: GRAVITY,
            jump_velocity: JUMP_VELOCITY,
            scroll_speed: SCROLL_SPEED,
            max_frame_delta: MAX_FRAME_DELTA,

            actor_width: ACTOR_WIDTH,
            actor_height: ACTOR_HEIGHT,
            fall_decay: FALL_DECAY,
            flight_tilt_rate: FLIGHT_TILT_RATE,
            death_tilt_rate: DEATH_TILT_RATE,
            max_rotation: MAX_ROTATION,
            min_rotation: MIN_ROTATION,
            hover_amplitude: HOVER_AMPLITUDE,
            hover_frequency: HOVER_FREQUENCY,

            obstacle_width: OBSTACLE_WIDTH,
            obstacle_height: OBSTACLE_HEIGHT,
            gap_height: GAP_HEIGHT,
            gap_y_min: GAP_Y_MIN,
            gap_y_max: GAP_Y_MAX,
            spawn_gap: SPAWN_GAP,
            despawn_x: DESPAWN_X,

            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }
}

impl Settings {
    /// Parse settings from JSON, filling missing keys with defaults
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load and validate settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Serialize to pretty JSON (for writing a starter settings file)
    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject configurations the simulation cannot run with
    pub fn validate(&self) -> Result<(), SettingsError> {
        let invalid = |msg: &str| Err(SettingsError::Invalid(msg.to_string()));

        if self.field_width <= 0.0 || self.field_height <= 0.0 {
            return invalid("field dimensions must be positive");
        }
        if self.ceiling_y >= self.floor_y {
            return invalid("ceiling_y must be above floor_y");
        }
        if self.floor_y - self.ceiling_y <= self.actor_height {
            return invalid("bird does not fit between ceiling and floor");
        }
        if self.actor_width <= 0.0 || self.actor_height <= 0.0 {
            return invalid("actor bounding box must be positive");
        }
        if self.obstacle_width <= 0.0 || self.gap_height <= 0.0 {
            return invalid("obstacle width and gap height must be positive");
        }
        if self.gap_y_min > self.gap_y_max {
            return invalid("gap_y_min must not exceed gap_y_max");
        }
        if self.scroll_speed < 0.0 || self.max_frame_delta <= 0.0 {
            return invalid("scroll_speed must be non-negative and max_frame_delta positive");
        }
        if self.min_rotation > self.max_rotation {
            return invalid("min_rotation must not exceed max_rotation");
        }
        if self.spawn_gap >= self.field_width {
            return invalid("spawn_gap must be smaller than the field width");
        }
        Ok(())
    }

    /// Half extents of the bird bounding box
    pub fn actor_half_width(&self) -> f32 {
        self.actor_width / 2.0
    }

    pub fn actor_half_height(&self) -> f32 {
        self.actor_height / 2.0
    }

    pub fn obstacle_half_width(&self) -> f32 {
        self.obstacle_width / 2.0
    }
}
