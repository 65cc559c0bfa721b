//! Flappy - a side-scrolling bird arcade game
//!
//! Core modules:
//! - `sim`: Simulation (bird kinematics, obstacles, phase state machine)
//! - `renderer`: Scene composition against a pluggable sprite renderer
//! - `platform`: Clock, input, renderer and audio collaborator traits
//! - `audio`: Sound effect cues and volume handling
//! - `assets`: Asset manifest and startup verification
//! - `settings`: Data-driven field configuration
//! - `app`: Per-frame loop tying collaborators to the simulation

pub mod app;
pub mod assets;
pub mod audio;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use app::{ExitReason, Game};
pub use settings::{Settings, SettingsError};

/// Default field configuration constants (reference field is 288x480)
pub mod consts {
    /// Play-field dimensions
    pub const FIELD_WIDTH: f32 = 288.0;
    pub const FIELD_HEIGHT: f32 = 480.0;

    /// Gravity (pixels/s², positive is down)
    pub const GRAVITY: f32 = 1500.0;
    /// Vertical velocity applied by a jump (pixels/s)
    pub const JUMP_VELOCITY: f32 = -400.0;
    /// World scroll speed (pixels/s)
    pub const SCROLL_SPEED: f32 = 150.0;

    /// Ground line; the bird dies when its bottom edge reaches it
    pub const FLOOR_Y: f32 = 384.0;
    /// Top of the field; the bird's top edge is clamped here
    pub const CEILING_Y: f32 = 0.0;

    /// Bird bounding box
    pub const ACTOR_WIDTH: f32 = 36.0;
    pub const ACTOR_HEIGHT: f32 = 26.0;

    /// Tube sprite dimensions
    pub const OBSTACLE_WIDTH: f32 = 52.0;
    pub const OBSTACLE_HEIGHT: f32 = 320.0;
    /// Vertical opening between upper and lower tube
    pub const GAP_HEIGHT: f32 = 100.0;
    /// Gap center range (inclusive, sampled as whole pixels)
    pub const GAP_Y_MIN: f32 = 100.0;
    pub const GAP_Y_MAX: f32 = 284.0;
    /// A new tube spawns once the rightmost one is this far inside the right edge
    pub const SPAWN_GAP: f32 = 170.0;
    /// Tubes are dropped once their center scrolls past this x
    pub const DESPAWN_X: f32 = -100.0;

    /// Rotation limits (degrees)
    pub const MAX_ROTATION: f32 = 20.0;
    pub const MIN_ROTATION: f32 = -90.0;
    /// Grace counter set on each jump before the nose starts dropping
    pub const FALL_DECAY: f32 = 100.0;
    /// Nose-down rate while flying (degrees per second since the jump)
    pub const FLIGHT_TILT_RATE: f32 = 0.5;
    /// Nose-down rate during the death fall
    pub const DEATH_TILT_RATE: f32 = 0.3;

    /// Start-screen bobbing
    pub const HOVER_AMPLITUDE: f32 = 7.0;
    pub const HOVER_FREQUENCY: f32 = 5.0;

    /// Largest frame delta fed to the world scroll (seconds)
    pub const MAX_FRAME_DELTA: f32 = 0.25;
}
