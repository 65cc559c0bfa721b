//! Simulation module
//!
//! All gameplay logic lives here. No rendering, audio or platform
//! dependencies:
//! - Time comes in as clock seconds passed to `tick`
//! - Seeded RNG only
//! - Side effects are reported as `GameEvent`s for the frame loop to act on

pub mod actor;
pub mod obstacle;
pub mod state;
pub mod tick;

pub use actor::{ActorBody, Pose};
pub use obstacle::Obstacle;
pub use state::{GameEvent, GamePhase, GameState};
pub use tick::{FrameInput, advance_world, scroll_ground, tick};
