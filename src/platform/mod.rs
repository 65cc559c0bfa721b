//! Platform abstraction layer
//!
//! The simulation never touches a window, a keyboard or the wall clock
//! directly. Front ends implement these traits:
//! - `Clock`: monotonic time in seconds
//! - `InputSource`: quit/jump events polled once per frame
//!
//! Renderer and audio collaborators live in [`crate::renderer`] and
//! [`crate::audio`]. Headless implementations of all of them are in
//! [`headless`].

pub mod headless;
pub mod input;
pub mod time;

pub use input::{InputEvent, InputSource, ScriptedInput};
pub use time::{Clock, FixedStepClock, SystemClock};
