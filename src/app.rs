//! Frame loop
//!
//! One synchronous pass per frame: poll input, tick the simulation, play the
//! sounds it asked for, draw. Quit is honored in every phase, including the
//! death fall.

use crate::audio::{AudioManager, AudioPlayer};
use crate::platform::{Clock, InputEvent, InputSource};
use crate::renderer::{Renderer, draw_scene};
use crate::settings::Settings;
use crate::sim::{FrameInput, GameState, tick};

/// Why the loop stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    /// Player closed the game
    Quit,
    /// Frame budget given to [`run`] ran out
    FrameLimit,
}

/// Game instance holding all state
pub struct Game {
    pub state: GameState,
    audio: AudioManager,
    /// Idle/demo mode - the autopilot plays
    pub autopilot: bool,
    frames: u64,
}

impl Game {
    pub fn new(seed: u64, settings: Settings, player: Box<dyn AudioPlayer>, now: f64) -> Self {
        let audio = AudioManager::new(player, &settings);
        Self {
            state: GameState::new(seed, settings, now),
            audio,
            autopilot: false,
            frames: 0,
        }
    }

    pub fn audio_mut(&mut self) -> &mut AudioManager {
        &mut self.audio
    }

    /// Frames run so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Run one frame at clock time `now` with this frame's input events.
    /// Returns `Some(ExitReason::Quit)` when a quit event arrived; nothing
    /// else from the frame is processed in that case.
    pub fn run_frame(
        &mut self,
        now: f64,
        events: &[InputEvent],
        renderer: &mut dyn Renderer,
    ) -> Option<ExitReason> {
        if events.contains(&InputEvent::Quit) {
            log::info!("Quit requested after {} frames", self.frames);
            return Some(ExitReason::Quit);
        }

        let input = FrameInput {
            jump: events.contains(&InputEvent::Jump),
            autopilot: self.autopilot,
        };
        tick(&mut self.state, &input, now);

        let events = self.state.drain_events();
        self.audio.play_events(&events);

        draw_scene(&self.state, renderer);
        self.frames += 1;
        None
    }
}

/// Drive `game` until quit, or for at most `max_frames` frames
pub fn run(
    game: &mut Game,
    clock: &mut dyn Clock,
    input: &mut dyn InputSource,
    renderer: &mut dyn Renderer,
    max_frames: Option<u64>,
) -> ExitReason {
    loop {
        if max_frames.is_some_and(|max| game.frames() >= max) {
            return ExitReason::FrameLimit;
        }
        let now = clock.now();
        let events = input.poll_events();
        if let Some(reason) = game.run_frame(now, &events, renderer) {
            return reason;
        }
    }
}
