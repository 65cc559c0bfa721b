//! Game state and core simulation types
//!
//! A session owns the bird, the obstacle list, score and phase. Restarting
//! replaces the session in place; the RNG stream carries over.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::actor::ActorBody;
use super::obstacle::Obstacle;
use crate::settings::Settings;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Bird bobs in place, waiting for the first flap
    Start,
    /// Active gameplay
    Playing,
    /// Bird hit a tube and is falling to the ground; input ignored
    Dying,
    /// Run ended, waiting for restart input
    GameOver,
}

/// Things that happened during a tick, drained by the frame loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A fresh session began (start screen shown)
    SessionStarted,
    /// Bird flapped
    Flap,
    /// Bird cleared a gap
    Scored,
    /// Bird struck a tube or the ground
    Hit,
    /// Run is over
    Died,
    /// Phase transition
    PhaseChanged { from: GamePhase, to: GamePhase },
}

/// Complete world state for one session
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub settings: Settings,
    pub phase: GamePhase,
    pub score: u32,
    pub bird: ActorBody,
    /// Spawn order (x ascending)
    pub obstacles: Vec<Obstacle>,
    /// Ground tile offset, kept in (-field_width, 0]
    pub scroll_offset: f32,
    /// Clock time the current screen (start or run) began
    pub session_start: f64,
    /// Clock time of the previous tick
    pub last_update: f64,
    /// Events raised since the last drain
    pub events: Vec<GameEvent>,
    rng: Pcg32,
}

impl GameState {
    /// Create a new session on the start screen
    pub fn new(seed: u64, settings: Settings, now: f64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let first = Self::first_obstacle(&mut rng, &settings);
        let bird = ActorBody::spawn(&settings);

        let mut state = Self {
            seed,
            settings,
            phase: GamePhase::Start,
            score: 0,
            bird,
            obstacles: vec![first],
            scroll_offset: 0.0,
            session_start: now,
            last_update: now,
            events: Vec::new(),
            rng,
        };
        state.events.push(GameEvent::SessionStarted);
        log::info!("New session (seed {})", seed);
        state
    }

    /// Replace the session with a fresh one: new bird, one tube, zero score
    pub fn restart(&mut self, now: f64) {
        self.bird = ActorBody::spawn(&self.settings);
        self.obstacles = vec![Self::first_obstacle(&mut self.rng, &self.settings)];
        self.score = 0;
        self.scroll_offset = 0.0;
        self.session_start = now;
        self.last_update = now;
        self.set_phase(GamePhase::Start);
        self.events.push(GameEvent::SessionStarted);
        log::info!("Session restarted");
    }

    /// Move to `phase`, recording the transition
    pub fn set_phase(&mut self, phase: GamePhase) {
        if phase == self.phase {
            return;
        }
        log::info!("Phase {:?} -> {:?} (score {})", self.phase, phase, self.score);
        self.events.push(GameEvent::PhaseChanged {
            from: self.phase,
            to: phase,
        });
        self.phase = phase;
    }

    /// Take all pending events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Sample a gap center uniformly from the configured range
    pub fn random_gap_y(&mut self) -> f32 {
        Self::sample_gap_y(&mut self.rng, &self.settings)
    }

    /// Rightmost obstacle x, if any
    pub fn rightmost_x(&self) -> Option<f32> {
        self.obstacles.iter().map(|o| o.x).reduce(f32::max)
    }

    fn first_obstacle(rng: &mut Pcg32, settings: &Settings) -> Obstacle {
        Obstacle::new(2.0 * settings.field_width, Self::sample_gap_y(rng, settings))
    }

    // Whole pixels, inclusive on both ends
    fn sample_gap_y(rng: &mut Pcg32, settings: &Settings) -> f32 {
        let min = settings.gap_y_min.round() as i32;
        let max = (settings.gap_y_max.round() as i32).max(min);
        rng.random_range(min..=max) as f32
    }
}
