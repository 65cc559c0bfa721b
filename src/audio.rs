//! Sound cues
//!
//! The simulation reports `GameEvent`s; this module turns them into sound
//! effects and forwards them to whatever backend plays audio. Playback is
//! fire-and-forget.

use crate::settings::Settings;
use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundEffect {
    /// New session, start screen shown
    Swoosh,
    /// Bird flaps
    Wing,
    /// Gap cleared
    Point,
    /// Bird strikes a tube or the ground
    Hit,
    /// Run over
    Die,
}

impl SoundEffect {
    pub const ALL: [SoundEffect; 5] = [
        SoundEffect::Swoosh,
        SoundEffect::Wing,
        SoundEffect::Point,
        SoundEffect::Hit,
        SoundEffect::Die,
    ];

    /// Sound for a simulation event, if it has one
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::SessionStarted => Some(SoundEffect::Swoosh),
            GameEvent::Flap => Some(SoundEffect::Wing),
            GameEvent::Scored => Some(SoundEffect::Point),
            GameEvent::Hit => Some(SoundEffect::Hit),
            GameEvent::Died => Some(SoundEffect::Die),
            GameEvent::PhaseChanged { .. } => None,
        }
    }
}

/// Audio backend. Must not block.
pub trait AudioPlayer {
    /// Start playing `effect` at `volume` (0.0 - 1.0)
    fn play(&mut self, effect: SoundEffect, volume: f32);
}

/// Audio manager for the game
pub struct AudioManager {
    player: Box<dyn AudioPlayer>,
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
}

impl AudioManager {
    pub fn new(player: Box<dyn AudioPlayer>, settings: &Settings) -> Self {
        Self {
            player,
            master_volume: settings.master_volume.clamp(0.0, 1.0),
            sfx_volume: settings.sfx_volume.clamp(0.0, 1.0),
            muted: settings.muted,
        }
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Get effective volume
    pub fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Play a sound effect
    pub fn play(&mut self, effect: SoundEffect) {
        let vol = self.effective_volume();
        if vol <= 0.0 {
            return;
        }
        log::trace!("Playing {:?} at {:.2}", effect, vol);
        self.player.play(effect, vol);
    }

    /// Play the cue for every event that has one, in order
    pub fn play_events(&mut self, events: &[GameEvent]) {
        for effect in events.iter().filter_map(SoundEffect::for_event) {
            self.play(effect);
        }
    }
}
