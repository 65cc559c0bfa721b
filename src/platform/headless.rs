//! Headless collaborators
//!
//! Used by the demo binary and by tests: renderers and audio players that
//! log or record instead of touching hardware.

use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec2;

use crate::audio::{AudioPlayer, SoundEffect};
use crate::renderer::{Renderer, Sprite, TextStyle};

/// One recorded draw operation
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Sprite { sprite: Sprite, pos: Vec2, angle: f32 },
    Text { text: String, style: TextStyle, pos: Vec2 },
}

/// Keeps every presented frame's draw calls
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pending: Vec<DrawCall>,
    frames: Vec<Vec<DrawCall>>,
}

impl RecordingRenderer {
    pub fn frames(&self) -> &[Vec<DrawCall>] {
        &self.frames
    }

    pub fn last_frame(&self) -> Option<Vec<DrawCall>> {
        self.frames.last().cloned()
    }
}

impl Renderer for RecordingRenderer {
    fn clear(&mut self) {
        self.pending.clear();
    }

    fn draw_sprite(&mut self, sprite: Sprite, pos: Vec2, angle: f32) {
        self.pending.push(DrawCall::Sprite { sprite, pos, angle });
    }

    fn draw_text(&mut self, text: &str, style: TextStyle, pos: Vec2) {
        self.pending.push(DrawCall::Text {
            text: text.to_string(),
            style,
            pos,
        });
    }

    fn present(&mut self) {
        self.frames.push(std::mem::take(&mut self.pending));
    }
}

/// Logs draw calls at trace level and counts presented frames
#[derive(Debug, Default)]
pub struct LogRenderer {
    frames: u64,
}

impl LogRenderer {
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Renderer for LogRenderer {
    fn clear(&mut self) {}

    fn draw_sprite(&mut self, sprite: Sprite, pos: Vec2, angle: f32) {
        log::trace!("sprite {:?} at ({:.1}, {:.1}) angle {:.1}", sprite, pos.x, pos.y, angle);
    }

    fn draw_text(&mut self, text: &str, _style: TextStyle, pos: Vec2) {
        log::trace!("text {:?} at ({:.1}, {:.1})", text, pos.x, pos.y);
    }

    fn present(&mut self) {
        self.frames += 1;
    }
}

/// Records played effects; clones share the same log
#[derive(Debug, Clone, Default)]
pub struct RecordingAudio {
    played: Rc<RefCell<Vec<SoundEffect>>>,
}

impl RecordingAudio {
    pub fn played(&self) -> Vec<SoundEffect> {
        self.played.borrow().clone()
    }
}

impl AudioPlayer for RecordingAudio {
    fn play(&mut self, effect: SoundEffect, _volume: f32) {
        self.played.borrow_mut().push(effect);
    }
}

/// Logs each effect at debug level
#[derive(Debug, Clone, Copy, Default)]
pub struct LogAudio;

impl AudioPlayer for LogAudio {
    fn play(&mut self, effect: SoundEffect, volume: f32) {
        log::debug!("sound {:?} (volume {:.2})", effect, volume);
    }
}
