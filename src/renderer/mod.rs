//! Rendering interface
//!
//! The game draws through a small sprite/text API. Backends (window, canvas,
//! terminal, test recorder) implement [`Renderer`]; [`scene`] decides what
//! goes where each frame.

pub mod scene;

use glam::Vec2;

pub use scene::draw_scene;

/// Images the scene is built from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sprite {
    Sky,
    Ground,
    /// Tube hanging from the top, opening at its bottom edge
    UpperTube,
    /// Tube standing on the ground, opening at its top edge
    LowerTube,
    Bird,
}

impl Sprite {
    pub const ALL: [Sprite; 5] = [
        Sprite::Sky,
        Sprite::Ground,
        Sprite::UpperTube,
        Sprite::LowerTube,
        Sprite::Bird,
    ];
}

/// Text appearance; `draw_text` positions are the text's center
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    /// Pixel height
    pub size: f32,
    pub color: [f32; 4],
}

impl TextStyle {
    /// Big white score digits
    pub const SCORE: TextStyle = TextStyle {
        size: 64.0,
        color: colors::SCORE,
    };
}

/// Drawing backend. Called once per frame: `clear`, draws, `present`.
pub trait Renderer {
    fn clear(&mut self);
    /// Draw `sprite` with its top-left corner at `pos`, rotated by
    /// `angle` degrees (counter-clockwise) about its center
    fn draw_sprite(&mut self, sprite: Sprite, pos: Vec2, angle: f32);
    fn draw_text(&mut self, text: &str, style: TextStyle, pos: Vec2);
    fn present(&mut self);
}

/// Colors for game elements
pub mod colors {
    pub const SCORE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
}
