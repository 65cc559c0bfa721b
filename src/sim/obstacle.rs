//! Tube pairs
//!
//! A single obstacle is one vertical barrier with an opening. It is tracked as
//! one entity (gap center) and drawn as two sprites, an upper and a lower tube.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::settings::Settings;

/// A tube pair described by the center of its opening
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    /// Horizontal center of the tube
    pub x: f32,
    /// Vertical center of the opening
    pub gap_y: f32,
    /// Set once the bird has been awarded this tube's point
    #[serde(default)]
    pub cleared: bool,
}

impl Obstacle {
    pub fn new(x: f32, gap_y: f32) -> Self {
        Self {
            x,
            gap_y,
            cleared: false,
        }
    }

    /// Y of the upper tube's bottom lip
    #[inline]
    pub fn gap_top(&self, gap_height: f32) -> f32 {
        self.gap_y - gap_height / 2.0
    }

    /// Y of the lower tube's top lip
    #[inline]
    pub fn gap_bottom(&self, gap_height: f32) -> f32 {
        self.gap_y + gap_height / 2.0
    }

    /// Whether a body centered at `x` with half width `half_width` touches the
    /// tube horizontally (edges inclusive)
    pub fn overlaps_horizontally(&self, x: f32, half_width: f32, obstacle_half_width: f32) -> bool {
        (x - self.x).abs() <= obstacle_half_width + half_width
    }

    /// Whether a vertical span `[top, bottom]` leaves the opening (lips inclusive)
    pub fn blocks_span(&self, top: f32, bottom: f32, gap_height: f32) -> bool {
        top <= self.gap_top(gap_height) || bottom >= self.gap_bottom(gap_height)
    }

    /// Whether the tube center has scrolled to or past `x`. Once true it
    /// stays true, however far a single frame moved the tube.
    #[inline]
    pub fn is_passed_by(&self, x: f32) -> bool {
        self.x <= x
    }

    /// Move left by `dx` pixels
    #[inline]
    pub fn scroll(&mut self, dx: f32) {
        self.x -= dx;
    }

    /// Top-left anchors of the (upper, lower) tube sprites
    pub fn sprite_anchors(&self, settings: &Settings) -> (Vec2, Vec2) {
        let left = self.x - settings.obstacle_half_width();
        let upper = Vec2::new(
            left,
            self.gap_top(settings.gap_height) - settings.obstacle_height,
        );
        let lower = Vec2::new(left, self.gap_bottom(settings.gap_height));
        (upper, lower)
    }
}
