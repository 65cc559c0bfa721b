//! Scene composition
//!
//! Back to front: sky, tubes, ground, bird, score.

use glam::Vec2;

use super::{Renderer, Sprite, TextStyle};
use crate::sim::{GamePhase, GameState};

/// Draw one frame of `state`
pub fn draw_scene(state: &GameState, renderer: &mut dyn Renderer) {
    let settings = &state.settings;
    let show_world = state.phase != GamePhase::Start;

    renderer.clear();
    renderer.draw_sprite(Sprite::Sky, Vec2::ZERO, 0.0);

    // Tubes stay hidden on the start screen
    if show_world {
        for obstacle in &state.obstacles {
            let (upper, lower) = obstacle.sprite_anchors(settings);
            renderer.draw_sprite(Sprite::UpperTube, upper, 0.0);
            renderer.draw_sprite(Sprite::LowerTube, lower, 0.0);
        }
    }

    for pos in ground_tiles(state) {
        renderer.draw_sprite(Sprite::Ground, pos, 0.0);
    }

    let pose = state.bird.pose();
    renderer.draw_sprite(Sprite::Bird, pose.top_left, pose.rotation);

    if show_world {
        renderer.draw_text(&state.score.to_string(), TextStyle::SCORE, score_position(state));
    }

    renderer.present();
}

/// Two ground tiles side by side so the seam scrolls through the field
pub fn ground_tiles(state: &GameState) -> [Vec2; 2] {
    let y = state.settings.floor_y;
    let x = state.scroll_offset;
    [Vec2::new(x, y), Vec2::new(x + state.settings.field_width, y)]
}

/// Score text center: horizontally centered, a fifth of the way down
pub fn score_position(state: &GameState) -> Vec2 {
    Vec2::new(
        state.settings.field_width / 2.0,
        state.settings.field_height / 5.0,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::headless::{DrawCall, RecordingRenderer};
    use crate::settings::Settings;
    use crate::sim::Obstacle;

    fn sprites(calls: &[DrawCall]) -> Vec<Sprite> {
        calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::Sprite { sprite, .. } => Some(*sprite),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_start_screen_hides_tubes_and_score() {
        let state = GameState::new(1, Settings::default(), 0.0);
        let mut renderer = RecordingRenderer::default();
        draw_scene(&state, &mut renderer);

        let frame = renderer.last_frame().unwrap();
        assert_eq!(
            sprites(&frame),
            vec![Sprite::Sky, Sprite::Ground, Sprite::Ground, Sprite::Bird]
        );
        assert!(!frame.iter().any(|c| matches!(c, DrawCall::Text { .. })));
    }

    #[test]
    fn test_playing_draws_tube_pairs_and_score() {
        let mut state = GameState::new(1, Settings::default(), 0.0);
        state.phase = GamePhase::Playing;
        state.score = 3;
        state.scroll_offset = -100.0;
        state.obstacles = vec![Obstacle::new(150.0, 200.0)];

        let mut renderer = RecordingRenderer::default();
        draw_scene(&state, &mut renderer);
        let frame = renderer.last_frame().unwrap();

        assert!(frame.contains(&DrawCall::Sprite {
            sprite: Sprite::UpperTube,
            pos: Vec2::new(124.0, 150.0 - 320.0),
            angle: 0.0,
        }));
        assert!(frame.contains(&DrawCall::Sprite {
            sprite: Sprite::LowerTube,
            pos: Vec2::new(124.0, 250.0),
            angle: 0.0,
        }));
        assert!(frame.contains(&DrawCall::Sprite {
            sprite: Sprite::Ground,
            pos: Vec2::new(188.0, 384.0),
            angle: 0.0,
        }));
        assert!(frame.contains(&DrawCall::Text {
            text: "3".to_string(),
            style: TextStyle::SCORE,
            pos: Vec2::new(144.0, 96.0),
        }));
    }

    #[test]
    fn test_bird_drawn_with_rotation() {
        let mut state = GameState::new(1, Settings::default(), 0.0);
        state.bird.rotation = -30.0;
        let mut renderer = RecordingRenderer::default();
        draw_scene(&state, &mut renderer);

        let frame = renderer.last_frame().unwrap();
        assert!(frame.contains(&DrawCall::Sprite {
            sprite: Sprite::Bird,
            pos: Vec2::new(78.0, 227.0),
            angle: -30.0,
        }));
    }
}
