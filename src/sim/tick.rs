//! Per-frame simulation step
//!
//! One function drives every phase, including the death fall, so the frame
//! loop keeps polling input (and can quit) no matter what the bird is doing.

use super::obstacle::Obstacle;
use super::state::{GameEvent, GamePhase, GameState};

/// Input commands for a single frame
#[derive(Debug, Clone, Default)]
pub struct FrameInput {
    /// Flap (space/tap). Also starts a run and restarts after game over.
    pub jump: bool,
    /// Idle/demo mode - the autopilot flaps instead of the player
    pub autopilot: bool,
}

/// Advance the game state to clock time `now` (seconds, monotonic)
pub fn tick(state: &mut GameState, input: &FrameInput, now: f64) {
    let dt = frame_delta(state, now);

    let jump = if input.autopilot {
        autopilot_wants_jump(state, now)
    } else {
        input.jump
    };

    match state.phase {
        GamePhase::Start => {
            if jump {
                state.session_start = now;
                flap(state, now);
                state.set_phase(GamePhase::Playing);
            } else {
                let elapsed = (now - state.session_start).max(0.0) as f32;
                state.bird.hover(elapsed, &state.settings);
            }
            let dx = state.settings.scroll_speed * dt;
            scroll_ground(state, dx);
        }

        GamePhase::Playing => {
            if jump {
                flap(state, now);
            }
            state.bird.integrate(now, &state.settings);

            if state.bird.is_on_floor(&state.settings) {
                state.bird.clamp_to_floor(&state.settings);
                die(state);
                state.set_phase(GamePhase::GameOver);
                return;
            }

            let points = state.bird.check_and_consume_score(&mut state.obstacles);
            for _ in 0..points {
                state.score += 1;
                state.events.push(GameEvent::Scored);
                log::debug!("Scored, total {}", state.score);
            }

            if state.bird.collides_with(&state.obstacles, &state.settings) {
                die(state);
                state.bird.begin_fall(now);
                state.set_phase(GamePhase::Dying);
                return;
            }

            advance_world(state, dt);
        }

        // World is frozen; the bird drops to the ground
        GamePhase::Dying => {
            if state.bird.fall(now, &state.settings) {
                state.set_phase(GamePhase::GameOver);
            }
        }

        GamePhase::GameOver => {
            if jump {
                state.restart(now);
            }
        }
    }
}

/// Scroll obstacles and ground left by `scroll_speed * dt`, dropping tubes
/// past the left margin and spawning at most one on the right.
pub fn advance_world(state: &mut GameState, dt: f32) {
    let dx = state.settings.scroll_speed * dt;
    // Spawn decision uses positions from before this frame's scroll
    let rightmost = state.rightmost_x();

    for obstacle in &mut state.obstacles {
        obstacle.scroll(dx);
    }
    let despawn_x = state.settings.despawn_x;
    state.obstacles.retain(|o| o.x > despawn_x);

    let spawn_line = state.settings.field_width - state.settings.spawn_gap;
    if rightmost.is_none_or(|x| x < spawn_line) {
        let x = state.settings.field_width + state.settings.obstacle_half_width();
        let gap_y = state.random_gap_y();
        state.obstacles.push(Obstacle::new(x, gap_y));
        log::debug!("Spawned tube at x={} gap_y={}", x, gap_y);
    }

    scroll_ground(state, dx);
}

/// Move the ground tiles left, wrapping into (-field_width, 0]
pub fn scroll_ground(state: &mut GameState, dx: f32) {
    let width = state.settings.field_width;
    state.scroll_offset -= dx;
    if state.scroll_offset <= -width {
        state.scroll_offset %= width;
    }
}

fn frame_delta(state: &mut GameState, now: f64) -> f32 {
    let raw = (now - state.last_update).max(0.0) as f32;
    state.last_update = now;

    let max = state.settings.max_frame_delta;
    if raw > max {
        log::warn!("Frame delta {:.3}s clamped to {:.3}s", raw, max);
        max
    } else {
        raw
    }
}

fn flap(state: &mut GameState, now: f64) {
    state.bird.jump(now, &state.settings);
    state.events.push(GameEvent::Flap);
}

fn die(state: &mut GameState) {
    state.events.push(GameEvent::Hit);
    state.events.push(GameEvent::Died);
}

/// Flap whenever the bird is sinking past a point below the next gap's
/// center. A flap lifts the bird about v²/2g (~53 px with defaults), so
/// flapping half a lift below center keeps the whole arc inside the opening.
fn autopilot_wants_jump(state: &GameState, now: f64) -> bool {
    let settings = &state.settings;
    let bird = &state.bird;

    match state.phase {
        GamePhase::Start | GamePhase::GameOver => true,
        GamePhase::Dying => false,
        GamePhase::Playing => {
            if settings.gravity <= 0.0 {
                return false;
            }
            // Nearest tube the bird has not fully cleared
            let clear_x = bird.pos.x - bird.half_size.x - settings.obstacle_half_width();
            let target_y = state
                .obstacles
                .iter()
                .filter(|o| o.x >= clear_x)
                .min_by(|a, b| a.x.total_cmp(&b.x))
                .map(|o| o.gap_y)
                .unwrap_or((settings.ceiling_y + settings.floor_y) / 2.0);

            let lift = settings.jump_velocity * settings.jump_velocity / (2.0 * settings.gravity);
            bird.pos.y > target_y + lift / 2.0 && bird.current_velocity(now, settings) >= 0.0
        }
    }
}
