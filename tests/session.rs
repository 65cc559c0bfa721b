//! End-to-end sessions driven through the frame loop with scripted input

use flappy::app::{self, ExitReason, Game};
use flappy::audio::SoundEffect;
use flappy::platform::headless::{RecordingAudio, RecordingRenderer};
use flappy::platform::{Clock, FixedStepClock, InputEvent, ScriptedInput};
use flappy::sim::{GamePhase, Obstacle};
use flappy::Settings;

#[test]
fn test_floor_death_and_restart() {
    let audio = RecordingAudio::default();
    let mut game = Game::new(11, Settings::default(), Box::new(audio.clone()), 0.0);
    let mut clock = FixedStepClock::from_fps(60);
    let mut renderer = RecordingRenderer::default();

    let mut input = ScriptedInput::default();
    input.idle(10);
    input.push_frame(vec![InputEvent::Jump]);
    input.idle(120);

    let reason = app::run(&mut game, &mut clock, &mut input, &mut renderer, Some(131));
    assert_eq!(reason, ExitReason::FrameLimit);
    assert_eq!(game.state.phase, GamePhase::GameOver);
    assert_eq!(game.state.bird.bottom(), 384.0);

    // Restart, then quit from the start screen
    input.push_frame(vec![InputEvent::Jump]);
    input.push_frame(vec![InputEvent::Quit]);
    let reason = app::run(&mut game, &mut clock, &mut input, &mut renderer, None);
    assert_eq!(reason, ExitReason::Quit);

    assert_eq!(game.state.phase, GamePhase::Start);
    assert_eq!(game.state.score, 0);
    assert_eq!(game.state.obstacles.len(), 1);
    assert_eq!(
        audio.played(),
        vec![
            SoundEffect::Swoosh,
            SoundEffect::Wing,
            SoundEffect::Hit,
            SoundEffect::Die,
            SoundEffect::Swoosh,
        ]
    );
    assert_eq!(renderer.frames().len(), 132);
}

#[test]
fn test_quit_is_honored_during_death_fall() {
    let mut game = Game::new(3, Settings::default(), Box::new(RecordingAudio::default()), 0.0);
    let mut clock = FixedStepClock::from_fps(60);
    let mut renderer = RecordingRenderer::default();

    game.run_frame(clock.now(), &[InputEvent::Jump], &mut renderer);
    assert_eq!(game.state.phase, GamePhase::Playing);

    // Tube on top of the bird with the opening far above it
    game.state.obstacles = vec![Obstacle::new(game.state.bird.pos.x, 100.0)];
    game.run_frame(clock.now(), &[], &mut renderer);
    assert_eq!(game.state.phase, GamePhase::Dying);

    game.run_frame(clock.now(), &[], &mut renderer);
    let result = game.run_frame(clock.now(), &[InputEvent::Quit], &mut renderer);
    assert_eq!(result, Some(ExitReason::Quit));
    assert_eq!(game.state.phase, GamePhase::Dying);
}

#[test]
fn test_each_point_plays_once() {
    // No gravity and every gap centered on the bird: flies forever
    let settings = Settings {
        gravity: 0.0,
        jump_velocity: 0.0,
        gap_y_min: 240.0,
        gap_y_max: 240.0,
        ..Default::default()
    };
    let audio = RecordingAudio::default();
    let mut game = Game::new(5, settings, Box::new(audio.clone()), 0.0);
    let mut clock = FixedStepClock::from_fps(60);
    let mut renderer = RecordingRenderer::default();
    let mut input = ScriptedInput::new([vec![InputEvent::Jump]]);

    app::run(&mut game, &mut clock, &mut input, &mut renderer, Some(60 * 15));

    assert_eq!(game.state.phase, GamePhase::Playing);
    assert!(game.state.score >= 5);
    let points = audio
        .played()
        .iter()
        .filter(|s| **s == SoundEffect::Point)
        .count() as u32;
    assert_eq!(points, game.state.score);
}

#[test]
fn test_autopilot_demo_scores() {
    let settings = Settings {
        gap_y_min: 150.0,
        gap_y_max: 230.0,
        ..Default::default()
    };
    let mut game = Game::new(8, settings, Box::new(RecordingAudio::default()), 0.0);
    game.autopilot = true;
    let mut clock = FixedStepClock::from_fps(60);
    let mut renderer = RecordingRenderer::default();
    let mut input = ScriptedInput::default();

    app::run(&mut game, &mut clock, &mut input, &mut renderer, Some(60 * 20));

    assert_eq!(game.state.phase, GamePhase::Playing);
    assert!(game.state.score >= 5, "score {}", game.state.score);
}
