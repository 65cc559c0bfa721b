//! Flappy entry point
//!
//! Native builds run a headless demo: the autopilot plays on a fixed-step
//! clock while draw calls and sounds go to the log. Front ends with a real
//! window and speakers plug their own collaborators into `flappy::app::run`.

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::path::PathBuf;

    use clap::Parser;
    use flappy::app::{self, ExitReason, Game};
    use flappy::assets::AssetManifest;
    use flappy::platform::headless::{LogAudio, LogRenderer};
    use flappy::platform::{FixedStepClock, ScriptedInput};
    use flappy::Settings;

    #[derive(Parser, Debug)]
    #[command(name = "flappy")]
    #[command(about = "Headless flappy demo: the autopilot plays on a fixed-step clock")]
    pub struct Args {
        /// JSON settings file; missing keys keep their defaults
        #[arg(long)]
        settings: Option<PathBuf>,

        /// Asset root to verify before starting
        #[arg(long)]
        assets: Option<PathBuf>,

        /// RNG seed (default: from the system time)
        #[arg(long)]
        seed: Option<u64>,

        /// Simulated seconds to run
        #[arg(long, default_value_t = 30.0)]
        seconds: f64,

        #[arg(long, default_value_t = 60)]
        fps: u32,

        /// Master volume override (0.0 - 1.0)
        #[arg(long)]
        volume: Option<f32>,

        #[arg(long)]
        mute: bool,

        /// Print the effective settings as JSON and exit
        #[arg(long)]
        print_settings: bool,
    }

    fn seed_from_time() -> u64 {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0)
    }

    /// Returns the process exit code
    pub fn run(args: Args) -> i32 {
        let settings = match &args.settings {
            Some(path) => match Settings::load(path) {
                Ok(settings) => settings,
                Err(e) => {
                    log::error!("Cannot start: {}", e);
                    return 1;
                }
            },
            None => Settings::default(),
        };

        if args.print_settings {
            match settings.to_json() {
                Ok(json) => {
                    println!("{}", json);
                    return 0;
                }
                Err(e) => {
                    log::error!("Cannot print settings: {}", e);
                    return 1;
                }
            }
        }

        if let Some(root) = &args.assets {
            if let Err(e) = AssetManifest::new(root).verify() {
                log::error!("Cannot start: {}", e);
                return 1;
            }
        }

        let seed = args.seed.unwrap_or_else(seed_from_time);
        let mut clock = FixedStepClock::from_fps(args.fps);
        let mut input = ScriptedInput::default();
        let mut renderer = LogRenderer::default();
        let mut game = Game::new(seed, settings, Box::new(LogAudio), 0.0);
        game.autopilot = true;
        if let Some(volume) = args.volume {
            game.audio_mut().set_master_volume(volume);
        }
        if args.mute {
            game.audio_mut().set_muted(true);
        }

        let max_frames = (args.seconds.max(0.0) * args.fps as f64).round() as u64;
        log::info!("Running {} frames at {} fps (seed {})", max_frames, args.fps, seed);

        let reason = app::run(&mut game, &mut clock, &mut input, &mut renderer, Some(max_frames));
        if reason == ExitReason::Quit {
            log::info!("Quit");
        }

        println!(
            "{:.1}s simulated, {} frames drawn, phase {:?}, score {}",
            clock.current(),
            renderer.frames(),
            game.state.phase,
            game.state.score
        );
        0
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use clap::Parser;

    let args = native::Args::parse();
    env_logger::init();
    log::info!("Flappy (native, headless) starting...");
    std::process::exit(native::run(args));
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Web front ends drive `flappy::app::Game` from their own frame callback
}
