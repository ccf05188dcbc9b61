//! Brick Bounce entry point
//!
//! Headless runner: plays a session on autopilot at the fixed frame rate and
//! prints the final snapshot as JSON.
//!
//! Usage: `brick-bounce [settings.json] [seed]`

use brick_bounce::Settings;
use brick_bounce::audio::{AudioManager, LogSink};
use brick_bounce::consts::{FRAME_DT, FRAME_RATE};
use brick_bounce::sim::{GameState, TickInput, tick};

/// Give up after ten minutes of simulated play
const MAX_FRAMES: u64 = 10 * 60 * FRAME_RATE as u64;

const DEFAULT_SEED: u64 = 0x5eed;

fn main() {
    env_logger::init();
    log::info!("Brick Bounce (headless) starting...");

    let mut args = std::env::args().skip(1);
    let settings = args.next().map(|path| Settings::load(path)).unwrap_or_default();
    let seed = match args.next() {
        Some(arg) => arg.parse::<u64>().unwrap_or_else(|e| {
            log::warn!("Invalid seed {:?}: {} - using default", arg, e);
            DEFAULT_SEED
        }),
        None => DEFAULT_SEED,
    };

    let mut audio = AudioManager::from_settings(LogSink, &settings);
    let mut state = GameState::new(settings.game.clone(), seed);
    let input = TickInput {
        idle_mode: true,
        ..Default::default()
    };

    while state.is_running() && state.time_ticks < MAX_FRAMES {
        tick(&mut state, &input, FRAME_DT);
        audio.play_events(&state.events);
    }

    if state.is_running() {
        log::warn!("Stopped after {} frames without a result", state.time_ticks);
    }
    log::info!(
        "Finished in {:?} after {} frames, score {}/{}",
        state.phase(),
        state.time_ticks,
        state.score(),
        state.total_blocks()
    );

    match serde_json::to_string_pretty(&state.snapshot()) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("Could not serialize snapshot: {}", e),
    }
}
