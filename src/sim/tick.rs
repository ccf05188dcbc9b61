//! Per-frame simulation tick
//!
//! Core game loop that advances the session one frame at a time.

use serde::{Deserialize, Serialize};

use super::platform::Direction;
use super::state::{GameEvent, GamePhase, GameState};

/// Discrete player intents, mapped from raw key events by the frontend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Intent {
    MoveLeft,
    MoveRight,
    Stop,
    Launch,
}

impl Intent {
    /// Key press mapping (arrow keys steer, space launches)
    pub fn from_key_down(key: &str) -> Option<Self> {
        if key == " " {
            return Some(Intent::Launch);
        }
        Direction::from_key(key).map(|dir| match dir {
            Direction::Left => Intent::MoveLeft,
            Direction::Right => Intent::MoveRight,
        })
    }

    /// Releasing any key stops the platform
    pub fn from_key_up(_key: &str) -> Self {
        Intent::Stop
    }
}

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Intents applied in order before physics runs
    pub intents: Vec<Intent>,
    /// Idle/demo mode - the platform plays itself
    pub idle_mode: bool,
}

impl TickInput {
    pub fn with_intents(intents: impl IntoIterator<Item = Intent>) -> Self {
        Self {
            intents: intents.into_iter().collect(),
            idle_mode: false,
        }
    }
}

/// Advance the session by one frame
///
/// `dt` is the wall time covered by this frame in seconds. It only drives the
/// ball's sprite animation; movement is per frame.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    // Terminal phases never resume, and a finished session is left untouched
    if !state.is_running() {
        return;
    }

    state.events.clear();

    state.time_ticks += 1;

    let mut input = input.clone();
    if input.idle_mode {
        autopilot(state, &mut input);
    }

    for intent in &input.intents {
        apply_intent(state, *intent);
    }

    // --- BLOCKS ---
    let mut cleared = false;
    for i in 0..state.blocks.len() {
        if !state.blocks[i].active || !state.ball.collides_with(&state.blocks[i].rect) {
            continue;
        }

        state.ball.bounce_off_block(&mut state.blocks[i]);
        state.events.push(GameEvent::Pickup);
        log::trace!("Block {} destroyed", i);

        if state.add_score() {
            cleared = true;
        }
    }

    if cleared {
        state.events.push(GameEvent::Win);
        state.finish(GamePhase::Won);
        return;
    }

    // --- PLATFORM ---
    let platform_rect = state.platform.rect();
    if state.ball.collides_with(&platform_rect) {
        state.ball.bounce_off_platform(&state.platform);
        state.events.push(GameEvent::Bump);
    }

    // --- ARENA EDGES ---
    let arena = state.arena_size();
    state.platform.resolve_screen_bounds(arena.x);
    if state
        .ball
        .resolve_screen_bounds(arena, &mut state.events)
        .is_lost()
    {
        state.finish(GamePhase::Lost);
        return;
    }

    // --- COMMIT ---
    state.platform.commit_move(&mut state.ball);
    state.ball.commit_move();

    state.ball.anim.advance(dt);
}

fn apply_intent(state: &mut GameState, intent: Intent) {
    match intent {
        Intent::MoveLeft => state.platform.start(Direction::Left),
        Intent::MoveRight => state.platform.start(Direction::Right),
        Intent::Stop => state.platform.stop(),
        Intent::Launch => {
            if state.platform.fire(&mut state.ball, &mut state.rng) {
                state.phase = GamePhase::Playing;
                log::info!("Ball launched with velocity {:?}", state.ball.vel);
            }
        }
    }
}

/// Synthesize intents that launch the ball and keep the platform under it
fn autopilot(state: &GameState, input: &mut TickInput) {
    if state.phase() == GamePhase::Serve {
        input.intents.push(Intent::Launch);
        return;
    }

    let width = state.platform.size.x;
    // Hit slightly off-center, alternating sides, so the ball never settles
    // into a vertical loop
    let side = if (state.time_ticks / 300) % 2 == 0 { 1.0 } else { -1.0 };
    let target = state.ball.center_x() + side * width * 0.2;
    let platform_center = state.platform.rect().center_x();
    let dead_zone = width / 8.0;

    let intent = if target > platform_center + dead_zone {
        Intent::MoveRight
    } else if target < platform_center - dead_zone {
        Intent::MoveLeft
    } else {
        Intent::Stop
    };
    input.intents.push(intent);
}
