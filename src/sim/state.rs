//! Game state and core simulation types
//!
//! One `GameState` is a whole session. The caller owns it and drives it with
//! [`tick`](super::tick::tick); there is no global game object.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::ball::Ball;
use super::block::{Block, build_grid};
use super::collision::Rect;
use super::platform::Platform;
use crate::settings::GameConfig;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Ball resting on the platform, waiting for launch input
    Serve,
    /// Active gameplay
    Playing,
    /// Every block cleared
    Won,
    /// Ball fell out of the arena
    Lost,
}

impl GamePhase {
    /// Win and loss both end the session for good
    pub fn is_terminal(self) -> bool {
        matches!(self, GamePhase::Won | GamePhase::Lost)
    }
}

/// Discrete signals emitted during a tick, for audio and UI collaborators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Ball hit a wall or the platform
    Bump,
    /// A block was destroyed
    Pickup,
    /// Last block destroyed
    Win,
    /// Ball lost off the bottom
    Lose,
}

/// Read-only view of everything a renderer draws
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub arena: Rect,
    pub ball: Rect,
    pub ball_frame: u8,
    pub platform: Rect,
    pub blocks: Vec<Rect>,
    pub score: u32,
    pub phase: GamePhase,
}

/// Complete session state (deterministic for a given seed and input stream)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub config: GameConfig,
    pub ball: Ball,
    pub platform: Platform,
    /// Grid order, fixed for the whole session
    pub blocks: Vec<Block>,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Events from the most recent tick that ran
    pub events: Vec<GameEvent>,
    pub(crate) rng: Pcg32,
    pub(crate) score: u32,
    pub(crate) phase: GamePhase,
    pub(crate) running: bool,
    total_blocks: u32,
}

impl GameState {
    /// Start a new session
    pub fn new(config: GameConfig, seed: u64) -> Self {
        let ball = Ball::new(&config);
        let platform = Platform::new(&config);
        let blocks = build_grid(&config);
        let total_blocks = blocks.len() as u32;

        log::info!(
            "Session started (seed {}, {} blocks, arena {}x{})",
            seed,
            total_blocks,
            config.arena_width,
            config.arena_height
        );

        Self {
            seed,
            config,
            ball,
            platform,
            blocks,
            time_ticks: 0,
            events: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
            score: 0,
            phase: GamePhase::Serve,
            running: true,
            total_blocks,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// False once a terminal phase has been reached; never flips back
    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn total_blocks(&self) -> u32 {
        self.total_blocks
    }

    pub fn active_blocks(&self) -> impl Iterator<Item = &Block> {
        self.blocks.iter().filter(|b| b.active)
    }

    pub fn arena_size(&self) -> Vec2 {
        Vec2::new(self.config.arena_width, self.config.arena_height)
    }

    /// Count a destroyed block. Returns true when that was the last one.
    pub(crate) fn add_score(&mut self) -> bool {
        self.score += 1;
        self.score >= self.total_blocks
    }

    /// Enter a terminal phase and stop all further ticking
    pub(crate) fn finish(&mut self, phase: GamePhase) {
        if !self.running {
            return;
        }

        self.phase = phase;
        self.running = false;

        match phase {
            GamePhase::Won => log::info!("Winner! Final score {}", self.score),
            _ => log::info!("Game over at score {}/{}", self.score, self.total_blocks),
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            arena: Rect::new(0.0, 0.0, self.config.arena_width, self.config.arena_height),
            ball: self.ball.rect(),
            ball_frame: self.ball.anim.frame(),
            platform: self.platform.rect(),
            blocks: self.active_blocks().map(|b| b.rect).collect(),
            score: self.score,
            phase: self.phase,
        }
    }
}
