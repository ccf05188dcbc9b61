//! Brick Bounce - A single-screen block breaker
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//! - `settings`: Data-driven game configuration and preferences
//! - `audio`: Maps simulation events onto sound cues

pub mod audio;
pub mod settings;
pub mod sim;

pub use settings::{GameConfig, Settings};

/// Game configuration constants
pub mod consts {
    /// Frame rate the per-frame velocities are tuned for
    pub const FRAME_RATE: f32 = 60.0;
    /// Fixed frame duration in seconds
    pub const FRAME_DT: f32 = 1.0 / FRAME_RATE;

    /// Arena dimensions
    pub const ARENA_WIDTH: f32 = 640.0;
    pub const ARENA_HEIGHT: f32 = 360.0;

    /// Ball defaults (velocities are pixels per frame)
    pub const BALL_SIZE: f32 = 20.0;
    pub const BALL_START_X: f32 = 320.0;
    pub const BALL_START_Y: f32 = 280.0;
    pub const BALL_SPEED: f32 = 3.0;

    /// Platform defaults
    pub const PLATFORM_WIDTH: f32 = 100.0;
    pub const PLATFORM_HEIGHT: f32 = 14.0;
    pub const PLATFORM_START_X: f32 = 280.0;
    pub const PLATFORM_START_Y: f32 = 300.0;
    pub const PLATFORM_SPEED: f32 = 6.0;

    /// Block grid layout
    pub const BLOCK_ROWS: u32 = 4;
    pub const BLOCK_COLS: u32 = 8;
    pub const BLOCK_WIDTH: f32 = 60.0;
    pub const BLOCK_HEIGHT: f32 = 20.0;
    pub const BLOCK_GAP: f32 = 4.0;
    pub const BLOCK_OFFSET_X: f32 = 65.0;
    pub const BLOCK_OFFSET_Y: f32 = 35.0;

    /// Ball sprite animation (cosmetic only)
    pub const BALL_ANIM_PERIOD_MS: u32 = 100;
    pub const BALL_ANIM_FRAMES: u8 = 4;
}
