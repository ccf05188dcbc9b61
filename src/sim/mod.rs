//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One update per frame, velocities in pixels per frame
//! - Seeded RNG only
//! - Stable iteration order (grid order for blocks)
//! - No rendering, audio or platform dependencies

pub mod anim;
pub mod ball;
pub mod block;
pub mod collision;
pub mod platform;
pub mod state;
pub mod tick;

pub use anim::FrameClock;
pub use ball::{Ball, BallState, BoundsOutcome};
pub use block::{Block, build_grid};
pub use collision::{Rect, boxes_overlap};
pub use platform::{Direction, Platform};
pub use state::{GameEvent, GamePhase, GameState, Snapshot};
pub use tick::{Intent, TickInput, tick};
