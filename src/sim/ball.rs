//! The ball: movement, wall bounces, and reactions to blocks and the platform

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::anim::FrameClock;
use super::block::Block;
use super::collision::{Rect, boxes_overlap};
use super::platform::Platform;
use super::state::GameEvent;
use crate::settings::GameConfig;

/// Ball lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BallState {
    /// Resting on the platform, waiting for launch
    Held,
    /// Moving freely
    InPlay,
    /// Fell past the bottom of the arena
    Lost,
}

/// Result of checking the ball against the arena edges
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundsOutcome {
    /// Still inside (possibly after a wall bounce)
    InBounds,
    /// Crossed the bottom edge, the ball is out of play
    Lost,
}

impl BoundsOutcome {
    pub fn is_lost(self) -> bool {
        self == BoundsOutcome::Lost
    }
}

/// A ball entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    /// Top-left corner
    pub pos: Vec2,
    /// Pending per-frame velocity, committed by [`Ball::commit_move`]
    pub vel: Vec2,
    pub size: Vec2,
    /// Magnitude every bounce snaps each velocity axis to
    pub speed: f32,
    pub state: BallState,
    /// Sprite animation, not gameplay-affecting
    pub anim: FrameClock,
}

impl Ball {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            pos: Vec2::new(config.ball_start_x, config.ball_start_y),
            vel: Vec2::ZERO,
            size: Vec2::new(config.ball_size, config.ball_size),
            speed: config.ball_speed,
            state: BallState::Held,
            anim: FrameClock::new(config.ball_anim_frames, config.ball_anim_period_ms),
        }
    }

    /// Current bounding box
    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }

    /// Bounding box after the pending velocity is applied
    pub fn predicted_rect(&self) -> Rect {
        self.rect().translated(self.vel)
    }

    /// Horizontal center of the current box
    pub fn center_x(&self) -> f32 {
        self.pos.x + self.size.x / 2.0
    }

    /// Launch from the held state: straight up at full speed with a random
    /// whole-number horizontal component in `[-speed, speed]`
    pub fn start<R: Rng>(&mut self, rng: &mut R) {
        if self.state != BallState::Held {
            return;
        }

        let reach = self.speed.abs().floor() as i32;
        self.vel.y = -self.speed;
        self.vel.x = rng.random_range(-reach..=reach) as f32;
        self.state = BallState::InPlay;
        self.anim.start();

        log::debug!("Ball launched with velocity {:?}", self.vel);
    }

    /// Commit the pending velocity into position
    pub fn commit_move(&mut self) {
        self.pos += self.vel;
    }

    /// Predictive overlap test against any rectangle
    pub fn collides_with(&self, rect: &Rect) -> bool {
        boxes_overlap(&self.predicted_rect(), rect)
    }

    /// Check the predicted box against the arena edges
    ///
    /// Edges are tested left, right, top, bottom and only the first one that
    /// triggers is corrected this frame. A bottom breach is never clamped.
    pub fn resolve_screen_bounds(
        &mut self,
        arena: Vec2,
        events: &mut Vec<GameEvent>,
    ) -> BoundsOutcome {
        let next = self.predicted_rect();

        if next.left() < 0.0 {
            self.pos.x = 0.0;
            self.vel.x = self.speed;
            events.push(GameEvent::Bump);
        } else if next.right() > arena.x {
            self.pos.x = arena.x - self.size.x;
            self.vel.x = -self.speed;
            events.push(GameEvent::Bump);
        } else if next.top() < 0.0 {
            self.pos.y = 0.0;
            self.vel.y = self.speed;
            events.push(GameEvent::Bump);
        } else if next.bottom() > arena.y {
            self.state = BallState::Lost;
            events.push(GameEvent::Lose);
            return BoundsOutcome::Lost;
        }

        BoundsOutcome::InBounds
    }

    /// Reverse vertical direction and knock the block out
    pub fn bounce_off_block(&mut self, block: &mut Block) {
        self.vel.y = -self.vel.y;
        block.deactivate();
    }

    /// React to touching the platform
    ///
    /// A moving platform drags the ball sideways. The ball only bounces when
    /// it is coming down, so it cannot get stuck bouncing inside the platform.
    pub fn bounce_off_platform(&mut self, platform: &Platform) {
        if platform.vel_x != 0.0 {
            self.pos.x += platform.vel_x;
        }

        if self.vel.y > 0.0 {
            self.vel.y = -self.speed;
            self.vel.x = self.speed * platform.touch_offset(self.center_x());
        }
    }
}
