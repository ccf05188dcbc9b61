//! The player's platform

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::ball::Ball;
use super::collision::Rect;
use crate::settings::GameConfig;

/// Horizontal steering direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// Map a keyboard key name; any other key has no direction
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(Direction::Left),
            "ArrowRight" => Some(Direction::Right),
            _ => None,
        }
    }
}

/// The player's platform
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Platform {
    /// Top-left corner
    pub pos: Vec2,
    /// Pending horizontal velocity (pixels per frame)
    pub vel_x: f32,
    pub size: Vec2,
    pub speed: f32,
    /// The ball rests on the platform until the first launch
    holding_ball: bool,
}

impl Platform {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            pos: Vec2::new(config.platform_start_x, config.platform_start_y),
            vel_x: 0.0,
            size: Vec2::new(config.platform_width, config.platform_height),
            speed: config.platform_speed,
            holding_ball: true,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }

    pub fn predicted_rect(&self) -> Rect {
        self.rect().translated(Vec2::new(self.vel_x, 0.0))
    }

    pub fn is_holding_ball(&self) -> bool {
        self.holding_ball
    }

    /// Start moving in `direction` at full speed
    pub fn start(&mut self, direction: Direction) {
        self.vel_x = match direction {
            Direction::Left => -self.speed,
            Direction::Right => self.speed,
        };
    }

    pub fn stop(&mut self) {
        self.vel_x = 0.0;
    }

    /// Release the held ball. Only the first call has any effect.
    pub fn fire<R: Rng>(&mut self, ball: &mut Ball, rng: &mut R) -> bool {
        if !self.holding_ball {
            return false;
        }

        ball.start(rng);
        self.holding_ball = false;
        true
    }

    /// Commit the pending velocity, carrying a held ball along
    pub fn commit_move(&mut self, ball: &mut Ball) {
        if self.vel_x == 0.0 {
            return;
        }

        self.pos.x += self.vel_x;
        if self.holding_ball {
            ball.pos.x += self.vel_x;
        }
    }

    /// Where along the platform `touch_x` lands: -1 at the left edge, 0 at
    /// the center, +1 at the right edge
    ///
    /// A ball can clip a corner with its center past the edge; those touches
    /// count as the edge itself.
    pub fn touch_offset(&self, touch_x: f32) -> f32 {
        let diff = (self.pos.x + self.size.x) - touch_x;
        let offset = self.size.x - diff;
        (2.0 * offset / self.size.x - 1.0).clamp(-1.0, 1.0)
    }

    /// Halt at the walls instead of crossing them
    pub fn resolve_screen_bounds(&mut self, arena_width: f32) {
        let next = self.predicted_rect();
        if next.left() < 0.0 || next.right() > arena_width {
            self.vel_x = 0.0;
        }
    }
}
