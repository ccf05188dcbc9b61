//! Destructible blocks and the starting grid

use serde::{Deserialize, Serialize};

use super::collision::Rect;
use crate::settings::GameConfig;

/// A block entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Block {
    pub rect: Rect,
    /// Once cleared a block never comes back
    pub active: bool,
}

impl Block {
    pub fn new(rect: Rect) -> Self {
        Self { rect, active: true }
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }
}

/// Lay out the block grid row by row
pub fn build_grid(config: &GameConfig) -> Vec<Block> {
    let mut blocks = Vec::with_capacity((config.block_rows * config.block_cols) as usize);

    for row in 0..config.block_rows {
        for col in 0..config.block_cols {
            let x = (config.block_width + config.block_gap) * col as f32 + config.block_offset_x;
            let y = (config.block_height + config.block_gap) * row as f32 + config.block_offset_y;
            blocks.push(Block::new(Rect::new(
                x,
                y,
                config.block_width,
                config.block_height,
            )));
        }
    }

    blocks
}
