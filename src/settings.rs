//! Game configuration and player preferences
//!
//! `GameConfig` holds every gameplay dimension and speed; `Settings` adds the
//! audio preferences on top. Both load from JSON and fall back to defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Gameplay tuning: arena, entity sizes, speeds and grid layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Arena ===
    pub arena_width: f32,
    pub arena_height: f32,

    // === Ball ===
    pub ball_size: f32,
    pub ball_start_x: f32,
    pub ball_start_y: f32,
    /// Pixels per frame on each axis after a bounce
    pub ball_speed: f32,
    pub ball_anim_period_ms: u32,
    pub ball_anim_frames: u8,

    // === Platform ===
    pub platform_width: f32,
    pub platform_height: f32,
    pub platform_start_x: f32,
    pub platform_start_y: f32,
    pub platform_speed: f32,

    // === Blocks ===
    pub block_rows: u32,
    pub block_cols: u32,
    pub block_width: f32,
    pub block_height: f32,
    pub block_gap: f32,
    pub block_offset_x: f32,
    pub block_offset_y: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,

            ball_size: BALL_SIZE,
            ball_start_x: BALL_START_X,
            ball_start_y: BALL_START_Y,
            ball_speed: BALL_SPEED,
            ball_anim_period_ms: BALL_ANIM_PERIOD_MS,
            ball_anim_frames: BALL_ANIM_FRAMES,

            platform_width: PLATFORM_WIDTH,
            platform_height: PLATFORM_HEIGHT,
            platform_start_x: PLATFORM_START_X,
            platform_start_y: PLATFORM_START_Y,
            platform_speed: PLATFORM_SPEED,

            block_rows: BLOCK_ROWS,
            block_cols: BLOCK_COLS,
            block_width: BLOCK_WIDTH,
            block_height: BLOCK_HEIGHT,
            block_gap: BLOCK_GAP,
            block_offset_x: BLOCK_OFFSET_X,
            block_offset_y: BLOCK_OFFSET_Y,
        }
    }
}

impl GameConfig {
    /// Parse from JSON; missing fields take their defaults. Values that
    /// would break the simulation are rejected.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let config: Self = serde_json::from_str(json)?;
        config.validate().map_err(<serde_json::Error as serde::de::Error>::custom)?;
        Ok(config)
    }

    /// Load from a JSON file, falling back to defaults on any failure
    pub fn load(path: impl AsRef<Path>) -> Self {
        load_json(path.as_ref(), Self::from_json).unwrap_or_default()
    }

    /// Check that every size, speed and count is usable
    pub fn validate(&self) -> Result<(), String> {
        let positive = [
            ("arena_width", self.arena_width),
            ("arena_height", self.arena_height),
            ("ball_size", self.ball_size),
            ("ball_speed", self.ball_speed),
            ("platform_width", self.platform_width),
            ("platform_height", self.platform_height),
            ("platform_speed", self.platform_speed),
            ("block_width", self.block_width),
            ("block_height", self.block_height),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(format!("{name} must be positive, got {value}"));
            }
        }

        let finite = [
            ("ball_start_x", self.ball_start_x),
            ("ball_start_y", self.ball_start_y),
            ("platform_start_x", self.platform_start_x),
            ("platform_start_y", self.platform_start_y),
            ("block_offset_x", self.block_offset_x),
            ("block_offset_y", self.block_offset_y),
        ];
        for (name, value) in finite {
            if !value.is_finite() {
                return Err(format!("{name} must be finite, got {value}"));
            }
        }

        if !self.block_gap.is_finite() || self.block_gap < 0.0 {
            return Err(format!("block_gap must not be negative, got {}", self.block_gap));
        }
        if self.block_rows == 0 || self.block_cols == 0 {
            return Err("block grid needs at least one row and one column".to_string());
        }
        if self.ball_anim_period_ms == 0 || self.ball_anim_frames == 0 {
            return Err("ball animation needs a non-zero period and frame count".to_string());
        }

        Ok(())
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub game: GameConfig,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    pub muted: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            game: GameConfig::default(),
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let settings: Self = serde_json::from_str(json)?;
        settings.game.validate().map_err(<serde_json::Error as serde::de::Error>::custom)?;
        Ok(settings)
    }

    /// Load from a JSON file, falling back to defaults on any failure
    pub fn load(path: impl AsRef<Path>) -> Self {
        load_json(path.as_ref(), Self::from_json).unwrap_or_default()
    }
}

fn load_json<T>(path: &Path, parse: fn(&str) -> Result<T, serde_json::Error>) -> Option<T> {
    let json = match std::fs::read_to_string(path) {
        Ok(json) => json,
        Err(e) => {
            log::warn!("Could not read {}: {} - using defaults", path.display(), e);
            return None;
        }
    };

    match parse(&json) {
        Ok(value) => {
            log::info!("Loaded settings from {}", path.display());
            Some(value)
        }
        Err(e) => {
            log::warn!("Invalid settings in {}: {} - using defaults", path.display(), e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_constants() {
        let config = GameConfig::default();
        assert_eq!(config.arena_width, 640.0);
        assert_eq!(config.arena_height, 360.0);
        assert_eq!(config.block_rows * config.block_cols, 32);
        assert_eq!(config.ball_speed, 3.0);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = GameConfig::from_json(r#"{ "block_rows": 2, "ball_speed": 4.0 }"#).unwrap();
        assert_eq!(config.block_rows, 2);
        assert_eq!(config.ball_speed, 4.0);
        assert_eq!(config.block_cols, BLOCK_COLS);
        assert_eq!(config.platform_width, PLATFORM_WIDTH);
    }

    #[test]
    fn test_bad_json_is_error() {
        assert!(GameConfig::from_json("{ not json").is_err());
        assert!(GameConfig::from_json(r#"{ "block_rows": "many" }"#).is_err());
    }

    #[test]
    fn test_missing_file_falls_back() {
        let config = GameConfig::load("/nonexistent/brick-bounce/config.json");
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_settings_nested_game() {
        let settings =
            Settings::from_json(r#"{ "muted": true, "game": { "arena_width": 800.0 } }"#).unwrap();
        assert!(settings.muted);
        assert_eq!(settings.game.arena_width, 800.0);
        assert_eq!(settings.game.arena_height, ARENA_HEIGHT);
    }

    #[test]
    fn test_negative_speed_rejected() {
        assert!(GameConfig::from_json(r#"{ "ball_speed": -3.0 }"#).is_err());
        assert!(GameConfig::from_json(r#"{ "platform_speed": 0.0 }"#).is_err());
        assert!(GameConfig::from_json(r#"{ "block_rows": 0 }"#).is_err());
        assert!(Settings::from_json(r#"{ "game": { "ball_anim_period_ms": 0 } }"#).is_err());
    }

    #[test]
    fn test_negative_speed_file_falls_back() {
        let path = std::env::temp_dir().join(format!(
            "brick-bounce-negative-speed-{}.json",
            std::process::id()
        ));
        std::fs::write(&path, r#"{ "ball_speed": -3.0, "block_rows": 2 }"#).unwrap();

        let config = GameConfig::load(&path);
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_valid_file_loads() {
        let path = std::env::temp_dir().join(format!(
            "brick-bounce-valid-{}.json",
            std::process::id()
        ));
        std::fs::write(&path, r#"{ "block_rows": 2 }"#).unwrap();

        let config = GameConfig::load(&path);
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.block_rows, 2);
    }
}
