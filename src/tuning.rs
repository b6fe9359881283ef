//! Data-driven game balance
//!
//! Every gameplay number lives here so a page can override it with JSON.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Gameplay constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub screen_width: f32,
    pub screen_height: f32,

    pub player_width: f32,
    pub player_height: f32,
    /// Player top edge, measured up from the bottom of the screen
    pub player_bottom_offset: f32,
    pub player_speed: f32,

    pub hazard_min_size: f32,
    pub hazard_max_size: f32,
    pub hazard_min_speed: f32,
    pub hazard_max_speed: f32,

    pub base_spawn_interval: f32,
    pub min_spawn_interval: f32,
    pub spawn_interval_step: f32,

    pub difficulty_step_seconds: f32,
    pub flash_duration: f32,

    pub starting_lives: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,

            player_width: PLAYER_WIDTH,
            player_height: PLAYER_HEIGHT,
            player_bottom_offset: PLAYER_BOTTOM_OFFSET,
            player_speed: PLAYER_SPEED,

            hazard_min_size: HAZARD_MIN_SIZE,
            hazard_max_size: HAZARD_MAX_SIZE,
            hazard_min_speed: HAZARD_MIN_SPEED,
            hazard_max_speed: HAZARD_MAX_SPEED,

            base_spawn_interval: BASE_SPAWN_INTERVAL,
            min_spawn_interval: MIN_SPAWN_INTERVAL,
            spawn_interval_step: SPAWN_INTERVAL_STEP,

            difficulty_step_seconds: DIFFICULTY_STEP_SECONDS,
            flash_duration: FLASH_DURATION,

            starting_lives: STARTING_LIVES,
        }
    }
}

impl Tuning {
    /// Player's fixed vertical position (top edge)
    pub fn player_y(&self) -> f32 {
        self.screen_height - self.player_bottom_offset
    }

    /// Largest x the player's left edge may take
    pub fn player_max_x(&self) -> f32 {
        (self.screen_width - self.player_width).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let tuning = Tuning::default();
        assert_eq!(tuning.starting_lives, 3);
        assert_eq!(tuning.base_spawn_interval, 1.5);
        assert_eq!(tuning.min_spawn_interval, 0.35);
        assert_eq!(tuning.player_y(), 400.0);
        assert_eq!(tuning.player_max_x(), 760.0);
    }

    #[test]
    fn test_partial_json_override() {
        let tuning: Tuning = serde_json::from_str(r#"{ "player_speed": 500.0 }"#).unwrap();
        assert_eq!(tuning.player_speed, 500.0);
        assert_eq!(tuning.screen_width, SCREEN_WIDTH);
        assert_eq!(tuning.starting_lives, STARTING_LIVES);
    }
}
