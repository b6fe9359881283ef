//! Dodger - a single-screen arcade game
//!
//! Core modules:
//! - `sim`: Simulation (clock, input intent, player, hazards, difficulty, game state)
//! - `renderer`: Scene read model and WebGPU rendering pipeline
//! - `platform`: Browser/native host helpers (key mapping, FPS)
//! - `tuning`: Data-driven game balance
//! - `settings`: Presentation preferences and config loading

pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use settings::{GameConfig, Settings};
pub use tuning::Tuning;

/// Game configuration constants (defaults for [`Tuning`])
pub mod consts {
    /// Playfield dimensions in pixels
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 500.0;

    /// Player defaults
    pub const PLAYER_WIDTH: f32 = 40.0;
    pub const PLAYER_HEIGHT: f32 = 40.0;
    /// Distance from the player's top edge to the bottom of the screen
    pub const PLAYER_BOTTOM_OFFSET: f32 = 100.0;
    /// Horizontal speed (pixels/s)
    pub const PLAYER_SPEED: f32 = 320.0;

    /// Hazard size range [min, max) in pixels (square)
    pub const HAZARD_MIN_SIZE: f32 = 30.0;
    pub const HAZARD_MAX_SIZE: f32 = 50.0;
    /// Hazard fall speed range [min, max) in pixels/s
    pub const HAZARD_MIN_SPEED: f32 = 150.0;
    pub const HAZARD_MAX_SPEED: f32 = 250.0;

    /// Seconds between spawns at difficulty level 0
    pub const BASE_SPAWN_INTERVAL: f32 = 1.5;
    /// Spawn interval never drops below this
    pub const MIN_SPAWN_INTERVAL: f32 = 0.35;
    /// Spawn interval reduction per difficulty level
    pub const SPAWN_INTERVAL_STEP: f32 = 0.15;

    /// Seconds of play per difficulty level
    pub const DIFFICULTY_STEP_SECONDS: f32 = 10.0;
    /// Background flash length after a level-up
    pub const FLASH_DURATION: f32 = 0.35;

    pub const STARTING_LIVES: u32 = 3;
}
