//! Game session state
//!
//! One owned `GameSession` holds everything a run needs. Hosts feed it
//! frame timestamps and key changes; renderers read it.

use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::clock::Clock;
use super::difficulty::Difficulty;
use super::hazard::{Hazard, HazardSpawner};
use super::input::InputState;
use super::player::Player;
use super::random::{RandomSource, seeded};
use super::rect::Rect;
use super::tick::tick;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Out of lives, waiting for restart
    GameOver,
}

/// Things that happened during a frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    HazardSpawned { id: u32 },
    HazardHit { id: u32, lives_left: u32 },
    LevelUp { level: u32 },
    GameOver { score: f32, level: u32 },
    Restarted,
}

/// Complete state of one play session
pub struct GameSession<R = Pcg32> {
    pub(crate) tuning: Tuning,
    pub(crate) rng: R,
    pub(crate) clock: Clock,
    pub(crate) input: InputState,
    pub(crate) phase: GamePhase,
    pub(crate) lives: u32,
    /// Seconds survived
    pub(crate) score: f32,
    pub(crate) player: Player,
    /// Active hazards, in spawn order
    pub(crate) hazards: Vec<Hazard>,
    pub(crate) spawner: HazardSpawner,
    pub(crate) difficulty: Difficulty,
}

impl GameSession<Pcg32> {
    /// New session with a seeded generator
    pub fn new(tuning: Tuning, seed: u64) -> Self {
        log::info!("Session created with seed: {}", seed);
        Self::with_rng(tuning, seeded(seed))
    }
}

impl<R: RandomSource> GameSession<R> {
    /// New session drawing hazard attributes from `rng`
    pub fn with_rng(tuning: Tuning, rng: R) -> Self {
        Self {
            clock: Clock::new(),
            input: InputState::default(),
            phase: GamePhase::Playing,
            lives: tuning.starting_lives,
            score: 0.0,
            player: Player::new(&tuning),
            hazards: Vec::new(),
            spawner: HazardSpawner::new(),
            difficulty: Difficulty::new(&tuning),
            tuning,
            rng,
        }
    }

    /// Advance one display frame.
    ///
    /// While playing this runs the full simulation; after game over only a
    /// pending restart request is honoured. Any restart request is consumed
    /// by this frame either way.
    pub fn on_frame(&mut self, timestamp_ms: f64) -> Vec<GameEvent> {
        let dt = self.clock.tick(timestamp_ms);

        let events = match self.phase {
            GamePhase::Playing => {
                let intent = self.input.intent();
                tick(self, intent, dt)
            }
            GamePhase::GameOver => {
                if self.input.restart_requested() {
                    self.reset();
                    vec![GameEvent::Restarted]
                } else {
                    Vec::new()
                }
            }
        };

        self.input.clear_restart();
        events
    }

    /// Return every run field to its starting value
    pub fn reset(&mut self) {
        self.phase = GamePhase::Playing;
        self.lives = self.tuning.starting_lives;
        self.score = 0.0;
        self.player = Player::new(&self.tuning);
        self.hazards.clear();
        self.spawner.timer = 0.0;
        self.difficulty = Difficulty::new(&self.tuning);
        log::info!("Game reset");
    }

    /// Next frame reports `dt = 0` (e.g. after the host suspended the loop)
    pub fn restart_clock(&mut self) {
        self.clock.restart();
    }

    // === Input ===

    pub fn set_left(&mut self, held: bool) {
        self.input.set_left(held);
    }

    pub fn set_right(&mut self, held: bool) {
        self.input.set_right(held);
    }

    pub fn request_restart(&mut self) {
        self.input.request_restart();
    }

    /// Drop held keys (window lost focus)
    pub fn release_keys(&mut self) {
        self.input.release_all();
    }

    // === Read-only views for rendering ===

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    pub fn score(&self) -> f32 {
        self.score
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn player_rect(&self) -> Rect {
        self.player.rect
    }

    pub fn hazards(&self) -> &[Hazard] {
        &self.hazards
    }

    pub fn difficulty_level(&self) -> u32 {
        self.difficulty.level
    }

    pub fn spawn_interval(&self) -> f32 {
        self.difficulty.spawn_interval
    }

    pub fn flash_timer(&self) -> f32 {
        self.difficulty.flash_timer
    }

    /// Flash progress in `[0, 1]` for background shading
    pub fn flash_intensity(&self) -> f32 {
        self.difficulty.flash_intensity(&self.tuning)
    }

    pub fn spawner(&self) -> &HazardSpawner {
        &self.spawner
    }
}
