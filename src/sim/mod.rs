//! Simulation module
//!
//! All gameplay logic lives here. This module must stay free of rendering
//! and platform dependencies:
//! - Variable timestep driven by host frame timestamps
//! - Injectable RNG only
//! - Single owned session, no globals

pub mod clock;
pub mod difficulty;
pub mod hazard;
pub mod input;
pub mod player;
pub mod random;
pub mod rect;
pub mod state;
pub mod tick;

pub use clock::Clock;
pub use difficulty::{Difficulty, spawn_interval_for};
pub use hazard::{Hazard, HazardSpawner};
pub use input::{InputState, Intent};
pub use player::Player;
pub use random::{RandomSource, ScriptedRandom};
pub use rect::Rect;
pub use state::{GameEvent, GamePhase, GameSession};
pub use tick::{StepOutcome, advance_hazards, tick};
