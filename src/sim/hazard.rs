//! Falling hazards and the timer that spawns them

use serde::{Deserialize, Serialize};

use super::random::RandomSource;
use super::rect::Rect;
use crate::tuning::Tuning;

/// A falling square
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hazard {
    pub id: u32,
    pub rect: Rect,
    /// Downward speed (pixels/s)
    pub vy: f32,
}

impl Hazard {
    pub fn fall(&mut self, dt: f32) {
        self.rect.pos.y += self.vy * dt;
    }

    /// Top edge has passed the bottom of the screen
    pub fn is_below(&self, screen_height: f32) -> bool {
        self.rect.top() > screen_height
    }
}

/// Accumulates time and emits a hazard once per spawn interval
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HazardSpawner {
    /// Seconds since the last spawn
    pub timer: f32,
    next_id: u32,
}

impl HazardSpawner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the timer and spawn at most one hazard.
    ///
    /// On firing the timer restarts from zero; any overshoot is discarded,
    /// so a long stall yields a single spawn.
    pub fn maybe_spawn<R: RandomSource>(
        &mut self,
        dt: f32,
        spawn_interval: f32,
        tuning: &Tuning,
        rng: &mut R,
    ) -> Option<Hazard> {
        self.timer += dt;
        if self.timer < spawn_interval {
            return None;
        }
        self.timer = 0.0;
        Some(self.generate(tuning, rng))
    }

    /// Build a hazard with random size, speed and column, just above the screen
    pub fn generate<R: RandomSource>(&mut self, tuning: &Tuning, rng: &mut R) -> Hazard {
        let size = rng.range(tuning.hazard_min_size, tuning.hazard_max_size);
        let vy = rng.range(tuning.hazard_min_speed, tuning.hazard_max_speed);
        let x = rng.range(0.0, (tuning.screen_width - size).max(0.0));

        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);

        Hazard {
            id,
            rect: Rect::new(x, -size, size, size),
            vy,
        }
    }
}
