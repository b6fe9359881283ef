//! Difficulty progression
//!
//! Every `difficulty_step_seconds` of play bumps the level, shortens the
//! spawn interval and re-arms the background flash.

use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// Spawn interval for a difficulty level:
/// `max(min_spawn_interval, base_spawn_interval - level * spawn_interval_step)`
pub fn spawn_interval_for(level: u32, tuning: &Tuning) -> f32 {
    (tuning.base_spawn_interval - level as f32 * tuning.spawn_interval_step)
        .max(tuning.min_spawn_interval)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Difficulty {
    /// Monotonic during a run
    pub level: u32,
    /// Seconds accumulated toward the next level
    pub timer: f32,
    /// Seconds between hazard spawns, derived from `level`
    pub spawn_interval: f32,
    /// Remaining flash time; `> 0` means flashing. May go negative.
    pub flash_timer: f32,
}

impl Difficulty {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            level: 0,
            timer: 0.0,
            spawn_interval: spawn_interval_for(0, tuning),
            flash_timer: 0.0,
        }
    }

    /// Accumulate play time and apply every level-up it completes.
    ///
    /// Overshoot carries over, so the level advances exactly once per
    /// step regardless of frame size. Returns the number of level-ups.
    pub fn tick(&mut self, dt: f32, tuning: &Tuning) -> u32 {
        let step = tuning.difficulty_step_seconds;
        if step <= 0.0 {
            return 0;
        }

        self.timer += dt;
        let mut level_ups = 0;
        while self.timer >= step {
            self.timer -= step;
            self.level += 1;
            self.spawn_interval = spawn_interval_for(self.level, tuning);
            self.flash_timer = tuning.flash_duration;
            level_ups += 1;
        }
        level_ups
    }

    /// Count the flash down; no floor
    pub fn decay_flash(&mut self, dt: f32) {
        self.flash_timer -= dt;
    }

    pub fn is_flashing(&self) -> bool {
        self.flash_timer > 0.0
    }

    /// Flash progress in `[0, 1]`, 1 right after a level-up
    pub fn flash_intensity(&self, tuning: &Tuning) -> f32 {
        if tuning.flash_duration <= 0.0 {
            return 0.0;
        }
        (self.flash_timer / tuning.flash_duration).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    #[test]
    fn test_interval_formula() {
        let tuning = Tuning::default();
        assert!(approx(spawn_interval_for(0, &tuning), 1.5));
        assert!(approx(spawn_interval_for(1, &tuning), 1.35));
        assert!(approx(spawn_interval_for(7, &tuning), 0.45));
        assert!(approx(spawn_interval_for(8, &tuning), 0.35));
        assert!(approx(spawn_interval_for(20, &tuning), 0.35));
    }

    #[test]
    fn test_single_large_step_levels_twice() {
        let tuning = Tuning::default();
        let mut difficulty = Difficulty::new(&tuning);
        assert_eq!(difficulty.tick(25.0, &tuning), 2);
        assert_eq!(difficulty.level, 2);
        assert!(approx(difficulty.timer, 5.0));
        assert!(approx(difficulty.spawn_interval, 1.2));
        assert!(approx(difficulty.flash_timer, 0.35));
    }

    #[test]
    fn test_overshoot_carries_over() {
        let tuning = Tuning::default();
        let mut difficulty = Difficulty::new(&tuning);
        assert_eq!(difficulty.tick(9.5, &tuning), 0);
        assert_eq!(difficulty.tick(1.0, &tuning), 1);
        assert!(approx(difficulty.timer, 0.5));
        assert_eq!(difficulty.tick(9.4, &tuning), 0);
        assert_eq!(difficulty.tick(0.2, &tuning), 1);
        assert_eq!(difficulty.level, 2);
    }

    #[test]
    fn test_flash_retriggers_without_stacking() {
        let tuning = Tuning::default();
        let mut difficulty = Difficulty::new(&tuning);
        assert!(!difficulty.is_flashing());

        difficulty.tick(10.0, &tuning);
        assert!(difficulty.is_flashing());
        difficulty.decay_flash(0.2);
        assert!(approx(difficulty.flash_timer, 0.15));

        difficulty.tick(10.0, &tuning);
        assert!(approx(difficulty.flash_timer, 0.35), "last write wins");

        difficulty.decay_flash(1.0);
        assert!(!difficulty.is_flashing());
        assert!(difficulty.flash_timer < 0.0);
        assert_eq!(difficulty.flash_intensity(&tuning), 0.0);
    }

    proptest! {
        #[test]
        fn prop_interval_matches_formula(level in 0u32..1000) {
            let tuning = Tuning::default();
            let expected = (1.5f32 - 0.15 * level as f32).max(0.35);
            prop_assert!(approx(spawn_interval_for(level, &tuning), expected));
            prop_assert!(spawn_interval_for(level, &tuning) >= 0.35);
        }

        #[test]
        fn prop_one_level_per_step(frames in prop::collection::vec(0.0f32..3.0, 1..200)) {
            let tuning = Tuning::default();
            let mut difficulty = Difficulty::new(&tuning);
            let mut total = 0.0f64;
            for dt in &frames {
                difficulty.tick(*dt, &tuning);
                total += *dt as f64;
            }
            let expected = (total / 10.0).floor() as i64;
            // Allow for f32 drift right at a boundary
            prop_assert!((difficulty.level as i64 - expected).abs() <= 1);
            prop_assert!(difficulty.timer >= 0.0 && difficulty.timer < 10.0);
        }
    }
}
