//! The player's rectangle and its horizontal controller

use serde::{Deserialize, Serialize};

use super::input::Intent;
use super::rect::Rect;
use crate::tuning::Tuning;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub rect: Rect,
    /// Horizontal velocity (pixels/s), set from intent each update
    pub vx: f32,
    /// Speed while a direction is held
    pub speed: f32,
}

impl Player {
    /// Player centred horizontally at the tuned height, at rest
    pub fn new(tuning: &Tuning) -> Self {
        let x = ((tuning.screen_width - tuning.player_width) / 2.0).clamp(0.0, tuning.player_max_x());
        Self {
            rect: Rect::new(x, tuning.player_y(), tuning.player_width, tuning.player_height),
            vx: 0.0,
            speed: tuning.player_speed,
        }
    }

    /// Move from intent and clamp into `[0, screen_width - w]`
    pub fn update(&mut self, dt: f32, intent: Intent, tuning: &Tuning) {
        self.vx = intent.direction() * self.speed;
        self.rect.pos.x = (self.rect.pos.x + self.vx * dt).clamp(0.0, tuning.player_max_x());
    }
}
