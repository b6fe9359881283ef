//! Platform abstraction layer
//!
//! Host-side helpers shared by the browser and native entry points:
//! - Key name to game action mapping
//! - Frame rate measurement

/// What a key does in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Left,
    Right,
    Restart,
}

impl KeyAction {
    /// Map a DOM `KeyboardEvent.key` value
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" | "a" | "A" => Some(KeyAction::Left),
            "ArrowRight" | "d" | "D" => Some(KeyAction::Right),
            "r" | "R" | "Enter" => Some(KeyAction::Restart),
            _ => None,
        }
    }

    /// Apply a key transition to a session.
    ///
    /// Movement keys follow the held state; restart fires on press only.
    pub fn apply<R: crate::sim::RandomSource>(
        self,
        session: &mut crate::sim::GameSession<R>,
        pressed: bool,
    ) {
        match self {
            KeyAction::Left => session.set_left(pressed),
            KeyAction::Right => session.set_right(pressed),
            KeyAction::Restart => {
                if pressed {
                    session.request_restart();
                }
            }
        }
    }
}

/// Frames per second over a rolling window of frame timestamps
#[derive(Debug, Clone)]
pub struct FpsCounter {
    frame_times: [f64; Self::WINDOW],
    frame_index: usize,
    fps: u32,
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl FpsCounter {
    const WINDOW: usize = 60;

    pub fn new() -> Self {
        Self {
            frame_times: [0.0; Self::WINDOW],
            frame_index: 0,
            fps: 0,
        }
    }

    /// Record a frame timestamp (ms) and return the current estimate
    pub fn record(&mut self, time_ms: f64) -> u32 {
        self.frame_times[self.frame_index] = time_ms;
        self.frame_index = (self.frame_index + 1) % Self::WINDOW;

        // Oldest sample is the one we will overwrite next
        let oldest = self.frame_times[self.frame_index];
        if oldest > 0.0 {
            let elapsed = time_ms - oldest;
            if elapsed > 0.0 {
                self.fps = ((Self::WINDOW - 1) as f64 * 1000.0 / elapsed).round() as u32;
            }
        }
        self.fps
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{GameSession, ScriptedRandom};
    use crate::tuning::Tuning;

    #[test]
    fn test_key_mapping() {
        assert_eq!(KeyAction::from_key("ArrowLeft"), Some(KeyAction::Left));
        assert_eq!(KeyAction::from_key("d"), Some(KeyAction::Right));
        assert_eq!(KeyAction::from_key("R"), Some(KeyAction::Restart));
        assert_eq!(KeyAction::from_key("Enter"), Some(KeyAction::Restart));
        assert_eq!(KeyAction::from_key("x"), None);
    }

    #[test]
    fn test_apply_movement_keys() {
        let mut session = GameSession::with_rng(Tuning::default(), ScriptedRandom::new(vec![0.5]));
        session.on_frame(0.0);
        KeyAction::Right.apply(&mut session, true);
        session.on_frame(500.0);
        assert_eq!(session.player_rect().left(), 380.0 + 160.0);

        KeyAction::Right.apply(&mut session, false);
        session.on_frame(1_000.0);
        assert_eq!(session.player_rect().left(), 380.0 + 160.0);
    }

    #[test]
    fn test_restart_only_on_press() {
        let mut session = GameSession::with_rng(Tuning::default(), ScriptedRandom::new(vec![0.5]));
        session.lives = 1;
        let player = session.player_rect();
        session.hazards.push(crate::sim::Hazard {
            id: 1,
            rect: player,
            vy: 0.0,
        });
        session.on_frame(0.0);
        assert!(session.is_game_over());

        KeyAction::Restart.apply(&mut session, false);
        session.on_frame(16.0);
        assert!(session.is_game_over());

        KeyAction::Restart.apply(&mut session, true);
        session.on_frame(32.0);
        assert!(!session.is_game_over());
    }

    #[test]
    fn test_fps_steady_60() {
        let mut counter = FpsCounter::new();
        let frame = 1000.0 / 60.0;
        for i in 1..=120 {
            counter.record(i as f64 * frame);
        }
        assert_eq!(counter.fps(), 60);
    }
}
