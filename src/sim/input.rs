//! Player input intent
//!
//! Key handlers write here as events arrive; the simulation only reads.

/// Snapshot of what the player currently wants
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Intent {
    pub left: bool,
    pub right: bool,
}

impl Intent {
    /// Horizontal direction: -1, 0 or +1. Both held cancels out.
    pub fn direction(&self) -> f32 {
        match (self.left, self.right) {
            (true, false) => -1.0,
            (false, true) => 1.0,
            _ => 0.0,
        }
    }
}

/// Held movement keys plus a one-shot restart request
#[derive(Debug, Clone, Default)]
pub struct InputState {
    intent: Intent,
    restart_requested: bool,
}

impl InputState {
    pub fn set_left(&mut self, held: bool) {
        self.intent.left = held;
    }

    pub fn set_right(&mut self, held: bool) {
        self.intent.right = held;
    }

    /// Record a restart key press; consumed by the next frame
    pub fn request_restart(&mut self) {
        self.restart_requested = true;
    }

    pub fn intent(&self) -> Intent {
        self.intent
    }

    pub fn restart_requested(&self) -> bool {
        self.restart_requested
    }

    /// Drop any pending restart request (end of frame)
    pub fn clear_restart(&mut self) {
        self.restart_requested = false;
    }

    /// Release all held keys
    pub fn release_all(&mut self) {
        self.intent = Intent::default();
    }
}
