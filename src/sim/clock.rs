//! Frame clock
//!
//! Turns host frame timestamps (milliseconds) into per-frame deltas (seconds).

/// Frame-to-frame delta tracker
#[derive(Debug, Clone, Default)]
pub struct Clock {
    /// Timestamp of the previous frame, `None` until the first frame arrives
    previous_ms: Option<f64>,
}

impl Clock {
    pub fn new() -> Self {
        Self { previous_ms: None }
    }

    /// Record a frame timestamp and return seconds elapsed since the last one.
    ///
    /// The first call after construction or [`Clock::restart`] returns 0.
    /// Timestamps are trusted to be monotonic; no clamping is applied.
    pub fn tick(&mut self, timestamp_ms: f64) -> f32 {
        let dt = match self.previous_ms {
            Some(previous) => ((timestamp_ms - previous) / 1000.0) as f32,
            None => 0.0,
        };
        self.previous_ms = Some(timestamp_ms);
        dt
    }

    /// Forget the previous timestamp so the next tick yields 0
    pub fn restart(&mut self) {
        self.previous_ms = None;
    }

    pub fn has_started(&self) -> bool {
        self.previous_ms.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_tick_is_zero() {
        let mut clock = Clock::new();
        assert!(!clock.has_started());
        assert_eq!(clock.tick(123_456.0), 0.0);
        assert!(clock.has_started());
    }

    #[test]
    fn test_delta_in_seconds() {
        let mut clock = Clock::new();
        clock.tick(1000.0);
        assert!((clock.tick(1016.0) - 0.016).abs() < 1e-6);
        assert!((clock.tick(1516.0) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_restart_suppresses_jump() {
        let mut clock = Clock::new();
        clock.tick(0.0);
        clock.tick(16.0);
        clock.restart();
        // Tab came back after a minute
        assert_eq!(clock.tick(60_016.0), 0.0);
        assert!((clock.tick(60_032.0) - 0.016).abs() < 1e-6);
    }
}
