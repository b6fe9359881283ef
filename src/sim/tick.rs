//! Per-frame simulation step
//!
//! Advances a playing session by one variable timestep: score, flash,
//! difficulty, spawning, hazard movement and collisions, then the player.

use super::hazard::Hazard;
use super::input::Intent;
use super::random::RandomSource;
use super::rect::Rect;
use super::state::{GameEvent, GamePhase, GameSession};

/// Hazards removed by one [`advance_hazards`] pass
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StepOutcome {
    /// Ids of hazards that left the bottom of the screen
    pub escaped: Vec<u32>,
    /// Ids of hazards that hit the player
    pub hits: Vec<u32>,
}

/// Move every hazard, drop those below the screen, then remove those
/// touching the player.
///
/// Each hazard is visited exactly once per phase; removal uses `retain`
/// so no element is skipped.
pub fn advance_hazards(
    hazards: &mut Vec<Hazard>,
    player: &Rect,
    dt: f32,
    screen_height: f32,
) -> StepOutcome {
    let mut outcome = StepOutcome::default();

    for hazard in hazards.iter_mut() {
        hazard.fall(dt);
    }

    hazards.retain(|h| {
        let below = h.is_below(screen_height);
        if below {
            outcome.escaped.push(h.id);
        }
        !below
    });

    hazards.retain(|h| {
        let hit = player.overlaps(&h.rect);
        if hit {
            outcome.hits.push(h.id);
        }
        !hit
    });

    outcome
}

/// Advance a playing session by `dt` seconds.
///
/// Does nothing once the session is over. Every colliding hazard costs one
/// life, so several hits in one frame can take several lives.
pub fn tick<R: RandomSource>(
    session: &mut GameSession<R>,
    intent: Intent,
    dt: f32,
) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if session.phase != GamePhase::Playing {
        return events;
    }

    session.score += dt;

    // Difficulty (re-arms the flash after decaying it)
    session.difficulty.decay_flash(dt);
    let level_ups = session.difficulty.tick(dt, &session.tuning);
    if level_ups > 0 {
        let level = session.difficulty.level;
        log::info!(
            "Difficulty level {} (spawn interval {:.2}s)",
            level,
            session.difficulty.spawn_interval
        );
        for offset in (0..level_ups).rev() {
            events.push(GameEvent::LevelUp {
                level: level - offset,
            });
        }
    }

    // Spawning
    let interval = session.difficulty.spawn_interval;
    if let Some(hazard) =
        session
            .spawner
            .maybe_spawn(dt, interval, &session.tuning, &mut session.rng)
    {
        log::debug!(
            "Spawned hazard {} at x={:.0} size={:.0} vy={:.0}",
            hazard.id,
            hazard.rect.left(),
            hazard.rect.size.x,
            hazard.vy
        );
        events.push(GameEvent::HazardSpawned { id: hazard.id });
        session.hazards.push(hazard);
    }

    // Hazards vs player
    let outcome = advance_hazards(
        &mut session.hazards,
        &session.player.rect,
        dt,
        session.tuning.screen_height,
    );
    for id in &outcome.escaped {
        log::debug!("Hazard {} left the screen", id);
    }
    for id in outcome.hits {
        session.lives = session.lives.saturating_sub(1);
        log::debug!("Hit by hazard {}, {} lives left", id, session.lives);
        events.push(GameEvent::HazardHit {
            id,
            lives_left: session.lives,
        });
    }

    if session.lives == 0 {
        session.phase = GamePhase::GameOver;
        log::info!(
            "Game over: survived {:.1}s, reached level {}",
            session.score,
            session.difficulty.level
        );
        events.push(GameEvent::GameOver {
            score: session.score,
            level: session.difficulty.level,
        });
        return events;
    }

    // Player
    session.player.update(dt, intent, &session.tuning);

    events
}
