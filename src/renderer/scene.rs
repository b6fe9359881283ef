//! Render read model
//!
//! Pure snapshots of a session for drawing: colored rectangles for the GPU
//! and strings for the HUD. Building them never mutates the session.

use super::vertex::colors;
use crate::settings::Settings;
use crate::sim::{GameSession, RandomSource, Rect};

/// Everything the GPU pass draws for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    /// Clear color
    pub background: [f32; 4],
    /// Rectangles in draw order
    pub rects: Vec<(Rect, [f32; 4])>,
}

impl Scene {
    pub fn build<R: RandomSource>(session: &GameSession<R>, settings: &Settings) -> Self {
        let (base, flash, player_color, hazard_color) = if settings.high_contrast {
            (
                colors::HC_BACKGROUND,
                colors::HC_BACKGROUND_FLASH,
                colors::HC_PLAYER,
                colors::HC_HAZARD,
            )
        } else {
            (
                colors::BACKGROUND,
                colors::BACKGROUND_FLASH,
                colors::PLAYER,
                colors::HAZARD,
            )
        };

        let t = if settings.effective_flash() {
            session.flash_intensity()
        } else {
            0.0
        };
        let background = lerp_color(base, flash, t);

        let mut rects = Vec::with_capacity(session.hazards().len() + 2);
        rects.push((session.player_rect(), player_color));
        rects.extend(session.hazards().iter().map(|h| (h.rect, hazard_color)));

        if session.is_game_over() {
            let tuning = session.tuning();
            rects.push((
                Rect::new(0.0, 0.0, tuning.screen_width, tuning.screen_height),
                colors::GAME_OVER_DIM,
            ));
        }

        Self { background, rects }
    }
}

fn lerp_color(a: [f32; 4], b: [f32; 4], t: f32) -> [f32; 4] {
    let t = t.clamp(0.0, 1.0);
    std::array::from_fn(|i| a[i] * (1.0 - t) + b[i] * t)
}

/// HUD text for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct Hud {
    pub score: String,
    pub lives: String,
    /// 1-based for display
    pub level: String,
    /// Present only after game over
    pub game_over: Option<GameOverBanner>,
}

/// Text of the game-over overlay
#[derive(Debug, Clone, PartialEq)]
pub struct GameOverBanner {
    pub title: String,
    pub final_score: String,
    pub hint: String,
}

impl Hud {
    pub fn build<R: RandomSource>(session: &GameSession<R>) -> Self {
        let game_over = session.is_game_over().then(|| GameOverBanner {
            title: "GAME OVER".to_string(),
            final_score: format!("You survived {:.1} seconds", session.score()),
            hint: "Press R to restart".to_string(),
        });

        Self {
            score: format!("{:.1}", session.score()),
            lives: session.lives().to_string(),
            level: (session.difficulty_level() + 1).to_string(),
            game_over,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Hazard, ScriptedRandom};
    use crate::tuning::Tuning;

    fn session() -> GameSession<ScriptedRandom> {
        GameSession::with_rng(Tuning::default(), ScriptedRandom::new(vec![0.5]))
    }

    #[test]
    fn test_scene_player_and_hazards() {
        let mut session = session();
        session.hazards.push(Hazard {
            id: 1,
            rect: Rect::new(10.0, 10.0, 30.0, 30.0),
            vy: 100.0,
        });
        let scene = Scene::build(&session, &Settings::default());
        assert_eq!(scene.rects.len(), 2);
        assert_eq!(scene.rects[0], (session.player_rect(), colors::PLAYER));
        assert_eq!(scene.rects[1].1, colors::HAZARD);
        assert_eq!(scene.background, colors::BACKGROUND);
    }

    #[test]
    fn test_flash_brightens_background() {
        let mut session = session();
        session.on_frame(0.0);
        session.on_frame(10_000.0);
        assert!(session.flash_timer() > 0.0);

        let scene = Scene::build(&session, &Settings::default());
        assert_eq!(scene.background, colors::BACKGROUND_FLASH);

        let calm = Settings {
            reduced_motion: true,
            ..Default::default()
        };
        let scene = Scene::build(&session, &calm);
        assert_eq!(scene.background, colors::BACKGROUND);
    }

    #[test]
    fn test_game_over_overlay_and_banner() {
        let mut session = session();
        session.lives = 1;
        let player = session.player_rect();
        session.hazards.push(Hazard {
            id: 1,
            rect: Rect::new(player.left(), player.top(), 30.0, 30.0),
            vy: 0.0,
        });
        session.on_frame(0.0);
        assert!(session.is_game_over());

        let scene = Scene::build(&session, &Settings::default());
        assert_eq!(scene.rects.last().map(|r| r.1), Some(colors::GAME_OVER_DIM));

        let hud = Hud::build(&session);
        let banner = hud.game_over.expect("banner after game over");
        assert_eq!(banner.title, "GAME OVER");
        assert_eq!(banner.final_score, "You survived 0.0 seconds");
        assert_eq!(banner.hint, "Press R to restart");
        assert_eq!(hud.lives, "0");
    }

    #[test]
    fn test_hud_while_playing() {
        let mut session = session();
        session.on_frame(0.0);
        session.on_frame(1_300.0);
        let hud = Hud::build(&session);
        assert_eq!(hud.score, "1.3");
        assert_eq!(hud.lives, "3");
        assert_eq!(hud.level, "1");
        assert!(hud.game_over.is_none());
    }
}
