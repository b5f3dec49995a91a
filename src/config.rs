//! Tunable constants and the per-game difficulty record.
//!
//! `Config` is immutable for the life of the process and passed by
//! reference into every component that needs geometry or policy.  The
//! values that scale with difficulty live in the small `Difficulty`
//! record owned by the session, so nothing else can mutate them.

use std::time::Duration;

/// Immutable game configuration, sized from the play area in cells.
#[derive(Clone, Debug)]
pub struct Config {
    /// Play-area width in cells (terminal interior, not the full window).
    pub screen_width: i32,
    /// Play-area height in cells.
    pub screen_height: i32,

    pub ship_width: i32,
    pub ship_height: i32,
    /// Ships the player gets per game.
    pub ship_limit: u32,

    pub bullet_width: i32,
    pub bullet_height: i32,
    /// Max bullets concurrently in flight; firing past this is ignored.
    pub bullets_allowed: usize,

    pub alien_width: i32,
    pub alien_height: i32,
    /// Cells the whole fleet drops when it touches a side edge.
    pub fleet_drop: i32,

    pub base_ship_speed: f32,
    pub base_bullet_speed: f32,
    pub base_alien_speed: f32,
    /// Multiplier applied to all speeds on each level clear.
    pub speedup_scale: f32,
    /// Multiplier applied to the per-alien point value on each level clear.
    pub score_scale: f32,
    pub base_alien_points: u32,

    /// Blocking delay after a life is lost, before play resumes.
    pub respawn_pause: Duration,
}

impl Config {
    pub fn new(screen_width: i32, screen_height: i32) -> Self {
        Config {
            screen_width,
            screen_height,
            ship_width: 3,
            ship_height: 2,
            ship_limit: 3,
            bullet_width: 1,
            bullet_height: 1,
            bullets_allowed: 3,
            alien_width: 3,
            alien_height: 2,
            fleet_drop: 1,
            base_ship_speed: 1.0,
            base_bullet_speed: 1.0,
            base_alien_speed: 0.25,
            speedup_scale: 1.1,
            score_scale: 1.5,
            base_alien_points: 50,
            respawn_pause: Duration::from_millis(500),
        }
    }

    /// The play area as a rect with origin at the top-left cell.
    pub fn screen(&self) -> crate::entities::Rect {
        crate::entities::Rect::new(0, 0, self.screen_width, self.screen_height)
    }
}

// ── Difficulty scaling ────────────────────────────────────────────────────────

/// The values that change as the game speeds up.  Reset to base on every
/// new game; raised on every fleet clear, and the raise carries across
/// levels until the next full reset.
#[derive(Clone, Copy, Debug)]
pub struct Difficulty {
    pub ship_speed: f32,
    pub bullet_speed: f32,
    pub alien_speed: f32,
    /// Points per alien destroyed at the current level.
    pub alien_points: u32,
}

impl Difficulty {
    pub fn base(cfg: &Config) -> Self {
        Difficulty {
            ship_speed: cfg.base_ship_speed,
            bullet_speed: cfg.base_bullet_speed,
            alien_speed: cfg.base_alien_speed,
            alien_points: cfg.base_alien_points,
        }
    }

    /// Restore every dynamic value to its configured base.
    pub fn reset(&mut self, cfg: &Config) {
        *self = Difficulty::base(cfg);
    }

    /// Apply one level's worth of speed and score growth.
    pub fn raise(&mut self, cfg: &Config) {
        self.ship_speed *= cfg.speedup_scale;
        self.bullet_speed *= cfg.speedup_scale;
        self.alien_speed *= cfg.speedup_scale;
        self.alien_points = (self.alien_points as f32 * cfg.score_scale) as u32;
    }
}
