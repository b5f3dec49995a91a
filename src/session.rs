//! The game state machine and the per-frame update pipeline.
//!
//! A `Session` exclusively owns the mutable game state (ship, bullets,
//! fleet, stats, difficulty) and is driven by the frame loop.  `advance`
//! runs one Active frame in fixed order: ship kinematics, bullet
//! kinematics and cleanup, bullet-alien collisions with scoring and
//! level advance, then fleet movement with the ship-hit checks.

use crate::collision;
use crate::config::{Config, Difficulty};
use crate::entities::{Bullet, Ship};
use crate::fleet::Fleet;
use crate::stats::GameStats;

/// What the frame loop needs to know about the frame it just ran.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickEvent {
    /// Nothing the driver has to act on.
    None,
    /// A ship was lost and play continues; the driver owes the player
    /// the respawn pause.
    ShipHit,
    /// The last ship was lost; the session went inactive.
    GameOver,
}

/// One process-lifetime game: owns all mutable state and every
/// transition between the Inactive and Active phases.
pub struct Session {
    pub cfg: Config,
    pub tuning: Difficulty,
    pub stats: GameStats,
    pub ship: Ship,
    pub bullets: Vec<Bullet>,
    pub fleet: Fleet,
}

impl Session {
    /// A fresh, inactive session with a formed fleet behind the menu.
    pub fn new(cfg: Config) -> Self {
        let tuning = Difficulty::base(&cfg);
        let stats = GameStats::new(&cfg);
        let ship = Ship::new(&cfg);
        let fleet = Fleet::spawn(&cfg);
        Session {
            cfg,
            tuning,
            stats,
            ship,
            bullets: Vec::new(),
            fleet,
        }
    }

    /// The explicit start action.  Only fires while Inactive: resets the
    /// dynamic difficulty and the per-game stats (high score excepted),
    /// rebuilds the fleet and recenters the ship.
    pub fn start(&mut self) {
        if self.stats.game_active {
            return;
        }
        self.tuning.reset(&self.cfg);
        self.stats.reset(&self.cfg);
        self.stats.game_active = true;

        self.bullets.clear();
        self.fleet = Fleet::spawn(&self.cfg);
        self.ship.center_ship();
    }

    /// Fire a bullet from the ship.  Silently ignored at the concurrency
    /// cap or while Inactive; running out of bullet slots is not an error.
    pub fn fire(&mut self) {
        if !self.stats.game_active {
            return;
        }
        if self.bullets.len() < self.cfg.bullets_allowed {
            self.bullets.push(Bullet::new(&self.cfg, &self.ship));
        }
    }

    /// Advance one frame of active play.  A no-op while Inactive, so the
    /// menu and game-over screens stay frozen.
    pub fn advance(&mut self) -> TickEvent {
        if !self.stats.game_active {
            return TickEvent::None;
        }
        self.ship.update(&self.tuning);
        self.update_bullets();
        self.update_fleet()
    }

    // ── Bullet pipeline ───────────────────────────────────────────────────────

    fn update_bullets(&mut self) {
        for bullet in &mut self.bullets {
            bullet.update(&self.tuning);
        }
        // Lifecycle cleanup before collisions: bullets past the top are
        // gone regardless of what they might overlap.
        self.bullets.retain(|b| b.rect.bottom() > 0);
        self.resolve_bullet_hits();
    }

    fn resolve_bullet_hits(&mut self) {
        let hits = collision::bullet_alien_hits(&self.bullets, &self.fleet.aliens);
        if !hits.is_empty() {
            self.stats.score += self.tuning.alien_points * hits.len() as u32;

            // Snapshot-then-filter: indices were collected against the
            // unmodified collections, so removal happens afterwards.
            let (used, dead): (Vec<usize>, Vec<usize>) = hits.into_iter().unzip();
            let mut bi = 0;
            self.bullets.retain(|_| {
                let keep = !used.contains(&bi);
                bi += 1;
                keep
            });
            let mut ai = 0;
            self.fleet.aliens.retain(|_| {
                let keep = !dead.contains(&ai);
                ai += 1;
                keep
            });

            // One check after all hits are applied; must see the final score.
            self.check_high_score();
        }

        if self.fleet.is_empty() {
            self.level_up();
        }
    }

    /// Fleet cleared: next wave at higher speed.  The speed growth
    /// persists across levels and only resets on a full game start.
    fn level_up(&mut self) {
        self.bullets.clear();
        self.tuning.raise(&self.cfg);
        self.stats.level += 1;
        self.fleet = Fleet::spawn(&self.cfg);
    }

    // ── Fleet pipeline ────────────────────────────────────────────────────────

    fn update_fleet(&mut self) -> TickEvent {
        self.fleet.update(&self.cfg, &self.tuning);

        // An alien on the ship and an alien past the bottom boundary are
        // the same event: the ship is lost.
        if collision::overlapping_any(&self.ship, &self.fleet.aliens).is_some()
            || self.fleet.reached_bottom(&self.cfg)
        {
            return self.ship_hit();
        }
        TickEvent::None
    }

    fn ship_hit(&mut self) -> TickEvent {
        self.stats.ships_left = self.stats.ships_left.saturating_sub(1);

        if self.stats.ships_left > 0 {
            self.bullets.clear();
            self.fleet = Fleet::spawn(&self.cfg);
            self.ship.center_ship();
            TickEvent::ShipHit
        } else {
            // Terminal branch: no re-formation, the field freezes as-is.
            self.stats.game_active = false;
            TickEvent::GameOver
        }
    }

    fn check_high_score(&mut self) {
        if self.stats.score > self.stats.high_score {
            self.stats.high_score = self.stats.score;
        }
    }
}
