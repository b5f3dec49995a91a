//! Fleet formation and lockstep movement.
//!
//! The fleet owns the one shared direction sign; aliens never decide
//! their own heading.  Edge contact reverses the whole formation and
//! drops it one step closer to the ship, at most once per tick.

use crate::config::{Config, Difficulty};
use crate::entities::{Alien, Sprite};

/// Aliens that fit in one row: the side margins eat two alien widths and
/// each alien claims twice its width, leaving a one-alien gap between
/// neighbours.
pub fn alien_columns(screen_width: i32, alien_width: i32) -> i32 {
    (screen_width - 2 * alien_width) / (2 * alien_width)
}

/// Rows that fit above the ship: one alien height of headroom at the
/// top, two above the ship, and each row claims twice the alien height.
pub fn alien_rows(screen_height: i32, ship_height: i32, alien_height: i32) -> i32 {
    (screen_height - 3 * alien_height - ship_height) / (2 * alien_height)
}

/// The full grid of aliens sharing one direction and drop behaviour.
#[derive(Clone, Debug)]
pub struct Fleet {
    pub aliens: Vec<Alien>,
    /// +1.0 marching right, -1.0 marching left.
    pub direction: f32,
}

impl Fleet {
    /// Lay out a full-size grid for the configured play area.
    pub fn spawn(cfg: &Config) -> Self {
        let columns = alien_columns(cfg.screen_width, cfg.alien_width);
        let rows = alien_rows(cfg.screen_height, cfg.ship_height, cfg.alien_height);

        let mut aliens = Vec::with_capacity((columns * rows).max(0) as usize);
        for row in 0..rows {
            for column in 0..columns {
                let x = cfg.alien_width + 2 * cfg.alien_width * column;
                let y = cfg.alien_height + 2 * cfg.alien_height * row;
                aliens.push(Alien::new(cfg, x, y));
            }
        }
        Fleet {
            aliens,
            direction: 1.0,
        }
    }

    /// One frame of fleet motion: respond to edge contact, then march
    /// every alien by the same delta.
    pub fn update(&mut self, cfg: &Config, tuning: &Difficulty) {
        self.check_edges(cfg);
        let dx = tuning.alien_speed * self.direction;
        for alien in &mut self.aliens {
            alien.shift(dx);
        }
    }

    /// If any alien reached a side edge, drop the whole fleet and flip
    /// the shared direction.  One flip per tick, no matter how many
    /// aliens are touching an edge at once.
    pub fn check_edges(&mut self, cfg: &Config) {
        let screen = cfg.screen();
        if self.aliens.iter().any(|a| a.at_edge(&screen)) {
            for alien in &mut self.aliens {
                alien.descend(cfg.fleet_drop);
            }
            self.direction = -self.direction;
        }
    }

    /// True once any alien's box touches the bottom of the play area,
    /// which costs the player a ship just like a direct collision.
    pub fn reached_bottom(&self, cfg: &Config) -> bool {
        self.aliens
            .iter()
            .any(|a| a.bounds().bottom() >= cfg.screen_height)
    }

    pub fn is_empty(&self) -> bool {
        self.aliens.is_empty()
    }

    pub fn len(&self) -> usize {
        self.aliens.len()
    }
}
