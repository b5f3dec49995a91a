//! Score, level and life bookkeeping for one process lifetime.

use crate::config::Config;

/// Statistics for the running game.
///
/// `high_score` is deliberately exempt from `reset`: it survives every
/// restart within the process and only dies with it.
#[derive(Clone, Debug)]
pub struct GameStats {
    pub score: u32,
    pub high_score: u32,
    /// Current wave, starting at 1.
    pub level: u32,
    pub ships_left: u32,
    pub game_active: bool,
}

impl GameStats {
    pub fn new(cfg: &Config) -> Self {
        let mut stats = GameStats {
            score: 0,
            high_score: 0,
            level: 1,
            ships_left: 0,
            game_active: false,
        };
        stats.reset(cfg);
        stats
    }

    /// Restore the statistics that change during play.
    pub fn reset(&mut self, cfg: &Config) {
        self.score = 0;
        self.level = 1;
        self.ships_left = cfg.ship_limit;
    }
}
