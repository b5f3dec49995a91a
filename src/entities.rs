//! Game entities and their constant-velocity kinematics.
//!
//! Positions are stored as floats and the integer cell box is recomputed
//! from the float every tick, so slow speeds accumulate instead of being
//! truncated away.  The `Sprite` trait is the physics-side capability the
//! collision engine consumes; drawing never enters this module.

use crate::config::{Config, Difficulty};

// ── Geometry ──────────────────────────────────────────────────────────────────

/// An axis-aligned box in play-area cells.  Extents are half-open
/// (`right = x + w`), so two rects merely touching do not intersect.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Rect { x, y, w, h }
    }

    pub const fn left(&self) -> i32 {
        self.x
    }

    pub const fn right(&self) -> i32 {
        self.x + self.w
    }

    pub const fn top(&self) -> i32 {
        self.y
    }

    pub const fn bottom(&self) -> i32 {
        self.y + self.h
    }

    pub const fn center_x(&self) -> i32 {
        self.x + self.w / 2
    }

    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// True if the cell at (`cx`, `cy`) lies inside the box.
    pub fn contains(&self, cx: i32, cy: i32) -> bool {
        cx >= self.x && cx < self.right() && cy >= self.y && cy < self.bottom()
    }
}

/// Anything with a bounding box the collision engine can test.
pub trait Sprite {
    fn bounds(&self) -> Rect;
}

// ── Ship ──────────────────────────────────────────────────────────────────────

/// The player's ship.  Created once per session and repositioned, never
/// recreated, on hit or respawn.
#[derive(Clone, Debug)]
pub struct Ship {
    /// Horizontal center as a float; the rect is derived from this.
    pub center: f32,
    pub rect: Rect,
    /// Play-area bounds captured at construction.
    pub screen: Rect,
    pub moving_left: bool,
    pub moving_right: bool,
}

impl Ship {
    /// A ship parked at the bottom center of the play area.
    pub fn new(cfg: &Config) -> Self {
        let rect = Rect::new(
            0,
            cfg.screen_height - cfg.ship_height,
            cfg.ship_width,
            cfg.ship_height,
        );
        let mut ship = Ship {
            center: 0.0,
            rect,
            screen: cfg.screen(),
            moving_left: false,
            moving_right: false,
        };
        ship.center_ship();
        ship
    }

    /// Apply the movement flags for one frame.  The edge checks are
    /// independent: with both flags set the two deltas cancel.
    pub fn update(&mut self, tuning: &Difficulty) {
        if self.moving_right && self.rect.right() < self.screen.right() {
            self.center += tuning.ship_speed;
        }
        if self.moving_left && self.rect.left() > 0 {
            self.center -= tuning.ship_speed;
        }
        self.sync_rect();
    }

    /// Snap back to the bottom center (new game, or respawn after a hit).
    pub fn center_ship(&mut self) {
        self.center = self.screen.center_x() as f32;
        self.sync_rect();
    }

    fn sync_rect(&mut self) {
        self.rect.x = self.center as i32 - self.rect.w / 2;
    }
}

impl Sprite for Ship {
    fn bounds(&self) -> Rect {
        self.rect
    }
}

// ── Bullet ────────────────────────────────────────────────────────────────────

/// A projectile climbing from the ship toward the top of the play area.
#[derive(Clone, Debug)]
pub struct Bullet {
    /// Vertical position as a float; decreases as the bullet rises.
    pub y: f32,
    pub rect: Rect,
}

impl Bullet {
    /// Spawn a bullet emerging from the top center of the ship.
    pub fn new(cfg: &Config, ship: &Ship) -> Self {
        let at = ship.bounds();
        let rect = Rect::new(
            at.center_x() - cfg.bullet_width / 2,
            at.top(),
            cfg.bullet_width,
            cfg.bullet_height,
        );
        Bullet {
            y: rect.y as f32,
            rect,
        }
    }

    pub fn update(&mut self, tuning: &Difficulty) {
        self.y -= tuning.bullet_speed;
        self.rect.y = self.y as i32;
    }
}

impl Sprite for Bullet {
    fn bounds(&self) -> Rect {
        self.rect
    }
}

// ── Alien ─────────────────────────────────────────────────────────────────────

/// One member of the fleet.  Horizontal motion is driven by the fleet so
/// every alien moves in lockstep; the alien only stores its own float x.
#[derive(Clone, Debug)]
pub struct Alien {
    pub x: f32,
    pub rect: Rect,
}

impl Alien {
    pub fn new(cfg: &Config, x: i32, y: i32) -> Self {
        Alien {
            x: x as f32,
            rect: Rect::new(x, y, cfg.alien_width, cfg.alien_height),
        }
    }

    /// Advance horizontally by the fleet-computed signed delta.
    pub fn shift(&mut self, dx: f32) {
        self.x += dx;
        self.rect.x = self.x as i32;
    }

    /// Drop toward the ship by `dy` cells (edge reversal).
    pub fn descend(&mut self, dy: i32) {
        self.rect.y += dy;
    }

    /// True once this alien's box touches a side of the play area.
    pub fn at_edge(&self, screen: &Rect) -> bool {
        self.rect.right() >= screen.right() || self.rect.left() <= 0
    }
}

impl Sprite for Alien {
    fn bounds(&self) -> Rect {
        self.rect
    }
}
