//! Pure overlap detection.
//!
//! Detection returns index pairs and never mutates anything; the session
//! applies the consequences afterwards.  That keeps these functions
//! testable without stats or render context.

use crate::entities::{Alien, Bullet, Sprite};

/// Bullet-alien hit pairs for one tick, as `(bullet index, alien index)`.
///
/// A bullet is consumed by its first hit, so it destroys at most one
/// alien per tick even when geometrically overlapping several; each
/// alien dies at most once.  Distinct bullets may still hit distinct
/// aliens in the same pass.
pub fn bullet_alien_hits(bullets: &[Bullet], aliens: &[Alien]) -> Vec<(usize, usize)> {
    let mut hits = Vec::new();
    let mut dead: Vec<usize> = Vec::new();

    for (bi, bullet) in bullets.iter().enumerate() {
        let shot = bullet.bounds();
        for (ai, alien) in aliens.iter().enumerate() {
            if dead.contains(&ai) {
                continue;
            }
            if shot.intersects(&alien.bounds()) {
                hits.push((bi, ai));
                dead.push(ai);
                break;
            }
        }
    }
    hits
}

/// Index of the first group member overlapping `target`, if any.
pub fn overlapping_any<S: Sprite, T: Sprite>(target: &S, group: &[T]) -> Option<usize> {
    let bounds = target.bounds();
    group.iter().position(|m| bounds.intersects(&m.bounds()))
}
