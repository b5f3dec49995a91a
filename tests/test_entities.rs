use alien_invasion::config::{Config, Difficulty};
use alien_invasion::entities::*;

fn cfg() -> Config {
    Config::new(60, 20)
}

fn tuning() -> Difficulty {
    Difficulty::base(&cfg())
}

// ── Rect ──────────────────────────────────────────────────────────────────────

#[test]
fn rect_accessors() {
    let r = Rect::new(2, 3, 4, 5);
    assert_eq!(r.left(), 2);
    assert_eq!(r.right(), 6);
    assert_eq!(r.top(), 3);
    assert_eq!(r.bottom(), 8);
    assert_eq!(r.center_x(), 4);
}

#[test]
fn rects_touching_do_not_intersect() {
    // Half-open extents: a box ending where another begins is not a hit
    let a = Rect::new(0, 0, 3, 2);
    let b = Rect::new(3, 0, 3, 2);
    assert!(!a.intersects(&b));
    assert!(!b.intersects(&a));
}

#[test]
fn rects_overlapping_intersect() {
    let a = Rect::new(0, 0, 3, 2);
    let b = Rect::new(2, 1, 3, 2);
    assert!(a.intersects(&b));
    assert!(b.intersects(&a));
}

#[test]
fn rect_contains_cells() {
    let r = Rect::new(5, 5, 3, 3);
    assert!(r.contains(5, 5));
    assert!(r.contains(7, 7));
    assert!(!r.contains(8, 5)); // right edge is exclusive
    assert!(!r.contains(5, 8));
    assert!(!r.contains(4, 6));
}

// ── Ship ──────────────────────────────────────────────────────────────────────

#[test]
fn ship_starts_bottom_center() {
    let ship = Ship::new(&cfg());
    assert_eq!(ship.center, 30.0); // width / 2
    assert_eq!(ship.rect.x, 29);
    assert_eq!(ship.rect.bottom(), 20); // parked on the bottom boundary
}

#[test]
fn ship_moves_right_one_step() {
    let mut ship = Ship::new(&cfg());
    ship.moving_right = true;
    ship.update(&tuning());
    assert_eq!(ship.center, 31.0);
    assert_eq!(ship.rect.x, 30);
}

#[test]
fn ship_clamps_at_right_edge() {
    let mut ship = Ship::new(&cfg());
    ship.moving_right = true;
    for _ in 0..100 {
        ship.update(&tuning());
        assert!(ship.rect.right() <= 60);
    }
    assert_eq!(ship.rect.right(), 60);
}

#[test]
fn ship_clamps_at_left_edge() {
    let mut ship = Ship::new(&cfg());
    ship.moving_left = true;
    for _ in 0..100 {
        ship.update(&tuning());
        assert!(ship.rect.left() >= 0);
    }
    assert_eq!(ship.rect.left(), 0);
}

#[test]
fn conflicting_flags_cancel_out() {
    // Both edge checks are independent, so the deltas are additive
    let mut ship = Ship::new(&cfg());
    ship.moving_left = true;
    ship.moving_right = true;
    ship.update(&tuning());
    assert_eq!(ship.center, 30.0);
    assert_eq!(ship.rect.x, 29);
}

#[test]
fn float_center_accumulates_without_truncation() {
    // Five slow steps must add up to exactly two cells; an integer
    // position would have truncated every one of them to zero.
    let config = cfg();
    let mut slow = Difficulty::base(&config);
    slow.ship_speed = 0.4;

    let mut ship = Ship::new(&config);
    ship.moving_right = true;
    for _ in 0..5 {
        ship.update(&slow);
    }
    assert_eq!(ship.center, 32.0);
    assert_eq!(ship.rect.x, 31);
}

#[test]
fn center_ship_snaps_back() {
    let mut ship = Ship::new(&cfg());
    ship.moving_left = true;
    for _ in 0..10 {
        ship.update(&tuning());
    }
    ship.center_ship();
    assert_eq!(ship.center, 30.0);
    assert_eq!(ship.rect.x, 29);
}

// ── Bullet ────────────────────────────────────────────────────────────────────

#[test]
fn bullet_spawns_at_ship_top_center() {
    let config = cfg();
    let ship = Ship::new(&config);
    let bullet = Bullet::new(&config, &ship);
    assert_eq!(bullet.rect.x, ship.rect.center_x());
    assert_eq!(bullet.rect.y, ship.rect.top());
    assert_eq!(bullet.y, ship.rect.top() as f32);
}

#[test]
fn bullet_moves_toward_top() {
    let config = cfg();
    let ship = Ship::new(&config);
    let mut bullet = Bullet::new(&config, &ship);
    bullet.update(&tuning());
    assert_eq!(bullet.rect.y, 17); // spawned at 18, speed 1.0
    bullet.update(&tuning());
    assert_eq!(bullet.rect.y, 16);
}

// ── Alien ─────────────────────────────────────────────────────────────────────

#[test]
fn alien_shift_syncs_rect_from_float() {
    let mut alien = Alien::new(&cfg(), 3, 2);
    alien.shift(0.5);
    assert_eq!(alien.x, 3.5);
    assert_eq!(alien.rect.x, 3); // box only moves once the float crosses a cell
    alien.shift(0.5);
    assert_eq!(alien.rect.x, 4);
}

#[test]
fn alien_descend_drops_box() {
    let mut alien = Alien::new(&cfg(), 3, 2);
    alien.descend(1);
    assert_eq!(alien.rect.y, 3);
    assert_eq!(alien.rect.x, 3);
}

#[test]
fn alien_edge_detection() {
    let config = cfg();
    let screen = config.screen();
    assert!(Alien::new(&config, 57, 2).at_edge(&screen)); // right edge: 57 + 3 = 60
    assert!(Alien::new(&config, 0, 2).at_edge(&screen));
    assert!(!Alien::new(&config, 30, 2).at_edge(&screen));
}

// ── Clone independence ────────────────────────────────────────────────────────

#[test]
fn ship_clone_is_independent() {
    let original = Ship::new(&cfg());
    let mut cloned = original.clone();
    cloned.center = 5.0;
    cloned.moving_left = true;
    assert_eq!(original.center, 30.0);
    assert!(!original.moving_left);
}
