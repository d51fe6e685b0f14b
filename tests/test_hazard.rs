use crossing_game::entities::{Renderable, Sprite, Updatable};
use crossing_game::grid::{pixel_y, Position};
use crossing_game::hazard::{Hazard, PACE, WRAP_THRESHOLD};
use crossing_game::player::{Player, START};
use crossing_game::rng::{RngSource, ScriptedSource};

fn hazard(pixel_x: f64, row: i32, speed: u32) -> Hazard {
    Hazard {
        pixel_x,
        row,
        speed,
    }
}

fn player_at(col: i32, row: i32) -> Player {
    Player {
        position: Position::new(col, row),
        score: 500,
    }
}

// ── constants ─────────────────────────────────────────────────────────────────

#[test]
fn wrap_threshold_is_one_block_past_the_map() {
    assert_eq!(WRAP_THRESHOLD, 600.0);
    assert_eq!(PACE, 20.0);
}

// ── spawn ─────────────────────────────────────────────────────────────────────

#[test]
fn new_starts_at_left_edge() {
    let h = Hazard::new(2, 4);
    assert_eq!(h.pixel_x, 0.0);
    assert_eq!(h.row, 2);
    assert_eq!(h.speed, 4);
}

#[test]
fn spawn_draws_row_then_speed() {
    let mut rng = ScriptedSource::new(vec![2, 4]);
    let h = Hazard::spawn(&mut rng, 1..10);
    assert_eq!(h.row, 3); // 1 + 2 % 3
    assert_eq!(h.speed, 5); // 1 + 4 % 9
    assert_eq!(h.pixel_x, 0.0);
}

#[test]
fn spawn_stays_in_ranges() {
    let mut rng = RngSource::seeded(42);
    for _ in 0..500 {
        let h = Hazard::spawn(&mut rng, 1..10);
        assert!((1..=3).contains(&h.row));
        assert!((1..10).contains(&h.speed));
    }
}

// ── update ────────────────────────────────────────────────────────────────────

#[test]
fn update_advances_without_wrap() {
    let mut h = hazard(495.0, 2, 3);
    let mut p = player_at(2, 4);
    let mut rng = ScriptedSource::new(vec![0]);

    let hit = h.update(1.0, &mut p, &mut rng);

    assert!(!hit);
    assert_eq!(h.pixel_x, 555.0);
    assert_eq!(h.row, 2);
    assert_eq!(rng.draws(), 0);
}

#[test]
fn update_scales_with_dt() {
    let mut h = hazard(0.0, 1, 5);
    let mut p = player_at(2, 4);
    h.update(0.5, &mut p, &mut ScriptedSource::new(vec![0]));
    assert_eq!(h.pixel_x, 50.0);
}

#[test]
fn wrap_keeps_overshoot_and_rerolls_row() {
    let mut h = hazard(590.0, 3, 5);
    let mut p = player_at(2, 4);
    let mut rng = ScriptedSource::new(vec![1]);

    h.update(1.0, &mut p, &mut rng);

    assert_eq!(h.pixel_x, 90.0);
    assert_eq!(h.row, 2);
    assert_eq!(rng.draws(), 1);
}

#[test]
fn landing_exactly_on_threshold_wraps_to_zero() {
    let mut h = hazard(580.0, 1, 1);
    let mut p = player_at(2, 4);
    h.update(1.0, &mut p, &mut ScriptedSource::new(vec![2]));
    assert_eq!(h.pixel_x, 0.0);
    assert_eq!(h.row, 3);
}

#[test]
fn wrap_always_lands_in_a_lane_below_threshold() {
    let mut rng = RngSource::seeded(7);
    let mut p = player_at(2, 5);
    for speed in 1..10 {
        for dt in [0.1, 1.0, 3.7, 12.0, 100.0] {
            let mut h = hazard(WRAP_THRESHOLD - 1.0, 1, speed);
            h.update(dt, &mut p, &mut rng);
            assert!((1..=3).contains(&h.row));
            assert!(h.pixel_x >= 0.0 && h.pixel_x < WRAP_THRESHOLD);
        }
    }
}

// ── hit_test ──────────────────────────────────────────────────────────────────

#[test]
fn hit_when_boxes_overlap_in_same_row() {
    // Player (2,2): [210, 290]. Bug at 150: [150, 240].
    assert!(hazard(150.0, 2, 1).hit_test(&player_at(2, 2)));
    // Bug at 250: [250, 340].
    assert!(hazard(250.0, 2, 1).hit_test(&player_at(2, 2)));
}

#[test]
fn no_hit_in_other_row() {
    assert!(!hazard(200.0, 1, 1).hit_test(&player_at(2, 2)));
    assert!(!hazard(200.0, 3, 1).hit_test(&player_at(2, 2)));
}

#[test]
fn no_hit_when_bug_is_clear() {
    // Trailing edge at 190, short of the player's left at 210.
    assert!(!hazard(100.0, 2, 1).hit_test(&player_at(2, 2)));
    // Leading edge at 300, past the player's right at 290.
    assert!(!hazard(300.0, 2, 1).hit_test(&player_at(2, 2)));
}

#[test]
fn hit_box_trims_trailing_edge_only() {
    let (left, right) = hazard(120.0, 1, 1).hit_box();
    assert_eq!(left, 120.0);
    assert!((right - 210.0).abs() < 1e-9);
}

#[test]
fn collision_resets_player() {
    let mut h = hazard(140.0, 2, 1);
    let mut p = player_at(2, 2);
    let hit = h.update(0.5, &mut p, &mut ScriptedSource::new(vec![0]));
    assert!(hit);
    assert_eq!(p.position, START);
    assert_eq!(p.score, 0);
}

#[test]
fn collision_checked_after_wrap() {
    // Wraps into row 1 + 0 = 1 at x=40, right on top of a player at (0,1).
    let mut h = hazard(590.0, 3, 5);
    let mut p = player_at(0, 1);
    let hit = h.update(0.5, &mut p, &mut ScriptedSource::new(vec![0]));
    assert!(hit);
    assert_eq!(p, Player::new());
}

// ── render ────────────────────────────────────────────────────────────────────

#[test]
fn renders_at_pixel_offset_in_lane() {
    let h = hazard(123.5, 2, 1);
    assert_eq!(h.sprite(), Sprite::EnemyBug);
    assert_eq!(h.pixel_origin(), (123.5, pixel_y(2.0)));
}
