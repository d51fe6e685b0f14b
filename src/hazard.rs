//! Bugs running left to right along the stone lanes.

use std::ops::Range;

use log::{debug, trace};

use crate::entities::{Renderable, Sprite, Updatable};
use crate::grid::{pixel_x, pixel_y, BLOCK_WIDTH, COLUMNS};
use crate::player::{Player, HIT_BOX_INSET};
use crate::rng::RandomSource;

/// Pixels per second per unit of speed.
pub const PACE: f64 = 20.0;

/// One block past the right edge, so the sprite is fully off-map before it
/// reappears on the left.
pub const WRAP_THRESHOLD: f64 = (COLUMNS + 1) as f64 * BLOCK_WIDTH;

/// Lanes a bug may occupy, `[1, 4)`.
pub const LANES: Range<i32> = 1..4;

/// Pick a lane for a fresh or wrapped bug.
pub fn random_row(rng: &mut dyn RandomSource) -> i32 {
    rng.next_in(LANES.start, LANES.end)
}

#[derive(Clone, Debug, PartialEq)]
pub struct Hazard {
    /// Left edge in map pixels.
    pub pixel_x: f64,
    pub row: i32,
    /// Constant for the bug's lifetime; at least 1.
    pub speed: u32,
}

impl Hazard {
    pub fn new(row: i32, speed: u32) -> Self {
        Self {
            pixel_x: 0.0,
            row,
            speed,
        }
    }

    /// A bug at the left edge with random lane, then random speed from `speeds`.
    pub fn spawn(rng: &mut dyn RandomSource, speeds: Range<u32>) -> Self {
        let row = random_row(rng);
        let speed = rng.next_in(speeds.start as i32, speeds.end as i32) as u32;
        Self::new(row, speed)
    }

    /// Horizontal pixel extent used for collisions: `(left, right)`.
    /// Only the trailing edge is trimmed.
    pub fn hit_box(&self) -> (f64, f64) {
        (self.pixel_x, self.pixel_x + pixel_x(1.0 - HIT_BOX_INSET))
    }

    /// Same lane and overlapping hit boxes.
    pub fn hit_test(&self, player: &Player) -> bool {
        if player.position.row != self.row {
            return false;
        }
        let (player_left, player_right) = player.hit_box();
        let (left, right) = self.hit_box();
        let hit = player_left <= right && player_right >= left;
        if hit {
            trace!(
                "hit: player [{}, {}] bug [{}, {}] row {}",
                player_left,
                player_right,
                left,
                right,
                self.row
            );
        }
        hit
    }
}

impl Updatable for Hazard {
    fn update(&mut self, dt: f64, player: &mut Player, rng: &mut dyn RandomSource) -> bool {
        let mut next = self.pixel_x + dt * self.speed as f64 * PACE;
        if next >= WRAP_THRESHOLD {
            self.row = random_row(rng);
            // Keep the overshoot so motion stays continuous across the wrap.
            next %= WRAP_THRESHOLD;
            debug!("bug wrapped to row {} at x={:.1}", self.row, next);
        }
        self.pixel_x = next;

        if self.hit_test(player) {
            player.reset();
            return true;
        }
        false
    }
}

impl Renderable for Hazard {
    fn sprite(&self) -> Sprite {
        Sprite::EnemyBug
    }

    fn pixel_origin(&self) -> (f64, f64) {
        (self.pixel_x, pixel_y(self.row as f64))
    }
}
