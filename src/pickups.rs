//! Gems the player collects for points.
//!
//! [`PickupManager`] keeps a constant number of gems on the map. Collecting
//! one spawns its replacement *before* the collected gem is removed, so the
//! new gem can never appear on the cell the player is standing on.

use log::{debug, warn};

use crate::entities::{Renderable, Sprite};
use crate::grid::{pixel_x, pixel_y, Position, COLUMNS, ROWS};
use crate::rng::RandomSource;

/// First row a gem may spawn on; the river strip is excluded.
pub const SPAWN_MIN_ROW: i32 = 1;

/// Number of distinct cells a gem can occupy.
pub const SPAWN_CELLS: usize = (COLUMNS * (ROWS - SPAWN_MIN_ROW)) as usize;

// ── Gem kinds ─────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PickupKind {
    Blue,
    Green,
    Orange,
}

impl PickupKind {
    /// Spawn table, indexed by a uniform draw.
    pub const ALL: [PickupKind; 3] = [PickupKind::Blue, PickupKind::Green, PickupKind::Orange];

    pub fn score(self) -> u32 {
        match self {
            PickupKind::Blue => 300,
            PickupKind::Green => 200,
            PickupKind::Orange => 100,
        }
    }

    pub fn sprite(self) -> Sprite {
        match self {
            PickupKind::Blue => Sprite::GemBlue,
            PickupKind::Green => Sprite::GemGreen,
            PickupKind::Orange => Sprite::GemOrange,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pickup {
    pub position: Position,
    pub kind: PickupKind,
}

impl Pickup {
    pub fn new(position: Position, kind: PickupKind) -> Self {
        Self { position, kind }
    }

    pub fn score(&self) -> u32 {
        self.kind.score()
    }

    /// Random kind and cell. Draw order: kind, column, row.
    fn random(rng: &mut dyn RandomSource) -> Self {
        let kind = PickupKind::ALL[rng.next_in(0, PickupKind::ALL.len() as i32) as usize];
        let col = rng.next_in(0, COLUMNS);
        let row = rng.next_in(SPAWN_MIN_ROW, ROWS);
        Self::new(Position::new(col, row), kind)
    }
}

impl Renderable for Pickup {
    fn sprite(&self) -> Sprite {
        self.kind.sprite()
    }

    fn pixel_origin(&self) -> (f64, f64) {
        (
            pixel_x(self.position.col as f64),
            pixel_y(self.position.row as f64),
        )
    }
}

// ── Manager ───────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct PickupManager {
    target: usize,
    pickups: Vec<Pickup>,
}

impl PickupManager {
    /// A manager holding `target` randomly placed gems.
    pub fn new(target: usize, rng: &mut dyn RandomSource) -> Self {
        let mut manager = Self {
            target,
            pickups: Vec::with_capacity(target + 1),
        };
        manager.top_up(target, rng);
        manager
    }

    /// A manager over an explicit layout. Positions are taken as given.
    pub fn from_pickups(target: usize, pickups: Vec<Pickup>) -> Self {
        Self { target, pickups }
    }

    /// Number of gems kept at rest.
    pub fn target(&self) -> usize {
        self.target
    }

    pub fn pickups(&self) -> &[Pickup] {
        &self.pickups
    }

    pub fn len(&self) -> usize {
        self.pickups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pickups.is_empty()
    }

    pub fn pickup_at(&self, position: Position) -> Option<&Pickup> {
        self.pickups.iter().find(|p| p.position == position)
    }

    /// Remove and return the gem at `position`, if any.
    ///
    /// On a hit the collection is first grown to `target + 1`, so the
    /// replacement is placed away from every current gem, the collected one
    /// included. On a miss nothing changes.
    pub fn remove_if_at(
        &mut self,
        position: Position,
        rng: &mut dyn RandomSource,
    ) -> Option<Pickup> {
        let idx = self.pickups.iter().position(|p| p.position == position)?;
        self.top_up(self.target + 1, rng);
        let removed = self.pickups.remove(idx);
        debug!(
            "pickup collected at ({}, {}): {:?} +{}",
            position.col,
            position.row,
            removed.kind,
            removed.score()
        );
        Some(removed)
    }

    /// Spawn gems until the collection holds `target` of them.
    ///
    /// Candidates landing on an occupied cell are discarded and redrawn.
    /// Players and bugs are not considered. `target` is capped at the
    /// number of spawnable cells.
    pub fn top_up(&mut self, target: usize, rng: &mut dyn RandomSource) {
        let target = if target > SPAWN_CELLS {
            warn!(
                "pickup target {} exceeds {} spawnable cells, clamping",
                target, SPAWN_CELLS
            );
            SPAWN_CELLS
        } else {
            target
        };

        while self.pickups.len() < target {
            let candidate = Pickup::random(rng);
            if self.pickup_at(candidate.position).is_none() {
                self.pickups.push(candidate);
            }
        }
    }
}
