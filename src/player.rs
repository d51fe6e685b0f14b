//! The player token.

use log::info;

use crate::entities::{Direction, Renderable, Sprite};
use crate::grid::{pixel_x, pixel_y, Position};
use crate::pickups::{Pickup, PickupManager};
use crate::rng::RandomSource;

/// Where the player starts and respawns.
pub const START: Position = Position::new(2, 4);

/// The river strip.
pub const RIVER_ROW: i32 = 0;

/// Fraction of a block trimmed off each side of the player's hit box.
pub const HIT_BOX_INSET: f64 = 0.1;

/// Result of a single move request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Target off the map; nothing changed.
    Blocked,
    /// Player was in the river and got reset.
    DroppedInRiver,
    /// Moved, collecting the gem on the new cell if there was one.
    Moved(Option<Pickup>),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub position: Position,
    pub score: u32,
}

impl Player {
    pub fn new() -> Self {
        Self {
            position: START,
            score: 0,
        }
    }

    /// Back to the start cell with no score.
    pub fn reset(&mut self) {
        info!(
            "player reset from ({}, {}) with score {}",
            self.position.col, self.position.row, self.score
        );
        self.position = START;
        self.score = 0;
    }

    /// Move by `(d_col, d_row)`.
    ///
    /// Off-map targets are ignored. A player already standing in the river
    /// is reset whatever the delta. Otherwise the move is applied and any
    /// gem on the new cell collected.
    pub fn move_by(
        &mut self,
        d_col: i32,
        d_row: i32,
        pickups: &mut PickupManager,
        rng: &mut dyn RandomSource,
    ) -> MoveOutcome {
        let next = self.position.offset(d_col, d_row);
        if !next.in_bounds() {
            return MoveOutcome::Blocked;
        }
        // Checked against the row we're leaving, not the one we'd land on.
        if self.position.row <= RIVER_ROW {
            self.reset();
            return MoveOutcome::DroppedInRiver;
        }
        self.position = next;
        MoveOutcome::Moved(self.try_consume_pickup(pickups, rng))
    }

    /// Collect the gem under the player, if any, and add its score.
    pub fn try_consume_pickup(
        &mut self,
        pickups: &mut PickupManager,
        rng: &mut dyn RandomSource,
    ) -> Option<Pickup> {
        let pickup = pickups.remove_if_at(self.position, rng)?;
        self.score += pickup.score();
        Some(pickup)
    }

    pub fn step(
        &mut self,
        direction: Direction,
        pickups: &mut PickupManager,
        rng: &mut dyn RandomSource,
    ) -> MoveOutcome {
        let (d_col, d_row) = direction.delta();
        self.move_by(d_col, d_row, pickups, rng)
    }

    /// Apply a named direction. Unrecognised names do nothing and yield `None`.
    pub fn handle_input(
        &mut self,
        input: &str,
        pickups: &mut PickupManager,
        rng: &mut dyn RandomSource,
    ) -> Option<MoveOutcome> {
        let direction = input.parse::<Direction>().ok()?;
        Some(self.step(direction, pickups, rng))
    }

    /// Horizontal pixel extent used for collisions: `(left, right)`.
    pub fn hit_box(&self) -> (f64, f64) {
        let col = self.position.col as f64;
        (
            pixel_x(col + HIT_BOX_INSET),
            pixel_x(col + 1.0 - HIT_BOX_INSET),
        )
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderable for Player {
    fn sprite(&self) -> Sprite {
        Sprite::CharBoy
    }

    fn pixel_origin(&self) -> (f64, f64) {
        (
            pixel_x(self.position.col as f64),
            pixel_y(self.position.row as f64),
        )
    }
}
