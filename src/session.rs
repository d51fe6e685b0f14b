//! One play session: the player, the gems, the bugs, and the RNG they share.
//!
//! The driver calls [`Session::update`] then [`Session::render`] once per
//! frame. Input arrives between frames through [`Session::queue_input`] and
//! is applied, in order, at the start of the next update.

use std::collections::VecDeque;
use std::io;

use log::debug;

use crate::config::SessionConfig;
use crate::entities::{Canvas, Direction, Renderable, Updatable};
use crate::error::ConfigError;
use crate::grid::{pixel_x, pixel_y, COLUMNS, ROWS};
use crate::hazard::Hazard;
use crate::pickups::PickupManager;
use crate::player::{MoveOutcome, Player};
use crate::rng::RandomSource;

/// What happened during one [`Session::update`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickReport {
    pub pickups_collected: u32,
    pub score_gained: u32,
    /// Resets from bug hits or river drops.
    pub player_resets: u32,
}

pub struct Session {
    pub player: Player,
    pub pickups: PickupManager,
    pub hazards: Vec<Hazard>,
    rng: Box<dyn RandomSource>,
    pending: VecDeque<Direction>,
}

impl Session {
    /// Build a session: gems first, then bugs, all drawn from `rng`.
    pub fn new(
        config: &SessionConfig,
        mut rng: Box<dyn RandomSource>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let pickups = PickupManager::new(config.pickup_count, &mut *rng);
        let hazards = (0..config.hazard_count)
            .map(|_| Hazard::spawn(&mut *rng, config.hazard_speeds()))
            .collect::<Vec<_>>();
        debug!("session started: {:?}", hazards);
        Ok(Self::from_parts(Player::new(), pickups, hazards, rng))
    }

    /// Assemble a session from prepared entities.
    pub fn from_parts(
        player: Player,
        pickups: PickupManager,
        hazards: Vec<Hazard>,
        rng: Box<dyn RandomSource>,
    ) -> Self {
        Self {
            player,
            pickups,
            hazards,
            rng,
            pending: VecDeque::new(),
        }
    }

    pub fn score(&self) -> u32 {
        self.player.score
    }

    /// Commands waiting for the next update.
    pub fn pending_inputs(&self) -> usize {
        self.pending.len()
    }

    pub fn queue_input(&mut self, direction: Direction) {
        self.pending.push_back(direction);
    }

    /// Queue a named direction. Unrecognised names are dropped.
    pub fn handle_input(&mut self, input: &str) {
        if let Ok(direction) = input.parse() {
            self.queue_input(direction);
        }
    }

    /// Advance the session by `dt` seconds.
    pub fn update(&mut self, dt: f64) -> TickReport {
        let mut report = TickReport::default();

        while let Some(direction) = self.pending.pop_front() {
            match self.player.step(direction, &mut self.pickups, &mut *self.rng) {
                MoveOutcome::Moved(Some(pickup)) => {
                    report.pickups_collected += 1;
                    report.score_gained += pickup.score();
                }
                MoveOutcome::DroppedInRiver => report.player_resets += 1,
                MoveOutcome::Moved(None) | MoveOutcome::Blocked => {}
            }
        }

        for hazard in &mut self.hazards {
            if hazard.update(dt, &mut self.player, &mut *self.rng) {
                report.player_resets += 1;
            }
        }

        report
    }

    /// Draw gems, bugs, the player, then the score line.
    pub fn render(&self, canvas: &mut dyn Canvas) -> io::Result<()> {
        for pickup in self.pickups.pickups() {
            pickup.render(canvas)?;
        }
        for hazard in &self.hazards {
            hazard.render(canvas)?;
        }
        self.player.render(canvas)?;
        canvas.draw_text(
            &format!("Score: {}", self.player.score),
            pixel_x((COLUMNS - 1) as f64),
            pixel_y(ROWS as f64 + 1.1),
        )
    }
}
