//! Grid-crossing arcade game: a player token crosses a 5×6 map, dodging
//! bugs that run along the stone rows and collecting gems for points.
//!
//! The library holds every piece of game logic. Rendering and keyboard
//! handling stay behind the [`entities::Canvas`] trait and the
//! [`input`] mapping so the binary can drive it from a terminal.

pub mod config;
pub mod entities;
pub mod error;
pub mod grid;
pub mod hazard;
pub mod input;
pub mod pickups;
pub mod player;
pub mod rng;
pub mod session;

pub use config::SessionConfig;
pub use entities::{Canvas, Direction, Renderable, Sprite, Updatable};
pub use error::ConfigError;
pub use grid::Position;
pub use hazard::Hazard;
pub use pickups::{Pickup, PickupKind, PickupManager};
pub use player::{MoveOutcome, Player};
pub use rng::{RandomSource, RngSource, ScriptedSource};
pub use session::{Session, TickReport};
