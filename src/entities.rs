//! Shared entity vocabulary: sprites, directions, and the capability traits
//! every game object implements independently.

use std::fmt;
use std::io;
use std::str::FromStr;

use crate::player::Player;
use crate::rng::RandomSource;

// ── Sprites ───────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Sprite {
    GemBlue,
    GemGreen,
    GemOrange,
    CharBoy,
    EnemyBug,
}

impl Sprite {
    /// Asset id the rendering collaborator resolves to an image.
    pub fn asset(self) -> &'static str {
        match self {
            Sprite::GemBlue => "images/gem-blue.png",
            Sprite::GemGreen => "images/gem-green.png",
            Sprite::GemOrange => "images/gem-orange.png",
            Sprite::CharBoy => "images/char-boy.png",
            Sprite::EnemyBug => "images/enemy-bug.png",
        }
    }
}

// ── Directions ────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Up,
    Right,
    Down,
}

impl Direction {
    /// Unit grid delta `(d_col, d_row)`. Up decreases the row.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Left => (-1, 0),
            Direction::Up => (0, -1),
            Direction::Right => (1, 0),
            Direction::Down => (0, 1),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Up => "up",
            Direction::Right => "right",
            Direction::Down => "down",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Input name that is not one of the four directions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownDirection;

impl FromStr for Direction {
    type Err = UnknownDirection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(Direction::Left),
            "up" => Ok(Direction::Up),
            "right" => Ok(Direction::Right),
            "down" => Ok(Direction::Down),
            _ => Err(UnknownDirection),
        }
    }
}

// ── Capabilities ──────────────────────────────────────────────────────────────

/// Rendering collaborator. Coordinates are map pixels.
pub trait Canvas {
    fn draw_sprite(&mut self, sprite: Sprite, x: f64, y: f64) -> io::Result<()>;
    fn draw_text(&mut self, text: &str, x: f64, y: f64) -> io::Result<()>;
}

/// Anything drawn as a single sprite.
pub trait Renderable {
    fn sprite(&self) -> Sprite;

    /// Top-left pixel at which the sprite is drawn.
    fn pixel_origin(&self) -> (f64, f64);

    fn render(&self, canvas: &mut dyn Canvas) -> io::Result<()> {
        let (x, y) = self.pixel_origin();
        canvas.draw_sprite(self.sprite(), x, y)
    }
}

/// Anything that advances on its own each frame.
pub trait Updatable {
    /// Advance by `dt` seconds. Returns `true` if the tick reset the player.
    fn update(&mut self, dt: f64, player: &mut Player, rng: &mut dyn RandomSource) -> bool;
}
