//! Rendering layer — all terminal I/O lives here.
//!
//! The game draws in map pixels through the `Canvas` trait; this module
//! scales those pixels onto a fixed character grid and paints sprites as
//! short coloured glyphs. No game logic is performed here.

use std::io::{self, Write};

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal, QueueableCommand,
};
use crossing_game::entities::{Canvas, Sprite};
use crossing_game::grid::{BLOCK_HEIGHT, BLOCK_WIDTH, COLUMNS, RENDER_OFFSET, ROWS};

// ── Geometry ──────────────────────────────────────────────────────────────────

/// Terminal columns per map block.
const CELL_W: u16 = 8;
/// Terminal rows per map block.
const CELL_H: u16 = 3;

/// Top-left terminal cell of the map, inside the border.
const MAP_LEFT: u16 = 1;
const MAP_TOP: u16 = 1;

const MAP_COLS: u16 = COLUMNS as u16 * CELL_W;
const MAP_ROWS: u16 = ROWS as u16 * CELL_H;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkBlue;
const C_WATER: Color = Color::Blue;
const C_STONE: Color = Color::DarkGrey;
const C_GRASS: Color = Color::DarkGreen;
const C_PLAYER: Color = Color::White;
const C_BUG: Color = Color::Red;
const C_GEM_BLUE: Color = Color::Cyan;
const C_GEM_GREEN: Color = Color::Green;
const C_GEM_ORANGE: Color = Color::Yellow;
const C_HUD: Color = Color::Yellow;
const C_HINT: Color = Color::DarkGrey;

fn glyph(sprite: Sprite) -> (&'static str, Color) {
    match sprite {
        Sprite::GemBlue => ("<◆>", C_GEM_BLUE),
        Sprite::GemGreen => ("<◆>", C_GEM_GREEN),
        Sprite::GemOrange => ("<◆>", C_GEM_ORANGE),
        Sprite::CharBoy => ("☺", C_PLAYER),
        Sprite::EnemyBug => ("=[ö]>", C_BUG),
    }
}

// ── Pixel → cell ──────────────────────────────────────────────────────────────

/// Terminal column of map pixel `x`, relative to the map's left edge.
/// May be negative or past the right edge.
fn cell_col(x: f64) -> i32 {
    (x / BLOCK_WIDTH * CELL_W as f64).round() as i32
}

/// Terminal row of map pixel `y`, relative to the map's top edge.
fn cell_row(y: f64) -> i32 {
    ((y + RENDER_OFFSET) / BLOCK_HEIGHT * CELL_H as f64).round() as i32
}

// ── Canvas ────────────────────────────────────────────────────────────────────

pub struct TerminalCanvas<W: Write> {
    out: W,
}

impl<W: Write> TerminalCanvas<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn writer(&mut self) -> &mut W {
        &mut self.out
    }

    /// Clear the screen and paint the border and map background.
    pub fn begin_frame(&mut self) -> io::Result<()> {
        self.out.queue(terminal::Clear(terminal::ClearType::All))?;
        self.draw_border()?;
        self.draw_background()
    }

    /// Controls hint, then flush everything queued this frame.
    pub fn finish_frame(&mut self) -> io::Result<()> {
        self.out.queue(cursor::MoveTo(MAP_LEFT, MAP_TOP + MAP_ROWS + 1))?;
        self.out.queue(style::SetForegroundColor(C_HINT))?;
        self.out.queue(Print("← ↑ → ↓ : Move   Q : Quit"))?;
        self.out.queue(style::ResetColor)?;
        self.out.flush()
    }

    fn draw_border(&mut self) -> io::Result<()> {
        let w = MAP_COLS as usize;
        self.out.queue(style::SetForegroundColor(C_BORDER))?;
        self.out.queue(cursor::MoveTo(MAP_LEFT - 1, MAP_TOP - 1))?;
        self.out.queue(Print(format!("┌{}┐", "─".repeat(w))))?;
        self.out.queue(cursor::MoveTo(MAP_LEFT - 1, MAP_TOP + MAP_ROWS))?;
        self.out.queue(Print(format!("└{}┘", "─".repeat(w))))?;
        for row in MAP_TOP..MAP_TOP + MAP_ROWS {
            self.out.queue(cursor::MoveTo(MAP_LEFT - 1, row))?;
            self.out.queue(Print("│"))?;
            self.out.queue(cursor::MoveTo(MAP_LEFT + MAP_COLS, row))?;
            self.out.queue(Print("│"))?;
        }
        Ok(())
    }

    fn draw_background(&mut self) -> io::Result<()> {
        for map_row in 0..ROWS as u16 {
            let (fill, color) = match map_row {
                0 => ("≈", C_WATER),
                1..=3 => ("·", C_STONE),
                _ => ("\"", C_GRASS),
            };
            let line = fill.repeat(MAP_COLS as usize);
            self.out.queue(style::SetForegroundColor(color))?;
            for dy in 0..CELL_H {
                self.out
                    .queue(cursor::MoveTo(MAP_LEFT, MAP_TOP + map_row * CELL_H + dy))?;
                self.out.queue(Print(&line))?;
            }
        }
        Ok(())
    }
}

impl<W: Write> Canvas for TerminalCanvas<W> {
    fn draw_sprite(&mut self, sprite: Sprite, x: f64, y: f64) -> io::Result<()> {
        let (text, color) = glyph(sprite);
        let width = text.chars().count() as i32;
        // Centre the glyph in its block, one line below the block top.
        let left = cell_col(x) + (CELL_W as i32 - width) / 2;
        let row = cell_row(y) + (CELL_H as i32) / 2;
        let visible = (0..MAP_ROWS as i32).contains(&row)
            && left < MAP_COLS as i32
            && left + width > 0;
        if !visible {
            return Ok(());
        }

        self.out.queue(style::SetForegroundColor(color))?;
        // Clip character by character so bugs slide in and out of view.
        for (i, ch) in text.chars().enumerate() {
            let col = left + i as i32;
            if (0..MAP_COLS as i32).contains(&col) {
                self.out.queue(cursor::MoveTo(
                    MAP_LEFT + col as u16,
                    MAP_TOP + row as u16,
                ))?;
                self.out.queue(Print(ch))?;
            }
        }
        Ok(())
    }

    fn draw_text(&mut self, text: &str, x: f64, y: f64) -> io::Result<()> {
        let col = cell_col(x).clamp(0, MAP_COLS as i32) as u16;
        let row = cell_row(y).max(0) as u16;
        self.out.queue(cursor::MoveTo(MAP_LEFT + col, MAP_TOP + row))?;
        self.out.queue(style::SetForegroundColor(C_HUD))?;
        self.out.queue(Print(text))?;
        Ok(())
    }
}
