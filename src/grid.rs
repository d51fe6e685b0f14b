//! Map geometry and grid ↔ pixel conversion.
//!
//! The map is a fixed 5×6 grid of blocks. Row 0 is the river strip, rows
//! 1–3 are the stone lanes bugs run along, rows 4–5 are grass.

// ── Map constants ─────────────────────────────────────────────────────────────

pub const COLUMNS: i32 = 5;
pub const ROWS: i32 = 6;

/// Pixel width of one block.
pub const BLOCK_WIDTH: f64 = 100.0;
/// Pixel height of one block.
pub const BLOCK_HEIGHT: f64 = 83.0;
/// Sprite artwork carries transparent padding on top; shift everything up.
pub const RENDER_OFFSET: f64 = 20.0;

/// Width of the visible map in pixels.
pub const MAP_PIXEL_WIDTH: f64 = COLUMNS as f64 * BLOCK_WIDTH;

// ── Conversion ────────────────────────────────────────────────────────────────

/// Pixel offset of column `col`. Fractional columns are allowed.
pub fn pixel_x(col: f64) -> f64 {
    col * BLOCK_WIDTH
}

/// Pixel offset of row `row`, corrected for sprite padding.
pub fn pixel_y(row: f64) -> f64 {
    row * BLOCK_HEIGHT - RENDER_OFFSET
}

// ── Position ──────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    pub col: i32,
    pub row: i32,
}

impl Position {
    pub const fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    pub fn offset(self, d_col: i32, d_row: i32) -> Self {
        Self::new(self.col + d_col, self.row + d_row)
    }

    /// True iff the position lies on the map.
    pub fn in_bounds(self) -> bool {
        (0..COLUMNS).contains(&self.col) && (0..ROWS).contains(&self.row)
    }
}
