//! Brick grid storage and layout
//!
//! Brick positions are a pure function of (column, row) and the layout
//! constants, so collision detection and rendering can never disagree.
//! Cells store only their destruction status.

use crate::consts::*;

/// Destruction state of a single brick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BrickStatus {
    #[default]
    Active,
    Destroyed,
}

/// A single grid cell
#[derive(Debug, Clone, Copy, Default)]
pub struct Brick {
    pub status: BrickStatus,
}

impl Brick {
    #[inline]
    pub fn is_active(&self) -> bool {
        self.status == BrickStatus::Active
    }

    #[inline]
    pub fn destroy(&mut self) {
        self.status = BrickStatus::Destroyed;
    }
}

/// Axis-aligned brick bounds in surface pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrickRect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

/// Layout rect for the brick at (col, row)
#[inline]
pub fn brick_rect(col: usize, row: usize) -> BrickRect {
    BrickRect {
        x: col as f32 * (BRICK_WIDTH + BRICK_PADDING) + BRICK_OFFSET_LEFT,
        y: row as f32 * (BRICK_HEIGHT + BRICK_PADDING) + BRICK_OFFSET_TOP,
        w: BRICK_WIDTH,
        h: BRICK_HEIGHT,
    }
}

/// The 2D grid of destructible bricks, indexed by column then row
#[derive(Debug, Clone)]
pub struct BrickGrid {
    rows: usize,
    /// `BRICK_COLUMNS * rows` cells, column-major
    cells: Vec<Brick>,
}

impl BrickGrid {
    /// Fresh grid of all-active bricks
    pub fn new(rows: usize) -> Self {
        Self {
            rows,
            cells: vec![Brick::default(); BRICK_COLUMNS * rows],
        }
    }

    pub fn columns(&self) -> usize {
        BRICK_COLUMNS
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn get(&self, col: usize, row: usize) -> &Brick {
        &self.cells[col * self.rows + row]
    }

    #[inline]
    pub fn get_mut(&mut self, col: usize, row: usize) -> &mut Brick {
        &mut self.cells[col * self.rows + row]
    }

    /// Level-clear condition: no active bricks remain anywhere in the grid
    pub fn all_destroyed(&self) -> bool {
        self.cells.iter().all(|b| !b.is_active())
    }

    /// Number of bricks still standing
    pub fn active_count(&self) -> usize {
        self.cells.iter().filter(|b| b.is_active()).count()
    }
}
