//! Field module - manages the playing grid
//!
//! The field is a 20x10 grid of settled cells, each either filled or empty.
//! Uses a flat array for better cache locality and zero-allocation.
//! Coordinates: (row, col) where row ranges 0..19 (**bottom to top**) and
//! col ranges 0..9 (left to right). Rendering flips rows; nothing here does.

use arrayvec::ArrayVec;

use crate::piece::Piece;
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};

/// Number of rows, as a `usize`
pub const FIELD_ROWS: usize = BOARD_HEIGHT as usize;

/// Number of columns, as a `usize`
pub const FIELD_COLS: usize = BOARD_WIDTH as usize;

/// Total number of cells on the field
const FIELD_SIZE: usize = FIELD_ROWS * FIELD_COLS;

/// The playing field - 20 rows x 10 columns using flat array storage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Field {
    /// Flat array of cells, row-major order (row * COLS + col), row 0 at the bottom
    cells: [bool; FIELD_SIZE],
}

impl Field {
    /// Create a new empty field
    pub fn new() -> Self {
        Self {
            cells: [false; FIELD_SIZE],
        }
    }

    /// Calculate flat index from (row, col) coordinates
    #[inline(always)]
    fn index(row: i8, col: i8) -> Option<usize> {
        if row < 0 || row >= BOARD_HEIGHT as i8 || col < 0 || col >= BOARD_WIDTH as i8 {
            return None;
        }
        Some((row as usize) * FIELD_COLS + (col as usize))
    }

    /// Get width of the field
    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    /// Get height of the field
    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at (row, col). Returns None if out of bounds.
    pub fn get(&self, row: i8, col: i8) -> Option<bool> {
        Self::index(row, col).map(|idx| self.cells[idx])
    }

    /// Set cell at (row, col). Returns false if out of bounds.
    pub fn set(&mut self, row: i8, col: i8, filled: bool) -> bool {
        match Self::index(row, col) {
            Some(idx) => {
                self.cells[idx] = filled;
                true
            }
            None => false,
        }
    }

    /// Whether the cell at (row, col) is filled.
    ///
    /// Callers only ask about validated coordinates; anything outside the grid
    /// trips a debug assertion and reads as empty.
    pub fn is_occupied(&self, row: i8, col: i8) -> bool {
        debug_assert!(
            Self::index(row, col).is_some(),
            "field read out of bounds: ({}, {})",
            row,
            col
        );
        self.get(row, col).unwrap_or(false)
    }

    /// Slice of one row, left to right. Returns None if out of bounds.
    pub fn row(&self, row: usize) -> Option<&[bool]> {
        if row >= FIELD_ROWS {
            return None;
        }
        let start = row * FIELD_COLS;
        Some(&self.cells[start..start + FIELD_COLS])
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, row: usize) -> bool {
        self.row(row)
            .map(|cells| cells.iter().all(|&filled| filled))
            .unwrap_or(false)
    }

    /// Clear all full rows and return the original indices of the cleared rows
    /// (ascending, i.e. bottom to top).
    ///
    /// Remaining rows keep their order and fall to fill the gaps; the same
    /// number of empty rows appears at the top. Two-pointer pass, no allocation.
    pub fn clear_full_rows(&mut self) -> ArrayVec<usize, FIELD_ROWS> {
        let mut cleared = ArrayVec::new();
        let mut write_row = 0usize;

        // Scan from bottom to top
        for read_row in 0..FIELD_ROWS {
            if self.is_row_full(read_row) {
                cleared.push(read_row);
            } else {
                if write_row != read_row {
                    let src = read_row * FIELD_COLS;
                    self.cells
                        .copy_within(src..src + FIELD_COLS, write_row * FIELD_COLS);
                }
                write_row += 1;
            }
        }

        // Fresh empty rows on top
        self.cells[write_row * FIELD_COLS..].fill(false);

        cleared
    }

    /// Clear all full rows, returning how many were removed
    pub fn clear_filled_rows(&mut self) -> u32 {
        self.clear_full_rows().len() as u32
    }

    /// Mark every filled cell of `piece` at its current anchor as occupied.
    ///
    /// No collision check: the piece must already have passed
    /// [`Piece::check_position`]. Cells above the ceiling are dropped.
    pub fn commit(&mut self, piece: &Piece) {
        for (row, col) in piece.cells() {
            self.set(row, col, true);
        }
    }

    /// Number of filled cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|&&filled| filled).count()
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// Copy occupancy into a row-major grid (row 0 = bottom)
    pub fn write_grid(&self, out: &mut [[bool; FIELD_COLS]; FIELD_ROWS]) {
        for (row, out_row) in out.iter_mut().enumerate() {
            let start = row * FIELD_COLS;
            out_row.copy_from_slice(&self.cells[start..start + FIELD_COLS]);
        }
    }
}

impl Default for Field {
    fn default() -> Self {
        Self::new()
    }
}
