//! Shape module - tetromino footprints and the rotation transform
//!
//! A footprint is a small rectangular boolean matrix. Matrix row 0 is the top
//! row of the piece; the matrix is stored in a fixed 4x4 array so pieces stay
//! `Copy` and rotation never allocates.

use crate::types::PieceKind;

/// Largest span of any tetromino in either direction
pub const MAX_SPAN: usize = 4;

/// Rectangular cell footprint of a piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeMatrix {
    cells: [[bool; MAX_SPAN]; MAX_SPAN],
    rows: u8,
    cols: u8,
}

impl ShapeMatrix {
    const fn new(rows: u8, cols: u8, cells: [[bool; MAX_SPAN]; MAX_SPAN]) -> Self {
        Self { cells, rows, cols }
    }

    /// Build a matrix from text rows, top row first (`#` = filled).
    ///
    /// Returns `None` for empty, ragged, or oversized input.
    ///
    /// ```
    /// use tui_blockfall_core::ShapeMatrix;
    ///
    /// let t = ShapeMatrix::parse(&["###", ".#."]).unwrap();
    /// assert_eq!((t.rows(), t.cols()), (2, 3));
    /// assert!(t.get(1, 1));
    /// assert!(!t.get(1, 0));
    /// ```
    pub fn parse(rows: &[&str]) -> Option<Self> {
        let cols = rows.first()?.chars().count();
        if rows.len() > MAX_SPAN || cols == 0 || cols > MAX_SPAN {
            return None;
        }

        let mut cells = [[false; MAX_SPAN]; MAX_SPAN];
        for (r, line) in rows.iter().enumerate() {
            if line.chars().count() != cols {
                return None;
            }
            for (c, ch) in line.chars().enumerate() {
                cells[r][c] = ch == '#';
            }
        }

        Some(Self::new(rows.len() as u8, cols as u8, cells))
    }

    /// Number of matrix rows (piece height)
    pub fn rows(&self) -> u8 {
        self.rows
    }

    /// Number of matrix columns (piece width)
    pub fn cols(&self) -> u8 {
        self.cols
    }

    /// Whether the cell at matrix `(row, col)` is filled.
    /// Out-of-range reads are empty.
    pub fn get(&self, row: usize, col: usize) -> bool {
        row < self.rows as usize && col < self.cols as usize && self.cells[row][col]
    }

    /// Iterate the filled cells as matrix `(row, col)` pairs, row-major.
    pub fn filled(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let cols = self.cols as usize;
        (0..self.rows as usize)
            .flat_map(move |r| (0..cols).map(move |c| (r, c)))
            .filter(move |&(r, c)| self.cells[r][c])
    }

    /// Number of filled cells
    pub fn count(&self) -> usize {
        self.filled().count()
    }
}

/// Rotate a footprint by 90°.
///
/// Clockwise reverses the row order and then transposes; counter-clockwise
/// reverses the column order and then transposes. Non-square matrices swap
/// their dimensions.
///
/// ```
/// use tui_blockfall_core::{rotate, ShapeMatrix};
///
/// let j = ShapeMatrix::parse(&["###", "..#"]).unwrap();
/// let cw = rotate(&j, true);
/// assert_eq!(cw, ShapeMatrix::parse(&[".#", ".#", "##"]).unwrap());
/// assert_eq!(rotate(&cw, false), j);
/// ```
pub fn rotate(matrix: &ShapeMatrix, clockwise: bool) -> ShapeMatrix {
    let rows = matrix.rows as usize;
    let cols = matrix.cols as usize;
    let mut cells = [[false; MAX_SPAN]; MAX_SPAN];

    // New matrix is cols x rows.
    for (r, out_row) in cells.iter_mut().enumerate().take(cols) {
        for (c, out) in out_row.iter_mut().enumerate().take(rows) {
            *out = if clockwise {
                matrix.cells[rows - 1 - c][r]
            } else {
                matrix.cells[c][cols - 1 - r]
            };
        }
    }

    ShapeMatrix::new(matrix.cols, matrix.rows, cells)
}

const X: bool = true;
const O: bool = false;
const BLANK: [bool; MAX_SPAN] = [O; MAX_SPAN];

const I_SHAPE: ShapeMatrix = ShapeMatrix::new(1, 4, [[X, X, X, X], BLANK, BLANK, BLANK]);
const J_SHAPE: ShapeMatrix = ShapeMatrix::new(2, 3, [[X, X, X, O], [O, O, X, O], BLANK, BLANK]);
const L_SHAPE: ShapeMatrix = ShapeMatrix::new(2, 3, [[X, X, X, O], [X, O, O, O], BLANK, BLANK]);
const O_SHAPE: ShapeMatrix = ShapeMatrix::new(2, 2, [[X, X, O, O], [X, X, O, O], BLANK, BLANK]);
const S_SHAPE: ShapeMatrix = ShapeMatrix::new(2, 3, [[O, X, X, O], [X, X, O, O], BLANK, BLANK]);
const T_SHAPE: ShapeMatrix = ShapeMatrix::new(2, 3, [[X, X, X, O], [O, X, O, O], BLANK, BLANK]);
const Z_SHAPE: ShapeMatrix = ShapeMatrix::new(2, 3, [[X, X, O, O], [O, X, X, O], BLANK, BLANK]);

/// Spawn footprint for a piece kind
pub fn shape_for(kind: PieceKind) -> ShapeMatrix {
    match kind {
        PieceKind::I => I_SHAPE,
        PieceKind::J => J_SHAPE,
        PieceKind::L => L_SHAPE,
        PieceKind::O => O_SHAPE,
        PieceKind::S => S_SHAPE,
        PieceKind::T => T_SHAPE,
        PieceKind::Z => Z_SHAPE,
    }
}
