//! Piece module - the falling tetromino
//!
//! A piece is a footprint matrix plus an anchor: the field `(row, col)` of the
//! matrix's top-left corner. Matrix row `i` lands on field row `anchor_row - i`,
//! so pieces hang downward from their anchor.
//!
//! Every move goes through [`Piece::check_position`]; rejected moves leave the
//! piece untouched and return `false`.

use crate::field::Field;
use crate::scoring::Score;
use crate::shape::{rotate, shape_for, ShapeMatrix};
use crate::types::{Direction, PieceKind, ShapeError, BOARD_HEIGHT, BOARD_WIDTH, SPAWN_COL, SPAWN_ROW};

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: PieceKind,
    matrix: ShapeMatrix,
    row: i8,
    col: i8,
}

impl Piece {
    /// Create a new piece at the spawn anchor
    pub fn new(kind: PieceKind) -> Self {
        Self::at(kind, SPAWN_ROW, SPAWN_COL)
    }

    /// Create a piece with its spawn footprint at an arbitrary anchor
    pub fn at(kind: PieceKind, row: i8, col: i8) -> Self {
        Self {
            kind,
            matrix: shape_for(kind),
            row,
            col,
        }
    }

    /// Create a spawn-positioned piece from a shape tag like `"T"`.
    ///
    /// Unknown tags are a configuration error.
    pub fn from_tag(tag: &str) -> Result<Self, ShapeError> {
        Ok(Self::new(PieceKind::from_tag(tag)?))
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn matrix(&self) -> &ShapeMatrix {
        &self.matrix
    }

    pub fn row(&self) -> i8 {
        self.row
    }

    pub fn col(&self) -> i8 {
        self.col
    }

    /// Anchor as `(row, col)`
    pub fn position(&self) -> (i8, i8) {
        (self.row, self.col)
    }

    /// Field coordinates of every filled cell at the current anchor.
    ///
    /// Saturates at the `i8` range; such cells are off the field anyway.
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        let (row, col) = (self.row, self.col);
        self.matrix
            .filled()
            .map(move |(r, c)| {
                (row.saturating_sub(r as i8), col.saturating_add(c as i8))
            })
    }

    /// Check whether the piece fits at `position` (defaults to the current anchor).
    ///
    /// Rejects footprints that reach above row 20, below the floor, or past
    /// either wall, and footprints overlapping occupied field cells.
    pub fn check_position(&self, field: &Field, position: Option<(i8, i8)>) -> bool {
        let (row, col) = position.unwrap_or((self.row, self.col));
        fits(&self.matrix, field, row, col)
    }

    /// Rotate 90° in place. No wall kicks: if the rotated footprint does not
    /// fit at the current anchor the old matrix is restored.
    pub fn rotate(&mut self, field: &Field, clockwise: bool) -> bool {
        let previous = self.matrix;
        self.matrix = rotate(&previous, clockwise);

        if self.check_position(field, None) {
            true
        } else {
            self.matrix = previous;
            false
        }
    }

    /// Shift by `amount` cells. Commits only if the new anchor is valid.
    ///
    /// `amount` must be at least 1; anything else is rejected so a piece can
    /// never move up or stay put and report success.
    pub fn shift(&mut self, field: &Field, direction: Direction, amount: i8) -> bool {
        if amount < 1 {
            return false;
        }
        let (dr, dc) = direction.offset();
        let candidate = (
            self.row.saturating_add(dr.saturating_mul(amount)),
            self.col.saturating_add(dc.saturating_mul(amount)),
        );

        if self.check_position(field, Some(candidate)) {
            (self.row, self.col) = candidate;
            true
        } else {
            false
        }
    }

    /// Commit the footprint into the field and award the freeze points.
    pub fn freeze(&self, field: &mut Field, score: &mut Score) {
        field.commit(self);
        score.on_freeze();
    }
}

/// Bounds and overlap check for a footprint anchored at `(row, col)`.
fn fits(matrix: &ShapeMatrix, field: &Field, row: i8, col: i8) -> bool {
    let height = matrix.rows() as i16;
    let width = matrix.cols() as i16;
    let (row, col) = (row as i16, col as i16);

    if row - height < -1 || col + width > BOARD_WIDTH as i16 || row > BOARD_HEIGHT as i16 || col < 0
    {
        return false;
    }

    matrix.filled().all(|(r, c)| {
        let cell_row = row - r as i16;
        let cell_col = col + c as i16;
        // Cells poking above the top row cannot collide with anything.
        cell_row >= BOARD_HEIGHT as i16 || !field.is_occupied(cell_row as i8, cell_col as i8)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_piece_spawns_at_anchor() {
        let piece = Piece::new(PieceKind::T);
        assert_eq!(piece.kind(), PieceKind::T);
        assert_eq!(piece.position(), (19, 5));
        assert_eq!(*piece.matrix(), shape_for(PieceKind::T));
    }

    #[test]
    fn test_from_tag() {
        assert_eq!(Piece::from_tag("z").unwrap().kind(), PieceKind::Z);
        assert_eq!(
            Piece::from_tag("Q"),
            Err(ShapeError::UnknownShape("Q".to_string()))
        );
    }

    #[test]
    fn test_cells_hang_down_from_anchor() {
        let piece = Piece::at(PieceKind::J, 19, 5);
        let cells: Vec<_> = piece.cells().collect();
        assert_eq!(cells, vec![(19, 5), (19, 6), (19, 7), (18, 7)]);
    }

    #[test]
    fn test_check_position_bounds() {
        let field = Field::new();
        let o = Piece::new(PieceKind::O);

        assert!(o.check_position(&field, Some((1, 0))));
        assert!(o.check_position(&field, Some((1, 8))));
        // Bottom row of the footprint would sit at row -1.
        assert!(!o.check_position(&field, Some((0, 0))));
        assert!(!o.check_position(&field, Some((1, -1))));
        assert!(!o.check_position(&field, Some((1, 9))));
        assert!(!o.check_position(&field, Some((21, 0))));
    }

    #[test]
    fn test_check_position_above_ceiling() {
        let field = Field::new();
        let i = Piece::new(PieceKind::I);
        // Anchor row 20 is still admitted; the cell sits above the visible field.
        assert!(i.check_position(&field, Some((20, 0))));
    }

    #[test]
    fn test_check_position_overlap() {
        let mut field = Field::new();
        field.set(18, 6, true);

        let t = Piece::new(PieceKind::T);
        assert!(!t.check_position(&field, None));
        assert!(t.check_position(&field, Some((19, 1))));
    }

    #[test]
    fn test_shift_left_right_down() {
        let field = Field::new();
        let mut piece = Piece::new(PieceKind::O);

        assert!(piece.shift(&field, Direction::Left, 1));
        assert_eq!(piece.position(), (19, 4));
        assert!(piece.shift(&field, Direction::Right, 2));
        assert_eq!(piece.position(), (19, 6));
        assert!(piece.shift(&field, Direction::Down, 1));
        assert_eq!(piece.position(), (18, 6));
    }

    #[test]
    fn test_shift_against_wall_is_rejected() {
        let field = Field::new();
        let mut piece = Piece::new(PieceKind::I);

        // I is 4 wide at column 5: columns 5..=8, one step right is fine.
        assert!(piece.shift(&field, Direction::Right, 1));
        assert!(!piece.shift(&field, Direction::Right, 1));
        assert_eq!(piece.position(), (19, 6));
    }

    #[test]
    fn test_shift_huge_amount_saturates_and_fails() {
        let field = Field::new();
        let mut piece = Piece::new(PieceKind::O);
        assert!(!piece.shift(&field, Direction::Down, i8::MAX));
        assert_eq!(piece.position(), (19, 5));
    }

    #[test]
    fn test_rotate_reverts_when_blocked() {
        let field = Field::new();
        // Horizontal I on the floor: rotating would push cells below row 0.
        let mut piece = Piece::at(PieceKind::I, 0, 0);
        assert!(!piece.rotate(&field, true));
        assert_eq!(*piece.matrix(), shape_for(PieceKind::I));

        let mut piece = Piece::at(PieceKind::I, 10, 0);
        assert!(piece.rotate(&field, true));
        assert_eq!(piece.matrix().rows(), 4);
    }

    #[test]
    fn test_rotate_blocked_by_field() {
        let mut field = Field::new();
        let mut piece = Piece::at(PieceKind::I, 10, 3);
        // Clockwise I at (10, 3) is a column occupying rows 7..=10 of column 3.
        field.set(7, 3, true);
        assert!(!piece.rotate(&field, true));
        assert_eq!(piece.matrix().rows(), 1);
    }

    #[test]
    fn test_freeze_commits_and_scores() {
        let mut field = Field::new();
        let mut score = Score::new();
        let piece = Piece::at(PieceKind::O, 1, 0);

        piece.freeze(&mut field, &mut score);
        assert_eq!(field.filled_count(), 4);
        assert!(field.is_occupied(0, 0) && field.is_occupied(1, 1));
        assert_eq!(score.counter(), 10);
        assert_eq!(score.next(), 10);
    }

    #[test]
    fn test_shift_rejects_non_positive_amount() {
        let field = Field::new();
        let mut piece = Piece::at(PieceKind::O, 10, 0);
        let before = piece;

        assert!(!piece.shift(&field, Direction::Down, -1));
        assert!(!piece.shift(&field, Direction::Down, 0));
        assert!(!piece.shift(&field, Direction::Left, -1));
        assert_eq!(piece, before);

        assert!(piece.shift(&field, Direction::Down, 2));
        assert_eq!(piece.row(), 8);
    }

    #[test]
    fn test_extreme_anchor_cells_stay_off_field() {
        let mut field = Field::new();
        let low = Piece::at(PieceKind::T, i8::MIN, 0);
        let high = Piece::at(PieceKind::I, i8::MAX, i8::MAX);

        assert!(low.cells().all(|(row, _)| row == i8::MIN));
        assert!(high.cells().all(|(_, col)| col == i8::MAX));
        assert!(!low.check_position(&field, None));
        assert!(!high.check_position(&field, None));

        field.commit(&low);
        field.commit(&high);
        assert_eq!(field.filled_count(), 0);
    }
}
