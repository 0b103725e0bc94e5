use crate::field::{FIELD_COLS, FIELD_ROWS};
use crate::game_state::Phase;
use crate::piece::Piece;
use crate::shape::ShapeMatrix;
use crate::types::PieceKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceSnapshot {
    pub kind: PieceKind,
    pub matrix: ShapeMatrix,
    pub row: i8,
    pub col: i8,
}

impl From<Piece> for PieceSnapshot {
    fn from(value: Piece) -> Self {
        Self {
            kind: value.kind(),
            matrix: *value.matrix(),
            row: value.row(),
            col: value.col(),
        }
    }
}

impl PieceSnapshot {
    /// Field coordinates of every filled cell
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.matrix
            .filled()
            .map(move |(r, c)| {
                (
                    self.row.saturating_sub(r as i8),
                    self.col.saturating_add(c as i8),
                )
            })
    }
}

/// Everything the presentation layer needs for one frame.
///
/// `field` rows are bottom-up: `field[0]` is the floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub field: [[bool; FIELD_COLS]; FIELD_ROWS],
    pub active: Option<PieceSnapshot>,
    pub next: Option<PieceSnapshot>,
    pub phase: Phase,
    pub score: u32,
    pub level: u32,
    pub level_progress: u32,
    pub level_goal: u32,
    pub lines: u32,
}

impl GameSnapshot {
    pub fn playable(&self) -> bool {
        self.phase == Phase::Active
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            field: [[false; FIELD_COLS]; FIELD_ROWS],
            active: None,
            next: None,
            phase: Phase::Idle,
            score: 0,
            level: 0,
            level_progress: 0,
            level_goal: 0,
            lines: 0,
        }
    }
}
