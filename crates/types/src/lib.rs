//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, tests).
//!
//! # Field Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9, left to right)
//! - **Height**: 20 rows (indexed 0-19, **bottom to top**)
//! - **Spawn anchor**: row 19, column 5 (top-left corner of the piece matrix)
//!
//! # Timing
//!
//! Automatic descent runs at `BASE_DROP_MS - DROP_MS_PER_LEVEL * level`
//! milliseconds, computed once when a game starts. A non-positive interval
//! ends the game immediately.
//!
//! # Scoring
//!
//! | Event | Score | Level progress |
//! |-------|-------|----------------|
//! | Piece freeze | `FREEZE_POINTS * level` | `+FREEZE_POINTS` |
//! | Each cleared row | `LINE_POINTS * level` | `+LINE_POINTS` |
//!
//! Progress resets and the level increments once it reaches `LEVEL_UP_POINTS`.
//!
//! # Examples
//!
//! ```
//! use tui_blockfall_types::{PieceKind, BOARD_WIDTH, BOARD_HEIGHT};
//!
//! // Parse a shape tag (case-insensitive)
//! let piece = PieceKind::from_tag("t").unwrap();
//! assert_eq!(piece, PieceKind::T);
//!
//! // Unknown tags are a configuration error
//! assert!(PieceKind::from_tag("x").is_err());
//!
//! // Field dimensions
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

use std::fmt;

/// Field width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Field height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Anchor row for newly spawned pieces (the top row of the field)
pub const SPAWN_ROW: i8 = 19;

/// Anchor column for newly spawned pieces
pub const SPAWN_COL: i8 = 5;

/// Descent interval at level 0 in milliseconds
pub const BASE_DROP_MS: i32 = 500;

/// Milliseconds shaved off the descent interval per level
pub const DROP_MS_PER_LEVEL: i32 = 10;

/// Level a new game starts at
pub const START_LEVEL: u32 = 1;

/// Points (times level) awarded when a piece freezes
pub const FREEZE_POINTS: u32 = 10;

/// Points (times level) awarded per cleared row
pub const LINE_POINTS: u32 = 100;

/// Level progress required for the next level
pub const LEVEL_UP_POINTS: u32 = 500;


/// The seven tetromino piece kinds
///
/// Catalog order matters: the random piece factory indexes into
/// [`PieceKind::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// Every shape in catalog order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Parse a shape tag (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_blockfall_types::{PieceKind, ShapeError};
    ///
    /// assert_eq!(PieceKind::from_tag("I"), Ok(PieceKind::I));
    /// assert_eq!(PieceKind::from_tag("o"), Ok(PieceKind::O));
    /// assert_eq!(
    ///     PieceKind::from_tag("unknown"),
    ///     Err(ShapeError::UnknownShape("unknown".to_string()))
    /// );
    /// ```
    pub fn from_tag(tag: &str) -> Result<Self, ShapeError> {
        match tag.to_lowercase().as_str() {
            "i" => Ok(PieceKind::I),
            "j" => Ok(PieceKind::J),
            "l" => Ok(PieceKind::L),
            "o" => Ok(PieceKind::O),
            "s" => Ok(PieceKind::S),
            "t" => Ok(PieceKind::T),
            "z" => Ok(PieceKind::Z),
            _ => Err(ShapeError::UnknownShape(tag.to_string())),
        }
    }

    /// Convert to uppercase tag
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::J => "J",
            PieceKind::L => "L",
            PieceKind::O => "O",
            PieceKind::S => "S",
            PieceKind::T => "T",
            PieceKind::Z => "Z",
        }
    }
}

/// Configuration error raised when a piece is built from a bad shape identifier.
///
/// This signals a programming or configuration defect, never a gameplay condition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShapeError {
    /// Tag does not name one of the seven shapes
    UnknownShape(String),
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeError::UnknownShape(tag) => write!(f, "bad tetromino shape {:?}", tag),
        }
    }
}

impl std::error::Error for ShapeError {}

/// Direction a piece can be shifted in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Down,
}

impl Direction {
    /// `(row, col)` delta for a single step.
    ///
    /// Rows grow upward, so `Down` decrements the row.
    pub fn offset(&self) -> (i8, i8) {
        match self {
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
            Direction::Down => (-1, 0),
        }
    }
}

/// Discrete, edge-triggered player actions
///
/// Quit is not an action; it is a separate event handled by the loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Leave the splash screen and start playing
    Start,
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down
    SoftDrop,
    /// Rotate piece 90° clockwise
    RotateCw,
    /// Rotate piece 90° counter-clockwise
    RotateCcw,
}

impl GameAction {
    /// Convert to camelCase string (used in log lines)
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Start => "start",
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::SoftDrop => "softDrop",
            GameAction::RotateCw => "rotateCw",
            GameAction::RotateCcw => "rotateCcw",
        }
    }
}
