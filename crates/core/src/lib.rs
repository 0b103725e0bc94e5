//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the piece/field simulation and the game controller.
//! It has **no dependencies** on terminal I/O, so it can run headless in tests
//! and benchmarks.
//!
//! # Module Structure
//!
//! - [`field`]: 20x10 occupancy grid with line clearing (row 0 is the floor)
//! - [`shape`]: tetromino footprint matrices and the pure rotation transform
//! - [`piece`]: the falling piece: rotation, shifting, collision checks, freezing
//! - [`rng`]: seeded RNG and the uniform random piece factory
//! - [`scoring`]: score, level and descent interval bookkeeping
//! - [`timer`]: the single event queue and the periodic descent timer
//! - [`game_state`]: the controller state machine (`Idle` → `Active` → `GameOver`)
//! - [`snapshot`]: read-only copy of everything the presentation layer draws
//!
//! # Game Rules
//!
//! - Pieces spawn with their matrix's top-left corner at row 19, column 5
//! - Rotation is strictly in place; a blocked rotation is simply rejected
//! - A piece that cannot move down on a tick freezes into the field
//! - Full rows are removed and everything above falls by one row
//! - The game ends when the next piece cannot be placed at the spawn anchor
//!
//! # Example
//!
//! ```
//! use tui_blockfall_core::{Game, Phase, TickOutcome};
//! use tui_blockfall_core::types::GameAction;
//!
//! let mut game = Game::new(12345);
//! assert_eq!(game.phase(), Phase::Idle);
//!
//! game.apply_action(GameAction::Start);
//! assert_eq!(game.phase(), Phase::Active);
//! assert_eq!(game.drop_interval_ms(), Some(490));
//!
//! // Drop the first piece all the way; it freezes and the next piece spawns.
//! while game.tick() == TickOutcome::Fell {}
//! assert_eq!(game.score().counter(), 10);
//! ```

pub mod field;
pub mod game_state;
pub mod piece;
pub mod rng;
pub mod scoring;
pub mod shape;
pub mod snapshot;
pub mod timer;

pub use tui_blockfall_types as types;

// Re-export commonly used types for convenience
pub use field::Field;
pub use game_state::{Game, Phase, TickOutcome};
pub use piece::Piece;
pub use rng::{PieceFactory, SimpleRng};
pub use scoring::{drop_interval_ms, Score};
pub use shape::{rotate, shape_for, ShapeMatrix};
pub use snapshot::{GameSnapshot, PieceSnapshot};
pub use timer::{DropTimer, EventQueue, GameEvent};
