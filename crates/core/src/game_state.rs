//! Game state module - the controller
//!
//! Ties together the field, the active and next pieces, the piece factory and
//! the score. The controller is a three-phase state machine:
//!
//! - `Idle`: splash screen, waiting for any input
//! - `Active`: a piece is falling; ticks and player actions are processed
//! - `GameOver`: terminal, every further event is ignored
//!
//! All state lives in [`Game`]; nothing is global.

use std::ops::ControlFlow;

use log::{debug, info};

use crate::field::Field;
use crate::piece::Piece;
use crate::rng::PieceFactory;
use crate::scoring::Score;
use crate::snapshot::{GameSnapshot, PieceSnapshot};
use crate::timer::GameEvent;
use crate::types::{Direction, GameAction};

/// Controller phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Idle,
    Active,
    GameOver,
}

/// What a descent tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Not playing; nothing happened
    Ignored,
    /// The active piece moved down one row
    Fell,
    /// The active piece froze and the next piece took over
    Locked { lines_cleared: u32 },
    /// The piece froze and its successor could not spawn
    GameOver,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct Game {
    field: Field,
    active: Option<Piece>,
    next: Option<Piece>,
    factory: PieceFactory,
    score: Score,
    phase: Phase,
    /// Descent interval fixed when the game starts
    drop_interval_ms: Option<u32>,
    lines: u32,
    pieces_frozen: u32,
}

impl Game {
    /// Create a new idle game with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self::with_field(seed, Field::new())
    }

    /// Create a new idle game on a prepared field
    pub fn with_field(seed: u32, field: Field) -> Self {
        Self {
            field,
            active: None,
            next: None,
            factory: PieceFactory::new(seed),
            score: Score::new(),
            phase: Phase::Idle,
            drop_interval_ms: None,
            lines: 0,
            pieces_frozen: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    pub fn active(&self) -> Option<&Piece> {
        self.active.as_ref()
    }

    pub fn next(&self) -> Option<&Piece> {
        self.next.as_ref()
    }

    pub fn score(&self) -> &Score {
        &self.score
    }

    /// Rows cleared so far
    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn pieces_frozen(&self) -> u32 {
        self.pieces_frozen
    }

    /// Descent interval, `None` until the game has started
    pub fn drop_interval_ms(&self) -> Option<u32> {
        self.drop_interval_ms
    }

    /// Leave the splash screen: spawn the current and next piece and fix the
    /// descent interval.
    pub fn start(&mut self) -> Phase {
        if self.phase != Phase::Idle {
            return self.phase;
        }

        let current = self.factory.random_piece();
        self.next = Some(self.factory.random_piece());
        self.active = Some(current);
        self.phase = Phase::Active;

        let Some(interval) = self.score.drop_interval_ms() else {
            info!(
                "level {} has no positive descent interval; game over",
                self.score.level()
            );
            self.phase = Phase::GameOver;
            return self.phase;
        };
        self.drop_interval_ms = Some(interval);

        if !current.check_position(&self.field, None) {
            self.end_game();
            return self.phase;
        }

        info!(
            "game started: level {}, descent every {}ms",
            self.score.level(),
            interval
        );
        debug!("spawned {:?}", current.kind());
        self.phase
    }

    /// Automatic descent step.
    ///
    /// Moves the active piece down; when it cannot move it freezes, full rows
    /// are cleared and scored, and the next piece spawns.
    pub fn tick(&mut self) -> TickOutcome {
        if self.phase != Phase::Active {
            return TickOutcome::Ignored;
        }
        let Some(mut piece) = self.active else {
            return TickOutcome::Ignored;
        };

        if piece.shift(&self.field, Direction::Down, 1) {
            self.active = Some(piece);
            return TickOutcome::Fell;
        }

        piece.freeze(&mut self.field, &mut self.score);
        self.pieces_frozen += 1;
        debug!("froze {:?} at {:?}", piece.kind(), piece.position());

        let cleared = self.field.clear_full_rows();
        let lines_cleared = cleared.len() as u32;
        if lines_cleared > 0 {
            self.score.on_lines_cleared(lines_cleared);
            self.lines += lines_cleared;
            debug!("cleared rows {:?}", cleared.as_slice());
        }
        if self.score.apply_level_up() {
            info!("level up: {}", self.score.level());
        }

        let promoted = match self.next.take() {
            Some(next) => next,
            None => self.factory.random_piece(),
        };
        self.next = Some(self.factory.random_piece());
        self.active = Some(promoted);

        if !promoted.check_position(&self.field, None) {
            self.end_game();
            return TickOutcome::GameOver;
        }

        debug!("spawned {:?}", promoted.kind());
        TickOutcome::Locked { lines_cleared }
    }

    /// Apply a player action. Returns whether anything changed.
    ///
    /// While idle, any action starts the game. Rejected moves are silently
    /// ignored.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match self.phase {
            Phase::Idle => {
                self.start();
                true
            }
            Phase::GameOver => false,
            Phase::Active => match action {
                GameAction::Start => false,
                GameAction::MoveLeft => self.shift_active(Direction::Left),
                GameAction::MoveRight => self.shift_active(Direction::Right),
                GameAction::SoftDrop => self.shift_active(Direction::Down),
                GameAction::RotateCw => self.rotate_active(true),
                GameAction::RotateCcw => self.rotate_active(false),
            },
        }
    }

    /// Feed one queued event through the state machine.
    ///
    /// Breaks when the loop should stop: on quit or once the game is over.
    pub fn handle_event(&mut self, event: GameEvent) -> ControlFlow<()> {
        match event {
            GameEvent::Quit => return ControlFlow::Break(()),
            GameEvent::Tick => {
                self.tick();
            }
            GameEvent::Input(action) => {
                if !self.apply_action(action) {
                    debug!("rejected {}", action.as_str());
                }
            }
        }

        if self.is_over() {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    }

    fn shift_active(&mut self, direction: Direction) -> bool {
        match self.active.as_mut() {
            Some(piece) => piece.shift(&self.field, direction, 1),
            None => false,
        }
    }

    fn rotate_active(&mut self, clockwise: bool) -> bool {
        match self.active.as_mut() {
            Some(piece) => piece.rotate(&self.field, clockwise),
            None => false,
        }
    }

    fn end_game(&mut self) {
        self.phase = Phase::GameOver;
        info!(
            "game over: score {}, level {}, lines {}",
            self.score.counter(),
            self.score.level(),
            self.lines
        );
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.field.write_grid(&mut out.field);
        out.active = self.active.map(PieceSnapshot::from);
        out.next = self.next.map(PieceSnapshot::from);
        out.phase = self.phase;
        out.score = self.score.counter();
        out.level = self.score.level();
        out.level_progress = self.score.next();
        out.level_goal = self.score.next_max();
        out.lines = self.lines;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(1)
    }
}
