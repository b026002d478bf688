use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::Config;
use crate::error::Result;
use crate::game::board::{Board, Cell, Position};
use crate::game::shape::{Shape, ShapeLibrary};

/// Player input understood by the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    Down,
    /// Rotate clockwise in place
    Up,
    Other,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// The piece moved down one row.
    Fell,
    /// The piece settled, full rows were removed and a new piece spawned.
    Locked { rows_cleared: usize },
}

/// One running game: the board plus the single falling piece.
///
/// `tick` and `handle_input` each run a full clear, move, re-mark cycle, so
/// calling them one after another from a single thread keeps exactly one
/// piece's cells `Active`.
pub struct Session<R = StdRng> {
    board: Board,
    library: ShapeLibrary,
    rng: R,
    spawn: Position,
    current_shape: Shape,
    current_position: Position,
}

impl Session<StdRng> {
    /// Builds a session over the standard catalog, seeding the generator from
    /// `config.seed` or the OS when unset.
    pub fn from_config(config: &Config) -> Result<Self> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::new(config, rng)
    }
}

impl<R: Rng> Session<R> {
    pub fn new(config: &Config, rng: R) -> Result<Self> {
        Self::with_library(config, ShapeLibrary::standard(), rng)
    }

    pub fn with_library(config: &Config, library: ShapeLibrary, mut rng: R) -> Result<Self> {
        let first = library.random_shape(&mut rng);
        Self::with_shape(config, library, rng, first)
    }

    /// Starts with `first` at the spawn point instead of a random draw.
    pub fn with_shape(
        config: &Config,
        library: ShapeLibrary,
        rng: R,
        first: Shape,
    ) -> Result<Self> {
        config.validate()?;
        let board = Board::new(config.rows, config.columns)?;

        let mut session = Self {
            board,
            library,
            rng,
            spawn: config.spawn,
            current_shape: first,
            current_position: config.spawn,
        };
        session
            .board
            .mark_active(&session.current_shape, session.current_position);

        info!(
            "Session started on a {}x{} board with {}",
            config.rows,
            config.columns,
            session.current_shape.name()
        );
        Ok(session)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn cells(&self) -> &[Vec<Cell>] {
        self.board.cells()
    }

    pub fn current_shape(&self) -> &Shape {
        &self.current_shape
    }

    pub fn position(&self) -> Position {
        self.current_position
    }

    /// Gravity step.
    pub fn tick(&mut self) -> TickOutcome {
        self.board.clear_active(&self.current_shape, self.current_position);

        let below = self.current_position.offset(1, 0);
        if self.board.can_place(&self.current_shape, below) {
            self.current_position = below;
            self.board.mark_active(&self.current_shape, self.current_position);
            return TickOutcome::Fell;
        }

        self.board.lock(&self.current_shape, self.current_position);
        let rows_cleared = self.board.clear_full_rows();
        debug!(
            "{} locked at {:?}, {} rows cleared",
            self.current_shape.name(),
            self.current_position,
            rows_cleared
        );

        self.spawn_piece();
        TickOutcome::Locked { rows_cleared }
    }

    /// Applies one key press. Returns whether the piece moved or rotated.
    /// Blocked moves are ignored.
    pub fn handle_input(&mut self, key: Key) -> bool {
        self.board.clear_active(&self.current_shape, self.current_position);

        let before = (self.current_position, self.current_shape.clone());
        let candidate = match key {
            Key::Left => self.current_position.offset(0, -1),
            Key::Right => self.current_position.offset(0, 1),
            Key::Down => self.current_position.offset(1, 0),
            Key::Up => {
                let rotated = self.current_shape.rotate();
                if self.board.can_place(&rotated, self.current_position) {
                    self.current_shape = rotated;
                }
                self.current_position
            }
            Key::Other => self.current_position,
        };

        if self.board.can_place(&self.current_shape, candidate) {
            self.current_position = candidate;
        }

        self.board.mark_active(&self.current_shape, self.current_position);
        before != (self.current_position, self.current_shape.clone())
    }

    /// Empties the board and starts over with a fresh piece.
    pub fn reset(&mut self) {
        self.board.reset();
        self.spawn_piece();
        info!("Session reset");
    }

    // No game over: a blocked spawn is marked anyway and overwrites landed cells.
    fn spawn_piece(&mut self) {
        self.current_shape = self.library.random_shape(&mut self.rng);
        self.current_position = self.spawn;

        if !self.board.can_place(&self.current_shape, self.current_position) {
            warn!(
                "{} spawned at {:?} overlaps landed cells",
                self.current_shape.name(),
                self.current_position
            );
        }
        self.board.mark_active(&self.current_shape, self.current_position);
    }
}
