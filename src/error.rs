use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("board dimensions must be positive, got {rows}x{columns}")]
    InvalidDimensions { rows: usize, columns: usize },
    #[error("shape catalog is empty")]
    EmptyCatalog,
    #[error("shape {name} has no cells")]
    EmptyShape { name: &'static str },
    #[error("shape {name} row {row} has {found} cells, expected {expected}")]
    RaggedShape {
        name: &'static str,
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("spawn column {col} is outside a board {columns} columns wide")]
    SpawnOutOfBounds { col: i32, columns: usize },
}

pub type Result<T> = std::result::Result<T, GameError>;
