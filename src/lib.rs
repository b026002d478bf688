//! Dropris - a minimal falling-block puzzle game
//!
//! Core modules:
//! - `game`: shapes, board and the session that drives them
//! - `input`: terminal key mapping
//! - `ui`: ratatui rendering of the board

pub mod config;
pub mod constants;
pub mod error;
pub mod game;
pub mod input;
pub mod ui;

pub use config::{Args, Config};
pub use error::{GameError, Result};
pub use game::{Board, Cell, Key, Position, Session, Shape, TickOutcome};
