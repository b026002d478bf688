pub mod board;
pub mod session;
pub mod shape;

pub use board::{Board, Cell, Position};
pub use session::{Key, Session, TickOutcome};
pub use shape::{catalog, rotate, Shape, ShapeKind, ShapeLibrary};
