pub mod renderer;
pub mod terminal;

pub use renderer::{board_widget, draw_board, TerminalRenderer};
pub use terminal::TerminalGuard;

use crate::game::Cell;

/// Anything that can present the board's cell grid.
pub trait Render {
    type Error;

    fn render(&mut self, cells: &[Vec<Cell>]) -> Result<(), Self::Error>;
}
