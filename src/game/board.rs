use crate::error::{GameError, Result};
use crate::game::shape::Shape;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Cell {
    #[default]
    Empty,
    Active,
    Landed,
}

/// Board coordinates of a shape's top-left matrix cell. May be negative or past the edge.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    pub fn offset(self, d_row: i32, d_col: i32) -> Self {
        Self {
            row: self.row + d_row,
            col: self.col + d_col,
        }
    }
}

pub struct Board {
    rows: usize,
    columns: usize,
    grid: Vec<Vec<Cell>>,
}

impl Board {
    pub fn new(rows: usize, columns: usize) -> Result<Self> {
        if rows == 0 || columns == 0 {
            return Err(GameError::InvalidDimensions { rows, columns });
        }
        Ok(Self {
            rows,
            columns,
            grid: vec![vec![Cell::Empty; columns]; rows],
        })
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn cells(&self) -> &[Vec<Cell>] {
        &self.grid
    }

    pub fn get(&self, row: i32, col: i32) -> Option<Cell> {
        let (row, col) = self.index(row, col)?;
        Some(self.grid[row][col])
    }

    /// Returns false when the coordinates fall outside the board.
    pub fn set(&mut self, row: i32, col: i32, cell: Cell) -> bool {
        match self.index(row, col) {
            Some((row, col)) => {
                self.grid[row][col] = cell;
                true
            }
            None => false,
        }
    }

    pub fn reset(&mut self) {
        for row in self.grid.iter_mut() {
            row.fill(Cell::Empty);
        }
    }

    /// Every occupied cell must land inside the board and off any landed cell.
    /// Active cells don't block.
    pub fn can_place(&self, shape: &Shape, position: Position) -> bool {
        shape.occupied().all(|(r, c)| {
            match self.get(position.row + r as i32, position.col + c as i32) {
                Some(cell) => cell != Cell::Landed,
                None => false,
            }
        })
    }

    pub fn mark_active(&mut self, shape: &Shape, position: Position) {
        self.paint(shape, position, Cell::Active);
    }

    pub fn clear_active(&mut self, shape: &Shape, position: Position) {
        self.paint(shape, position, Cell::Empty);
    }

    pub fn lock(&mut self, shape: &Shape, position: Position) {
        self.paint(shape, position, Cell::Landed);
    }

    /// Drops every fully landed row and pads the top with empty rows.
    /// Returns how many rows were removed.
    pub fn clear_full_rows(&mut self) -> usize {
        self.grid
            .retain(|row| !row.iter().all(|&cell| cell == Cell::Landed));

        let cleared = self.rows - self.grid.len();
        for _ in 0..cleared {
            self.grid.insert(0, vec![Cell::Empty; self.columns]);
        }

        cleared
    }

    // Cells that fall off the board are skipped.
    fn paint(&mut self, shape: &Shape, position: Position, cell: Cell) {
        for (r, c) in shape.occupied() {
            self.set(position.row + r as i32, position.col + c as i32, cell);
        }
    }

    fn index(&self, row: i32, col: i32) -> Option<(usize, usize)> {
        if row < 0 || col < 0 || row as usize >= self.rows || col as usize >= self.columns {
            return None;
        }
        Some((row as usize, col as usize))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::shape::ShapeKind;

    fn fill_row(board: &mut Board, row: i32) {
        for col in 0..board.columns() as i32 {
            board.set(row, col, Cell::Landed);
        }
    }

    #[test]
    fn zero_dimensions_are_rejected() {
        assert_eq!(
            Board::new(0, 10).err(),
            Some(GameError::InvalidDimensions { rows: 0, columns: 10 })
        );
        assert!(Board::new(20, 0).is_err());
    }

    #[test]
    fn new_board_is_empty() {
        let board = Board::new(20, 10).unwrap();
        assert_eq!(board.cells().len(), 20);
        assert!(board
            .cells()
            .iter()
            .all(|row| row.len() == 10 && row.iter().all(|&c| c == Cell::Empty)));
    }

    #[test]
    fn can_place_rejects_every_wall() {
        let board = Board::new(20, 10).unwrap();
        let o = ShapeKind::O.shape();
        assert!(board.can_place(&o, Position::new(0, 0)));
        assert!(board.can_place(&o, Position::new(18, 8)));
        assert!(!board.can_place(&o, Position::new(-1, 0)));
        assert!(!board.can_place(&o, Position::new(0, -1)));
        assert!(!board.can_place(&o, Position::new(19, 0)));
        assert!(!board.can_place(&o, Position::new(0, 9)));
    }

    #[test]
    fn empty_shape_cells_impose_no_constraint() {
        let mut board = Board::new(20, 10).unwrap();
        let padded = Shape::new("pad", vec![vec![false, false], vec![true, false]]).unwrap();
        assert!(board.can_place(&padded, Position::new(-1, 9)));

        board.set(0, 9, Cell::Landed);
        assert!(!board.can_place(&padded, Position::new(-1, 9)));

        // Empty top row over a landed cell and past the right wall
        board.set(18, 9, Cell::Landed);
        assert!(board.can_place(&padded, Position::new(18, 9)));
    }

    #[test]
    fn landed_cells_block_but_active_cells_do_not() {
        let mut board = Board::new(20, 10).unwrap();
        let o = ShapeKind::O.shape();
        board.set(5, 5, Cell::Active);
        assert!(board.can_place(&o, Position::new(4, 4)));
        board.set(5, 5, Cell::Landed);
        assert!(!board.can_place(&o, Position::new(4, 4)));
    }

    #[test]
    fn mark_clear_and_lock_skip_out_of_range_cells() {
        let mut board = Board::new(4, 4).unwrap();
        let o = ShapeKind::O.shape();
        let corner = Position::new(-1, 3);

        board.mark_active(&o, corner);
        assert_eq!(board.get(0, 3), Some(Cell::Active));
        let active = board.cells().iter().flatten().filter(|&&c| c == Cell::Active).count();
        assert_eq!(active, 1);

        board.clear_active(&o, corner);
        assert_eq!(board.get(0, 3), Some(Cell::Empty));

        board.lock(&o, corner);
        assert_eq!(board.get(0, 3), Some(Cell::Landed));
    }

    #[test]
    fn clearing_row_five_shifts_rows_above_down() {
        let mut board = Board::new(20, 10).unwrap();
        fill_row(&mut board, 5);
        board.set(2, 3, Cell::Landed);
        board.set(19, 0, Cell::Landed);

        assert_eq!(board.clear_full_rows(), 1);
        assert!(board.cells()[0].iter().all(|&c| c == Cell::Empty));
        assert_eq!(board.get(3, 3), Some(Cell::Landed));
        assert_eq!(board.get(2, 3), Some(Cell::Empty));
        assert_eq!(board.get(19, 0), Some(Cell::Landed));
        assert_eq!(board.cells().len(), 20);
    }

    #[test]
    fn clearing_keeps_surviving_row_order() {
        let mut board = Board::new(6, 3).unwrap();
        board.set(1, 0, Cell::Landed);
        fill_row(&mut board, 2);
        board.set(3, 1, Cell::Landed);
        fill_row(&mut board, 4);
        board.set(5, 2, Cell::Landed);

        assert_eq!(board.clear_full_rows(), 2);
        assert_eq!(board.get(3, 0), Some(Cell::Landed));
        assert_eq!(board.get(4, 1), Some(Cell::Landed));
        assert_eq!(board.get(5, 2), Some(Cell::Landed));
        assert!(board.cells()[..3].iter().flatten().all(|&c| c == Cell::Empty));
    }

    #[test]
    fn rows_with_active_cells_are_not_full() {
        let mut board = Board::new(4, 3).unwrap();
        fill_row(&mut board, 3);
        board.set(3, 1, Cell::Active);
        assert_eq!(board.clear_full_rows(), 0);
    }

    #[test]
    fn reset_empties_every_cell() {
        let mut board = Board::new(4, 3).unwrap();
        fill_row(&mut board, 3);
        board.set(0, 0, Cell::Active);
        board.reset();
        assert!(board.cells().iter().flatten().all(|&c| c == Cell::Empty));
    }
}
