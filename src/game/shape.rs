use rand::Rng;

use crate::error::{GameError, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShapeKind {
    I,
    O,
    T,
    S,
    Z,
    L,
    J,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::I,
        ShapeKind::O,
        ShapeKind::T,
        ShapeKind::S,
        ShapeKind::Z,
        ShapeKind::L,
        ShapeKind::J,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::I => "I",
            ShapeKind::O => "O",
            ShapeKind::T => "T",
            ShapeKind::S => "S",
            ShapeKind::Z => "Z",
            ShapeKind::L => "L",
            ShapeKind::J => "J",
        }
    }

    pub fn shape(self) -> Shape {
        let rows: &[&[u8]] = match self {
            ShapeKind::I => &[
                &[1, 1, 1, 1],
            ],
            ShapeKind::O => &[
                &[1, 1],
                &[1, 1],
            ],
            ShapeKind::T => &[
                &[0, 1, 0],
                &[1, 1, 1],
            ],
            ShapeKind::S => &[
                &[0, 1, 1],
                &[1, 1, 0],
            ],
            ShapeKind::Z => &[
                &[1, 1, 0],
                &[0, 1, 1],
            ],
            ShapeKind::L => &[
                &[1, 0],
                &[1, 0],
                &[1, 1],
            ],
            ShapeKind::J => &[
                &[0, 1],
                &[0, 1],
                &[1, 1],
            ],
        };

        Shape {
            name: self.name(),
            cells: rows
                .iter()
                .map(|row| row.iter().map(|&bit| bit != 0).collect())
                .collect(),
        }
    }
}

/// An immutable occupancy matrix. Row 0 is the top of the piece.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Shape {
    name: &'static str,
    cells: Vec<Vec<bool>>,
}

impl Shape {
    /// Builds a shape from a rectangular, non-empty matrix.
    pub fn new(name: &'static str, cells: Vec<Vec<bool>>) -> Result<Self> {
        let expected = cells.first().map_or(0, Vec::len);
        if expected == 0 {
            return Err(GameError::EmptyShape { name });
        }
        if let Some((row, found)) = cells
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != expected)
        {
            return Err(GameError::RaggedShape { name, row, expected, found });
        }

        Ok(Self { name, cells })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn height(&self) -> usize {
        self.cells.len()
    }

    pub fn width(&self) -> usize {
        self.cells[0].len()
    }

    pub fn rows(&self) -> &[Vec<bool>] {
        &self.cells
    }

    /// Offsets `(row, col)` of every occupied cell, relative to the top-left corner.
    pub fn occupied(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells.iter().enumerate().flat_map(|(r, row)| {
            row.iter()
                .enumerate()
                .filter(|&(_, &cell)| cell)
                .map(move |(c, _)| (r, c))
        })
    }

    /// Rotates a quarter turn clockwise. A `rows x cols` matrix becomes `cols x rows`.
    pub fn rotate(&self) -> Shape {
        let rows = self.height();
        let cols = self.width();
        let mut rotated = Vec::with_capacity(cols);

        for col in 0..cols {
            let mut new_row = Vec::with_capacity(rows);
            for row in (0..rows).rev() {
                new_row.push(self.cells[row][col]);
            }
            rotated.push(new_row);
        }

        Shape {
            name: self.name,
            cells: rotated,
        }
    }
}

pub fn rotate(shape: &Shape) -> Shape {
    shape.rotate()
}

/// The seven canonical tetrominoes, in catalog order.
pub fn catalog() -> Vec<Shape> {
    ShapeKind::ALL.iter().map(|kind| kind.shape()).collect()
}

/// Ordered set of shapes new pieces are drawn from.
#[derive(Clone, Debug)]
pub struct ShapeLibrary {
    shapes: Vec<Shape>,
}

impl ShapeLibrary {
    pub fn new(shapes: Vec<Shape>) -> Result<Self> {
        if shapes.is_empty() {
            return Err(GameError::EmptyCatalog);
        }
        Ok(Self { shapes })
    }

    pub fn standard() -> Self {
        Self { shapes: catalog() }
    }

    /// Picks a shape uniformly at random. Each call consumes randomness from `rng`.
    pub fn random_shape<R: Rng>(&self, rng: &mut R) -> Shape {
        let index = rng.gen_range(0..self.shapes.len());
        self.shapes[index].clone()
    }
}

impl Default for ShapeLibrary {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn bits(shape: &Shape) -> Vec<Vec<u8>> {
        shape
            .rows()
            .iter()
            .map(|row| row.iter().map(|&c| c as u8).collect())
            .collect()
    }

    #[test]
    fn catalog_holds_the_seven_tetrominoes_in_order() {
        let names: Vec<_> = catalog().iter().map(Shape::name).collect();
        assert_eq!(names, ["I", "O", "T", "S", "Z", "L", "J"]);
        for shape in catalog() {
            assert_eq!(shape.occupied().count(), 4, "{} should have 4 blocks", shape.name());
        }
    }

    #[test]
    fn rotating_t_points_it_right() {
        let rotated = ShapeKind::T.shape().rotate();
        assert_eq!(bits(&rotated), vec![vec![1, 0], vec![1, 1], vec![1, 0]]);
    }

    #[test]
    fn rotating_i_stands_it_upright() {
        let rotated = rotate(&ShapeKind::I.shape());
        assert_eq!((rotated.height(), rotated.width()), (4, 1));
        assert_eq!(rotated.name(), "I");
    }

    #[test]
    fn rotate_leaves_input_untouched() {
        let original = ShapeKind::L.shape();
        let copy = original.clone();
        let _ = original.rotate();
        assert_eq!(original, copy);
    }

    #[test]
    fn new_rejects_empty_and_ragged_matrices() {
        assert_eq!(
            Shape::new("x", vec![]),
            Err(GameError::EmptyShape { name: "x" })
        );
        assert_eq!(
            Shape::new("x", vec![vec![]]),
            Err(GameError::EmptyShape { name: "x" })
        );
        assert_eq!(
            Shape::new("x", vec![vec![true, true], vec![true]]),
            Err(GameError::RaggedShape { name: "x", row: 1, expected: 2, found: 1 })
        );
    }

    #[test]
    fn library_rejects_empty_catalog() {
        assert_eq!(ShapeLibrary::new(Vec::new()).unwrap_err(), GameError::EmptyCatalog);
    }

    #[test]
    fn random_shape_reaches_every_catalog_entry() {
        let library = ShapeLibrary::standard();
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = [false; 7];
        for _ in 0..500 {
            let shape = library.random_shape(&mut rng);
            let index = ShapeKind::ALL
                .iter()
                .position(|kind| kind.name() == shape.name())
                .unwrap();
            seen[index] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn single_shape_library_always_returns_it() {
        let library = ShapeLibrary::new(vec![ShapeKind::O.shape()]).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..10 {
            assert_eq!(library.random_shape(&mut rng), ShapeKind::O.shape());
        }
    }
}
