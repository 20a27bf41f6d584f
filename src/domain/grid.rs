use rand::Rng;
use thiserror::Error;

use super::Cell;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    #[error("cell ({row}, {col}) is outside the {rows}x{cols} grid")]
    OutOfBounds {
        row: i64,
        col: i64,
        rows: usize,
        cols: usize,
    },
}

/// Grid is a finite, non-wrapping matrix of cells stored row-major.
/// Dimensions are always at least 1x1.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with all cells dead
    pub fn new(rows: usize, cols: usize) -> Self {
        let rows = rows.max(1);
        let cols = cols.max(1);
        Self {
            rows,
            cols,
            cells: vec![Cell::Dead; rows * cols],
        }
    }

    /// Build a grid from row-major cells. Returns `None` when the cell count
    /// does not match the dimensions or a dimension is zero.
    pub fn from_cells(rows: usize, cols: usize, cells: Vec<Cell>) -> Option<Self> {
        (rows > 0 && cols > 0 && rows.checked_mul(cols) == Some(cells.len()))
            .then_some(Self { rows, cols, cells })
    }

    /// Each cell independently alive with probability 0.5
    pub fn randomize<R: Rng + ?Sized>(rows: usize, cols: usize, rng: &mut R) -> Self {
        let mut grid = Self::new(rows, cols);
        grid.cells
            .iter_mut()
            .for_each(|cell| *cell = Cell::from(rng.random_bool(0.5)));
        grid
    }

    /// New grid of the requested size keeping the overlapping top-left
    /// rectangle of `self`. Anchored at (0, 0), never centered.
    pub fn resize(&self, rows: usize, cols: usize) -> Self {
        let mut resized = Self::new(rows, cols);
        let keep_rows = self.rows.min(resized.rows);
        let keep_cols = self.cols.min(resized.cols);
        for row in 0..keep_rows {
            let src = row * self.cols;
            let dst = row * resized.cols;
            resized.cells[dst..dst + keep_cols].copy_from_slice(&self.cells[src..src + keep_cols]);
        }
        resized
    }

    pub const fn rows(&self) -> usize {
        self.rows
    }

    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// (rows, cols)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    const fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// Get cell at position (with bounds checking)
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        (row < self.rows && col < self.cols).then(|| self.cells[self.index(row, col)])
    }

    /// Set cell at position; out-of-range coordinates leave the grid untouched
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> Result<(), GridError> {
        if row >= self.rows || col >= self.cols {
            return Err(GridError::OutOfBounds {
                row: row as i64,
                col: col as i64,
                rows: self.rows,
                cols: self.cols,
            });
        }
        let idx = self.index(row, col);
        self.cells[idx] = cell;
        Ok(())
    }

    /// Number of alive cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Same-shaped grid where every cell is produced by `f(row, col, cell)`
    pub fn map(&self, mut f: impl FnMut(usize, usize, Cell) -> Cell) -> Self {
        let cells = self.iter_cells().map(|(row, col, cell)| f(row, col, cell)).collect();
        Self {
            rows: self.rows,
            cols: self.cols,
            cells,
        }
    }

    /// Row-major view of all cells
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterate over all cells with their (row, col) positions
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, &cell)| (idx / self.cols, idx % self.cols, cell))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    fn checkerboard(rows: usize, cols: usize) -> Grid {
        let mut grid = Grid::new(rows, cols);
        for row in 0..rows {
            for col in 0..cols {
                grid.set(row, col, Cell::from((row + col) % 2 == 0)).unwrap();
            }
        }
        grid
    }

    #[test]
    fn test_new_grid_is_dead() {
        let grid = Grid::new(4, 7);
        assert_eq!(grid.dimensions(), (4, 7));
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn test_zero_dimensions_are_raised_to_one() {
        assert_eq!(Grid::new(0, 0).dimensions(), (1, 1));
    }

    #[test]
    fn test_set_and_get() {
        let mut grid = Grid::new(3, 5);
        grid.set(2, 4, Cell::Alive).unwrap();
        assert_eq!(grid.get(2, 4), Some(Cell::Alive));
        assert_eq!(grid.get(3, 0), None);
        assert_eq!(grid.population(), 1);
    }

    #[test]
    fn test_set_out_of_bounds_is_rejected() {
        let mut grid = Grid::new(3, 3);
        let before = grid.clone();
        assert_eq!(
            grid.set(3, 1, Cell::Alive),
            Err(GridError::OutOfBounds { row: 3, col: 1, rows: 3, cols: 3 })
        );
        assert!(grid.set(0, 9, Cell::Alive).is_err());
        assert_eq!(grid, before);
    }

    #[test]
    fn test_identity_resize() {
        let grid = checkerboard(6, 9);
        assert_eq!(grid.resize(6, 9), grid);
    }

    #[test]
    fn test_resize_is_top_left_anchored() {
        let mut grid = Grid::new(2, 2);
        grid.set(0, 0, Cell::Alive).unwrap();
        grid.set(1, 1, Cell::Alive).unwrap();

        let grown = grid.resize(4, 5);
        assert_eq!(grown.dimensions(), (4, 5));
        assert_eq!(grown.get(0, 0), Some(Cell::Alive));
        assert_eq!(grown.get(1, 1), Some(Cell::Alive));
        assert_eq!(grown.population(), 2);

        let shrunk = grown.resize(1, 3);
        assert_eq!(shrunk.get(0, 0), Some(Cell::Alive));
        assert_eq!(shrunk.population(), 1);
    }

    #[test]
    fn test_grow_then_shrink_recovers_original() {
        let grid = checkerboard(5, 4);
        let mut grown = grid.resize(9, 11);
        // Cells outside the original area must not leak back
        grown.set(8, 10, Cell::Alive).unwrap();
        grown.set(0, 6, Cell::Alive).unwrap();
        assert_eq!(grown.resize(5, 4), grid);
    }

    #[test]
    fn test_randomize_is_deterministic_for_a_seed() {
        let a = Grid::randomize(20, 30, &mut StdRng::seed_from_u64(7));
        let b = Grid::randomize(20, 30, &mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
        assert_eq!(a.dimensions(), (20, 30));
    }

    #[test]
    fn test_randomize_is_roughly_half_alive() {
        let grid = Grid::randomize(100, 100, &mut StdRng::seed_from_u64(42));
        let population = grid.population();
        assert!((4_000..=6_000).contains(&population), "population {population}");
    }

    #[test]
    fn test_from_cells_validates_length() {
        assert!(Grid::from_cells(2, 2, vec![Cell::Dead; 4]).is_some());
        assert!(Grid::from_cells(2, 2, vec![Cell::Dead; 3]).is_none());
        assert!(Grid::from_cells(0, 2, Vec::new()).is_none());
    }

    #[test]
    fn test_iter_cells_positions() {
        let mut grid = Grid::new(2, 3);
        grid.set(1, 2, Cell::Alive).unwrap();
        let alive: Vec<_> = grid
            .iter_cells()
            .filter(|(_, _, cell)| cell.is_alive())
            .map(|(row, col, _)| (row, col))
            .collect();
        assert_eq!(alive, vec![(1, 2)]);
    }
}
