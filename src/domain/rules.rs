//! Rules engine: B3/S23 on a bounded grid.
//!
//! Edges do not wrap. Positions outside the grid are never counted as
//! neighbors, so edge cells see at most 5 and corners at most 3.

use super::Grid;

#[rustfmt::skip]
const OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
];

/// Count live neighbors inside the 3x3 window around (row, col)
pub fn live_neighbors(grid: &Grid, row: usize, col: usize) -> u8 {
    OFFSETS
        .iter()
        .filter_map(|&(dr, dc)| {
            let r = row.checked_add_signed(dr)?;
            let c = col.checked_add_signed(dc)?;
            grid.get(r, c)
        })
        .filter(|cell| cell.is_alive())
        .count() as u8
}

/// Pure generation step - returns a new grid, input is left untouched
pub fn step(grid: &Grid) -> Grid {
    grid.map(|row, col, cell| cell.evolve(live_neighbors(grid, row, col)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Cell;

    fn grid_with(rows: usize, cols: usize, alive: &[(usize, usize)]) -> Grid {
        let mut grid = Grid::new(rows, cols);
        for &(row, col) in alive {
            grid.set(row, col, Cell::Alive).unwrap();
        }
        grid
    }

    fn alive_positions(grid: &Grid) -> Vec<(usize, usize)> {
        grid.iter_cells()
            .filter(|(_, _, cell)| cell.is_alive())
            .map(|(row, col, _)| (row, col))
            .collect()
    }

    #[test]
    fn test_empty_grid_stays_empty() {
        let grid = Grid::new(8, 8);
        assert_eq!(step(&step(&grid)), grid);
    }

    #[test]
    fn test_lonely_cell_dies() {
        let grid = grid_with(5, 5, &[(2, 2)]);
        assert_eq!(step(&grid).population(), 0);
    }

    #[test]
    fn test_block_is_still_life() {
        let grid = grid_with(4, 4, &[(1, 1), (1, 2), (2, 1), (2, 2)]);
        assert_eq!(step(&grid), grid);
    }

    #[test]
    fn test_block_in_corner_is_still_life() {
        let grid = grid_with(2, 2, &[(0, 0), (0, 1), (1, 0), (1, 1)]);
        assert_eq!(step(&grid), grid);
    }

    #[test]
    fn test_blinker_oscillates() {
        let horizontal = grid_with(5, 5, &[(2, 1), (2, 2), (2, 3)]);
        let vertical = step(&horizontal);
        assert_eq!(alive_positions(&vertical), vec![(1, 2), (2, 2), (3, 2)]);
        assert_eq!(step(&vertical), horizontal);
    }

    #[test]
    fn test_step_does_not_mutate_input() {
        let grid = grid_with(5, 5, &[(2, 1), (2, 2), (2, 3)]);
        let copy = grid.clone();
        let _ = step(&grid);
        assert_eq!(grid, copy);
    }

    #[test]
    fn test_edges_do_not_wrap() {
        // On a torus the cells at column 0 and column 4 would be neighbors
        let grid = grid_with(3, 5, &[(0, 4), (1, 4), (2, 4)]);
        assert_eq!(live_neighbors(&grid, 1, 0), 0);
        let next = step(&grid);
        assert_eq!(alive_positions(&next), vec![(1, 3), (1, 4)]);
    }

    #[test]
    fn test_corner_neighbor_count() {
        let grid = grid_with(3, 3, &[(0, 1), (1, 0), (1, 1), (2, 2)]);
        assert_eq!(live_neighbors(&grid, 0, 0), 3);
        assert_eq!(live_neighbors(&grid, 2, 2), 1);
        assert_eq!(live_neighbors(&grid, 1, 1), 3);
    }

    #[test]
    fn test_birth_at_corner() {
        let grid = grid_with(3, 3, &[(0, 1), (1, 0), (1, 1)]);
        assert_eq!(step(&grid).get(0, 0), Some(Cell::Alive));
    }
}
