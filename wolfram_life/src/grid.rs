// grid.rs - Fixed-size toroidal grid of cells

use std::fmt;

use crate::cell::Cell;
use crate::error::{AutomatonError, Result};

// Reference board size
pub const GRID_WIDTH: usize = 200;
pub const GRID_HEIGHT: usize = 120;

/// Row-major `height x width` board. Row 0 is the top row.
///
/// Dimensions never change after construction; every row always holds
/// exactly `width` cells.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Creates an all-dead grid.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(AutomatonError::InvalidDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            cells: vec![Cell::Dead; width * height],
        })
    }

    /// Builds a grid from a boolean matrix, one inner vector per row.
    pub fn from_bools(rows: &[Vec<bool>]) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        let mut grid = Self::new(width, height)?;
        for (y, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(AutomatonError::InvalidDimensions { width: row.len(), height });
            }
            for (x, &alive) in row.iter().enumerate() {
                grid.cells[y * width + x] = alive.into();
            }
        }
        Ok(grid)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Out-of-range coordinates read as dead.
    pub fn get(&self, x: usize, y: usize) -> Cell {
        if x < self.width && y < self.height {
            self.cells[y * self.width + x]
        } else {
            Cell::Dead
        }
    }

    /// Out-of-range writes are ignored.
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) {
        if x < self.width && y < self.height {
            self.cells[y * self.width + x] = cell;
        }
    }

    /// Reads with toroidal wrap-around on both axes.
    pub fn get_wrapped(&self, x: isize, y: isize) -> Cell {
        let x = x.rem_euclid(self.width as isize) as usize;
        let y = y.rem_euclid(self.height as isize) as usize;
        self.cells[y * self.width + x]
    }

    pub fn row(&self, y: usize) -> &[Cell] {
        let start = y * self.width;
        &self.cells[start..start + self.width]
    }

    pub fn row_mut(&mut self, y: usize) -> &mut [Cell] {
        let start = y * self.width;
        &mut self.cells[start..start + self.width]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks_exact(self.width)
    }

    pub fn clear(&mut self) {
        self.cells.fill(Cell::Dead);
    }

    /// Moves every row down by one. The old bottom row lands in row 0 and is
    /// expected to be overwritten by the caller.
    pub fn scroll_down(&mut self) {
        self.cells.rotate_right(self.width);
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Boolean matrix for renderers, one inner vector per row.
    pub fn to_bools(&self) -> Vec<Vec<bool>> {
        self.rows()
            .map(|row| row.iter().map(|&cell| cell.is_alive()).collect())
            .collect()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for &cell in row {
                f.write_str(if cell.is_alive() { "#" } else { "." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_dimensions_are_rejected() {
        assert_eq!(
            Grid::new(0, 5),
            Err(AutomatonError::InvalidDimensions { width: 0, height: 5 })
        );
        assert!(Grid::new(3, 0).is_err());
        assert!(Grid::from_bools(&[]).is_err());
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let rows = vec![vec![true, false], vec![true]];
        assert!(matches!(
            Grid::from_bools(&rows),
            Err(AutomatonError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn bools_survive_a_trip_through_the_grid() {
        let rows = vec![vec![true, false, false], vec![false, true, true]];
        let grid = Grid::from_bools(&rows).unwrap();
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.population(), 3);
        assert_eq!(grid.to_bools(), rows);
        assert_eq!(grid.to_string(), "#..\n.##\n");
    }

    #[test]
    fn out_of_range_access_is_harmless() {
        let mut grid = Grid::new(4, 4).unwrap();
        grid.set(10, 1, Cell::Alive);
        assert_eq!(grid.population(), 0);
        assert_eq!(grid.get(4, 0), Cell::Dead);
    }

    #[test]
    fn wrapped_reads_cross_both_seams() {
        let mut grid = Grid::new(5, 3).unwrap();
        grid.set(4, 2, Cell::Alive);
        assert_eq!(grid.get_wrapped(-1, -1), Cell::Alive);
        assert_eq!(grid.get_wrapped(9, 5), Cell::Alive);
        assert_eq!(grid.get_wrapped(0, 0), Cell::Dead);
    }

    #[test]
    fn scroll_down_moves_rows_and_wraps_the_bottom_row() {
        let mut grid = Grid::from_bools(&[
            vec![true, false],
            vec![false, true],
            vec![true, true],
        ])
        .unwrap();
        grid.scroll_down();
        assert_eq!(grid.to_string(), "##\n#.\n.#\n");
    }
}
