// patterns.rs - Classic Life patterns that can be stamped onto a grid

use crate::cell::Cell;
use crate::grid::Grid;

/// Live cells as `(row, col)` offsets from the pattern's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],
}

pub const BLOCK: Pattern = Pattern {
    name: "Block",
    cells: &[(0, 0), (0, 1), (1, 0), (1, 1)],
};

pub const BLINKER: Pattern = Pattern {
    name: "Blinker",
    cells: &[(0, 0), (0, 1), (0, 2)],
};

pub const GLIDER: Pattern = Pattern {
    name: "Glider",
    cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
};

/// Sets the pattern's cells alive with its corner at column `x`, row `y`,
/// wrapping across the grid edges. Other cells are left untouched.
pub fn stamp(grid: &mut Grid, pattern: &Pattern, x: usize, y: usize) {
    let (width, height) = (grid.width(), grid.height());
    for &(row, col) in pattern.cells {
        grid.set((x + col) % width, (y + row) % height, Cell::Alive);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stamping_wraps_across_the_seam() {
        let mut grid = Grid::new(5, 5).unwrap();
        stamp(&mut grid, &BLOCK, 4, 4);
        for (x, y) in [(4, 4), (0, 4), (4, 0), (0, 0)] {
            assert!(grid.get(x, y).is_alive(), "({x}, {y})");
        }
        assert_eq!(grid.population(), 4);
    }
}
