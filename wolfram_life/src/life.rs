// life.rs - Conway's Game of Life below the seeded top row

use crate::cell::Cell;
use crate::grid::Grid;

/// B3/S23.
pub fn life_rule(current: Cell, count: u8) -> Cell {
    match (current, count) {
        (Cell::Alive, 2) | (Cell::Alive, 3) => Cell::Alive,   // Survival
        (Cell::Dead, 3)                     => Cell::Alive,   // Birth
        _                                   => Cell::Dead,    // Death or stays dead
    }
}

/// Live cells among the 8 toroidal neighbors of `(x, y)`.
pub fn live_neighbors(grid: &Grid, x: usize, y: usize) -> u8 {
    let (x, y) = (x as isize, y as isize);
    let neighbors = [
        (x-1,y-1),(x,y-1),(x+1,y-1),(x-1,y),
        (x+1,y),(x-1,y+1),(x,y+1),(x+1,y+1),
    ];
    neighbors
        .iter()
        .filter(|&&(nx, ny)| grid.get_wrapped(nx, ny).is_alive())
        .count() as u8
}

/// Evolves `current` into `next`.
///
/// Row 0 is copied through unchanged; it belongs to the Wolfram automaton.
/// Every count reads `current` only, so no updated cell leaks into a
/// neighbor's count. `next` must have the same dimensions as `current`.
pub fn next_grid_into(current: &Grid, next: &mut Grid) {
    debug_assert_eq!((current.width(), current.height()), (next.width(), next.height()));
    next.row_mut(0).copy_from_slice(current.row(0));
    for y in 1..current.height() {
        for x in 0..current.width() {
            let count = live_neighbors(current, x, y);
            next.set(x, y, life_rule(current.get(x, y), count));
        }
    }
}

/// Allocating form of [`next_grid_into`].
pub fn next_grid(current: &Grid) -> Grid {
    let mut next = current.clone();
    next_grid_into(current, &mut next);
    next
}
