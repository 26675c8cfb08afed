//! Toroidal cell grid and generation snapshots.

use crate::cell::Cell;
use serde::{Deserialize, Serialize};

/// Side length of the square grid
pub const DIM: usize = 32;

/// Wrap a possibly-negative coordinate onto the torus
#[inline]
fn wrap(coord: isize) -> usize {
    coord.rem_euclid(DIM as isize) as usize
}

/// The simulation grid: a fixed DIM x DIM matrix of cells with wrap-around
/// edges. All coordinate arguments are taken modulo DIM, so out-of-range
/// lookups land on the opposite edge instead of failing.
#[derive(Clone, Debug)]
pub struct Grid {
    cells: [[Cell; DIM]; DIM],
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Grid {
    /// Create a grid with every cell in the never-alive state
    pub fn new() -> Self {
        Self {
            cells: [[Cell::dead(); DIM]; DIM],
        }
    }

    /// Get the cell at (row, col), wrapping both axes
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row % DIM][col % DIM]
    }

    /// Set the cell at (row, col). A live cell is always recorded as
    /// having been alive, whatever `ever_alive` was passed.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, alive: bool, ever_alive: bool) {
        self.cells[row % DIM][col % DIM] = Cell {
            alive,
            ever_alive: ever_alive || alive,
        };
    }

    /// Flip the alive state of a single cell, carrying history forward.
    /// Returns the new cell state.
    pub fn toggle(&mut self, row: usize, col: usize) -> Cell {
        let slot = &mut self.cells[row % DIM][col % DIM];
        *slot = slot.advance(!slot.alive);
        *slot
    }

    /// Count live cells among the 8 neighbors of (row, col), wrapping each
    /// axis independently
    pub fn neighbors_alive_count(&self, row: usize, col: usize) -> usize {
        let mut count = 0;
        for dr in -1isize..=1 {
            for dc in -1isize..=1 {
                if dr == 0 && dc == 0 {
                    continue;
                }
                let r = wrap(row as isize + dr);
                let c = wrap(col as isize + dc);
                if self.cells[r][c].alive {
                    count += 1;
                }
            }
        }
        count
    }

    /// Copy the current alive flags into an immutable snapshot
    pub fn snapshot(&self) -> Snapshot {
        let mut alive = [[false; DIM]; DIM];
        for (row, snapshot_row) in alive.iter_mut().enumerate() {
            for (col, flag) in snapshot_row.iter_mut().enumerate() {
                *flag = self.cells[row][col].alive;
            }
        }
        Snapshot { alive }
    }

    /// Commit a computed generation, advancing every cell's history
    pub fn apply(&mut self, next: &Snapshot) {
        for (row, grid_row) in self.cells.iter_mut().enumerate() {
            for (col, cell) in grid_row.iter_mut().enumerate() {
                *cell = cell.advance(next.alive[row][col]);
            }
        }
    }

    /// Reset every cell to the never-alive state. This is the only
    /// operation that clears `ever_alive`.
    pub fn clear(&mut self) {
        self.cells = [[Cell::dead(); DIM]; DIM];
    }

    /// Number of currently live cells
    pub fn alive_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| cell.alive)
            .count()
    }

    /// Number of cells that have been alive since the last clear
    pub fn ever_alive_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| cell.ever_alive)
            .count()
    }

    /// Iterate over rows of cells, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell; DIM]> {
        self.cells.iter()
    }
}

/// Immutable copy of the alive flags at one instant. The transition rule
/// reads only from a snapshot, so every cell of a generation is computed
/// from the same consistent state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    alive: [[bool; DIM]; DIM],
}

impl Default for Snapshot {
    fn default() -> Self {
        Self::empty()
    }
}

impl Snapshot {
    /// An all-dead snapshot
    pub fn empty() -> Self {
        Self {
            alive: [[false; DIM]; DIM],
        }
    }

    /// Build a snapshot from a list of live (row, col) positions
    pub fn from_live_cells(live: &[(usize, usize)]) -> Self {
        let mut snapshot = Self::empty();
        for &(row, col) in live {
            snapshot.set_alive(row, col, true);
        }
        snapshot
    }

    #[inline]
    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        self.alive[row % DIM][col % DIM]
    }

    #[inline]
    pub fn set_alive(&mut self, row: usize, col: usize, alive: bool) {
        self.alive[row % DIM][col % DIM] = alive;
    }

    /// Count live cells among the 8 wrapped neighbors of (row, col)
    pub fn live_neighbors(&self, row: usize, col: usize) -> usize {
        let mut count = 0;
        for dr in -1isize..=1 {
            for dc in -1isize..=1 {
                if dr == 0 && dc == 0 {
                    continue;
                }
                if self.alive[wrap(row as isize + dr)][wrap(col as isize + dc)] {
                    count += 1;
                }
            }
        }
        count
    }

    /// Total live cells in the snapshot
    pub fn live_count(&self) -> usize {
        self.alive
            .iter()
            .flatten()
            .filter(|&&alive| alive)
            .count()
    }
}
