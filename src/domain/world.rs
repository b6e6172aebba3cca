use rand::Rng;
use rustc_hash::FxHashSet;

use super::{Cell, Coord};

/// The set of currently live cells on an unbounded grid.
///
/// Everything not in the set is implicitly dead. Each generation is a
/// brand-new `World`; the previous one is simply dropped, so there is no
/// double-buffering and no history.
#[derive(Clone, Default, PartialEq, Eq, Debug)]
pub struct World {
    cells: FxHashSet<Coord>,
}

impl World {
    /// Create an empty world (every cell dead)
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a world from any collection of coordinates.
    /// Duplicates collapse; insertion order is never observable.
    pub fn from_cells(cells: impl IntoIterator<Item = Coord>) -> Self {
        Self {
            cells: cells.into_iter().collect(),
        }
    }

    /// Populate a bounded `rows x cols` region, each cell independently
    /// alive with probability `density`. The rest of the plane stays dead.
    pub fn random(rows: i64, cols: i64, density: f64, rng: &mut impl Rng) -> Self {
        let mut world = Self::new();
        for row in 0..rows {
            for col in 0..cols {
                if rng.random_bool(density) {
                    world.insert(Coord::new(row, col));
                }
            }
        }
        world
    }

    /// Mark a cell alive
    pub fn insert(&mut self, coord: Coord) {
        self.cells.insert(coord);
    }

    pub fn contains(&self, coord: Coord) -> bool {
        self.cells.contains(&coord)
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterate over all live cells (arbitrary order)
    pub fn cells(&self) -> impl Iterator<Item = Coord> + '_ {
        self.cells.iter().copied()
    }

    /// Count of live cells among the 8 Moore neighbors of `coord`
    fn live_neighbors(&self, coord: Coord) -> u8 {
        coord
            .neighbors()
            .iter()
            .filter(|n| self.cells.contains(n))
            .count() as u8
    }

    /// Compute the next generation.
    ///
    /// Pure transform: a new world is returned, the input is untouched.
    /// Live cells survive on 2 or 3 live neighbors. The only dead cells
    /// that can be born are neighbors of at least one live cell, so those
    /// are the only candidates examined; a cell with zero live neighbors
    /// can never reach the 3 required for birth.
    pub fn step(&self) -> Self {
        let mut next = FxHashSet::default();
        let mut candidates = FxHashSet::default();

        for cell in self.cells() {
            let mut live = 0u8;
            for neighbor in cell.neighbors() {
                if self.cells.contains(&neighbor) {
                    live += 1;
                } else {
                    candidates.insert(neighbor);
                }
            }
            if Cell::Alive.evolve(live).is_alive() {
                next.insert(cell);
            }
        }

        for &candidate in &candidates {
            if Cell::Dead.evolve(self.live_neighbors(candidate)).is_alive() {
                next.insert(candidate);
            }
        }

        Self { cells: next }
    }

    /// Shift every live cell by the given deltas
    pub fn translate(&self, drow: i64, dcol: i64) -> Self {
        Self {
            cells: self.cells().map(|c| c.offset(drow, dcol)).collect(),
        }
    }
}

impl FromIterator<Coord> for World {
    fn from_iter<T: IntoIterator<Item = Coord>>(iter: T) -> Self {
        Self::from_cells(iter)
    }
}
