// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Integer plan coordinates.

use std::fmt;

/// A cell in the 2D plan.
///
/// Coordinates are unbounded integers. Equality, hashing and ordering are by
/// value; the ordering is (x, y) lexicographic and is used for deterministic
/// iteration and priority tie-breaks throughout the solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn left(self) -> Cell {
        Cell::new(self.x - 1, self.y)
    }

    pub fn right(self) -> Cell {
        Cell::new(self.x + 1, self.y)
    }

    /// The cell one row below (y grows downward).
    pub fn down(self) -> Cell {
        Cell::new(self.x, self.y + 1)
    }

    pub fn up(self) -> Cell {
        Cell::new(self.x, self.y - 1)
    }

    /// The four orthogonal neighbors, in the fixed exploration order
    /// left, right, down, up.
    ///
    /// Every breadth-first traversal in the crate visits neighbors in this
    /// order, so path and partition results are reproducible.
    pub fn neighbors(self) -> [Cell; 4] {
        [self.left(), self.right(), self.down(), self.up()]
    }

    pub fn is_neighbor_of(self, other: Cell) -> bool {
        self.neighbors().contains(&other)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
