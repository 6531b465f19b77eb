// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The 2D plan grid consumed by the solver.
//!
//! A [`Grid`] is an immutable mapping from [`Cell`] to [`CellType`], produced
//! by an external projection collaborator or parsed from the textual batch
//! format (see [`Grid::parse_batch`]). The solver never mutates it; every
//! solve attempt shares the same read-only grid.

pub mod cell;
pub mod cell_type;
mod text;

pub use cell::Cell;
pub use cell_type::CellType;
pub use text::batch_to_text;

use std::collections::{BTreeMap, BTreeSet};
use std::ops::RangeInclusive;

/// Immutable mapping from cell to cell type.
///
/// Cells without an explicit entry read as [`CellType::Empty`]. The bounding
/// box is taken over the explicit keys (explicit Empty entries included); the
/// in-bounds test expands it by one cell in each direction so that routing
/// and grouping may slip just outside the outermost growths.
///
/// The backing map is ordered, so all iteration over the grid is
/// deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: BTreeMap<Cell, CellType>,
    x_range: RangeInclusive<i32>,
    y_range: RangeInclusive<i32>,
}

impl Grid {
    pub fn new(cells: BTreeMap<Cell, CellType>) -> Self {
        let (x_range, y_range) = if cells.is_empty() {
            (0..=0, 0..=0)
        } else {
            let (mut min_x, mut min_y) = (i32::MAX, i32::MAX);
            let (mut max_x, mut max_y) = (i32::MIN, i32::MIN);
            for cell in cells.keys() {
                min_x = min_x.min(cell.x);
                max_x = max_x.max(cell.x);
                min_y = min_y.min(cell.y);
                max_y = max_y.max(cell.y);
            }
            (min_x..=max_x, min_y..=max_y)
        };
        Self {
            cells,
            x_range,
            y_range,
        }
    }

    /// The cell type at `cell`; undefined cells read as Empty.
    pub fn get(&self, cell: Cell) -> CellType {
        self.cells.get(&cell).copied().unwrap_or(CellType::Empty)
    }

    /// Bounding box of explicit keys on the x axis (0..=0 when the grid has
    /// no explicit cells).
    pub fn x_range(&self) -> RangeInclusive<i32> {
        self.x_range.clone()
    }

    pub fn y_range(&self) -> RangeInclusive<i32> {
        self.y_range.clone()
    }

    /// Whether `cell` lies within the bounding box expanded by one cell in
    /// each direction.
    pub fn is_in_bounds(&self, cell: Cell) -> bool {
        cell.x >= self.x_range.start() - 1
            && cell.x <= self.x_range.end() + 1
            && cell.y >= self.y_range.start() - 1
            && cell.y <= self.y_range.end() + 1
    }

    /// All explicit cells, in deterministic (x-major) order.
    pub fn cells(&self) -> impl Iterator<Item = (Cell, CellType)> + '_ {
        self.cells.iter().map(|(&c, &t)| (c, t))
    }

    /// All growth cells, in deterministic order.
    pub fn growths(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells()
            .filter(|&(_, t)| t == CellType::Growth)
            .map(|(c, _)| c)
    }

    /// All blocker cells, in deterministic order.
    pub fn blockers(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells()
            .filter(|&(_, t)| t == CellType::Blocker)
            .map(|(c, _)| c)
    }

    pub fn growth_count(&self) -> usize {
        self.growths().count()
    }

    /// Connector cells: Empty cells 4-adjacent to at least two growth cells.
    ///
    /// Connectors are the only non-growth cells a group may claim; they exist
    /// to keep otherwise-disjoint growths of one group connected.
    pub fn connectors(&self) -> BTreeSet<Cell> {
        let mut connectors = BTreeSet::new();
        for growth in self.growths() {
            for candidate in growth.neighbors() {
                if self.get(candidate) != CellType::Empty {
                    continue;
                }
                let growth_neighbors = candidate
                    .neighbors()
                    .iter()
                    .filter(|&&n| self.get(n) == CellType::Growth)
                    .count();
                if growth_neighbors >= 2 {
                    connectors.insert(candidate);
                }
            }
        }
        connectors
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(BTreeMap::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_of(entries: &[(i32, i32, CellType)]) -> Grid {
        Grid::new(
            entries
                .iter()
                .map(|&(x, y, t)| (Cell::new(x, y), t))
                .collect(),
        )
    }

    #[test]
    fn test_undefined_cells_read_empty() {
        let grid = grid_of(&[(0, 0, CellType::Growth)]);
        assert_eq!(grid.get(Cell::new(5, 5)), CellType::Empty);
        assert_eq!(grid.get(Cell::new(0, 0)), CellType::Growth);
    }

    #[test]
    fn test_bounds_expand_by_one() {
        let grid = grid_of(&[(1, 2, CellType::Growth), (4, 6, CellType::Empty)]);
        assert_eq!(grid.x_range(), 1..=4);
        assert_eq!(grid.y_range(), 2..=6);
        assert!(grid.is_in_bounds(Cell::new(0, 1)));
        assert!(grid.is_in_bounds(Cell::new(5, 7)));
        assert!(!grid.is_in_bounds(Cell::new(-1, 3)));
        assert!(!grid.is_in_bounds(Cell::new(3, 8)));
    }

    #[test]
    fn test_empty_grid_bounds() {
        let grid = Grid::default();
        assert_eq!(grid.x_range(), 0..=0);
        assert_eq!(grid.y_range(), 0..=0);
        assert!(grid.is_in_bounds(Cell::new(1, -1)));
        assert!(!grid.is_in_bounds(Cell::new(2, 0)));
    }

    #[test]
    fn test_connectors_require_two_growth_neighbors() {
        // Two growths in an L; the two cells touching both are connectors.
        let grid = grid_of(&[(0, 0, CellType::Growth), (1, 1, CellType::Growth)]);
        let connectors = grid.connectors();
        assert_eq!(
            connectors.into_iter().collect::<Vec<_>>(),
            vec![Cell::new(0, 1), Cell::new(1, 0)]
        );
    }

    #[test]
    fn test_blocker_is_never_a_connector() {
        let grid = grid_of(&[
            (0, 0, CellType::Growth),
            (1, 1, CellType::Growth),
            (1, 0, CellType::Blocker),
        ]);
        let connectors = grid.connectors();
        assert_eq!(
            connectors.into_iter().collect::<Vec<_>>(),
            vec![Cell::new(0, 1)]
        );
    }

    #[test]
    fn test_isolated_growth_has_no_connectors() {
        let grid = grid_of(&[(0, 0, CellType::Growth)]);
        assert!(grid.connectors().is_empty());
    }
}
