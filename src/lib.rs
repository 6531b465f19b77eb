// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Harvest planning for surface growth clusters.
//!
//! Plans how to harvest point-like growths projected from a roughly
//! spherical formation onto a 2D grid, under two mechanical constraints:
//! growths are extracted in connected groups of at most [`PUSH_LIMIT`]
//! cells, and adjacent groups must be tagged with different adhesive
//! [`Material`]s so simultaneous actuation never cross-triggers a neighbor.
//!
//! # Pipeline
//!
//! 1. **Partition** ([`solver::partition`]): region-growing heuristic that
//!    assigns every growth cell (plus connector cells where needed) to a
//!    bounded, connected [`Group`], seeding from the most isolated cells.
//! 2. **Material assignment** ([`solver::materials`]): backtracking proper
//!    coloring of the group-adjacency graph over the four materials.
//! 3. **Orchestration** ([`Solver`]): N independent randomized trials run in
//!    parallel over the shared read-only [`Grid`]; the best [`Solution`] by
//!    coverage (then fewest groups) is kept.
//!
//! Producing the grid from 3D geometry, mapping plan cells back to world
//! coordinates, and physically placing the adhesives are external concerns;
//! this crate consumes a plain cell mapping and emits (cell, material)
//! assignments.
//!
//! # Example
//!
//! ```
//! use harvest_planner::{Grid, Solver, PUSH_LIMIT};
//!
//! let grid = Grid::from_text(concat!(". . . \n", ". . . \n", ". . . \n"));
//! let solution = Solver::new().with_seed(7).solve(&grid).unwrap();
//!
//! assert!(solution.violations().is_empty());
//! assert_eq!(solution.coverage(), 1.0);
//! assert!(solution.groups().iter().all(|g| g.len() <= PUSH_LIMIT));
//! ```

pub mod grid;
pub mod material;
pub mod solution;
pub mod solver;

// Re-export commonly used types
pub use grid::{Cell, CellType, Grid};
pub use material::{Material, MaterialFamily};
pub use solution::{Group, GroupId, Solution, Violation};
pub use solver::{SolveError, Solver, PUSH_LIMIT};
