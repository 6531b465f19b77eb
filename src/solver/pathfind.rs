// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Breadth-first reachability over the plan grid.
//!
//! Both queries respect group ownership: a cell owned by some group is only
//! traversable for that group. Unreachability is a normal result, reported as
//! an empty path, never an error.

use crate::grid::{Cell, CellType, Grid};
use crate::solution::{GroupId, Solution};
use std::collections::{BTreeMap, BTreeSet, VecDeque};

/// Whether `cell` may be stepped on: inside the expanded bounding box, not a
/// blocker, and either unowned or owned by `owner`.
fn traversable(grid: &Grid, solution: &Solution<'_>, owner: Option<GroupId>, cell: Cell) -> bool {
    grid.is_in_bounds(cell)
        && grid.get(cell) != CellType::Blocker
        && match solution.group_at(cell) {
            None => true,
            Some(id) => Some(id) == owner,
        }
}

/// Shortest path from `start` to `goal`, both inclusive, or an empty vector
/// when the goal is unreachable.
///
/// Breadth-first over 4-connected neighbors, so the result is shortest in
/// hop count; neighbors are explored left, right, down, up, which fixes
/// which of several equally short paths is returned.
pub fn shortest_path(
    grid: &Grid,
    solution: &Solution<'_>,
    start: Cell,
    goal: Cell,
    owner: Option<GroupId>,
) -> Vec<Cell> {
    let mut parents: BTreeMap<Cell, Cell> = BTreeMap::new();
    let mut visited: BTreeSet<Cell> = BTreeSet::from([start]);
    let mut queue: VecDeque<Cell> = VecDeque::from([start]);

    while let Some(cell) = queue.pop_front() {
        if cell == goal {
            let mut path = vec![cell];
            let mut current = cell;
            while let Some(&parent) = parents.get(&current) {
                path.push(parent);
                current = parent;
            }
            path.reverse();
            return path;
        }
        for neighbor in cell.neighbors() {
            if traversable(grid, solution, owner, neighbor) && visited.insert(neighbor) {
                parents.insert(neighbor, cell);
                queue.push_back(neighbor);
            }
        }
    }

    Vec::new()
}

/// Mean breadth-first hop distance from `from` to every reachable unowned,
/// non-blocker, in-bounds cell.
///
/// Ring-by-ring flood fill; the origin itself is counted at distance 0, so
/// the denominator is never zero. This is the isolation measure driving seed
/// selection and frontier ordering in the partition engine.
pub fn average_distance(grid: &Grid, solution: &Solution<'_>, from: Cell) -> f64 {
    let mut total = 0.0;
    let mut count = 0usize;
    let mut distance = 0usize;
    let mut visited: BTreeSet<Cell> = BTreeSet::new();
    let mut ring: BTreeSet<Cell> = BTreeSet::from([from]);

    while !ring.is_empty() {
        total += (distance * ring.len()) as f64;
        count += ring.len();
        visited.extend(ring.iter().copied());

        ring = ring
            .iter()
            .flat_map(|cell| cell.neighbors())
            .filter(|&n| !visited.contains(&n) && traversable(grid, solution, None, n))
            .collect();
        distance += 1;
    }

    total / count as f64
}
