// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Region-growing partition engine.
//!
//! Assigns every growth cell, plus connector cells where needed, to groups of
//! at most [`PUSH_LIMIT`](crate::solver::PUSH_LIMIT) connected cells. Seeds
//! are chosen most-isolated-first so that awkward outliers are grouped while
//! plenty of free cells remain around them; a small random jitter on the seed
//! score breaks ties and keeps repeated trials statistically independent.
//!
//! Isolation scores are recomputed in full before every seed pick. That is
//! O(cells²) per solve, which is intentional: plan grids are small and the
//! fidelity of the ordering matters more than the constant.

use crate::grid::{Cell, Grid};
use crate::solution::Solution;
use crate::solver::{pathfind, PUSH_LIMIT};
use log::trace;
use rand::Rng;
use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet, BinaryHeap};

/// Frontier entry: max-heap by score, ties broken toward the smaller cell so
/// seeded runs are reproducible.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Frontier {
    score: f64,
    cell: Cell,
}

impl Eq for Frontier {}

impl Ord for Frontier {
    fn cmp(&self, other: &Self) -> Ordering {
        self.score
            .total_cmp(&other.score)
            .then_with(|| other.cell.cmp(&self.cell))
    }
}

impl PartialOrd for Frontier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Isolation score of every unassigned growth and connector cell under the
/// current ownership state.
fn isolation_scores(
    grid: &Grid,
    solution: &Solution<'_>,
    unassigned: &BTreeSet<Cell>,
    connectors: &BTreeSet<Cell>,
) -> BTreeMap<Cell, f64> {
    unassigned
        .iter()
        .chain(connectors.iter())
        .map(|&cell| (cell, pathfind::average_distance(grid, solution, cell)))
        .collect()
}

/// Partition all growth cells of `grid` into groups.
///
/// The returned solution covers every growth cell; connector cells that were
/// not claimed stay unassigned. Materials are not assigned here.
pub fn partition<'a, R: Rng>(grid: &'a Grid, rng: &mut R) -> Solution<'a> {
    let mut solution = Solution::new(grid);
    let mut unassigned: BTreeSet<Cell> = grid.growths().collect();
    let mut connectors: BTreeSet<Cell> = grid.connectors();

    while !unassigned.is_empty() {
        let scores = isolation_scores(grid, &solution, &unassigned, &connectors);

        let seed = unassigned
            .iter()
            .map(|&cell| Frontier {
                score: scores.get(&cell).copied().unwrap_or(f64::NEG_INFINITY)
                    + rng.gen_range(-1.0..=1.0),
                cell,
            })
            .max();
        let Some(Frontier { cell: seed, .. }) = seed else {
            break;
        };
        trace!(
            "seed {} (isolation {:.2})",
            seed,
            scores.get(&seed).copied().unwrap_or(f64::NEG_INFINITY)
        );

        let group_id = solution.push_empty_group();
        let mut queue = BinaryHeap::new();
        let mut seen = BTreeSet::from([seed]);
        queue.push(Frontier {
            score: scores.get(&seed).copied().unwrap_or(f64::NEG_INFINITY),
            cell: seed,
        });

        while solution.group(group_id).len() < PUSH_LIMIT {
            let Some(Frontier { cell, .. }) = queue.pop() else {
                break;
            };

            // Reserve connectors for linking groups rather than padding the
            // final slot of this one.
            if solution.group(group_id).len() == PUSH_LIMIT - 1 && connectors.contains(&cell) {
                continue;
            }

            solution.group_mut(group_id).add_member(cell);
            unassigned.remove(&cell);
            connectors.remove(&cell);

            for neighbor in cell.neighbors() {
                if (unassigned.contains(&neighbor) || connectors.contains(&neighbor))
                    && seen.insert(neighbor)
                {
                    queue.push(Frontier {
                        score: scores.get(&neighbor).copied().unwrap_or(f64::NEG_INFINITY),
                        cell: neighbor,
                    });
                }
            }
        }
    }

    solution
}
