// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Material assignment over the group-adjacency graph.
//!
//! Two groups are adjacent iff some pair of their member cells are
//! 4-neighbors. The assigner gives every group a material such that adjacent
//! groups never match: groups are visited in creation order and candidates
//! are tried in [`PREFERRED_ORDER`], skipping materials already held by an
//! assigned neighbor, backtracking on dead ends.
//!
//! The search uses an explicit assignment array and choice cursors rather
//! than recursion, but visits candidates in exactly the order the recursive
//! formulation would.

use crate::material::PREFERRED_ORDER;
use crate::solution::{GroupId, Solution};
use crate::solver::statistics::{Counter, Statistics};
use crate::solver::SolveError;
use log::trace;

/// Assign one material per group so that no two adjacent groups match.
///
/// The adjacency graph of connected regions of a planar grid is planar, so
/// by the four color theorem a proper assignment over the four materials
/// always exists. Exhausting the search therefore signals a corrupted group
/// structure upstream (a partition engine defect, not a property of the
/// input) and is reported as [`SolveError::Coloring`] — distinct from
/// ordinary "no path" or structural-violation results, which are values.
pub fn assign_materials(
    solution: &mut Solution<'_>,
    statistics: &mut Statistics,
) -> Result<(), SolveError> {
    let group_count = solution.group_count();
    let neighbors: Vec<Vec<usize>> = (0..group_count)
        .map(|index| {
            solution
                .neighbors_of(GroupId(index))
                .into_iter()
                .map(|id| id.0)
                .collect()
        })
        .collect();

    let mut assigned = vec![None; group_count];
    // cursor[depth] indexes the next candidate in PREFERRED_ORDER.
    let mut cursor = vec![0usize; group_count];
    let mut depth = 0;

    while depth < group_count {
        let mut placed = false;
        while cursor[depth] < PREFERRED_ORDER.len() {
            let candidate = PREFERRED_ORDER[cursor[depth]];
            cursor[depth] += 1;
            let conflict = neighbors[depth]
                .iter()
                .any(|&other| assigned[other] == Some(candidate));
            if !conflict {
                assigned[depth] = Some(candidate);
                placed = true;
                break;
            }
        }

        if placed {
            depth += 1;
            if depth < group_count {
                cursor[depth] = 0;
            }
        } else {
            assigned[depth] = None;
            statistics.increment(Counter::ColoringBacktracks);
            trace!("coloring dead end at group {}", depth);
            if depth == 0 {
                return Err(SolveError::Coloring);
            }
            depth -= 1;
            assigned[depth] = None;
        }
    }

    for (index, material) in assigned.into_iter().enumerate() {
        if let Some(material) = material {
            solution.group_mut(GroupId(index)).set_material(material);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{Cell, CellType, Grid};
    use crate::material::Material;
    use std::collections::BTreeMap;

    fn growth_grid(cells: &[(i32, i32)]) -> Grid {
        Grid::new(
            cells
                .iter()
                .map(|&(x, y)| (Cell::new(x, y), CellType::Growth))
                .collect::<BTreeMap<_, _>>(),
        )
    }

    fn add_group(solution: &mut Solution<'_>, cells: &[(i32, i32)]) -> GroupId {
        let id = solution.push_empty_group();
        for &(x, y) in cells {
            solution.group_mut(id).add_member(Cell::new(x, y));
        }
        id
    }

    #[test]
    fn test_isolated_group_gets_first_preference() {
        let grid = growth_grid(&[(0, 0)]);
        let mut solution = Solution::new(&grid);
        let id = add_group(&mut solution, &[(0, 0)]);
        assign_materials(&mut solution, &mut Statistics::new()).unwrap();
        assert_eq!(solution.group(id).material(), Some(PREFERRED_ORDER[0]));
    }

    #[test]
    fn test_chain_of_groups_alternates_base_variants() {
        // Three groups in a row: first-fit yields Resin, Gum, Resin.
        let grid = growth_grid(&[(0, 0), (1, 0), (2, 0)]);
        let mut solution = Solution::new(&grid);
        let a = add_group(&mut solution, &[(0, 0)]);
        let b = add_group(&mut solution, &[(1, 0)]);
        let c = add_group(&mut solution, &[(2, 0)]);
        assign_materials(&mut solution, &mut Statistics::new()).unwrap();
        assert_eq!(solution.group(a).material(), Some(Material::Resin));
        assert_eq!(solution.group(b).material(), Some(Material::Gum));
        assert_eq!(solution.group(c).material(), Some(Material::Resin));
    }

    #[test]
    fn test_center_group_differs_from_every_arm() {
        // Plus shape of single-cell groups: the center touches all four arms,
        // the arms never touch each other.
        let grid = growth_grid(&[(1, 1), (0, 1), (2, 1), (1, 0), (1, 2)]);
        let mut solution = Solution::new(&grid);
        let center = add_group(&mut solution, &[(1, 1)]);
        let arms = [
            add_group(&mut solution, &[(0, 1)]),
            add_group(&mut solution, &[(2, 1)]),
            add_group(&mut solution, &[(1, 0)]),
            add_group(&mut solution, &[(1, 2)]),
        ];
        assign_materials(&mut solution, &mut Statistics::new()).unwrap();
        // The center differs from every arm; arms may repeat freely.
        for arm in arms {
            assert_ne!(solution.group(center).material(), None);
            assert_ne!(
                solution.group(center).material(),
                solution.group(arm).material()
            );
        }
        assert!(solution.is_valid());
    }

    #[test]
    fn test_assignment_is_proper_on_a_grid_of_groups() {
        // 4x4 patch of single-cell groups: a 16-node grid graph.
        let cells: Vec<(i32, i32)> = (0..4).flat_map(|x| (0..4).map(move |y| (x, y))).collect();
        let grid = growth_grid(&cells);
        let mut solution = Solution::new(&grid);
        for &cell in &cells {
            add_group(&mut solution, &[cell]);
        }
        assign_materials(&mut solution, &mut Statistics::new()).unwrap();
        assert!(solution.is_valid());
        for group in solution.groups() {
            assert!(group.material().is_some());
        }
    }

    #[test]
    fn test_empty_solution_assigns_nothing() {
        let grid = Grid::default();
        let mut solution = Solution::new(&grid);
        assert!(assign_materials(&mut solution, &mut Statistics::new()).is_ok());
    }
}
