// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Solution model: a shared read-only grid plus the evolving group list.
//!
//! A [`Solution`] is created per solve attempt. The partition engine grows
//! its groups incrementally, the material assigner then fixes one material
//! per group, and the orchestrator keeps the best-scoring candidate. Derived
//! metrics and the structural validator are read-only; validation reports
//! violations as values and never fails.

pub mod group;

pub use group::{Group, GroupId};

use crate::grid::{Cell, CellType, Grid};
use crate::material::Material;
use crate::solver::PUSH_LIMIT;
use thiserror::Error;

/// A structural defect reported by [`Solution::violations`].
///
/// Violations are descriptions, not errors: callers decide whether to accept
/// the solution, re-run the partition engine, or abort.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
    #[error("growth cell {cell} is not assigned to any group")]
    UnassignedGrowth { cell: Cell },

    #[error("group {group} has {size} members, exceeding the push limit of {limit}")]
    OversizedGroup {
        group: GroupId,
        size: usize,
        limit: usize,
    },

    #[error("group {group} is internally disconnected")]
    DisconnectedGroup { group: GroupId },

    #[error("adjacent groups {a} and {b} share material {material:?}")]
    MaterialConflict {
        a: GroupId,
        b: GroupId,
        material: Material,
    },
}

/// A candidate harvest plan: the grid plus an ordered list of groups.
#[derive(Debug, Clone)]
pub struct Solution<'a> {
    grid: &'a Grid,
    groups: Vec<Group>,
}

impl<'a> Solution<'a> {
    pub fn new(grid: &'a Grid) -> Self {
        Self {
            grid,
            groups: Vec::new(),
        }
    }

    pub fn grid(&self) -> &Grid {
        self.grid
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn group(&self, id: GroupId) -> &Group {
        &self.groups[id.0]
    }

    pub fn group_mut(&mut self, id: GroupId) -> &mut Group {
        &mut self.groups[id.0]
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Append a new empty group, returning its id.
    pub fn push_empty_group(&mut self) -> GroupId {
        self.groups.push(Group::new());
        GroupId(self.groups.len() - 1)
    }

    /// The group owning `cell`, if any.
    pub fn group_at(&self, cell: Cell) -> Option<GroupId> {
        self.groups
            .iter()
            .position(|group| group.contains(cell))
            .map(GroupId)
    }

    /// Ids of groups with any member 4-adjacent to a member of `id`.
    pub fn neighbors_of(&self, id: GroupId) -> Vec<GroupId> {
        let group = self.group(id);
        self.groups
            .iter()
            .enumerate()
            .filter(|&(index, other)| index != id.0 && group.is_adjacent_to(other))
            .map(|(index, _)| GroupId(index))
            .collect()
    }

    /// Total member cells across all groups (growths and connectors).
    pub fn organized_cell_count(&self) -> usize {
        self.groups.iter().map(Group::len).sum()
    }

    /// Growth cells covered by some group.
    pub fn growth_count(&self) -> usize {
        self.groups
            .iter()
            .flat_map(Group::members)
            .filter(|&cell| self.grid.get(cell) == CellType::Growth)
            .count()
    }

    /// Fraction of the grid's growth cells assigned to a group.
    ///
    /// A grid without growths has nothing left to harvest, so its coverage is
    /// defined as 1.0.
    pub fn coverage(&self) -> f64 {
        let total = self.grid.growth_count();
        if total == 0 {
            return 1.0;
        }
        self.growth_count() as f64 / total as f64
    }

    /// Mean growths per group; 0.0 when there are no groups.
    pub fn growths_per_group(&self) -> f64 {
        if self.groups.is_empty() {
            return 0.0;
        }
        self.growth_count() as f64 / self.groups.len() as f64
    }

    /// Adhesive cells required to actuate the plan: one per organized cell.
    pub fn material_cell_count(&self) -> usize {
        self.organized_cell_count()
    }

    /// Number of distinct materials assigned across all groups.
    pub fn material_usage(&self) -> usize {
        let used: std::collections::BTreeSet<Material> =
            self.groups.iter().filter_map(Group::material).collect();
        used.len()
    }

    /// The finalized plan as (cell, material) pairs, in group order.
    ///
    /// This is the hand-off to the external world adapter, which maps each
    /// pair back to real-world coordinates (offset variants mount one layer
    /// differently). Groups without an assigned material are skipped.
    pub fn assignments(&self) -> impl Iterator<Item = (Cell, Material)> + '_ {
        self.groups
            .iter()
            .filter_map(|group| group.material().map(|material| (group, material)))
            .flat_map(|(group, material)| group.members().map(move |cell| (cell, material)))
    }

    /// Enumerate structural violations; an empty list means the solution is
    /// valid.
    pub fn violations(&self) -> Vec<Violation> {
        let mut violations = Vec::new();

        for cell in self.grid.growths() {
            if self.group_at(cell).is_none() {
                violations.push(Violation::UnassignedGrowth { cell });
            }
        }

        for (index, group) in self.groups.iter().enumerate() {
            if group.len() > PUSH_LIMIT {
                violations.push(Violation::OversizedGroup {
                    group: GroupId(index),
                    size: group.len(),
                    limit: PUSH_LIMIT,
                });
            }
            if !group.is_connected() {
                violations.push(Violation::DisconnectedGroup {
                    group: GroupId(index),
                });
            }
        }

        for (a, group_a) in self.groups.iter().enumerate() {
            for (b, group_b) in self.groups.iter().enumerate().skip(a + 1) {
                if let (Some(material_a), Some(material_b)) =
                    (group_a.material(), group_b.material())
                {
                    if material_a == material_b && group_a.is_adjacent_to(group_b) {
                        violations.push(Violation::MaterialConflict {
                            a: GroupId(a),
                            b: GroupId(b),
                            material: material_a,
                        });
                    }
                }
            }
        }

        violations
    }

    pub fn is_valid(&self) -> bool {
        self.violations().is_empty()
    }

    /// Comparator used by the multi-trial orchestrator.
    ///
    /// Higher coverage wins outright; equal coverage prefers fewer groups
    /// (more harvested, less material). Strict: a solution is never better
    /// than itself, so earlier candidates win ties.
    pub fn better_than(&self, other: &Solution<'_>) -> bool {
        let (a, b) = (self.coverage(), other.coverage());
        if a != b {
            return a > b;
        }
        self.group_count() < other.group_count()
    }

    /// Diagnostic text dump over the expanded bounding box.
    ///
    /// Blockers render as `# `, organized cells as their group's material
    /// glyph (`+ ` before assignment), unassigned growths as `. `.
    /// Informational only.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for y in self.grid.y_range().start() - 1..=self.grid.y_range().end() + 1 {
            for x in self.grid.x_range().start() - 1..=self.grid.x_range().end() + 1 {
                let cell = Cell::new(x, y);
                let glyph = if self.grid.get(cell) == CellType::Blocker {
                    "# "
                } else if let Some(id) = self.group_at(cell) {
                    match self.group(id).material() {
                        Some(material) => material.glyph(),
                        None => "+ ",
                    }
                } else if self.grid.get(cell) == CellType::Growth {
                    ". "
                } else {
                    "  "
                };
                out.push_str(glyph);
            }
            out.push('\n');
        }
        out
    }
}
