// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! A single mechanically-pushable group.

use crate::grid::Cell;
use crate::material::Material;
use std::collections::BTreeSet;
use std::fmt;

/// Index of a group within its solution's creation-ordered group list.
///
/// Creation order is meaningful: the material assigner visits groups in this
/// order, and ties in seed selection break toward earlier cells, so the same
/// partition always yields the same ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GroupId(pub usize);

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A set of member cells pushed as one unit, plus its assigned material.
///
/// Members are growth and connector cells only; the partition engine never
/// claims a blocker and enforces the push limit before every addition. The
/// group itself is a plain container, so the structural validator on
/// [`Solution`](super::Solution) can still report oversized or disconnected
/// groups built by other producers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Group {
    members: BTreeSet<Cell>,
    material: Option<Material>,
}

impl Group {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn members(&self) -> impl Iterator<Item = Cell> + '_ {
        self.members.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.members.contains(&cell)
    }

    pub fn add_member(&mut self, cell: Cell) -> bool {
        self.members.insert(cell)
    }

    pub fn material(&self) -> Option<Material> {
        self.material
    }

    pub fn set_material(&mut self, material: Material) {
        self.material = Some(material);
    }

    /// Whether any member of `self` is 4-adjacent to any member of `other`.
    pub fn is_adjacent_to(&self, other: &Group) -> bool {
        self.members()
            .any(|cell| cell.neighbors().iter().any(|&n| other.contains(n)))
    }

    /// Whether the member set forms a single 4-connected component.
    ///
    /// The empty group counts as connected.
    pub fn is_connected(&self) -> bool {
        let Some(&start) = self.members.iter().next() else {
            return true;
        };
        let mut visited = BTreeSet::from([start]);
        let mut frontier = vec![start];
        while let Some(cell) = frontier.pop() {
            for neighbor in cell.neighbors() {
                if self.members.contains(&neighbor) && visited.insert(neighbor) {
                    frontier.push(neighbor);
                }
            }
        }
        visited.len() == self.members.len()
    }
}
