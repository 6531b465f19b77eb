// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Cell classification in the plan grid.

/// What occupies a cell of the plan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CellType {
    /// Nothing; traversable and freely usable as a connector.
    #[default]
    Empty,
    /// A harvestable growth that must be assigned to exactly one group.
    Growth,
    /// A non-harvestable point; impassable for routing and grouping.
    Blocker,
}

impl CellType {
    /// Merge rule when overlaying derived markers onto a cell:
    /// Blocker dominates Growth dominates Empty.
    pub fn merge(self, other: CellType) -> CellType {
        use CellType::*;
        match (self, other) {
            (Blocker, _) | (_, Blocker) => Blocker,
            (Growth, _) | (_, Growth) => Growth,
            (Empty, Empty) => Empty,
        }
    }

    /// Two-character glyph used by the textual format and diagnostics.
    pub fn glyph(self) -> &'static str {
        match self {
            CellType::Empty => "  ",
            CellType::Growth => ". ",
            CellType::Blocker => "# ",
        }
    }
}
