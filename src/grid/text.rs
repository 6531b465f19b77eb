// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Textual grid format.
//!
//! Each row of the plan is a line of text in which every cell occupies two
//! characters; column `i` is read from character index `2 * i`. `.` marks a
//! growth, `#` a blocker, and anything else reads as empty. A blank line
//! separates independent grids in a batch file.
//!
//! Parsing stores every scanned position explicitly, empty cells included, so
//! that parse → serialize → parse reproduces the cell mapping exactly.

use super::{Cell, CellType, Grid};
use std::collections::BTreeMap;
use std::fmt::Write;

fn cell_type_of(ch: char) -> CellType {
    match ch {
        '.' => CellType::Growth,
        '#' => CellType::Blocker,
        _ => CellType::Empty,
    }
}

impl Grid {
    /// Parse a single textual grid.
    ///
    /// Rows map to y = 0, 1, 2, ... in line order; column `i` of a row is the
    /// character at index `2 * i`.
    pub fn from_text(text: &str) -> Grid {
        let mut cells = BTreeMap::new();
        for (row, line) in text.lines().enumerate() {
            parse_row(&mut cells, row as i32, line);
        }
        Grid::new(cells)
    }

    /// Parse a batch: grids separated by blank lines.
    ///
    /// Consecutive blank lines are collapsed; a trailing grid without a
    /// terminating blank line is still returned.
    pub fn parse_batch(text: &str) -> Vec<Grid> {
        let mut grids = Vec::new();
        let mut cells = BTreeMap::new();
        let mut row = 0i32;
        for line in text.lines() {
            if line.is_empty() {
                if !cells.is_empty() {
                    grids.push(Grid::new(std::mem::take(&mut cells)));
                }
                row = 0;
                continue;
            }
            parse_row(&mut cells, row, line);
            row += 1;
        }
        if !cells.is_empty() {
            grids.push(Grid::new(cells));
        }
        grids
    }

    /// Serialize the explicit cell mapping back to the textual format.
    ///
    /// Rows cover the (unexpanded) bounding box; the origin of the output is
    /// the bounding box corner, so only grids anchored at (0, 0) — in
    /// particular every parsed grid — round-trip to the same coordinates.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for y in self.y_range() {
            for x in self.x_range() {
                out.push_str(self.get(Cell::new(x, y)).glyph());
            }
            out.push('\n');
        }
        out
    }
}

fn parse_row(cells: &mut BTreeMap<Cell, CellType>, row: i32, line: &str) {
    for (index, ch) in line.chars().enumerate() {
        if index % 2 != 0 {
            continue;
        }
        let column = (index / 2) as i32;
        cells.insert(Cell::new(column, row), cell_type_of(ch));
    }
}

/// Serialize a batch, separating grids with single blank lines.
pub fn batch_to_text(grids: &[Grid]) -> String {
    let mut out = String::new();
    for (index, grid) in grids.iter().enumerate() {
        if index > 0 {
            let _ = writeln!(out);
        }
        out.push_str(&grid.to_text());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_columns_read_from_even_indices() {
        let grid = Grid::from_text(". # x \n");
        assert_eq!(grid.get(Cell::new(0, 0)), CellType::Growth);
        assert_eq!(grid.get(Cell::new(1, 0)), CellType::Blocker);
        assert_eq!(grid.get(Cell::new(2, 0)), CellType::Empty);
        assert_eq!(grid.x_range(), 0..=2);
    }

    #[test]
    fn test_odd_characters_are_ignored() {
        // Second character of each column carries no information.
        let a = Grid::from_text(".#.#");
        let b = Grid::from_text(". . ");
        assert_eq!(a, b);
    }

    #[test]
    fn test_rows_map_to_y() {
        let grid = Grid::from_text(". \n# \n");
        assert_eq!(grid.get(Cell::new(0, 0)), CellType::Growth);
        assert_eq!(grid.get(Cell::new(0, 1)), CellType::Blocker);
    }

    #[test]
    fn test_blank_line_splits_batch() {
        let batch = ". . \n\n# \n. \n";
        let grids = Grid::parse_batch(batch);
        assert_eq!(grids.len(), 2);
        assert_eq!(grids[0].growth_count(), 2);
        assert_eq!(grids[1].growth_count(), 1);
        assert_eq!(grids[1].get(Cell::new(0, 0)), CellType::Blocker);
    }

    #[test]
    fn test_consecutive_blank_lines_collapse() {
        let grids = Grid::parse_batch(". \n\n\n\n. \n");
        assert_eq!(grids.len(), 2);
    }

    #[test]
    fn test_round_trip_preserves_cell_mapping() {
        let text = "  . .   \n. # # . \n  . .   \n";
        let parsed = Grid::from_text(text);
        let reparsed = Grid::from_text(&parsed.to_text());
        assert_eq!(parsed, reparsed);
    }

    #[test]
    fn test_batch_round_trip() {
        let text = ". . \n# . \n\n. \n";
        let grids = Grid::parse_batch(text);
        let reparsed = Grid::parse_batch(&batch_to_text(&grids));
        assert_eq!(grids, reparsed);
    }
}
