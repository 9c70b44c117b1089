// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Colorpath and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::cell::Cell;
use super::color::Color;
use super::demand::Demand;
use super::grid::Grid;

pub(crate) fn c(row: usize, col: usize) -> Cell {
    Cell::new(row, col)
}

pub(crate) fn color(name: &str) -> Color {
    Color::new(name).expect("color")
}

pub(crate) fn demand(start: Cell, end: Cell, name: &str) -> Demand {
    Demand::new(start, end, color(name)).expect("demand")
}

/// Builds a grid from rows of `.` (free) and `#` (blocked).
pub(crate) fn grid_from_rows(rows: &[&str]) -> Grid {
    let cols = rows.first().map(|row| row.len()).unwrap_or(0);
    let mut grid = Grid::with_dimensions(rows.len(), cols);
    for (row, line) in rows.iter().enumerate() {
        assert_eq!(line.len(), cols, "ragged fixture row {row}");
        for (col, ch) in line.chars().enumerate() {
            if ch == '#' {
                grid.set_blocked(c(row, col), true).expect("block");
            }
        }
    }
    grid
}

/// 3x3 grid whose only route between the top-left and bottom-right corners hugs the top and
/// right edges.
pub(crate) fn corridor_3x3() -> Grid {
    grid_from_rows(&["...", "##.", "..."])
}
