// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Colorpath and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeSet;

use crate::model::{Cell, CellState, Demand, Grid};

pub const FREE_GLYPH: char = '.';
pub const BLOCKED_GLYPH: char = '#';

/// Endpoint cells of `demands`, which renders draw in upper case.
pub fn endpoint_cells(demands: &[Demand]) -> BTreeSet<Cell> {
    demands.iter().flat_map(|demand| [demand.start(), demand.end()]).collect()
}

/// Glyph for one cell: `.` free, `#` blocked, the color's initial for claimed cells (upper case
/// on endpoints).
pub fn cell_glyph(state: &CellState, is_endpoint: bool) -> char {
    match state {
        CellState::Free => FREE_GLYPH,
        CellState::Blocked => BLOCKED_GLYPH,
        CellState::Claimed(color) if is_endpoint => color.glyph().to_ascii_uppercase(),
        CellState::Claimed(color) => color.glyph().to_ascii_lowercase(),
    }
}

/// Renders the grid one text line per row.
pub fn render_grid_text(grid: &Grid, endpoints: &BTreeSet<Cell>) -> String {
    let mut lines = Vec::<String>::with_capacity(grid.rows());
    for row in 0..grid.rows() {
        let mut line = String::with_capacity(grid.cols());
        for col in 0..grid.cols() {
            let cell = Cell::new(row, col);
            // (row, col) is in bounds by construction.
            let state = grid.state(cell).unwrap_or(&CellState::Free);
            line.push(cell_glyph(state, endpoints.contains(&cell)));
        }
        lines.push(line);
    }
    lines.join("\n")
}
