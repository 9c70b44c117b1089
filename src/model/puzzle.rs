// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Colorpath and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::cell::Cell;
use super::color::Color;
use super::demand::{validate_demands, Demand, DemandError};
use super::grid::Grid;

/// A grid with its barriers plus the ordered demands to route on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    grid: Grid,
    demands: Vec<Demand>,
}

impl Puzzle {
    pub fn new(grid: Grid, demands: Vec<Demand>) -> Result<Self, DemandError> {
        validate_demands(&grid, &demands)?;
        Ok(Self { grid, demands })
    }

    /// Built-in 8x8 puzzle: red across the top row, green down the middle around a short wall,
    /// blue across the bottom row.
    pub fn demo() -> Self {
        let mut grid = Grid::new(8);
        for col in 2..6 {
            grid.set_blocked(Cell::new(4, col), true).expect("demo barrier in bounds");
        }

        let pairs = [
            (Cell::new(0, 0), Cell::new(0, 7)),
            (Cell::new(1, 3), Cell::new(6, 4)),
            (Cell::new(7, 0), Cell::new(7, 7)),
        ];
        let demands = pairs
            .into_iter()
            .enumerate()
            .map(|(pair, (start, end))| {
                Demand::new(start, end, Color::palette(pair)).expect("demo endpoints differ")
            })
            .collect();

        Self { grid, demands }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn demands(&self) -> &[Demand] {
        &self.demands
    }

    pub fn into_parts(self) -> (Grid, Vec<Demand>) {
        (self.grid, self.demands)
    }
}
