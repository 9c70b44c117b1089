// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Colorpath and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Shared deterministic benchmark fixtures (no RNG).

use colorpath::model::{Cell, Color, Demand, Grid};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Case {
    Small,
    Medium,
    Large,
}

impl Case {
    pub const ALL: [Case; 3] = [Case::Small, Case::Medium, Case::Large];

    pub fn id(self) -> &'static str {
        match self {
            Case::Small => "small",
            Case::Medium => "medium",
            Case::Large => "large",
        }
    }

    pub fn size(self) -> usize {
        match self {
            Case::Small => 16,
            Case::Medium => 64,
            Case::Large => 256,
        }
    }
}

pub fn corners(size: usize) -> (Cell, Cell) {
    (Cell::new(0, 0), Cell::new(size - 1, size - 1))
}

/// Walls on every other row with a gap alternating between the right and left edge, so a
/// corner-to-corner path snakes through the whole grid.
pub fn serpentine(size: usize) -> Grid {
    let mut grid = Grid::new(size);
    for row in (1..size.saturating_sub(1)).step_by(2) {
        let gap = if (row / 2) % 2 == 0 { size - 1 } else { 0 };
        for col in (0..size).filter(|col| *col != gap) {
            grid.set_blocked(Cell::new(row, col), true).expect("serpentine wall in bounds");
        }
    }
    grid
}

/// Isolated barriers on a fixed lattice; both corners stay free.
pub fn scattered(size: usize) -> Grid {
    let (start, end) = corners(size);
    let mut grid = Grid::new(size);
    for row in 0..size {
        for col in 0..size {
            let cell = Cell::new(row, col);
            if (row * 7 + col * 13) % 11 == 0 && cell != start && cell != end {
                grid.set_blocked(cell, true).expect("scattered barrier in bounds");
            }
        }
    }
    grid
}

/// `pairs` demands, each across an even row from the left edge to the right edge, colored from
/// the palette in order.
pub fn lanes(size: usize, pairs: usize) -> Vec<Demand> {
    (0..pairs)
        .map(|pair| {
            let row = (pair * 2) % size;
            Demand::new(Cell::new(row, 0), Cell::new(row, size - 1), Color::palette(pair))
                .expect("lane endpoints differ")
        })
        .collect()
}

/// Demands that all have to cross the middle column, one row apart, so later colors detour
/// around earlier ones.
pub fn crossing(size: usize, pairs: usize) -> Vec<Demand> {
    let mid = size / 2;
    (0..pairs)
        .map(|pair| {
            let col = (pair * 3 + 1) % size;
            let end = Cell::new(size - 1, (col + mid) % size);
            Demand::new(Cell::new(0, col), end, Color::palette(pair))
                .expect("crossing endpoints differ")
        })
        .collect()
}

pub fn checksum_cells(cells: &[Cell]) -> u64 {
    cells.iter().fold(0u64, |acc, cell| {
        acc.wrapping_mul(131)
            .wrapping_add(cell.row() as u64)
            .wrapping_mul(131)
            .wrapping_add(cell.col() as u64)
    })
}
