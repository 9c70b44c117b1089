// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Colorpath and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;
use std::fmt;

use super::cell::Cell;
use super::color::Color;

/// Cells permanently held by a color during one run.
///
/// Append-only: a cell is claimed by at most one color and is never released until the caller
/// starts over with a fresh set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClaimedSet {
    cells: BTreeMap<Cell, Color>,
}

impl ClaimedSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn color_of(&self, cell: Cell) -> Option<&Color> {
        self.cells.get(&cell)
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains_key(&cell)
    }

    /// Whether `cell` is an obstacle for a path of `color`, i.e. held by a different color.
    pub fn blocks(&self, cell: Cell, color: &Color) -> bool {
        self.cells.get(&cell).is_some_and(|owner| owner != color)
    }

    /// Claims `cell` for `color`.
    ///
    /// Returns `Ok(true)` for a new claim and `Ok(false)` when `color` already holds the cell.
    /// A cell held by another color is left untouched and reported as a conflict.
    pub fn claim(&mut self, cell: Cell, color: &Color) -> Result<bool, ClaimConflict> {
        match self.cells.get(&cell) {
            Some(existing) if existing == color => Ok(false),
            Some(existing) => Err(ClaimConflict {
                cell,
                existing: existing.clone(),
                attempted: color.clone(),
            }),
            None => {
                self.cells.insert(cell, color.clone());
                Ok(true)
            }
        }
    }

    /// First-come reservation used for demand endpoints: returns whether `color` holds `cell`
    /// afterwards. A cell already held by another color keeps its owner.
    pub fn reserve(&mut self, cell: Cell, color: &Color) -> bool {
        *self.cells.entry(cell).or_insert_with(|| color.clone()) == *color
    }

    pub fn iter(&self) -> impl Iterator<Item = (Cell, &Color)> + '_ {
        self.cells.iter().map(|(cell, color)| (*cell, color))
    }

    /// Claimed cells of one color, in row-major order.
    pub fn cells_of<'a>(&'a self, color: &'a Color) -> impl Iterator<Item = Cell> + 'a {
        self.cells.iter().filter(move |(_, owner)| *owner == color).map(|(cell, _)| *cell)
    }
}

/// Two colors tried to claim the same cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClaimConflict {
    pub cell: Cell,
    pub existing: Color,
    pub attempted: Color,
}

impl fmt::Display for ClaimConflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cell {} is already claimed by {}; refusing to claim it for {}",
            self.cell, self.existing, self.attempted
        )
    }
}

impl std::error::Error for ClaimConflict {}
