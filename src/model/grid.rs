// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Colorpath and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use smallvec::SmallVec;

use super::cell::{Cell, CellState};
use super::color::Color;

/// Cardinal step offsets in expansion order: down, up, right, left.
const CARDINAL_DELTAS: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

pub type Neighbors = SmallVec<[Cell; 4]>;

/// Largest grid area accepted by [`Grid::try_with_dimensions`] (2048 x 2048).
pub const MAX_GRID_CELLS: usize = 1 << 22;

/// A fixed-size matrix of cells stored row-major.
///
/// Adjacency is never cached: [`Grid::neighbors`] scans the current cell states on every call, so
/// barrier edits are visible to the next search without any refresh step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<CellState>,
}

impl Grid {
    /// Square grid with all cells free.
    pub fn new(size: usize) -> Self {
        Self::with_dimensions(size, size)
    }

    /// # Panics
    ///
    /// If the area exceeds [`MAX_GRID_CELLS`]. Use [`Grid::try_with_dimensions`] for sizes that
    /// come from user input.
    pub fn with_dimensions(rows: usize, cols: usize) -> Self {
        match Self::try_with_dimensions(rows, cols) {
            Ok(grid) => grid,
            Err(err) => panic!("{err}"),
        }
    }

    pub fn try_with_dimensions(rows: usize, cols: usize) -> Result<Self, GridError> {
        let len = rows
            .checked_mul(cols)
            .filter(|len| *len <= MAX_GRID_CELLS)
            .ok_or(GridError::TooLarge { rows, cols })?;
        Ok(Self { rows, cols, cells: vec![CellState::Free; len] })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.row() < self.rows && cell.col() < self.cols
    }

    /// Row-major arena index of `cell`.
    pub fn index_of(&self, cell: Cell) -> Option<usize> {
        self.contains(cell).then(|| cell.row() * self.cols + cell.col())
    }

    pub fn cell_at(&self, idx: usize) -> Cell {
        debug_assert!(idx < self.cells.len());
        Cell::new(idx / self.cols, idx % self.cols)
    }

    pub fn state(&self, cell: Cell) -> Option<&CellState> {
        self.index_of(cell).map(|idx| &self.cells[idx])
    }

    pub fn is_blocked(&self, cell: Cell) -> bool {
        self.state(cell).is_some_and(CellState::is_blocked)
    }

    /// Marks `cell` as a permanent obstacle (or frees it again).
    ///
    /// Claimed cells cannot be edited; barriers are meant to be drawn before a run.
    pub fn set_blocked(&mut self, cell: Cell, blocked: bool) -> Result<(), GridError> {
        let idx = self.checked_index(cell)?;
        let state = &mut self.cells[idx];
        if let CellState::Claimed(color) = state {
            return Err(GridError::CellClaimed { cell, color: color.clone() });
        }
        *state = if blocked { CellState::Blocked } else { CellState::Free };
        Ok(())
    }

    /// Flips the blocked status of `cell` and returns the new status.
    pub fn toggle_blocked(&mut self, cell: Cell) -> Result<bool, GridError> {
        let blocked = !self.is_blocked(cell);
        self.set_blocked(cell, blocked)?;
        Ok(blocked)
    }

    /// In-bounds, non-blocked cardinal neighbors of `cell` (down, up, right, left).
    pub fn neighbors(&self, cell: Cell) -> Neighbors {
        let mut out = Neighbors::new();
        if !self.contains(cell) {
            return out;
        }
        for (d_row, d_col) in CARDINAL_DELTAS {
            let Some(next) = cell.offset(d_row, d_col) else {
                continue;
            };
            if let Some(idx) = self.index_of(next) {
                if !self.cells[idx].is_blocked() {
                    out.push(next);
                }
            }
        }
        out
    }

    pub fn iter(&self) -> impl Iterator<Item = (Cell, &CellState)> + '_ {
        self.cells.iter().enumerate().map(|(idx, state)| (self.cell_at(idx), state))
    }

    pub(crate) fn mark_claimed(&mut self, cell: Cell, color: &Color) {
        if let Some(idx) = self.index_of(cell) {
            self.cells[idx] = CellState::Claimed(color.clone());
        }
    }

    pub(crate) fn checked_index(&self, cell: Cell) -> Result<usize, GridError> {
        self.index_of(cell).ok_or(GridError::OutOfBounds { cell, rows: self.rows, cols: self.cols })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    OutOfBounds { cell: Cell, rows: usize, cols: usize },
    CellClaimed { cell: Cell, color: Color },
    TooLarge { rows: usize, cols: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { cell, rows, cols } => {
                write!(f, "cell {cell} is outside the {rows}x{cols} grid")
            }
            Self::CellClaimed { cell, color } => {
                write!(f, "cell {cell} is claimed by {color} and cannot be edited")
            }
            Self::TooLarge { rows, cols } => {
                write!(f, "a {rows}x{cols} grid exceeds the {MAX_GRID_CELLS} cell limit")
            }
        }
    }
}

impl std::error::Error for GridError {}
