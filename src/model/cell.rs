// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Colorpath and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use super::color::Color;

/// A grid coordinate, addressed as `(row, col)`.
///
/// Ordering is row-major, which keeps maps keyed by `Cell` in reading order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    row: usize,
    col: usize,
}

impl Cell {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    /// Applies a signed offset, returning `None` when the result would be negative.
    ///
    /// Upper bounds are the grid's concern.
    pub(crate) fn offset(self, d_row: isize, d_col: isize) -> Option<Self> {
        let row = self.row.checked_add_signed(d_row)?;
        let col = self.col.checked_add_signed(d_col)?;
        Some(Self { row, col })
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(usize, usize)> for Cell {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

/// The state of one grid cell. A cell holds exactly one state at a time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CellState {
    #[default]
    Free,
    Blocked,
    Claimed(Color),
}

impl CellState {
    pub fn is_blocked(&self) -> bool {
        matches!(self, Self::Blocked)
    }

    pub fn is_free(&self) -> bool {
        matches!(self, Self::Free)
    }

    pub fn claimed_by(&self) -> Option<&Color> {
        match self {
            Self::Claimed(color) => Some(color),
            Self::Free | Self::Blocked => None,
        }
    }
}
