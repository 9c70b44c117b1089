// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Colorpath and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core data model.
//!
//! A puzzle is a grid of cells (free, blocked or claimed by a color) plus an ordered list of
//! demands, each asking for a path between two cells in one color.

pub mod cell;
pub mod claimed;
pub mod color;
pub mod demand;
#[cfg(test)]
pub(crate) mod fixtures;
pub mod grid;
pub mod puzzle;

pub use cell::{Cell, CellState};
pub use claimed::{ClaimConflict, ClaimedSet};
pub use color::{Color, ColorError, PALETTE};
pub use demand::{
    validate_demands, Demand, DemandError, PlacementError, Placements, DEFAULT_PLACEMENT_LIMIT,
};
pub use grid::{Grid, GridError, Neighbors, MAX_GRID_CELLS};
pub use puzzle::Puzzle;
