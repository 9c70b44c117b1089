// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Colorpath and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use super::cell::Cell;
use super::color::Color;
use super::grid::Grid;

/// Endpoint limit of the reference placement UI (six pairs).
pub const DEFAULT_PLACEMENT_LIMIT: usize = 12;

/// One routing request: connect `start` to `end` with `color`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Demand {
    start: Cell,
    end: Cell,
    color: Color,
}

impl Demand {
    pub fn new(start: Cell, end: Cell, color: Color) -> Result<Self, DemandError> {
        if start == end {
            return Err(DemandError::SameStartAndEnd { index: None, cell: start });
        }
        Ok(Self { start, end, color })
    }

    pub fn start(&self) -> Cell {
        self.start
    }

    pub fn end(&self) -> Cell {
        self.end
    }

    pub fn color(&self) -> &Color {
        &self.color
    }
}

impl fmt::Display for Demand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} -> {}", self.color, self.start, self.end)
    }
}

/// Checks a demand list against `grid` before any search runs.
pub fn validate_demands(grid: &Grid, demands: &[Demand]) -> Result<(), DemandError> {
    if demands.is_empty() {
        return Err(DemandError::Empty);
    }

    for (index, demand) in demands.iter().enumerate() {
        if demand.start == demand.end {
            return Err(DemandError::SameStartAndEnd { index: Some(index), cell: demand.start });
        }
        for cell in [demand.start, demand.end] {
            if !grid.contains(cell) {
                return Err(DemandError::OutOfBounds { index, cell });
            }
            if grid.is_blocked(cell) {
                return Err(DemandError::EndpointBlocked { index, cell });
            }
        }
    }

    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DemandError {
    Empty,
    OddPlacementCount { placed: usize },
    SameStartAndEnd { index: Option<usize>, cell: Cell },
    OutOfBounds { index: usize, cell: Cell },
    EndpointBlocked { index: usize, cell: Cell },
}

impl fmt::Display for DemandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("at least one demand is required"),
            Self::OddPlacementCount { placed } => {
                write!(f, "endpoints are consumed in pairs but {placed} were placed")
            }
            Self::SameStartAndEnd { index: Some(index), cell } => {
                write!(f, "demand {index} starts and ends at {cell}")
            }
            Self::SameStartAndEnd { index: None, cell } => {
                write!(f, "demand starts and ends at {cell}")
            }
            Self::OutOfBounds { index, cell } => {
                write!(f, "demand {index} endpoint {cell} is outside the grid")
            }
            Self::EndpointBlocked { index, cell } => {
                write!(f, "demand {index} endpoint {cell} is a barrier")
            }
        }
    }
}

impl std::error::Error for DemandError {}

/// Endpoints placed one at a time, consumed in pairs.
///
/// Each pair receives the next palette color in placement order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placements {
    cells: Vec<Cell>,
    limit: Option<usize>,
}

impl Default for Placements {
    fn default() -> Self {
        Self::with_limit(Some(DEFAULT_PLACEMENT_LIMIT))
    }
}

impl Placements {
    pub fn with_limit(limit: Option<usize>) -> Self {
        Self { cells: Vec::new(), limit }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Color of the `placement_index`-th endpoint.
    pub fn color_for(placement_index: usize) -> Color {
        Color::palette(placement_index / 2)
    }

    /// Ready to run: at least one pair and no dangling endpoint.
    pub fn is_complete(&self) -> bool {
        !self.cells.is_empty() && self.cells.len() % 2 == 0
    }

    /// Places the next endpoint on a free, not yet placed cell and returns its color.
    pub fn place(&mut self, grid: &Grid, cell: Cell) -> Result<Color, PlacementError> {
        if let Some(limit) = self.limit {
            if self.cells.len() >= limit {
                return Err(PlacementError::LimitReached { limit });
            }
        }
        let Some(state) = grid.state(cell) else {
            return Err(PlacementError::OutOfBounds { cell });
        };
        if !state.is_free() || self.cells.contains(&cell) {
            return Err(PlacementError::NotFree { cell });
        }

        let color = Self::color_for(self.cells.len());
        self.cells.push(cell);
        Ok(color)
    }

    pub fn clear(&mut self) {
        self.cells.clear();
    }

    pub fn to_demands(&self) -> Result<Vec<Demand>, DemandError> {
        if self.cells.is_empty() {
            return Err(DemandError::Empty);
        }
        if self.cells.len() % 2 != 0 {
            return Err(DemandError::OddPlacementCount { placed: self.cells.len() });
        }

        self.cells
            .chunks_exact(2)
            .enumerate()
            .map(|(pair, ends)| {
                Demand::new(ends[0], ends[1], Color::palette(pair)).map_err(|_| {
                    DemandError::SameStartAndEnd { index: Some(pair), cell: ends[0] }
                })
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlacementError {
    OutOfBounds { cell: Cell },
    NotFree { cell: Cell },
    LimitReached { limit: usize },
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { cell } => write!(f, "cell {cell} is outside the grid"),
            Self::NotFree { cell } => write!(f, "cell {cell} is not free"),
            Self::LimitReached { limit } => write!(f, "at most {limit} endpoints can be placed"),
        }
    }
}

impl std::error::Error for PlacementError {}
