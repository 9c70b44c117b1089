// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Colorpath and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt;

use tracing::trace;

use super::heuristic::Heuristic;
use super::observer::{CancelFlag, RouteObserver};
use crate::model::{Cell, ClaimedSet, Demand, Grid};

const UNREACHED: u32 = u32::MAX;
const NO_PREDECESSOR: usize = usize::MAX;

#[derive(Debug, Clone, Default)]
pub struct SearchOptions {
    pub heuristic: Heuristic,
    pub cancel: Option<CancelFlag>,
}

impl SearchOptions {
    pub fn with_heuristic(heuristic: Heuristic) -> Self {
        Self { heuristic, cancel: None }
    }

    fn is_cancelled(&self) -> bool {
        self.cancel.as_ref().is_some_and(CancelFlag::is_cancelled)
    }
}

/// Per-search scratch: g/f scores, predecessors and the frontier, indexed by the grid's
/// row-major arena index.
///
/// Frontier entries are keyed `(f, seq)`. `seq` grows with every push, so equal-f cells pop in
/// insertion order. Improved cells are pushed again; superseded entries are skipped on pop.
#[derive(Debug)]
struct SearchState {
    g_score: Vec<u32>,
    f_score: Vec<u32>,
    came_from: Vec<usize>,
    closed: Vec<bool>,
    frontier: BinaryHeap<Reverse<(u32, u64, usize)>>,
    seq: u64,
    expanded: usize,
}

impl SearchState {
    fn new(len: usize) -> Self {
        Self {
            g_score: vec![UNREACHED; len],
            f_score: vec![UNREACHED; len],
            came_from: vec![NO_PREDECESSOR; len],
            closed: vec![false; len],
            frontier: BinaryHeap::with_capacity(len.min(4096)),
            seq: 0,
            expanded: 0,
        }
    }

    fn open(&mut self, idx: usize, g: u32, h: u32, came_from: usize) {
        let f = g.saturating_add(h);
        self.g_score[idx] = g;
        self.f_score[idx] = f;
        self.came_from[idx] = came_from;
        self.frontier.push(Reverse((f, self.seq, idx)));
        self.seq += 1;
    }

    fn pop(&mut self) -> Option<usize> {
        while let Some(Reverse((f, _seq, idx))) = self.frontier.pop() {
            if self.closed[idx] || f != self.f_score[idx] {
                continue;
            }
            return Some(idx);
        }
        None
    }

    fn into_predecessors(self, rows: usize, cols: usize) -> Predecessors {
        Predecessors { rows, cols, came_from: self.came_from }
    }
}

/// Predecessor links left behind by a successful search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Predecessors {
    rows: usize,
    cols: usize,
    came_from: Vec<usize>,
}

impl Predecessors {
    pub fn predecessor(&self, cell: Cell) -> Option<Cell> {
        if cell.row() >= self.rows || cell.col() >= self.cols {
            return None;
        }
        let prev = self.came_from[cell.row() * self.cols + cell.col()];
        (prev != NO_PREDECESSOR).then(|| Cell::new(prev / self.cols, prev % self.cols))
    }
}

/// A shortest path found by [`find_path`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoundPath {
    start: Cell,
    end: Cell,
    cost: u32,
    expanded: usize,
    predecessors: Predecessors,
}

impl FoundPath {
    pub fn start(&self) -> Cell {
        self.start
    }

    pub fn end(&self) -> Cell {
        self.end
    }

    /// Number of moves from start to end.
    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Cells expanded before the end cell was reached.
    pub fn expanded(&self) -> usize {
        self.expanded
    }

    pub fn predecessors(&self) -> &Predecessors {
        &self.predecessors
    }

    /// Cells from `end` back to `start`, both included.
    pub fn walk_back(&self) -> impl Iterator<Item = Cell> + '_ {
        std::iter::successors(Some(self.end), move |cell| {
            if *cell == self.start {
                None
            } else {
                self.predecessors.predecessor(*cell)
            }
        })
    }

    /// Cells from `start` to `end`, both included.
    pub fn cells(&self) -> Vec<Cell> {
        let mut cells = self.walk_back().collect::<Vec<_>>();
        cells.reverse();
        cells
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    Found(FoundPath),
    /// The frontier emptied without reaching the end cell.
    Exhausted { expanded: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    OutOfBounds { cell: Cell },
    Cancelled { expanded: usize },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { cell } => write!(f, "search endpoint {cell} is outside the grid"),
            Self::Cancelled { expanded } => {
                write!(f, "search cancelled after {expanded} expansions")
            }
        }
    }
}

impl std::error::Error for SearchError {}

/// A* from `demand.start()` to `demand.end()` over unit-cost cardinal moves.
///
/// Cells claimed by a color other than the demand's are impassable; cells of the same color are
/// ordinary pass-through cells. `grid` and `claimed` are only read. The observer is notified after
/// every expansion.
pub fn find_path(
    grid: &Grid,
    claimed: &ClaimedSet,
    demand: &Demand,
    options: &SearchOptions,
    observer: &mut dyn RouteObserver,
) -> Result<SearchOutcome, SearchError> {
    let (start, end, color) = (demand.start(), demand.end(), demand.color());
    let start_idx = grid.index_of(start).ok_or(SearchError::OutOfBounds { cell: start })?;
    let end_idx = grid.index_of(end).ok_or(SearchError::OutOfBounds { cell: end })?;
    let heuristic = options.heuristic;

    // An endpoint already held by another color can never be connected.
    if claimed.blocks(start, color) || claimed.blocks(end, color) {
        return Ok(SearchOutcome::Exhausted { expanded: 0 });
    }

    let mut state = SearchState::new(grid.len());
    state.open(start_idx, 0, heuristic.estimate(start, end), NO_PREDECESSOR);

    while let Some(idx) = state.pop() {
        if options.is_cancelled() {
            return Err(SearchError::Cancelled { expanded: state.expanded });
        }

        if idx == end_idx {
            let cost = state.g_score[idx];
            let expanded = state.expanded;
            return Ok(SearchOutcome::Found(FoundPath {
                start,
                end,
                cost,
                expanded,
                predecessors: state.into_predecessors(grid.rows(), grid.cols()),
            }));
        }

        state.closed[idx] = true;
        state.expanded += 1;
        let current = grid.cell_at(idx);
        let tentative = state.g_score[idx] + 1;

        for next in grid.neighbors(current) {
            if claimed.blocks(next, color) {
                continue;
            }
            let Some(next_idx) = grid.index_of(next) else {
                continue;
            };
            if state.closed[next_idx] || tentative >= state.g_score[next_idx] {
                continue;
            }
            state.open(next_idx, tentative, heuristic.estimate(next, end), idx);
        }

        trace!(cell = %current, g = tentative - 1, frontier = state.frontier.len(), "expanded");
        observer.on_expand(grid, current);
    }

    Ok(SearchOutcome::Exhausted { expanded: state.expanded })
}

#[cfg(test)]
mod tests;
