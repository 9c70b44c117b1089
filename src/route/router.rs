// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Colorpath and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use tracing::{debug, info, warn};

use super::commit::commit_path;
use super::observer::RouteObserver;
use super::search::{find_path, SearchError, SearchOptions, SearchOutcome};
use crate::model::{
    validate_demands, Cell, ClaimConflict, ClaimedSet, Color, Demand, DemandError, Grid,
    GridError, PlacementError, Placements, Puzzle, DEFAULT_PLACEMENT_LIMIT,
};

/// A demand whose search exhausted its frontier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnreachableDemand {
    pub index: usize,
    pub start: Cell,
    pub end: Cell,
    pub color: Color,
}

impl fmt::Display for UnreachableDemand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "failed to connect {} -> {} for color {} (demand {})",
            self.start, self.end, self.color, self.index
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunResult {
    AllSucceeded,
    /// Routing stopped at the first unreachable demand; later demands were not attempted.
    Failed(UnreachableDemand),
}

impl RunResult {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::AllSucceeded)
    }
}

/// One committed path, start to end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutedPath {
    pub index: usize,
    pub color: Color,
    pub cells: Vec<Cell>,
    pub expanded: usize,
}

impl RoutedPath {
    pub fn cost(&self) -> usize {
        self.cells.len().saturating_sub(1)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub result: RunResult,
    pub paths: Vec<RoutedPath>,
    pub claimed: ClaimedSet,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    InvalidDemand(DemandError),
    /// A path tried to claim a cell already held by another color.
    InvariantViolation(ClaimConflict),
    Cancelled { index: usize },
    NotIdle { state: &'static str },
    Grid(GridError),
    Placement(PlacementError),
    EndpointCell { cell: Cell },
}

impl fmt::Display for RouteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDemand(err) => write!(f, "invalid demand: {err}"),
            Self::InvariantViolation(conflict) => write!(f, "claim invariant violated: {conflict}"),
            Self::Cancelled { index } => write!(f, "run cancelled while routing demand {index}"),
            Self::NotIdle { state } => write!(f, "router is {state}; reset it first"),
            Self::Grid(err) => write!(f, "{err}"),
            Self::Placement(err) => write!(f, "{err}"),
            Self::EndpointCell { cell } => write!(f, "cell {cell} holds a placed endpoint"),
        }
    }
}

impl std::error::Error for RouteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidDemand(err) => Some(err),
            Self::InvariantViolation(conflict) => Some(conflict),
            Self::Grid(err) => Some(err),
            Self::Placement(err) => Some(err),
            Self::Cancelled { .. } | Self::NotIdle { .. } | Self::EndpointCell { .. } => None,
        }
    }
}

impl From<DemandError> for RouteError {
    fn from(err: DemandError) -> Self {
        Self::InvalidDemand(err)
    }
}

impl From<GridError> for RouteError {
    fn from(err: GridError) -> Self {
        Self::Grid(err)
    }
}

impl From<PlacementError> for RouteError {
    fn from(err: PlacementError) -> Self {
        Self::Placement(err)
    }
}

/// Routes `demands` in order on `grid`, starting from `claimed`.
///
/// Each demand reserves its own endpoints and is searched against the cells claimed by the
/// demands before it; its path is committed before the next one starts. Later endpoints are not
/// protected, so an earlier path may take them and leave the later demand unreachable.
///
/// The first unreachable demand ends the run with [`RunResult::Failed`]; malformed input is
/// rejected before `grid` or `claimed` change.
pub fn run_all(
    grid: &mut Grid,
    demands: &[Demand],
    mut claimed: ClaimedSet,
    options: &SearchOptions,
    observer: &mut dyn RouteObserver,
) -> Result<RunReport, RouteError> {
    validate_demands(grid, demands)?;
    info!(demands = demands.len(), heuristic = %options.heuristic, "routing run started");

    let mut paths = Vec::with_capacity(demands.len());
    for (index, demand) in demands.iter().enumerate() {
        debug!(index, %demand, "routing demand");

        // An endpoint already taken by an earlier path keeps its color; the search then fails.
        for cell in [demand.start(), demand.end()] {
            if claimed.reserve(cell, demand.color()) {
                grid.mark_claimed(cell, demand.color());
            }
        }

        let outcome = match find_path(grid, &claimed, demand, options, observer) {
            Ok(outcome) => outcome,
            Err(SearchError::Cancelled { expanded }) => {
                warn!(index, expanded, "routing run cancelled");
                return Err(RouteError::Cancelled { index });
            }
            Err(SearchError::OutOfBounds { cell }) => {
                return Err(RouteError::InvalidDemand(DemandError::OutOfBounds { index, cell }));
            }
        };

        let found = match outcome {
            SearchOutcome::Found(found) => found,
            SearchOutcome::Exhausted { expanded } => {
                let unreachable = UnreachableDemand {
                    index,
                    start: demand.start(),
                    end: demand.end(),
                    color: demand.color().clone(),
                };
                warn!(expanded, "{unreachable}");
                return Ok(RunReport { result: RunResult::Failed(unreachable), paths, claimed });
            }
        };

        let newly = commit_path(grid, &mut claimed, &found, demand.color(), observer)
            .map_err(RouteError::InvariantViolation)?;
        debug!(index, cost = found.cost(), expanded = found.expanded(), newly, "committed path");

        paths.push(RoutedPath {
            index,
            color: demand.color().clone(),
            cells: found.cells(),
            expanded: found.expanded(),
        });
    }

    info!(paths = paths.len(), claimed = claimed.len(), "all demands routed");
    Ok(RunReport { result: RunResult::AllSucceeded, paths, claimed })
}

#[derive(Debug, Clone)]
pub struct RouterConfig {
    pub search: SearchOptions,
    /// Cap on placed endpoints; `None` accepts any number of pairs.
    pub placement_limit: Option<usize>,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self { search: SearchOptions::default(), placement_limit: Some(DEFAULT_PLACEMENT_LIMIT) }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouterState {
    Idle,
    Running,
    AllSucceeded,
    Failed(UnreachableDemand),
    /// The run ended with an error (cancellation or a claim conflict).
    Aborted,
}

impl RouterState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Running => "running",
            Self::AllSucceeded => "finished",
            Self::Failed(_) => "failed",
            Self::Aborted => "aborted",
        }
    }
}

/// Owns one puzzle across edit, run and reset.
///
/// Barriers and endpoints can only be edited while idle. A run consumes the demands (explicit, or
/// paired from placed endpoints) and leaves the router in a terminal state until [`Router::reset`].
#[derive(Debug, Clone)]
pub struct Router {
    config: RouterConfig,
    grid: Grid,
    demands: Vec<Demand>,
    placements: Placements,
    claimed: ClaimedSet,
    paths: Vec<RoutedPath>,
    state: RouterState,
}

impl Router {
    pub fn new(size: usize, config: RouterConfig) -> Self {
        let placements = Placements::with_limit(config.placement_limit);
        Self {
            config,
            grid: Grid::new(size),
            demands: Vec::new(),
            placements,
            claimed: ClaimedSet::new(),
            paths: Vec::new(),
            state: RouterState::Idle,
        }
    }

    pub fn from_puzzle(puzzle: Puzzle, config: RouterConfig) -> Self {
        let (grid, demands) = puzzle.into_parts();
        let mut router = Self::new(0, config);
        router.grid = grid;
        router.demands = demands;
        router
    }

    pub fn state(&self) -> &RouterState {
        &self.state
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn claimed(&self) -> &ClaimedSet {
        &self.claimed
    }

    pub fn paths(&self) -> &[RoutedPath] {
        &self.paths
    }

    pub fn placements(&self) -> &Placements {
        &self.placements
    }

    /// Demands the next run will route.
    pub fn demands(&self) -> Result<Vec<Demand>, DemandError> {
        if self.demands.is_empty() {
            self.placements.to_demands()
        } else {
            Ok(self.demands.clone())
        }
    }

    pub fn set_demands(&mut self, demands: Vec<Demand>) -> Result<(), RouteError> {
        self.ensure_idle()?;
        validate_demands(&self.grid, &demands)?;
        self.placements.clear();
        self.demands = demands;
        Ok(())
    }

    pub fn set_barrier(&mut self, cell: Cell, blocked: bool) -> Result<(), RouteError> {
        self.ensure_idle()?;
        if blocked && self.is_endpoint(cell) {
            return Err(RouteError::EndpointCell { cell });
        }
        self.grid.set_blocked(cell, blocked)?;
        Ok(())
    }

    pub fn toggle_barrier(&mut self, cell: Cell) -> Result<bool, RouteError> {
        let blocked = !self.grid.is_blocked(cell);
        self.set_barrier(cell, blocked)?;
        Ok(blocked)
    }

    /// Places the next endpoint; pairs are colored from the palette in placement order.
    pub fn place_endpoint(&mut self, cell: Cell) -> Result<Color, RouteError> {
        self.ensure_idle()?;
        self.demands.clear();
        Ok(self.placements.place(&self.grid, cell)?)
    }

    pub fn run(&mut self, observer: &mut dyn RouteObserver) -> Result<RunResult, RouteError> {
        self.ensure_idle()?;
        let demands = self.demands()?;

        self.state = RouterState::Running;
        let claimed = std::mem::take(&mut self.claimed);
        match run_all(&mut self.grid, &demands, claimed, &self.config.search, observer) {
            Ok(report) => {
                self.claimed = report.claimed;
                self.paths = report.paths;
                self.state = match &report.result {
                    RunResult::AllSucceeded => RouterState::AllSucceeded,
                    RunResult::Failed(unreachable) => RouterState::Failed(unreachable.clone()),
                };
                Ok(report.result)
            }
            Err(err @ RouteError::InvalidDemand(_)) => {
                // Rejected before anything was touched.
                self.claimed = ClaimedSet::new();
                self.state = RouterState::Idle;
                Err(err)
            }
            Err(err) => {
                self.state = RouterState::Aborted;
                Err(err)
            }
        }
    }

    /// Back to idle with a fresh grid of the same size: barriers, endpoints, demands and claims
    /// are all discarded.
    pub fn reset(&mut self) {
        info!(from = self.state.as_str(), "router reset");
        self.grid = Grid::with_dimensions(self.grid.rows(), self.grid.cols());
        self.demands.clear();
        self.placements.clear();
        self.claimed = ClaimedSet::new();
        self.paths.clear();
        self.state = RouterState::Idle;
    }

    fn ensure_idle(&self) -> Result<(), RouteError> {
        match self.state {
            RouterState::Idle => Ok(()),
            ref other => Err(RouteError::NotIdle { state: other.as_str() }),
        }
    }

    fn is_endpoint(&self, cell: Cell) -> bool {
        self.placements.cells().contains(&cell)
            || self.demands.iter().any(|demand| demand.start() == cell || demand.end() == cell)
    }
}
