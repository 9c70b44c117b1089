// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Colorpath and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Collision-aware routing.
//!
//! Demands are routed one at a time with A*; each committed path becomes an obstacle for every
//! later demand of a different color. Earlier demands get priority, which keeps the procedure
//! deterministic but not globally optimal.

pub mod commit;
pub mod heuristic;
pub mod observer;
pub mod router;
pub mod search;

pub use commit::commit_path;
pub use heuristic::{Heuristic, ParseHeuristicError};
pub use observer::{CancelFlag, NoopObserver, OnRedraw, RouteObserver};
pub use router::{
    run_all, RouteError, RoutedPath, Router, RouterConfig, RouterState, RunReport, RunResult,
    UnreachableDemand,
};
pub use search::{
    find_path, FoundPath, Predecessors, SearchError, SearchOptions, SearchOutcome,
};
