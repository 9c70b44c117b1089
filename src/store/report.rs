// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Colorpath and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::model::Cell;
use crate::route::{Heuristic, RoutedPath, RunReport, RunResult, UnreachableDemand};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeJson {
    AllSucceeded,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct FailureJson {
    pub index: usize,
    pub color: String,
    pub start: [usize; 2],
    pub end: [usize; 2],
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PathJson {
    pub index: usize,
    pub color: String,
    pub cost: usize,
    pub expanded: usize,
    pub cells: Vec<[usize; 2]>,
}

/// Machine-readable result of one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SolutionReport {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub puzzle: Option<String>,
    pub heuristic: String,
    pub outcome: OutcomeJson,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failed: Option<FailureJson>,
    pub paths: Vec<PathJson>,
    pub claimed_cells: usize,
}

fn pair(cell: Cell) -> [usize; 2] {
    [cell.row(), cell.col()]
}

impl From<&UnreachableDemand> for FailureJson {
    fn from(unreachable: &UnreachableDemand) -> Self {
        Self {
            index: unreachable.index,
            color: unreachable.color.to_string(),
            start: pair(unreachable.start),
            end: pair(unreachable.end),
        }
    }
}

impl From<&RoutedPath> for PathJson {
    fn from(path: &RoutedPath) -> Self {
        Self {
            index: path.index,
            color: path.color.to_string(),
            cost: path.cost(),
            expanded: path.expanded,
            cells: path.cells.iter().copied().map(pair).collect(),
        }
    }
}

impl SolutionReport {
    pub fn from_run(puzzle: Option<String>, heuristic: Heuristic, report: &RunReport) -> Self {
        let (outcome, failed) = match &report.result {
            RunResult::AllSucceeded => (OutcomeJson::AllSucceeded, None),
            RunResult::Failed(unreachable) => {
                (OutcomeJson::Failed, Some(FailureJson::from(unreachable)))
            }
        };
        Self {
            puzzle,
            heuristic: heuristic.to_string(),
            outcome,
            failed,
            paths: report.paths.iter().map(PathJson::from).collect(),
            claimed_cells: report.claimed.len(),
        }
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
