// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Colorpath and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! JSON on disk.
//!
//! Puzzle files go in (grid shape, barriers, demands or placements) and solution reports come
//! out. Both formats are plain serde documents; the puzzle format also publishes a JSON Schema.

pub mod puzzle_file;
pub mod report;

pub use puzzle_file::{
    load_puzzle, parse_puzzle, puzzle_schema, save_puzzle, DemandJson, PuzzleFile, StoreError,
};
pub use report::{FailureJson, OutcomeJson, PathJson, SolutionReport};
