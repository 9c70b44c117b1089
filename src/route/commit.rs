// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Colorpath and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use tracing::error;

use super::observer::RouteObserver;
use super::search::FoundPath;
use crate::model::{ClaimConflict, ClaimedSet, Color, Grid};

/// Claims every cell of `path` except its start for `color`, walking back from the end.
///
/// The observer hears about every committed cell, including ones `color` already held (the
/// reserved end). Returns the number of newly claimed cells; committing the same path again
/// claims nothing. A cell held by another color is never overwritten: the walk stops and the
/// conflict is returned.
pub fn commit_path(
    grid: &mut Grid,
    claimed: &mut ClaimedSet,
    path: &FoundPath,
    color: &Color,
    observer: &mut dyn RouteObserver,
) -> Result<usize, ClaimConflict> {
    let mut newly_claimed = 0usize;

    for cell in path.walk_back().filter(|cell| *cell != path.start()) {
        match claimed.claim(cell, color) {
            Ok(true) => {
                grid.mark_claimed(cell, color);
                newly_claimed += 1;
                observer.on_claim(grid, cell, color);
            }
            Ok(false) => {
                if grid.state(cell).and_then(|state| state.claimed_by()) != Some(color) {
                    grid.mark_claimed(cell, color);
                }
                observer.on_claim(grid, cell, color);
            }
            Err(conflict) => {
                error!(%conflict, "path crosses a cell of another color");
                return Err(conflict);
            }
        }
    }

    Ok(newly_claimed)
}
