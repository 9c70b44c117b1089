// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Colorpath and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Rendering for grids and runs in progress.
//!
//! Text renders are one glyph per cell; the terminal animator is a [`crate::route::RouteObserver`]
//! that redraws the grid as the router works.

mod grid_text;
pub mod terminal;

pub use grid_text::{
    cell_glyph, endpoint_cells, render_grid_text, BLOCKED_GLYPH, FREE_GLYPH,
};
pub use terminal::{terminal_color, TerminalAnimator, DEFAULT_CLAIM_DELAY};
