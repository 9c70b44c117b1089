// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Colorpath and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::model::{Cell, Color, Grid};

/// Progress side channel for renderers.
///
/// Called synchronously from inside a run; the grid is lent read-only so an observer can redraw
/// but never mutate routing state. Both hooks default to no-ops.
pub trait RouteObserver {
    /// One frontier cell was expanded.
    fn on_expand(&mut self, _grid: &Grid, _cell: Cell) {}

    /// One path cell was committed to `color`, whether or not it was already held by it.
    fn on_claim(&mut self, _grid: &Grid, _cell: Cell, _color: &Color) {}
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl RouteObserver for NoopObserver {}

/// Adapts a plain "redraw now" closure, invoked on every expansion and every committed cell.
pub struct OnRedraw<F>(pub F);

impl<F: FnMut(&Grid)> RouteObserver for OnRedraw<F> {
    fn on_expand(&mut self, grid: &Grid, _cell: Cell) {
        (self.0)(grid);
    }

    fn on_claim(&mut self, grid: &Grid, _cell: Cell, _color: &Color) {
        (self.0)(grid);
    }
}

impl<T: RouteObserver + ?Sized> RouteObserver for &mut T {
    fn on_expand(&mut self, grid: &Grid, cell: Cell) {
        (**self).on_expand(grid, cell);
    }

    fn on_claim(&mut self, grid: &Grid, cell: Cell, color: &Color) {
        (**self).on_claim(grid, cell, color);
    }
}

/// Cooperative cancellation, checked once per expansion.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag {
    cancelled: Arc<AtomicBool>,
}

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}
