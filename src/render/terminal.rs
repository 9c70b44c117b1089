// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Colorpath and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Live terminal redraw of a run in progress.

use std::collections::BTreeSet;
use std::io::{self, Write};
use std::time::Duration;

use crossterm::cursor::MoveTo;
use crossterm::style::{Color as TermColor, Print, ResetColor, SetForegroundColor};
use crossterm::terminal::{Clear, ClearType};
use crossterm::queue;

use super::grid_text::cell_glyph;
use crate::model::{Cell, CellState, Color, Grid};
use crate::route::RouteObserver;

/// Pause after each committed cell in the reference animation.
pub const DEFAULT_CLAIM_DELAY: Duration = Duration::from_millis(50);

/// Terminal color for a palette name; unknown names render in the default foreground.
pub fn terminal_color(color: &Color) -> Option<TermColor> {
    match color.as_str() {
        "red" => Some(TermColor::Red),
        "green" => Some(TermColor::Green),
        "blue" => Some(TermColor::Blue),
        "orange" => Some(TermColor::DarkYellow),
        "purple" => Some(TermColor::Magenta),
        "yellow" => Some(TermColor::Yellow),
        _ => None,
    }
}

/// Redraws the whole grid on every expansion and every committed cell.
///
/// Observers cannot fail a run, so the first write error is kept and drawing stops; callers can
/// collect it with [`TerminalAnimator::take_error`] afterwards.
pub struct TerminalAnimator<W: Write> {
    out: W,
    endpoints: BTreeSet<Cell>,
    claim_delay: Duration,
    draw_expansions: bool,
    error: Option<io::Error>,
}

impl<W: Write> TerminalAnimator<W> {
    pub fn new(out: W, endpoints: BTreeSet<Cell>) -> Self {
        Self {
            out,
            endpoints,
            claim_delay: DEFAULT_CLAIM_DELAY,
            draw_expansions: true,
            error: None,
        }
    }

    pub fn with_claim_delay(mut self, delay: Duration) -> Self {
        self.claim_delay = delay;
        self
    }

    /// Only redraw on committed cells.
    pub fn claims_only(mut self) -> Self {
        self.draw_expansions = false;
        self
    }

    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Draws one frame unless an earlier frame already failed.
    pub fn draw(&mut self, grid: &Grid) {
        if self.error.is_some() {
            return;
        }
        if let Err(err) = self.write_frame(grid) {
            self.error = Some(err);
        }
    }

    fn write_frame(&mut self, grid: &Grid) -> io::Result<()> {
        queue!(self.out, MoveTo(0, 0), Clear(ClearType::All))?;
        for row in 0..grid.rows() {
            for col in 0..grid.cols() {
                let cell = Cell::new(row, col);
                let state = grid.state(cell).unwrap_or(&CellState::Free);
                let glyph = cell_glyph(state, self.endpoints.contains(&cell));
                match state.claimed_by().and_then(terminal_color) {
                    Some(color) => {
                        queue!(self.out, SetForegroundColor(color), Print(glyph), ResetColor)?
                    }
                    None => queue!(self.out, Print(glyph))?,
                }
            }
            queue!(self.out, Print("\r\n"))?;
        }
        self.out.flush()
    }
}

impl<W: Write> RouteObserver for TerminalAnimator<W> {
    fn on_expand(&mut self, grid: &Grid, _cell: Cell) {
        if self.draw_expansions {
            self.draw(grid);
        }
    }

    fn on_claim(&mut self, grid: &Grid, _cell: Cell, _color: &Color) {
        self.draw(grid);
        if !self.claim_delay.is_zero() {
            std::thread::sleep(self.claim_delay);
        }
    }
}
