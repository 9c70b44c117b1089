// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Colorpath and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::model::{
    Cell, Color, ColorError, Demand, DemandError, Grid, GridError, PlacementError, Placements,
    Puzzle, MAX_GRID_CELLS,
};

/// On-disk puzzle: grid shape, barriers, and either explicit demands or raw endpoint placements.
///
/// `rows`/`cols` take precedence over `size`, which describes a square grid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct PuzzleFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rows: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cols: Option<usize>,
    /// `[row, col]` cells that can never be routed through.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub barriers: Vec<[usize; 2]>,
    /// Routed in order; earlier demands win contested cells.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub demands: Vec<DemandJson>,
    /// Endpoints in placement order, paired up and colored from the palette.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub placements: Vec<[usize; 2]>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct DemandJson {
    pub start: [usize; 2],
    pub end: [usize; 2],
    pub color: String,
}

#[derive(Debug)]
pub enum StoreError {
    Io {
        path: PathBuf,
        source: io::Error,
    },
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
    Parse {
        source: serde_json::Error,
    },
    Size {
        rows: Option<usize>,
        cols: Option<usize>,
    },
    AmbiguousDemands,
    Grid(GridError),
    Color {
        index: usize,
        source: ColorError,
    },
    Placement(PlacementError),
    Demand(DemandError),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "io error at {path:?}: {source}"),
            Self::Json { path, source } => write!(f, "json error at {path:?}: {source}"),
            Self::Parse { source } => write!(f, "cannot parse puzzle: {source}"),
            Self::Size { rows, cols } => {
                write!(
                    f,
                    "puzzle needs a positive size or rows/cols of at most {MAX_GRID_CELLS} cells \
                     (rows={rows:?} cols={cols:?})"
                )
            }
            Self::AmbiguousDemands => {
                write!(f, "puzzle gives both demands and placements; use one of them")
            }
            Self::Grid(err) => write!(f, "{err}"),
            Self::Color { index, source } => write!(f, "demand {index}: {source}"),
            Self::Placement(err) => write!(f, "{err}"),
            Self::Demand(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
            Self::Parse { source } => Some(source),
            Self::Grid(err) => Some(err),
            Self::Color { source, .. } => Some(source),
            Self::Placement(err) => Some(err),
            Self::Demand(err) => Some(err),
            Self::Size { .. } | Self::AmbiguousDemands => None,
        }
    }
}

impl From<GridError> for StoreError {
    fn from(err: GridError) -> Self {
        Self::Grid(err)
    }
}

impl From<PlacementError> for StoreError {
    fn from(err: PlacementError) -> Self {
        Self::Placement(err)
    }
}

impl From<DemandError> for StoreError {
    fn from(err: DemandError) -> Self {
        Self::Demand(err)
    }
}

fn cell([row, col]: [usize; 2]) -> Cell {
    Cell::new(row, col)
}

fn pair(cell: Cell) -> [usize; 2] {
    [cell.row(), cell.col()]
}

impl PuzzleFile {
    /// Builds and validates the puzzle this file describes.
    pub fn into_puzzle(self) -> Result<Puzzle, StoreError> {
        let (rows, cols) = match (self.rows.or(self.size), self.cols.or(self.size)) {
            (Some(rows), Some(cols)) if rows > 0 && cols > 0 => (rows, cols),
            _ => return Err(StoreError::Size { rows: self.rows, cols: self.cols }),
        };

        let mut grid = Grid::try_with_dimensions(rows, cols)
            .map_err(|_| StoreError::Size { rows: Some(rows), cols: Some(cols) })?;
        for barrier in &self.barriers {
            grid.set_blocked(cell(*barrier), true)?;
        }

        let demands = match (self.demands.is_empty(), self.placements.is_empty()) {
            (false, false) => return Err(StoreError::AmbiguousDemands),
            (true, false) => {
                let mut placements = Placements::with_limit(None);
                for placed in &self.placements {
                    placements.place(&grid, cell(*placed))?;
                }
                placements.to_demands()?
            }
            _ => self
                .demands
                .into_iter()
                .enumerate()
                .map(|(index, demand)| {
                    let color = Color::new(&demand.color)
                        .map_err(|source| StoreError::Color { index, source })?;
                    Demand::new(cell(demand.start), cell(demand.end), color).map_err(|_| {
                        StoreError::Demand(DemandError::SameStartAndEnd {
                            index: Some(index),
                            cell: cell(demand.start),
                        })
                    })
                })
                .collect::<Result<Vec<_>, _>>()?,
        };

        Ok(Puzzle::new(grid, demands)?)
    }

    /// Explicit-demand form of `puzzle`; placements are never written back.
    pub fn from_puzzle(puzzle: &Puzzle) -> Self {
        let grid = puzzle.grid();
        let (size, rows, cols) = if grid.rows() == grid.cols() {
            (Some(grid.rows()), None, None)
        } else {
            (None, Some(grid.rows()), Some(grid.cols()))
        };
        Self {
            size,
            rows,
            cols,
            barriers: grid
                .iter()
                .filter(|(_, state)| state.is_blocked())
                .map(|(cell, _)| pair(cell))
                .collect(),
            demands: puzzle
                .demands()
                .iter()
                .map(|demand| DemandJson {
                    start: pair(demand.start()),
                    end: pair(demand.end()),
                    color: demand.color().to_string(),
                })
                .collect(),
            placements: Vec::new(),
        }
    }
}

pub fn parse_puzzle(json: &str) -> Result<Puzzle, StoreError> {
    let file: PuzzleFile =
        serde_json::from_str(json).map_err(|source| StoreError::Parse { source })?;
    file.into_puzzle()
}

pub fn load_puzzle(path: impl AsRef<Path>) -> Result<Puzzle, StoreError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let file: PuzzleFile = serde_json::from_str(&contents).map_err(|source| StoreError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    let puzzle = file.into_puzzle()?;
    debug!(
        path = %path.display(),
        rows = puzzle.grid().rows(),
        cols = puzzle.grid().cols(),
        demands = puzzle.demands().len(),
        "loaded puzzle"
    );
    Ok(puzzle)
}

/// Writes `puzzle` as pretty JSON, replacing `path` atomically.
pub fn save_puzzle(path: impl AsRef<Path>, puzzle: &Puzzle) -> Result<(), StoreError> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(&PuzzleFile::from_puzzle(puzzle)).map_err(|source| {
        StoreError::Json {
            path: path.to_path_buf(),
            source,
        }
    })?;
    write_atomic(path, format!("{json}\n").as_bytes())
}

/// JSON Schema of the puzzle file format.
pub fn puzzle_schema() -> schemars::Schema {
    schemars::schema_for!(PuzzleFile)
}

fn write_atomic(path: &Path, contents: &[u8]) -> Result<(), StoreError> {
    let Some(file_name) = path.file_name() else {
        return Err(StoreError::Io {
            path: path.to_path_buf(),
            source: io::Error::other("path has no file name"),
        });
    };
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    let tmp_path = parent.join(format!(
        ".colorpath.tmp.{}.{}",
        file_name.to_string_lossy(),
        nanos
    ));

    let mut file = fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&tmp_path)
        .map_err(|source| StoreError::Io {
            path: tmp_path.clone(),
            source,
        })?;
    if let Err(source) = file.write_all(contents).and_then(|()| file.sync_all()) {
        drop(file);
        let _ = fs::remove_file(&tmp_path);
        return Err(StoreError::Io {
            path: tmp_path,
            source,
        });
    }
    drop(file);

    if let Err(source) = rename_overwrite(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(StoreError::Io {
            path: path.to_path_buf(),
            source,
        });
    }
    Ok(())
}

fn rename_overwrite(from: &Path, to: &Path) -> io::Result<()> {
    #[cfg(windows)]
    {
        match fs::rename(from, to) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::AlreadyExists => {
                let _ = fs::remove_file(to);
                fs::rename(from, to)
            }
            Err(err) => Err(err),
        }
    }

    #[cfg(not(windows))]
    {
        fs::rename(from, to)
    }
}
