// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Colorpath and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::VecDeque;

use rstest::rstest;

use super::{find_path, FoundPath, SearchError, SearchOptions, SearchOutcome};
use crate::model::fixtures::{c, color, demand, grid_from_rows};
use crate::model::{Cell, ClaimedSet, Grid};
use crate::route::heuristic::Heuristic;
use crate::route::observer::{CancelFlag, NoopObserver, OnRedraw};

fn bfs_distance(grid: &Grid, start: Cell, end: Cell) -> Option<u32> {
    let mut dist = vec![None::<u32>; grid.len()];
    let mut queue = VecDeque::from([start]);
    dist[grid.index_of(start)?] = Some(0);
    while let Some(cell) = queue.pop_front() {
        let d = dist[grid.index_of(cell)?]?;
        if cell == end {
            return Some(d);
        }
        for next in grid.neighbors(cell) {
            let idx = grid.index_of(next)?;
            if dist[idx].is_none() {
                dist[idx] = Some(d + 1);
                queue.push_back(next);
            }
        }
    }
    None
}

fn search(grid: &Grid, claimed: &ClaimedSet, start: Cell, end: Cell, name: &str) -> SearchOutcome {
    find_path(
        grid,
        claimed,
        &demand(start, end, name),
        &SearchOptions::default(),
        &mut NoopObserver,
    )
    .expect("search")
}

fn found(outcome: SearchOutcome) -> FoundPath {
    match outcome {
        SearchOutcome::Found(path) => path,
        SearchOutcome::Exhausted { expanded } => {
            panic!("expected a path, search exhausted after {expanded} expansions")
        }
    }
}

fn assert_contiguous(cells: &[Cell]) {
    for pair in cells.windows(2) {
        let step = pair[0].row().abs_diff(pair[1].row()) + pair[0].col().abs_diff(pair[1].col());
        assert_eq!(step, 1, "non-adjacent step {} -> {}", pair[0], pair[1]);
    }
}

#[rstest]
#[case::manhattan(Heuristic::Manhattan)]
#[case::chebyshev(Heuristic::Chebyshev)]
fn routes_straight_along_an_open_row(#[case] heuristic: Heuristic) {
    let grid = Grid::new(8);
    let outcome = find_path(
        &grid,
        &ClaimedSet::new(),
        &demand(c(0, 0), c(0, 7), "red"),
        &SearchOptions::with_heuristic(heuristic),
        &mut NoopObserver,
    )
    .expect("search");

    let path = found(outcome);
    assert_eq!(path.cost(), 7);
    assert_eq!(path.cells(), (0..8).map(|col| c(0, col)).collect::<Vec<_>>());
}

#[rstest]
#[case::manhattan(Heuristic::Manhattan)]
#[case::chebyshev(Heuristic::Chebyshev)]
fn path_length_matches_bfs_around_barriers(#[case] heuristic: Heuristic) {
    let grid = grid_from_rows(&[
        "..........",
        ".########.",
        ".#......#.",
        ".#.####.#.",
        ".#.#..#.#.",
        ".#.#.##.#.",
        ".#.#....#.",
        ".#.######.",
        ".#........",
        ".#########",
    ]);
    let (start, end) = (c(4, 4), c(9, 0));

    let outcome = find_path(
        &grid,
        &ClaimedSet::new(),
        &demand(start, end, "green"),
        &SearchOptions::with_heuristic(heuristic),
        &mut NoopObserver,
    )
    .expect("search");
    let path = found(outcome);

    assert_eq!(Some(path.cost()), bfs_distance(&grid, start, end));
    let cells = path.cells();
    assert_eq!(cells.len() as u32, path.cost() + 1);
    assert_eq!(cells.first(), Some(&start));
    assert_eq!(cells.last(), Some(&end));
    assert_contiguous(&cells);
    assert!(cells.iter().all(|cell| !grid.is_blocked(*cell)));
}

#[test]
fn equal_cost_ties_go_to_the_first_inserted_cell() {
    let grid = Grid::new(3);
    let claimed = ClaimedSet::new();

    let first = found(search(&grid, &claimed, c(0, 0), c(1, 1), "red"));
    let second = found(search(&grid, &claimed, c(0, 0), c(1, 1), "red"));

    // Down is inserted before right, so the downward detour wins the tie.
    assert_eq!(first.cells(), vec![c(0, 0), c(1, 0), c(1, 1)]);
    assert_eq!(first, second);
}

#[test]
fn other_colors_are_obstacles() {
    let grid = Grid::new(3);
    let mut claimed = ClaimedSet::new();
    for row in 0..3 {
        claimed.claim(c(row, 1), &color("red")).expect("claim");
    }

    let outcome = search(&grid, &claimed, c(0, 0), c(0, 2), "blue");
    assert!(matches!(outcome, SearchOutcome::Exhausted { .. }), "got {outcome:?}");
}

#[test]
fn same_color_claims_are_pass_through() {
    let grid = Grid::new(3);
    let mut claimed = ClaimedSet::new();
    for row in 0..3 {
        claimed.claim(c(row, 1), &color("red")).expect("claim");
    }

    let path = found(search(&grid, &claimed, c(0, 0), c(0, 2), "red"));
    assert_eq!(path.cells(), vec![c(0, 0), c(0, 1), c(0, 2)]);
}

#[test]
fn detours_around_a_foreign_claim() {
    let grid = Grid::new(3);
    let mut claimed = ClaimedSet::new();
    claimed.claim(c(0, 1), &color("red")).expect("claim");

    let path = found(search(&grid, &claimed, c(0, 0), c(0, 2), "blue"));
    assert_eq!(path.cost(), 4);
    assert!(!path.cells().contains(&c(0, 1)));
}

#[test]
fn walled_off_end_exhausts_the_frontier() {
    let grid = grid_from_rows(&["..#..", "..#..", "..#.."]);
    let outcome = search(&grid, &ClaimedSet::new(), c(0, 0), c(2, 4), "red");
    assert_eq!(outcome, SearchOutcome::Exhausted { expanded: 6 });
}

#[test]
fn observer_sees_every_expansion() {
    let grid = Grid::new(6);
    let mut redraws = 0usize;
    let outcome = find_path(
        &grid,
        &ClaimedSet::new(),
        &demand(c(5, 0), c(0, 5), "red"),
        &SearchOptions::default(),
        &mut OnRedraw(|_: &Grid| redraws += 1),
    )
    .expect("search");

    let path = found(outcome);
    assert_eq!(redraws, path.expanded());
    assert!(redraws >= 10);
}

#[test]
fn cancelled_search_stops_at_the_first_expansion() {
    let cancel = CancelFlag::new();
    cancel.cancel();
    let options = SearchOptions { heuristic: Heuristic::Manhattan, cancel: Some(cancel) };

    let result = find_path(
        &Grid::new(4),
        &ClaimedSet::new(),
        &demand(c(0, 0), c(3, 3), "red"),
        &options,
        &mut NoopObserver,
    );
    assert_eq!(result, Err(SearchError::Cancelled { expanded: 0 }));
}

#[test]
fn out_of_bounds_endpoints_are_errors() {
    let result = find_path(
        &Grid::new(2),
        &ClaimedSet::new(),
        &demand(c(0, 0), c(5, 5), "red"),
        &SearchOptions::default(),
        &mut NoopObserver,
    );
    assert_eq!(result, Err(SearchError::OutOfBounds { cell: c(5, 5) }));
}

#[test]
fn predecessors_link_back_to_the_start() {
    let grid = Grid::new(4);
    let path = found(search(&grid, &ClaimedSet::new(), c(3, 3), c(0, 0), "red"));

    let mut cursor = path.end();
    let mut steps = 0;
    while let Some(prev) = path.predecessors().predecessor(cursor) {
        cursor = prev;
        steps += 1;
    }
    assert_eq!(cursor, path.start());
    assert_eq!(steps, path.cost());
}

#[test]
fn endpoint_held_by_another_color_is_unreachable() {
    let grid = Grid::new(3);
    let mut claimed = ClaimedSet::new();
    claimed.claim(c(0, 0), &color("red")).expect("claim");

    let outcome = search(&grid, &claimed, c(0, 0), c(2, 2), "blue");
    assert_eq!(outcome, SearchOutcome::Exhausted { expanded: 0 });
    let outcome = search(&grid, &claimed, c(2, 2), c(0, 0), "blue");
    assert_eq!(outcome, SearchOutcome::Exhausted { expanded: 0 });
}
