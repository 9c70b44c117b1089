// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Colorpath and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Colorpath CLI entrypoint.
//!
//! Solves one or more puzzle files (or the built-in demo) and prints each solved grid, or a JSON
//! solution report with `--json`. Independent puzzles are solved in parallel unless `--animate`
//! asks for a live redraw in the terminal.

use std::error::Error;
use std::io::{self, Write};
use std::time::Duration;

use colorpath::model::Puzzle;
use colorpath::render::{endpoint_cells, render_grid_text, TerminalAnimator, DEFAULT_CLAIM_DELAY};
use colorpath::route::{
    Heuristic, NoopObserver, RouteObserver, Router, RouterConfig, RunReport, RunResult,
    SearchOptions,
};
use colorpath::store::{load_puzzle, puzzle_schema, SolutionReport};
use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use rayon::prelude::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

type BoxError = Box<dyn Error + Send + Sync>;

const LOG_ENV: &str = "COLORPATH_LOG";

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} [--heuristic manhattan|chebyshev] [--json] [--animate [--delay-ms <ms>]] <puzzle.json>...\n  {program} --demo [--heuristic manhattan|chebyshev] [--json] [--animate [--delay-ms <ms>]]\n  {program} --schema\n\nPuzzles are routed demand by demand; the exit status is 1 if any puzzle has an unreachable demand\nor cannot be loaded.\n--animate redraws the grid on every expansion and pauses after each claimed cell\n(default {}ms). Set {LOG_ENV} (e.g. {LOG_ENV}=debug) to control logging on stderr.",
        DEFAULT_CLAIM_DELAY.as_millis()
    );
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    heuristic: Option<Heuristic>,
    json: bool,
    animate: bool,
    delay_ms: Option<u64>,
    demo: bool,
    schema: bool,
    files: Vec<String>,
}

impl CliOptions {
    fn search(&self) -> SearchOptions {
        SearchOptions::with_heuristic(self.heuristic.unwrap_or_default())
    }

    fn claim_delay(&self) -> Duration {
        self.delay_ms.map(Duration::from_millis).unwrap_or(DEFAULT_CLAIM_DELAY)
    }
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--heuristic" => {
                if options.heuristic.is_some() {
                    return Err(());
                }
                let raw = args.next().ok_or(())?;
                options.heuristic = Some(raw.parse().map_err(|_| ())?);
            }
            "--json" => {
                if options.json {
                    return Err(());
                }
                options.json = true;
            }
            "--animate" => {
                if options.animate {
                    return Err(());
                }
                options.animate = true;
            }
            "--delay-ms" => {
                if options.delay_ms.is_some() {
                    return Err(());
                }
                let raw = args.next().ok_or(())?;
                options.delay_ms = Some(raw.parse().map_err(|_| ())?);
            }
            "--demo" => {
                if options.demo {
                    return Err(());
                }
                options.demo = true;
            }
            "--schema" => {
                if options.schema {
                    return Err(());
                }
                options.schema = true;
            }
            _ if arg.starts_with('-') => return Err(()),
            _ => options.files.push(arg),
        }
    }

    if options.schema {
        let only_schema = CliOptions { schema: true, ..CliOptions::default() };
        return if options == only_schema { Ok(options) } else { Err(()) };
    }

    if options.demo == !options.files.is_empty() {
        return Err(());
    }

    if options.delay_ms.is_some() && !options.animate {
        return Err(());
    }

    if options.animate && options.json {
        return Err(());
    }

    Ok(options)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Printed output of one puzzle, and whether every demand was routed.
struct Solved {
    output: String,
    success: bool,
}

fn solve(
    name: &str,
    puzzle: Puzzle,
    options: &CliOptions,
    observer: &mut dyn RouteObserver,
) -> Result<Solved, BoxError> {
    let endpoints = endpoint_cells(puzzle.demands());
    let config = RouterConfig { search: options.search(), placement_limit: None };
    let mut router = Router::from_puzzle(puzzle, config);

    let result = router.run(observer)?;
    let success = result.is_success();
    info!(puzzle = name, state = router.state().as_str(), "puzzle finished");

    let output = if options.json {
        let report = RunReport {
            result,
            paths: router.paths().to_vec(),
            claimed: router.claimed().clone(),
        };
        SolutionReport::from_run(Some(name.to_owned()), options.search().heuristic, &report)
            .to_json_pretty()?
    } else {
        let mut text = format!("== {name} ==\n{}\n", render_grid_text(router.grid(), &endpoints));
        match result {
            RunResult::AllSucceeded => text.push_str(&format!(
                "solved: {} paths, {} cells claimed\n",
                router.paths().len(),
                router.claimed().len()
            )),
            RunResult::Failed(unreachable) => text.push_str(&format!("{unreachable}\n")),
        }
        text
    };

    Ok(Solved { output, success })
}

fn load_input(input: &str) -> Result<Puzzle, BoxError> {
    Ok(load_puzzle(input).map_err(|err| format!("{input}: {err}"))?)
}

fn solve_animated(name: &str, puzzle: Puzzle, options: &CliOptions) -> Result<Solved, BoxError> {
    let mut stdout = io::stdout();
    execute!(stdout, Hide)?;
    let mut animator = TerminalAnimator::new(stdout.lock(), endpoint_cells(puzzle.demands()))
        .with_claim_delay(options.claim_delay());
    let solved = solve(name, puzzle, options, &mut animator);
    let draw_error = animator.take_error();
    drop(animator);
    execute!(stdout, Show)?;

    if let Some(err) = draw_error {
        return Err(err.into());
    }
    solved
}

fn main() {
    let result = (|| -> Result<bool, Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "colorpath".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        init_tracing();

        if options.schema {
            println!("{}", serde_json::to_string_pretty(&puzzle_schema())?);
            return Ok(true);
        }

        let inputs: Vec<String> =
            if options.demo { vec!["demo".to_owned()] } else { options.files.clone() };
        let load = |input: &str| -> Result<Puzzle, BoxError> {
            if options.demo {
                Ok(Puzzle::demo())
            } else {
                load_input(input)
            }
        };

        let results: Vec<Result<Solved, BoxError>> = if options.animate {
            inputs
                .iter()
                .map(|input| -> Result<Solved, BoxError> {
                    solve_animated(input, load(input.as_str())?, &options)
                })
                .collect()
        } else {
            inputs
                .par_iter()
                .map(|input| -> Result<Solved, BoxError> {
                    solve(input, load(input.as_str())?, &options, &mut NoopObserver)
                })
                .collect()
        };

        let mut all_solved = true;
        let stdout = io::stdout();
        let mut out = stdout.lock();
        for result in results {
            match result {
                Ok(solved) => {
                    all_solved &= solved.success;
                    writeln!(out, "{}", solved.output.trim_end())?;
                }
                Err(err) => {
                    all_solved = false;
                    eprintln!("colorpath: {err}");
                }
            }
        }
        Ok(all_solved)
    })();

    match result {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(err) => {
            eprintln!("colorpath: {err}");
            std::process::exit(1);
        }
    }
}
