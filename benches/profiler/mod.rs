// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Colorpath and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Shared criterion setup for the routing benches.
//!
//! `COLORPATH_BENCH_SAMPLES`, `COLORPATH_BENCH_WARMUP_MS` and `COLORPATH_BENCH_MEASURE_MS` tune
//! the measurement. With `--profile-time`, a flamegraph titled after the bench is sampled at
//! `COLORPATH_PROFILE_HZ`; `COLORPATH_PROFILE_HZ=0` turns the profiler off.

use std::time::Duration;

use criterion::Criterion;
use pprof::criterion::{Output, PProfProfiler};
use pprof::flamegraph::Options;

#[derive(Debug, Clone, Copy)]
struct BenchSettings {
    samples: usize,
    warm_up: Duration,
    measurement: Duration,
    profile_hz: i32,
}

impl BenchSettings {
    /// Routing runs are short, so fewer samples with a longer window than criterion's default.
    const DEFAULT: Self = Self {
        samples: 30,
        warm_up: Duration::from_millis(1500),
        measurement: Duration::from_secs(4),
        profile_hz: 199,
    };

    fn from_env() -> Self {
        let defaults = Self::DEFAULT;
        Self {
            samples: read("COLORPATH_BENCH_SAMPLES")
                .map_or(defaults.samples, |n: usize| n.clamp(10, 500)),
            warm_up: read("COLORPATH_BENCH_WARMUP_MS")
                .map_or(defaults.warm_up, |ms: u64| Duration::from_millis(ms.max(100))),
            measurement: read("COLORPATH_BENCH_MEASURE_MS")
                .map_or(defaults.measurement, |ms: u64| Duration::from_millis(ms.max(500))),
            profile_hz: read("COLORPATH_PROFILE_HZ")
                .map_or(defaults.profile_hz, |hz: i32| hz.clamp(0, 10_000)),
        }
    }
}

fn read<T: std::str::FromStr>(name: &str) -> Option<T> {
    std::env::var(name).ok()?.trim().parse().ok()
}

/// Criterion for the bench binary `bench`, configured from the environment.
pub fn criterion(bench: &str) -> Criterion {
    let settings = BenchSettings::from_env();
    let criterion = Criterion::default()
        .sample_size(settings.samples)
        .warm_up_time(settings.warm_up)
        .measurement_time(settings.measurement);

    if settings.profile_hz == 0 {
        return criterion;
    }

    let mut flamegraph = Options::default();
    flamegraph.title = format!("colorpath {bench}");
    let output = Output::Flamegraph(Some(flamegraph));
    criterion.with_profiler(PProfProfiler::new(settings.profile_hz, output))
}
