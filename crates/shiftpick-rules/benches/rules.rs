//! Benchmarks for rule checking and coverage.
//!
//! # Benchmarks
//!
//! - **`validate`**: runs the default validator over each test grid.
//! - **`coverage`**: computes per-column coverage for each test grid.
//!
//! # Test Data
//!
//! - **`empty`**: the 7×6 diagonal puzzle with only its fixed cells.
//! - **`solved`**: a complete, violation-free assignment of the same puzzle.
//! - **`conflicted`**: a fully filled grid that breaks every rule in every row.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench rules
//! ```

use std::hint;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use shiftpick_core::ShiftGrid;
use shiftpick_rules::{Validator, coverage};

const GRIDS: [(&str, &str); 3] = [
    (
        "empty",
        "A...../.B..../..D.../...A../....E./.....D/E.....",
    ),
    (
        "solved",
        "AABB.C/BBCC.A/CCD.AB/DD.ABE/..AEE./.EE.CD/E..DD.",
    ),
    (
        "conflicted",
        "EEEDCA/EEEDCA/EEEDCA/EEEDCA/EEEDCA/EEEDCA/EEEDCA",
    ),
];

fn bench_validate(c: &mut Criterion) {
    let validator = Validator::default();
    let mut group = c.benchmark_group("validate");
    for (name, text) in GRIDS {
        let grid: ShiftGrid = text.parse().unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(name), &grid, |b, grid| {
            b.iter(|| validator.validate(hint::black_box(grid)));
        });
    }
    group.finish();
}

fn bench_coverage(c: &mut Criterion) {
    let mut group = c.benchmark_group("coverage");
    for (name, text) in GRIDS {
        let grid: ShiftGrid = text.parse().unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(name), &grid, |b, grid| {
            b.iter(|| coverage(hint::black_box(grid)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_validate, bench_coverage);
criterion_main!(benches);
