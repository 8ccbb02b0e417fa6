//! Micro-benchmarks for rule applications and full solves.
//!
//! ```sh
//! cargo bench --bench rules
//! ```

use std::hint;

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use nonagrid_core::{CandidateGrid, Digit, DigitGrid, Position};
use nonagrid_solver::{
    EventLog, RuleSolver,
    rule::{HiddenSingle, NakedSingle, Rule, XWing},
};

const PUZZLE: &str = "
    53. .7. ...
    6.. 195 ...
    .98 ... .6.
    8.. .6. ..3
    4.. 8.3 ..1
    7.. .2. ..6
    .6. ... 28.
    ... 419 ..5
    ... .8. .79
";

fn puzzle_grid() -> CandidateGrid {
    let givens: DigitGrid = PUZZLE.parse().unwrap();
    CandidateGrid::from_digit_grid(&givens)
}

fn x_wing_grid() -> CandidateGrid {
    let mut grid = CandidateGrid::new();
    for row in [0, 4] {
        for col in 0..9 {
            if col != 1 && col != 7 {
                grid.remove_candidate(Position::new(row, col), Digit::D1);
            }
        }
    }
    grid
}

fn bench_rule<R: Rule>(c: &mut Criterion, name: &str, rule: &R, grid: &CandidateGrid) {
    c.bench_with_input(BenchmarkId::new("rule_apply", name), grid, |b, grid| {
        b.iter_batched_ref(
            || (hint::black_box(grid.clone()), EventLog::new()),
            |(grid, events)| {
                let changed = rule.apply(grid, events).unwrap();
                hint::black_box(changed)
            },
            BatchSize::SmallInput,
        );
    });
}

fn bench_rule_applications(c: &mut Criterion) {
    bench_rule(c, "naked_single", &NakedSingle::new(), &puzzle_grid());
    bench_rule(c, "hidden_single", &HiddenSingle::new(), &puzzle_grid());
    bench_rule(c, "x_wing", &XWing::new(), &x_wing_grid());
    bench_rule(c, "x_wing_empty", &XWing::new(), &CandidateGrid::new());
}

fn bench_full_solve(c: &mut Criterion) {
    let solver = RuleSolver::with_all_rules();
    c.bench_function("solve_easy_puzzle", |b| {
        b.iter_batched_ref(
            || hint::black_box(puzzle_grid()),
            |grid| {
                let report = solver.solve(grid).unwrap();
                hint::black_box(report.outcome)
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_rule_applications, bench_full_solve);
criterion_main!(benches);
