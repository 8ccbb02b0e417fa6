//! Batch Sudoku solver.
//!
//! Reads one puzzle in the grid text format, runs the selected deduction
//! rules to their fixed point, and prints the final grid with the
//! termination reason. Exit status: 0 solved, 1 stuck, 2 invalid input or
//! contradiction.

use std::{
    fs,
    io::{self, Read as _},
    path::PathBuf,
    process::ExitCode,
};

use clap::Parser;
use nonagrid_core::{CandidateGrid, DigitGrid};
use nonagrid_solver::{
    Outcome, RuleId, RuleSet, RuleSolver,
    rule::{self, BoxedRule, HiddenTuple},
};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Puzzle file in the grid text format; reads standard input when omitted.
    puzzle: Option<PathBuf>,

    /// Rules to enable, as a string of rule indices 0-9.
    #[arg(long, default_value = "0123456789")]
    rules: String,

    /// First pass on which the advanced rules (6-9) run; 1 runs them from the
    /// start.
    #[arg(long, default_value_t = 2)]
    advanced_start_pass: u32,

    /// Largest hidden-tuple size searched by rule 4.
    #[arg(long, default_value_t = 6, value_parser = clap::value_parser!(u8).range(2..=8))]
    hidden_tuple_max: u8,

    /// Print every deduction event after solving.
    #[arg(long)]
    events: bool,
}

fn read_puzzle(path: Option<&PathBuf>) -> io::Result<String> {
    match path {
        Some(path) => fs::read_to_string(path),
        None => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

fn build_solver(args: &Args, rules: RuleSet) -> RuleSolver {
    let rules: Vec<BoxedRule> = rules
        .iter()
        .map(|id| match id {
            RuleId::HiddenTuple => {
                Box::new(HiddenTuple::with_max_size(args.hidden_tuple_max)) as BoxedRule
            }
            _ => rule::rule_for(id),
        })
        .collect();
    RuleSolver::new(rules).advanced_start_pass(args.advanced_start_pass)
}

fn run(args: &Args) -> Result<Outcome, Box<dyn std::error::Error>> {
    let text = read_puzzle(args.puzzle.as_ref())?;
    let selection: RuleSet = args.rules.parse()?;
    let givens: DigitGrid = text.parse()?;
    log::debug!(
        "{} givens, {} rules enabled",
        givens.given_count(),
        selection.len()
    );

    let mut grid = CandidateGrid::from_digit_grid(&givens);
    let solver = build_solver(args, selection);
    let report = solver.solve(&mut grid)?;

    print!("{}", grid.to_digit_grid());
    println!("{}", report.outcome);

    if !report.outcome.is_solved() {
        println!("remaining candidates:");
        for pos in grid.unsettled_cells() {
            println!("  {pos}: {}", grid.candidates_at(pos));
        }
    }
    if args.events {
        for event in &report.events {
            println!("{event}");
        }
    }
    Ok(report.outcome)
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();
    match run(&args) {
        Ok(Outcome::Solved { .. }) => ExitCode::SUCCESS,
        Ok(Outcome::Stuck { .. }) => ExitCode::from(1),
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(2)
        }
    }
}
