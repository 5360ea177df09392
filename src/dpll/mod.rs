pub mod bench;
pub mod dpll;
pub mod simplify;
mod dpll_tests;

use std::fs;
use std::path::Path;
use std::time::Instant;

use anyhow::Context;
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::data_structures::{Formula, Heuristic, Statistics};
use crate::dpll::dpll::{dpll, SolveResult};
use crate::solution::write_solution;

/*
A function to solve an in-memory formula with the given branching
heuristic. A seed fixes the random source, making the run reproducible;
without one the random source is drawn from entropy.
*/
pub fn solve(
    formula: &mut Formula,
    heuristic: Heuristic,
    seed: Option<u64>,
    statistics: &mut Statistics,
) -> SolveResult {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    return dpll(formula, heuristic, statistics, &mut rng);
}

/*
A function to run a single instance in DIMACS format: parse, solve, and
write the solution file, checking for satisfiability and unsatisfiability.

The solution is written next to the input with the final extension replaced
by "out"; an unsatisfiable instance produces an empty file.
*/
pub fn run_instance(path: &Path, heuristic: Heuristic, seed: Option<u64>) -> anyhow::Result<()> {
    let dimacs_text = fs::read_to_string(path)
        .with_context(|| format!("cannot read input file {}", path.display()))?;
    let mut formula = Formula::parse_dimacs(&dimacs_text)?;
    info!(
        "parsed {} variables and {} clauses from {}",
        formula.variables.len(),
        formula.clauses.len(),
        path.display()
    );

    let statistics = &mut Statistics::new();
    let timer = Instant::now();
    let result = solve(&mut formula, heuristic, seed, statistics);
    info!(
        "{:?} with {} after {} splits and {} backtracks ({} unit assignments) in {:?}",
        result,
        heuristic.name(),
        statistics.split_count,
        statistics.backtrack_count,
        formula.unit_assignments,
        timer.elapsed()
    );

    let output_path = path.with_extension("out");
    write_solution(&formula, result, &output_path)
        .with_context(|| format!("cannot write solution file {}", output_path.display()))?;
    match result {
        SolveResult::SAT => println!(
            "Problem is satisfiable. Solution written to {}",
            output_path.display()
        ),
        SolveResult::UNSAT => println!("Problem is unsatisfiable"),
    }
    return Ok(());
}
