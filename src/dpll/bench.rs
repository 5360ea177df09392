use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Context;
use log::info;
use serde::Serialize;

use crate::data_structures::{Formula, Heuristic, Statistics};
use crate::dpll::dpll::SolveResult;
use crate::dpll::solve;
use crate::util::read_instance_name;

const BENCH_HEURISTICS: [Heuristic; 3] = [Heuristic::Random, Heuristic::Satz, Heuristic::Lefv];

/*
A struct to store the outcome of a single instance under a single branching
heuristic.
*/
#[derive(Serialize)]
pub struct InstanceReport {
    pub instance: String,
    pub heuristic: &'static str,
    pub result: &'static str,
    pub runtime_ms: u128,
    pub statistics: Statistics,
    pub unit_assignments: u64,
}

/*
A struct to store the mean search effort of one heuristic over the whole
instance set.
*/
#[derive(Serialize)]
pub struct HeuristicSummary {
    pub heuristic: &'static str,
    pub instances: usize,
    pub mean_splits: f64,
    pub mean_backtracks: f64,
}

#[derive(Serialize)]
pub struct BenchReport {
    pub instance_count: usize,
    pub summaries: Vec<HeuristicSummary>,
    pub runs: Vec<InstanceReport>,
}

/*
A function to run a directory of instances in DIMACS format under all three
branching heuristics, collecting runtime and search statistics for each
run, with per-heuristic means for comparing the heuristics against each
other.

Stores detailed results as JSON in a file named "results-<output_name>".
*/
pub fn run_bench_directory(
    directory: &Path,
    seed: Option<u64>,
    output_name: &str,
) -> anyhow::Result<()> {
    let mut instance_paths: Vec<PathBuf> = fs::read_dir(directory)
        .with_context(|| format!("cannot read benchmark directory {}", directory.display()))?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.extension()
                .and_then(|extension| extension.to_str())
                .map(|extension| extension.eq_ignore_ascii_case("cnf"))
                .unwrap_or(false)
        })
        .collect();
    instance_paths.sort();

    let bench_timer = Instant::now();
    let mut runs = Vec::new();
    for path in &instance_paths {
        let dimacs_text = fs::read_to_string(path)
            .with_context(|| format!("cannot read instance {}", path.display()))?;
        let instance = read_instance_name(&path.display().to_string());
        for heuristic in &BENCH_HEURISTICS {
            // Parse fresh per run so every heuristic starts from the same state.
            let mut formula = Formula::parse_dimacs(&dimacs_text)
                .with_context(|| format!("cannot parse instance {}", path.display()))?;
            let statistics = &mut Statistics::new();
            let instance_timer = Instant::now();
            let result = solve(&mut formula, *heuristic, seed, statistics);
            let runtime = instance_timer.elapsed();
            info!(
                "{} with {}: {:?} in {:?} ({} splits, {} backtracks)",
                instance,
                heuristic.name(),
                result,
                runtime,
                statistics.split_count,
                statistics.backtrack_count
            );
            runs.push(InstanceReport {
                instance: instance.clone(),
                heuristic: heuristic.name(),
                result: match result {
                    SolveResult::SAT => "sat",
                    SolveResult::UNSAT => "unsat",
                },
                runtime_ms: runtime.as_millis(),
                statistics: statistics.clone(),
                unit_assignments: formula.unit_assignments,
            });
        }
    }

    let mut summaries = Vec::new();
    for heuristic in &BENCH_HEURISTICS {
        let selected: Vec<&InstanceReport> = runs
            .iter()
            .filter(|run| run.heuristic == heuristic.name())
            .collect();
        if selected.is_empty() {
            continue;
        }
        let count = selected.len();
        summaries.push(HeuristicSummary {
            heuristic: heuristic.name(),
            instances: count,
            mean_splits: selected
                .iter()
                .map(|run| run.statistics.split_count as f64)
                .sum::<f64>()
                / count as f64,
            mean_backtracks: selected
                .iter()
                .map(|run| run.statistics.backtrack_count as f64)
                .sum::<f64>()
                / count as f64,
        });
    }

    let report = BenchReport {
        instance_count: instance_paths.len(),
        summaries,
        runs,
    };
    let pathname = format!("results-{}", output_name);
    fs::write(&pathname, serde_json::to_string_pretty(&report)?)
        .with_context(|| format!("cannot write benchmark report {}", pathname))?;
    info!("benchmark of {} instances finished in {:?}", instance_paths.len(), bench_timer.elapsed());
    println!("Benchmark results written to {}", pathname);
    return Ok(());
}
