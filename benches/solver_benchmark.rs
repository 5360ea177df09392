use criterion::{criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use dpll_solver::data_structures::{Formula, Heuristic, Statistics};
use dpll_solver::dpll::solve;

/*
Generates a uniform random 3-SAT instance in DIMACS format with distinct
variables per clause. A fixed seed keeps the instance stable across
benchmark runs.
*/
fn random_three_sat(variables: i32, clauses: usize, seed: u64) -> String {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut dimacs_text = String::new();
    for _ in 0..clauses {
        let mut literals: Vec<i32> = Vec::new();
        while literals.len() < 3 {
            let variable = rng.gen_range(1, variables + 1);
            if literals.iter().any(|&held| held.abs() == variable) {
                continue;
            }
            let sign = if rng.gen::<bool>() { 1 } else { -1 };
            literals.push(sign * variable);
        }
        let line: Vec<String> = literals.iter().map(|literal| literal.to_string()).collect();
        dimacs_text += &format!("{} 0\n", line.join(" "));
    }
    dimacs_text
}

fn bench_heuristics(c: &mut Criterion) {
    // Clause/variable ratio around the hard region for random 3-SAT.
    let instance = random_three_sat(16, 68, 1);

    let mut group = c.benchmark_group("heuristics");
    for heuristic in [Heuristic::Random, Heuristic::Satz, Heuristic::Lefv] {
        group.bench_function(heuristic.name(), |b| {
            b.iter(|| {
                let mut formula = Formula::parse_dimacs(&instance).unwrap();
                let mut statistics = Statistics::new();
                solve(&mut formula, heuristic, Some(7), &mut statistics)
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_heuristics);
criterion_main!(benches);
