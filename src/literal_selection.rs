use log::debug;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::data_structures::{Clause, Formula, Heuristic};
use crate::dpll::simplify::{simplify, SimplifyOutcome};

// Occurrence profile a variable must meet before the lookahead probes it:
// both polarities at least MINIMUM_POLARITY_COUNT, combined occurrences at
// least MINIMUM_COMBINED_COUNT (a mean of 14 per polarity).
const MINIMUM_COMBINED_COUNT: usize = 28;
const MINIMUM_POLARITY_COUNT: usize = 4;
const SCORED_CANDIDATE_LIMIT: usize = 5;

/*
A function to select the literal the engine assumes next, according to the
configured heuristic. The engine tries the returned literal first and its
complement on backtrack.

Must only be called while at least one variable is unassigned.
*/
pub fn select_literal(formula: &Formula, heuristic: Heuristic, rng: &mut StdRng) -> i32 {
    match heuristic {
        Heuristic::Random => random_split(formula, rng),
        Heuristic::Satz => satz_split(formula, rng),
        Heuristic::Lefv => lefv_split(formula, rng),
    }
}

/*
A function to choose an unassigned variable uniformly at random, with a
uniformly random sign.
*/
pub fn random_split(formula: &Formula, rng: &mut StdRng) -> i32 {
    let unassigned = formula.unassigned_variables();
    let variable = *unassigned
        .choose(rng)
        .expect("no unassigned variable left to split on");
    let sign = *[1, -1].choose(rng).expect("sign choice");
    return sign * variable;
}

/*
A function to choose a literal from the last clause the simplifier
falsified a literal in, keeping the sign it occurs with there. The stored
clause may reference variables that have been assigned since; only the
literals still free are sampled. When none remain the choice falls back to
a random split.
*/
pub fn lefv_split(formula: &Formula, rng: &mut StdRng) -> i32 {
    let free_literals: Vec<i32> = formula
        .lefv_clause
        .iter()
        .filter(|&&literal| formula.assignment_of(literal.abs()) == 0)
        .cloned()
        .collect();
    match free_literals.choose(rng) {
        Some(&literal) => literal,
        None => random_split(formula, rng),
    }
}

/*
A function to choose a literal with the Satz lookahead. Candidate variables
whose occurrence profile meets the threshold are probed on both polarities:
the candidate is asserted as a unit clause on an independent copy, which is
then simplified. A probe that turns unsatisfiable forces the complementary
literal immediately. Otherwise the candidate is scored by how many of the
currently shortest clauses each probe discharged, and after five scored
candidates the best one is returned. When no candidate meets the threshold
the choice falls back to a random split.
*/
pub fn satz_split(formula: &Formula, rng: &mut StdRng) -> i32 {
    let minimum_clauses = minimum_length_clauses(formula);
    let mut scores: Vec<(i32, i64)> = Vec::new();
    for &variable in &formula.variables {
        if formula.assignment_of(variable) != 0 {
            continue;
        }
        let positive_count = formula.occurrence_count(variable);
        let negative_count = formula.occurrence_count(-variable);
        if positive_count + negative_count < MINIMUM_COMBINED_COUNT
            || positive_count < MINIMUM_POLARITY_COUNT
            || negative_count < MINIMUM_POLARITY_COUNT
        {
            continue;
        }

        let mut positive_probe = formula.clone();
        positive_probe.add_unit(variable);
        let positive_unsatisfiable = simplify(&mut positive_probe) == SimplifyOutcome::Conflict
            || positive_probe.contains_empty_clause();
        if positive_unsatisfiable {
            debug!("lookahead forced literal {}", -variable);
            return -variable;
        }

        let mut negative_probe = formula.clone();
        negative_probe.add_unit(-variable);
        let negative_unsatisfiable = simplify(&mut negative_probe) == SimplifyOutcome::Conflict
            || negative_probe.contains_empty_clause();
        if negative_unsatisfiable {
            debug!("lookahead forced literal {}", variable);
            return variable;
        }

        let positive_reduction = discharged_count(&minimum_clauses, &positive_probe) as i64;
        let negative_reduction = discharged_count(&minimum_clauses, &negative_probe) as i64;
        let score = 1024 * positive_reduction * negative_reduction
            + positive_reduction
            + negative_reduction;
        scores.push((variable, score));
        if scores.len() == SCORED_CANDIDATE_LIMIT {
            return best_scored(&scores);
        }
    }
    if !scores.is_empty() {
        return best_scored(&scores);
    }
    return random_split(formula, rng);
}

/*
A function to collect the clauses of minimum length in the current clause
database, each clause once.
*/
pub fn minimum_length_clauses(formula: &Formula) -> Vec<Clause> {
    let minimum = match formula.clauses.iter().map(|clause| clause.len()).min() {
        Some(minimum) => minimum,
        None => return Vec::new(),
    };
    return formula
        .clauses
        .iter()
        .filter(|clause| clause.len() == minimum)
        .cloned()
        .collect();
}

/*
A function to count how many of the given clauses no longer appear in the
probed state's clause database.
*/
fn discharged_count(minimum_clauses: &[Clause], probe: &Formula) -> usize {
    return minimum_clauses
        .iter()
        .filter(|clause| !probe.clauses.contains(clause))
        .count();
}

// First strict maximum wins, so earlier candidates take ties.
fn best_scored(scores: &[(i32, i64)]) -> i32 {
    let mut best = scores[0];
    for &(variable, score) in &scores[1..] {
        if score > best.1 {
            best = (variable, score);
        }
    }
    return best.0;
}
