use rand::rngs::StdRng;

use crate::data_structures::{Formula, Heuristic, Statistics};
use crate::dpll::simplify::{simplify, SimplifyOutcome};
use crate::literal_selection::select_literal;

/*
A struct to store the result of the DPLL procedure.

SAT => Satisfiable at the current decision branch.
UNSAT => Unsatisfiable at the current decision branch.
*/
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SolveResult {
    SAT,
    UNSAT,
}

/*
A function that will perform the Davis-Putnam-Logemann-Loveland (DPLL)
algorithm on the given formula with one of the branching heuristics from
the set {Random, Satz, LEFV}.

The formula is first simplified to a fixpoint; a conflict or an empty
clause decides the branch, an empty clause database satisfies it. Otherwise
a literal is selected and each polarity is searched on an independent copy,
so that a failed branch leaves the state it started from untouched. When a
branch succeeds its state is adopted, which propagates the satisfying
assignment back to the caller.

Returns SAT (satisfiable) or UNSAT (unsatisfiable).
*/
pub fn dpll(
    formula: &mut Formula,
    heuristic: Heuristic,
    statistics: &mut Statistics,
    rng: &mut StdRng,
) -> SolveResult {
    if simplify(formula) == SimplifyOutcome::Conflict {
        return SolveResult::UNSAT;
    }
    if formula.clauses.is_empty() {
        return SolveResult::SAT;
    }
    if formula.contains_empty_clause() {
        return SolveResult::UNSAT;
    }

    let literal = select_literal(formula, heuristic, rng);
    statistics.increment_split_count();

    let mut positive_branch = formula.clone();
    positive_branch.add_unit(literal);
    if dpll(&mut positive_branch, heuristic, statistics, rng) == SolveResult::SAT {
        *formula = positive_branch;
        return SolveResult::SAT;
    }

    statistics.increment_backtrack_count();
    let mut negative_branch = formula.clone();
    negative_branch.add_unit(-literal);
    if dpll(&mut negative_branch, heuristic, statistics, rng) == SolveResult::SAT {
        *formula = negative_branch;
        return SolveResult::SAT;
    }
    return SolveResult::UNSAT;
}
