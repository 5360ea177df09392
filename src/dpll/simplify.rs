use crate::data_structures::{Clause, Formula};
use crate::pure_literal_deletion::assign_pure_literals;

/*
An enum to store the outcome of a simplification pass.

Ok => a fixpoint was reached.
Conflict => a unit clause contradicted the current assignment; the state is
unsatisfiable at this decision branch and further phases were skipped.
*/
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SimplifyOutcome {
    Ok,
    Conflict,
}

/*
A function to simplify the formula under its current assignment until a
fixpoint. One pass assigns unit clauses, assigns pure literals, and then
reduces the clause database; the loop repeats while the number of active
clauses keeps shrinking.
*/
pub fn simplify(formula: &mut Formula) -> SimplifyOutcome {
    let mut previous_count = usize::MAX;
    while formula.clauses.len() < previous_count {
        previous_count = formula.clauses.len();
        if !assign_unit_clauses(formula) {
            return SimplifyOutcome::Conflict;
        }
        assign_pure_literals(formula);
        remove_discharged_clauses(formula);
    }
    return SimplifyOutcome::Ok;
}

/*
A function to assign every variable that occurs in a unit clause and to
discharge those clauses from the database.

Returns false when a unit clause forces the opposite sign of an assignment
already made, and true otherwise.
*/
pub fn assign_unit_clauses(formula: &mut Formula) -> bool {
    let mut non_unit_clauses = Vec::with_capacity(formula.clauses.len());
    for clause in &formula.clauses {
        match clause.is_unit_clause() {
            Some(literal) => {
                let variable = literal.abs();
                if literal.signum() == -formula.assignment_of(variable) {
                    return false;
                }
                if formula.assignment_of(variable) == 0 {
                    formula.unit_assignments += 1;
                }
                formula.assignment.insert(variable, literal.signum());
            }
            None => non_unit_clauses.push(clause.clone()),
        }
    }
    formula.clauses = non_unit_clauses;
    return true;
}

/*
A function to rebuild the clause database under the current assignment.

A clause containing a satisfied literal is discharged entirely; falsified
literals are dropped from the clauses that remain. Every surviving clause
that lost a literal is recorded, in its pre-reduction form, as the last
encountered falsified clause. The clause references are recomputed from the
surviving clauses only.
*/
pub fn remove_discharged_clauses(formula: &mut Formula) {
    let clauses = std::mem::take(&mut formula.clauses);
    let mut active_clauses = Vec::with_capacity(clauses.len());
    for clause in clauses {
        let mut unassigned_literals = Vec::new();
        let mut satisfied = false;
        let mut falsified_literal = false;
        for &literal in &clause.literals {
            let value = formula.assignment_of(literal.abs());
            if value * literal.signum() > 0 {
                satisfied = true;
            } else if value * literal.signum() < 0 {
                falsified_literal = true;
            } else {
                unassigned_literals.push(literal);
            }
        }
        if satisfied {
            continue;
        }
        if falsified_literal {
            formula.lefv_clause = clause.literals.clone();
        }
        active_clauses.push(Clause::new(unassigned_literals));
    }
    formula.clauses = active_clauses;
    formula.rebuild_clause_references();
}
