use multimap::MultiMap;
use crate::data_structures::Formula;

/*
A function to get a list of pure literals from the clause references of a
given state. A literal is pure when its complement occurs in no active
clause.

Returns the list of pure literals.
*/
pub fn get_pure_literals(clause_references: &MultiMap<i32, usize>) -> Vec<i32> {
    let mut pure_literals = Vec::new();
    for key in clause_references.keys() {
        let complement_key = -key;
        if !clause_references.contains_key(&complement_key) {
            pure_literals.push(*key);
        }
    }
    return pure_literals;
}

/*
A function to assign every unassigned variable that only occurs with a
single polarity to the sign it occurs with. The clauses holding the pure
literal become satisfied and are discharged by the next reduction pass.
*/
pub fn assign_pure_literals(formula: &mut Formula) {
    let pure_literals = get_pure_literals(&formula.clause_references);
    for literal in pure_literals {
        let variable = literal.abs();
        if formula.assignment_of(variable) == 0 {
            formula.assignment.insert(variable, literal.signum());
        }
    }
}
