use std::collections::{BTreeSet, HashMap};
use multimap::MultiMap;
use serde::Serialize;
use thiserror::Error;

/*
An enum to store the branching heuristic the solver runs with.

Random => uniform choice of an unassigned variable and a sign.
Satz => lookahead scoring over both polarities of candidate variables.
Lefv => branch inside the last clause the simplifier falsified a literal in.
*/
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Heuristic {
    Random,
    Satz,
    Lefv,
}

impl Heuristic {
    pub fn name(&self) -> &'static str {
        match self {
            Heuristic::Random => "random",
            Heuristic::Satz => "satz",
            Heuristic::Lefv => "lefv",
        }
    }
}

/*
The errors the DIMACS parser can report. Every variant carries the 1-based
line number the offending clause was read from.
*/
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DimacsError {
    #[error("line {line}: malformed literal '{token}'")]
    MalformedLiteral { line: usize, token: String },
    #[error("line {line}: clause is not terminated by 0")]
    MissingTerminator { line: usize },
    #[error("line {line}: literal after the terminating 0")]
    TrailingLiteral { line: usize },
}

/*
A struct to store statistics relating to the number of decisions taken and
the number of failed branches undone during the search.
*/
#[derive(Clone, Debug, Serialize)]
pub struct Statistics {
    pub split_count: u64,
    pub backtrack_count: u64,
}

impl Statistics {
    /*
    Create an empty statistics struct.
    */
    pub fn new() -> Self {
        Statistics { split_count: 0, backtrack_count: 0 }
    }

    /*
    A function to increment the decision count.
    */
    pub fn increment_split_count(&mut self) {
        self.split_count += 1;
    }

    /*
    A function to increment the backtrack count.
    */
    pub fn increment_backtrack_count(&mut self) {
        self.backtrack_count += 1;
    }
}

impl Default for Statistics {
    fn default() -> Self {
        Statistics::new()
    }
}

/*
A struct for storing a singular clause as the disjunction of its literals.
A literal is a nonzero signed integer; the sign encodes the polarity. The
parser guarantees that the literals are distinct and that no variable
appears with both polarities.
*/
#[derive(Debug, Clone, Eq, Hash, PartialEq)]
pub struct Clause {
    pub literals: Vec<i32>,
}

impl Clause {
    pub fn new(literals: Vec<i32>) -> Self {
        Clause { literals }
    }

    /*
    A function to create the singleton clause forcing the given literal.
    */
    pub fn unit(literal: i32) -> Self {
        Clause { literals: vec![literal] }
    }

    /*
    A function that checks for a unit clause and returns the unit literal if
    there is one.
    */
    pub fn is_unit_clause(&self) -> Option<i32> {
        if self.literals.len() == 1 {
            return Some(self.literals[0]);
        }
        return None;
    }

    /*
    A function to check whether the clause contains no literals. The empty
    clause denotes falsum.
    */
    pub fn is_empty(&self) -> bool {
        return self.literals.is_empty();
    }

    pub fn len(&self) -> usize {
        return self.literals.len();
    }
}

/*
A struct for storing the core problem state operated on by the DPLL
procedure.

- clauses stores the active clause database. Clauses discharged by the
  current assignment are physically removed by the simplifier.
- variables stores every variable of the parsed formula, sorted ascending.
- assignment maps a variable to -1 (false) or 1 (true); an absent entry
  means unassigned.
- clause_references maps a literal to the indices of the active clauses it
  occurs in - in a multimap for O(1) access. The occurrence count of a
  literal is the length of its entry.
- lefv_clause stores the literals of the last clause the simplifier
  observed losing a falsified literal, in their pre-reduction form.
- unit_assignments counts the variables that were forced by unit clauses.

Cloning the struct yields the independent snapshot each decision branch
searches on.
*/
#[derive(Clone, Debug)]
pub struct Formula {
    pub clauses: Vec<Clause>,
    pub variables: Vec<i32>,
    pub assignment: HashMap<i32, i32>,
    pub clause_references: MultiMap<i32, usize>,
    pub lefv_clause: Vec<i32>,
    pub unit_assignments: u64,
}

impl Formula {
    /*
    Parses a SAT instance in DIMACS format and generates the data structures
    required for solving it.

    Comment lines ("c ...") and the problem line ("p cnf ...") are skipped;
    every other non-empty line is one clause, a whitespace-separated list of
    nonzero integers terminated by 0. Within a clause a duplicate literal is
    dropped silently, and a literal whose complement is already present
    folds the pair away. A clause emptied entirely by such folding was a
    tautology and is dropped; a bare "0" line is the empty clause and is
    kept.
    */
    pub fn parse_dimacs(dimacs_text: &str) -> Result<Formula, DimacsError> {
        let mut clauses = Vec::new();
        let mut variables = BTreeSet::new();
        for (index, raw_line) in dimacs_text.lines().enumerate() {
            let line = raw_line.trim();
            let line_number = index + 1;
            if line.is_empty() || line.starts_with('c') || line.starts_with('p') {
                continue;
            }
            let mut literals: Vec<i32> = Vec::new();
            let mut folded_tautology = false;
            let mut terminated = false;
            for token in line.split_whitespace() {
                if terminated {
                    return Err(DimacsError::TrailingLiteral { line: line_number });
                }
                let literal: i32 = match token.parse() {
                    Ok(literal) => literal,
                    Err(_) => {
                        return Err(DimacsError::MalformedLiteral {
                            line: line_number,
                            token: token.to_string(),
                        })
                    }
                };
                if literal == 0 {
                    terminated = true;
                    continue;
                }
                variables.insert(literal.abs());
                if let Some(position) = literals.iter().position(|&held| held == -literal) {
                    // Both polarities present: fold the pair away.
                    literals.remove(position);
                    folded_tautology = true;
                } else if !literals.contains(&literal) {
                    literals.push(literal);
                }
            }
            if !terminated {
                return Err(DimacsError::MissingTerminator { line: line_number });
            }
            if literals.is_empty() && folded_tautology {
                continue;
            }
            clauses.push(Clause::new(literals));
        }
        let mut formula = Formula {
            clauses,
            variables: variables.into_iter().collect(),
            assignment: HashMap::new(),
            clause_references: MultiMap::new(),
            lefv_clause: Vec::new(),
            unit_assignments: 0,
        };
        formula.rebuild_clause_references();
        return Ok(formula);
    }

    /*
    A function to return the value assigned to a variable: 1 for true, -1
    for false, and 0 while the variable is unassigned.
    */
    pub fn assignment_of(&self, variable: i32) -> i32 {
        return *self.assignment.get(&variable).unwrap_or(&0);
    }

    /*
    A function to return the number of active clauses the given literal
    occurs in.
    */
    pub fn occurrence_count(&self, literal: i32) -> usize {
        match self.clause_references.get_vec(&literal) {
            Some(references) => references.len(),
            None => 0,
        }
    }

    /*
    A function to list the variables the current assignment leaves free.
    */
    pub fn unassigned_variables(&self) -> Vec<i32> {
        let mut unassigned = Vec::new();
        for &variable in &self.variables {
            if self.assignment_of(variable) == 0 {
                unassigned.push(variable);
            }
        }
        return unassigned;
    }

    /*
    A function to append the singleton clause forcing the given literal.
    This is how the engine asserts a decision. The clause references stay
    stale until the next reduction pass recomputes them.
    */
    pub fn add_unit(&mut self, literal: i32) {
        self.clauses.push(Clause::unit(literal));
    }

    /*
    Checks for the unsatisfiability constraint where the empty clause
    exists in the active clause database.
    */
    pub fn contains_empty_clause(&self) -> bool {
        return self.clauses.iter().any(|clause| clause.is_empty());
    }

    /*
    A function to rebuild the clause references from the active clause
    database alone.
    */
    pub fn rebuild_clause_references(&mut self) {
        let mut clause_references = MultiMap::new();
        for (index, clause) in self.clauses.iter().enumerate() {
            for &literal in &clause.literals {
                clause_references.insert(literal, index);
            }
        }
        self.clause_references = clause_references;
    }
}
