use proptest::bool::weighted;
use proptest::collection::vec;
use proptest::prelude::*;

use dpll_solver::data_structures::{Formula, Heuristic, Statistics};
use dpll_solver::dpll::dpll::SolveResult;
use dpll_solver::dpll::solve;

fn solve_dimacs(dimacs_text: &str, heuristic: Heuristic, seed: u64) -> (SolveResult, Formula) {
    let mut formula = Formula::parse_dimacs(dimacs_text).expect("generated instance parses");
    let mut statistics = Statistics::new();
    let result = solve(&mut formula, heuristic, Some(seed), &mut statistics);
    (result, formula)
}

// The found assignment satisfies a clause set, reading variables the search
// never forced as true.
fn is_satisfied(clauses: &[Vec<i32>], formula: &Formula) -> bool {
    clauses.iter().all(|clause| {
        clause.iter().any(|&literal| {
            let mut value = formula.assignment_of(literal.abs());
            if value == 0 {
                value = 1;
            }
            value * literal.signum() > 0
        })
    })
}

proptest! {
    // A formula of nothing but unit clauses is satisfiable by exactly the
    // signs it spells out.
    #[test]
    fn only_unit_clauses(signs in vec(weighted(0.5), 1..=20)) {
        let dimacs_text: String = signs.iter()
            .enumerate()
            .map(|(index, &sign)| {
                let variable = index as i32 + 1;
                format!("{} 0\n", if sign { variable } else { -variable })
            })
            .collect();

        let (result, formula) = solve_dimacs(&dimacs_text, Heuristic::Random, 3);
        prop_assert_eq!(SolveResult::SAT, result);
        for (index, &sign) in signs.iter().enumerate() {
            let variable = index as i32 + 1;
            prop_assert_eq!(if sign { 1 } else { -1 }, formula.assignment_of(variable));
        }
    }

    // On arbitrary formulas all three heuristics agree on satisfiability,
    // and a reported model satisfies every clause as generated.
    #[test]
    fn arbitrary_cnf_formula(
        clauses in vec(vec((1..=12i32, weighted(0.5)), 1..=6), 1..=30)
    ) {
        let literal_clauses: Vec<Vec<i32>> = clauses.iter()
            .map(|clause| clause.iter()
                .map(|&(variable, sign)| if sign { variable } else { -variable })
                .collect())
            .collect();
        let dimacs_text: String = literal_clauses.iter()
            .map(|clause| {
                let line: Vec<String> = clause.iter().map(|literal| literal.to_string()).collect();
                format!("{} 0\n", line.join(" "))
            })
            .collect();

        let (random_result, random_formula) = solve_dimacs(&dimacs_text, Heuristic::Random, 17);
        let (satz_result, satz_formula) = solve_dimacs(&dimacs_text, Heuristic::Satz, 17);
        let (lefv_result, lefv_formula) = solve_dimacs(&dimacs_text, Heuristic::Lefv, 17);

        prop_assert_eq!(random_result, satz_result);
        prop_assert_eq!(random_result, lefv_result);

        if random_result == SolveResult::SAT {
            prop_assert!(is_satisfied(&literal_clauses, &random_formula));
            prop_assert!(is_satisfied(&literal_clauses, &satz_formula));
            prop_assert!(is_satisfied(&literal_clauses, &lefv_formula));
        }
    }
}

const SOLVED_GRID: [[u32; 9]; 9] = [
    [5, 3, 4, 6, 7, 8, 9, 1, 2],
    [6, 7, 2, 1, 9, 5, 3, 4, 8],
    [1, 9, 8, 3, 4, 2, 5, 6, 7],
    [8, 5, 9, 7, 6, 1, 4, 2, 3],
    [4, 2, 6, 8, 5, 3, 7, 9, 1],
    [7, 1, 3, 9, 2, 4, 8, 5, 6],
    [9, 6, 1, 5, 3, 7, 2, 8, 4],
    [2, 8, 7, 4, 1, 9, 6, 3, 5],
    [3, 4, 5, 2, 8, 6, 1, 7, 9],
];

// Cell (row, column) holding value is encoded as the variable "rcv", rows,
// columns and values all 1-based.
fn sudoku_variable(row: usize, column: usize, value: u32) -> i32 {
    (row as i32 + 1) * 100 + (column as i32 + 1) * 10 + value as i32
}

fn sudoku_rules() -> String {
    let mut rules = String::new();
    for row in 0..9 {
        for column in 0..9 {
            let clause: Vec<String> = (1..=9)
                .map(|value| sudoku_variable(row, column, value).to_string())
                .collect();
            rules += &format!("{} 0\n", clause.join(" "));
            for value in 1..=9u32 {
                for other in (value + 1)..=9 {
                    rules += &format!(
                        "{} {} 0\n",
                        -sudoku_variable(row, column, value),
                        -sudoku_variable(row, column, other)
                    );
                }
            }
        }
    }
    for value in 1..=9u32 {
        for row in 0..9 {
            for column in 0..9 {
                for other in (column + 1)..9 {
                    rules += &format!(
                        "{} {} 0\n",
                        -sudoku_variable(row, column, value),
                        -sudoku_variable(row, other, value)
                    );
                }
            }
        }
        for column in 0..9 {
            for row in 0..9 {
                for other in (row + 1)..9 {
                    rules += &format!(
                        "{} {} 0\n",
                        -sudoku_variable(row, column, value),
                        -sudoku_variable(other, column, value)
                    );
                }
            }
        }
        for box_row in 0..3 {
            for box_column in 0..3 {
                let cells: Vec<(usize, usize)> = (0..9)
                    .map(|cell| (box_row * 3 + cell / 3, box_column * 3 + cell % 3))
                    .collect();
                for first in 0..9 {
                    for second in (first + 1)..9 {
                        let (first_row, first_column) = cells[first];
                        let (second_row, second_column) = cells[second];
                        rules += &format!(
                            "{} {} 0\n",
                            -sudoku_variable(first_row, first_column, value),
                            -sudoku_variable(second_row, second_column, value)
                        );
                    }
                }
            }
        }
    }
    rules
}

// A sudoku grid encoded with the standard rules solves to a valid completed
// grid that respects the clues.
#[test]
fn sudoku_end_to_end() {
    let mut dimacs_text = sudoku_rules();
    let mut open_cells = 0;
    for row in 0..9 {
        for column in 0..9 {
            if (row + column) % 4 == 0 {
                open_cells += 1;
                continue;
            }
            dimacs_text += &format!("{} 0\n", sudoku_variable(row, column, SOLVED_GRID[row][column]));
        }
    }
    assert!(open_cells > 0);

    let (result, formula) = solve_dimacs(&dimacs_text, Heuristic::Lefv, 42);
    assert_eq!(SolveResult::SAT, result);

    let mut grid = [[0u32; 9]; 9];
    for row in 0..9 {
        for column in 0..9 {
            let decided: Vec<u32> = (1..=9)
                .filter(|&value| formula.assignment_of(sudoku_variable(row, column, value)) == 1)
                .collect();
            assert_eq!(1, decided.len(), "cell ({}, {}) holds one value", row + 1, column + 1);
            grid[row][column] = decided[0];
        }
    }

    // clues survive into the model
    for row in 0..9 {
        for column in 0..9 {
            if (row + column) % 4 != 0 {
                assert_eq!(SOLVED_GRID[row][column], grid[row][column]);
            }
        }
    }

    // every row, column and box is a permutation of 1..=9
    for index in 0..9 {
        let mut row_values: Vec<u32> = grid[index].to_vec();
        row_values.sort();
        assert_eq!((1..=9).collect::<Vec<u32>>(), row_values);

        let mut column_values: Vec<u32> = (0..9).map(|row| grid[row][index]).collect();
        column_values.sort();
        assert_eq!((1..=9).collect::<Vec<u32>>(), column_values);

        let mut box_values: Vec<u32> = (0..9)
            .map(|cell| grid[(index / 3) * 3 + cell / 3][(index % 3) * 3 + cell % 3])
            .collect();
        box_values.sort();
        assert_eq!((1..=9).collect::<Vec<u32>>(), box_values);
    }
}
