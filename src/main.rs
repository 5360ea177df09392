use std::env;
use std::process;

use dpll_solver::dpll::bench::run_bench_directory;
use dpll_solver::dpll::run_instance;
use dpll_solver::parse_args::{parse_run_options, USAGE};

/*
The main function for running the DPLL solver.

Select a branching heuristic with -S1 (random), -S2 (Satz lookahead), or
-S3 (LEFV) and pass the path of an instance in DIMACS format. The solution
is written next to the input with the extension replaced by ".out". With
--bench the input is a directory and every instance is compared under all
three heuristics.
*/
fn main() {
    env_logger::init();
    let arguments: Vec<String> = env::args().skip(1).collect();
    let options = match parse_run_options(&arguments) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("{}", message);
            eprintln!("{}", USAGE);
            process::exit(1);
        }
    };

    let outcome = if options.bench {
        run_bench_directory(&options.input, options.seed, &options.output)
    } else {
        let heuristic = options.heuristic.expect("heuristic is validated by the parser");
        run_instance(&options.input, heuristic, options.seed)
    };
    if let Err(error) = outcome {
        eprintln!("Error: {:#}", error);
        process::exit(1);
    }
}
