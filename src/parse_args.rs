use std::path::PathBuf;

use crate::data_structures::Heuristic;

pub const USAGE: &str = "\
Usage: dpll_solver [-S1 | -S2 | -S3] [--seed <number>] [--bench [--output <name>]] <input>

  -S1              Random branching (no heuristic)
  -S2              Satz lookahead heuristic
  -S3              LEFV heuristic (last encountered free variable)
  --seed <n>       Fix the random seed for reproducible runs
  --bench          Treat <input> as a directory of DIMACS instances and
                   compare all three heuristics on every instance
  --output <name>  Benchmark report name, written to results-<name>
  <input>          Input file containing a SAT problem in DIMACS form";

/*
A struct to store:
- the branching heuristic selected on the command line, if any
- the instance file path (or the instance directory for a benchmark run)
- the fixed random seed, if any
- whether to run the benchmark comparison instead of a single solve
- the benchmark report name
*/
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunOptions {
    pub heuristic: Option<Heuristic>,
    pub input: PathBuf,
    pub seed: Option<u64>,
    pub bench: bool,
    pub output: String,
}

/*
A function to read the run options from the command-line arguments, given
without the program name.

Exactly one of -S1, -S2 and -S3 selects the branching heuristic; it is
required unless --bench is given, in which case every instance is run under
all three heuristics and the flag is not consulted. The single positional
argument is the input path.

Returns the run options, or a message describing the usage error.
*/
pub fn parse_run_options(arguments: &[String]) -> Result<RunOptions, String> {
    let mut heuristic = None;
    let mut input = None;
    let mut seed = None;
    let mut bench = false;
    let mut output = String::from("benchmark.json");
    let mut position = 0;
    while position < arguments.len() {
        let argument = arguments[position].as_str();
        match argument {
            "-S1" | "-S2" | "-S3" => {
                if heuristic.is_some() {
                    return Err(String::from("the flags -S1, -S2 and -S3 are mutually exclusive"));
                }
                heuristic = Some(match argument {
                    "-S1" => Heuristic::Random,
                    "-S2" => Heuristic::Satz,
                    _ => Heuristic::Lefv,
                });
            }
            "--seed" => {
                position += 1;
                let value = arguments
                    .get(position)
                    .ok_or_else(|| String::from("--seed requires a value"))?;
                seed = Some(
                    value
                        .parse::<u64>()
                        .map_err(|_| format!("invalid seed '{}'", value))?,
                );
            }
            "--bench" => {
                bench = true;
            }
            "--output" => {
                position += 1;
                output = arguments
                    .get(position)
                    .ok_or_else(|| String::from("--output requires a value"))?
                    .clone();
            }
            _ if argument.starts_with('-') => {
                return Err(format!("unknown flag '{}'", argument));
            }
            _ => {
                if input.is_some() {
                    return Err(format!("unexpected extra argument '{}'", argument));
                }
                input = Some(PathBuf::from(argument));
            }
        }
        position += 1;
    }
    let input = match input {
        Some(input) => input,
        None => return Err(String::from("an input path is required")),
    };
    if heuristic.is_none() && !bench {
        return Err(String::from("one of -S1, -S2 or -S3 is required"));
    }
    return Ok(RunOptions { heuristic, input, seed, bench, output });
}
