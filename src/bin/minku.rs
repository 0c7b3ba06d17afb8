use std::env;
use std::fs;
use std::io::{self, Read, Write};
use std::process;

use runrepair::cases::{parse_cases, render_solution};
use runrepair::{
    brute_force_with_limit, solve_with_block_size, Instance, Solution, ORACLE_FREE_LIMIT,
};

fn main() {
    let options = match Options::parse(env::args().skip(1)) {
        Ok(opts) => opts,
        Err(err) => {
            eprintln!("minku: {err}");
            Options::print_help();
            process::exit(2);
        }
    };

    #[cfg(feature = "tracing")]
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let text = match read_input(options.input.as_deref()) {
        Ok(text) => text,
        Err(err) => {
            eprintln!("minku: cannot read input: {err}");
            process::exit(1);
        }
    };

    let cases = match parse_cases(&text) {
        Ok(cases) => cases,
        Err(err) => {
            eprintln!("minku: {err}");
            process::exit(1);
        }
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut disagreements = 0usize;

    for (idx, instance) in cases.iter().enumerate() {
        let solution = match run_case(&options, instance) {
            Ok(CaseOutcome::Agreed(solution)) => solution,
            Ok(CaseOutcome::Disagreed { solver, oracle }) => {
                eprintln!(
                    "minku: case {}: solver cost {:?} != oracle cost {:?}",
                    idx + 1,
                    solver.min_cost(),
                    oracle.min_cost()
                );
                disagreements += 1;
                solver
            }
            Err(err) => {
                eprintln!("minku: case {}: {err}", idx + 1);
                process::exit(1);
            }
        };
        if let Err(err) = out.write_all(render_solution(&solution).as_bytes()) {
            eprintln!("minku: output error: {err}");
            process::exit(1);
        }
    }

    if disagreements > 0 {
        process::exit(3);
    }
}

enum CaseOutcome {
    Agreed(Solution),
    Disagreed { solver: Solution, oracle: Solution },
}

fn run_case(options: &Options, instance: &Instance) -> Result<CaseOutcome, String> {
    let solver = || {
        solve_with_block_size(instance, options.block_size(instance)).map_err(|e| e.to_string())
    };
    let oracle =
        || brute_force_with_limit(instance, options.oracle_limit).map_err(|e| e.to_string());
    match options.mode {
        Mode::Solve => solver().map(CaseOutcome::Agreed),
        Mode::Oracle => oracle().map(CaseOutcome::Agreed),
        Mode::Check => {
            let solver = solver()?;
            let oracle = oracle()?;
            if solver.min_cost() == oracle.min_cost() {
                Ok(CaseOutcome::Agreed(solver))
            } else {
                Ok(CaseOutcome::Disagreed { solver, oracle })
            }
        }
    }
}

fn read_input(path: Option<&str>) -> io::Result<String> {
    match path {
        Some(path) => fs::read_to_string(path),
        None => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Mode {
    Solve,
    Oracle,
    Check,
}

impl Mode {
    fn from_str(value: &str) -> Result<Self, String> {
        match value {
            "solve" => Ok(Mode::Solve),
            "oracle" => Ok(Mode::Oracle),
            "check" => Ok(Mode::Check),
            other => Err(format!("unknown mode '{other}' (expected solve, oracle or check)")),
        }
    }
}

struct Options {
    mode: Mode,
    block_size: Option<usize>,
    oracle_limit: usize,
    input: Option<String>,
}

impl Options {
    fn parse<I, T>(mut args: I) -> Result<Self, String>
    where
        I: Iterator<Item = T>,
        T: Into<String>,
    {
        let mut mode = Mode::Solve;
        let mut block_size = None;
        let mut oracle_limit = ORACLE_FREE_LIMIT;
        let mut input = None;

        while let Some(arg) = args.next() {
            let arg = arg.into();
            if arg == "--help" || arg == "-h" {
                Options::print_help();
                process::exit(0);
            } else if let Some(value) = arg.strip_prefix("--mode=") {
                mode = Mode::from_str(value)?;
            } else if arg == "--mode" {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value after --mode".to_string())?
                    .into();
                mode = Mode::from_str(&value)?;
            } else if let Some(value) = arg.strip_prefix("--block-size=") {
                block_size = Some(parse_positive(value, "block size")?);
            } else if arg == "--block-size" {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value after --block-size".to_string())?
                    .into();
                block_size = Some(parse_positive(&value, "block size")?);
            } else if let Some(value) = arg.strip_prefix("--oracle-limit=") {
                oracle_limit = parse_count(value, "oracle limit")?;
            } else if arg == "--oracle-limit" {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value after --oracle-limit".to_string())?
                    .into();
                oracle_limit = parse_count(&value, "oracle limit")?;
            } else if arg.starts_with('-') {
                return Err(format!("unknown option '{arg}'"));
            } else if input.is_none() {
                input = Some(arg);
            } else {
                return Err(format!("unexpected argument '{arg}'"));
            }
        }

        Ok(Self {
            mode,
            block_size,
            oracle_limit,
            input,
        })
    }

    /// Explicit block size, or one block per `ceil(sqrt(n))` positions.
    fn block_size(&self, instance: &Instance) -> usize {
        self.block_size
            .unwrap_or_else(|| runrepair::blocks::default_block_size(instance.len()))
    }

    fn print_help() {
        eprintln!(
            "usage: minku [--mode solve|oracle|check] [--block-size N] [--oracle-limit N] [INPUT]\n\
             \n\
             Reads test cases (count, then \"<n> <k>\", pattern, reference per case)\n\
             from INPUT or stdin and prints the minimum cost and a witness per case.\n\
             \n\
             --mode solve     dynamic-programming solver (default)\n\
             --mode oracle    exhaustive search over free positions\n\
             --mode check     run both, exit 3 if any cost differs\n\
             --block-size N   checkpoint block size for the solver\n\
             --oracle-limit N maximum free positions for exhaustive search (default {ORACLE_FREE_LIMIT})"
        );
    }
}

fn parse_positive(value: &str, what: &str) -> Result<usize, String> {
    match value.parse::<usize>() {
        Ok(v) if v > 0 => Ok(v),
        _ => Err(format!("{what} must be a positive integer")),
    }
}

fn parse_count(value: &str, what: &str) -> Result<usize, String> {
    value
        .parse::<usize>()
        .map_err(|_| format!("{what} must be a non-negative integer"))
}
