use std::{fs, process::ExitCode};

use clap::{ArgAction, Parser};
use stackcalc::{error::Error, evaluate, expression_lines, to_postfix_string, util::num::format_result};
use tracing_subscriber::EnvFilter;

/// Environment variable holding a `tracing` filter directive.
const LOG_ENV: &str = "STACKCALC_LOG";

/// stackcalc evaluates arithmetic expressions with `+ - * / √ !`,
/// parentheses and decimal numbers.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells stackcalc to read expressions from a file, one per line.
    #[arg(short, long)]
    file: bool,

    /// Print the postfix (reverse Polish) form instead of evaluating.
    #[arg(short, long)]
    postfix: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace). Overridden by
    /// the `STACKCALC_LOG` environment variable.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    contents: String,
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(std::io::stderr)
                             .init();
}

fn run(expression: &str, postfix: bool) -> Result<String, Error> {
    if postfix {
        to_postfix_string(expression)
    } else {
        evaluate(expression).map(format_result)
    }
}

/// Prints the outcome of one expression; returns `false` on failure.
fn report(expression: &str, result: Result<String, Error>) -> bool {
    match result {
        Ok(output) => {
            println!("{output}");
            true
        },
        Err(e) => {
            tracing::info!(expression, kind = %e.kind(), "expression failed");
            eprintln!("{e}");
            false
        },
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    if !args.file {
        let ok = report(&args.contents, run(&args.contents, args.postfix));
        return if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE };
    }

    let source = match fs::read_to_string(&args.contents) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Failed to read the input file '{}': {e}", &args.contents);
            return ExitCode::FAILURE;
        },
    };

    let mut failed = false;
    for (line, expression) in expression_lines(&source) {
        tracing::debug!(line, "evaluating line");
        failed |= !report(expression, run(expression, args.postfix));
    }

    if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS }
}
