//! Command-line reverse Polish calculator.
//!
//! This is a thin wrapper around rpcalc-core that builds the executable.
//! A program can be given inline, read from a file, piped on stdin, or
//! typed into an interactive prompt.

mod repl;

use std::fs;
use std::io::{IsTerminal, Read};

use clap::Parser;
use rpcalc_core::{run, run_line, AssignPolicy, CalculatorSession, Output, StdoutOutput};

/// rpcalc evaluates arithmetic written in reverse Polish notation.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Treat EXPR as a file name and evaluate that file's contents.
    #[arg(short, long, requires = "expr")]
    file: bool,

    /// Make `x _` assign to the named letter instead of the next free slot.
    #[arg(long)]
    assign_by_letter: bool,

    /// Program to evaluate; omit it to get a prompt (or pipe a program in).
    expr: Option<String>,
}

fn main() {
    let args = Args::parse();

    let policy = if args.assign_by_letter {
        AssignPolicy::ByLetter
    } else {
        AssignPolicy::Sequential
    };
    let mut session = CalculatorSession::with_policy(policy);

    match args.expr {
        Some(path) if args.file => {
            let program = fs::read_to_string(&path).unwrap_or_else(|_| {
                eprintln!(
                    "Failed to read the input file '{}'. Perhaps this file does not exist?",
                    &path
                );
                std::process::exit(1);
            });
            evaluate_batch(&program, &mut session);
        }
        Some(expression) => {
            // An inline expression gets the newline supplied, so `rpcalc "1 2 +"`
            // prints its answer without the user spelling out the line end.
            let mut out = StdoutOutput::new();
            run_line(&expression, &mut session, &mut out);
            let _ = out.flush();
        }
        None => {
            if std::io::stdin().is_terminal() {
                repl::run_repl(&mut session);
            } else {
                let mut program = String::new();
                if std::io::stdin().read_to_string(&mut program).is_err() {
                    eprintln!("Failed to read the program from stdin.");
                    std::process::exit(1);
                }
                evaluate_batch(&program, &mut session);
            }
        }
    }
}

/// Runs a whole program the batch way: results appear only at newlines.
fn evaluate_batch(program: &str, session: &mut CalculatorSession) {
    let mut out = StdoutOutput::new();
    run(program, session, &mut out);
    let _ = out.flush();
}
