mod logging;
mod repl;
mod runner;

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use runner::{Options, RunnerError};

#[derive(Parser)]
#[command(author, version, about = "Runs FreeSPL programs")]
struct Cli {
    /// Source file with a .spl or .SPL extension. Starts a REPL when omitted.
    path: Option<PathBuf>,
    /// Run the built-in sample program
    #[arg(long, conflicts_with = "path")]
    demo: bool,
    /// Print the token stream before running
    #[arg(long)]
    dump_tokens: bool,
    /// Print the syntax tree before running
    #[arg(long)]
    dump_ast: bool,
}

fn main() -> ExitCode {
    logging::init();
    let cli = Cli::parse();
    let options = Options {
        dump_tokens: cli.dump_tokens,
        dump_ast: cli.dump_ast,
    };

    let result = match cli.path {
        Some(path) => {
            runner::load_source(&path).and_then(|source| runner::execute(&source, &options))
        }
        None if cli.demo => runner::execute(runner::DEMO_PROGRAM, &options),
        None => repl::start(options).map_err(RunnerError::from),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        // Already reported by the interpreter.
        Err(RunnerError::Runtime(_)) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
