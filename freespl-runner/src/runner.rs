use std::io::Write;
use std::path::Path;

use freespl_core::ast::Ast;
use freespl_core::lexer::tokenize;
use freespl_core::parser::{self, ParseError};
use freespl_interpreter::{ConsoleObserver, ConsoleReporter, EvalError, Interpreter};
use rustyline::error::ReadlineError;
use thiserror::Error;
use tracing::info;

/// Sample program run by `--demo`.
pub const DEMO_PROGRAM: &str = "
int x = 5;
if (x > 3) {
    x = x + 2;
} else {
    x = x - 2;
}
while (x < 10) {
    x = x + 1;
}
";

const SOURCE_EXTENSIONS: [&str; 2] = ["spl", "SPL"];

#[derive(Debug, Default, Clone, Copy)]
pub struct Options {
    pub dump_tokens: bool,
    pub dump_ast: bool,
}

#[derive(Debug, Error)]
pub enum RunnerError {
    #[error("{0}: file must have a .spl or .SPL extension")]
    Extension(String),
    #[error("could not read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
    #[error("runtime error: {0}")]
    Runtime(#[from] EvalError),
    #[error("could not write output: {0}")]
    Output(#[source] std::io::Error),
    #[error("line editor error: {0}")]
    Readline(#[from] ReadlineError),
}

pub fn load_source(path: &Path) -> Result<String, RunnerError> {
    let has_extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| SOURCE_EXTENSIONS.contains(&ext));
    if !has_extension {
        return Err(RunnerError::Extension(path.display().to_string()));
    }

    std::fs::read_to_string(path).map_err(|source| RunnerError::Io {
        path: path.display().to_string(),
        source,
    })
}

/// Lexes and parses `source`, writing the token and tree dumps requested by
/// `options` to `out` along the way.
pub fn prepare(
    source: &str,
    options: &Options,
    out: &mut impl Write,
) -> Result<Ast, RunnerError> {
    let tokens = tokenize(source);
    info!(tokens = tokens.len(), "lexed source");
    if options.dump_tokens {
        writeln!(out, "[Tokens]").map_err(RunnerError::Output)?;
        for token in &tokens {
            writeln!(out, "{token}").map_err(RunnerError::Output)?;
        }
    }

    let ast = parser::parse_block(tokens)?;
    if options.dump_ast {
        writeln!(out, "[AST]").map_err(RunnerError::Output)?;
        write!(out, "{ast}").map_err(RunnerError::Output)?;
    }
    Ok(ast)
}

/// Lexes, parses and runs `source`. Runtime errors have already been
/// reported on stdout by the time they are returned.
pub fn execute(source: &str, options: &Options) -> Result<(), RunnerError> {
    let ast = prepare(source, options, &mut std::io::stdout().lock())?;

    let mut interpreter = Interpreter::new(ConsoleObserver);
    interpreter.run(&ast, &mut ConsoleReporter)?;
    Ok(())
}
