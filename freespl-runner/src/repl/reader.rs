use std::io::Write;

use freespl_core::ast::Ast;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::Editor;

use crate::runner::{self, Options, RunnerError};

const PROMPT: &str = ">> ";
const ENV_COMMAND: &str = ":env";

pub enum ReadOutput {
    Exit,
    Clear,
    ShowEnvironment,
    Value(Ast),
}

pub struct Reader {
    rl: Editor<(), DefaultHistory>,
    options: Options,
}

impl Reader {
    pub fn new(rl: Editor<(), DefaultHistory>, options: Options) -> Self {
        Self { rl, options }
    }

    pub fn read(&mut self) -> ReadOutput {
        match self.rl.readline(PROMPT) {
            Ok(line) => {
                if let Err(err) = self.rl.add_history_entry(&line) {
                    tracing::warn!("could not record history: {err}");
                }
                interpret_line(&line, &self.options, &mut std::io::stdout().lock())
            }
            Err(ReadlineError::Interrupted) => {
                println!("CTRL-C");
                ReadOutput::Clear
            }
            Err(ReadlineError::Eof) => {
                println!("CTRL-D");
                ReadOutput::Exit
            }
            Err(err) => {
                println!("Error: {err}");
                ReadOutput::Exit
            }
        }
    }
}

/// Turns one input line into a REPL action, printing the requested dumps
/// and any parse error to `out`.
fn interpret_line(line: &str, options: &Options, out: &mut impl Write) -> ReadOutput {
    if line.trim() == ENV_COMMAND {
        return ReadOutput::ShowEnvironment;
    }

    match runner::prepare(line, options, out) {
        Ok(ast) => ReadOutput::Value(ast),
        Err(RunnerError::Parse(err)) => {
            if let Err(err) = writeln!(out, "Parsing error: {err}") {
                tracing::warn!("could not write parse error: {err}");
            }
            ReadOutput::Clear
        }
        Err(err) => {
            tracing::warn!("{err}");
            ReadOutput::Clear
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn interpret(line: &str, options: &Options) -> (ReadOutput, String) {
        let mut out = Vec::new();
        let output = interpret_line(line, options, &mut out);
        (output, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_line_with_dumps() {
        let options = Options {
            dump_tokens: true,
            dump_ast: true,
        };
        let (output, printed) = interpret("x 5", &options);

        assert!(matches!(output, ReadOutput::Value(ast) if ast.len() == 2));
        assert_eq!(
            printed,
            "[Tokens]\nIdentifier(x)\nNumber(5)\nEndOfInput(EOF)\n[AST]\nIdentifier: x\nNumber: 5\n"
        );
    }

    #[test]
    fn test_line_without_dumps() {
        let (output, printed) = interpret("x 5", &Options::default());
        assert!(matches!(output, ReadOutput::Value(_)));
        assert_eq!(printed, "");
    }

    #[test]
    fn test_parse_error_clears_line() {
        let (output, printed) = interpret("x @", &Options::default());
        assert!(matches!(output, ReadOutput::Clear));
        assert_eq!(
            printed,
            "Parsing error: unexpected unknown token '@' at line 1, column 3\n"
        );
    }

    #[test]
    fn test_env_command() {
        let (output, printed) = interpret("  :env ", &Options::default());
        assert!(matches!(output, ReadOutput::ShowEnvironment));
        assert_eq!(printed, "");
    }
}
