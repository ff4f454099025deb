mod reader;

use freespl_interpreter::{ConsoleObserver, ConsoleReporter, ErrorReport, Interpreter};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use reader::{ReadOutput, Reader};

use crate::runner::Options;

/// Interactive session. Variables persist from one line to the next.
struct Repl {
    reader: Reader,
    interpreter: Interpreter<ConsoleObserver>,
    reporter: ConsoleReporter,
}

impl Repl {
    fn run(mut self) {
        loop {
            match self.reader.read() {
                ReadOutput::Exit => break,
                ReadOutput::Clear => continue,
                ReadOutput::ShowEnvironment => print!("{}", self.interpreter.environment()),
                ReadOutput::Value(ast) => {
                    if let Err(err) = self.interpreter.execute(&ast, ast.root()) {
                        self.reporter.check_error(true, &err.to_string());
                    }
                }
            }
        }
    }
}

pub fn start(options: Options) -> Result<(), ReadlineError> {
    let rl = DefaultEditor::new()?;

    Repl {
        reader: Reader::new(rl, options),
        interpreter: Interpreter::new(ConsoleObserver),
        reporter: ConsoleReporter,
    }
    .run();
    Ok(())
}
