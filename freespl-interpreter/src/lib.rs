pub mod arith;
pub mod environment;
pub mod error;
pub mod evaluator;
pub mod report;

pub use environment::Environment;
pub use error::EvalError;
pub use evaluator::Interpreter;
pub use report::{ConsoleObserver, ConsoleReporter, ErrorReport, Observer};
