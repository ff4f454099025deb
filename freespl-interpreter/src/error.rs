use std::num::ParseIntError;
use std::rc::Rc;

use thiserror::Error;

#[derive(Debug, PartialEq, Eq, Clone, Error)]
pub enum EvalError {
    #[error("nil node in expression")]
    NilExpression,
    #[error("undefined variable: {0}")]
    UndefinedVariable(Rc<str>),
    #[error("invalid token in expression: {0}")]
    InvalidExpressionToken(Rc<str>),
    #[error("invalid number {lexeme}: {source}")]
    InvalidNumber {
        lexeme: Rc<str>,
        source: ParseIntError,
    },
}
