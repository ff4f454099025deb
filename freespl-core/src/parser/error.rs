use std::rc::Rc;

use thiserror::Error;

use crate::lexer::{Position, Token, TokenKind};

#[derive(Debug, PartialEq, Eq, Clone, Error)]
pub enum ParseError {
    #[error("unexpected {kind} token '{lexeme}' at {position}")]
    UnexpectedToken {
        kind: TokenKind,
        lexeme: Rc<str>,
        position: Position,
    },
}

impl ParseError {
    pub fn unexpected_token(token: Token) -> Self {
        ParseError::UnexpectedToken {
            kind: token.kind,
            lexeme: token.lexeme,
            position: token.position,
        }
    }
}
