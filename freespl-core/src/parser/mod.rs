pub mod error;

use tracing::{debug, trace};

use crate::ast::{Ast, NodeId};
use crate::lexer::{Token, TokenKind, Tokenizer};
pub use error::ParseError;

/// Keyword lexeme that stops a block early.
///
/// Not part of the lexer's keyword set, so it only ever shows up in token
/// sequences built by hand.
pub const END_KEYWORD: &str = "end";

pub struct Parser<I: Iterator<Item = Token>> {
    pub iter: std::iter::Peekable<I>,
}

impl<I: Iterator<Item = Token>> Parser<I> {
    pub fn new(tokens: impl IntoIterator<Item = Token, IntoIter = I>) -> Self {
        let iter = tokens.into_iter().peekable();
        Self { iter }
    }

    /// Builds one tree from the front of the token stream.
    ///
    /// Keywords open a new statement linked through `next`; every other
    /// accepted token extends the current statement through `right`.
    /// Stops at an `end` keyword (leaving the rest of the stream for a later
    /// call), at the final `EndOfInput` sentinel, or when tokens run out.
    pub fn parse_block(&mut self) -> Result<Ast, ParseError> {
        let mut ast = Ast::new();
        let mut current: Option<NodeId> = None;

        while let Some(token) = self.iter.next() {
            match token.kind {
                TokenKind::Keyword if &*token.lexeme == END_KEYWORD => {
                    debug!(position = %token.position, "end of block");
                    break;
                }
                TokenKind::Keyword => {
                    trace!(%token, "statement");
                    let node = ast.push(token);
                    match current {
                        Some(current) => ast[current].next = Some(node),
                        None => ast.set_root(Some(node)),
                    }
                    current = Some(node);
                }
                TokenKind::Identifier
                | TokenKind::Operator
                | TokenKind::Number
                | TokenKind::Symbol => {
                    trace!(%token, "expression");
                    let node = ast.push(token);
                    match current {
                        Some(current) => ast[current].right = Some(node),
                        None => ast.set_root(Some(node)),
                    }
                    current = Some(node);
                }
                TokenKind::EndOfInput if self.iter.peek().is_none() => break,
                TokenKind::EndOfInput | TokenKind::Unknown => {
                    return Err(ParseError::unexpected_token(token));
                }
            }
        }

        debug!(nodes = ast.len(), "parsed block");
        Ok(ast)
    }
}

/// Parses a token sequence into a tree. An empty sequence yields a tree
/// without a root.
pub fn parse_block<I>(tokens: I) -> Result<Ast, ParseError>
where
    I: IntoIterator<Item = Token>,
{
    Parser::new(tokens).parse_block()
}

pub fn parse(source: &str) -> Result<Ast, ParseError> {
    parse_block(Tokenizer::new(source))
}
