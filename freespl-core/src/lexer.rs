use std::fmt;
use std::rc::Rc;

use tracing::debug;

/// Lexeme carried by the sentinel token appended after the last real token.
pub const EOF_LEXEME: &str = "EOF";

static KEYWORDS: phf::Set<&'static str> = phf::phf_set! {
    "if",
    "else",
    "while",
    "for",
    "return",
    "int",
    "float",
    "void",
};

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Identifier,
    Number,
    Operator,
    Keyword,
    Symbol,
    EndOfInput,
    Unknown,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Identifier => "identifier",
            TokenKind::Number => "number",
            TokenKind::Operator => "operator",
            TokenKind::Keyword => "keyword",
            TokenKind::Symbol => "symbol",
            TokenKind::EndOfInput => "end of input",
            TokenKind::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

/// 1-based line and column of a token's first character.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Default for Position {
    fn default() -> Self {
        Position { line: 1, column: 1 }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: Rc<str>,
    pub position: Position,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<Rc<str>>, position: Position) -> Self {
        Token {
            kind,
            lexeme: lexeme.into(),
            position,
        }
    }

    pub fn is_keyword(&self, keyword: &str) -> bool {
        self.kind == TokenKind::Keyword && &*self.lexeme == keyword
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({})", self.kind, self.lexeme)
    }
}

pub fn is_keyword(word: &str) -> bool {
    KEYWORDS.contains(word)
}

fn is_whitespace(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\n' | '\r')
}

fn is_operator(ch: char) -> bool {
    matches!(ch, '+' | '-' | '*' | '/' | '=' | '<' | '>' | '!')
}

fn is_symbol(ch: char) -> bool {
    matches!(ch, '(' | ')' | '{' | '}' | ';')
}

/// Streaming lexer. Yields every token of the input followed by exactly one
/// `EndOfInput` sentinel, then stops.
#[derive(Clone)]
pub struct Tokenizer<'a> {
    input: &'a str,
    iter: std::iter::Peekable<std::str::CharIndices<'a>>,
    position: Position,
    finished: bool,
}

impl<'a> Tokenizer<'a> {
    pub fn new(input: &'a str) -> Self {
        let iter = input.char_indices().peekable();
        Self {
            input,
            iter,
            position: Position::default(),
            finished: false,
        }
    }

    fn bump(&mut self) -> Option<(usize, char)> {
        let (idx, ch) = self.iter.next()?;
        if ch == '\n' {
            self.position.line += 1;
            self.position.column = 1;
        } else {
            self.position.column += 1;
        }
        Some((idx, ch))
    }

    fn bump_while(&mut self, predicate: impl Fn(char) -> bool) {
        while self.iter.peek().is_some_and(|(_, ch)| predicate(*ch)) {
            self.bump();
        }
    }

    fn next_idx(&mut self) -> usize {
        self.iter
            .peek()
            .map(|(idx, _)| *idx)
            .unwrap_or(self.input.len())
    }

    fn lexeme_from(&mut self, start: usize) -> &'a str {
        let end = self.next_idx();
        &self.input[start..end]
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }

        self.bump_while(is_whitespace);

        let position = self.position;
        let Some((start, ch)) = self.bump() else {
            self.finished = true;
            return Some(Token::new(TokenKind::EndOfInput, EOF_LEXEME, position));
        };

        let kind = match ch {
            c if c.is_ascii_alphabetic() => {
                self.bump_while(|c| c.is_ascii_alphanumeric());
                if is_keyword(self.lexeme_from(start)) {
                    TokenKind::Keyword
                } else {
                    TokenKind::Identifier
                }
            }
            c if c.is_ascii_digit() => {
                self.bump_while(|c| c.is_ascii_digit());
                TokenKind::Number
            }
            c if is_operator(c) => {
                self.bump_while(is_operator);
                TokenKind::Operator
            }
            c if is_symbol(c) => TokenKind::Symbol,
            c => {
                debug!(character = ?c, %position, "unrecognized character");
                TokenKind::Unknown
            }
        };

        Some(Token::new(kind, self.lexeme_from(start), position))
    }
}

impl std::iter::FusedIterator for Tokenizer<'_> {}

/// Scans `source` into its complete token sequence, sentinel included.
pub fn tokenize(source: &str) -> Vec<Token> {
    Tokenizer::new(source).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn lex(input: &str) -> Vec<(TokenKind, String)> {
        tokenize(input)
            .into_iter()
            .map(|token| (token.kind, token.lexeme.to_string()))
            .collect()
    }

    fn expected(tokens: &[(TokenKind, &str)]) -> Vec<(TokenKind, String)> {
        tokens
            .iter()
            .map(|(kind, lexeme)| (*kind, lexeme.to_string()))
            .collect()
    }

    #[test]
    fn test_simple_assignment() {
        use TokenKind::*;

        assert_eq!(
            lex("x = 5;"),
            expected(&[
                (Identifier, "x"),
                (Operator, "="),
                (Number, "5"),
                (Symbol, ";"),
                (EndOfInput, "EOF"),
            ])
        );
    }

    #[test]
    fn test_whitespace_only() {
        for input in ["", " ", "\t\t", "\n\r\n", "  \n\t \r "] {
            assert_eq!(lex(input), expected(&[(TokenKind::EndOfInput, "EOF")]));
        }
    }

    #[test]
    fn test_keywords_are_never_identifiers() {
        for keyword in ["if", "else", "while", "for", "return", "int", "float", "void"] {
            let tokens = tokenize(keyword);
            assert_eq!(tokens.len(), 2);
            assert_eq!(tokens[0].kind, TokenKind::Keyword, "{keyword}");
            assert!(tokens[0].is_keyword(keyword));
        }
    }

    #[test]
    fn test_keyword_prefixes_are_identifiers() {
        use TokenKind::*;

        assert_eq!(
            lex("iff whilex int1 end print"),
            expected(&[
                (Identifier, "iff"),
                (Identifier, "whilex"),
                (Identifier, "int1"),
                (Identifier, "end"),
                (Identifier, "print"),
                (EndOfInput, "EOF"),
            ])
        );
    }

    #[test]
    fn test_operator_runs() {
        use TokenKind::*;

        assert_eq!(
            lex("a==b != c<=-1"),
            expected(&[
                (Identifier, "a"),
                (Operator, "=="),
                (Identifier, "b"),
                (Operator, "!="),
                (Identifier, "c"),
                (Operator, "<=-"),
                (Number, "1"),
                (EndOfInput, "EOF"),
            ])
        );
    }

    #[test]
    fn test_numbers_and_identifiers() {
        use TokenKind::*;

        assert_eq!(
            lex("42abc x1y2 007"),
            expected(&[
                (Number, "42"),
                (Identifier, "abc"),
                (Identifier, "x1y2"),
                (Number, "007"),
                (EndOfInput, "EOF"),
            ])
        );
    }

    #[test]
    fn test_unknown_characters() {
        use TokenKind::*;

        assert_eq!(
            lex("x_1, @é"),
            expected(&[
                (Identifier, "x"),
                (Unknown, "_"),
                (Number, "1"),
                (Unknown, ","),
                (Unknown, "@"),
                (Unknown, "é"),
                (EndOfInput, "EOF"),
            ])
        );
    }

    #[test]
    fn test_full_program() {
        use TokenKind::*;

        let input = "int x = 5;
        if (x > 3) {
            x = x + 2;
        } else {
            x = x - 2;
        }";

        assert_eq!(
            lex(input),
            expected(&[
                (Keyword, "int"),
                (Identifier, "x"),
                (Operator, "="),
                (Number, "5"),
                (Symbol, ";"),
                (Keyword, "if"),
                (Symbol, "("),
                (Identifier, "x"),
                (Operator, ">"),
                (Number, "3"),
                (Symbol, ")"),
                (Symbol, "{"),
                (Identifier, "x"),
                (Operator, "="),
                (Identifier, "x"),
                (Operator, "+"),
                (Number, "2"),
                (Symbol, ";"),
                (Symbol, "}"),
                (Keyword, "else"),
                (Symbol, "{"),
                (Identifier, "x"),
                (Operator, "="),
                (Identifier, "x"),
                (Operator, "-"),
                (Number, "2"),
                (Symbol, ";"),
                (Symbol, "}"),
                (EndOfInput, "EOF"),
            ])
        );
    }

    #[test]
    fn test_positions() {
        let tokens = tokenize("x = 5;\n  while");
        let positions = tokens
            .iter()
            .map(|token| (token.position.line, token.position.column))
            .collect::<Vec<_>>();

        assert_eq!(positions, vec![(1, 1), (1, 3), (1, 5), (1, 6), (2, 3), (2, 8)]);
    }

    #[test]
    fn test_sentinel_emitted_once() {
        let mut tokenizer = Tokenizer::new("x");
        assert_eq!(tokenizer.next().map(|t| t.kind), Some(TokenKind::Identifier));
        assert_eq!(tokenizer.next().map(|t| t.kind), Some(TokenKind::EndOfInput));
        assert_eq!(tokenizer.next(), None);
        assert_eq!(tokenizer.next(), None);
    }

    #[test]
    fn test_token_display() {
        let rendered = tokenize("x = 5;")
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>();

        assert_eq!(
            rendered,
            vec!["Identifier(x)", "Operator(=)", "Number(5)", "Symbol(;)", "EndOfInput(EOF)"]
        );
    }
}
