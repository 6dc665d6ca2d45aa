//! Token stream wrapper for the hand-written parsers.

use crate::lexer::{Position, Token, TokenKind};

/// Saved cursor position, produced by [`TokenStream::mark`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mark(usize);

/// Buffered token sequence with a cursor, lookahead, and backtracking.
///
/// Reading past the end yields the trailing `Eof` token forever, so callers
/// never have to handle a missing token.
pub struct TokenStream {
    tokens: Vec<Token>,
    pos: usize,
    eof: Token,
}

impl TokenStream {
    /// Stream over every token, newlines included.
    pub fn new(tokens: Vec<Token>) -> Self {
        let eof = match tokens.last() {
            Some(t) if t.is(TokenKind::Eof) => t.clone(),
            Some(t) => Token::new(TokenKind::Eof, "", t.position),
            None => Token::new(TokenKind::Eof, "", Position::start()),
        };
        TokenStream {
            tokens,
            pos: 0,
            eof,
        }
    }

    /// Stream for grammars where line breaks are insignificant.
    pub fn without_newlines(tokens: Vec<Token>) -> Self {
        Self::new(
            tokens
                .into_iter()
                .filter(|t| !t.is(TokenKind::Newline))
                .collect(),
        )
    }

    /// Current token without consuming it.
    pub fn peek(&self) -> &Token {
        self.peek_nth(0)
    }

    /// The token `n` positions ahead of the cursor.
    pub fn peek_nth(&self, n: usize) -> &Token {
        self.tokens.get(self.pos + n).unwrap_or(&self.eof)
    }

    /// Consume and return the current token.
    pub fn advance(&mut self) -> Token {
        let token = self.peek().clone();
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
        token
    }

    pub fn check(&self, kind: TokenKind) -> bool {
        self.peek().is(kind)
    }

    /// Consume the current token if it has the given kind.
    pub fn eat(&mut self, kind: TokenKind) -> Option<Token> {
        if self.check(kind) {
            Some(self.advance())
        } else {
            None
        }
    }

    pub fn at_end(&self) -> bool {
        self.check(TokenKind::Eof)
    }

    pub fn mark(&self) -> Mark {
        Mark(self.pos)
    }

    pub fn reset(&mut self, mark: Mark) {
        self.pos = mark.0.min(self.tokens.len());
    }
}
