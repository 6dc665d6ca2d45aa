//! Hand-written LL(1) parsers for the entity-creation and chat grammars.
//!
//! Both grammars share the lexer, the token stream, and the list helper
//! below. Everything else about them is independent.

use crate::ast::{ChatTranscript, EntityDeclaration, Identifier};
use crate::error::SyntaxError;
use crate::lexer::{tokenize, Token, TokenKind};
use crate::stream::TokenStream;

mod chat;
mod entity;

/// Which grammar a [`Parser`] reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grammar {
    /// `create entity ...`; line breaks are insignificant.
    Entity,
    /// `name says "text"` lines; line breaks separate lines.
    Chat,
}

// ──────────────────────────────────────────────
// Parser
// ──────────────────────────────────────────────

pub struct Parser {
    stream: TokenStream,
    /// Extra kinds the last list item could have continued with, e.g. `(`
    /// after a member type with no constraint list.
    item_follow: Vec<TokenKind>,
}

/// How a delimited list is laid out in the token stream.
#[derive(Debug, Clone, Copy)]
struct ListShape {
    separator: TokenKind,
    terminator: TokenKind,
    /// Accept runs of separators (blank lines) between and before items.
    collapse_separators: bool,
}

impl Parser {
    /// Lex `source` into a fresh stream and return an independent parser.
    pub fn new(source: &str, grammar: Grammar) -> Self {
        let tokens = tokenize(source);
        let stream = match grammar {
            Grammar::Entity => TokenStream::without_newlines(tokens),
            Grammar::Chat => TokenStream::new(tokens),
        };
        Parser {
            stream,
            item_follow: Vec::new(),
        }
    }

    fn peek(&self) -> &Token {
        self.stream.peek()
    }

    fn check(&self, kind: TokenKind) -> bool {
        self.stream.check(kind)
    }

    fn expect(&mut self, kind: TokenKind) -> Result<Token, SyntaxError> {
        self.stream
            .eat(kind)
            .ok_or_else(|| self.err([kind]))
    }

    fn take_identifier(&mut self) -> Result<Identifier, SyntaxError> {
        let token = self.expect(TokenKind::Identifier)?;
        Ok(Identifier::new(token.lexeme, token.position))
    }

    fn err(&self, expected: impl IntoIterator<Item = TokenKind>) -> SyntaxError {
        SyntaxError::unexpected(self.peek().clone(), expected)
    }

    /// Parse `item (separator list)? | ε` up to (not including) the terminator.
    ///
    /// This is the right-recursive list rule both grammars use, unrolled into
    /// a loop. A separator directly before the terminator is allowed and adds
    /// no item.
    fn parse_list<T>(
        &mut self,
        shape: ListShape,
        mut item: impl FnMut(&mut Self) -> Result<T, SyntaxError>,
        first: TokenKind,
    ) -> Result<Vec<T>, SyntaxError> {
        let mut items = Vec::new();
        if shape.collapse_separators {
            while self.stream.eat(shape.separator).is_some() {}
        }
        loop {
            if self.check(shape.terminator) {
                return Ok(items);
            }
            if !items.is_empty() || self.check(first) {
                self.item_follow.clear();
                items.push(item(self)?);
            } else {
                return Err(self.err([first, shape.terminator]));
            }

            if self.stream.eat(shape.separator).is_none() {
                if self.check(shape.terminator) {
                    return Ok(items);
                }
                let mut expected = vec![shape.separator, shape.terminator];
                expected.extend(self.item_follow.iter().copied());
                return Err(self.err(expected));
            }
            if shape.collapse_separators {
                while self.stream.eat(shape.separator).is_some() {}
            }
            if !self.check(shape.terminator) && !self.check(first) {
                return Err(self.err([first, shape.terminator]));
            }
        }
    }

    fn expect_end(&mut self) -> Result<(), SyntaxError> {
        self.expect(TokenKind::Eof).map(|_| ())
    }
}

// ──────────────────────────────────────────────
// Entry points
// ──────────────────────────────────────────────

/// Parse a single `create entity` statement.
pub fn parse_entity_creation(source: &str) -> Result<EntityDeclaration, SyntaxError> {
    Parser::new(source, Grammar::Entity).parse_entity_creation()
}

/// Parse a chat transcript. An empty source is an empty transcript.
pub fn parse_chat(source: &str) -> Result<ChatTranscript, SyntaxError> {
    Parser::new(source, Grammar::Chat).parse_chat()
}

// ──────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────
