//! querylang-core: lexer, token stream, and parsers for the querylang
//! entity-declaration and chat-transcript grammars.
//!
//! # Public API
//!
//! - [`parse_entity_creation()`] -- `create entity name { member: type (unique), ... }`
//! - [`parse_chat()`] -- `name says "text"` lines
//! - [`tokenize()`] -- the shared lexer
//! - [`Parser`] -- a fresh parser over one source string, for callers that
//!   pick the grammar at runtime
//! - [`SyntaxError`] -- the single error type; lexing never fails
//!
//! Parsing is pure: no I/O, no logging, no shared state between calls.

pub mod ast;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod printer;
pub mod stream;

// ── Convenience re-exports ───────────────────────────────────────────

pub use ast::{
    ChatLine, ChatTranscript, Constraint, EntityDeclaration, Identifier, MemberDeclaration, Node,
    TypeReference,
};
pub use error::SyntaxError;
pub use lexer::{tokenize, Position, Token, TokenKind};
pub use parser::{parse_chat, parse_entity_creation, Grammar, Parser};
pub use stream::TokenStream;
