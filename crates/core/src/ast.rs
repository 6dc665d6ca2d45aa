//! AST types produced by the entity and chat parsers.
//!
//! Nodes are immutable once built and owned by whoever called the parser.
//! Source positions are carried on identifiers only, as metadata: they do
//! not take part in equality, so equivalent sources written with different
//! spacing or keyword case produce equal trees.

use crate::lexer::Position;
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;
use std::hash::{Hash, Hasher};

// ──────────────────────────────────────────────
// Identifiers
// ──────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct Identifier {
    pub name: String,
    pub position: Position,
}

impl Identifier {
    pub fn new(name: impl Into<String>, position: Position) -> Self {
        Identifier {
            name: name.into(),
            position,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.name
    }
}

impl PartialEq for Identifier {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Identifier {}

impl Hash for Identifier {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

// ──────────────────────────────────────────────
// Entity declarations
// ──────────────────────────────────────────────

/// `create entity <name> { <members> }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntityDeclaration {
    pub name: Identifier,
    pub members: Vec<MemberDeclaration>,
}

impl EntityDeclaration {
    pub fn member(&self, name: &str) -> Option<&MemberDeclaration> {
        self.members.iter().find(|m| m.name.as_str() == name)
    }
}

/// `<name>: <type> (<constraints>)`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemberDeclaration {
    pub name: Identifier,
    #[serde(rename = "type")]
    pub ty: TypeReference,
    pub constraints: BTreeSet<Constraint>,
}

impl MemberDeclaration {
    pub fn has(&self, constraint: Constraint) -> bool {
        self.constraints.contains(&constraint)
    }
}

/// Type names that get the `builtin` flag. Matching is case-insensitive.
pub const BUILTIN_TYPES: &[&str] = &[
    "string", "int", "integer", "float", "double", "decimal", "bool", "boolean", "date",
    "datetime", "uuid",
];

/// A member's type as written. Not resolved against any schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeReference {
    pub name: String,
    pub builtin: bool,
}

impl TypeReference {
    pub fn named(name: impl Into<String>) -> Self {
        let name = name.into();
        let builtin = BUILTIN_TYPES
            .iter()
            .any(|b| b.eq_ignore_ascii_case(&name));
        TypeReference { name, builtin }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Constraint {
    Unique,
}

impl Constraint {
    pub fn keyword(self) -> &'static str {
        match self {
            Constraint::Unique => "unique",
        }
    }
}

// ──────────────────────────────────────────────
// Chat transcripts
// ──────────────────────────────────────────────

/// `<speaker> says "<text>"`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatLine {
    pub speaker: Identifier,
    pub text: String,
}

/// A transcript is either empty or one line followed by the rest of the chat.
///
/// `Clone`, `PartialEq`, `Debug` and `Drop` walk the lines in a loop; derived
/// versions would recurse once per line.
#[derive(Default)]
pub enum ChatTranscript {
    #[default]
    Empty,
    Line(ChatLine, Box<ChatTranscript>),
}

impl ChatTranscript {
    /// Build the right-nested transcript from lines in input order.
    pub fn from_lines(lines: Vec<ChatLine>) -> Self {
        lines
            .into_iter()
            .rev()
            .fold(ChatTranscript::Empty, |rest, line| {
                ChatTranscript::Line(line, Box::new(rest))
            })
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, ChatTranscript::Empty)
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn iter(&self) -> ChatLines<'_> {
        ChatLines { rest: self }
    }
}

impl Drop for ChatTranscript {
    // Unlink iteratively; the default recursive drop would overflow the
    // stack on very long transcripts.
    fn drop(&mut self) {
        let mut rest = match self {
            ChatTranscript::Empty => return,
            ChatTranscript::Line(_, tail) => std::mem::take(&mut **tail),
        };
        while let ChatTranscript::Line(_, tail) = &mut rest {
            let next = std::mem::take(&mut **tail);
            rest = next;
        }
    }
}

impl Clone for ChatTranscript {
    fn clone(&self) -> Self {
        ChatTranscript::from_lines(self.iter().cloned().collect())
    }
}

impl PartialEq for ChatTranscript {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl Eq for ChatTranscript {}

impl fmt::Debug for ChatTranscript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl Serialize for ChatTranscript {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'a> IntoIterator for &'a ChatTranscript {
    type Item = &'a ChatLine;
    type IntoIter = ChatLines<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over a transcript's lines in input order.
pub struct ChatLines<'a> {
    rest: &'a ChatTranscript,
}

impl<'a> Iterator for ChatLines<'a> {
    type Item = &'a ChatLine;

    fn next(&mut self) -> Option<&'a ChatLine> {
        match self.rest {
            ChatTranscript::Empty => None,
            ChatTranscript::Line(line, rest) => {
                self.rest = rest;
                Some(line)
            }
        }
    }
}

// ──────────────────────────────────────────────
// Closed node view
// ──────────────────────────────────────────────

/// Borrowed view of any AST node, for consumers that walk the whole tree.
#[derive(Debug, Clone, Copy)]
pub enum Node<'a> {
    Entity(&'a EntityDeclaration),
    Member(&'a MemberDeclaration),
    Type(&'a TypeReference),
    Constraint(Constraint),
    Transcript(&'a ChatTranscript),
    ChatLine(&'a ChatLine),
}

impl<'a> Node<'a> {
    pub fn children(self) -> Vec<Node<'a>> {
        match self {
            Node::Entity(e) => e.members.iter().map(Node::Member).collect(),
            Node::Member(m) => std::iter::once(Node::Type(&m.ty))
                .chain(m.constraints.iter().copied().map(Node::Constraint))
                .collect(),
            Node::Transcript(t) => t.iter().map(Node::ChatLine).collect(),
            Node::Type(_) | Node::Constraint(_) | Node::ChatLine(_) => Vec::new(),
        }
    }

    /// Depth-first, pre-order traversal. `visit` receives each node and its depth.
    pub fn walk(self, visit: &mut impl FnMut(Node<'a>, usize)) {
        fn go<'a>(node: Node<'a>, depth: usize, visit: &mut impl FnMut(Node<'a>, usize)) {
            visit(node, depth);
            for child in node.children() {
                go(child, depth + 1, visit);
            }
        }
        go(self, 0, visit);
    }
}

impl<'a> From<&'a EntityDeclaration> for Node<'a> {
    fn from(e: &'a EntityDeclaration) -> Self {
        Node::Entity(e)
    }
}

impl<'a> From<&'a ChatTranscript> for Node<'a> {
    fn from(t: &'a ChatTranscript) -> Self {
        Node::Transcript(t)
    }
}
