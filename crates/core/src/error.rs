use crate::lexer::{Position, Token, TokenKind};
use serde::Serialize;
use std::fmt;

/// A syntax error. The first one encountered ends the parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("{position}: expected {expected}, found {found}")]
pub struct SyntaxError {
    pub position: Position,
    pub expected: Expected,
    pub found: Token,
}

impl SyntaxError {
    /// Error at `found`, which was not one of the `expected` kinds.
    pub fn unexpected(found: Token, expected: impl IntoIterator<Item = TokenKind>) -> Self {
        SyntaxError {
            position: found.position,
            expected: expected.into_iter().collect(),
            found,
        }
    }

    /// Serialize with every field present, for machine-readable reports.
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "line":     self.position.line,
            "column":   self.position.column,
            "offset":   self.position.offset,
            "expected": self.expected.0,
            "found": {
                "kind":   self.found.kind,
                "lexeme": self.found.lexeme,
            },
            "message":  self.to_string(),
        })
    }
}

/// Sorted, deduplicated set of token kinds that would have been accepted.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct Expected(Vec<TokenKind>);

impl Expected {
    pub fn contains(&self, kind: TokenKind) -> bool {
        self.0.binary_search(&kind).is_ok()
    }

    pub fn kinds(&self) -> &[TokenKind] {
        &self.0
    }
}

impl FromIterator<TokenKind> for Expected {
    fn from_iter<I: IntoIterator<Item = TokenKind>>(iter: I) -> Self {
        let mut kinds: Vec<TokenKind> = iter.into_iter().collect();
        kinds.sort();
        kinds.dedup();
        Expected(kinds)
    }
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.as_slice() {
            [] => f.write_str("nothing"),
            [only] => f.write_str(only.describe()),
            [init @ .., last] => {
                for (i, kind) in init.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    f.write_str(kind.describe())?;
                }
                write!(f, " or {}", last.describe())
            }
        }
    }
}
