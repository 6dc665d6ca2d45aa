use serde::Serialize;
use std::fmt;
use std::iter::Peekable;
use std::str::CharIndices;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum TokenKind {
    // Keywords -- matched case-insensitively
    KeywordCreate,
    KeywordEntity,
    KeywordUnique,
    KeywordSays,
    /// Identifiers (case-sensitive)
    Identifier,
    /// Quoted string literal; the lexeme is the raw content between the quotes
    StringLiteral,
    // Punctuation
    LBrace,
    RBrace,
    LParen,
    RParen,
    Colon,
    Comma,
    /// Always emitted; the chat grammar treats it as a line separator
    Newline,
    /// Unrecognized input, reported by the parser rather than the lexer
    Error,
    // End of input
    Eof,
}

impl TokenKind {
    /// Human-facing name used in diagnostics.
    pub fn describe(self) -> &'static str {
        match self {
            TokenKind::KeywordCreate => "'create'",
            TokenKind::KeywordEntity => "'entity'",
            TokenKind::KeywordUnique => "'unique'",
            TokenKind::KeywordSays => "'says'",
            TokenKind::Identifier => "identifier",
            TokenKind::StringLiteral => "string literal",
            TokenKind::LBrace => "'{'",
            TokenKind::RBrace => "'}'",
            TokenKind::LParen => "'('",
            TokenKind::RParen => "')'",
            TokenKind::Colon => "':'",
            TokenKind::Comma => "','",
            TokenKind::Newline => "newline",
            TokenKind::Error => "unrecognized input",
            TokenKind::Eof => "end of input",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}

/// Location of a token's first character in the source.
///
/// `offset` is a byte offset; `line` and `column` are 1-based, with columns
/// counted in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Position {
    pub offset: usize,
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn start() -> Self {
        Position {
            offset: 0,
            line: 1,
            column: 1,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub position: Position,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, position: Position) -> Self {
        Token {
            kind,
            lexeme: lexeme.into(),
            position,
        }
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Eof => f.write_str("end of input"),
            TokenKind::Newline => f.write_str("newline"),
            TokenKind::StringLiteral => write!(f, "\"{}\"", self.lexeme),
            _ => write!(f, "'{}'", self.lexeme),
        }
    }
}

fn keyword(word: &str) -> Option<TokenKind> {
    const KEYWORDS: [(&str, TokenKind); 4] = [
        ("create", TokenKind::KeywordCreate),
        ("entity", TokenKind::KeywordEntity),
        ("unique", TokenKind::KeywordUnique),
        ("says", TokenKind::KeywordSays),
    ];
    KEYWORDS
        .iter()
        .find(|(kw, _)| kw.eq_ignore_ascii_case(word))
        .map(|(_, kind)| *kind)
}

fn is_ident_start(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

fn is_ident_continue(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Lazy tokenizer over a source string.
///
/// Never fails: anything it cannot classify becomes a [`TokenKind::Error`]
/// token. The final item is always a single [`TokenKind::Eof`] token, after
/// which the iterator is exhausted.
pub struct Lexer<'src> {
    src: &'src str,
    chars: Peekable<CharIndices<'src>>,
    line: u32,
    column: u32,
    done: bool,
}

impl<'src> Lexer<'src> {
    pub fn new(src: &'src str) -> Self {
        Lexer {
            src,
            chars: src.char_indices().peekable(),
            line: 1,
            column: 1,
            done: false,
        }
    }

    fn position(&mut self) -> Position {
        Position {
            offset: self.offset(),
            line: self.line,
            column: self.column,
        }
    }

    fn bump(&mut self) -> Option<char> {
        let (_, c) = self.chars.next()?;
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    fn bump_while(&mut self, pred: impl Fn(char) -> bool) {
        while let Some(&(_, c)) = self.chars.peek() {
            if !pred(c) {
                break;
            }
            self.bump();
        }
    }

    fn offset(&mut self) -> usize {
        self.chars.peek().map_or(self.src.len(), |&(i, _)| i)
    }

    fn string_literal(&mut self, start: Position) -> Token {
        self.bump(); // opening quote
        let content_start = self.offset();
        self.bump_while(|c| c != '"' && c != '\n');
        let content_end = self.offset();
        match self.chars.peek() {
            Some(&(_, '"')) => {
                self.bump();
                Token::new(
                    TokenKind::StringLiteral,
                    &self.src[content_start..content_end],
                    start,
                )
            }
            // Unterminated: report the whole fragment from the opening quote
            _ => Token::new(TokenKind::Error, &self.src[start.offset..content_end], start),
        }
    }

    fn word(&mut self, start: Position) -> Token {
        self.bump_while(is_ident_continue);
        let end = self.offset();
        let text = &self.src[start.offset..end];
        let kind = keyword(text).unwrap_or(TokenKind::Identifier);
        Token::new(kind, text, start)
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.done {
            return None;
        }

        self.bump_while(|c| c != '\n' && c.is_whitespace());

        let start = self.position();
        let Some(&(_, c)) = self.chars.peek() else {
            self.done = true;
            return Some(Token::new(TokenKind::Eof, "", start));
        };

        let punct = match c {
            '\n' => Some(TokenKind::Newline),
            '{' => Some(TokenKind::LBrace),
            '}' => Some(TokenKind::RBrace),
            '(' => Some(TokenKind::LParen),
            ')' => Some(TokenKind::RParen),
            ':' => Some(TokenKind::Colon),
            ',' => Some(TokenKind::Comma),
            _ => None,
        };
        if let Some(kind) = punct {
            self.bump();
            return Some(Token::new(kind, c.to_string(), start));
        }

        if c == '"' {
            return Some(self.string_literal(start));
        }

        if is_ident_start(c) {
            return Some(self.word(start));
        }

        self.bump();
        Some(Token::new(TokenKind::Error, c.to_string(), start))
    }
}

/// Tokenize a whole source string, ending with one `Eof` token.
pub fn tokenize(src: &str) -> Vec<Token> {
    Lexer::new(src).collect()
}
