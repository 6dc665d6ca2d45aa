use super::{ListShape, Parser};
use crate::ast::{ChatLine, ChatTranscript};
use crate::error::SyntaxError;
use crate::lexer::TokenKind;

const LINES: ListShape = ListShape {
    separator: TokenKind::Newline,
    terminator: TokenKind::Eof,
    collapse_separators: true,
};

impl Parser {
    // chat := line chat | ε
    pub fn parse_chat(&mut self) -> Result<ChatTranscript, SyntaxError> {
        let lines = self.parse_list(LINES, Self::parse_chat_line, TokenKind::Identifier)?;
        self.expect_end()?;
        Ok(ChatTranscript::from_lines(lines))
    }

    // line := name 'says' opinion
    fn parse_chat_line(&mut self) -> Result<ChatLine, SyntaxError> {
        let speaker = self.take_identifier()?;
        self.expect(TokenKind::KeywordSays)?;
        let text = self.expect(TokenKind::StringLiteral)?.lexeme;
        Ok(ChatLine { speaker, text })
    }
}
