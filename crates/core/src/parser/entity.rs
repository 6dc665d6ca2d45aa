use super::{ListShape, Parser};
use crate::ast::{Constraint, EntityDeclaration, MemberDeclaration, TypeReference};
use crate::error::SyntaxError;
use crate::lexer::TokenKind;
use std::collections::BTreeSet;

const MEMBERS: ListShape = ListShape {
    separator: TokenKind::Comma,
    terminator: TokenKind::RBrace,
    collapse_separators: false,
};

/// Token kinds that name a constraint inside `( ... )`.
const CONSTRAINT_KEYWORDS: [TokenKind; 1] = [TokenKind::KeywordUnique];

impl Parser {
    // entityCreation := CREATE ENTITY entityName '{' membersDeclaration? '}'
    pub fn parse_entity_creation(&mut self) -> Result<EntityDeclaration, SyntaxError> {
        self.expect(TokenKind::KeywordCreate)?;
        self.expect(TokenKind::KeywordEntity)?;
        let name = self.take_identifier()?;
        self.expect(TokenKind::LBrace)?;
        let members = self.parse_list(MEMBERS, Self::parse_member, TokenKind::Identifier)?;
        self.expect(TokenKind::RBrace)?;
        self.expect_end()?;
        Ok(EntityDeclaration { name, members })
    }

    // memberDeclaration := memberName ':' type constraintList?
    fn parse_member(&mut self) -> Result<MemberDeclaration, SyntaxError> {
        let name = self.take_identifier()?;
        self.expect(TokenKind::Colon)?;
        let ty = self.parse_type()?;
        let constraints = if self.check(TokenKind::LParen) {
            self.parse_constraints()?
        } else {
            self.item_follow.push(TokenKind::LParen);
            BTreeSet::new()
        };
        Ok(MemberDeclaration {
            name,
            ty,
            constraints,
        })
    }

    fn parse_type(&mut self) -> Result<TypeReference, SyntaxError> {
        let token = self.expect(TokenKind::Identifier)?;
        Ok(TypeReference::named(token.lexeme))
    }

    // constraintList := '(' constraintName+ ')'
    fn parse_constraints(&mut self) -> Result<BTreeSet<Constraint>, SyntaxError> {
        self.expect(TokenKind::LParen)?;
        let mut constraints = BTreeSet::new();
        constraints.insert(self.parse_constraint()?);
        while !self.check(TokenKind::RParen) {
            if !CONSTRAINT_KEYWORDS.iter().any(|&k| self.check(k)) {
                return Err(self.err(
                    CONSTRAINT_KEYWORDS
                        .into_iter()
                        .chain(std::iter::once(TokenKind::RParen)),
                ));
            }
            constraints.insert(self.parse_constraint()?);
        }
        self.expect(TokenKind::RParen)?;
        Ok(constraints)
    }

    fn parse_constraint(&mut self) -> Result<Constraint, SyntaxError> {
        match self.peek().kind {
            TokenKind::KeywordUnique => {
                self.stream.advance();
                Ok(Constraint::Unique)
            }
            _ => Err(self.err(CONSTRAINT_KEYWORDS)),
        }
    }
}
