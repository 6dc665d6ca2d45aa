//! Canonical source form for parsed trees.
//!
//! Printing a tree and parsing the output again gives back an equal tree.

use crate::ast::{
    ChatLine, ChatTranscript, Constraint, EntityDeclaration, Identifier, MemberDeclaration,
    TypeReference,
};
use std::fmt;

const INDENT: &str = "    ";

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

impl fmt::Display for TypeReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl fmt::Display for MemberDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.ty)?;
        if !self.constraints.is_empty() {
            f.write_str(" (")?;
            for (i, c) in self.constraints.iter().enumerate() {
                if i > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{}", c)?;
            }
            f.write_str(")")?;
        }
        Ok(())
    }
}

impl fmt::Display for EntityDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "create entity {} {{", self.name)?;
        if self.members.is_empty() {
            return f.write_str("}");
        }
        f.write_str("\n")?;
        for member in &self.members {
            writeln!(f, "{}{},", INDENT, member)?;
        }
        f.write_str("}")
    }
}

impl fmt::Display for ChatLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} says \"{}\"", self.speaker, self.text)
    }
}

impl fmt::Display for ChatTranscript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::{parse_chat, parse_entity_creation};

    #[test]
    fn entity_canonical_form() {
        let e = parse_entity_creation("cReAte entity bughati{thing:string,thing2:string (unique),}")
            .unwrap();
        assert_eq!(
            e.to_string(),
            "create entity bughati {\n    thing: string,\n    thing2: string (unique),\n}"
        );
    }

    #[test]
    fn empty_entity_prints_on_one_line() {
        let e = parse_entity_creation("CREATE ENTITY Empty{}").unwrap();
        assert_eq!(e.to_string(), "create entity Empty {}");
    }

    #[test]
    fn transcript_prints_one_line_each() {
        let t = parse_chat("john says \"hello\"\n\nmichael   says \"world\"").unwrap();
        assert_eq!(
            t.to_string(),
            "john says \"hello\"\nmichael says \"world\"\n"
        );
    }
}
