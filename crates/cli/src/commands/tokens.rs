use std::path::Path;

use querylang_core::{tokenize, Token, TokenKind};

use super::{print_json, read_source, CliError};
use crate::OutputFormat;

pub(crate) fn cmd_tokens(file: &Path, output: OutputFormat) -> Result<(), CliError> {
    let src = read_source(file)?;
    let tokens = tokenize(&src);
    let errors = tokens.iter().filter(|t| t.is(TokenKind::Error)).count();
    if errors > 0 {
        tracing::warn!(errors, "source contains unrecognized input");
    }

    match output {
        OutputFormat::Json => print_json(&tokens)?,
        OutputFormat::Text => {
            for token in &tokens {
                println!("{}", format_token(token));
            }
        }
    }
    Ok(())
}

/// `line:col Kind "lexeme"`, with the lexeme escaped so newlines stay on one line.
fn format_token(token: &Token) -> String {
    format!(
        "{} {:?} {:?}",
        token.position, token.kind, token.lexeme
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_render_position_kind_and_escaped_lexeme() {
        let tokens = tokenize("says\n");
        assert_eq!(format_token(&tokens[0]), "1:1 KeywordSays \"says\"");
        assert_eq!(format_token(&tokens[1]), "1:5 Newline \"\\n\"");
        assert_eq!(format_token(&tokens[2]), "2:1 Eof \"\"");
    }
}
