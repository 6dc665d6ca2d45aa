use std::path::Path;

use querylang_core::parse_chat;

use super::{print_json, read_source, CliError};
use crate::OutputFormat;

pub(crate) fn cmd_chat(file: &Path, output: OutputFormat, quiet: bool) -> Result<(), CliError> {
    let src = read_source(file)?;
    let transcript = parse_chat(&src).map_err(|e| CliError::syntax(file, e))?;
    tracing::info!(lines = transcript.len(), "parsed chat transcript");

    match output {
        OutputFormat::Json => print_json(&transcript)?,
        OutputFormat::Text => {
            for line in &transcript {
                println!("{} has said \"{}\"", line.speaker, line.text);
            }
            if transcript.is_empty() && !quiet {
                eprintln!("empty transcript");
            }
        }
    }
    Ok(())
}
