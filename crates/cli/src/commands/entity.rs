use std::path::Path;

use querylang_core::{parse_entity_creation, EntityDeclaration};

use super::{print_json, read_source, CliError};
use crate::OutputFormat;

pub(crate) fn cmd_entity(file: &Path, output: OutputFormat, quiet: bool) -> Result<(), CliError> {
    let src = read_source(file)?;
    let entity = parse_entity_creation(&src).map_err(|e| CliError::syntax(file, e))?;
    tracing::info!(
        entity = entity.name.as_str(),
        members = entity.members.len(),
        "parsed entity declaration"
    );

    match output {
        OutputFormat::Json => print_json(&entity)?,
        OutputFormat::Text => {
            for line in summary_lines(&entity) {
                println!("{}", line);
            }
            if !quiet {
                eprintln!(
                    "entity '{}' with {} member(s)",
                    entity.name,
                    entity.members.len()
                );
            }
        }
    }
    Ok(())
}

/// One `entity.member: type (constraints)` line per member.
fn summary_lines(entity: &EntityDeclaration) -> Vec<String> {
    entity
        .members
        .iter()
        .map(|m| format!("{}.{}", entity.name, m))
        .collect()
}
