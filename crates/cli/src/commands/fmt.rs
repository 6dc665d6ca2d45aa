use std::path::Path;

use querylang_core::parse_entity_creation;

use super::{read_source, CliError};

pub(crate) fn cmd_fmt(file: &Path) -> Result<(), CliError> {
    let src = read_source(file)?;
    let entity = parse_entity_creation(&src).map_err(|e| CliError::syntax(file, e))?;
    tracing::debug!(entity = entity.name.as_str(), "formatting entity");
    println!("{}", entity);
    Ok(())
}
