pub(crate) mod chat;
pub(crate) mod entity;
pub(crate) mod fmt;
pub(crate) mod tokens;

use std::io::Read;
use std::path::{Path, PathBuf};

use querylang_core::SyntaxError;

#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("error reading '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{}:{source}", path.display())]
    Syntax { path: PathBuf, source: SyntaxError },

    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    pub(crate) fn syntax(path: &Path, source: SyntaxError) -> Self {
        CliError::Syntax {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn to_json_value(&self) -> serde_json::Value {
        match self {
            CliError::Syntax { path, source } => {
                let mut v = source.to_json_value();
                v["file"] = serde_json::Value::String(path.display().to_string());
                v
            }
            other => serde_json::json!({ "error": other.to_string() }),
        }
    }
}

/// Read source text from `path`, or from stdin when the path is `-`.
pub(crate) fn read_source(path: &Path) -> Result<String, CliError> {
    let read_err = |source| CliError::Read {
        path: path.to_path_buf(),
        source,
    };
    if path == Path::new("-") {
        tracing::debug!("reading source from stdin");
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .map_err(read_err)?;
        return Ok(buf);
    }
    tracing::debug!(path = %path.display(), "reading source file");
    std::fs::read_to_string(path).map_err(read_err)
}

/// Serialize `value` as pretty JSON on stdout.
pub(crate) fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
