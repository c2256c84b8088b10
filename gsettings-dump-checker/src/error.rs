use std::io;

use thiserror::Error;

/// Failure taxonomy for a single verification run.
///
/// Every variant maps to the same external contract (stdout `error`,
/// exit 1); the split exists so stderr diagnostics can name the cause.
#[derive(Debug, Error)]
pub enum CheckError {
    /// Fewer than three positional arguments supplied.
    #[error("expected three arguments: <schema> <key> <expected-value>")]
    MissingArguments,

    /// The queried schema never appeared in the dump.
    #[error("schema `{0}` is not present in the dump")]
    SchemaNotFound(String),

    /// The queried key is not the one held by the schema's first entry.
    #[error("key `{key}` is not in the first entry recorded for schema `{schema}`")]
    KeyNotFound { schema: String, key: String },

    /// The dump file is missing or unreadable.
    #[error("cannot read settings dump: {0}")]
    Io(#[from] io::Error),
}
