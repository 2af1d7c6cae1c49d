//! Error types shared by the compiler, the description store and the gateway.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SchemaError {
    /// A table or column description violates an invariant.
    #[error("malformed table description: {0}")]
    MalformedSpec(String),

    /// No stored description exists for the table.
    #[error("no description found for table '{0}'")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The database rejected a statement.
    #[error("failed to execute `{statement}`: {source}")]
    Execution {
        statement: String,
        #[source]
        source: sqlx::Error,
    },

    #[error("settings error: {0}")]
    Settings(#[from] config::ConfigError),
}

pub type Result<T> = std::result::Result<T, SchemaError>;
