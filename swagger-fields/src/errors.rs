//! Error types for field generation.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while extracting a definition from a document.
///
/// The emitter itself never fails on schema content; every variant here
/// originates in the extraction step or in I/O around it.
#[derive(Debug, Error)]
pub enum FieldGenError {
    /// Failed to read the document from disk
    #[error("Failed to read document '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document is not valid JSON or YAML
    #[error("Failed to parse document: {0}")]
    Parse(String),

    /// The named definition is not present in the document.
    ///
    /// Both `definitions` (Swagger 2.0) and `components.schemas`
    /// (OpenAPI 3.x) are searched before this is reported.
    #[error("Definition '{0}' not found in document")]
    DefinitionNotFound(String),

    /// The external query program could not be located or started
    #[error("Query tool '{program}' is unavailable: {reason}")]
    QueryToolUnavailable { program: String, reason: String },

    /// The external query program ran but exited unsuccessfully
    #[error("Query tool exited with status {status}: {stderr}")]
    QueryFailed { status: i32, stderr: String },
}

impl From<serde_json::Error> for FieldGenError {
    fn from(err: serde_json::Error) -> Self {
        FieldGenError::Parse(err.to_string())
    }
}

impl From<serde_yaml::Error> for FieldGenError {
    fn from(err: serde_yaml::Error) -> Self {
        FieldGenError::Parse(err.to_string())
    }
}

/// Convenience Result type for field generation.
pub type Result<T> = std::result::Result<T, FieldGenError>;
