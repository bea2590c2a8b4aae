//! Generation error types.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for generation operations.
pub type Result<T> = std::result::Result<T, GenerateError>;

/// Errors that can occur while generating files.
///
/// Every variant is fatal to the current invocation. Variants raised after the
/// first file of a full-stack run has been written leave earlier files in place.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// No domain was supplied.
    #[error("a domain is required (use --domain <name>)")]
    MissingDomain,

    /// No entity name was supplied.
    #[error("an entity name is required (use --name <entity>)")]
    MissingEntityName,

    /// The requested component type is not in the alias table.
    #[error("unknown component type '{0}' (expected controller|c, service|s, repository|repo|r, validator|v, dto|d or full|f)")]
    UnknownType(String),

    /// The named template resource is missing or unreadable.
    #[error("failed to read template resource '{name}'")]
    ResourceRead {
        /// Resource name, e.g. `dto.go.hbs`
        name: String,
        /// Underlying I/O failure
        #[source]
        source: io::Error,
    },

    /// The template resource contains malformed placeholder syntax.
    #[error("failed to parse template resource '{name}': {reason}")]
    TemplateParse {
        /// Resource name
        name: String,
        /// Parser diagnostic with its line and column, on one line
        reason: String,
    },

    /// A parent directory of the output path could not be created.
    #[error("failed to create directory {}", .path.display())]
    DirectoryCreate {
        /// Directory that could not be created
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: io::Error,
    },

    /// The output file could not be created or truncated.
    #[error("failed to create file {}", .path.display())]
    FileCreate {
        /// Output file path
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: io::Error,
    },

    /// Rendered output could not be flushed to the output file.
    #[error("failed to write file {}", .path.display())]
    FileWrite {
        /// Output file path
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: io::Error,
    },

    /// Template execution failed, e.g. a placeholder names an absent field.
    #[error("failed to render template resource '{name}' into {}: {reason}", .path.display())]
    TemplateExec {
        /// Resource name
        name: String,
        /// Output file path (may be left truncated)
        path: PathBuf,
        /// Renderer diagnostic
        reason: String,
    },
}
