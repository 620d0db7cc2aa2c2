//! Error type shared by the loading side of the crate.
//!
//! Only reading and decoding input can fail. Content problems inside a
//! document (malformed chord markers, odd video links, unknown node types)
//! are logged and skipped instead, so rendering itself is infallible.

use std::path::PathBuf;

/// Failures while discovering, reading or decoding song documents.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Filesystem access failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// A directory could not be walked.
    #[error("directory walk failed: {0}")]
    Walk(#[from] walkdir::Error),
    /// The configuration file does not match the expected shape.
    #[error("invalid config: {0}")]
    Config(String),
    /// A JSON entry could not be decoded.
    #[error("invalid JSON entry: {0}")]
    Json(#[from] serde_json::Error),
    /// The YAML front matter block of a Markdown file could not be decoded.
    #[error("invalid front matter in {path}: {source}")]
    FrontMatter {
        /// File whose front matter failed to parse.
        path: PathBuf,
        /// Underlying YAML error.
        source: serde_yaml::Error,
    },
    /// The tree-sitter grammar was rejected by the parser.
    #[error("tree-sitter language error: {0}")]
    Language(#[from] tree_sitter::LanguageError),
    /// A tree-sitter query failed to compile.
    #[error("tree-sitter query error: {0}")]
    Query(#[from] tree_sitter::QueryError),
    /// Tree-sitter produced no tree for the given source.
    #[error("failed to parse {0}")]
    Parse(PathBuf),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
