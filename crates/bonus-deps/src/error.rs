//! Error types for bonus-deps operations.
//!
//! Every error halts the run. There is no per-file recovery: a single
//! malformed `.problem` file aborts processing before anything is written.
//!
//! Errors fall into three groups:
//!
//! - **Input problems**: [`Error::Parse`], [`Error::MissingField`] and
//!   [`Error::InvalidField`] point at a specific problem file the user can fix.
//! - **Rendering problems**: [`Error::Render`] means Graphviz or the viewer
//!   is missing or failed.
//! - **Environment problems**: [`Error::Io`] and [`Error::Config`].

use std::path::PathBuf;
use thiserror::Error;

/// Result type for bonus-deps operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for bonus-deps operations.
#[derive(Debug, Error)]
pub enum Error {
    /// A problem file is not valid JSON.
    #[error("failed to parse {}", path.display())]
    Parse {
        /// The offending problem file.
        path: PathBuf,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// A required field is absent from a problem record or bonus entry.
    #[error("{}: missing field `{field}`{}", path.display(), entry_suffix(*entry))]
    MissingField {
        /// The offending problem file.
        path: PathBuf,
        /// Name of the missing field.
        field: &'static str,
        /// Index into `bonuses` when the field belongs to a bonus entry.
        entry: Option<usize>,
    },

    /// A field is present but does not have the expected JSON shape.
    #[error("{}: field `{field}`{} must be {expected}", path.display(), entry_suffix(*entry))]
    InvalidField {
        /// The offending problem file.
        path: PathBuf,
        /// Name of the field, or `<root>` for the record itself.
        field: &'static str,
        /// Index into `bonuses` when the field belongs to a bonus entry.
        entry: Option<usize>,
        /// Human-readable description of the expected shape.
        expected: &'static str,
    },

    /// Graphviz or the image viewer could not produce or display output.
    #[error("render error: {0}")]
    Render(String),

    /// File system operation failed.
    #[error("I/O error on {}", path.display())]
    Io {
        /// The path being read or written.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Invalid configuration file.
    #[error("configuration error: {0}")]
    Config(String),
}

fn entry_suffix(entry: Option<usize>) -> String {
    entry.map_or_else(String::new, |i| format!(" in bonus entry {i}"))
}

impl Error {
    /// Wrap an I/O error with the path it occurred on.
    #[must_use]
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Returns `true` if the error points at a problem file the user can fix.
    #[must_use]
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::Parse { .. } | Self::MissingField { .. } | Self::InvalidField { .. }
        )
    }
}
