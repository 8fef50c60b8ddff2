//! Error type for LHCO conversion.

use std::io;
use std::path::PathBuf;

/// Errors produced while converting an LHCO file.
///
/// An empty result is not an error; writers report it as
/// [`WriteOutcome::NoRecords`](crate::writer::WriteOutcome::NoRecords).
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    /// The input path does not exist.
    #[error("Input file {} not found.", .0.display())]
    InputNotFound(PathBuf),

    /// The requested output format needs a capability this build lacks.
    #[error("{0} support is not available")]
    CapabilityUnavailable(&'static str),

    /// Reading or writing a file failed.
    #[error("I/O error on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Serializing CSV rows failed.
    #[error("CSV error on '{}': {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// The table-document backend failed to build or pack the document.
    #[error("document error: {0}")]
    Document(String),
}

impl ConvertError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn csv(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        Self::Csv {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;
