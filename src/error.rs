use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error on {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A `v`, `vn` or `f` record that could not be parsed.
    #[error("malformed record on line {line} ({content:?}): {source}")]
    MalformedRecord {
        /// 1-based line number in the input.
        line: usize,
        content: String,
        #[source]
        source: RecordError,
    },

    /// A vertex never paired with a normal by any face record.
    #[error("vertex {vertex} has no normal associated with it by any face")]
    UnresolvedNormal { vertex: usize },

    #[error("vertex {vertex} refers to normal {normal}, but only {count} normals were declared")]
    NormalIndexOutOfRange {
        vertex: usize,
        normal: usize,
        count: usize,
    },
}

/// Why a single record was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("expected at least {expected} fields, found {found}")]
    TooFewFields { expected: usize, found: usize },

    #[error("{0:?} is not a number")]
    InvalidNumber(String),

    #[error("{0:?} is not a vertex/texture/normal group")]
    InvalidFaceGroup(String),

    #[error("index {0} is not a positive one-based index")]
    NonPositiveIndex(i64),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}
