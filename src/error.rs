//! Error types shared across the crate.

use std::io;
use std::path::PathBuf;

/// Validation failures raised while compiling a [`ClauseSet`](crate::predicate::ClauseSet).
///
/// Both variants carry the position of the offending clause: `grouping` is the
/// index into `ClauseSet::groups`, `clause` the index into that grouping's clauses.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PredicateError {
    /// The clause has no keys, or no values while its operator is not a nullity test.
    #[error("incomplete WHERE argument (grouping {grouping}, clause {clause})")]
    IncompletePredicate {
        /// Index of the grouping holding the clause.
        grouping: usize,
        /// Index of the clause within its grouping.
        clause: usize,
    },

    /// The clause binds more than one value but its operator is not `IN`.
    #[error("tried to equate more than one value (grouping {grouping}, clause {clause})")]
    TooManyValues {
        /// Index of the grouping holding the clause.
        grouping: usize,
        /// Index of the clause within its grouping.
        clause: usize,
    },
}

/// Errors produced by configuration loading, record persistence and transport.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A predicate failed validation.
    #[error(transparent)]
    Predicate(#[from] PredicateError),

    /// Filesystem failure.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON encoding or decoding failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The HTTP request could not be performed.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// `RecordSet::save` was given a path that does not end in `.json`.
    #[error("provided file path must end in .json: {}", .0.display())]
    InvalidSavePath(PathBuf),

    /// The configured base URL does not parse.
    #[error("invalid HostDB URL '{0}'")]
    InvalidUrl(String),

    /// The server answered with a non-200 status.
    #[error("HostDB responded {status}: {body}")]
    Http {
        /// Status code returned by the server.
        status: u16,
        /// Raw response body.
        body: String,
    },

    /// The server accepted the request but reported `ok: false`.
    #[error("HostDB rejected the request: {0}")]
    Rejected(String),

    /// Configuration was present but unusable.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Crate-wide result alias.
pub type Result<T, E = Error> = std::result::Result<T, E>;
