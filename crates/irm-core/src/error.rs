//! Error types for irm-core.
//!
//! This module defines the errors raised while reading TREC files and while
//! turning metric names into metrics. All of them are fatal for the caller:
//! nothing in the core recovers from its own errors.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while parsing a single TREC line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrecFormatError {
    /// A typed field (rank, score, relevance) did not parse
    #[error("Error reading TREC format: cannot parse {0}")]
    CannotParse(&'static str),
    /// The line has more fields than the record kind allows
    #[error("Error reading TREC format: too many fields")]
    TooManyFields,
    /// The line ended before all fields were read
    #[error("Error reading TREC format: too few fields")]
    TooFewFields,
}

/// Errors that can occur while reading a TREC file.
#[derive(Debug, Error)]
pub enum ReadError {
    /// Failed to open or read the file
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// A line of the file is malformed
    #[error("{}:{line}: {source}", path.display())]
    Format {
        path: PathBuf,
        /// 1-based line number
        line: usize,
        #[source]
        source: TrecFormatError,
    },
}

/// Errors that can occur when parsing a metric name such as `P@10` or `RBP:95`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MetricSpecError {
    /// The cutoff after `P@` is not a non-negative integer
    #[error("Failed to parse P@{0}")]
    InvalidPrecisionCutoff(String),
    /// The persistence after `RBP:` is not an integer
    #[error("Failed to parse RBP:{0}")]
    InvalidPersistence(String),
    /// The persistence is an integer outside of the percentage range
    #[error("Failed to parse RBP:{0} (p must be in [0, 100]%)")]
    PersistenceOutOfRange(String),
    /// The name matches no known metric family
    #[error("Unrecognized metric: {0}")]
    Unrecognized(String),
}
