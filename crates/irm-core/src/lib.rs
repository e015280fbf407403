//! # irm-core
//!
//! Information retrieval evaluation metrics over TREC-formatted results and
//! relevance judgments (qrels).
//!
//! ## Modules
//!
//! - [`evaluation`] - Weighted-precision metrics (P@k, RBP), metric names, averages
//! - [`trec`] - TREC record parsing, file reading, grouping and annotation
//! - [`config`] - Default metric set and naming constants
//! - [`error`] - Error types for parsing and reading

pub mod config;
pub mod error;
pub mod evaluation;
pub mod trec;

pub use error::{MetricSpecError, ReadError, TrecFormatError};
