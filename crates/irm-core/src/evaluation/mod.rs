//! Weighted-precision evaluation metrics.
//!
//! Every metric in this module is a [`WeightedPrecision`]: a weighted sum of
//! (transformed) relevance grades over the top ranks of a result list.
//!
//! # Example
//!
//! ```
//! use irm_core::evaluation::{precision_at, rank_biased_precision};
//!
//! // Relevance grade of each result, in rank order
//! let relevance = [1, 1, 1, 0, 0, 1, 0];
//!
//! assert_eq!(precision_at(4).evaluate(&relevance), 0.75);
//! let rbp = rank_biased_precision(0.8).evaluate(&relevance);
//! assert!((rbp - 0.553536).abs() < 1e-6);
//! ```
//!
//! # Metrics Reference
//!
//! | Metric | Weights | Cutoff | Relevance |
//! |--------|---------|--------|-----------|
//! | P@k | `1/k`, k times | k | binary |
//! | RBP(p) | `(1-p) * p^i`, lazily generated | unbounded | binary |
//! | weighted precision | caller supplied | unbounded | graded |

pub mod metrics;
pub mod parse;
pub mod summary;
pub mod weighted;
pub mod weights;

pub use metrics::{precision_at, rank_biased_precision, weighted_precision};
pub use parse::{parse_metric, parse_metrics, Metric};
pub use summary::{mean, summarize, IterationSummary, MetricSummary};
pub use weighted::{RelevanceTransform, WeightedPrecision};
pub use weights::{Series, SeriesIter, WeightSequence};
