//! TREC results and qrels.
//!
//! - [`record`] - line formats for ranked results and relevance judgments
//! - [`read`] - whole-file readers
//! - [`group`] - run/iteration/query grouping and relevance annotation

pub mod group;
pub mod read;
pub mod record;

pub use group::{
    annotate, annotate_query, group, group_by_query, index_judgments, relevance_grades, Grouped,
    IterationGroups, QueryJudgments, QueryRecord, QueryResults, RunGroups,
};
pub use read::{parse_trec_rels, parse_trec_results, read_trec_rels, read_trec_results};
pub use record::{TrecRel, TrecResult};
