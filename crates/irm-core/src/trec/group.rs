//! Grouping results and attaching relevance judgments.
//!
//! Results are grouped three levels deep, `run_id → iteration → query_id`,
//! into sorted maps so that iteration order is deterministic. Within a query
//! the original file order is kept. Judgments are looked up per query by
//! document id through a hash map.

use std::collections::{BTreeMap, HashMap};

use tracing::debug;

use super::record::{TrecRel, TrecResult};

/// Results of one query, in file order.
pub type QueryResults = Vec<TrecResult>;
/// `query_id → results`.
pub type IterationGroups = BTreeMap<String, QueryResults>;
/// `iteration → query_id → results`.
pub type RunGroups = BTreeMap<String, IterationGroups>;
/// `run_id → iteration → query_id → results`.
pub type Grouped = BTreeMap<String, RunGroups>;

/// `document_id → relevance` for a single query.
pub type QueryJudgments = HashMap<String, i32>;

/// Records that belong to a query.
pub trait QueryRecord {
    fn query_id(&self) -> &str;
}

impl QueryRecord for TrecResult {
    fn query_id(&self) -> &str {
        &self.query_id
    }
}

impl QueryRecord for TrecRel {
    fn query_id(&self) -> &str {
        &self.query_id
    }
}

/// Partitions records by query id, keeping their relative order.
pub fn group_by_query<R: QueryRecord>(records: Vec<R>) -> HashMap<String, Vec<R>> {
    let mut map: HashMap<String, Vec<R>> = HashMap::new();
    for record in records {
        map.entry(record.query_id().to_string())
            .or_default()
            .push(record);
    }
    map
}

/// Partitions results by run, iteration and query, keeping file order
/// within each query.
pub fn group(results: Vec<TrecResult>) -> Grouped {
    let mut map = Grouped::new();
    for result in results {
        map.entry(result.run_id.clone())
            .or_default()
            .entry(result.iteration.clone())
            .or_default()
            .entry(result.query_id.clone())
            .or_default()
            .push(result);
    }
    map
}

/// Builds `query_id → document_id → relevance`.
///
/// A document judged twice for the same query keeps the later grade.
pub fn index_judgments(rels: Vec<TrecRel>) -> HashMap<String, QueryJudgments> {
    group_by_query(rels)
        .into_iter()
        .map(|(query_id, rels)| {
            let judgments = rels
                .into_iter()
                .map(|rel| (rel.document_id, rel.relevance))
                .collect();
            (query_id, judgments)
        })
        .collect()
}

/// Sets the relevance of each result from its query's judgments.
///
/// Unjudged documents, or every document of a query without judgments, get
/// relevance `0`.
pub fn annotate_query(results: &mut [TrecResult], judgments: Option<&QueryJudgments>) {
    for result in results {
        result.relevance = judgments
            .and_then(|j| j.get(&result.document_id))
            .copied()
            .unwrap_or(0);
    }
}

/// Groups results and annotates every one with its judged relevance.
///
/// Judgments are matched on query id and document id; their iteration field
/// is not part of the key.
pub fn annotate(results: Vec<TrecResult>, rels: Vec<TrecRel>) -> Grouped {
    let judgments = index_judgments(rels);
    debug!("Indexed judgments for {} queries", judgments.len());

    let mut grouped = group(results);
    for run in grouped.values_mut() {
        for iteration in run.values_mut() {
            for (query_id, query_results) in iteration.iter_mut() {
                annotate_query(query_results, judgments.get(query_id));
            }
        }
    }
    debug!("Grouped results into {} runs", grouped.len());
    grouped
}

/// Relevance grades of a query's results, in rank order.
pub fn relevance_grades(results: &[TrecResult]) -> Vec<i32> {
    results.iter().map(|r| r.relevance).collect()
}
