//! Per-run, per-iteration metric averages.

use std::collections::BTreeMap;

use tracing::info;

use super::parse::Metric;
use crate::trec::{relevance_grades, Grouped, IterationGroups};

/// Scores of one metric over the queries of a run iteration.
#[derive(Debug, Clone)]
pub struct MetricSummary {
    /// Metric name as requested
    pub metric: String,
    /// Arithmetic mean over `per_query`
    pub mean: f64,
    /// Score of each query, keyed by query id
    pub per_query: BTreeMap<String, f64>,
}

/// All metric summaries for one `(run_id, iteration)` pair.
#[derive(Debug, Clone)]
pub struct IterationSummary {
    pub run_id: String,
    pub iteration: String,
    pub num_queries: usize,
    /// In the order the metrics were supplied
    pub metrics: Vec<MetricSummary>,
}

/// Scores every query of every run iteration with every metric.
///
/// Output follows the grouping order (run, then iteration); metrics keep the
/// order they were given in.
pub fn summarize(grouped: &Grouped, metrics: &[Metric]) -> Vec<IterationSummary> {
    let mut summaries = Vec::new();
    for (run_id, run) in grouped {
        for (iteration, queries) in run {
            summaries.push(summarize_iteration(run_id, iteration, queries, metrics));
        }
    }
    info!(
        "Evaluated {} metrics over {} run iterations",
        metrics.len(),
        summaries.len()
    );
    summaries
}

fn summarize_iteration(
    run_id: &str,
    iteration: &str,
    queries: &IterationGroups,
    metrics: &[Metric],
) -> IterationSummary {
    let grades: Vec<(&String, Vec<i32>)> = queries
        .iter()
        .map(|(query_id, results)| (query_id, relevance_grades(results)))
        .collect();

    let metrics = metrics
        .iter()
        .map(|metric| {
            let per_query: BTreeMap<String, f64> = grades
                .iter()
                .map(|(query_id, rels)| ((*query_id).clone(), metric.evaluate(rels)))
                .collect();
            MetricSummary {
                metric: metric.name().to_string(),
                mean: mean(per_query.values().copied()),
                per_query,
            }
        })
        .collect();

    IterationSummary {
        run_id: run_id.to_string(),
        iteration: iteration.to_string(),
        num_queries: queries.len(),
        metrics,
    }
}

/// Arithmetic mean, `0.0` for no values.
pub fn mean(values: impl IntoIterator<Item = f64>) -> f64 {
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}
