//! Output formatting for evaluation summaries.
//!
//! Tab-separated lines for terminals and scripts, or JSON for analysis.

use irm_core::evaluation::IterationSummary;
use serde::Serialize;

/// JSON output structure
#[derive(Serialize)]
pub struct JsonOutput<'a> {
    pub runs: Vec<JsonIteration<'a>>,
}

/// One run iteration in JSON format
#[derive(Serialize)]
pub struct JsonIteration<'a> {
    pub run_id: &'a str,
    pub iteration: &'a str,
    pub num_queries: usize,
    pub metrics: Vec<JsonMetric<'a>>,
}

#[derive(Serialize)]
pub struct JsonMetric<'a> {
    pub metric: &'a str,
    pub mean: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_query: Option<&'a std::collections::BTreeMap<String, f64>>,
}

/// Formats summaries as `run \t iteration \t metric \t mean` lines.
///
/// With `per_query`, each average is preceded by one
/// `run \t iteration \t metric \t query \t score` line per query.
pub fn format_tsv(summaries: &[IterationSummary], per_query: bool, decimals: usize) -> String {
    let mut output = String::new();
    for summary in summaries {
        for metric in &summary.metrics {
            if per_query {
                for (query_id, score) in &metric.per_query {
                    output.push_str(&format!(
                        "{}\t{}\t{}\t{}\t{:.*}\n",
                        summary.run_id, summary.iteration, metric.metric, query_id, decimals, score
                    ));
                }
            }
            output.push_str(&format!(
                "{}\t{}\t{}\t{:.*}\n",
                summary.run_id, summary.iteration, metric.metric, decimals, metric.mean
            ));
        }
    }
    output
}

/// Formats summaries as pretty-printed JSON.
pub fn format_json(
    summaries: &[IterationSummary],
    per_query: bool,
) -> Result<String, serde_json::Error> {
    let output = JsonOutput {
        runs: summaries
            .iter()
            .map(|summary| JsonIteration {
                run_id: &summary.run_id,
                iteration: &summary.iteration,
                num_queries: summary.num_queries,
                metrics: summary
                    .metrics
                    .iter()
                    .map(|m| JsonMetric {
                        metric: &m.metric,
                        mean: m.mean,
                        per_query: per_query.then_some(&m.per_query),
                    })
                    .collect(),
            })
            .collect(),
    };
    let mut json = serde_json::to_string_pretty(&output)?;
    json.push('\n');
    Ok(json)
}
