//! irm-eval - evaluate search results with IR metrics.
//!
//! # Usage
//!
//! ```bash
//! # Default metric set (P@10 ... P@1000, RBP:95)
//! irm-eval qrels.txt run.txt
//!
//! # Pick metrics
//! irm-eval qrels.txt run.txt -m P@5 -m RBP:80
//! irm-eval qrels.txt run.txt --metric P@5,P@10
//!
//! # Per-query breakdown, JSON output
//! irm-eval qrels.txt run.txt --per-query
//! irm-eval qrels.txt run.txt --json
//! ```
//!
//! Output lines are `run_id \t iteration \t metric \t average`.

mod output;

use anyhow::{Context, Result};
use clap::Parser;
use irm_core::config::{DEFAULT_DECIMALS, DEFAULT_METRICS};
use irm_core::evaluation::{parse_metrics, summarize};
use irm_core::trec::{annotate, read_trec_rels, read_trec_results};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Environment variable overriding the log filter.
const LOG_ENV: &str = "IRM_LOG";

/// Evaluate search results with IR metrics.
#[derive(Parser, Debug)]
#[command(name = "irm-eval", version, about)]
struct Args {
    /// Query relevance data in TREC format
    #[arg(value_parser = existing_file)]
    qrels: PathBuf,

    /// Query results in TREC format
    #[arg(value_parser = existing_file)]
    results: PathBuf,

    /// Metrics to compute, e.g. P@10 or RBP:95 (repeatable, comma-separated)
    #[arg(
        short,
        long = "metric",
        value_delimiter = ',',
        default_values_t = DEFAULT_METRICS.iter().map(|m| m.to_string()).collect::<Vec<_>>()
    )]
    metrics: Vec<String>,

    /// Output results as JSON
    #[arg(long)]
    json: bool,

    /// Also report every query's score
    #[arg(long)]
    per_query: bool,

    /// Digits after the decimal point
    #[arg(long, default_value_t = DEFAULT_DECIMALS)]
    decimals: usize,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn existing_file(path: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(path);
    if path.is_file() {
        Ok(path)
    } else {
        Err(format!("File does not exist: {}", path.display()))
    }
}

fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("info")
        } else {
            EnvFilter::new("warn")
        }
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    // Bad metric names abort before any file is read
    let metrics = parse_metrics(args.metrics.as_slice()).context("Invalid metric")?;

    let qrels = read_trec_rels(&args.qrels)
        .with_context(|| format!("Failed to load qrels from {}", args.qrels.display()))?;
    let results = read_trec_results(&args.results)
        .with_context(|| format!("Failed to load results from {}", args.results.display()))?;
    info!(
        "Loaded {} judgments ({} relevant) and {} results",
        qrels.len(),
        qrels.iter().filter(|rel| rel.is_relevant()).count(),
        results.len()
    );

    let annotated = annotate(results, qrels);
    let summaries = summarize(&annotated, &metrics);

    let rendered = if args.json {
        output::format_json(&summaries, args.per_query)?
    } else {
        output::format_tsv(&summaries, args.per_query, args.decimals)
    };
    print!("{}", rendered);

    Ok(())
}
