//! Metric names.
//!
//! Metrics are named on the command line with a small language:
//!
//! | Name | Metric |
//! |------|--------|
//! | `P@<k>` | Precision at cutoff `k` (non-negative integer) |
//! | `RBP:<p>` | Rank-biased precision with persistence `p/100`, `p` in `[0, 100]` |

use std::fmt;
use std::str::FromStr;

use super::metrics::{precision_at, rank_biased_precision};
use super::weighted::WeightedPrecision;
use crate::config::{PRECISION_PREFIX, RBP_PERCENT_MAX, RBP_PREFIX};
use crate::error::MetricSpecError;

/// A metric together with the name it was requested by.
#[derive(Debug, Clone)]
pub struct Metric {
    name: String,
    scorer: WeightedPrecision,
}

impl Metric {
    /// Pairs a display name with a scorer.
    pub fn new(name: impl Into<String>, scorer: WeightedPrecision) -> Self {
        Self {
            name: name.into(),
            scorer,
        }
    }

    /// Name as given by the user, e.g. `P@10`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The weighted-precision scorer behind this name.
    pub fn scorer(&self) -> &WeightedPrecision {
        &self.scorer
    }

    /// Scores one ranking of relevance grades.
    pub fn evaluate(&self, relevance: &[i32]) -> f64 {
        self.scorer.evaluate(relevance)
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl FromStr for Metric {
    type Err = MetricSpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_metric(s)
    }
}

/// Parses a metric name such as `P@10` or `RBP:95`.
pub fn parse_metric(name: &str) -> Result<Metric, MetricSpecError> {
    let scorer = if let Some(k) = name.strip_prefix(PRECISION_PREFIX) {
        parse_precision_at(k)?
    } else if let Some(p) = name.strip_prefix(RBP_PREFIX) {
        parse_rbp(p)?
    } else {
        return Err(MetricSpecError::Unrecognized(name.to_string()));
    };
    Ok(Metric::new(name, scorer))
}

/// Parses every name, failing on the first invalid one.
pub fn parse_metrics<S: AsRef<str>>(names: &[S]) -> Result<Vec<Metric>, MetricSpecError> {
    names.iter().map(|name| parse_metric(name.as_ref())).collect()
}

fn parse_precision_at(k: &str) -> Result<WeightedPrecision, MetricSpecError> {
    let invalid = || MetricSpecError::InvalidPrecisionCutoff(k.to_string());
    // Digits only: `str::parse` alone would take a leading '+'
    if k.starts_with('+') {
        return Err(invalid());
    }
    let k: usize = k.parse().map_err(|_| invalid())?;
    Ok(precision_at(k))
}

fn parse_rbp(p: &str) -> Result<WeightedPrecision, MetricSpecError> {
    let invalid = || MetricSpecError::InvalidPersistence(p.to_string());
    if p.starts_with('+') {
        return Err(invalid());
    }
    let percent: i64 = p.parse().map_err(|_| invalid())?;
    if !(0..=i64::from(RBP_PERCENT_MAX)).contains(&percent) {
        return Err(MetricSpecError::PersistenceOutOfRange(p.to_string()));
    }
    Ok(rank_biased_precision(percent as f64 / 100.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_METRICS;

    #[test]
    fn test_parse_precision() {
        let metric = parse_metric("P@10").unwrap();
        assert_eq!(metric.name(), "P@10");
        assert_eq!(metric.scorer().cutoff(), Some(10));
        assert_eq!(metric.evaluate(&[1; 5]), 0.5);
    }

    #[test]
    fn test_parse_rbp() {
        let metric: Metric = "RBP:80".parse().unwrap();
        assert_eq!(metric.to_string(), "RBP:80");
        assert_eq!(metric.scorer().cutoff(), None);
        let score = metric.evaluate(&[1, 1, 1, 0, 0, 1, 0]);
        assert!((score - 0.553536).abs() < 1e-6);
    }

    #[test]
    fn test_parse_rbp_bounds() {
        assert!(parse_metric("RBP:0").is_ok());
        assert!(parse_metric("RBP:100").is_ok());
        assert_eq!(
            parse_metric("RBP:101").unwrap_err(),
            MetricSpecError::PersistenceOutOfRange("101".to_string())
        );
        assert_eq!(
            parse_metric("RBP:-1").unwrap_err(),
            MetricSpecError::PersistenceOutOfRange("-1".to_string())
        );
    }

    #[test]
    fn test_parse_invalid_parameters() {
        assert_eq!(
            parse_metric("P@ten").unwrap_err(),
            MetricSpecError::InvalidPrecisionCutoff("ten".to_string())
        );
        assert_eq!(
            parse_metric("P@-3").unwrap_err(),
            MetricSpecError::InvalidPrecisionCutoff("-3".to_string())
        );
        assert_eq!(
            parse_metric("P@").unwrap_err(),
            MetricSpecError::InvalidPrecisionCutoff(String::new())
        );
        assert_eq!(
            parse_metric("RBP:0.95").unwrap_err(),
            MetricSpecError::InvalidPersistence("0.95".to_string())
        );
    }

    #[test]
    fn test_parse_rejects_plus_sign() {
        assert_eq!(
            parse_metric("P@+5").unwrap_err(),
            MetricSpecError::InvalidPrecisionCutoff("+5".to_string())
        );
        assert_eq!(
            parse_metric("RBP:+50").unwrap_err(),
            MetricSpecError::InvalidPersistence("+50".to_string())
        );
        assert_eq!(
            parse_metric("RBP:+100").unwrap_err(),
            MetricSpecError::InvalidPersistence("+100".to_string())
        );
    }

    #[test]
    fn test_parse_huge_precision_cutoff() {
        let metric = parse_metric("P@18446744073709551615").unwrap();
        assert_eq!(metric.scorer().cutoff(), Some(usize::MAX));
        let score = metric.evaluate(&[1, 1, 1, 0, 0, 1, 0]);
        assert!((0.0..1e-15).contains(&score));
        // Cutoffs past usize::MAX are still a parse error, not a panic
        assert_eq!(
            parse_metric("P@18446744073709551616").unwrap_err(),
            MetricSpecError::InvalidPrecisionCutoff("18446744073709551616".to_string())
        );
    }

    #[test]
    fn test_parse_unrecognized() {
        for name in ["NDCG@10", "p@10", "RBP95", ""] {
            assert_eq!(
                parse_metric(name).unwrap_err(),
                MetricSpecError::Unrecognized(name.to_string())
            );
        }
    }

    #[test]
    fn test_parse_defaults() {
        let metrics = parse_metrics(DEFAULT_METRICS).unwrap();
        let names: Vec<&str> = metrics.iter().map(Metric::name).collect();
        assert_eq!(names, DEFAULT_METRICS);
    }

    #[test]
    fn test_parse_metrics_stops_at_first_error() {
        let err = parse_metrics(&["P@5", "MAP", "RBP:200"]).unwrap_err();
        assert_eq!(err, MetricSpecError::Unrecognized("MAP".to_string()));
    }
}
