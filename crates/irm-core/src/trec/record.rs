//! TREC result and relevance-judgment records.
//!
//! # Data Format
//!
//! Both record kinds are single lines of whitespace-separated fields with no
//! header and no quoting:
//!
//! ```text
//! query_id iteration document_id rank score run_id     # results
//! query_id iteration document_id relevance             # qrels
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::TrecFormatError;

/// One ranked result line.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TrecResult {
    pub query_id: String,
    pub iteration: String,
    pub document_id: String,
    pub rank: i64,
    pub score: f64,
    pub run_id: String,
    /// Filled in by [`annotate`](super::annotate); `0` until then.
    pub relevance: i32,
}

/// One relevance judgment line.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TrecRel {
    pub query_id: String,
    pub iteration: String,
    pub document_id: String,
    pub relevance: i32,
}

const RESULT_FIELDS: usize = 6;
const REL_FIELDS: usize = 4;

fn parse_int<T: FromStr>(field: &str, name: &'static str) -> Result<T, TrecFormatError> {
    field.parse().map_err(|_| TrecFormatError::CannotParse(name))
}

impl TrecResult {
    /// Creates an unannotated result.
    pub fn new(
        query_id: impl Into<String>,
        iteration: impl Into<String>,
        document_id: impl Into<String>,
        rank: i64,
        score: f64,
        run_id: impl Into<String>,
    ) -> Self {
        Self {
            query_id: query_id.into(),
            iteration: iteration.into(),
            document_id: document_id.into(),
            rank,
            score,
            run_id: run_id.into(),
            relevance: 0,
        }
    }

    /// Parses a result line.
    ///
    /// Fields are consumed left to right, so a malformed field is reported
    /// before a missing one.
    pub fn parse(line: &str) -> Result<Self, TrecFormatError> {
        let mut rec = TrecResult::default();
        let mut fields_read = 0;
        for field in line.split_whitespace() {
            match fields_read {
                0 => rec.query_id = field.to_string(),
                1 => rec.iteration = field.to_string(),
                2 => rec.document_id = field.to_string(),
                3 => rec.rank = parse_int(field, "rank")?,
                4 => {
                    rec.score = field
                        .parse()
                        .map_err(|_| TrecFormatError::CannotParse("score"))?
                }
                5 => rec.run_id = field.to_string(),
                _ => return Err(TrecFormatError::TooManyFields),
            }
            fields_read += 1;
        }
        if fields_read < RESULT_FIELDS {
            return Err(TrecFormatError::TooFewFields);
        }
        Ok(rec)
    }
}

impl TrecRel {
    pub fn new(
        query_id: impl Into<String>,
        iteration: impl Into<String>,
        document_id: impl Into<String>,
        relevance: i32,
    ) -> Self {
        Self {
            query_id: query_id.into(),
            iteration: iteration.into(),
            document_id: document_id.into(),
            relevance,
        }
    }

    /// Parses a relevance judgment line.
    pub fn parse(line: &str) -> Result<Self, TrecFormatError> {
        let mut rec = TrecRel::default();
        let mut fields_read = 0;
        for field in line.split_whitespace() {
            match fields_read {
                0 => rec.query_id = field.to_string(),
                1 => rec.iteration = field.to_string(),
                2 => rec.document_id = field.to_string(),
                3 => rec.relevance = parse_int(field, "relevance")?,
                _ => return Err(TrecFormatError::TooManyFields),
            }
            fields_read += 1;
        }
        if fields_read < REL_FIELDS {
            return Err(TrecFormatError::TooFewFields);
        }
        Ok(rec)
    }

    /// Returns true if the judged grade is positive.
    pub fn is_relevant(&self) -> bool {
        self.relevance > 0
    }
}

impl FromStr for TrecResult {
    type Err = TrecFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl FromStr for TrecRel {
    type Err = TrecFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for TrecResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {} {}",
            self.query_id, self.iteration, self.document_id, self.rank, self.score, self.run_id
        )
    }
}

impl fmt::Display for TrecRel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.query_id, self.iteration, self.document_id, self.relevance
        )
    }
}
