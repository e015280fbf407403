//! Reading TREC files.
//!
//! Every non-blank line is parsed on its own. The first malformed line aborts
//! the whole read; there is no best-effort mode.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use super::record::{TrecRel, TrecResult};
use crate::error::{ReadError, TrecFormatError};

/// Reads ranked results from a file.
pub fn read_trec_results(path: impl AsRef<Path>) -> Result<Vec<TrecResult>, ReadError> {
    read_records(path.as_ref(), TrecResult::parse)
}

/// Reads relevance judgments from a file.
pub fn read_trec_rels(path: impl AsRef<Path>) -> Result<Vec<TrecRel>, ReadError> {
    read_records(path.as_ref(), TrecRel::parse)
}

/// Parses ranked results from any buffered reader.
///
/// `path` is only used to label errors.
pub fn parse_trec_results(
    reader: impl BufRead,
    path: impl AsRef<Path>,
) -> Result<Vec<TrecResult>, ReadError> {
    parse_records(reader, path.as_ref(), TrecResult::parse)
}

/// Parses relevance judgments from any buffered reader.
pub fn parse_trec_rels(
    reader: impl BufRead,
    path: impl AsRef<Path>,
) -> Result<Vec<TrecRel>, ReadError> {
    parse_records(reader, path.as_ref(), TrecRel::parse)
}

fn read_records<R>(
    path: &Path,
    parse: impl Fn(&str) -> Result<R, TrecFormatError>,
) -> Result<Vec<R>, ReadError> {
    let file = File::open(path).map_err(|source| ReadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let records = parse_records(BufReader::new(file), path, parse)?;
    debug!("Read {} records from {}", records.len(), path.display());
    Ok(records)
}

fn parse_records<R>(
    reader: impl BufRead,
    path: &Path,
    parse: impl Fn(&str) -> Result<R, TrecFormatError>,
) -> Result<Vec<R>, ReadError> {
    let mut records = Vec::new();
    for (line_num, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| ReadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        if line.trim().is_empty() {
            continue;
        }
        let record = parse(&line).map_err(|source| ReadError::Format {
            path: path.to_path_buf(),
            line: line_num + 1,
            source,
        })?;
        records.push(record);
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};
    use tempfile::NamedTempFile;

    #[test]
    fn test_read_results_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "q1 Q0 d1 1 10.5 run").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "q1 Q0 d2 2 9.5 run").unwrap();

        let results = read_trec_results(file.path()).unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].document_id, "d1");
        assert_eq!(results[1].rank, 2);
    }

    #[test]
    fn test_read_rels_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "q1 0 d1 2").unwrap();
        writeln!(file, "q2 0 d7 0").unwrap();

        let rels = read_trec_rels(file.path()).unwrap();
        assert_eq!(rels, vec![TrecRel::new("q1", "0", "d1", 2), TrecRel::new("q2", "0", "d7", 0)]);
    }

    #[test]
    fn test_bad_line_aborts_read() {
        let input = "q1 0 d1 2\nq1 0 d2\nq1 0 d3 1\n";
        let err = parse_trec_rels(Cursor::new(input), "qrels.txt").unwrap_err();
        match err {
            ReadError::Format { line, source, .. } => {
                assert_eq!(line, 2);
                assert_eq!(source, TrecFormatError::TooFewFields);
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_line_numbers_count_blank_lines() {
        let input = "\n\nq1 Q0 d1 one 1.0 run\n";
        let err = parse_trec_results(Cursor::new(input), "run.txt").unwrap_err();
        assert!(err.to_string().starts_with("run.txt:3:"));
        assert!(matches!(
            err,
            ReadError::Format {
                source: TrecFormatError::CannotParse("rank"),
                ..
            }
        ));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = read_trec_results(dir.path().join("missing.txt"));
        assert!(matches!(result, Err(ReadError::Io { .. })));
    }
}
