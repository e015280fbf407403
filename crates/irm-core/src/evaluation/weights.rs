//! Rank weight sequences.
//!
//! A weighted-precision metric multiplies each rank's relevance by a weight.
//! Some metrics have a fixed number of weights (P@k), others conceptually
//! weigh every rank (RBP). The latter are never materialized: a [`Series`]
//! computes the weight at rank `n` on demand from a closed-form function.

use std::fmt;
use std::sync::Arc;

/// Lazily evaluated, conceptually infinite sequence of weights.
///
/// The generator is stateless in the index, so the same rank always yields the
/// same weight and the series can be restarted any number of times.
#[derive(Clone)]
pub struct Series {
    f: Arc<dyn Fn(usize) -> f64 + Send + Sync>,
}

impl Series {
    /// Creates a series from a function mapping a 0-based rank to its weight.
    pub fn new(f: impl Fn(usize) -> f64 + Send + Sync + 'static) -> Self {
        Self { f: Arc::new(f) }
    }

    /// Weight at rank `n` (0-based).
    #[inline]
    pub fn at(&self, n: usize) -> f64 {
        (self.f)(n)
    }

    /// Returns an iterator starting at rank 0 that never ends.
    pub fn iter(&self) -> SeriesIter<'_> {
        SeriesIter {
            series: self,
            n: 0,
        }
    }
}

impl fmt::Debug for Series {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Series").finish_non_exhaustive()
    }
}

/// Iterator over a [`Series`], produced by [`Series::iter`].
#[derive(Debug, Clone)]
pub struct SeriesIter<'a> {
    series: &'a Series,
    n: usize,
}

impl Iterator for SeriesIter<'_> {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        let weight = self.series.at(self.n);
        self.n += 1;
        Some(weight)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

/// Weights assigned to rank positions.
#[derive(Debug, Clone)]
pub enum WeightSequence {
    /// A fixed list of weights; ranks past the end are never weighted.
    Finite(Vec<f64>),
    /// A closed-form generator without an end.
    Infinite(Series),
}

impl WeightSequence {
    /// Weight at rank `n` (0-based).
    ///
    /// Returns `0.0` past the end of a finite sequence.
    pub fn weight(&self, n: usize) -> f64 {
        match self {
            WeightSequence::Finite(weights) => weights.get(n).copied().unwrap_or(0.0),
            WeightSequence::Infinite(series) => series.at(n),
        }
    }

    /// Number of weights, or `None` for an unbounded sequence.
    pub fn len(&self) -> Option<usize> {
        match self {
            WeightSequence::Finite(weights) => Some(weights.len()),
            WeightSequence::Infinite(_) => None,
        }
    }

    /// Returns true if the sequence is finite and holds no weights.
    pub fn is_empty(&self) -> bool {
        self.len() == Some(0)
    }

    /// Iterates the weights from rank 0. Unbounded for infinite sequences.
    pub fn iter(&self) -> Box<dyn Iterator<Item = f64> + '_> {
        match self {
            WeightSequence::Finite(weights) => Box::new(weights.iter().copied()),
            WeightSequence::Infinite(series) => Box::new(series.iter()),
        }
    }
}

impl From<Vec<f64>> for WeightSequence {
    fn from(weights: Vec<f64>) -> Self {
        WeightSequence::Finite(weights)
    }
}

impl From<Series> for WeightSequence {
    fn from(series: Series) -> Self {
        WeightSequence::Infinite(series)
    }
}
