use serde::{Serialize, Deserialize};

use crate::sample::RecordSet;


/// Per-row signal and background scores of a store,
/// in the active row order of that store.
/// A `NaN` entry means the scorer has no evidence for that row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Score {
    /// Signal score per row.
    pub signal: Vec<f64>,
    /// Background score per row.
    pub background: Vec<f64>,
}


impl Score {
    /// A score of `n_sample` rows, all `NaN`.
    pub fn missing(n_sample: usize) -> Self {
        Self {
            signal: vec![f64::NAN; n_sample],
            background: vec![f64::NAN; n_sample],
        }
    }


    /// Number of rows.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.signal.len()
    }


    /// Returns `true` if there is no row.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.signal.is_empty()
    }


    /// `signal / background` per row.
    pub fn ratios(&self) -> Vec<f64> {
        self.signal.iter()
            .zip(&self.background)
            .map(|(s, b)| s / b)
            .collect()
    }
}


/// A trait that defines the behavior of a scorer.
/// The returned [`Score`] has one entry per active row of `data`,
/// in the same order.
///
/// `parallel` is a hint; scorers with no parallel mode ignore it.
pub trait Scorer {
    /// Scores every active row of `data`.
    fn score(&self, data: &RecordSet, parallel: bool) -> Score;
}


impl<S: Scorer + ?Sized> Scorer for &S {
    #[inline]
    fn score(&self, data: &RecordSet, parallel: bool) -> Score {
        (**self).score(data, parallel)
    }
}


impl<S: Scorer + ?Sized> Scorer for Box<S> {
    #[inline]
    fn score(&self, data: &RecordSet, parallel: bool) -> Score {
        (**self).score(data, parallel)
    }
}
