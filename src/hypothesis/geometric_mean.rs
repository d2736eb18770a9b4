use serde::{Serialize, Deserialize};
use tracing::debug;

use crate::sample::RecordSet;
use super::scorer::{Score, Scorer};
use super::pipeline;


/// Combines several scorers by the per-row geometric mean of
/// their scores, class by class.
///
/// Means are taken in log space. A member that reports `NaN` for a
/// row and class is left out of that row's mean; a row with no
/// reporting member stays `NaN`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeometricMean<H> {
    hypotheses: Vec<H>,
}


impl<H> GeometricMean<H> {
    /// Construct a new instance of [`GeometricMean`].
    #[inline]
    pub fn new(hypotheses: Vec<H>) -> Self {
        Self { hypotheses }
    }


    /// Appends a member.
    #[inline]
    pub fn push(&mut self, hypothesis: H) {
        self.hypotheses.push(hypothesis);
    }


    /// Number of members.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.hypotheses.len()
    }


    /// Returns `true` if there is no member.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.hypotheses.is_empty()
    }


    /// The members.
    #[inline(always)]
    pub fn hypotheses(&self) -> &[H] {
        &self.hypotheses[..]
    }


    fn score_sequential(&self, data: &RecordSet) -> Score
        where H: Scorer,
    {
        let n_sample = data.len();
        let mut signal = LogAccumulator::new(n_sample);
        let mut background = LogAccumulator::new(n_sample);
        for h in self.hypotheses.iter() {
            let score = h.score(data, false);
            signal.add(&score.signal[..]);
            background.add(&score.background[..]);
        }

        Score {
            signal: signal.finish(),
            background: background.finish(),
        }
    }
}


impl<H> FromIterator<H> for GeometricMean<H> {
    fn from_iter<I: IntoIterator<Item = H>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}


impl<H: Scorer + Sync> Scorer for GeometricMean<H> {
    fn score(&self, data: &RecordSet, parallel: bool) -> Score {
        debug!(parallel, members = self.len(), rows = data.len(), "scoring ensemble");

        if parallel {
            let n_workers = rayon::current_num_threads();
            pipeline::score_pipeline(&self.hypotheses[..], data, n_workers)
        } else {
            self.score_sequential(data)
        }
    }
}


/// Running sum of logarithms and count of reporting members, per row.
#[derive(Debug, Clone)]
pub(crate) struct LogAccumulator {
    sums: Vec<f64>,
    counts: Vec<usize>,
}


impl LogAccumulator {
    pub(crate) fn new(n_sample: usize) -> Self {
        Self {
            sums: vec![0f64; n_sample],
            counts: vec![0; n_sample],
        }
    }


    /// Folds one member's scores in. `NaN` entries are skipped.
    pub(crate) fn add(&mut self, scores: &[f64]) {
        assert_eq!(
            scores.len(), self.sums.len(),
            "every member must score every row"
        );
        self.sums.iter_mut()
            .zip(self.counts.iter_mut())
            .zip(scores)
            .filter(|(_, x)| !x.is_nan())
            .for_each(|((sum, count), x)| {
                *sum += x.ln();
                *count += 1;
            });
    }


    /// The per-row geometric means.
    pub(crate) fn finish(self) -> Vec<f64> {
        self.sums.into_iter()
            .zip(self.counts)
            .map(|(sum, count)| {
                if count == 0 { f64::NAN } else { (sum / count as f64).exp() }
            })
            .collect()
    }
}
