use crate::sample::{Label, RecordSet};
use super::scorer::{Score, Scorer};


/// The cutoff used when none is given.
pub const DEFAULT_CUTOFF: f64 = 1.0;


/// Labels a row [`Label::Signal`] iff
/// `signal score / background score >= cutoff`.
/// Rows whose ratio is `NaN` are labeled [`Label::Background`].
#[derive(Debug, Clone)]
pub struct Classifier<S> {
    scorer: S,
    cutoff: f64,
}


impl<S> Classifier<S> {
    /// Construct a classifier with [`DEFAULT_CUTOFF`].
    pub fn new(scorer: S) -> Self {
        Self { scorer, cutoff: DEFAULT_CUTOFF }
    }


    /// Set the cutoff.
    pub fn with_cutoff(mut self, cutoff: f64) -> Self {
        self.cutoff = cutoff;
        self
    }


    /// Replace the cutoff in place.
    #[inline]
    pub fn set_cutoff(&mut self, cutoff: f64) {
        self.cutoff = cutoff;
    }


    /// The current cutoff.
    #[inline(always)]
    pub fn cutoff(&self) -> f64 {
        self.cutoff
    }


    /// The wrapped scorer.
    #[inline(always)]
    pub fn scorer(&self) -> &S {
        &self.scorer
    }
}


impl<S: Scorer> Classifier<S> {
    /// Labels every active row of `data`, in order.
    pub fn classify(&self, data: &RecordSet, parallel: bool) -> Vec<Label> {
        let score = self.scorer.score(data, parallel);
        label_by_ratio(&score, self.cutoff)
    }
}


/// Applies `ratio >= cutoff` to every row of `score`.
pub(crate) fn label_by_ratio(score: &Score, cutoff: f64) -> Vec<Label> {
    score.ratios()
        .into_iter()
        .map(|ratio| {
            if ratio >= cutoff { Label::Signal } else { Label::Background }
        })
        .collect()
}
