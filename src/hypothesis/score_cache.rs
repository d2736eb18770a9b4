use crate::sample::RecordSet;
use super::scorer::{Score, Scorer};

use std::sync::OnceLock;


/// Remembers the first [`Score`] its scorer returns.
///
/// # Precondition
/// A cache serves exactly one store for its whole lifetime.
/// Every later call returns the first result,
/// whatever store it is given.
#[derive(Debug)]
pub struct ScoreCache<S> {
    scorer: S,
    cache: OnceLock<Score>,
}


impl<S> ScoreCache<S> {
    /// Wraps `scorer` in an empty cache.
    pub fn new(scorer: S) -> Self {
        Self { scorer, cache: OnceLock::new() }
    }


    /// The wrapped scorer.
    #[inline(always)]
    pub fn inner(&self) -> &S {
        &self.scorer
    }


    /// Returns `true` once a score has been computed.
    #[inline]
    pub fn is_populated(&self) -> bool {
        self.cache.get().is_some()
    }
}


impl<S: Scorer> Scorer for ScoreCache<S> {
    fn score(&self, data: &RecordSet, parallel: bool) -> Score {
        self.cache
            .get_or_init(|| self.scorer.score(data, parallel))
            .clone()
    }
}
