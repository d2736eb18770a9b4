//! Scorers and the layers built on top of them:
//! the geometric-mean ensemble, the score cache, and the classifier.

pub(crate) mod scorer;
pub(crate) mod geometric_mean;
pub(crate) mod pipeline;
pub(crate) mod score_cache;
pub(crate) mod classifier;


pub use scorer::{Score, Scorer};
pub use geometric_mean::GeometricMean;
pub use score_cache::ScoreCache;
pub use classifier::{Classifier, DEFAULT_CUTOFF};
