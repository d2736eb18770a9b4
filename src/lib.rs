#![warn(missing_docs)]

//!
//! A crate that classifies rows as signal or background
//! with an ensemble of density trees.
//!
//! A density tree partitions a few randomly chosen feature dimensions
//! into boxes and stores, for every leaf box, the empirical density of
//! each class. A forest of such trees scores a row by the geometric
//! mean of the densities of the leaves the row falls into, and the
//! classifier labels a row as signal when the ratio of its signal
//! score to its background score reaches a cutoff.
//!
//! - [`sample`] holds the columnar stores and their filtered views.
//! - [`density_tree`] grows and scores a single tree.
//! - [`forest`] builds many trees, sequentially or in parallel.
//! - [`hypothesis`] combines scorers, caches scores, and classifies.
//! - [`common`] provides the approximate median significance (AMS).
//! - [`research`] searches the cutoff that maximizes the AMS.
//!
//! ```no_run
//! use densityforest::prelude::*;
//!
//! let train = RecordReader::default()
//!     .file("training.csv")
//!     .read_training()
//!     .unwrap();
//! let forest = ForestBuilder::new(&train, schema::dimension_pool(), 3)
//!     .unwrap()
//!     .build_forest(100, true);
//!
//! let choice = CutoffSearch::new().run(&forest, &train, true).unwrap();
//! let classifier = Classifier::new(&forest).with_cutoff(choice.cutoff);
//! let labels = classifier.classify(&train, true);
//! ```

pub mod common;
pub mod density_tree;
pub mod error;
pub mod forest;
pub mod hypothesis;
pub mod prelude;
pub mod research;
pub mod sample;


pub use error::{ForestError, Result};

pub use sample::{
    Indexer,
    Label,
    Mask,
    Record,
    RecordReader,
    RecordSet,
    TrainingRecord,
    TrainingSet,
};

pub use density_tree::{
    DensityTree,
    DensityTreeBuilder,
    Region,
};

pub use forest::{DensityForest, ForestBuilder};

pub use hypothesis::{
    Classifier,
    GeometricMean,
    Score,
    ScoreCache,
    Scorer,
};

pub use common::{ams, ams_from_sums};

pub use research::{CutoffChoice, CutoffSearch};
