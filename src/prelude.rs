//! Exports the standard stores, builders, and scorers.
//!
pub use crate::sample::{
    schema,

    Indexer,
    Label,
    Mask,
    Record,
    RecordReader,
    RecordSet,
    TrainingRecord,
    TrainingSet,

    mask_from_bools,
    negate,
    rank_order,
    write_predictions,
};


pub use crate::density_tree::{
    DensityTree,
    DensityTreeBuilder,
    Region,
};


pub use crate::forest::{
    DensityForest,
    ForestBuilder,
};


pub use crate::hypothesis::{
    Classifier,
    GeometricMean,
    Score,
    ScoreCache,
    Scorer,
};


pub use crate::common::{ams, ams_from_sums};
pub use crate::error::{ForestError, Result};
pub use crate::research::{CutoffChoice, CutoffSearch};
