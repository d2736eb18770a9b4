//! Construction of density forests:
//! many density trees, each over its own random subset of dimensions.

/// Defines [`ForestBuilder`].
pub mod builder;


pub use builder::{ForestBuilder, DEFAULT_SEED, shard_sizes};


use crate::density_tree::DensityTree;
use crate::hypothesis::GeometricMean;


/// An ensemble of density trees combined by the geometric mean.
pub type DensityForest = GeometricMean<DensityTree>;
