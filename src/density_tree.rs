//! The density tree: a binary space-partitioning tree
//! over a fixed subset of feature dimensions
//! whose leaves store empirical class densities.

/// Defines the builder of [`DensityTree`].
pub mod builder;
/// Defines the trained tree, its induction, and its scoring.
pub mod dtree;
/// Defines the arena nodes of a trained tree.
pub mod node;
/// Defines the hyper-rectangular regions owned by nodes.
pub mod region;

mod split;
mod partition;


pub use builder::DensityTreeBuilder;
pub use dtree::DensityTree;
pub use node::{
    Node,
    NodeId,
    LeafNode,
    BranchNode,
    SplitRule,
};
pub use region::Region;
pub use split::{entropy, N_CANDIDATES};

pub use crate::common::type_and_struct::{Density, Threshold};
