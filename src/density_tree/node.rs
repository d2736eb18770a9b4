//! Defines the inner representation
//! of the trained density tree.
use serde::{Serialize, Deserialize};

use crate::common::type_and_struct::{Density, Threshold};
use super::region::Region;


/// Position of a node in the arena of its tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(transparent)]
pub struct NodeId(pub(crate) usize);


impl NodeId {
    /// The raw arena position.
    #[inline(always)]
    pub fn index(&self) -> usize {
        self.0
    }
}


/// A split on one target dimension.
/// Rows with `value >= threshold` go to the upper child.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SplitRule {
    /// Position in the tree's target dimensions (not a feature column).
    pub(crate) dim: usize,
    pub(crate) threshold: Threshold,
}


impl SplitRule {
    /// The local dimension the rule tests.
    #[inline(always)]
    pub fn dim(&self) -> usize {
        self.dim
    }


    /// The threshold value.
    #[inline(always)]
    pub fn threshold(&self) -> f64 {
        self.threshold.0
    }
}


/// Enumeration of `BranchNode` and `LeafNode`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Node {
    /// A node that have two childrens.
    Branch(BranchNode),


    /// A node that have no child.
    Leaf(LeafNode),
}


/// Represents the branch nodes of a density tree.
/// The densities are kept even though scoring never reads them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BranchNode {
    pub(crate) rule: SplitRule,
    pub(crate) upper: NodeId,
    pub(crate) lower: NodeId,
    pub(crate) region: Region,
    pub(crate) density: Density,
}


impl BranchNode {
    /// The split rule.
    #[inline(always)]
    pub fn rule(&self) -> &SplitRule {
        &self.rule
    }


    /// The child holding `value >= threshold`.
    #[inline(always)]
    pub fn upper(&self) -> NodeId {
        self.upper
    }


    /// The child holding `value < threshold`.
    #[inline(always)]
    pub fn lower(&self) -> NodeId {
        self.lower
    }
}


/// Represents the leaf nodes of a density tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeafNode {
    pub(crate) region: Region,
    pub(crate) density: Density,
}


impl Node {
    /// The region the node owns.
    #[inline]
    pub fn region(&self) -> &Region {
        match self {
            Node::Branch(ref branch) => &branch.region,
            Node::Leaf(ref leaf) => &leaf.region,
        }
    }


    /// The class densities computed when the node was built.
    #[inline]
    pub fn density(&self) -> Density {
        match self {
            Node::Branch(ref branch) => branch.density,
            Node::Leaf(ref leaf) => leaf.density,
        }
    }


    /// Returns `true` for a leaf.
    #[inline(always)]
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf(_))
    }
}
