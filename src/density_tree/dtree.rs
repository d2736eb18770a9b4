use rand::Rng;
use serde::{Serialize, Deserialize};

use crate::common::type_and_struct::{Density, Depth};
use crate::hypothesis::{Score, Scorer};
use crate::sample::{Indexer, Label, RecordSet, TrainingSet, negate};
use super::{
    node::*,
    partition::partition,
    region::Region,
    split,
};


/// A trained density tree.
///
/// Nodes live in an arena; children are pushed before their parent,
/// so the root is the last node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DensityTree {
    dims: Vec<usize>,
    nodes: Vec<Node>,
    normalizer: f64,
    root: NodeId,
}


impl DensityTree {
    /// Grows a tree on `sample` inside `region`.
    ///
    /// `max_depth` and `min_points` both default to
    /// `floor(sqrt(sample.len()))`.
    /// A node becomes a leaf when the remaining depth is zero,
    /// when it holds at most `min_points` rows,
    /// or when no candidate split has a positive information gain.
    ///
    /// `sample` should not miss values in `dims`;
    /// [`DensityTreeBuilder`](super::DensityTreeBuilder) takes care of that.
    pub fn train<R: Rng>(
        sample: TrainingSet,
        dims: Vec<usize>,
        region: Region,
        max_depth: Option<usize>,
        min_points: Option<usize>,
        rng: &mut R,
    ) -> Self
    {
        assert_eq!(
            region.n_dims(), dims.len(),
            "the region must have one side per target dimension"
        );

        let n_sample = sample.len();
        let default = (n_sample as f64).sqrt().floor() as usize;
        let max_depth = Depth::from(max_depth.unwrap_or(default));
        let min_points = min_points.unwrap_or(default);

        let mut grower = Grower {
            dims: &dims[..],
            normalizer: n_sample as f64,
            min_points,
            nodes: Vec::new(),
        };
        let root = grower.grow(sample, region, max_depth, rng);

        let normalizer = grower.normalizer;
        let nodes = grower.nodes;
        Self { dims, nodes, normalizer, root }
    }


    /// The feature columns this tree reads, in local dimension order.
    #[inline(always)]
    pub fn dims(&self) -> &[usize] {
        &self.dims[..]
    }


    /// The root node.
    #[inline]
    pub fn root(&self) -> &Node {
        self.node(self.root)
    }


    /// The node stored at `id`.
    #[inline]
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }


    /// Every node of the tree, children before parents.
    #[inline(always)]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes[..]
    }


    /// Number of leaves.
    pub fn n_leaves(&self) -> usize {
        self.nodes.iter().filter(|node| node.is_leaf()).count()
    }


    /// Length of the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        self.depth_of(self.root)
    }


    fn depth_of(&self, id: NodeId) -> usize {
        match self.node(id) {
            Node::Leaf(_) => 0,
            Node::Branch(ref branch) => {
                let upper = self.depth_of(branch.upper);
                let lower = self.depth_of(branch.lower);
                1 + upper.max(lower)
            },
        }
    }


    /// Number of training rows at the root.
    /// Every density of the tree is divided by this constant.
    #[inline(always)]
    pub fn normalizer(&self) -> f64 {
        self.normalizer
    }


    /// Writes the densities of the leaf reached by each row of `rows`.
    /// `rows` are positions in the scored store and get reordered.
    fn assign(
        &self,
        id: NodeId,
        rows: &mut [usize],
        columns: &[Indexer<'_, f64>],
        score: &mut Score,
    )
    {
        if rows.is_empty() {
            return;
        }

        match self.node(id) {
            Node::Leaf(ref leaf) => {
                for &i in rows.iter() {
                    score.signal[i] = leaf.density.signal;
                    score.background[i] = leaf.density.background;
                }
            },
            Node::Branch(ref branch) => {
                let column = columns[branch.rule.dim];
                let threshold = branch.rule.threshold();
                let k = partition(rows, threshold, |i| column.get(i));

                let (upper, lower) = rows.split_at_mut(k);
                self.assign(branch.upper, upper, columns, score);
                self.assign(branch.lower, lower, columns, score);
            },
        }
    }
}


impl Scorer for DensityTree {
    /// Rows missing a value in any target dimension score `NaN`.
    fn score(&self, data: &RecordSet, _parallel: bool) -> Score {
        let n_sample = data.len();
        let mut score = Score::missing(n_sample);

        let missing = data.rows_with_missing(Some(&self.dims[..]));
        let mut rows = (0..n_sample)
            .filter(|&i| !missing.contains(i))
            .collect::<Vec<_>>();

        let columns = self.dims.iter()
            .map(|&d| data.feature(d))
            .collect::<Vec<_>>();

        self.assign(self.root, &mut rows[..], &columns[..], &mut score);
        score
    }
}


/// Training-time state shared by every node of one tree.
struct Grower<'a> {
    dims: &'a [usize],
    normalizer: f64,
    min_points: usize,
    nodes: Vec<Node>,
}


impl Grower<'_> {
    fn grow<R: Rng>(
        &mut self,
        sample: TrainingSet,
        region: Region,
        depth: Depth,
        rng: &mut R,
    ) -> NodeId
    {
        let density = self.density(&sample, &region);

        if depth.is_exhausted() || sample.len() <= self.min_points {
            return self.push(Node::Leaf(LeafNode { region, density }));
        }

        let rule = match split::best_split(&sample, self.dims, rng) {
            Some(rule) => rule,
            None => {
                return self.push(Node::Leaf(LeafNode { region, density }));
            },
        };

        let threshold = rule.threshold();
        let above = sample.feature(self.dims[rule.dim]).geq(threshold);
        let below = negate(&above);
        let upper_sample = sample.filter(&above);
        let lower_sample = sample.filter(&below);
        drop(sample);

        let (upper_region, lower_region) = region.split(rule.dim, threshold);
        let depth = depth.descend();
        let upper = self.grow(upper_sample, upper_region, depth, rng);
        let lower = self.grow(lower_sample, lower_region, depth, rng);

        let branch = BranchNode { rule, upper, lower, region, density };
        self.push(Node::Branch(branch))
    }


    fn density(&self, sample: &TrainingSet, region: &Region) -> Density {
        let n_signal = sample.labels().count_eq(Label::Signal);
        let n_background = sample.len() - n_signal;

        let scale = region.volume() * self.normalizer;
        Density {
            signal: n_signal as f64 / scale,
            background: n_background as f64 / scale,
        }
    }


    #[inline]
    fn push(&mut self, node: Node) -> NodeId {
        self.nodes.push(node);
        NodeId(self.nodes.len() - 1)
    }
}
