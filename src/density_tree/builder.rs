use rand::Rng;

use crate::sample::{TrainingSet, negate};
use super::{DensityTree, Region};


/// A struct that builds a [`DensityTree`] over a fixed set
/// of target dimensions.
///
/// # Example
///
/// ```no_run
/// use densityforest::prelude::*;
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let sample = RecordReader::default()
///     .file("training.csv")
///     .read_training()
///     .unwrap();
/// let mut rng = ChaCha8Rng::seed_from_u64(0);
/// let tree = DensityTreeBuilder::new(&sample, vec![0, 3, 7])
///     .max_depth(4)
///     .build(&mut rng);
/// ```
#[derive(Clone)]
pub struct DensityTreeBuilder<'a> {
    sample: &'a TrainingSet,
    dims: Vec<usize>,
    region: Option<Region>,
    max_depth: Option<usize>,
    min_points: Option<usize>,
}


impl<'a> DensityTreeBuilder<'a> {
    /// Construct a new instance of [`DensityTreeBuilder`].
    /// By default, the root region is the global bounding box of
    /// `sample` restricted to `dims`, and both the maximal depth and
    /// the minimal node size are `floor(sqrt(n))`
    /// for the `n` rows that miss no value in `dims`.
    pub fn new(sample: &'a TrainingSet, dims: Vec<usize>) -> Self {
        let n_feature = sample.n_feature();
        assert!(
            dims.iter().all(|&d| d < n_feature),
            "target dimensions must be feature columns of the sample"
        );
        Self {
            sample,
            dims,
            region: None,
            max_depth: None,
            min_points: None,
        }
    }


    /// Set the root region.
    pub fn region(mut self, region: Region) -> Self {
        self.region = Some(region);
        self
    }


    /// Specify the maximal depth of the tree.
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }


    /// Specify the node size at or below which a node stays a leaf.
    pub fn min_points(mut self, points: usize) -> Self {
        self.min_points = Some(points);
        self
    }


    /// Build and train a [`DensityTree`].
    /// Rows missing a value in any target dimension are left out.
    pub fn build<R: Rng>(self, rng: &mut R) -> DensityTree {
        let missing = self.sample.rows_with_missing(Some(&self.dims[..]));
        let complete = self.sample.filter(&negate(&missing));

        let region = self.region.unwrap_or_else(|| {
            Region::from_bounds(
                self.sample.global_min(),
                self.sample.global_max(),
                &self.dims[..],
            )
        });

        DensityTree::train(
            complete,
            self.dims,
            region,
            self.max_depth,
            self.min_points,
            rng,
        )
    }
}
