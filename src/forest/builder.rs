use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use tracing::{debug, info, instrument};

use crate::common::checker;
use crate::density_tree::{DensityTree, DensityTreeBuilder};
use crate::error::Result;
use crate::sample::TrainingSet;
use super::DensityForest;

use std::time::{Duration, Instant};


/// The seed used when none is given.
pub const DEFAULT_SEED: u64 = 1234;


/// A struct that builds density trees and forests.
///
/// Every tree draws `dims_per_tree` distinct dimensions from the pool,
/// drops the rows missing any of them,
/// and is rooted at the global bounding box of the training store.
///
/// # Example
///
/// ```no_run
/// use densityforest::prelude::*;
///
/// let sample = RecordReader::default()
///     .file("training.csv")
///     .read_training()
///     .unwrap();
/// let forest = ForestBuilder::new(&sample, schema::dimension_pool(), 3)
///     .unwrap()
///     .seed(7)
///     .build_forest(200, true);
/// ```
#[derive(Clone)]
pub struct ForestBuilder<'a> {
    sample: &'a TrainingSet,
    pool: Vec<usize>,
    dims_per_tree: usize,
    seed: u64,
    n_workers: usize,
    max_depth: Option<usize>,
    min_points: Option<usize>,
}


impl<'a> ForestBuilder<'a> {
    /// Construct a new instance of [`ForestBuilder`].
    /// By default, [`ForestBuilder`] sets the parameters as follows;
    /// ```text
    /// seed: DEFAULT_SEED,
    /// n_workers: rayon::current_num_threads(),
    /// max_depth, min_points: floor(sqrt(n)) per tree,
    /// ```
    ///
    /// Fails if `pool` is empty, names a column `sample` does not have,
    /// or has fewer than `dims_per_tree` (or `dims_per_tree` is zero).
    pub fn new(sample: &'a TrainingSet, pool: Vec<usize>, dims_per_tree: usize)
        -> Result<Self>
    {
        checker::check_dimension_pool(&pool[..], dims_per_tree, sample.n_feature())?;

        // Fill the shared bounds before any worker reads them.
        let _ = sample.global_min();
        let _ = sample.global_max();

        Ok(Self {
            sample,
            pool,
            dims_per_tree,
            seed: DEFAULT_SEED,
            n_workers: rayon::current_num_threads(),
            max_depth: None,
            min_points: None,
        })
    }


    /// Set the seed of the master random generator.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }


    /// Set the number of shards of the parallel builds.
    pub fn n_workers(mut self, n_workers: usize) -> Self {
        assert!(n_workers > 0, "at least one worker is required");
        self.n_workers = n_workers;
        self
    }


    /// Specify the maximal depth of every tree.
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }


    /// Specify the node size at or below which a node stays a leaf.
    pub fn min_points(mut self, points: usize) -> Self {
        self.min_points = Some(points);
        self
    }


    /// Builds a single tree over a fresh random subset of the pool.
    pub fn build_one<R: Rng>(&self, rng: &mut R) -> DensityTree {
        let dims = self.pool
            .choose_multiple(rng, self.dims_per_tree)
            .copied()
            .collect::<Vec<_>>();

        let mut builder = DensityTreeBuilder::new(self.sample, dims);
        if let Some(depth) = self.max_depth {
            builder = builder.max_depth(depth);
        }
        if let Some(points) = self.min_points {
            builder = builder.min_points(points);
        }
        builder.build(rng)
    }


    /// Builds `n_tree` trees one after another.
    #[instrument(skip(self), fields(mode = "sequential"))]
    pub fn build_many(&self, n_tree: usize) -> Vec<DensityTree> {
        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);
        (0..n_tree).map(|_| self.build_one(&mut rng)).collect()
    }


    /// Builds `n_tree` trees split into one shard per worker.
    /// Every shard owns a generator seeded from the master generator.
    /// Trees come back grouped by shard.
    #[instrument(skip(self), fields(mode = "parallel", n_workers = self.n_workers))]
    pub fn build_many_parallel(&self, n_tree: usize) -> Vec<DensityTree> {
        let shards = self.shards(shard_sizes(n_tree, self.n_workers));

        shards.into_par_iter()
            .map(|(size, mut rng)| {
                (0..size)
                    .map(|_| self.build_one(&mut rng))
                    .collect::<Vec<_>>()
            })
            .collect::<Vec<Vec<_>>>()
            .into_iter()
            .flatten()
            .collect()
    }


    /// Builds trees one after another until `budget` has elapsed.
    /// The deadline is checked before each tree,
    /// so a tree in progress is always finished.
    #[instrument(skip(self), fields(mode = "sequential"))]
    pub fn build_timed(&self, budget: Duration) -> Vec<DensityTree> {
        let deadline = Instant::now() + budget;
        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);
        let trees = build_until(deadline, || self.build_one(&mut rng));

        info!(n_tree = trees.len(), "timed build finished");
        trees
    }


    /// Runs one timed build per worker until `budget` has elapsed.
    #[instrument(skip(self), fields(mode = "parallel", n_workers = self.n_workers))]
    pub fn build_timed_parallel(&self, budget: Duration) -> Vec<DensityTree> {
        let deadline = Instant::now() + budget;
        let shards = self.shards(vec![0; self.n_workers]);

        let trees = shards.into_par_iter()
            .map(|(_, mut rng)| build_until(deadline, || self.build_one(&mut rng)))
            .collect::<Vec<Vec<_>>>()
            .into_iter()
            .flatten()
            .collect::<Vec<_>>();

        info!(n_tree = trees.len(), "timed build finished");
        trees
    }


    /// Builds a forest of `n_tree` trees.
    pub fn build_forest(&self, n_tree: usize, parallel: bool) -> DensityForest {
        info!(
            n_tree,
            parallel,
            rows = self.sample.len(),
            pool = self.pool.len(),
            dims_per_tree = self.dims_per_tree,
            "building density forest"
        );

        let trees = if parallel {
            self.build_many_parallel(n_tree)
        } else {
            self.build_many(n_tree)
        };
        DensityForest::new(trees)
    }


    /// Pairs every shard size with its own generator.
    fn shards(&self, sizes: Vec<usize>) -> Vec<(usize, ChaCha8Rng)> {
        let mut master = ChaCha8Rng::seed_from_u64(self.seed);
        debug!(?sizes, "sharding tree construction");

        sizes.into_iter()
            .map(|size| (size, ChaCha8Rng::seed_from_u64(master.gen())))
            .collect()
    }
}


/// Splits `n_tree` into `n_workers` shard sizes.
/// The remainder goes to the first shards.
pub fn shard_sizes(n_tree: usize, n_workers: usize) -> Vec<usize> {
    assert!(n_workers > 0, "at least one worker is required");
    let base = n_tree / n_workers;
    let rest = n_tree % n_workers;

    (0..n_workers)
        .map(|i| base + usize::from(i < rest))
        .collect()
}


fn build_until<F>(deadline: Instant, mut build: F) -> Vec<DensityTree>
    where F: FnMut() -> DensityTree,
{
    let mut trees = Vec::new();
    while Instant::now() < deadline {
        trees.push(build());
    }
    trees
}
