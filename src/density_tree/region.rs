use serde::{Serialize, Deserialize};

use crate::common::checker;


/// An axis-aligned box over the target dimensions of a tree.
/// Index `d` of each corner refers to the `d`-th target dimension,
/// not to a feature column of the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub(crate) min: Vec<f64>,
    pub(crate) max: Vec<f64>,
    pub(crate) include_max: Vec<bool>,
}


impl Region {
    /// Construct a closed box `[min, max]`.
    pub fn new(min: Vec<f64>, max: Vec<f64>) -> Self {
        let include_max = vec![true; min.len()];
        checker::check_region(min.len(), &min[..], &max[..], &include_max[..]);
        Self { min, max, include_max }
    }


    /// Restricts per-feature bounds to the feature columns in `dims`.
    pub fn from_bounds(min: &[f64], max: &[f64], dims: &[usize]) -> Self {
        let min = dims.iter().map(|&d| min[d]).collect();
        let max = dims.iter().map(|&d| max[d]).collect();
        Self::new(min, max)
    }


    /// Number of dimensions of the box.
    #[inline(always)]
    pub fn n_dims(&self) -> usize {
        self.min.len()
    }


    /// The lower corner.
    #[inline(always)]
    pub fn min(&self) -> &[f64] {
        &self.min[..]
    }


    /// The upper corner.
    #[inline(always)]
    pub fn max(&self) -> &[f64] {
        &self.max[..]
    }


    /// Whether the upper bound of each dimension belongs to the box.
    #[inline(always)]
    pub fn include_max(&self) -> &[bool] {
        &self.include_max[..]
    }


    /// Product of the side lengths.
    pub fn volume(&self) -> f64 {
        self.min.iter()
            .zip(&self.max)
            .map(|(lo, hi)| (hi - lo).abs())
            .product::<f64>()
    }


    /// Cuts the box at `threshold` along dimension `dim`.
    /// Returns the `(upper, lower)` pair; the upper box keeps the
    /// threshold itself, the lower box excludes it.
    pub fn split(&self, dim: usize, threshold: f64) -> (Self, Self) {
        let mut upper = self.clone();
        upper.min[dim] = threshold;

        let mut lower = self.clone();
        lower.max[dim] = threshold;
        lower.include_max[dim] = false;

        (upper, lower)
    }


    /// Returns `true` if `point` lies in the box.
    pub fn contains(&self, point: &[f64]) -> bool {
        point.len() == self.n_dims()
            && point.iter()
                .zip(self.min.iter().zip(&self.max))
                .zip(&self.include_max)
                .all(|((&x, (&lo, &hi)), &closed)| {
                    x >= lo && (x < hi || (closed && x == hi))
                })
    }
}
