//! This file defines some functions that checks some pre-conditions
//! E.g., the dimension pool of a forest.

use crate::error::{ForestError, Result};


/// Check whether the dimension pool and the per-tree draw are valid
/// for a store with `n_feature` feature columns.
pub(crate) fn check_dimension_pool(
    pool: &[usize],
    dims_per_tree: usize,
    n_feature: usize,
) -> Result<()>
{
    if pool.is_empty() {
        return Err(ForestError::EmptyDimensionPool);
    }

    if let Some(&dim) = pool.iter().find(|&&d| d >= n_feature) {
        return Err(ForestError::DimensionOutOfRange { dim, n_feature });
    }

    if dims_per_tree == 0 || dims_per_tree > pool.len() {
        return Err(ForestError::InvalidDimsPerTree {
            dims_per_tree,
            pool: pool.len(),
        });
    }
    Ok(())
}


/// Check whether a region is consistent with the target dimensions.
#[inline(always)]
pub(crate) fn check_region(n_dims: usize, min: &[f64], max: &[f64], include_max: &[bool]) {
    assert_eq!(min.len(), n_dims, "min corner has the wrong dimension");
    assert_eq!(max.len(), n_dims, "max corner has the wrong dimension");
    assert_eq!(include_max.len(), n_dims, "include-max flags have the wrong dimension");
}
