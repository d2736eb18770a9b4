use super::record_set::{Mask, mask_with};

use std::ops::Index;


/// A read-only projection of one backing column
/// through the active row order of a store.
///
/// `indexer[i]` is `backing[index[i]]`; nothing is copied.
#[derive(Debug, Clone, Copy)]
pub struct Indexer<'a, T> {
    index: &'a [usize],
    target: &'a [T],
}


impl<'a, T> Indexer<'a, T> {
    #[inline]
    pub(crate) fn new(index: &'a [usize], target: &'a [T]) -> Self {
        Self { index, target }
    }


    /// Number of active rows.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.index.len()
    }


    /// Returns `true` if the view has no active rows.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}


impl<'a, T: Copy> Indexer<'a, T> {
    /// Returns the value at the `i`-th active row.
    #[inline(always)]
    pub fn get(&self, i: usize) -> T {
        self.target[self.index[i]]
    }


    /// Iterates the values in active row order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = T> + 'a {
        let target = self.target;
        self.index.iter().map(move |&i| target[i])
    }


    /// Copies the active values out into a new vector.
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().collect()
    }
}


impl<'a, T: Copy + PartialEq> Indexer<'a, T> {
    /// Flags the rows whose value equals `value`.
    pub fn equals(&self, value: T) -> Mask {
        mask_with(self.len(), |i| self.get(i) == value)
    }


    /// Counts the rows whose value equals `value`.
    pub fn count_eq(&self, value: T) -> usize {
        self.iter().filter(|v| *v == value).count()
    }
}


impl<'a> Indexer<'a, f64> {
    /// Minimum over the active rows, ignoring `NaN`.
    /// Returns `+inf` for an empty or all-missing view.
    pub fn min(&self) -> f64 {
        self.iter()
            .fold(f64::INFINITY, |acc, x| if x < acc { x } else { acc })
    }


    /// Maximum over the active rows, ignoring `NaN`.
    /// Returns `-inf` for an empty or all-missing view.
    pub fn max(&self) -> f64 {
        self.iter()
            .fold(f64::NEG_INFINITY, |acc, x| if x > acc { x } else { acc })
    }


    /// Sum over the active rows.
    pub fn sum(&self) -> f64 {
        self.iter().sum::<f64>()
    }


    /// Flags the rows with `value >= a`.
    pub fn geq(&self, a: f64) -> Mask {
        mask_with(self.len(), |i| self.get(i) >= a)
    }


    /// Flags the rows with `value > a`.
    pub fn gt(&self, a: f64) -> Mask {
        mask_with(self.len(), |i| self.get(i) > a)
    }
}


impl<T> Index<usize> for Indexer<'_, T> {
    type Output = T;

    #[inline(always)]
    fn index(&self, i: usize) -> &Self::Output {
        &self.target[self.index[i]]
    }
}
