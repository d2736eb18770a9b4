use serde::{Serialize, Deserialize};
use std::cmp;


/// Struct `Depth` defines the remaining depth budget of a tree.
/// This is just a wrapper for `usize`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[repr(transparent)]
pub(crate) struct Depth(usize);


impl From<usize> for Depth {
    #[inline]
    fn from(depth: usize) -> Self {
        Self(depth)
    }
}


impl Depth {
    /// Returns `true` when no more splits are allowed.
    #[inline(always)]
    pub(crate) fn is_exhausted(&self) -> bool {
        self.0 == 0
    }


    /// The budget left for the children of a node.
    #[inline(always)]
    pub(crate) fn descend(self) -> Self {
        Self(self.0.saturating_sub(1))
    }
}


/// A split threshold on one feature dimension.
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Threshold(pub(crate) f64);


impl From<f64> for Threshold {
    #[inline]
    fn from(threshold: f64) -> Self {
        Self(threshold)
    }
}


impl Threshold {
    /// The raw threshold value.
    #[inline(always)]
    pub fn value(&self) -> f64 {
        self.0
    }
}


/// Information gain of a candidate split.
#[derive(Clone, Copy, PartialEq, Debug)]
#[repr(transparent)]
pub(crate) struct Gain(pub(crate) f64);


impl From<f64> for Gain {
    #[inline]
    fn from(gain: f64) -> Self {
        Self(gain)
    }
}


impl cmp::PartialOrd<Self> for Gain {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<cmp::Ordering> {
        self.0.partial_cmp(&other.0)
    }
}


/// Class densities stored in every tree node.
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct Density {
    /// Signal rows per unit of normalized volume.
    pub signal: f64,
    /// Background rows per unit of normalized volume.
    pub background: f64,
}
