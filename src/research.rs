//! Tools around a trained forest that are not part of scoring itself.
//! Provides the search for the classification cutoff
//! that maximizes the approximate median significance.

/// Defines [`CutoffSearch`].
pub mod cutoff_search;


pub use cutoff_search::{CutoffSearch, CutoffChoice};
