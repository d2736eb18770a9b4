//! Defines some common functions used in this library.

/// Defines the approximate median significance.
pub mod metrics;

/// Defines thin wrappers for scalars shared across modules.
pub(crate) mod type_and_struct;

/// Defines some checker functions.
pub(crate) mod checker;

pub use metrics::{ams, ams_from_sums};
