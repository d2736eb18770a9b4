//! Errors reported by the fallible operations of this crate.
//! Missing feature values are not errors; they travel as `NaN`.

/// Errors from loading, building, and evaluating a density forest.
#[derive(Debug, thiserror::Error)]
pub enum ForestError {
    /// Returned when reading or writing a file fails.
    #[error("I/O failure")]
    Io(#[from] std::io::Error),

    /// Returned when a CSV cell cannot be parsed as a number.
    #[error("line {line}: cannot parse column `{column}` value `{value}`")]
    Parse {
        /// One-based line number in the input.
        line: usize,
        /// Name of the offending column.
        column: String,
        /// The raw cell text.
        value: String,
    },

    /// Returned when a required column is absent from the input header.
    #[error("required column `{column}` is missing")]
    MissingColumn {
        /// Name of the missing column.
        column: String,
    },

    /// Returned when a label is neither `s` nor `b`.
    #[error("unknown class label `{label}`, expected `s` or `b`")]
    UnknownLabel {
        /// The offending label text.
        label: String,
    },

    /// Returned when the backing columns of a store differ in length.
    #[error("column `{column}` has {got} rows, expected {expected}")]
    ColumnLength {
        /// Name of the offending column.
        column: String,
        /// Row count of the first feature column.
        expected: usize,
        /// Row count of the offending column.
        got: usize,
    },

    /// Returned when the polars frame cannot be converted.
    #[error("cannot read data frame")]
    Polars(#[from] polars::prelude::PolarsError),

    /// Returned when the dimension pool is empty.
    #[error("the dimension pool is empty")]
    EmptyDimensionPool,

    /// Returned when the per-tree dimension count is zero
    /// or exceeds the pool size.
    #[error("dims per tree must be in [1, {pool}], got {dims_per_tree}")]
    InvalidDimsPerTree {
        /// The requested number of dimensions per tree.
        dims_per_tree: usize,
        /// The number of dimensions in the pool.
        pool: usize,
    },

    /// Returned when a dimension in the pool does not name a feature column.
    #[error("dimension {dim} is out of range for {n_feature} features")]
    DimensionOutOfRange {
        /// The offending dimension.
        dim: usize,
        /// Number of feature columns in the store.
        n_feature: usize,
    },

    /// Returned when the predictions and the rows differ in count.
    #[error("got {predictions} predictions for {rows} rows")]
    LengthMismatch {
        /// Number of predicted labels.
        predictions: usize,
        /// Number of active rows in the store.
        rows: usize,
    },


    /// Returned when the rank order and the rows differ in count.
    #[error("got {ranks} rank order entries for {rows} rows")]
    RankOrderMismatch {
        /// Number of rank order entries.
        ranks: usize,
        /// Number of active rows being written.
        rows: usize,
    },

    /// Returned when the approximate median significance is undefined.
    #[error("AMS radicand is {radicand}, aborting")]
    AmsDomain {
        /// The radicand `2((s + b + b_r) ln(1 + s / (b + b_r)) - s)`.
        radicand: f64,
    },
}


/// Shorthand for results carrying [`ForestError`].
pub type Result<T> = std::result::Result<T, ForestError>;
