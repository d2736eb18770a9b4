use fixedbitset::FixedBitSet;
use tracing::debug;

use crate::error::{ForestError, Result};
use super::indexer::Indexer;
use super::label::Label;
use super::schema::{self, normalize_missing};

use std::ops::Deref;
use std::sync::{Arc, OnceLock};


/// A boolean flag per active row of a store.
pub type Mask = FixedBitSet;


/// Builds a mask of length `n` whose `i`-th bit is `f(i)`.
#[inline]
pub(crate) fn mask_with<F>(n: usize, f: F) -> Mask
    where F: Fn(usize) -> bool,
{
    let mut mask = FixedBitSet::with_capacity(n);
    (0..n).for_each(|i| mask.set(i, f(i)));
    mask
}


/// Converts a slice of flags into a [`Mask`].
pub fn mask_from_bools(flags: &[bool]) -> Mask {
    mask_with(flags.len(), |i| flags[i])
}


/// Returns the element-wise negation of `mask`.
pub fn negate(mask: &Mask) -> Mask {
    mask_with(mask.len(), |i| !mask.contains(i))
}


/// One input row: an event identifier and its feature values
/// in schema order.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// Immutable event identifier.
    pub event_id: i64,
    /// Feature values in dimension order.
    pub features: Vec<f64>,
}


/// A labeled, weighted input row.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingRecord {
    /// The unlabeled part of the row.
    pub record: Record,
    /// Non-negative importance weight.
    pub weight: f64,
    /// Ground-truth class.
    pub label: Label,
}


/// The immutable backing arrays shared by a store and all its views.
#[derive(Debug)]
struct Columns {
    features: Vec<Vec<f64>>,
    event_ids: Vec<i64>,
    n_rows: usize,

    // Populated once, on first use, over every backing row.
    global_min: OnceLock<Vec<f64>>,
    global_max: OnceLock<Vec<f64>>,
}


impl Columns {
    fn global_bound<F>(&self, init: f64, better: F) -> Vec<f64>
        where F: Fn(f64, f64) -> bool,
    {
        self.features.iter()
            .map(|column| {
                column.iter()
                    .copied()
                    .fold(init, |acc, x| if better(x, acc) { x } else { acc })
            })
            .collect()
    }
}


/// A columnar, filterable store of records.
///
/// Cloning or filtering a [`RecordSet`] shares the backing columns;
/// only the index array of active rows is new.
/// Every entry of the index array is an absolute offset
/// into the backing columns.
#[derive(Debug, Clone)]
pub struct RecordSet {
    columns: Arc<Columns>,
    index: Vec<usize>,
}


impl RecordSet {
    /// Builds a store from column-major data.
    /// Every value equal to `sentinel` becomes `NaN`.
    pub fn from_columns(
        event_ids: Vec<i64>,
        mut features: Vec<Vec<f64>>,
        sentinel: f64,
    ) -> Result<Self>
    {
        let n_rows = event_ids.len();
        for (dim, column) in features.iter_mut().enumerate() {
            if column.len() != n_rows {
                return Err(ForestError::ColumnLength {
                    column: column_name(dim),
                    expected: n_rows,
                    got: column.len(),
                });
            }
            column.iter_mut()
                .for_each(|x| { *x = normalize_missing(*x, sentinel); });
        }

        debug!(n_rows, n_feature = features.len(), "built record set");

        let columns = Columns {
            features,
            event_ids,
            n_rows,
            global_min: OnceLock::new(),
            global_max: OnceLock::new(),
        };
        let index = (0..n_rows).collect();
        Ok(Self { columns: Arc::new(columns), index })
    }


    /// Builds a store from row-major records.
    /// Every value equal to `sentinel` becomes `NaN`.
    pub fn from_records(records: &[Record], sentinel: f64) -> Result<Self> {
        let n_feature = records.first()
            .map_or(schema::N_FEATURES, |r| r.features.len());

        let mut features = vec![Vec::with_capacity(records.len()); n_feature];
        let mut event_ids = Vec::with_capacity(records.len());
        for record in records {
            if record.features.len() != n_feature {
                return Err(ForestError::ColumnLength {
                    column: format!("record {}", record.event_id),
                    expected: n_feature,
                    got: record.features.len(),
                });
            }
            event_ids.push(record.event_id);
            for (column, x) in features.iter_mut().zip(&record.features) {
                column.push(*x);
            }
        }

        Self::from_columns(event_ids, features, sentinel)
    }


    /// Returns the pair of the number of active rows and
    /// the number of feature columns.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.len(), self.n_feature())
    }


    /// Number of active rows.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.index.len()
    }


    /// Returns `true` if no row is active.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }


    /// Number of feature columns.
    #[inline(always)]
    pub fn n_feature(&self) -> usize {
        self.columns.features.len()
    }


    /// Number of rows in the backing columns,
    /// regardless of which rows are active.
    #[inline(always)]
    pub fn n_backing_rows(&self) -> usize {
        self.columns.n_rows
    }


    /// The active rows as absolute offsets into the backing columns.
    #[inline(always)]
    pub fn index(&self) -> &[usize] {
        &self.index[..]
    }


    /// The view of feature column `dim`.
    #[inline]
    pub fn feature(&self, dim: usize) -> Indexer<'_, f64> {
        Indexer::new(&self.index[..], &self.columns.features[dim][..])
    }


    /// The view of the event identifiers.
    #[inline]
    pub fn event_ids(&self) -> Indexer<'_, i64> {
        Indexer::new(&self.index[..], &self.columns.event_ids[..])
    }


    /// Returns `true` if `other` reads the same backing columns.
    #[inline]
    pub fn shares_backing_with(&self, other: &RecordSet) -> bool {
        Arc::ptr_eq(&self.columns, &other.columns)
    }


    /// Keeps the active rows flagged by `mask`, in order.
    /// The new index array holds absolute backing offsets,
    /// so filters compose.
    pub fn filter(&self, mask: &Mask) -> Self {
        assert_eq!(
            mask.len(), self.len(),
            "the mask must have one flag per active row"
        );
        let index = self.index.iter()
            .enumerate()
            .filter_map(|(i, &row)| mask.contains(i).then_some(row))
            .collect();

        Self { columns: Arc::clone(&self.columns), index }
    }


    /// Flags the active rows that miss a value in any of `dims`,
    /// or in any feature column if `dims` is `None`.
    pub fn rows_with_missing(&self, dims: Option<&[usize]>) -> Mask {
        let all = (0..self.n_feature()).collect::<Vec<_>>();
        let dims = dims.unwrap_or(&all[..]);

        let columns = dims.iter()
            .map(|&d| &self.columns.features[d][..])
            .collect::<Vec<_>>();

        mask_with(self.len(), |i| {
            let row = self.index[i];
            columns.iter().any(|column| column[row].is_nan())
        })
    }


    /// Per-feature minimum over every backing row, ignoring `NaN`.
    /// Computed once and shared with every view of the same columns.
    pub fn global_min(&self) -> &[f64] {
        self.columns.global_min
            .get_or_init(|| self.columns.global_bound(f64::INFINITY, |x, acc| x < acc))
    }


    /// Per-feature maximum over every backing row, ignoring `NaN`.
    /// Computed once and shared with every view of the same columns.
    pub fn global_max(&self) -> &[f64] {
        self.columns.global_max
            .get_or_init(|| self.columns.global_bound(f64::NEG_INFINITY, |x, acc| x > acc))
    }


    /// Minimum over the active rows of each of `dims`
    /// (or of every feature if `None`).
    pub fn local_min(&self, dims: Option<&[usize]>) -> Vec<f64> {
        self.per_dim(dims, |column| column.min())
    }


    /// Maximum over the active rows of each of `dims`
    /// (or of every feature if `None`).
    pub fn local_max(&self, dims: Option<&[usize]>) -> Vec<f64> {
        self.per_dim(dims, |column| column.max())
    }


    fn per_dim<F>(&self, dims: Option<&[usize]>, stat: F) -> Vec<f64>
        where F: Fn(Indexer<'_, f64>) -> f64,
    {
        match dims {
            Some(dims) => dims.iter().map(|&d| stat(self.feature(d))).collect(),
            None => (0..self.n_feature()).map(|d| stat(self.feature(d))).collect(),
        }
    }
}


fn column_name(dim: usize) -> String {
    schema::FEATURE_NAMES.get(dim)
        .map_or_else(|| format!("Feat. [{dim}]"), |name| name.to_string())
}


/// Per-row annotations that only training stores carry.
#[derive(Debug)]
struct Annotations {
    labels: Vec<Label>,
    weights: Vec<f64>,
}


/// A [`RecordSet`] whose rows also carry a label and a weight.
///
/// Dereferences to the underlying [`RecordSet`], so a training store
/// can be scored like any other store.
#[derive(Debug, Clone)]
pub struct TrainingSet {
    records: RecordSet,
    annotations: Arc<Annotations>,
}


impl TrainingSet {
    /// Builds a training store from column-major data.
    /// Every feature value equal to `sentinel` becomes `NaN`.
    pub fn from_columns(
        event_ids: Vec<i64>,
        features: Vec<Vec<f64>>,
        weights: Vec<f64>,
        labels: Vec<Label>,
        sentinel: f64,
    ) -> Result<Self>
    {
        let n_rows = event_ids.len();
        if weights.len() != n_rows {
            return Err(ForestError::ColumnLength {
                column: schema::WEIGHT.to_string(),
                expected: n_rows,
                got: weights.len(),
            });
        }
        if labels.len() != n_rows {
            return Err(ForestError::ColumnLength {
                column: schema::LABEL.to_string(),
                expected: n_rows,
                got: labels.len(),
            });
        }

        let records = RecordSet::from_columns(event_ids, features, sentinel)?;
        let annotations = Arc::new(Annotations { labels, weights });
        Ok(Self { records, annotations })
    }


    /// Builds a training store from row-major records.
    /// Every feature value equal to `sentinel` becomes `NaN`.
    pub fn from_records(records: &[TrainingRecord], sentinel: f64)
        -> Result<Self>
    {
        let rows = records.iter()
            .map(|r| r.record.clone())
            .collect::<Vec<_>>();
        let labels = records.iter().map(|r| r.label).collect();
        let weights = records.iter().map(|r| r.weight).collect();
        let annotations = Arc::new(Annotations { labels, weights });

        let records = RecordSet::from_records(&rows, sentinel)?;
        Ok(Self { records, annotations })
    }


    /// The unlabeled store.
    #[inline(always)]
    pub fn records(&self) -> &RecordSet {
        &self.records
    }


    /// The view of the class labels.
    #[inline]
    pub fn labels(&self) -> Indexer<'_, Label> {
        Indexer::new(self.records.index(), &self.annotations.labels[..])
    }


    /// The view of the importance weights.
    #[inline]
    pub fn weights(&self) -> Indexer<'_, f64> {
        Indexer::new(self.records.index(), &self.annotations.weights[..])
    }


    /// Number of active rows labeled [`Label::Signal`].
    #[inline]
    pub fn count_signal(&self) -> usize {
        self.labels().count_eq(Label::Signal)
    }


    /// Keeps the active rows flagged by `mask`, in order,
    /// together with their labels and weights.
    pub fn filter(&self, mask: &Mask) -> Self {
        Self {
            records: self.records.filter(mask),
            annotations: Arc::clone(&self.annotations),
        }
    }
}


impl Deref for TrainingSet {
    type Target = RecordSet;

    #[inline(always)]
    fn deref(&self) -> &Self::Target {
        &self.records
    }
}
