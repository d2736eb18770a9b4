//! Columnar record stores and their indexed views.
//!
//! A [`RecordSet`] owns nothing but an index array and a shared handle
//! to immutable backing columns, so filtering is cheap and never copies
//! feature data.

// Provides the fixed record schema.
pub mod schema;
// Provides the class label.
pub(crate) mod label;
// Provides the indexed view over a backing column.
pub(crate) mod indexer;
// Provides the columnar store and its filtered views.
pub(crate) mod record_set;
// Provides the CSV reader.
pub(crate) mod record_reader;
// Provides the polars ingestion.
pub(crate) mod frame;
// Provides the prediction writer.
pub(crate) mod prediction_writer;


pub use label::Label;
pub use indexer::Indexer;
pub use record_set::{
    Record,
    RecordSet,
    TrainingRecord,
    TrainingSet,
    Mask,
    mask_from_bools,
    negate,
};
pub use record_reader::{
    RecordReader,
    read_records,
    read_training,
};
pub use prediction_writer::{
    write_predictions,
    rank_order,
};
