//! Builds stores from a `polars::DataFrame`.
//! Nulls and the sentinel both become `NaN` in feature columns.
use polars::prelude::*;

use crate::error::{ForestError, Result};
use super::label::Label;
use super::record_set::{RecordSet, TrainingSet};
use super::schema::{self, FEATURE_NAMES};


impl RecordSet {
    /// Convert a `polars::DataFrame` into a [`RecordSet`].
    /// The frame must hold `EventId` and every schema feature.
    pub fn from_dataframe(df: &DataFrame, sentinel: f64) -> Result<Self> {
        let event_ids = event_id_column(df)?;
        let features = feature_columns(df)?;
        RecordSet::from_columns(event_ids, features, sentinel)
    }
}


impl TrainingSet {
    /// Convert a `polars::DataFrame` into a [`TrainingSet`].
    /// Besides the columns [`RecordSet::from_dataframe`] needs,
    /// the frame must hold `Weight` and `Label`.
    pub fn from_dataframe(df: &DataFrame, sentinel: f64) -> Result<Self> {
        let event_ids = event_id_column(df)?;
        let features = feature_columns(df)?;
        let weights = f64_column(df, schema::WEIGHT)?;
        let labels = label_column(df)?;
        TrainingSet::from_columns(event_ids, features, weights, labels, sentinel)
    }
}


fn column<'a>(df: &'a DataFrame, name: &str) -> Result<&'a Series> {
    df.column(name)
        .map_err(|_| ForestError::MissingColumn { column: name.to_string() })
}


fn f64_column(df: &DataFrame, name: &str) -> Result<Vec<f64>> {
    let series = column(df, name)?.cast(&DataType::Float64)?;
    let values = series.f64()?
        .into_iter()
        .map(|x| x.unwrap_or(f64::NAN))
        .collect();
    Ok(values)
}


fn feature_columns(df: &DataFrame) -> Result<Vec<Vec<f64>>> {
    FEATURE_NAMES.iter()
        .map(|name| f64_column(df, name))
        .collect()
}


fn event_id_column(df: &DataFrame) -> Result<Vec<i64>> {
    let series = column(df, schema::EVENT_ID)?.cast(&DataType::Int64)?;
    series.i64()?
        .into_iter()
        .enumerate()
        .map(|(row, id)| {
            id.ok_or_else(|| ForestError::Parse {
                line: row + 1,
                column: schema::EVENT_ID.to_string(),
                value: "null".to_string(),
            })
        })
        .collect()
}


fn label_column(df: &DataFrame) -> Result<Vec<Label>> {
    let series = column(df, schema::LABEL)?.cast(&DataType::Utf8)?;
    series.utf8()?
        .into_iter()
        .map(|label| label.unwrap_or("").parse::<Label>())
        .collect()
}
