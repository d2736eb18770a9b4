use tracing::info;

use crate::error::{ForestError, Result};
use super::label::Label;
use super::record_set::{RecordSet, TrainingSet};
use super::schema::{self, FEATURE_NAMES, N_FEATURES};

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;


/// A struct that reads a header-driven CSV file
/// into a [`RecordSet`] or a [`TrainingSet`].
///
/// The header must name `EventId` and every feature of the schema.
/// Training files also need `Weight` and `Label`.
/// Other columns are ignored; column order is free.
///
/// # Example
/// ```no_run
/// use densityforest::prelude::*;
///
/// let train = RecordReader::new()
///     .file("training.csv")
///     .missing_sentinel(-999.0)
///     .read_training()
///     .unwrap();
/// ```
pub struct RecordReader<P> {
    file: Option<P>,
    sentinel: f64,
}


impl<P> RecordReader<P> {
    /// Construct a new reader.
    /// The missing-value sentinel defaults to `-999.0`.
    pub fn new() -> Self {
        Self { file: None, sentinel: schema::DEFAULT_MISSING_SENTINEL }
    }


    /// Set the value that marks a missing feature.
    pub fn missing_sentinel(mut self, sentinel: f64) -> Self {
        self.sentinel = sentinel;
        self
    }
}


impl<P> Default for RecordReader<P> {
    fn default() -> Self {
        Self::new()
    }
}


impl<P> RecordReader<P>
    where P: AsRef<Path>
{
    /// Set the file name.
    pub fn file(mut self, file: P) -> Self {
        self.file = Some(file);
        self
    }


    /// Reads an unlabeled file.
    /// This method consumes `self`.
    pub fn read(self) -> Result<RecordSet> {
        let sentinel = self.sentinel;
        let reader = self.open()?;
        read_records(reader, sentinel)
    }


    /// Reads a labeled, weighted file.
    /// This method consumes `self`.
    pub fn read_training(self) -> Result<TrainingSet> {
        let sentinel = self.sentinel;
        let reader = self.open()?;
        read_training(reader, sentinel)
    }


    fn open(self) -> Result<BufReader<File>> {
        let file = self.file
            .expect("The file name is not set. Use `RecordReader::file`.");
        let file = File::open(file)?;
        Ok(BufReader::new(file))
    }
}


/// Reads an unlabeled CSV stream into a [`RecordSet`].
pub fn read_records<R: BufRead>(reader: R, sentinel: f64) -> Result<RecordSet> {
    let table = Table::parse(reader, false)?;
    info!(n_rows = table.event_ids.len(), "read records");
    RecordSet::from_columns(table.event_ids, table.features, sentinel)
}


/// Reads a labeled CSV stream into a [`TrainingSet`].
pub fn read_training<R: BufRead>(reader: R, sentinel: f64) -> Result<TrainingSet> {
    let table = Table::parse(reader, true)?;
    info!(n_rows = table.event_ids.len(), "read training records");
    TrainingSet::from_columns(
        table.event_ids,
        table.features,
        table.weights,
        table.labels,
        sentinel,
    )
}


/// Positions of the columns the reader needs.
struct Layout {
    names: Vec<String>,
    event_id: usize,
    features: [usize; N_FEATURES],
    weight: Option<usize>,
    label: Option<usize>,
}


impl Layout {
    fn from_header(header: &str, training: bool) -> Result<Self> {
        let names = header.split(',')
            .map(|name| name.trim().to_string())
            .collect::<Vec<_>>();
        let position = |column: &str| -> Result<usize> {
            names.iter()
                .position(|name| name == column)
                .ok_or_else(|| ForestError::MissingColumn {
                    column: column.to_string(),
                })
        };

        let event_id = position(schema::EVENT_ID)?;
        let mut features = [0_usize; N_FEATURES];
        for (slot, name) in features.iter_mut().zip(FEATURE_NAMES) {
            *slot = position(name)?;
        }
        let (weight, label) = if training {
            (Some(position(schema::WEIGHT)?), Some(position(schema::LABEL)?))
        } else {
            (None, None)
        };

        Ok(Self { names, event_id, features, weight, label })
    }
}


#[derive(Default)]
struct Table {
    event_ids: Vec<i64>,
    features: Vec<Vec<f64>>,
    weights: Vec<f64>,
    labels: Vec<Label>,
}


impl Table {
    fn parse<R: BufRead>(reader: R, training: bool) -> Result<Self> {
        let mut lines = reader.lines();
        let header = match lines.next() {
            Some(line) => line?,
            None => {
                return Err(ForestError::MissingColumn {
                    column: schema::EVENT_ID.to_string(),
                });
            },
        };
        let layout = Layout::from_header(&header, training)?;

        let mut table = Table {
            features: vec![Vec::new(); N_FEATURES],
            ..Table::default()
        };

        for (i, line) in lines.enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            // Line 1 is the header.
            let line_no = i + 2;
            let cells = line.split(',').map(str::trim).collect::<Vec<_>>();

            let event_id = cell(&cells, &layout, layout.event_id, line_no)?;
            let event_id = event_id.parse::<i64>()
                .map_err(|_| parse_error(&layout, layout.event_id, event_id, line_no))?;
            table.event_ids.push(event_id);

            for (column, &pos) in table.features.iter_mut().zip(&layout.features) {
                column.push(parse_f64(&cells, &layout, pos, line_no)?);
            }

            if let (Some(w), Some(l)) = (layout.weight, layout.label) {
                table.weights.push(parse_f64(&cells, &layout, w, line_no)?);
                table.labels.push(cell(&cells, &layout, l, line_no)?.parse()?);
            }
        }

        Ok(table)
    }
}


fn cell<'a>(cells: &[&'a str], layout: &Layout, pos: usize, line: usize)
    -> Result<&'a str>
{
    cells.get(pos)
        .copied()
        .ok_or_else(|| parse_error(layout, pos, "", line))
}


fn parse_f64(cells: &[&str], layout: &Layout, pos: usize, line: usize)
    -> Result<f64>
{
    let value = cell(cells, layout, pos, line)?;
    value.parse::<f64>()
        .map_err(|_| parse_error(layout, pos, value, line))
}


fn parse_error(layout: &Layout, pos: usize, value: &str, line: usize)
    -> ForestError
{
    ForestError::Parse {
        line,
        column: layout.names[pos].clone(),
        value: value.to_string(),
    }
}
