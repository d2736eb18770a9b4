use crate::error::{ForestError, Result};
use super::indexer::Indexer;
use super::label::Label;

use std::io::Write;


const HEADER: &str = "EventId,RankOrder,Class\n";


/// Returns the rank order `1, 2, ..., n`.
pub fn rank_order(n: usize) -> Vec<usize> {
    (1..=n).collect()
}


/// Writes one `EventId,RankOrder,Class` line per row, in row order.
pub fn write_predictions<W: Write>(
    mut writer: W,
    event_ids: Indexer<'_, i64>,
    rank_order: &[usize],
    predictions: &[Label],
) -> Result<()>
{
    let n_rows = event_ids.len();
    if predictions.len() != n_rows {
        return Err(ForestError::LengthMismatch {
            predictions: predictions.len(),
            rows: n_rows,
        });
    }
    if rank_order.len() != n_rows {
        return Err(ForestError::RankOrderMismatch {
            ranks: rank_order.len(),
            rows: n_rows,
        });
    }

    writer.write_all(HEADER.as_bytes())?;
    for ((id, rank), label) in event_ids.iter().zip(rank_order).zip(predictions) {
        writeln!(writer, "{id},{rank},{label}")?;
    }
    writer.flush()?;
    Ok(())
}
