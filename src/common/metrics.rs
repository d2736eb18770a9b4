//! The approximate median significance (AMS),
//! the metric used to pick the classification cutoff.
use crate::error::{ForestError, Result};
use crate::sample::{Label, TrainingSet};


/// Reference total weight of the signal class.
pub const TOTAL_SIGNAL_WEIGHT: f64 = 691.0;
/// Reference total weight of the background class.
pub const TOTAL_BACKGROUND_WEIGHT: f64 = 410_000.0;
/// Regularisation term added to the background sum.
pub const BACKGROUND_REGULARIZER: f64 = 10.0;


/// Computes the AMS of `predictions` against the labeled rows of `actual`.
///
/// Class weights are rescaled so that their totals match
/// [`TOTAL_SIGNAL_WEIGHT`] and [`TOTAL_BACKGROUND_WEIGHT`];
/// `s` and `b` are the rescaled weight sums of the true and
/// false positives.
pub fn ams(predictions: &[Label], actual: &TrainingSet) -> Result<f64> {
    if predictions.len() != actual.len() {
        return Err(ForestError::LengthMismatch {
            predictions: predictions.len(),
            rows: actual.len(),
        });
    }

    let labels = actual.labels();
    let weights = actual.weights();

    let (total_s, total_b) = labels.iter()
        .zip(weights.iter())
        .fold((0f64, 0f64), |(s, b), (y, w)| {
            if y.is_signal() { (s + w, b) } else { (s, b + w) }
        });
    let scale_s = TOTAL_SIGNAL_WEIGHT / total_s;
    let scale_b = TOTAL_BACKGROUND_WEIGHT / total_b;

    let (s, b) = predictions.iter()
        .zip(labels.iter().zip(weights.iter()))
        .filter(|(p, _)| p.is_signal())
        .fold((0f64, 0f64), |(s, b), (_, (y, w))| {
            if y.is_signal() { (s + w * scale_s, b) } else { (s, b + w * scale_b) }
        });

    ams_from_sums(s, b)
}


/// Computes `sqrt(2((s + b + b_r) ln(1 + s / (b + b_r)) - s))`.
///
/// Fails with [`ForestError::AmsDomain`] when the radicand is negative
/// or not a number, instead of returning `NaN`.
pub fn ams_from_sums(s: f64, b: f64) -> Result<f64> {
    let b_r = BACKGROUND_REGULARIZER;
    let radicand = 2f64 * ((s + b + b_r) * (s / (b + b_r)).ln_1p() - s);

    if radicand.is_nan() || radicand < 0f64 {
        return Err(ForestError::AmsDomain { radicand });
    }
    Ok(radicand.sqrt())
}
