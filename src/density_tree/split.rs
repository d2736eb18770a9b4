use rand::Rng;

use crate::common::type_and_struct::{Gain, Threshold};
use crate::sample::{Indexer, Label, TrainingSet};
use super::node::SplitRule;


/// Number of random thresholds examined per target dimension.
pub const N_CANDIDATES: usize = 5;


/// Binary Shannon entropy (base 2) of the given class counts.
/// Empty classes contribute zero.
pub fn entropy(counts: &[usize]) -> f64 {
    let total = counts.iter().sum::<usize>() as f64;
    if total == 0f64 {
        return 0f64;
    }

    counts.iter()
        .copied()
        .filter(|&c| c > 0)
        .map(|c| {
            let p = c as f64 / total;
            -p * p.log2()
        })
        .sum::<f64>()
}


/// Finds the split with the largest information gain over
/// `N_CANDIDATES` thresholds drawn uniformly between the local
/// bounds of each target dimension.
///
/// Returns `None` if no candidate has a strictly positive gain.
pub(super) fn best_split<R: Rng>(
    sample: &TrainingSet,
    dims: &[usize],
    rng: &mut R,
) -> Option<SplitRule>
{
    let n_sample = sample.len();
    if n_sample == 0 {
        return None;
    }

    let labels = sample.labels();
    let n_signal = labels.count_eq(Label::Signal);
    let total = entropy(&[n_signal, n_sample - n_signal]);

    let mut best_gain = Gain::from(0f64);
    let mut best_rule = None;
    for (local, &dim) in dims.iter().enumerate() {
        let column = sample.feature(dim);
        let (lo, hi) = (column.min(), column.max());
        if !lo.is_finite() || !hi.is_finite() {
            continue;
        }

        for _ in 0..N_CANDIDATES {
            let threshold = lo + rng.gen::<f64>() * (hi - lo);
            let gain = information_gain(column, labels, threshold, total);

            if gain > best_gain {
                best_gain = gain;
                best_rule = Some(SplitRule {
                    dim: local,
                    threshold: Threshold::from(threshold),
                });
            }
        }
    }

    best_rule
}


fn information_gain(
    column: Indexer<'_, f64>,
    labels: Indexer<'_, Label>,
    threshold: f64,
    total: f64,
) -> Gain
{
    // [signal, background] counts on each side.
    let mut above = [0usize; 2];
    let mut below = [0usize; 2];
    column.iter()
        .zip(labels.iter())
        .for_each(|(x, y)| {
            let side = if x >= threshold { &mut above } else { &mut below };
            side[usize::from(!y.is_signal())] += 1;
        });

    let n_above = (above[0] + above[1]) as f64;
    let n_below = (below[0] + below[1]) as f64;
    let n_sample = n_above + n_below;

    let p_above = n_above / n_sample;
    let p_below = n_below / n_sample;
    let conditional = p_above * entropy(&above) + p_below * entropy(&below);

    Gain::from(total - conditional)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pure_partition_has_no_entropy() {
        assert_eq!(entropy(&[7, 0]), 0f64);
        assert_eq!(entropy(&[0, 0]), 0f64);
    }


    #[test]
    fn even_partition_has_one_bit() {
        for n in [1, 2, 50, 1_000] {
            assert!((entropy(&[n, n]) - 1f64).abs() < 1e-12);
        }
    }
}
