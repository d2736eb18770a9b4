use approx::assert_relative_eq;

use densityforest::prelude::*;

use std::sync::atomic::{AtomicUsize, Ordering};


/// Returns a fixed score and counts how often it was asked.
struct Counting {
    score: Score,
    calls: AtomicUsize,
}


impl Counting {
    fn new(signal: Vec<f64>, background: Vec<f64>) -> Self {
        Self {
            score: Score { signal, background },
            calls: AtomicUsize::new(0),
        }
    }
}


impl Scorer for Counting {
    fn score(&self, _data: &RecordSet, _parallel: bool) -> Score {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.score.clone()
    }
}


fn training_set(labels: &[Label], weights: &[f64]) -> TrainingSet {
    let n = labels.len();
    TrainingSet::from_columns(
        (0..n as i64).collect(),
        vec![vec![0.0; n]],
        weights.to_vec(),
        labels.to_vec(),
        -999.0,
    )
    .unwrap()
}


#[test]
fn ratio_equal_to_cutoff_is_signal() {
    let data = training_set(&[Label::Signal; 5], &[1.0; 5]);
    let scorer = Counting::new(
        vec![2.0, 1.0, 3.0, f64::NAN, 1.0],
        vec![4.0, 4.0, 1.0, 1.0, 0.0],
    );

    let classifier = Classifier::new(&scorer).with_cutoff(0.5);
    assert_eq!(classifier.cutoff(), 0.5);
    assert_eq!(
        classifier.classify(&data, false),
        vec![Label::Signal, Label::Background, Label::Signal, Label::Background, Label::Signal],
    );
}


#[test]
fn default_cutoff_is_one() {
    let data = training_set(&[Label::Signal; 2], &[1.0; 2]);
    let scorer = Counting::new(vec![1.0, 0.99], vec![1.0, 1.0]);

    let mut classifier = Classifier::new(&scorer);
    assert_eq!(classifier.cutoff(), 1.0);
    assert_eq!(classifier.classify(&data, false), vec![Label::Signal, Label::Background]);

    classifier.set_cutoff(0.9);
    assert_eq!(classifier.classify(&data, false), vec![Label::Signal, Label::Signal]);
}


#[test]
fn default_grid_spans_half_units() {
    let exponents = CutoffSearch::new().exponents();
    assert_eq!(exponents.len(), 11);
    assert_relative_eq!(exponents[0], -0.5);
    assert_relative_eq!(exponents[5], 0.0, epsilon = 1e-12);
    assert_relative_eq!(exponents[10], 0.5, epsilon = 1e-12);
}


#[test]
fn cutoff_search_picks_best_ams_and_scores_once() {
    let labels = [
        Label::Signal, Label::Signal, Label::Signal,
        Label::Background, Label::Background, Label::Background,
    ];
    let weights = [1.0, 2.0, 1.5, 30.0, 20.0, 40.0];
    let train = training_set(&labels, &weights);

    // Ratios e^0.45, e^0.25, e^-0.15, e^0.35, e^-0.05, e^-0.45.
    let signal = [0.45, 0.25, -0.15, 0.35, -0.05, -0.45]
        .iter()
        .map(|x: &f64| x.exp())
        .collect::<Vec<_>>();
    let scorer = Counting::new(signal, vec![1.0; 6]);

    let choice = CutoffSearch::new()
        .verbose(true)
        .run(&scorer, &train, false)
        .unwrap();
    assert_eq!(scorer.calls.load(Ordering::SeqCst), 1);

    let mut best = f64::NEG_INFINITY;
    for exponent in CutoffSearch::new().exponents() {
        let classifier = Classifier::new(&scorer).with_cutoff(exponent.exp());
        let value = ams(&classifier.classify(&train, false), &train).unwrap();
        best = best.max(value);
    }
    assert_relative_eq!(choice.ams, best);
    assert_relative_eq!(choice.cutoff, choice.exponent.exp());
}
