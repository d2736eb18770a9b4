use approx::assert_relative_eq;

use densityforest::common::metrics::{
    BACKGROUND_REGULARIZER,
    TOTAL_BACKGROUND_WEIGHT,
    TOTAL_SIGNAL_WEIGHT,
};
use densityforest::prelude::*;


#[test]
fn ams_of_known_sums() {
    let b_r = BACKGROUND_REGULARIZER;
    let (s, b) = (10.0_f64, 100.0_f64);
    let want = (2.0 * ((s + b + b_r) * (1.0 + s / (b + b_r)).ln() - s)).sqrt();

    assert_relative_eq!(ams_from_sums(s, b).unwrap(), want, max_relative = 1e-12);
    assert_eq!(ams_from_sums(0.0, 0.0).unwrap(), 0.0);
}


#[test]
fn negative_radicand_is_an_error() {
    let err = ams_from_sums(1.0, -20.0).unwrap_err();
    match err {
        ForestError::AmsDomain { radicand } => assert!(radicand < 0.0),
        other => panic!("unexpected error: {other}"),
    }

    // 0 * ln(0) is not a number.
    let err = ams_from_sums(1.0, -11.0).unwrap_err();
    assert!(matches!(err, ForestError::AmsDomain { radicand } if radicand.is_nan()));
}


#[test]
fn ams_rescales_class_weights() {
    let labels = vec![Label::Signal, Label::Signal, Label::Background, Label::Background];
    let train = TrainingSet::from_columns(
        vec![1, 2, 3, 4],
        vec![vec![0.0; 4]],
        vec![1.0, 1.0, 2.0, 2.0],
        labels,
        -999.0,
    ).unwrap();

    let predictions = [Label::Signal, Label::Background, Label::Signal, Label::Background];
    let s = TOTAL_SIGNAL_WEIGHT / 2.0;
    let b = 2.0 * TOTAL_BACKGROUND_WEIGHT / 4.0;

    assert_relative_eq!(
        ams(&predictions, &train).unwrap(),
        ams_from_sums(s, b).unwrap(),
        max_relative = 1e-12
    );
}


#[test]
fn ams_needs_one_prediction_per_row() {
    let train = TrainingSet::from_columns(
        vec![1, 2],
        vec![vec![0.0; 2]],
        vec![1.0, 1.0],
        vec![Label::Signal, Label::Background],
        -999.0,
    ).unwrap();

    let err = ams(&[Label::Signal], &train).unwrap_err();
    assert!(matches!(err, ForestError::LengthMismatch { predictions: 1, rows: 2 }));
}
