use densityforest::prelude::*;
use densityforest::ForestError;


fn store() -> RecordSet {
    let event_ids = vec![100, 101, 102, 103, 104, 105];
    let features = vec![
        vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0],
        vec![-999.0, 20.0, 30.0, -999.0, 50.0, 60.0],
        vec![0.5, 0.4, -999.0, 0.2, 0.1, 9.0],
    ];
    RecordSet::from_columns(event_ids, features, -999.0).unwrap()
}


#[test]
fn sentinel_becomes_nan() {
    let data = store();
    assert!(data.feature(1).get(0).is_nan());
    assert!(data.feature(1).get(3).is_nan());
    assert!(data.feature(2).get(2).is_nan());
    assert_eq!(data.feature(1).get(1), 20.0);
}


#[test]
fn filter_keeps_flagged_rows_in_order() {
    let data = store();
    let flags = [true, false, true, true, false, true];
    let mask = mask_from_bools(&flags);

    let view = data.filter(&mask);
    assert_eq!(view.len(), flags.iter().filter(|&&f| f).count());
    assert_eq!(view.event_ids().to_vec(), vec![100, 102, 103, 105]);
    assert_eq!(view.feature(0).to_vec(), vec![1.0, 3.0, 4.0, 6.0]);
    assert!(view.shares_backing_with(&data));
}


#[test]
fn filters_compose_on_backing_offsets() {
    let data = store();
    let m1 = mask_from_bools(&[false, true, true, true, true, false]);
    let m2 = mask_from_bools(&[true, false, true, false]);

    let twice = data.filter(&m1).filter(&m2);

    // m2 re-indexed onto the rows m1 keeps.
    let once = data.filter(&mask_from_bools(&[false, true, false, true, false, false]));

    assert_eq!(twice.index(), once.index());
    assert_eq!(twice.index(), &[1, 3]);
    assert_eq!(twice.event_ids().to_vec(), vec![101, 103]);
}


#[test]
fn negated_mask_is_the_complement() {
    let data = store();
    let above = data.feature(0).geq(4.0);
    let below = negate(&above);

    assert_eq!(data.filter(&above).feature(0).to_vec(), vec![4.0, 5.0, 6.0]);
    assert_eq!(data.filter(&below).feature(0).to_vec(), vec![1.0, 2.0, 3.0]);
    assert_eq!(data.feature(0).gt(4.0).count_ones(..), 2);
}


#[test]
fn rows_with_missing_checks_requested_dims() {
    let data = store();

    let missing = data.rows_with_missing(Some(&[1]));
    let flagged = (0..data.len()).filter(|&i| missing.contains(i)).collect::<Vec<_>>();
    assert_eq!(flagged, vec![0, 3]);

    let missing = data.rows_with_missing(Some(&[0]));
    assert_eq!(missing.count_ones(..), 0);

    let missing = data.rows_with_missing(None);
    let flagged = (0..data.len()).filter(|&i| missing.contains(i)).collect::<Vec<_>>();
    assert_eq!(flagged, vec![0, 2, 3]);
}


#[test]
fn global_bounds_ignore_active_subset() {
    let data = store();
    let view = data.filter(&mask_from_bools(&[false, true, true, false, false, false]));

    assert_eq!(view.global_min(), &[1.0, 20.0, 0.1]);
    assert_eq!(view.global_max(), &[6.0, 60.0, 9.0]);
    assert_eq!(view.local_min(None), vec![2.0, 20.0, 0.4]);
    assert_eq!(view.local_max(Some(&[0, 1])), vec![3.0, 30.0]);
}


#[test]
fn indexer_statistics() {
    let data = store();
    let column = data.feature(2);

    assert_eq!(column.min(), 0.1);
    assert_eq!(column.max(), 9.0);
    assert_eq!(column[5], 9.0);
    assert_eq!(data.event_ids().count_eq(104), 1);
    assert_eq!(data.event_ids().equals(104).ones().collect::<Vec<_>>(), vec![4]);
}


#[test]
fn uneven_columns_are_rejected() {
    let features = vec![vec![1.0, 2.0], vec![3.0]];
    let err = RecordSet::from_columns(vec![1, 2], features, -999.0).unwrap_err();
    assert!(matches!(err, ForestError::ColumnLength { expected: 2, got: 1, .. }));
}


#[test]
fn training_filter_carries_annotations() {
    let records = (0..4)
        .map(|i| TrainingRecord {
            record: Record { event_id: i, features: vec![i as f64] },
            weight: 0.5 + i as f64,
            label: if i % 2 == 0 { Label::Signal } else { Label::Background },
        })
        .collect::<Vec<_>>();
    let train = TrainingSet::from_records(&records, -999.0).unwrap();
    assert_eq!(train.count_signal(), 2);

    let view = train.filter(&mask_from_bools(&[false, true, true, true]));
    assert_eq!(view.labels().to_vec(), vec![Label::Background, Label::Signal, Label::Background]);
    assert_eq!(view.weights().sum(), 1.5 + 2.5 + 3.5);
    assert_eq!(view.count_signal(), 1);
}
