use approx::assert_relative_eq;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use densityforest::density_tree::{entropy, Node};
use densityforest::prelude::*;


fn labeled(values: &[f64], labels: &[Label]) -> TrainingSet {
    let event_ids = (0..values.len() as i64).collect();
    let weights = vec![1.0; values.len()];
    TrainingSet::from_columns(
        event_ids,
        vec![values.to_vec()],
        weights,
        labels.to_vec(),
        -999.0,
    )
    .unwrap()
}


#[test]
fn entropy_of_pure_and_even_partitions() {
    assert_eq!(entropy(&[10, 0]), 0.0);
    assert_eq!(entropy(&[0, 3]), 0.0);
    for n in [1, 4, 37, 1000] {
        assert_relative_eq!(entropy(&[n, n]), 1.0);
    }
}


#[test]
fn region_split_keeps_threshold_in_upper() {
    let region = Region::new(vec![0.0, 0.0], vec![4.0, 2.0]);
    assert_relative_eq!(region.volume(), 8.0);

    let (upper, lower) = region.split(0, 1.0);
    assert_eq!(upper.min(), &[1.0, 0.0]);
    assert_eq!(lower.max(), &[1.0, 2.0]);
    assert_eq!(lower.include_max(), &[false, true]);
    assert!(upper.contains(&[1.0, 1.0]));
    assert!(!lower.contains(&[1.0, 1.0]));
    assert!(lower.contains(&[0.5, 2.0]));
}


#[test]
fn zero_depth_tree_is_a_single_leaf() {
    let values = [0.0, 1.0, 2.0, 3.0, 4.0, 10.0];
    let labels = [Label::Signal, Label::Signal, Label::Background,
                  Label::Signal, Label::Background, Label::Background];
    let train = labeled(&values, &labels);
    let mut rng = ChaCha8Rng::seed_from_u64(0);

    let tree = DensityTreeBuilder::new(&train, vec![0])
        .max_depth(0)
        .build(&mut rng);

    assert_eq!(tree.nodes().len(), 1);
    assert!(tree.root().is_leaf());
    assert_eq!(tree.depth(), 0);

    let scale = tree.root().region().volume() * tree.normalizer();
    let density = tree.root().density();
    assert_relative_eq!(density.signal * scale, 3.0);
    assert_relative_eq!(density.background * scale, 3.0);
}


#[test]
fn four_rows_split_between_classes() {
    let train = labeled(
        &[1.0, 2.0, 8.0, 9.0],
        &[Label::Signal, Label::Signal, Label::Background, Label::Background],
    );
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    let tree = DensityTreeBuilder::new(&train, vec![0])
        .max_depth(1)
        .min_points(1)
        .build(&mut rng);

    assert_eq!(tree.n_leaves(), 2);
    assert_eq!(tree.normalizer(), 4.0);

    let branch = match tree.root() {
        Node::Branch(branch) => branch,
        Node::Leaf(_) => panic!("the root must split"),
    };
    let threshold = branch.rule().threshold();
    assert!(threshold > 2.0 && threshold <= 8.0, "threshold {threshold}");

    let upper = tree.node(branch.upper()).density();
    let lower = tree.node(branch.lower()).density();
    assert_eq!(upper.signal, 0.0);
    assert_relative_eq!(upper.background, 2.0 / ((9.0 - threshold) * 4.0));
    assert_relative_eq!(lower.signal, 2.0 / ((threshold - 1.0) * 4.0));
    assert_eq!(lower.background, 0.0);

    let score = tree.score(&train, false);
    assert_relative_eq!(score.signal[0], lower.signal);
    assert_relative_eq!(score.signal[1], lower.signal);
    assert_relative_eq!(score.background[2], upper.background);
    assert_relative_eq!(score.background[3], upper.background);
}


#[test]
fn pure_node_stays_a_leaf() {
    let train = labeled(&[1.0, 2.0, 3.0, 4.0], &[Label::Signal; 4]);
    let mut rng = ChaCha8Rng::seed_from_u64(3);

    let tree = DensityTreeBuilder::new(&train, vec![0])
        .max_depth(5)
        .min_points(0)
        .build(&mut rng);

    assert!(tree.root().is_leaf());
}


#[test]
fn missing_target_value_scores_nan() {
    let event_ids = (0..8).collect();
    let features = vec![
        vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0],
        vec![7.0, 6.0, 5.0, 4.0, 3.0, 2.0, 1.0, 0.0],
        vec![1.0; 8],
    ];
    let labels = (0..8)
        .map(|i| if i < 4 { Label::Signal } else { Label::Background })
        .collect();
    let train = TrainingSet::from_columns(
        event_ids, features, vec![1.0; 8], labels, -999.0
    ).unwrap();

    let mut rng = ChaCha8Rng::seed_from_u64(11);
    let tree = DensityTreeBuilder::new(&train, vec![0, 1])
        .max_depth(3)
        .min_points(1)
        .build(&mut rng);

    let test = RecordSet::from_columns(
        vec![1, 2, 3, 4],
        vec![
            vec![-999.0, 1.0, -999.0, 2.5],
            vec![3.0, -999.0, -999.0, 2.5],
            vec![-999.0, -999.0, -999.0, -999.0],
        ],
        -999.0,
    ).unwrap();

    let score = tree.score(&test, false);
    for i in 0..3 {
        assert!(score.signal[i].is_nan());
        assert!(score.background[i].is_nan());
    }
    // Dimension 2 is not a target, so its missing value does not matter.
    assert!(!score.signal[3].is_nan());
    assert!(!score.background[3].is_nan());
}


#[test]
fn scores_follow_caller_row_order() {
    let values = [1.0, 2.0, 3.0, 7.0, 8.0, 9.0];
    let labels = [Label::Signal, Label::Signal, Label::Signal,
                  Label::Background, Label::Background, Label::Background];
    let train = labeled(&values, &labels);
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let tree = DensityTreeBuilder::new(&train, vec![0])
        .max_depth(2)
        .min_points(1)
        .build(&mut rng);

    let flipped = train.filter(&mask_from_bools(&[true, false, true, true, false, true]));
    let score = tree.score(&flipped, false);
    let full = tree.score(&train, false);

    assert_eq!(score.signal, vec![full.signal[0], full.signal[2], full.signal[3], full.signal[5]]);
    assert_eq!(
        score.background,
        vec![full.background[0], full.background[2], full.background[3], full.background[5]]
    );
}


#[test]
fn leaf_densities_add_up_to_row_counts() {
    let n = 200;
    let values = (0..n).map(|i| (i as f64 * 0.37).sin() * 10.0).collect::<Vec<_>>();
    let labels = values.iter()
        .map(|&x| if x > 2.0 { Label::Signal } else { Label::Background })
        .collect::<Vec<_>>();
    let train = labeled(&values, &labels);
    let mut rng = ChaCha8Rng::seed_from_u64(8);
    let tree = DensityTreeBuilder::new(&train, vec![0]).build(&mut rng);

    let (signal, background) = tree.nodes()
        .iter()
        .filter(|node| node.is_leaf())
        .map(|node| {
            let scale = node.region().volume() * tree.normalizer();
            let density = node.density();
            (density.signal * scale, density.background * scale)
        })
        .fold((0.0, 0.0), |(s, b), (ds, db)| (s + ds, b + db));

    assert_relative_eq!(signal, train.count_signal() as f64, epsilon = 1e-6);
    assert_relative_eq!(background, (n - train.count_signal()) as f64, epsilon = 1e-6);
}
