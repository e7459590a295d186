//! Tests for volume bar labelling

use pretty_assertions::assert_eq;
use rstest::*;
use volume_bars::{
    GrouperConfig, GroupingError, ValidationMode, VolumeGrouper, find_volume_groups,
};

/// Grouper that runs degenerate input unchecked
#[fixture]
fn mechanical_grouper(#[default(0)] threshold: i64) -> VolumeGrouper {
    VolumeGrouper::with_config(GrouperConfig {
        threshold,
        mode: ValidationMode::Mechanical,
    })
}

#[rstest]
#[case::crosses_mid_series(vec![10.0, 10.0, 10.0, 10.0], 25, vec![1, 1, 1, 2])]
#[case::every_element_closes(vec![5.0, 5.0, 5.0, 5.0, 5.0], 5, vec![1, 2, 3, 4, 5])]
#[case::single_oversized(vec![100.0], 50, vec![1])]
#[case::never_reached(vec![1.0, 1.0, 1.0], 100, vec![1, 1, 1])]
#[case::trailing_open_bar(vec![50.0, 1.0, 2.0], 50, vec![1, 2, 2])]
#[case::zero_volumes(vec![0.0, 0.0, 3.0, 0.0], 3, vec![1, 1, 1, 2])]
#[case::fractional(vec![0.5, 0.5, 0.5, 0.5], 1, vec![1, 1, 2, 2])]
fn test_known_scenarios(
    #[case] volumes: Vec<f64>,
    #[case] threshold: i64,
    #[case] expected: Vec<u32>,
) {
    assert_eq!(find_volume_groups(&volumes, threshold).unwrap(), expected);
}

#[rstest]
#[case(0)]
#[case(1)]
#[case(-100)]
#[case(i64::MAX)]
fn test_empty_input_any_threshold(#[case] threshold: i64) {
    assert!(find_volume_groups(&[], threshold).unwrap().is_empty());

    let grouper = VolumeGrouper::with_config(GrouperConfig {
        threshold,
        mode: ValidationMode::Mechanical,
    });
    assert!(grouper.group(&[]).unwrap().is_empty());
}

#[test]
fn test_overshoot_is_discarded_at_boundary() {
    // 30 closes bar 1 at threshold 25; the extra 5 does not carry over
    let labels = find_volume_groups(&[30.0, 20.0, 5.0], 25).unwrap();
    assert_eq!(labels, vec![1, 2, 2]);
}

#[rstest]
#[case(0)]
#[case(-1)]
fn test_strict_rejects_non_positive_threshold(#[case] threshold: i64) {
    let err = find_volume_groups(&[1.0, 2.0], threshold).unwrap_err();
    match err {
        GroupingError::InvalidThreshold { threshold: t } => assert_eq!(t, threshold),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_strict_reports_negative_volume_index() {
    let err = find_volume_groups(&[4.0, 1.0, -0.5], 10).unwrap_err();
    match err {
        GroupingError::InvalidVolume { index, value, .. } => {
            assert_eq!(index, 2);
            assert_eq!(value, -0.5);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[rstest]
#[case(f64::NAN)]
#[case(f64::INFINITY)]
#[case(f64::NEG_INFINITY)]
fn test_non_finite_volume_rejected(mechanical_grouper: VolumeGrouper, #[case] bad: f64) {
    let err = mechanical_grouper.group(&[1.0, bad]).unwrap_err();
    assert!(matches!(err, GroupingError::InvalidVolume { index: 1, .. }));
}

#[rstest]
fn test_mechanical_zero_threshold_splits_every_element(mechanical_grouper: VolumeGrouper) {
    let labels = mechanical_grouper.group(&[7.0, 2.0, 9.0, 1.0]).unwrap();
    assert_eq!(labels, vec![1, 2, 3, 4]);
}

#[rstest]
fn test_mechanical_negative_threshold(#[with(-5)] mechanical_grouper: VolumeGrouper) {
    // -7 sits below -5 until the next 2 lifts the total back to it
    let labels = mechanical_grouper.group(&[-7.0, 2.0, 1.0]).unwrap();
    assert_eq!(labels, vec![1, 1, 2]);
}

#[rstest]
fn test_mechanical_negative_volumes(#[with(10)] mechanical_grouper: VolumeGrouper) {
    let labels = mechanical_grouper.group(&[8.0, -4.0, 6.0, 3.0, 1.0]).unwrap();
    assert_eq!(labels, vec![1, 1, 1, 2, 2]);
}

#[test]
fn test_accessors() {
    let grouper = VolumeGrouper::new(250);
    assert_eq!(grouper.threshold(), 250);
    assert_eq!(grouper.mode(), ValidationMode::Strict);
    assert_eq!(VolumeGrouper::default().threshold(), 1);
}
