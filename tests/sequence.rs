use sortbench::{is_sorted, probe::OpCounter, Algorithm, BenchError, Floats, Sortable, Words};

#[test]
fn test_exch_is_self_inverse() {
    let original = Floats::from(vec![3.0, 1.0, 2.0]);
    let mut seq = original.clone();
    seq.exch(0, 2);
    assert_eq!(seq.as_slice(), &[2.0, 1.0, 3.0]);
    seq.exch(0, 2);
    assert_eq!(seq, original);
    seq.exch(1, 1);
    assert_eq!(seq, original);
}

#[test]
fn test_less_is_strict() {
    let seq = Floats::from(vec![1.0, 1.0, 2.0]);
    assert!(!seq.less(0, 1));
    assert!(!seq.less(1, 0));
    assert!(seq.less(1, 2));
    assert!(!seq.less(2, 2));
}

#[test]
fn test_get_and_len() {
    let words: Words = ["b", "a"].iter().map(|w| w.to_string()).collect();
    assert_eq!(words.len(), 2);
    assert!(!words.is_empty());
    assert_eq!(words.get(0), "b");
    assert_eq!(words.get(1), "a");
    assert!(Floats::default().is_empty());
}

#[test]
#[should_panic]
fn test_out_of_range_index_panics() {
    let seq = Floats::from(vec![1.0]);
    seq.less(0, 1);
}

#[test]
fn test_display_separates_with_spaces() {
    let seq = Floats::from(vec![3.1, 1.4, 1.5]);
    assert_eq!(seq.to_string(), "3.1 1.4 1.5");
    assert_eq!(Words::default().to_string(), "");
}

#[test]
fn test_is_sorted() {
    assert!(is_sorted(&Floats::default()));
    assert!(is_sorted(&Floats::from(vec![7.0])));
    assert!(is_sorted(&Floats::from(vec![1.0, 1.0, 2.0])));
    assert!(!is_sorted(&Floats::from(vec![2.0, 1.0])));
    assert!(!is_sorted(&Floats::from(vec![1.0, 3.0, 2.0, 4.0])));
}

#[test]
fn test_is_sorted_stops_at_first_inversion() {
    let seq = OpCounter::new(Floats::from(vec![1.0, 0.0, 3.0, 2.0, 5.0]));
    assert!(!is_sorted(&seq));
    assert_eq!(seq.comparisons(), 1);
    let empty = OpCounter::new(Floats::default());
    assert!(is_sorted(&empty));
    assert_eq!(empty.comparisons(), 0);
}

#[test]
fn test_op_counter_reset() {
    let mut seq = OpCounter::new(Floats::from(vec![2.0, 1.0]));
    Algorithm::InsertionSort.sort(&mut seq);
    assert_eq!((seq.comparisons(), seq.exchanges()), (1, 1));
    seq.reset();
    assert_eq!((seq.comparisons(), seq.exchanges()), (0, 0));
    assert_eq!(seq.into_inner().into_inner(), vec![1.0, 2.0]);
}

#[test]
fn test_algorithm_names_round_trip() -> anyhow::Result<()> {
    for alg in Algorithm::ALL {
        assert_eq!(alg.name().parse::<Algorithm>()?, alg);
        assert_eq!(alg.to_string(), alg.name());
    }
    Ok(())
}

#[test]
fn test_unknown_algorithm_name() {
    let err = "QuickSort".parse::<Algorithm>().unwrap_err();
    assert_eq!(err, BenchError::UnknownAlgorithm("QuickSort".to_owned()));
    assert!(err.to_string().contains("QuickSort"));
    // Names are case sensitive
    assert!("shellsort".parse::<Algorithm>().is_err());
}
