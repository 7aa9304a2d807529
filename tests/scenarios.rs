//! Concrete end-to-end scenarios for the runner.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use sortviz::prelude::*;

fn record(name: &str, values: Vec<u32>) -> (RunOutcome<u32>, RecordingSink<u32>) {
    let mut sink = RecordingSink::new();
    let outcome = run_named(name, values, &mut sink, &CancellationToken::new())
        .expect("known algorithm");
    (outcome, sink)
}

#[test]
fn bubble_sorts_small_array_with_swaps() {
    let (outcome, sink) = record("bubble", vec![5, 3, 8, 1]);
    assert_eq!(outcome.values, vec![1, 3, 5, 8]);
    assert!(outcome.stats.swaps > 0);
    assert_eq!(outcome.stats.swaps, sink.count(Role::Swap) as u64);
    assert_eq!(
        sink.descriptions().last().map(String::as_str),
        Some("Bubble Sort completed! Array is now sorted.")
    );
}

#[test]
fn bubble_last_pass_has_no_swaps() {
    // One swap in the first pass, then a clean pass ends the loop early.
    let (outcome, sink) = record("bubble", vec![2, 1, 3, 4]);
    assert_eq!(outcome.values, vec![1, 2, 3, 4]);
    assert_eq!(outcome.stats.swaps, 1);

    let last_swap = sink
        .events()
        .iter()
        .rposition(|e| e.role() == Some(Role::Swap))
        .expect("one swap");
    let compares_after = sink.events()[last_swap..]
        .iter()
        .filter(|e| e.role() == Some(Role::Compare))
        .count();
    assert!(compares_after >= 2, "a full pass follows the last swap");
}

#[test]
fn selection_picks_first_minimum() {
    let (outcome, sink) = record("selection", vec![4, 4, 2]);
    assert_eq!(outcome.values, vec![2, 4, 4]);
    assert_eq!(sink.indices(Role::Swap), vec![vec![0, 2]]);
}

#[test]
fn merge_on_empty_reports_nothing() {
    let (outcome, sink) = record("merge", Vec::new());
    assert!(outcome.values.is_empty());
    assert!(outcome.completed);
    assert!(sink.events().is_empty());
    assert_eq!(sink.pace_count(), 0);
}

#[test]
fn quick_on_single_element_never_compares() {
    let (outcome, sink) = record("quick", vec![1]);
    assert_eq!(outcome.values, vec![1]);
    assert_eq!(outcome.stats.comparisons, 0);
    assert_eq!(sink.count(Role::Compare), 0);
}

#[test]
fn heap_sorts_five_elements() {
    let (outcome, _) = record("heap", vec![9, 5, 7, 1, 3]);
    assert_eq!(outcome.values, vec![1, 3, 5, 7, 9]);
    assert_eq!(outcome.executed, SortKind::Heap);
}

#[test]
fn quick_reports_pivots() {
    let (outcome, sink) = record("quick", vec![3, 6, 1, 8, 2]);
    assert_eq!(outcome.values, vec![1, 2, 3, 6, 8]);
    assert!(sink.count(Role::Pivot) > 0);
    // Lomuto: the first pivot is the last element of the full range.
    assert_eq!(sink.indices(Role::Pivot).first(), Some(&vec![4]));
}

#[test]
fn shell_falls_back_to_insertion_with_one_notice() {
    let (outcome, sink) = record("shell", vec![5, 2, 4, 1]);
    assert_eq!(outcome.values, vec![1, 2, 4, 5]);
    assert_eq!(outcome.algorithm, Algorithm::Shell);
    assert_eq!(outcome.executed, SortKind::Insertion);

    let notices: Vec<String> = sink
        .descriptions()
        .into_iter()
        .filter(|d| d.contains("not implemented yet"))
        .collect();
    assert_eq!(
        notices,
        vec!["Shell Sort is not implemented yet, falling back to Insertion Sort".to_string()]
    );
    assert_eq!(sink.descriptions().first(), notices.first());
}

#[test]
fn every_placeholder_names_its_fallback() {
    for algorithm in Algorithm::ALL.into_iter().filter(|a| a.is_placeholder()) {
        let mut sink = RecordingSink::new();
        let outcome = run(algorithm, vec![2, 1], &mut sink, &CancellationToken::new());
        let Implementation::Fallback { substitute, .. } = algorithm.implementation() else {
            panic!("{algorithm} should be a placeholder");
        };
        assert_eq!(outcome.executed, substitute);
        assert_eq!(
            sink.descriptions().first().cloned(),
            Some(format!(
                "{} is not implemented yet, falling back to {}",
                algorithm.name(),
                substitute.name()
            ))
        );
    }
}

#[test]
fn unknown_algorithm_is_an_error_and_reports_nothing() {
    let mut sink: RecordingSink<u32> = RecordingSink::new();
    let result = run_named("bogo", vec![3, 2, 1], &mut sink, &CancellationToken::new());
    match result {
        Err(SortError::UnsupportedAlgorithm { name, .. }) => assert_eq!(name, "bogo"),
        other => panic!("expected UnsupportedAlgorithm, got {other:?}"),
    }
    assert!(sink.events().is_empty());
}

#[test]
fn generated_patterns_sort_with_every_real_algorithm() {
    let mut rng = SeededRng::new(7);
    for pattern in Pattern::ALL {
        let input = pattern.generate(30, &mut rng);
        for kind in SortKind::ALL {
            let mut sink = NullSink;
            let outcome = run(
                kind.as_algorithm(),
                input.clone(),
                &mut sink,
                &CancellationToken::new(),
            );
            assert!(is_sorted(&outcome.values), "{} on {}", kind.name(), pattern.label());
        }
    }
}
