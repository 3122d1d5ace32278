//! End-to-end pipeline tests: worker thread producing events through the
//! observable array, consumer thread draining them at a paced cadence.
//!
//! The mirror consumer rebuilds the array state purely from drained events;
//! if the event stream is a complete and ordered record of the run, the
//! mirror ends up sorted.

use sortrace::prelude::*;
use std::time::Duration;

/// Replays swap/modify events onto a copy of the initial data.
struct Mirror {
    values: Vec<Element>,
    accesses: usize,
    compares: usize,
    ended: bool,
}

impl Mirror {
    fn new(initial: Vec<Element>) -> Self {
        Self {
            values: initial,
            accesses: 0,
            compares: 0,
            ended: false,
        }
    }

    fn is_sorted(&self) -> bool {
        self.values.windows(2).all(|w| w[0] <= w[1])
    }
}

impl EventConsumer for Mirror {
    fn on_access(&mut self, _i: usize) {
        self.accesses += 1;
    }

    fn on_compare(&mut self, _i: usize, _j: usize) {
        self.compares += 1;
    }

    fn on_swap(&mut self, i: usize, j: usize) {
        self.values.swap(i, j);
    }

    fn on_modify(&mut self, i: usize, value: Element) {
        // Radix scratch arrays share the stream and have the same length,
        // so scratch writes land on valid indices of the mirror too; the
        // final pass always writes the live array last.
        self.values[i] = value;
    }

    fn on_end(&mut self) {
        self.ended = true;
    }
}

#[test]
fn test_events_fully_determine_the_sorted_result() {
    // Swap-only algorithms: replaying events must reproduce the sort.
    for algo in [Algorithm::Bubble, Algorithm::Insertion, Algorithm::Quick] {
        let data = shuffled_permutation(80);
        let mut mirror = Mirror::new(data.clone());

        let run = SortRun::start(algo, data);
        let stream = run.stream();
        run.drain(&mut mirror, Duration::ZERO).unwrap();

        assert!(mirror.ended, "{} never delivered End", algo);
        assert!(mirror.is_sorted(), "{} mirror left unsorted", algo);
        assert!(mirror.accesses > 0);
        assert!(mirror.compares > 0);
        assert!(stream.empty(), "{} left events behind", algo);
    }
}

#[test]
fn test_merge_sort_modify_events_rebuild_the_array() {
    let data = shuffled_permutation(64);
    let mut mirror = Mirror::new(data.clone());

    let run = SortRun::start(Algorithm::Merge, data);
    run.drain(&mut mirror, Duration::ZERO).unwrap();

    assert!(mirror.ended);
    assert!(mirror.is_sorted());
    let expected: Vec<Element> = (1..=64).collect();
    assert_eq!(mirror.values, expected);
}

#[test]
fn test_distribution_sorts_run_to_completion() {
    for algo in [Algorithm::Radix, Algorithm::RadixSimple, Algorithm::Count] {
        let data = shuffled_permutation(64);
        let mut mirror = Mirror::new(data.clone());

        let run = SortRun::start(algo, data);
        run.drain(&mut mirror, Duration::ZERO).unwrap();

        assert!(mirror.ended, "{} never delivered End", algo);
        assert!(mirror.is_sorted(), "{} mirror left unsorted", algo);
        assert_eq!(mirror.compares, 0, "{} is not comparison-based", algo);
    }
}

#[test]
fn test_paced_drain_respects_the_interval() {
    let run = SortRun::start(Algorithm::Bubble, shuffled_permutation(5));
    let mut mirror = Mirror::new(vec![0; 5]);

    let start = std::time::Instant::now();
    run.drain(&mut mirror, Duration::from_millis(2)).unwrap();
    let elapsed = start.elapsed();

    assert!(mirror.ended);
    // A 5-element bubble run emits well over 10 events; at 2ms per event
    // the drain cannot complete instantly.
    assert!(elapsed >= Duration::from_millis(10), "drained too fast: {:?}", elapsed);
}

#[test]
fn test_run_from_config() {
    let config = RunConfig {
        size: 3, // clamped up to MIN_SIZE
        algorithm: Algorithm::Insertion,
        delay: Duration::ZERO,
    };
    let run = SortRun::with_config(&config);
    let mut mirror = Mirror::new(vec![0; RunConfig::MIN_SIZE]);
    run.drain(&mut mirror, config.delay).unwrap();
    assert!(mirror.ended);
}

#[test]
fn test_next_event_checked_pop() {
    let run = SortRun::start(Algorithm::Quick, shuffled_permutation(10));
    let stream = run.stream();
    run.join().unwrap();

    let mut count = 0;
    while !stream.empty() {
        let record = stream.pop().unwrap();
        count += 1;
        if record.kind == EventKind::End {
            assert!(stream.empty(), "events after End");
        }
    }
    assert!(count > 0);
    assert_eq!(stream.pop(), Err(Error::EmptyStream));
}
