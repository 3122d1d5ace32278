//! Comparison-based sorts
//!
//! All four funnel every read through `get`, every exchange through `swap`
//! and every ordering decision through `compare`/`less`/`greater`, so the
//! emitted stream is a complete trace of the sort.

use sortrace_array::ObservedArray;
use sortrace_core::Element;
use std::cmp::Ordering;

/// Bubble sort: repeated adjacent-swap passes.
///
/// After each pass that swapped at least once, the largest element of the
/// scanned range has settled at its tail, so the range shrinks by one. A
/// pass with zero swaps terminates the algorithm early.
pub fn bubble_sort(data: &mut ObservedArray) {
    let mut end = data.len();
    while end > 1 {
        let mut swapped = false;
        for i in 1..end {
            let a = data.get(i - 1);
            let b = data.get(i);
            if data.greater(a, b) {
                data.swap(i - 1, i);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
        end -= 1;
    }
    data.finish();
}

/// Insertion sort: shift each element left via adjacent swaps while its
/// predecessor is greater. Stable, O(n²) worst case.
pub fn insertion_sort(data: &mut ObservedArray) {
    for i in 1..data.len() {
        let mut j = i;
        while j > 0 {
            let prev = data.get(j - 1);
            let cur = data.get(j);
            if data.greater(prev, cur) {
                data.swap(j - 1, j);
                j -= 1;
            } else {
                break;
            }
        }
    }
    data.finish();
}

/// In-place quicksort: median-of-three pivot selection and Hoare partition
/// with crossing scan pointers, recursing on both partitions.
///
/// Recursion depth is O(log n) with this pivot choice. Subranges of 0 or 1
/// elements return immediately; exactly 2 elements do a single
/// compare-and-swap.
pub fn quicksort(data: &mut ObservedArray) {
    if data.len() > 1 {
        let hi = data.len() - 1;
        sort_range(data, 0, hi);
    }
    data.finish();
}

fn sort_range(data: &mut ObservedArray, lo: usize, hi: usize) {
    if hi <= lo {
        return;
    }
    if hi - lo == 1 {
        let a = data.get(lo);
        let b = data.get(hi);
        if data.greater(a, b) {
            data.swap(lo, hi);
        }
        return;
    }
    let p = partition(data, lo, hi);
    sort_range(data, lo, p);
    sort_range(data, p + 1, hi);
}

/// Compare-and-conditionally-swap `lo`, `mid`, `hi` into sorted relative
/// order, leaving the median at `mid`.
fn order_three(data: &mut ObservedArray, lo: usize, mid: usize, hi: usize) {
    let a = data.get(lo);
    let m = data.get(mid);
    if data.greater(a, m) {
        data.swap(lo, mid);
    }
    let m = data.get(mid);
    let b = data.get(hi);
    if data.greater(m, b) {
        data.swap(mid, hi);
        let a = data.get(lo);
        let m = data.get(mid);
        if data.greater(a, m) {
            data.swap(lo, mid);
        }
    }
}

/// Hoare partition around the median-of-three pivot value.
///
/// Returns `p` with `lo <= p < hi`: everything in `lo..=p` sorts no later
/// than everything in `p + 1..=hi`. The pivot is held by value; its
/// provenance index goes stale once the pivot element moves, which only
/// affects how compare events are attributed, not the partition itself.
fn partition(data: &mut ObservedArray, lo: usize, hi: usize) -> usize {
    let mid = lo + (hi - lo) / 2;
    order_three(data, lo, mid, hi);
    let pivot = data.get(mid);
    let mut i = lo;
    let mut j = hi;
    loop {
        loop {
            let v = data.get(i);
            if data.less(v, pivot) {
                i += 1;
            } else {
                break;
            }
        }
        loop {
            let v = data.get(j);
            if data.greater(v, pivot) {
                j -= 1;
            } else {
                break;
            }
        }
        if i >= j {
            return j;
        }
        data.swap(i, j);
        i += 1;
        j -= 1;
    }
}

/// Top-down merge sort: recursive split, stable linear merge into a
/// scratch buffer allocated per merge call, written back via `set` since
/// merged values land at positions they did not come from.
pub fn merge_sort(data: &mut ObservedArray) {
    let len = data.len();
    if len > 1 {
        split(data, 0, len);
    }
    data.finish();
}

fn split(data: &mut ObservedArray, lo: usize, hi: usize) {
    if hi - lo < 2 {
        return;
    }
    let mid = lo + (hi - lo) / 2;
    split(data, lo, mid);
    split(data, mid, hi);
    merge(data, lo, mid, hi);
}

fn merge(data: &mut ObservedArray, lo: usize, mid: usize, hi: usize) {
    let mut merged: Vec<Element> = Vec::with_capacity(hi - lo);
    let mut i = lo;
    let mut j = mid;
    while i < mid && j < hi {
        let a = data.get(i);
        let b = data.get(j);
        // Ties take the left run, which keeps the merge stable.
        if data.compare(a, b) == Ordering::Greater {
            merged.push(b.value());
            j += 1;
        } else {
            merged.push(a.value());
            i += 1;
        }
    }
    while i < mid {
        merged.push(data.get(i).value());
        i += 1;
    }
    while j < hi {
        merged.push(data.get(j).value());
        j += 1;
    }
    for (offset, value) in merged.into_iter().enumerate() {
        data.set(lo + offset, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::seq::SliceRandom;

    fn permutation(n: usize) -> Vec<Element> {
        let mut values: Vec<Element> = (1..=n as Element).collect();
        values.shuffle(&mut rand::thread_rng());
        values
    }

    fn assert_sorts(sort: fn(&mut ObservedArray), sizes: &[usize]) {
        for &size in sizes {
            let mut data = ObservedArray::silent(permutation(size));
            sort(&mut data);
            assert!(data.is_sorted(), "size {} left unsorted", size);
        }
    }

    const FULL_SIZES: [usize; 7] = [5, 10, 100, 250, 1_000, 5_000, 10_000];

    #[test]
    fn test_bubble_sort() {
        assert_sorts(bubble_sort, &FULL_SIZES);
    }

    #[test]
    fn test_bubble_sort_already_sorted_terminates_first_pass() {
        let mut data = ObservedArray::silent((1..=50).collect());
        bubble_sort(&mut data);
        assert!(data.is_sorted());
    }

    #[test]
    fn test_insertion_sort() {
        assert_sorts(insertion_sort, &FULL_SIZES);
    }

    #[test]
    fn test_quicksort() {
        assert_sorts(quicksort, &FULL_SIZES);
    }

    #[test]
    fn test_quicksort_duplicates_and_reversed() {
        let mut data = ObservedArray::silent(vec![5, 3, 5, 1, 3, 5, 1]);
        quicksort(&mut data);
        assert_eq!(data.raw(), vec![1, 1, 3, 3, 5, 5, 5]);

        let mut data = ObservedArray::silent((1..=100).rev().collect());
        quicksort(&mut data);
        assert!(data.is_sorted());
    }

    #[test]
    fn test_merge_sort() {
        assert_sorts(merge_sort, &FULL_SIZES);
    }

    #[test]
    fn test_merge_sort_is_stable_on_values() {
        // Values carry no identity beyond magnitude, so stability shows up
        // as plain correctness with duplicates.
        let mut data = ObservedArray::silent(vec![2, 2, 1, 1, 3, 3]);
        merge_sort(&mut data);
        assert_eq!(data.raw(), vec![1, 1, 2, 2, 3, 3]);
    }

    #[test]
    fn test_tiny_inputs() {
        for sort in [
            bubble_sort,
            insertion_sort,
            quicksort,
            merge_sort as fn(&mut ObservedArray),
        ] {
            let mut empty = ObservedArray::silent(vec![]);
            sort(&mut empty);
            assert!(empty.is_sorted());

            let mut one = ObservedArray::silent(vec![7]);
            sort(&mut one);
            assert_eq!(one.raw(), vec![7]);

            let mut two = ObservedArray::silent(vec![9, 4]);
            sort(&mut two);
            assert_eq!(two.raw(), vec![4, 9]);
        }
    }
}
