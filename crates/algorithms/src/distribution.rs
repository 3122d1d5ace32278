//! Distribution sorts: radix and counting
//!
//! These never compare values; they redistribute them keyed on bytes,
//! decimal digits, or the full value. Redistribution writes go through
//! `set` (Modify events) because values land at positions they were not
//! read from.

use sortrace_array::ObservedArray;
use sortrace_core::Element;
use std::collections::VecDeque;
use std::mem;

/// One stable counting-sort pass per byte of the element.
const RADIX_PASSES: usize = mem::size_of::<Element>();

/// Byte-keyed radix sort.
///
/// Runs [`RADIX_PASSES`] stable counting-sort passes, one per byte from
/// least to most significant, ping-ponging between the live array and an
/// equal-length scratch array that reports into the same sink: even passes
/// go live to scratch, odd passes scratch back to live. With a four-byte
/// element the final pass lands the fully sorted sequence back in the live
/// array.
pub fn radix_sort(data: &mut ObservedArray) {
    let len = data.len();
    if len > 1 {
        let mut scratch = ObservedArray::new(vec![0; len], data.sink());
        for pass in 0..RADIX_PASSES {
            if pass % 2 == 0 {
                counting_pass(data, &mut scratch, pass);
            } else {
                counting_pass(&mut scratch, data, pass);
            }
        }
    }
    data.finish();
}

/// One stable counting-sort pass keyed on byte `byte` of each value.
///
/// First scan counts bucket sizes; a prefix sum turns counts into bucket
/// offsets; the second scan places each value at its bucket offset in
/// `dst`, preserving source order within a bucket.
pub(crate) fn counting_pass(src: &mut ObservedArray, dst: &mut ObservedArray, byte: usize) {
    let shift = byte as u32 * 8;
    let mut offsets = [0usize; 257];
    for i in 0..src.len() {
        let value = src.get(i).value();
        let bucket = ((value >> shift) & 0xFF) as usize;
        offsets[bucket + 1] += 1;
    }
    for b in 1..offsets.len() {
        offsets[b] += offsets[b - 1];
    }
    for i in 0..src.len() {
        let value = src.get(i).value();
        let bucket = ((value >> shift) & 0xFF) as usize;
        dst.set(offsets[bucket], value);
        offsets[bucket] += 1;
    }
}

/// Decimal LSD radix sort.
///
/// One pass per decimal digit of the maximum value: redistribute every
/// value through ten transient queues by the current digit, then write the
/// queues back in digit order. Stops once `max / pow == 0`.
pub fn radix_sort_simple(data: &mut ObservedArray) {
    let len = data.len();
    if len > 1 {
        let mut max: Element = 0;
        for i in 0..len {
            let value = data.get(i).value();
            if value > max {
                max = value;
            }
        }

        let mut pow: u64 = 1;
        while u64::from(max) / pow > 0 {
            let mut buckets: Vec<VecDeque<Element>> = vec![VecDeque::new(); 10];
            for i in 0..len {
                let value = data.get(i).value();
                let digit = ((u64::from(value) / pow) % 10) as usize;
                buckets[digit].push_back(value);
            }
            let mut index = 0;
            for bucket in &mut buckets {
                while let Some(value) = bucket.pop_front() {
                    data.set(index, value);
                    index += 1;
                }
            }
            pow *= 10;
        }
    }
    data.finish();
}

/// Counting sort over the full value range.
///
/// Counts occurrences of every value via observed reads, then rebuilds the
/// array in value order via `set`. Equivalent to one radix pass generalized
/// to the whole range.
pub fn count_sort(data: &mut ObservedArray) {
    let len = data.len();
    if len > 1 {
        let mut max: Element = 0;
        for i in 0..len {
            let value = data.get(i).value();
            if value > max {
                max = value;
            }
        }

        let mut counts = vec![0usize; max as usize + 1];
        for i in 0..len {
            counts[data.get(i).value() as usize] += 1;
        }

        let mut index = 0;
        for (value, &count) in counts.iter().enumerate() {
            for _ in 0..count {
                data.set(index, value as Element);
                index += 1;
            }
        }
    }
    data.finish();
}
