//! The observable container
//!
//! # Design
//!
//! A fixed-length sequence of [`Observed`] values. Length never changes
//! after construction; only values and positions mutate. Every positional
//! read or write emits a record through the injected [`EventSink`], so the
//! event stream is a complete replay of what the algorithm did.
//!
//! # Thread Safety
//!
//! The array holds no internal lock. It is safe because exactly one thread
//! (the worker) ever touches it; the consumer only sees the events it
//! emitted.

use crate::observed::Observed;
use sortrace_core::{Element, EventRecord};
use sortrace_stream::{EventSink, SilentSink};
use std::cmp::Ordering;
use std::sync::Arc;

/// Instrumented sequence of values.
///
/// # Panics
///
/// Every indexed operation panics on an out-of-range index. A broken
/// algorithm is a fatal contract violation; the system halts rather than
/// corrupting the event record.
///
/// # Example
///
/// ```
/// use sortrace_array::ObservedArray;
///
/// let mut data = ObservedArray::silent(vec![2, 1]);
/// let a = data.get(0);
/// let b = data.get(1);
/// if data.greater(a, b) {
///     data.swap(0, 1);
/// }
/// data.finish();
/// assert!(data.is_sorted());
/// ```
pub struct ObservedArray {
    slots: Vec<Observed>,
    sink: Arc<dyn EventSink>,
}

impl ObservedArray {
    /// Build an array over `data`, emitting through `sink`.
    pub fn new(data: Vec<Element>, sink: Arc<dyn EventSink>) -> Self {
        let slots = data
            .into_iter()
            .enumerate()
            .map(|(i, value)| Observed::new(value, i))
            .collect();
        Self { slots, sink }
    }

    /// Build an array that discards every event.
    pub fn silent(data: Vec<Element>) -> Self {
        Self::new(data, Arc::new(SilentSink))
    }

    /// Number of slots. Pure bookkeeping; emits nothing.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// True iff the array holds no slots.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Clone of the injected sink.
    ///
    /// Distribution sorts use this to build an equal-length scratch array
    /// that reports into the same stream.
    pub fn sink(&self) -> Arc<dyn EventSink> {
        Arc::clone(&self.sink)
    }

    /// Read slot `index`.
    ///
    /// Emits `Access(index, 0)`, stamps the slot's provenance index, and
    /// returns a copy carrying that provenance.
    pub fn get(&mut self, index: usize) -> Observed {
        self.check(index);
        self.sink.emit(EventRecord::access(index as u32));
        let slot = &mut self.slots[index];
        slot.set_index(index);
        *slot
    }

    /// Exchange slots `i` and `j` in place. Emits `Swap(i, j)`.
    pub fn swap(&mut self, i: usize, j: usize) {
        self.check(i);
        self.check(j);
        self.sink.emit(EventRecord::swap(i as u32, j as u32));
        self.slots.swap(i, j);
    }

    /// Overwrite slot `index` with `value`. Emits `Modify(index, value)`.
    ///
    /// Used when an algorithm computes a value out of band (merge writes,
    /// counting/radix redistribution) instead of deriving it from a swap.
    pub fn set(&mut self, index: usize, value: Element) {
        self.check(index);
        self.sink.emit(EventRecord::modify(index as u32, value));
        self.slots[index] = Observed::new(value, index);
    }

    /// Compare two extracted values numerically.
    ///
    /// Emits `Compare(a.last_index, b.last_index)` first; the provenance
    /// annotation exists exactly so this attribution is possible.
    pub fn compare(&self, a: Observed, b: Observed) -> Ordering {
        self.sink
            .emit(EventRecord::compare(a.last_index() as u32, b.last_index() as u32));
        a.value().cmp(&b.value())
    }

    /// True iff `a` sorts strictly before `b`. Emits one compare event.
    pub fn less(&self, a: Observed, b: Observed) -> bool {
        self.compare(a, b) == Ordering::Less
    }

    /// True iff `a` sorts strictly after `b`. Emits one compare event.
    pub fn greater(&self, a: Observed, b: Observed) -> bool {
        self.compare(a, b) == Ordering::Greater
    }

    /// Emit the `End` marker.
    ///
    /// Called exactly once per run, after the algorithm's last mutating
    /// step.
    pub fn finish(&self) {
        self.sink.emit(EventRecord::end());
    }

    /// Snapshot of the raw values, front to back. Emits nothing.
    pub fn raw(&self) -> Vec<Element> {
        self.slots.iter().map(Observed::value).collect()
    }

    /// True iff the raw values are non-decreasing. Emits nothing.
    pub fn is_sorted(&self) -> bool {
        self.slots.windows(2).all(|w| w[0].value() <= w[1].value())
    }

    fn check(&self, index: usize) {
        assert!(
            index < self.slots.len(),
            "index {} out of range for array of length {}",
            index,
            self.slots.len()
        );
    }
}

impl std::fmt::Debug for ObservedArray {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObservedArray")
            .field("len", &self.len())
            .finish()
    }
}
