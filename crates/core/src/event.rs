//! Event record types
//!
//! An [`EventRecord`] captures one observable operation performed on the
//! instrumented array: a read, a swap, an overwrite, a comparison, or the
//! end-of-run marker. Records are produced by the worker thread in the exact
//! order the algorithm performed the operations and consumed elsewhere.

use serde::{Deserialize, Serialize};

/// The value type being sorted.
///
/// Unsigned, ordered by natural numeric order, and wide enough to hold a
/// full permutation range. Four bytes wide, which fixes the number of
/// byte-keyed radix passes.
pub type Element = u32;

/// Kind of operation a record describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    /// A positional read of one slot.
    Access,
    /// Two slots exchanged in place.
    Swap,
    /// One slot overwritten with a computed value.
    Modify,
    /// Two values compared (attributed to their provenance indices).
    Compare,
    /// The algorithm finished; no further records follow.
    End,
}

/// One logged observation of a container operation.
///
/// Field meaning depends on [`EventKind`]:
/// - `Access`: `i` is the index read, `j` is zero
/// - `Swap`: `i` and `j` are the exchanged indices
/// - `Modify`: `i` is the index written, `j` carries the new value
/// - `Compare`: `i` and `j` are the provenance indices of the operands
/// - `End`: both fields are zero
///
/// Equality is structural over all three fields.
///
/// # Examples
///
/// ```
/// use sortrace_core::{EventKind, EventRecord};
///
/// let rec = EventRecord::swap(3, 7);
/// assert_eq!(rec.kind, EventKind::Swap);
/// assert_eq!(rec, EventRecord::new(EventKind::Swap, 3, 7));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    /// Operation kind.
    pub kind: EventKind,
    /// First index.
    pub i: u32,
    /// Second index, or the new value for `Modify`.
    pub j: u32,
}

impl EventRecord {
    /// Create a record from raw parts.
    pub fn new(kind: EventKind, i: u32, j: u32) -> Self {
        Self { kind, i, j }
    }

    /// A read of slot `i`.
    pub fn access(i: u32) -> Self {
        Self::new(EventKind::Access, i, 0)
    }

    /// An in-place exchange of slots `i` and `j`.
    pub fn swap(i: u32, j: u32) -> Self {
        Self::new(EventKind::Swap, i, j)
    }

    /// An overwrite of slot `i` with `value`.
    pub fn modify(i: u32, value: Element) -> Self {
        Self::new(EventKind::Modify, i, value)
    }

    /// A comparison attributed to provenance indices `i` and `j`.
    pub fn compare(i: u32, j: u32) -> Self {
        Self::new(EventKind::Compare, i, j)
    }

    /// The end-of-run marker.
    pub fn end() -> Self {
        Self::new(EventKind::End, 0, 0)
    }
}

impl std::fmt::Display for EventRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            EventKind::Access => write!(f, "access #{}", self.i),
            EventKind::Swap => write!(f, "swap #{} <-> #{}", self.i, self.j),
            EventKind::Modify => write!(f, "modify #{} = {}", self.i, self.j),
            EventKind::Compare => write!(f, "compare #{} vs #{}", self.i, self.j),
            EventKind::End => write!(f, "end"),
        }
    }
}
