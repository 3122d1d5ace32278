//! Element value with provenance
//!
//! Comparison events must carry positions, but comparisons happen on
//! extracted values with no positional context of their own. [`Observed`]
//! therefore pairs a raw value with the container slot that most recently
//! yielded it via a read. The annotation is stamped explicitly by
//! [`ObservedArray::get`](crate::ObservedArray::get) rather than hidden
//! behind a supposedly-pure read.

use sortrace_core::Element;

/// A value plus the last container index it was read from.
///
/// The provenance index is not part of the value's identity: equality and
/// ordering consider the raw value alone.
///
/// # Examples
///
/// ```
/// use sortrace_array::Observed;
///
/// let a = Observed::new(5, 0);
/// let mut b = Observed::new(5, 9);
/// assert_eq!(a, b);
/// b.set_index(3);
/// assert_eq!(a, b);
/// assert_eq!(b.value(), 5);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Observed {
    value: Element,
    last_index: usize,
}

impl Observed {
    /// Create a value annotated with the slot it came from.
    pub fn new(value: Element, last_index: usize) -> Self {
        Self { value, last_index }
    }

    /// The raw value.
    pub fn value(&self) -> Element {
        self.value
    }

    /// The container slot that most recently yielded this value via a read.
    pub fn last_index(&self) -> usize {
        self.last_index
    }

    /// Re-stamp the provenance index.
    pub fn set_index(&mut self, index: usize) {
        self.last_index = index;
    }
}

impl PartialEq for Observed {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Observed {}

impl PartialOrd for Observed {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Observed {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.value.cmp(&other.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_ignores_provenance() {
        let a = Observed::new(7, 1);
        let b = Observed::new(7, 100);
        assert_eq!(a, b);
        assert_ne!(a, Observed::new(8, 1));
    }

    #[test]
    fn test_set_index_changes_neither_value_nor_equality() {
        let a = Observed::new(42, 0);
        let mut b = Observed::new(42, 0);
        b.set_index(17);
        assert_eq!(a, b);
        assert_eq!(b.value(), 42);
        assert_eq!(b.last_index(), 17);
    }

    #[test]
    fn test_ordering_is_numeric() {
        assert!(Observed::new(1, 9) < Observed::new(2, 0));
        assert!(Observed::new(3, 0) > Observed::new(2, 9));
    }
}
