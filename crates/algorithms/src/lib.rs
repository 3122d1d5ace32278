//! Sorting procedures over the observable array
//!
//! Every algorithm here operates exclusively through
//! [`ObservedArray`](sortrace_array::ObservedArray) operations, so every
//! positional read, write and comparison it performs lands on the event
//! stream as a replayable record. No algorithm touches values through a
//! side channel. Each reaches a non-decreasing final state and calls
//! `finish()` exactly once at the end.
//!
//! - [`comparison`]: bubble, insertion, quicksort, merge sort
//! - [`distribution`]: byte-radix, decimal radix, counting sort
//! - [`Algorithm`]: the name-to-procedure registry

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod comparison;
pub mod distribution;
pub mod registry;

pub use comparison::{bubble_sort, insertion_sort, merge_sort, quicksort};
pub use distribution::{count_sort, radix_sort, radix_sort_simple};
pub use registry::Algorithm;
