//! Convenience re-exports for driver code.
//!
//! ```
//! use sortrace::prelude::*;
//!
//! let algo: Algorithm = "merge_sort".parse().unwrap();
//! assert_eq!(algo, Algorithm::Merge);
//! ```

pub use crate::consumer::{dispatch, EventConsumer};
pub use crate::run::{shuffled_permutation, Pacer, RunConfig, SortRun};
pub use sortrace_algorithms::Algorithm;
pub use sortrace_array::{Observed, ObservedArray};
pub use sortrace_core::{Element, Error, EventKind, EventRecord, Result};
pub use sortrace_stream::{EventSink, EventStream, SilentSink};
