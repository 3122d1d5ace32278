//! The instrumented array every algorithm operates through
//!
//! - [`Observed`]: an element value paired with its provenance index
//! - [`ObservedArray`]: a fixed-length sequence where every read, swap,
//!   overwrite and comparison emits an event through the injected sink
//!
//! Reading is not free: every index access is a side-effecting operation
//! with respect to the event stream. That is the invariant separating this
//! type from a plain array.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod array;
pub mod observed;

pub use array::ObservedArray;
pub use observed::Observed;
