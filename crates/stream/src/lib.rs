//! Thread-safe event stream bridging the sorting worker and its consumer
//!
//! This crate implements the producer/consumer seam:
//! - [`EventStream`]: unbounded, strictly-FIFO, block-sharded queue of records
//! - [`EventSink`]: the runtime-injected emission policy
//! - [`SilentSink`]: the no-op policy used when instrumentation is unwanted

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod sink;
pub mod stream;

pub use sink::{EventSink, SilentSink};
pub use stream::EventStream;
