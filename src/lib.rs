//! # Sortrace
//!
//! Instrumented sorting: run a classical sorting algorithm on a worker
//! thread while every read, compare, swap and overwrite it performs is
//! recorded as an ordered event, then drain those events on another thread
//! at a controlled cadence.
//!
//! ## Quick Start
//!
//! ```
//! use sortrace::prelude::*;
//! use std::time::Duration;
//!
//! struct Printer;
//!
//! impl EventConsumer for Printer {
//!     fn on_access(&mut self, _i: usize) {}
//!     fn on_compare(&mut self, _i: usize, _j: usize) {}
//!     fn on_swap(&mut self, _i: usize, _j: usize) {}
//!     fn on_modify(&mut self, _i: usize, _value: Element) {}
//!     fn on_end(&mut self) {}
//! }
//!
//! let data = shuffled_permutation(16);
//! let run = SortRun::start(Algorithm::Quick, data);
//! run.drain(&mut Printer, Duration::ZERO).unwrap();
//! ```
//!
//! ## Layers
//!
//! - [`sortrace_core`]: element and event record types, unified errors
//! - [`sortrace_stream`]: the block-sharded FIFO event stream
//! - [`sortrace_array`]: the observable container algorithms run against
//! - [`sortrace_algorithms`]: the seven sorting procedures and registry
//! - this crate: the run driver tying worker and consumer together

#![warn(missing_docs)]

mod consumer;
mod logging;
mod run;

pub mod prelude;

pub use consumer::{dispatch, EventConsumer};
pub use logging::init_logging;
pub use run::{shuffled_permutation, Pacer, RunConfig, SortRun};

// Re-export the layer types driver users touch directly.
pub use sortrace_algorithms::Algorithm;
pub use sortrace_array::{Observed, ObservedArray};
pub use sortrace_core::{Element, Error, EventKind, EventRecord, Result};
pub use sortrace_stream::{EventSink, EventStream, SilentSink};
