//! Emission policy for the instrumented array
//!
//! The array does not decide where its events go; a sink capability is
//! injected at construction. The normal policy forwards to an
//! [`EventStream`]; the silent policy discards, so algorithms can run in
//! correctness tests without producing or requiring a live stream.

use crate::stream::EventStream;
use sortrace_core::EventRecord;

/// A destination for event records.
///
/// Implementors must be callable from the worker thread while other threads
/// hold references, hence the `Send + Sync` bound.
pub trait EventSink: Send + Sync {
    /// Deliver one record.
    fn emit(&self, record: EventRecord);
}

/// The normal policy: every record lands on the stream.
impl EventSink for EventStream {
    fn emit(&self, record: EventRecord) {
        self.push(record);
    }
}

/// The no-op policy: records are discarded.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentSink;

impl EventSink for SilentSink {
    fn emit(&self, _record: EventRecord) {}
}
