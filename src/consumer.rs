//! Event consumer contract
//!
//! External front ends (renderer, audio, log) implement [`EventConsumer`];
//! [`dispatch`] maps one drained record onto it. The core knows nothing
//! about what consumers do with a record.

use sortrace_core::{Element, EventKind, EventRecord};
use tracing::trace;

/// What a front end does with each kind of drained event.
pub trait EventConsumer {
    /// Position `i` was read; highlight it.
    fn on_access(&mut self, i: usize);
    /// Positions `i` and `j` were compared; highlight both.
    fn on_compare(&mut self, i: usize, j: usize);
    /// Positions `i` and `j` were exchanged.
    fn on_swap(&mut self, i: usize, j: usize);
    /// Position `i` now holds `value`.
    fn on_modify(&mut self, i: usize, value: Element);
    /// The run is fully sorted; clear all highlighting. No further events
    /// will follow.
    fn on_end(&mut self);
}

/// Dispatch one record to a consumer.
///
/// Returns true once the `End` record has been delivered.
pub fn dispatch(consumer: &mut dyn EventConsumer, record: EventRecord) -> bool {
    match record.kind {
        EventKind::Access => {
            trace!(i = record.i, "consumer: access");
            consumer.on_access(record.i as usize);
            false
        }
        EventKind::Compare => {
            trace!(i = record.i, j = record.j, "consumer: compare");
            consumer.on_compare(record.i as usize, record.j as usize);
            false
        }
        EventKind::Swap => {
            trace!(i = record.i, j = record.j, "consumer: swap");
            consumer.on_swap(record.i as usize, record.j as usize);
            false
        }
        EventKind::Modify => {
            trace!(i = record.i, value = record.j, "consumer: modify");
            consumer.on_modify(record.i as usize, record.j);
            false
        }
        EventKind::End => {
            trace!("consumer: end of run");
            consumer.on_end();
            true
        }
    }
}
