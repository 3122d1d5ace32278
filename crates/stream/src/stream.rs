//! Block-sharded FIFO event stream
//!
//! # Design
//!
//! The stream is a list of blocks, each block an ordered deque of records
//! behind its own mutex. Global order is block order times in-block order;
//! blocks are never reordered or merged. A block closes for new pushes once
//! it holds [`BLOCK_CAPACITY`] records and a fresh block is appended.
//!
//! Sharding bounds each critical section to one block, so a long-running
//! producer never holds one global lock for the whole run while the
//! consumer, draining from the front, mostly contends on the front block
//! alone.
//!
//! # Thread Safety
//!
//! - `push()`: safe from any number of producer threads (this system uses
//!   exactly one); never waits on the consumer
//! - `pop()`: single consumer; drained front blocks are dropped lazily
//! - `empty()`: tolerates concurrent pushes

use parking_lot::{Mutex, RwLock};
use sortrace_core::{Error, EventRecord, Result};
use std::collections::VecDeque;

/// Records per block before a new block is appended.
pub const BLOCK_CAPACITY: usize = 32;

/// One shard of the stream: an ordered deque behind its own lock.
#[derive(Debug, Default)]
struct Block {
    records: Mutex<VecDeque<EventRecord>>,
}

impl Block {
    fn fresh() -> Self {
        Self {
            records: Mutex::new(VecDeque::with_capacity(BLOCK_CAPACITY)),
        }
    }
}

/// Unbounded, strictly-FIFO queue of event records.
///
/// One stream exists per sorting run, created by the driver and shared
/// between the worker and consumer threads. It grows without bound while
/// the producer runs ahead and shrinks as the consumer fully drains blocks.
///
/// # Example
///
/// ```
/// use sortrace_core::EventRecord;
/// use sortrace_stream::EventStream;
///
/// let stream = EventStream::new();
/// stream.push(EventRecord::access(0));
/// assert!(!stream.empty());
/// assert_eq!(stream.pop().unwrap(), EventRecord::access(0));
/// assert!(stream.empty());
/// ```
pub struct EventStream {
    blocks: RwLock<VecDeque<Block>>,
}

impl EventStream {
    /// Create a stream holding one empty block.
    pub fn new() -> Self {
        let mut blocks = VecDeque::new();
        blocks.push_back(Block::fresh());
        Self {
            blocks: RwLock::new(blocks),
        }
    }

    /// Append a record to the tail block.
    ///
    /// If the tail block is full, a fresh block is appended first. The
    /// full-tail path rechecks under the write lock so concurrent producers
    /// never push into a closed block or append two blocks for one overflow.
    pub fn push(&self, record: EventRecord) {
        {
            let blocks = self.blocks.read();
            let tail = blocks.back().expect("stream always holds a block");
            let mut records = tail.records.lock();
            if records.len() < BLOCK_CAPACITY {
                records.push_back(record);
                return;
            }
        }

        let mut blocks = self.blocks.write();
        if let Some(tail) = blocks.back() {
            let mut records = tail.records.lock();
            if records.len() < BLOCK_CAPACITY {
                records.push_back(record);
                return;
            }
        }
        let block = Block::fresh();
        block.records.lock().push_back(record);
        blocks.push_back(block);
    }

    /// Remove and return the oldest record.
    ///
    /// A drained front block is dropped before inspecting the next one; the
    /// stream always retains at least one block. Returns
    /// [`Error::EmptyStream`] when no records are queued, so an unguarded
    /// pop is an explicit error rather than undefined behavior. Callers
    /// that check [`empty()`](Self::empty) first never see it (there is
    /// exactly one consumer).
    pub fn pop(&self) -> Result<EventRecord> {
        loop {
            {
                let blocks = self.blocks.read();
                let front = blocks.front().expect("stream always holds a block");
                let mut records = front.records.lock();
                if let Some(record) = records.pop_front() {
                    return Ok(record);
                }
                if blocks.len() == 1 {
                    return Err(Error::EmptyStream);
                }
            }
            // Front block drained with more behind it: drop it and retry.
            let mut blocks = self.blocks.write();
            let front_drained = blocks
                .front()
                .map(|b| b.records.lock().is_empty())
                .unwrap_or(false);
            if blocks.len() > 1 && front_drained {
                blocks.pop_front();
            }
        }
    }

    /// True iff every block holds no records.
    pub fn empty(&self) -> bool {
        let blocks = self.blocks.read();
        blocks.iter().all(|b| b.records.lock().is_empty())
    }

    /// Total number of queued records across all blocks.
    pub fn len(&self) -> usize {
        let blocks = self.blocks.read();
        blocks.iter().map(|b| b.records.lock().len()).sum()
    }

    /// Alias for [`empty()`](Self::empty) following container convention.
    pub fn is_empty(&self) -> bool {
        self.empty()
    }

    /// Number of blocks currently held (bookkeeping).
    pub fn block_count(&self) -> usize {
        self.blocks.read().len()
    }
}

impl Default for EventStream {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for EventStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventStream")
            .field("len", &self.len())
            .field("block_count", &self.block_count())
            .finish()
    }
}
