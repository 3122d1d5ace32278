//! Run driver
//!
//! A [`SortRun`] is the explicit run-scoped context: it owns the event
//! stream for one sorting run and the worker thread executing the
//! algorithm. The stream's lifecycle is tied to the run, not the process.
//!
//! The worker runs unthrottled; the consumer throttles itself with a
//! [`Pacer`]. Joining the worker is the shutdown synchronization point; no
//! cancellation exists mid-algorithm.

use crate::consumer::{dispatch, EventConsumer};
use rand::seq::SliceRandom;
use sortrace_algorithms::Algorithm;
use sortrace_array::ObservedArray;
use sortrace_core::{Element, EventRecord};
use sortrace_stream::EventStream;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};
use tracing::debug;

/// Driver configuration with the front end's defaults.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// How many elements to sort.
    pub size: usize,
    /// Which algorithm to run.
    pub algorithm: Algorithm,
    /// Minimum delay between consumed events.
    pub delay: Duration,
}

impl RunConfig {
    /// Smallest accepted input size; smaller requests are clamped up.
    pub const MIN_SIZE: usize = 5;

    /// The configured size, clamped to [`MIN_SIZE`](Self::MIN_SIZE).
    pub fn clamped_size(&self) -> usize {
        self.size.max(Self::MIN_SIZE)
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            size: 10,
            algorithm: Algorithm::Bubble,
            delay: Duration::from_millis(15),
        }
    }
}

/// A shuffled permutation of `1..=n`, the standard run input.
///
/// The container does not generate its own data; the driver supplies it.
pub fn shuffled_permutation(n: usize) -> Vec<Element> {
    let mut values: Vec<Element> = (1..=n as Element).collect();
    values.shuffle(&mut rand::thread_rng());
    values
}

/// Consumer-side pacing: at most one event per interval.
///
/// The timer resets only when an event is actually consumed, so an idle
/// stretch does not bank extra ticks.
#[derive(Debug)]
pub struct Pacer {
    interval: Duration,
    last: Option<Instant>,
}

impl Pacer {
    /// A pacer that is immediately ready for its first event.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last: None,
        }
    }

    /// True iff at least `interval` has passed since the last reset.
    pub fn ready(&self) -> bool {
        self.last.map_or(true, |t| t.elapsed() >= self.interval)
    }

    /// Start the next interval.
    pub fn reset(&mut self) {
        self.last = Some(Instant::now());
    }
}

/// One sorting run: a run-scoped event stream plus the worker thread
/// executing the algorithm against it.
///
/// # Example
///
/// ```
/// use sortrace::{Algorithm, SortRun};
///
/// let run = SortRun::start(Algorithm::Merge, vec![3, 1, 2]);
/// run.join().unwrap();
/// ```
pub struct SortRun {
    stream: Arc<EventStream>,
    worker: Option<JoinHandle<()>>,
}

impl SortRun {
    /// Start `algorithm` against `data` on a dedicated worker thread.
    ///
    /// The worker owns the container outright; only the events it emits
    /// are shared. The worker runs to completion unthrottled.
    pub fn start(algorithm: Algorithm, data: Vec<Element>) -> Self {
        let stream = Arc::new(EventStream::new());
        let mut array = ObservedArray::new(data, stream.clone());
        let worker = thread::spawn(move || {
            debug!(algorithm = %algorithm, len = array.len(), "worker started");
            algorithm.run(&mut array);
            debug!(algorithm = %algorithm, "worker finished");
        });
        Self {
            stream,
            worker: Some(worker),
        }
    }

    /// Start a run from a [`RunConfig`], generating the shuffled input.
    pub fn with_config(config: &RunConfig) -> Self {
        Self::start(config.algorithm, shuffled_permutation(config.clamped_size()))
    }

    /// The run's event stream.
    pub fn stream(&self) -> Arc<EventStream> {
        Arc::clone(&self.stream)
    }

    /// Pop the oldest event if one is queued.
    ///
    /// The empty check and the pop happen on the one consumer thread, so
    /// the check cannot be invalidated in between.
    pub fn next_event(&self) -> Option<EventRecord> {
        if self.stream.empty() {
            None
        } else {
            self.stream.pop().ok()
        }
    }

    /// Drain the stream into `consumer` no faster than `delay` per event,
    /// then join the worker.
    ///
    /// Returns once the `End` record has been dispatched and the worker
    /// thread has been joined; a worker panic surfaces in the result.
    pub fn drain(self, consumer: &mut dyn EventConsumer, delay: Duration) -> thread::Result<()> {
        let mut pacer = Pacer::new(delay);
        loop {
            if pacer.ready() {
                if let Some(record) = self.next_event() {
                    pacer.reset();
                    if dispatch(consumer, record) {
                        break;
                    }
                    continue;
                }
            }
            thread::sleep(Duration::from_millis(1));
        }
        self.join()
    }

    /// Join the worker thread.
    pub fn join(mut self) -> thread::Result<()> {
        match self.worker.take() {
            Some(handle) => handle.join(),
            None => Ok(()),
        }
    }
}
