//! Single-threaded k-way merge over blocking sources.
//!
//! The engine keeps a frontier in the queue: exactly one entry per
//! still-productive source, each tagged with the index of the source
//! that produced it. Each iteration extracts the global minimum,
//! delivers it, and refills the frontier from that same source. Because
//! every source is internally non-decreasing, no un-queued entry can be
//! smaller than its source's queued frontier entry, so the queue always
//! holds the true next entry of the merged stream.
//!
//! Given deterministic sources the whole run is deterministic; there is
//! no concurrency anywhere on this path.

use crate::entry::LogEntry;
use crate::error::MergeError;
use crate::queue::MinQueue;
use crate::sink::Sink;
use crate::source::LogSource;
use tracing::{debug, trace};

/// Deterministic pull-one-at-a-time merge engine over blocking sources.
pub struct SyncMergeEngine<S> {
  sources: Vec<S>,
}

impl<S> SyncMergeEngine<S>
where
  S: LogSource,
{
  /// Creates an engine over the given sources. A source with zero
  /// entries contributes nothing and is treated as exhausted from the
  /// start; an empty source list completes immediately.
  pub fn new(sources: Vec<S>) -> Self {
    Self { sources }
  }

  /// Runs the merge to completion, delivering every entry from every
  /// source to `sink` in ascending timestamp order, then signalling
  /// completion exactly once. Returns the number of delivered entries.
  ///
  /// The queue's empty-failure arm is surfaced in the signature rather
  /// than unwrapped, but the engine checks size before every extract,
  /// so `run` does not fail in practice.
  pub fn run<K>(mut self, sink: &mut K) -> Result<usize, MergeError>
  where
    K: Sink<Payload = S::Payload>,
  {
    let mut queue: MinQueue<(usize, LogEntry<S::Payload>)> =
      MinQueue::new(|a: &(usize, LogEntry<S::Payload>), b| a.1.timestamp.cmp(&b.1.timestamp));

    for (index, source) in self.sources.iter_mut().enumerate() {
      if let Some(entry) = source.pop() {
        queue.insert((index, entry));
      }
    }
    debug!(
      sources = self.sources.len(),
      frontier = queue.len(),
      "starting sync merge"
    );

    let mut delivered = 0usize;
    while !queue.is_empty() {
      let (index, entry) = queue.extract_min()?;
      trace!(source = index, timestamp = %entry.timestamp, "emitting");
      sink.deliver(entry);
      delivered += 1;
      if let Some(next) = self.sources[index].pop() {
        queue.insert((index, next));
      }
    }

    sink.complete();
    debug!(delivered, "sync merge complete");
    Ok(delivered)
  }
}
