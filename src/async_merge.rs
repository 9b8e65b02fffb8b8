//! Round-based k-way merge over suspending sources.
//!
//! Retrieval latency varies per source, so awaiting sources one at a
//! time would serialize the slowest link. Instead the engine works in
//! rounds: it requests the next entry from every active source
//! concurrently, joins on the whole batch, admits the results into the
//! queue, and then emits a bounded slice of the buffer before the next
//! round. The join is the round barrier: the queue is only touched
//! between rounds, by one logical actor, so it needs no locking.
//!
//! Draining is bounded by the number of active sources so the engine
//! does not run far ahead of its slowest source; once no source is
//! active the whole buffer is flushed. A failed retrieval fails the
//! round's join and aborts the merge: nothing further is delivered and
//! the completion signal is never sent.

use crate::entry::LogEntry;
use crate::error::MergeError;
use crate::queue::MinQueue;
use crate::sink::Sink;
use crate::source::AsyncLogSource;
use futures::future::try_join_all;
use tracing::{debug, trace};

/// Controls how a freshly retrieved entry is admitted into the buffer.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum AdmissionPolicy {
  /// Discard a candidate whose timestamp is strictly less than the
  /// buffered minimum.
  ///
  /// Can drop a legitimately older entry when another source's larger
  /// entry is sitting at the head of the buffer, under-delivering
  /// relative to the source totals.
  #[default]
  GateOnQueueMin,
  /// Admit every candidate and let the queue reorder. Conserves every
  /// entry a source yields.
  AdmitAll,
}

/// Round-based concurrent merge engine over suspending sources.
pub struct AsyncMergeEngine<S> {
  sources: Vec<S>,
  admission: AdmissionPolicy,
}

impl<S> AsyncMergeEngine<S>
where
  S: AsyncLogSource,
{
  /// Creates an engine over the given sources with the default
  /// admission policy.
  pub fn new(sources: Vec<S>) -> Self {
    Self {
      sources,
      admission: AdmissionPolicy::default(),
    }
  }

  /// Sets the admission policy.
  #[must_use]
  pub fn with_admission(mut self, admission: AdmissionPolicy) -> Self {
    self.admission = admission;
    self
  }

  /// Runs the merge to completion, then signals completion exactly
  /// once. Returns the number of delivered entries.
  ///
  /// Fail-fast: the first [`SourceError`](crate::error::SourceError) in
  /// any round aborts the whole merge. No partial results are flushed
  /// and the sink never sees `complete`. There is no retry and no
  /// isolation of the failing source from the others.
  pub async fn run<K>(mut self, sink: &mut K) -> Result<usize, MergeError>
  where
    K: Sink<Payload = S::Payload>,
  {
    let mut queue: MinQueue<LogEntry<S::Payload>> =
      MinQueue::new(|a: &LogEntry<S::Payload>, b| a.timestamp.cmp(&b.timestamp));

    // Initial fill: one entry from every source, admitted
    // unconditionally into the empty buffer.
    let initial = try_join_all(self.sources.iter_mut().map(|source| source.pop())).await?;
    for entry in initial.into_iter().flatten() {
      queue.insert(entry);
    }
    debug!(
      sources = self.sources.len(),
      buffered = queue.len(),
      "starting async merge"
    );

    let mut delivered = 0usize;
    let mut round = 0usize;
    while !queue.is_empty() {
      round += 1;

      // Filling: one concurrent request per active source, joined as a
      // batch. Rounds never overlap.
      let candidates = try_join_all(
        self
          .sources
          .iter_mut()
          .filter(|source| !source.is_drained())
          .map(|source| source.pop()),
      )
      .await?;

      // Admission.
      for entry in candidates.into_iter().flatten() {
        if self.admits(&queue, &entry) {
          queue.insert(entry);
        } else {
          trace!(round, timestamp = %entry.timestamp, "discarding candidate below buffered minimum");
        }
      }

      // Draining: sources that reported exhaustion during filling leave
      // the active set before the batch size is computed.
      let active = self
        .sources
        .iter()
        .filter(|source| !source.is_drained())
        .count();
      if active == 0 {
        trace!(round, buffered = queue.len(), "no active sources, flushing");
        while !queue.is_empty() {
          sink.deliver(queue.extract_min()?);
          delivered += 1;
        }
      } else {
        // Bound re-read after every emission; a lone active source
        // keeps roughly half the buffer resident rather than being
        // flushed to empty and terminating the merge early.
        let mut emitted = 0usize;
        while emitted < queue.len() / active {
          sink.deliver(queue.extract_min()?);
          emitted += 1;
        }
        delivered += emitted;
        trace!(round, emitted, active, buffered = queue.len(), "round drained");
      }
    }

    sink.complete();
    debug!(delivered, rounds = round, "async merge complete");
    Ok(delivered)
  }

  fn admits(&self, queue: &MinQueue<LogEntry<S::Payload>>, entry: &LogEntry<S::Payload>) -> bool {
    match self.admission {
      AdmissionPolicy::AdmitAll => true,
      AdmissionPolicy::GateOnQueueMin => match queue.peek_min() {
        Ok(min) => entry.timestamp >= min.timestamp,
        Err(_) => true,
      },
    }
  }
}
