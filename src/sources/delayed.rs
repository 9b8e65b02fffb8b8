use crate::entry::LogEntry;
use crate::error::SourceError;
use crate::source::{AsyncLogSource, LogSource};
use crate::sources::vec::VecSource;
use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;
use tokio::time::sleep;

/// An in-memory source whose every retrieval suspends for a random
/// delay, simulating a slow backend with variable latency.
///
/// The delay is sampled uniformly from `[min_delay, max_delay]` in
/// milliseconds on each pop. Use [`with_seed`](DelayedSource::with_seed)
/// to make the delay sequence reproducible.
pub struct DelayedSource<T> {
  inner: VecSource<T>,
  min_delay_ms: u64,
  max_delay_ms: u64,
  rng: StdRng,
}

impl<T> DelayedSource<T> {
  /// Creates a source over entries already in non-decreasing timestamp
  /// order, with delays sampled from `[min_delay_ms, max_delay_ms]`.
  pub fn new(entries: Vec<LogEntry<T>>, min_delay_ms: u64, max_delay_ms: u64) -> Self {
    Self {
      inner: VecSource::new(entries),
      min_delay_ms,
      max_delay_ms,
      rng: StdRng::from_entropy(),
    }
  }

  /// Same as [`new`](DelayedSource::new) with a seeded delay sequence.
  pub fn with_seed(
    entries: Vec<LogEntry<T>>,
    min_delay_ms: u64,
    max_delay_ms: u64,
    seed: u64,
  ) -> Self {
    Self {
      inner: VecSource::new(entries),
      min_delay_ms,
      max_delay_ms,
      rng: StdRng::seed_from_u64(seed),
    }
  }
}

#[async_trait]
impl<T: Send> AsyncLogSource for DelayedSource<T> {
  type Payload = T;

  async fn pop(&mut self) -> Result<Option<LogEntry<T>>, SourceError> {
    let wait = self.rng.gen_range(self.min_delay_ms..=self.max_delay_ms);
    sleep(Duration::from_millis(wait)).await;
    Ok(self.inner.next_entry())
  }

  fn is_drained(&self) -> bool {
    LogSource::is_drained(&self.inner)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use chrono::DateTime;

  fn entries(timestamps: &[i64]) -> Vec<LogEntry<i64>> {
    timestamps
      .iter()
      .map(|&t| LogEntry::new(DateTime::from_timestamp(t, 0).unwrap(), t))
      .collect()
  }

  #[tokio::test]
  async fn yields_entries_in_order_after_delays() {
    let mut source = DelayedSource::with_seed(entries(&[1, 2]), 0, 2, 7);
    assert_eq!(source.pop().await.unwrap().unwrap().payload, 1);
    assert_eq!(source.pop().await.unwrap().unwrap().payload, 2);
    assert!(!source.is_drained());
    assert!(source.pop().await.unwrap().is_none());
    assert!(source.is_drained());
  }

  #[tokio::test]
  async fn suspends_for_the_configured_delay() {
    let mut source = DelayedSource::with_seed(entries(&[1]), 30, 30, 0);
    let before = std::time::Instant::now();
    source.pop().await.unwrap();
    assert!(before.elapsed() >= Duration::from_millis(30));
  }
}
