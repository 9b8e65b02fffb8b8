use crate::entry::LogEntry;
use crate::error::SourceError;
use crate::source::{AsyncLogSource, LogSource};
use async_trait::async_trait;
use std::collections::VecDeque;

/// An in-memory source backed by a vector of entries already ordered by
/// timestamp.
///
/// Implements both capability variants; the suspending form resolves
/// immediately and never fails.
pub struct VecSource<T> {
  entries: VecDeque<LogEntry<T>>,
  drained: bool,
}

impl<T> VecSource<T> {
  /// Creates a source from entries already in non-decreasing timestamp
  /// order. The ordering is the caller's responsibility; it is not
  /// re-checked here.
  pub fn new(entries: Vec<LogEntry<T>>) -> Self {
    Self {
      entries: entries.into(),
      drained: false,
    }
  }

  pub(crate) fn next_entry(&mut self) -> Option<LogEntry<T>> {
    match self.entries.pop_front() {
      Some(entry) => Some(entry),
      None => {
        self.drained = true;
        None
      }
    }
  }
}

impl<T> LogSource for VecSource<T> {
  type Payload = T;

  fn pop(&mut self) -> Option<LogEntry<T>> {
    self.next_entry()
  }

  fn is_drained(&self) -> bool {
    self.drained
  }
}

#[async_trait]
impl<T: Send> AsyncLogSource for VecSource<T> {
  type Payload = T;

  async fn pop(&mut self) -> Result<Option<LogEntry<T>>, SourceError> {
    Ok(self.next_entry())
  }

  fn is_drained(&self) -> bool {
    self.drained
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

  #[test]
  fn pops_in_order_then_drains() {
    let mut source = VecSource::new(entries(&[1, 2, 3]));
    assert!(!source.is_drained());
    assert_eq!(LogSource::pop(&mut source).unwrap().payload, 1);
    assert_eq!(LogSource::pop(&mut source).unwrap().payload, 2);
    assert_eq!(LogSource::pop(&mut source).unwrap().payload, 3);
    // Drained only once absence has actually been reported.
    assert!(!source.is_drained());
    assert!(LogSource::pop(&mut source).is_none());
    assert!(source.is_drained());
    assert!(LogSource::pop(&mut source).is_none());
    assert!(source.is_drained());
  }

  #[test]
  fn empty_source_drains_on_first_pop() {
    let mut source = VecSource::<i64>::new(Vec::new());
    assert!(!source.is_drained());
    assert!(LogSource::pop(&mut source).is_none());
    assert!(source.is_drained());
  }

  #[tokio::test]
  async fn async_form_resolves_immediately() {
    let mut source = VecSource::new(entries(&[5]));
    let first = AsyncLogSource::pop(&mut source).await.unwrap();
    assert_eq!(first.unwrap().payload, 5);
    let done = AsyncLogSource::pop(&mut source).await.unwrap();
    assert!(done.is_none());
    assert!(AsyncLogSource::is_drained(&source));
  }
}
