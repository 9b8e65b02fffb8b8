use crate::entry::LogEntry;
use crate::error::SourceError;
use crate::source::AsyncLogSource;
use async_trait::async_trait;
use std::collections::VecDeque;

/// A suspending source that yields a scripted prefix of entries and then
/// fails every subsequent retrieval.
///
/// A failure is not exhaustion: this source never reports drained, it
/// rejects. Exercises the engines' fail-fast path.
pub struct FailingSource<T> {
  name: String,
  entries: VecDeque<LogEntry<T>>,
}

impl<T> FailingSource<T> {
  /// Creates a source that yields `entries` in order and then fails.
  pub fn new(name: impl Into<String>, entries: Vec<LogEntry<T>>) -> Self {
    Self {
      name: name.into(),
      entries: entries.into(),
    }
  }
}

#[async_trait]
impl<T: Send> AsyncLogSource for FailingSource<T> {
  type Payload = T;

  async fn pop(&mut self) -> Result<Option<LogEntry<T>>, SourceError> {
    match self.entries.pop_front() {
      Some(entry) => Ok(Some(entry)),
      None => Err(SourceError::new(
        self.name.clone(),
        "injected retrieval failure",
      )),
    }
  }

  fn is_drained(&self) -> bool {
    false
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use chrono::DateTime;

  #[tokio::test]
  async fn yields_prefix_then_fails() {
    let entry = LogEntry::new(DateTime::from_timestamp(1, 0).unwrap(), 1i64);
    let mut source = FailingSource::new("flaky", vec![entry]);
    assert_eq!(source.pop().await.unwrap().unwrap().payload, 1);
    let err = source.pop().await.unwrap_err();
    assert_eq!(err.name, "flaky");
    assert!(!source.is_drained());
  }
}
