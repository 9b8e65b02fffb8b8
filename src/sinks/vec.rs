use crate::entry::LogEntry;
use crate::sink::Sink;

/// A sink that collects delivered entries into a vector and counts
/// completion signals.
///
/// The workhorse of the test suite: after a merge, the collected entries
/// are the observable output order and
/// [`completions`](VecSink::completions) verifies the exactly-once
/// completion contract.
pub struct VecSink<T> {
  entries: Vec<LogEntry<T>>,
  completions: usize,
}

impl<T> VecSink<T> {
  /// Creates an empty sink.
  pub fn new() -> Self {
    Self {
      entries: Vec::new(),
      completions: 0,
    }
  }

  /// Returns the entries delivered so far, in delivery order.
  pub fn entries(&self) -> &[LogEntry<T>] {
    &self.entries
  }

  /// Consumes the sink and returns the delivered entries.
  pub fn into_entries(self) -> Vec<LogEntry<T>> {
    self.entries
  }

  /// Number of times `complete` has been called.
  pub fn completions(&self) -> usize {
    self.completions
  }

  /// Whether `complete` has been called at least once.
  pub fn is_complete(&self) -> bool {
    self.completions > 0
  }
}

impl<T> Default for VecSink<T> {
  fn default() -> Self {
    Self::new()
  }
}

impl<T> Sink for VecSink<T> {
  type Payload = T;

  fn deliver(&mut self, entry: LogEntry<T>) {
    self.entries.push(entry);
  }

  fn complete(&mut self) {
    self.completions += 1;
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use chrono::DateTime;

  #[test]
  fn collects_in_delivery_order() {
    let mut sink = VecSink::new();
    sink.deliver(LogEntry::new(DateTime::from_timestamp(2, 0).unwrap(), "b"));
    sink.deliver(LogEntry::new(DateTime::from_timestamp(1, 0).unwrap(), "a"));
    assert_eq!(sink.entries().len(), 2);
    assert_eq!(sink.entries()[0].payload, "b");
    assert!(!sink.is_complete());
    sink.complete();
    assert_eq!(sink.completions(), 1);
    assert_eq!(sink.into_entries().len(), 2);
  }
}
