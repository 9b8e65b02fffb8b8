//! Timestamped log entries.
//!
//! [`LogEntry`] is the record every source yields and every sink
//! receives: a wall-clock timestamp plus an opaque payload. Entries are
//! immutable once produced; a source hands ownership to the merge
//! buffer, and the buffer hands it to the sink exactly once.

use chrono::{DateTime, Utc};

/// A payload with an attached timestamp.
///
/// Ordering across the whole system is by `timestamp` only; the payload
/// is never inspected by the engines. Sources must yield entries with
/// non-decreasing timestamps, but two entries from different sources may
/// carry the same timestamp, in which case their relative output order
/// is unspecified.
#[derive(Clone, Debug, Eq, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LogEntry<T> {
  /// When the entry was recorded.
  pub timestamp: DateTime<Utc>,
  /// The payload.
  pub payload: T,
}

impl<T> LogEntry<T> {
  /// Creates a new entry.
  #[inline]
  pub fn new(timestamp: DateTime<Utc>, payload: T) -> Self {
    Self { timestamp, payload }
  }

  /// Returns a reference to the payload.
  #[inline]
  pub fn payload(&self) -> &T {
    &self.payload
  }

  /// Returns the timestamp.
  #[inline]
  pub fn timestamp(&self) -> DateTime<Utc> {
    self.timestamp
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn at(secs: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(secs, 0).unwrap()
  }

  #[test]
  fn entry_basic() {
    let entry = LogEntry::new(at(42), "hello");
    assert_eq!(entry.timestamp(), at(42));
    assert_eq!(entry.payload(), &"hello");
  }

  #[test]
  fn entry_clone() {
    let entry = LogEntry::new(at(1), String::from("payload"));
    let copy = entry.clone();
    assert_eq!(entry, copy);
  }

  #[test]
  fn entry_send_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<LogEntry<u64>>();
    assert_send_sync::<LogEntry<String>>();
  }
}
