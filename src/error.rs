//! Error taxonomy for the merge engines and the priority queue.
//!
//! Exhaustion is deliberately absent here: a source that runs out of
//! entries reports `None` from its pop, which is a normal terminal
//! signal, not a failure.

use thiserror::Error;

/// A genuine failure while retrieving the next entry from a suspending
/// source.
///
/// Distinct from exhaustion. One of these failing a round's join aborts
/// the whole merge: no partial flush, no completion signal.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
#[error("retrieval from source `{name}` failed: {reason}")]
pub struct SourceError {
  /// Name of the failing source.
  pub name: String,
  /// What went wrong.
  pub reason: String,
}

impl SourceError {
  /// Creates a retrieval failure for the named source.
  pub fn new(name: impl Into<String>, reason: impl Into<String>) -> Self {
    Self {
      name: name.into(),
      reason: reason.into(),
    }
  }
}

/// Errors surfaced by the merge engines.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum MergeError {
  /// `peek_min` or `extract_min` was called on an empty queue. A usage
  /// error: the engines check size first and never trigger it.
  #[error("the priority queue is empty")]
  EmptyQueue,
  /// A source failed during a round of concurrent retrieval.
  #[error(transparent)]
  Source(#[from] SourceError),
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn source_error_display() {
    let err = SourceError::new("source-3", "connection reset");
    assert_eq!(
      err.to_string(),
      "retrieval from source `source-3` failed: connection reset"
    );
  }

  #[test]
  fn merge_error_from_source_error() {
    let err: MergeError = SourceError::new("s", "boom").into();
    assert!(matches!(err, MergeError::Source(_)));
    assert_eq!(err.to_string(), "retrieval from source `s` failed: boom");
  }

  #[test]
  fn empty_queue_display() {
    assert_eq!(
      MergeError::EmptyQueue.to_string(),
      "the priority queue is empty"
    );
  }
}
