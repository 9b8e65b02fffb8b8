use crate::entry::LogEntry;
use crate::sink::Sink;
use std::fmt::Display;

/// A sink that prints each delivered entry to standard output.
pub struct ConsoleSink<T> {
  _phantom: std::marker::PhantomData<T>,
}

impl<T> ConsoleSink<T> {
  /// Creates a console sink.
  pub fn new() -> Self {
    Self {
      _phantom: std::marker::PhantomData,
    }
  }
}

impl<T> Default for ConsoleSink<T> {
  fn default() -> Self {
    Self::new()
  }
}

impl<T: Display> Sink for ConsoleSink<T> {
  type Payload = T;

  fn deliver(&mut self, entry: LogEntry<T>) {
    println!("{} {}", entry.timestamp.to_rfc3339(), entry.payload);
  }

  fn complete(&mut self) {
    println!("merge complete");
  }
}
