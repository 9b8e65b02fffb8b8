//! Built-in sink implementations.

/// Sink that prints entries to the console.
pub mod console;
/// Sink that collects entries into a vector.
pub mod vec;
