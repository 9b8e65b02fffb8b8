//! Built-in source implementations.
//!
//! In-memory and simulated-latency sources for tests, demos, and small
//! tools; real deployments implement the capability traits in
//! [`crate::source`] directly.

/// Source with simulated per-retrieval latency.
pub mod delayed;
/// Source that fails after a scripted prefix of entries.
pub mod failing;
/// In-memory source backed by a pre-ordered vector.
pub mod vec;
