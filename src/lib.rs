//! # LogWeave
//!
//! Chronological merging of independently ordered log streams.
//!
//! LogWeave takes any number of sources that each yield timestamped
//! entries in non-decreasing order, at different rates and with
//! different retrieval latencies, and delivers the union of their
//! entries to a sink in a single globally time-ordered stream.
//!
//! ## Key Features
//!
//! - **Two engine variants**: a fully deterministic single-threaded merge
//!   over blocking sources, and a round-based concurrent merge over
//!   suspending sources built on Tokio
//! - **Self-contained buffer**: a comparator-ordered min-queue with no
//!   external heap dependency
//! - **Explicit contracts**: sources and sinks are small traits a caller
//!   implements once; exhaustion is a value, not an error
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use logweave::sinks::console::ConsoleSink;
//! use logweave::sources::vec::VecSource;
//! use logweave::sync_merge::SyncMergeEngine;
//!
//! let sources: Vec<VecSource<String>> = vec![/* time-ordered entries */];
//! let mut sink = ConsoleSink::new();
//! SyncMergeEngine::new(sources).run(&mut sink)?;
//! # Ok::<(), logweave::error::MergeError>(())
//! ```

// Documentation enforcement - treat missing docs as errors
#![deny(missing_docs)]

/// Timestamped log entries, the record type crossing every boundary.
pub mod entry;
/// Error taxonomy for the engines and the queue they drain.
pub mod error;
/// Comparator-ordered min-queue used as the merge buffer.
pub mod queue;
/// Source capability contracts (blocking and suspending).
pub mod source;
/// Sink capability contract consumed by the engines.
pub mod sink;
/// Built-in source implementations.
pub mod sources;
/// Built-in sink implementations.
pub mod sinks;
/// Single-threaded, deterministic merge over blocking sources.
pub mod sync_merge;
/// Round-based concurrent merge over suspending sources.
pub mod async_merge;
