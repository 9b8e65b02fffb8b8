//! Source capability contracts.
//!
//! A source owns a private cursor over an internally time-ordered
//! sequence of entries: every entry it yields has a timestamp greater
//! than or equal to the one before it. There are two explicit variants
//! of the capability, blocking and suspending; a source implements
//! exactly one (or both, like
//! [`VecSource`](crate::sources::vec::VecSource)), and the engine
//! variant selects which contract it consumes.
//!
//! Exhaustion is a value, not an error: a pop that yields `None` (or
//! `Ok(None)`) means the source is permanently out of entries, and the
//! source latches its [`is_drained`](LogSource::is_drained) flag at that
//! point. A [`SourceError`] from the suspending variant is a genuine
//! retrieval failure and is handled very differently; see
//! [`AsyncMergeEngine`](crate::async_merge::AsyncMergeEngine).

use crate::entry::LogEntry;
use crate::error::SourceError;
use async_trait::async_trait;

/// A blocking source of time-ordered entries, consumed by
/// [`SyncMergeEngine`](crate::sync_merge::SyncMergeEngine).
pub trait LogSource {
  /// The opaque payload type carried by this source's entries.
  type Payload;

  /// Advances the cursor and returns the next entry, or `None` once the
  /// source is exhausted. Yielded timestamps never decrease.
  fn pop(&mut self) -> Option<LogEntry<Self::Payload>>;

  /// Whether this source has reported exhaustion. Latches true the
  /// first time [`pop`](LogSource::pop) yields nothing and never resets.
  fn is_drained(&self) -> bool;
}

/// A suspending source of time-ordered entries, consumed by
/// [`AsyncMergeEngine`](crate::async_merge::AsyncMergeEngine).
///
/// Retrieval may take arbitrarily long (the engine batches requests
/// across sources per round to hide the latency) and may genuinely fail
/// with a [`SourceError`], which is distinct from exhaustion.
#[async_trait]
pub trait AsyncLogSource: Send {
  /// The opaque payload type carried by this source's entries.
  type Payload: Send;

  /// Suspends until the next entry is available and returns it, or
  /// `Ok(None)` once the source is exhausted. Yielded timestamps never
  /// decrease.
  async fn pop(&mut self) -> Result<Option<LogEntry<Self::Payload>>, SourceError>;

  /// Whether this source has reported exhaustion. Latches true the
  /// first time [`pop`](AsyncLogSource::pop) yields `Ok(None)` and never
  /// resets.
  fn is_drained(&self) -> bool;
}
