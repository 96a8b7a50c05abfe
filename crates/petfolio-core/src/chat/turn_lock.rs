//! Per-session write serialization.
//!
//! `TurnLocks` hands out one async mutex per `chat_id` so that two
//! concurrent turns (or a turn and a snapshot save) on the same session
//! are applied one after the other. Turns on different sessions never
//! contend. Locks are backed by `DashMap`; the `Arc<Mutex>` is cloned
//! out of the map immediately so no `DashMap` guard is held across
//! `.await` points, which would deadlock.

use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::Mutex;

/// Registry of per-session locks keyed by `chat_id`.
///
/// Cloning produces a shared view of the same underlying locks (backed
/// by `Arc`). Entries are created on first use and never removed; the
/// set of live sessions in one process stays small.
#[derive(Debug, Clone, Default)]
pub struct TurnLocks {
    inner: Arc<DashMap<String, Arc<Mutex<()>>>>,
}

impl TurnLocks {
    /// Create an empty lock registry.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(DashMap::new()),
        }
    }

    /// Get the lock for a session, creating it on first use.
    ///
    /// The `Arc` is cloned immediately so no `DashMap` guard is held
    /// after return. Callers lock the returned mutex for the duration
    /// of the write.
    pub fn for_chat(&self, chat_id: &str) -> Arc<Mutex<()>> {
        self.inner
            .entry(chat_id.to_string())
            .or_default()
            .clone()
    }
}
