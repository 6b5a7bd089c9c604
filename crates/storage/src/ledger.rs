//! Append-only event ledger
//!
//! The ledger is the only mutable state in Aurora. It stores immutable
//! events keyed by id and preserves insertion order.
//!
//! # Design
//!
//! - Vec<Event>: insertion-ordered log, the source of every scan
//! - FxHashMap<EventId, usize>: primary key index into the log, O(1) lookups
//! - No derived indices: classification is recomputed by scanning
//!
//! # Thread Safety
//!
//! `append` takes `&mut self`. The ledger does no locking of its own; a host
//! with several writers must serialize them (e.g. behind a mutex) before
//! reaching the ledger.

use aurora_core::{AuroraError, AuroraResult, Event, EventId};
use rustc_hash::FxHashMap;

/// Append-only store of events.
#[derive(Debug, Default, Clone)]
pub struct Ledger {
    /// Events in insertion order
    events: Vec<Event>,
    /// id -> position in `events`
    index: FxHashMap<EventId, usize>,
}

impl Ledger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a ledger with pre-allocated capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            events: Vec::with_capacity(capacity),
            index: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Append an event
    ///
    /// Fails with `DuplicateId` if the id is already stored; the ledger is
    /// left unchanged in that case. References in `parent`/`condition` are
    /// not checked.
    pub fn append(&mut self, event: Event) -> AuroraResult<()> {
        if self.index.contains_key(&event.id) {
            tracing::debug!(target: "aurora::ledger", id = %event.id, "Rejected duplicate event id");
            return Err(AuroraError::duplicate_id(event.id));
        }
        tracing::trace!(
            target: "aurora::ledger",
            id = %event.id,
            parent = %event.parent,
            tag = %event.tag,
            "Appended event"
        );
        self.index.insert(event.id, self.events.len());
        self.events.push(event);
        Ok(())
    }

    /// Append events in order
    ///
    /// Stops at the first duplicate and returns its error. Events appended
    /// before the failure stay in the ledger.
    pub fn append_batch<I>(&mut self, events: I) -> AuroraResult<usize>
    where
        I: IntoIterator<Item = Event>,
    {
        let mut appended = 0;
        for event in events {
            self.append(event)?;
            appended += 1;
        }
        Ok(appended)
    }

    /// Get an event by id
    ///
    /// Returns None for unknown ids.
    #[inline]
    pub fn get(&self, id: EventId) -> Option<&Event> {
        self.index.get(&id).map(|&pos| &self.events[pos])
    }

    /// Check whether an id is stored
    #[inline]
    pub fn contains(&self, id: EventId) -> bool {
        self.index.contains_key(&id)
    }

    /// Read a page of events in insertion order
    ///
    /// Skips `offset` leading records and returns at most `limit`.
    pub fn scan(&self, offset: usize, limit: usize) -> Vec<Event> {
        self.events
            .iter()
            .skip(offset)
            .take(limit)
            .cloned()
            .collect()
    }

    /// Iterate over all events in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, Event> {
        self.events.iter()
    }

    /// Number of stored events
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Check if the ledger is empty
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Position of an event in insertion order
    pub fn position(&self, id: EventId) -> Option<usize> {
        self.index.get(&id).copied()
    }
}

impl<'a> IntoIterator for &'a Ledger {
    type Item = &'a Event;
    type IntoIter = std::slice::Iter<'a, Event>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}
