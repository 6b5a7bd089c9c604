//! Aurora: an embedded, schema-on-read ontology store.
//!
//! Every fact is an immutable [`Event`] appended to a single ledger. Types,
//! models, attributes, individuals and their values are all events, and
//! their meaning is derived at query time through an [`Ontology`].
//!
//! # Example
//!
//! ```
//! use aurora::{meta, Aurora, Event, EventId, Tag};
//!
//! let mut store = Aurora::in_memory().unwrap();
//! let actor = EventId::new(1000);
//! store
//!     .append(
//!         Event::new(actor, meta::ACTOR, Tag::INDIVIDUAL, "Actor_Main")
//!             .with_condition(meta::ACTOR_MODEL),
//!     )
//!     .unwrap();
//! store
//!     .append(Event::new(EventId::new(1001), actor, Tag::new(meta::NAME), "Main Actor"))
//!     .unwrap();
//!
//! let names = store.ontology().get_individual_attribute(actor, meta::NAME);
//! assert_eq!(names, vec!["Main Actor"]);
//! ```
//!
//! # Thread Safety
//!
//! `Aurora` has a single writer: [`Aurora::append`] takes `&mut self`.
//! Readers borrow the store through [`Aurora::ontology`]. Wrap the store in
//! a lock to share it across threads.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod types;

pub use types::*;

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;
use std::sync::Arc;

/// An open store: ledger, type registry and reaction table.
#[derive(Debug)]
pub struct Aurora {
    ledger: Ledger,
    types: TypeRegistry,
    reactions: ReactionTable,
    config: AuroraConfig,
}

impl Aurora {
    /// Open a store.
    ///
    /// Rehydrates from `config.snapshot_path` when that file exists;
    /// otherwise starts empty and, if `config.bootstrap` is set, ingests
    /// the built-in ontology.
    pub fn open(config: AuroraConfig) -> AuroraResult<Self> {
        config.validate()?;

        let ledger = match config.snapshot_path.as_deref() {
            Some(path) if path.exists() => {
                let ledger = read_snapshot(BufReader::new(File::open(path)?))?;
                tracing::info!(
                    target: "aurora",
                    path = %path.display(),
                    events = ledger.len(),
                    "Opened store from snapshot"
                );
                ledger
            }
            _ => {
                let mut ledger = Ledger::new();
                if config.bootstrap {
                    bootstrap::ingest(&mut ledger)?;
                }
                tracing::info!(target: "aurora", events = ledger.len(), "Opened new store");
                ledger
            }
        };

        Ok(Self {
            ledger,
            types: TypeRegistry::with_builtins(),
            reactions: ReactionTable::new(),
            config,
        })
    }

    /// Open a bootstrapped store with default settings and no snapshot.
    pub fn in_memory() -> AuroraResult<Self> {
        Self::open(AuroraConfig::default())
    }

    // =========================================================================
    // Writes
    // =========================================================================

    /// Append an event, then run reactions registered for its tag.
    ///
    /// Fails with [`AuroraError::DuplicateId`] if the id is taken; the
    /// ledger and reactions are untouched in that case.
    pub fn append(&mut self, event: Event) -> AuroraResult<()> {
        let id = event.id;
        self.ledger.append(event)?;
        if let Some(stored) = self.ledger.get(id) {
            self.reactions.dispatch(stored);
        }
        Ok(())
    }

    /// Append events in order, stopping at the first failure.
    ///
    /// Events appended before the failure stay in the ledger.
    pub fn append_all<I>(&mut self, events: I) -> AuroraResult<usize>
    where
        I: IntoIterator<Item = Event>,
    {
        let mut count = 0;
        for event in events {
            self.append(event)?;
            count += 1;
        }
        Ok(count)
    }

    /// Register a reaction for events tagged `kind`.
    pub fn on<F>(&mut self, kind: EventId, handler: F)
    where
        F: Fn(&Event) + Send + Sync + 'static,
    {
        self.reactions.register(kind, Arc::new(handler));
    }

    /// Register a data type, returning any type it replaces.
    pub fn register_type(&mut self, data_type: Arc<dyn DataType>) -> Option<Arc<dyn DataType>> {
        self.types.register(data_type)
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// Get an event by id.
    pub fn get(&self, id: EventId) -> Option<&Event> {
        self.ledger.get(id)
    }

    /// A page of events in insertion order.
    ///
    /// `None` uses the configured default page size.
    pub fn scan(&self, offset: usize, limit: Option<usize>) -> Vec<Event> {
        self.ledger
            .scan(offset, limit.unwrap_or(self.config.default_scan_limit))
    }

    /// Query view over the current ledger.
    pub fn ontology(&self) -> Ontology<'_> {
        Ontology::new(&self.ledger, &self.types)
    }

    /// The underlying ledger.
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// The data-type registry.
    pub fn types(&self) -> &TypeRegistry {
        &self.types
    }

    /// Settings the store was opened with.
    pub fn config(&self) -> &AuroraConfig {
        &self.config
    }

    /// Number of stored events.
    pub fn len(&self) -> usize {
        self.ledger.len()
    }

    /// Check if the ledger is empty.
    pub fn is_empty(&self) -> bool {
        self.ledger.is_empty()
    }

    // =========================================================================
    // Snapshots
    // =========================================================================

    /// Write the ledger to `path` as JSON lines.
    pub fn save_snapshot(&self, path: impl AsRef<Path>) -> AuroraResult<usize> {
        let path = path.as_ref();
        let count = write_snapshot(&self.ledger, BufWriter::new(File::create(path)?))?;
        tracing::info!(target: "aurora", path = %path.display(), events = count, "Saved snapshot");
        Ok(count)
    }

    /// Write the ledger to the configured snapshot path.
    pub fn save(&self) -> AuroraResult<usize> {
        match self.config.snapshot_path.as_deref() {
            Some(path) => self.save_snapshot(path),
            None => Err(AuroraError::config("no snapshot_path configured")),
        }
    }
}
