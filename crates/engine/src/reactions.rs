//! Reaction table.
//!
//! Handlers are registered per kind and invoked for every appended event
//! whose tag equals that kind. Handlers run synchronously, in registration
//! order, after the event is already stored. They see the event read-only.

use std::collections::HashMap;
use std::sync::Arc;

use aurora_core::{Event, EventId};

/// Callback invoked for a matching event.
pub type ReactionHandler = Arc<dyn Fn(&Event) + Send + Sync>;

/// Handlers keyed by the tag kind they react to.
#[derive(Clone, Default)]
pub struct ReactionTable {
    handlers: HashMap<EventId, Vec<ReactionHandler>>,
}

impl ReactionTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` for events tagged `kind`.
    pub fn register(&mut self, kind: EventId, handler: ReactionHandler) {
        tracing::debug!(target: "aurora::reactions", kind = %kind, "Registered reaction");
        self.handlers.entry(kind).or_default().push(handler);
    }

    /// Handlers registered for `kind`, in registration order.
    pub fn handlers_for(&self, kind: EventId) -> &[ReactionHandler] {
        self.handlers.get(&kind).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Invoke every handler matching the event's tag. Returns how many ran.
    pub fn dispatch(&self, event: &Event) -> usize {
        let handlers = self.handlers_for(event.tag.event_id());
        for handler in handlers {
            handler(event);
        }
        if !handlers.is_empty() {
            tracing::trace!(
                target: "aurora::reactions",
                id = %event.id,
                handlers = handlers.len(),
                "Dispatched reactions"
            );
        }
        handlers.len()
    }

    /// Total number of registered handlers.
    pub fn len(&self) -> usize {
        self.handlers.values().map(Vec::len).sum()
    }

    /// Check if no handlers are registered.
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl std::fmt::Debug for ReactionTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut kinds: Vec<EventId> = self.handlers.keys().copied().collect();
        kinds.sort();
        f.debug_struct("ReactionTable")
            .field("kinds", &kinds)
            .field("handlers", &self.len())
            .finish()
    }
}
