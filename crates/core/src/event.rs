//! Event record and identifier types.
//!
//! The event is the only stored entity. Everything else (attributes,
//! models, individuals, relations...) is a projection computed from
//! events at query time.
//!
//! ## Identifier roles
//!
//! One integer space serves two purposes: it anchors the "is-a" chain
//! (`parent` points at an [`EventId`]) and it classifies records (`tag`
//! names the role an event plays relative to its parent). The two roles are
//! kept apart by the [`EventId`] and [`Tag`] newtypes; crossing between them
//! is always an explicit conversion.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::meta;

/// Identifier of an event in the ledger.
///
/// Ids are assigned by the writer and never reused. Ids below
/// [`meta::RESERVED_ID_LIMIT`] belong to the bootstrap vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(u64);

impl EventId {
    /// Create an id from its raw value.
    pub const fn new(raw: u64) -> Self {
        EventId(raw)
    }

    /// The raw integer value.
    pub const fn get(self) -> u64 {
        self.0
    }

    /// Whether this id falls in the reserved bootstrap range.
    pub fn is_reserved(self) -> bool {
        self < meta::RESERVED_ID_LIMIT
    }

    /// Parse a reference payload (decimal id) into an id.
    ///
    /// Returns `None` for anything that is not a plain decimal integer.
    pub fn parse_ref(payload: &str) -> Option<Self> {
        payload.trim().parse::<u64>().ok().map(EventId)
    }

    /// Encode this id as a reference payload.
    pub fn to_ref(self) -> String {
        self.0.to_string()
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for EventId {
    fn from(raw: u64) -> Self {
        EventId(raw)
    }
}

impl FromStr for EventId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u64>().map(EventId)
    }
}

/// Classification tag of an event.
///
/// Numerically a tag is an [`EventId`] (usually a meta-event, or an
/// attribute/relation id for value records), but it is never used as an
/// anchor without an explicit [`Tag::event_id`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tag(EventId);

impl Tag {
    /// Marks an event defining a sub-type of its parent.
    pub const SUB_EVENT: Tag = Tag(meta::SUB_EVENT);
    /// Marks an event defining a model of its parent kind.
    pub const MODEL: Tag = Tag(meta::MODEL);
    /// Marks an individual (instance) of its parent.
    pub const INDIVIDUAL: Tag = Tag(meta::INDIVIDUAL);
    /// Marks a provider's attribute declaration.
    pub const ATTRIBUTE: Tag = Tag(meta::ATTRIBUTE);
    /// Marks a provider's relation declaration.
    pub const RELATION: Tag = Tag(meta::RELATION);
    /// Marks a registered attribute constraint.
    pub const ATTRIBUTE_CONSTRAINT: Tag = Tag(meta::ATTRIBUTE_CONSTRAINT);
    /// Marks an allowed value candidate of an attribute.
    pub const ATTRIBUTE_VALUE: Tag = Tag(meta::ATTRIBUTE_VALUE);
    /// Marks the data-type constraint attached to an attribute.
    pub const DATA_TYPE: Tag = Tag(meta::DATA_TYPE);

    /// Build a tag from an event id.
    pub const fn new(id: EventId) -> Self {
        Tag(id)
    }

    /// The event this tag refers to.
    pub const fn event_id(self) -> EventId {
        self.0
    }
}

impl From<EventId> for Tag {
    fn from(id: EventId) -> Self {
        Tag(id)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// An immutable ledger record.
///
/// # Example
///
/// ```
/// use aurora_core::{meta, Event, EventId, Tag};
///
/// let actor = Event::new(EventId::new(1000), meta::ACTOR, Tag::INDIVIDUAL, "Actor_Main")
///     .with_condition(meta::ACTOR_MODEL)
///     .at(5);
/// assert_eq!(actor.payload, "Actor_Main");
/// assert_eq!(actor.timestamp, 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Unique id.
    pub id: EventId,
    /// The event this one specializes or belongs to.
    pub parent: EventId,
    /// Role of this event relative to `parent`.
    pub tag: Tag,
    /// Guard/context event; the root `Event` when unconditional.
    #[serde(default = "root_id")]
    pub condition: EventId,
    /// Writer of the record; the root `Event` when unknown.
    #[serde(default = "root_id")]
    pub actor: EventId,
    /// Logical ordering key.
    #[serde(default)]
    pub timestamp: u64,
    /// Literal scalar or decimal reference to another event.
    #[serde(default)]
    pub payload: String,
}

fn root_id() -> EventId {
    meta::EVENT
}

impl Event {
    /// Create an unconditional event at timestamp 0.
    pub fn new(id: EventId, parent: EventId, tag: Tag, payload: impl Into<String>) -> Self {
        Self {
            id,
            parent,
            tag,
            condition: meta::EVENT,
            actor: meta::EVENT,
            timestamp: 0,
            payload: payload.into(),
        }
    }

    /// Set the condition (context) event.
    pub fn with_condition(mut self, condition: EventId) -> Self {
        self.condition = condition;
        self
    }

    /// Set the writing actor.
    pub fn with_actor(mut self, actor: EventId) -> Self {
        self.actor = actor;
        self
    }

    /// Set the logical timestamp.
    pub fn at(mut self, timestamp: u64) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Whether this event is self-parented (an ancestry root).
    pub fn is_root(&self) -> bool {
        self.parent == self.id
    }

    /// Whether the event carries a real condition.
    pub fn is_conditional(&self) -> bool {
        self.condition != meta::EVENT
    }

    /// Interpret the payload as a reference to another event.
    pub fn payload_ref(&self) -> Option<EventId> {
        EventId::parse_ref(&self.payload)
    }
}
