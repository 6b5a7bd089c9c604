//! Typed views over ledger events.
//!
//! A view is a read-only projection of one event (sometimes joined with a
//! few others). Views own a copy of the event they were built from and are
//! recomputed on every query; nothing here is stored.

use aurora_core::{meta, Event, EventId};

macro_rules! event_view {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $name {
            event: Event,
        }

        impl $name {
            pub(crate) fn from_event(event: Event) -> Self {
                Self { event }
            }

            /// The underlying event.
            pub fn event(&self) -> &Event {
                &self.event
            }

            /// Id of the underlying event.
            pub fn id(&self) -> EventId {
                self.event.id
            }

            /// Display value (the event payload).
            pub fn value(&self) -> &str {
                &self.event.payload
            }

            /// Consume the view, returning the event.
            pub fn into_event(self) -> Event {
                self.event
            }
        }
    };
}

event_view!(
    /// An instance of some kind (`tag == Individual`).
    Individual
);
event_view!(
    /// An individual whose kind descends from `Attribute`.
    Attribute
);
event_view!(
    /// An individual whose kind descends from `Relation`.
    Relation
);
event_view!(
    /// A model of some kind (`tag == Model`).
    Model
);
event_view!(
    /// A sub-type of `Entity`.
    Entity
);
event_view!(
    /// A named per-declaration metadata slot (Cardinality, Required, Permission).
    AttrProperty
);
event_view!(
    /// A constraint kind attachable to attributes (e.g. `DataType`).
    AttrConstraint
);

impl Individual {
    /// The kind this individual belongs to.
    pub fn kind(&self) -> EventId {
        self.event.parent
    }

    /// The model the individual was created under, if any.
    pub fn model(&self) -> Option<EventId> {
        self.event.is_conditional().then_some(self.event.condition)
    }
}

impl Attribute {
    /// The attribute kind (usually `Attribute` itself).
    pub fn kind(&self) -> EventId {
        self.event.parent
    }
}

impl Relation {
    /// The relation kind (usually `Relation` itself).
    pub fn kind(&self) -> EventId {
        self.event.parent
    }
}

impl Model {
    /// The kind this model describes.
    pub fn kind(&self) -> EventId {
        self.event.parent
    }

    /// The model this one extends, as recorded in `condition`.
    ///
    /// `None` for unconditional models. The id is not checked to be a model.
    pub fn parent_model(&self) -> Option<EventId> {
        (self.event.is_conditional() && self.event.condition != self.event.id)
            .then_some(self.event.condition)
    }
}

/// A constraint bound to a specific attribute.
///
/// Stored as an event whose `parent` is the attribute, whose `tag` is the
/// constraint kind and whose payload references the allowed value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttachedAttrConstraint {
    event: Event,
}

impl AttachedAttrConstraint {
    pub(crate) fn from_event(event: Event) -> Self {
        Self { event }
    }

    /// Id of the attachment event.
    pub fn attachment_id(&self) -> EventId {
        self.event.id
    }

    /// The constrained attribute.
    pub fn attribute_id(&self) -> EventId {
        self.event.parent
    }

    /// The constraint kind.
    pub fn constraint_id(&self) -> EventId {
        self.event.tag.event_id()
    }

    /// The referenced value, when the payload is a reference.
    pub fn value_id(&self) -> Option<EventId> {
        self.event.payload_ref()
    }

    /// The underlying event.
    pub fn event(&self) -> &Event {
        &self.event
    }
}

/// Whether a declaration names an attribute or a relation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyKind {
    /// Attribute declaration (`tag == Attribute`).
    Attribute,
    /// Relation declaration (`tag == Relation`).
    Relation,
}

impl PropertyKind {
    /// The meta-event used as the declaration tag.
    pub fn meta(self) -> EventId {
        match self {
            PropertyKind::Attribute => meta::ATTRIBUTE,
            PropertyKind::Relation => meta::RELATION,
        }
    }
}

/// A provider's declaration of an attribute or relation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttachedProperty {
    event: Event,
    kind: PropertyKind,
    property: EventId,
}

impl AttachedProperty {
    pub(crate) fn new(event: Event, kind: PropertyKind, property: EventId) -> Self {
        Self {
            event,
            kind,
            property,
        }
    }

    /// Id of the declaration event; value properties hang off it.
    pub fn attachment_id(&self) -> EventId {
        self.event.id
    }

    /// The provider that declared it.
    pub fn provider_id(&self) -> EventId {
        self.event.parent
    }

    /// The declared attribute or relation.
    pub fn property_id(&self) -> EventId {
        self.property
    }

    /// Attribute or relation.
    pub fn kind(&self) -> PropertyKind {
        self.kind
    }

    /// The underlying event.
    pub fn event(&self) -> &Event {
        &self.event
    }
}

/// Metadata of a declaration, read from its value properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PropertyMetadata {
    /// Maximum number of values, when declared.
    pub cardinality: Option<u32>,
    /// Whether a value is required.
    pub required: bool,
    /// Whether only the latest value is current.
    pub mutable: bool,
}

/// Schema-level owner of declarations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyProvider {
    /// A bare event; only its own declarations count.
    Event(EventId),
    /// A model; declarations are inherited along its model chain.
    Model(Model),
}

impl PropertyProvider {
    /// Id of the providing event.
    pub fn id(&self) -> EventId {
        match self {
            PropertyProvider::Event(id) => *id,
            PropertyProvider::Model(model) => model.id(),
        }
    }

    /// Whether this provider is a model.
    pub fn is_model(&self) -> bool {
        matches!(self, PropertyProvider::Model(_))
    }
}

/// Instance-level holder of attribute and relation values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyContainer {
    id: EventId,
    provider: PropertyProvider,
}

impl PropertyContainer {
    pub(crate) fn new(id: EventId, provider: PropertyProvider) -> Self {
        Self { id, provider }
    }

    /// Id of the container event.
    pub fn id(&self) -> EventId {
        self.id
    }

    /// The schema backing this container.
    pub fn provider(&self) -> &PropertyProvider {
        &self.provider
    }
}

/// A resolved value.
///
/// `raw()` is what was stored; `value()` is what it means: the literal
/// itself, or the display value of the referenced event for boxed types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoxedValue {
    event: Event,
    value: String,
    boxed: bool,
}

impl BoxedValue {
    pub(crate) fn literal(event: Event) -> Self {
        let value = event.payload.clone();
        Self {
            event,
            value,
            boxed: false,
        }
    }

    pub(crate) fn dereferenced(event: Event, value: String) -> Self {
        Self {
            event,
            value,
            boxed: true,
        }
    }

    /// The resolved value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The stored payload.
    pub fn raw(&self) -> &str {
        &self.event.payload
    }

    /// The value event.
    pub fn event(&self) -> &Event {
        &self.event
    }

    /// Whether the value was dereferenced.
    pub fn is_boxed(&self) -> bool {
        self.boxed
    }

    /// Consume into the resolved value.
    pub fn into_value(self) -> String {
        self.value
    }
}
