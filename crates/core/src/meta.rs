//! Built-in vocabulary of meta-events.
//!
//! These ids anchor the root ontology types and double as classification
//! tags. They are all below [`RESERVED_ID_LIMIT`]; user data starts at the
//! limit.

use crate::event::EventId;

/// First id available to user data.
pub const RESERVED_ID_LIMIT: EventId = EventId::new(1000);

// =============================================================================
// Root kinds
// =============================================================================

/// The self-parented root of every ancestry chain.
pub const EVENT: EventId = EventId::new(0);
/// Tag for "defines a sub-type of the parent".
pub const SUB_EVENT: EventId = EventId::new(1);
/// Agents acting on the store.
pub const ACTOR: EventId = EventId::new(2);
/// Domain entity kinds.
pub const ENTITY: EventId = EventId::new(3);
/// Relations between individuals.
pub const RELATION: EventId = EventId::new(4);
/// Attributes carrying literal or boxed values.
pub const ATTRIBUTE: EventId = EventId::new(5);
/// Constraint kinds attachable to attributes.
pub const ATTRIBUTE_CONSTRAINT: EventId = EventId::new(6);
/// Tag for "defines a model of the parent kind".
pub const MODEL: EventId = EventId::new(7);
/// Tag for "is an individual of the parent".
pub const INDIVIDUAL: EventId = EventId::new(8);
/// Data-type constraint; its individuals name registered validators.
pub const DATA_TYPE: EventId = EventId::new(12);
/// Roles individuals can play.
pub const ROLE: EventId = EventId::new(23);
/// Tag for "is an allowed value candidate of the parent attribute".
pub const ATTRIBUTE_VALUE: EventId = EventId::new(26);
/// Root of per-declaration metadata slots.
pub const VALUE_PROPERTY: EventId = EventId::new(27);

// =============================================================================
// Models
// =============================================================================

/// Model of plain events; root of the model chain.
pub const EVENT_MODEL: EventId = EventId::new(9);
/// Model of entities.
pub const ENTITY_MODEL: EventId = EventId::new(10);
/// Model of relations.
pub const RELATION_MODEL: EventId = EventId::new(11);
/// Model of data types.
pub const DATA_TYPE_MODEL: EventId = EventId::new(13);
/// Model of attributes.
pub const ATTRIBUTE_MODEL: EventId = EventId::new(15);
/// Model of actors.
pub const ACTOR_MODEL: EventId = EventId::new(20);
/// Model of roles.
pub const ROLE_MODEL: EventId = EventId::new(24);

// =============================================================================
// Value properties
// =============================================================================

/// Maximum number of values a declaration accepts.
pub const CARDINALITY: EventId = EventId::new(28);
/// Whether a declaration must carry a value.
pub const REQUIRED: EventId = EventId::new(29);
/// Whether a declaration is mutable (latest value wins).
pub const PERMISSION: EventId = EventId::new(30);

/// Payload of a `Required`/`Permission` property that switches it on.
pub const FLAG_SET: &str = "1";

// =============================================================================
// Scaffolding individuals
// =============================================================================

/// Data type individual `basic_type`.
pub const BASIC_TYPE: EventId = EventId::new(14);
/// Data type individual `enum_type`.
pub const ENUM_TYPE: EventId = EventId::new(25);
/// The built-in `Name` attribute.
pub const NAME: EventId = EventId::new(17);
/// The built-in `Delete` attribute.
pub const DELETE: EventId = EventId::new(31);
/// Value candidate `Delete = 1`.
pub const DELETE_TRUE: EventId = EventId::new(33);
/// Value candidate `Delete = 0`.
pub const DELETE_FALSE: EventId = EventId::new(34);
