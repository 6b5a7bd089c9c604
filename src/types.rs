//! Public types for the Aurora API.
//!
//! This module re-exports types from internal crates with a clean public interface.

// ============================================================================
// Records and identifiers
// ============================================================================

pub use aurora_core::meta;
pub use aurora_core::{Event, EventId, Tag};

// Errors and configuration
pub use aurora_core::{AuroraConfig, AuroraError, AuroraResult};

// ============================================================================
// Storage
// ============================================================================

pub use aurora_storage::{read_snapshot, write_snapshot, Ledger};

// ============================================================================
// Ontology
// ============================================================================

pub use aurora_engine::bootstrap;
pub use aurora_engine::{Ontology, ViewKind};

// Views returned by ontology queries
pub use aurora_engine::{
    AttachedAttrConstraint, AttachedProperty, AttrConstraint, AttrProperty, Attribute, BoxedValue,
    Entity, Individual, Model, PropertyContainer, PropertyKind, PropertyMetadata,
    PropertyProvider, Relation,
};

// Data types and reactions
pub use aurora_engine::{BasicType, DataType, EnumType, TypeRegistry, Validation};
pub use aurora_engine::{ReactionHandler, ReactionTable};
