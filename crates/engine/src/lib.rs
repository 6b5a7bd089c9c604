//! Ontology engine for Aurora
//!
//! This crate interprets the ledger as an ontology:
//! - ancestry: reflexive, cycle-bounded walks over the parent chain
//! - bootstrap: the built-in meta-event table
//! - datatype: named literal validators
//! - ontology: classification of events into typed views
//! - properties: providers, declarations and current container values
//! - reactions: per-kind callbacks fired after append
//!
//! Nothing here is cached. Every query is recomputed from the ledger, so a
//! view is always consistent with the events present when it was asked for.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod ancestry;
pub mod bootstrap;
pub mod datatype;
pub mod ontology;
pub mod properties;
pub mod reactions;
pub mod views;

pub use datatype::{BasicType, DataType, EnumType, TypeRegistry, Validation};
pub use ontology::{Ontology, ViewKind};
pub use reactions::{ReactionHandler, ReactionTable};
pub use views::{
    AttachedAttrConstraint, AttachedProperty, AttrConstraint, AttrProperty, Attribute, BoxedValue,
    Entity, Individual, Model, PropertyContainer, PropertyKind, PropertyMetadata,
    PropertyProvider, Relation,
};
