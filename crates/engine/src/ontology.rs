//! Ontology projector.
//!
//! Classifies raw ledger events into typed views. Every view is decided by
//! a predicate over the event's `tag` (exact match) and its `parent`
//! (exact match or ancestry), so classification never depends on anything
//! outside the ledger.
//!
//! | View | Predicate |
//! |------|-----------|
//! | Individual | `tag == Individual` |
//! | Attribute | Individual ∧ `parent` descends from `Attribute` |
//! | Relation | Individual ∧ `parent` descends from `Relation` |
//! | Actor | Individual ∧ `parent` descends from `Actor` |
//! | Role | Individual ∧ `parent` descends from `Role` |
//! | Model | `tag == Model` |
//! | Entity | `tag == SubEvent` ∧ `parent == Entity` |
//! | AttrProperty | `tag == SubEvent` ∧ `parent == ValueProperty` |
//! | AttrConstraint | `tag == SubEvent` ∧ `parent` descends from `AttributeConstraint` |
//!
//! Attributes, relations, actors and roles are individuals too; that
//! overlap is part of the vocabulary. Lookups never fail: a miss is `None`
//! or an empty list. Bulk lookups scan the whole ledger.

use std::collections::HashSet;
use std::sync::Arc;

use aurora_core::{meta, Event, EventId, Tag};
use aurora_storage::Ledger;

use crate::ancestry;
use crate::datatype::{DataType, TypeRegistry, Validation};
use crate::views::*;

/// Kinds of view an event can project to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ViewKind {
    /// See [`Individual`].
    Individual,
    /// See [`Attribute`].
    Attribute,
    /// See [`Relation`].
    Relation,
    /// Individual of `Actor`.
    Actor,
    /// Individual of `Role`.
    Role,
    /// See [`Model`].
    Model,
    /// See [`Entity`].
    Entity,
    /// See [`AttrProperty`].
    AttrProperty,
    /// See [`AttrConstraint`].
    AttrConstraint,
}

/// Read-only projection context over a ledger and a type registry.
///
/// Cheap to copy; holds two borrows and nothing else.
#[derive(Clone, Copy)]
pub struct Ontology<'a> {
    ledger: &'a Ledger,
    types: &'a TypeRegistry,
}

impl<'a> Ontology<'a> {
    /// Create a projector over `ledger`, validating with `types`.
    pub fn new(ledger: &'a Ledger, types: &'a TypeRegistry) -> Self {
        Self { ledger, types }
    }

    /// The ledger being projected.
    pub fn ledger(&self) -> &'a Ledger {
        self.ledger
    }

    /// The type registry in use.
    pub fn types(&self) -> &'a TypeRegistry {
        self.types
    }

    // =========================================================================
    // Events and ancestry
    // =========================================================================

    /// Get a raw event.
    pub fn get_event(&self, id: EventId) -> Option<&'a Event> {
        self.ledger.get(id)
    }

    /// Whether `candidate` is on the parent chain of `start`.
    pub fn is_ancestor(&self, candidate: EventId, start: EventId) -> bool {
        ancestry::is_ancestor(self.ledger, candidate, start)
    }

    /// The parent chain of `start`, `start` first.
    pub fn ancestors(&self, start: EventId) -> Vec<EventId> {
        ancestry::ancestors(self.ledger, start)
    }

    /// Every view kind `id` projects to.
    pub fn classify(&self, id: EventId) -> Vec<ViewKind> {
        let Some(e) = self.ledger.get(id) else {
            return Vec::new();
        };
        let checks = [
            (ViewKind::Individual, self.is_individual_event(e)),
            (ViewKind::Attribute, self.is_kind_of(e, meta::ATTRIBUTE)),
            (ViewKind::Relation, self.is_kind_of(e, meta::RELATION)),
            (ViewKind::Actor, self.is_kind_of(e, meta::ACTOR)),
            (ViewKind::Role, self.is_kind_of(e, meta::ROLE)),
            (ViewKind::Model, self.is_model_event(e)),
            (ViewKind::Entity, self.is_entity_event(e)),
            (ViewKind::AttrProperty, self.is_attr_property_event(e)),
            (ViewKind::AttrConstraint, self.is_attr_constraint_event(e)),
        ];
        checks
            .into_iter()
            .filter_map(|(kind, hit)| hit.then_some(kind))
            .collect()
    }

    // =========================================================================
    // Attributes
    // =========================================================================

    /// Get an attribute, or None if `id` is not one.
    pub fn get_attribute(&self, id: EventId) -> Option<Attribute> {
        self.project(id, |e| self.is_kind_of(e, meta::ATTRIBUTE), Attribute::from_event)
    }

    /// All attributes.
    pub fn get_attributes(&self) -> Vec<Attribute> {
        self.project_all(|e| self.is_kind_of(e, meta::ATTRIBUTE), Attribute::from_event)
    }

    /// The data-type individual named by the attribute's `DataType` constraint.
    pub fn get_attribute_data_type_individual(&self, attribute: EventId) -> Option<Individual> {
        let constraint = self.get_attached_constraint(attribute, meta::DATA_TYPE)?;
        self.attached_constraint_value(&constraint)
    }

    /// The registered validator for an attribute's data type.
    pub fn get_attribute_data_type(&self, attribute: EventId) -> Option<Arc<dyn DataType>> {
        let individual = self.get_attribute_data_type_individual(attribute)?;
        self.get_data_type(individual.value())
    }

    /// Whether an attribute's values are references to other events.
    pub fn is_attribute_boxed(&self, attribute: EventId) -> bool {
        self.get_attribute_data_type(attribute)
            .map_or(false, |t| t.is_boxed())
    }

    /// Validate a literal against an attribute's data type.
    ///
    /// `UnknownType` when the attribute has no data type or the type name is
    /// not registered.
    pub fn validate_attribute_value(&self, attribute: EventId, literal: &str) -> Validation {
        match self.get_attribute_data_type_individual(attribute) {
            Some(individual) => self.types.validate(individual.value(), literal),
            None => Validation::UnknownType,
        }
    }

    /// A single value candidate of an attribute.
    pub fn get_attribute_value_candidate(&self, attribute: EventId, value: EventId) -> Option<Event> {
        self.ledger
            .get(value)
            .filter(|e| e.parent == attribute && e.tag == Tag::ATTRIBUTE_VALUE)
            .cloned()
    }

    /// All value candidates of an attribute (e.g. `1`/`0` for `Delete`).
    pub fn get_attribute_value_candidates(&self, attribute: EventId) -> Vec<Event> {
        self.ledger
            .iter()
            .filter(|e| e.parent == attribute && e.tag == Tag::ATTRIBUTE_VALUE)
            .cloned()
            .collect()
    }

    // =========================================================================
    // Constraints
    // =========================================================================

    /// Get a constraint kind.
    pub fn get_attr_constraint(&self, id: EventId) -> Option<AttrConstraint> {
        self.project(id, |e| self.is_attr_constraint_event(e), AttrConstraint::from_event)
    }

    /// All constraint kinds.
    pub fn get_attr_constraints(&self) -> Vec<AttrConstraint> {
        self.project_all(|e| self.is_attr_constraint_event(e), AttrConstraint::from_event)
    }

    /// Individuals allowed as values of a constraint kind
    /// (e.g. `basic_type` and `enum_type` for `DataType`).
    pub fn get_attr_constraint_values(&self, constraint: EventId) -> Vec<Individual> {
        if self.get_attr_constraint(constraint).is_none() {
            return Vec::new();
        }
        self.project_all(
            |e| e.parent == constraint && self.is_individual_event(e),
            Individual::from_event,
        )
    }

    /// Constraint kinds registered on a model.
    pub fn get_model_constraints(&self, model: EventId) -> Vec<AttrConstraint> {
        self.ledger
            .iter()
            .filter(|e| e.parent == model && e.tag == Tag::ATTRIBUTE_CONSTRAINT)
            .filter_map(|e| self.reference(e))
            .filter_map(|id| self.get_attr_constraint(id))
            .collect()
    }

    /// The constraint of kind `constraint` attached to `attribute`.
    ///
    /// When attached several times the latest record wins.
    pub fn get_attached_constraint(
        &self,
        attribute: EventId,
        constraint: EventId,
    ) -> Option<AttachedAttrConstraint> {
        self.get_attribute(attribute)?;
        self.get_attr_constraint(constraint)?;
        latest(
            self.ledger
                .iter()
                .filter(|e| e.parent == attribute && e.tag.event_id() == constraint),
        )
        .cloned()
        .map(AttachedAttrConstraint::from_event)
    }

    /// All constraints attached to `attribute`.
    pub fn get_attached_constraints(&self, attribute: EventId) -> Vec<AttachedAttrConstraint> {
        if self.get_attribute(attribute).is_none() {
            return Vec::new();
        }
        self.ledger
            .iter()
            .filter(|e| e.parent == attribute)
            .filter(|e| self.get_attr_constraint(e.tag.event_id()).is_some())
            .cloned()
            .map(AttachedAttrConstraint::from_event)
            .collect()
    }

    /// The individual an attached constraint points at.
    pub fn attached_constraint_value(&self, constraint: &AttachedAttrConstraint) -> Option<Individual> {
        self.get_individual(constraint.value_id()?)
    }

    // =========================================================================
    // Value properties
    // =========================================================================

    /// Get a value property slot (Cardinality, Required, Permission...).
    pub fn get_attr_property(&self, id: EventId) -> Option<AttrProperty> {
        self.project(id, |e| self.is_attr_property_event(e), AttrProperty::from_event)
    }

    /// All value property slots.
    pub fn get_attr_properties(&self) -> Vec<AttrProperty> {
        self.project_all(|e| self.is_attr_property_event(e), AttrProperty::from_event)
    }

    /// Individuals declared as possible values of a value property.
    pub fn get_attr_property_values(&self, property: EventId) -> Vec<Individual> {
        if self.get_attr_property(property).is_none() {
            return Vec::new();
        }
        self.project_all(
            |e| e.parent == property && self.is_individual_event(e),
            Individual::from_event,
        )
    }

    // =========================================================================
    // Models
    // =========================================================================

    /// Get a model.
    pub fn get_model(&self, id: EventId) -> Option<Model> {
        self.project(id, |e| self.is_model_event(e), Model::from_event)
    }

    /// All models.
    pub fn get_models(&self) -> Vec<Model> {
        self.project_all(|e| self.is_model_event(e), Model::from_event)
    }

    /// The first model defined directly on `kind` (e.g. `Model_Attribute`).
    pub fn get_meta_model(&self, kind: EventId) -> Option<Model> {
        self.ledger
            .iter()
            .find(|e| e.parent == kind && self.is_model_event(e))
            .cloned()
            .map(Model::from_event)
    }

    /// The model describing attributes.
    pub fn get_attr_model(&self) -> Option<Model> {
        self.get_meta_model(meta::ATTRIBUTE)
    }

    /// `model` followed by the models it extends, nearest first.
    ///
    /// Empty when `model` is not a model. Stops at the first parent that is
    /// not a model or was already visited.
    pub fn model_chain(&self, model: EventId) -> Vec<Model> {
        let mut chain = Vec::new();
        let mut seen = HashSet::new();
        let mut next = Some(model);

        while let Some(id) = next {
            if !seen.insert(id) {
                tracing::warn!(target: "aurora::ontology", model = %model, at = %id, "Model chain cycle");
                break;
            }
            let Some(current) = self.get_model(id) else {
                break;
            };
            next = current.parent_model();
            chain.push(current);
        }
        chain
    }

    // =========================================================================
    // Entities
    // =========================================================================

    /// Get an entity kind.
    pub fn get_entity(&self, id: EventId) -> Option<Entity> {
        self.project(id, |e| self.is_entity_event(e), Entity::from_event)
    }

    /// All entity kinds.
    pub fn get_entities(&self) -> Vec<Entity> {
        self.project_all(|e| self.is_entity_event(e), Entity::from_event)
    }

    /// Models defined on an entity kind.
    pub fn get_entity_models(&self, entity: EventId) -> Vec<Model> {
        self.project_all(
            |e| e.parent == entity && self.is_model_event(e),
            Model::from_event,
        )
    }

    /// Individuals of an entity kind.
    pub fn get_entity_individuals(&self, entity: EventId) -> Vec<Individual> {
        self.project_all(
            |e| e.parent == entity && self.is_individual_event(e),
            Individual::from_event,
        )
    }

    // =========================================================================
    // Individuals, actors, roles
    // =========================================================================

    /// Get an individual.
    pub fn get_individual(&self, id: EventId) -> Option<Individual> {
        self.project(id, |e| self.is_individual_event(e), Individual::from_event)
    }

    /// All individuals.
    pub fn get_individuals(&self) -> Vec<Individual> {
        self.project_all(|e| self.is_individual_event(e), Individual::from_event)
    }

    /// Get an actor.
    pub fn get_actor(&self, id: EventId) -> Option<Individual> {
        self.project(id, |e| self.is_kind_of(e, meta::ACTOR), Individual::from_event)
    }

    /// All actors.
    pub fn get_actors(&self) -> Vec<Individual> {
        self.project_all(|e| self.is_kind_of(e, meta::ACTOR), Individual::from_event)
    }

    /// Get a role.
    pub fn get_role(&self, id: EventId) -> Option<Individual> {
        self.project(id, |e| self.is_kind_of(e, meta::ROLE), Individual::from_event)
    }

    /// All roles.
    pub fn get_roles(&self) -> Vec<Individual> {
        self.project_all(|e| self.is_kind_of(e, meta::ROLE), Individual::from_event)
    }

    // =========================================================================
    // Relations
    // =========================================================================

    /// Get a relation.
    pub fn get_relation(&self, id: EventId) -> Option<Relation> {
        self.project(id, |e| self.is_kind_of(e, meta::RELATION), Relation::from_event)
    }

    /// All relations.
    pub fn get_relations(&self) -> Vec<Relation> {
        self.project_all(|e| self.is_kind_of(e, meta::RELATION), Relation::from_event)
    }

    /// Individuals a relation may point at: individuals of an entity kind,
    /// and actors.
    pub fn get_relation_value_candidates(&self) -> Vec<Individual> {
        self.project_all(
            |e| {
                self.is_individual_event(e)
                    && (self.get_entity(e.parent).is_some()
                        || self.is_ancestor(meta::ACTOR, e.parent))
            },
            Individual::from_event,
        )
    }

    // =========================================================================
    // Data types
    // =========================================================================

    /// The data-type individual with this name.
    pub fn get_data_type_individual(&self, name: &str) -> Option<Individual> {
        self.ledger
            .iter()
            .find(|e| e.parent == meta::DATA_TYPE && self.is_individual_event(e) && e.payload == name)
            .cloned()
            .map(Individual::from_event)
    }

    /// The registered validator with this name.
    pub fn get_data_type(&self, name: &str) -> Option<Arc<dyn DataType>> {
        self.types.get(name).cloned()
    }

    // =========================================================================
    // Predicates and helpers
    // =========================================================================

    pub(crate) fn is_individual_event(&self, e: &Event) -> bool {
        e.tag == Tag::INDIVIDUAL
    }

    pub(crate) fn is_kind_of(&self, e: &Event, kind: EventId) -> bool {
        self.is_individual_event(e) && self.is_ancestor(kind, e.parent)
    }

    pub(crate) fn is_model_event(&self, e: &Event) -> bool {
        e.tag == Tag::MODEL
    }

    fn is_entity_event(&self, e: &Event) -> bool {
        e.tag == Tag::SUB_EVENT && e.parent == meta::ENTITY
    }

    fn is_attr_property_event(&self, e: &Event) -> bool {
        e.tag == Tag::SUB_EVENT && e.parent == meta::VALUE_PROPERTY
    }

    fn is_attr_constraint_event(&self, e: &Event) -> bool {
        e.tag == Tag::SUB_EVENT && self.is_ancestor(meta::ATTRIBUTE_CONSTRAINT, e.parent)
    }

    /// Payload of `e` read as a reference, logging when it is not one.
    pub(crate) fn reference(&self, e: &Event) -> Option<EventId> {
        let id = e.payload_ref();
        if id.is_none() {
            tracing::warn!(
                target: "aurora::ontology",
                id = %e.id,
                payload = %e.payload,
                "Expected a reference payload"
            );
        }
        id
    }

    fn project<T>(
        &self,
        id: EventId,
        predicate: impl Fn(&Event) -> bool,
        view: fn(Event) -> T,
    ) -> Option<T> {
        self.ledger
            .get(id)
            .filter(|e| predicate(e))
            .cloned()
            .map(view)
    }

    fn project_all<T>(&self, predicate: impl Fn(&Event) -> bool, view: fn(Event) -> T) -> Vec<T> {
        self.ledger
            .iter()
            .filter(|e| predicate(e))
            .cloned()
            .map(view)
            .collect()
    }
}

/// The most recent event by timestamp; on ties the last inserted.
pub(crate) fn latest<'e>(events: impl Iterator<Item = &'e Event>) -> Option<&'e Event> {
    events.max_by_key(|e| e.timestamp)
}
