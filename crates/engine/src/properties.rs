//! Property resolution: providers, declarations and container values.
//!
//! A provider (schema) declares attributes and relations with events
//! `parent == provider, tag ∈ {Attribute, Relation}, payload == <id>`.
//! Model providers inherit along their model chain, nearest first.
//! A container (instance) gets its provider from its `condition`.
//!
//! # Value semantics
//!
//! Values of property P on container C are events `parent == C, tag == P`.
//! A mutable declaration (Permission `"1"`) keeps only the latest value; an
//! immutable one keeps them all in timestamp order. Ties fall back to
//! insertion order. Boxed values are references and are dereferenced to the
//! target's payload; references that do not resolve are dropped.

use std::collections::{BTreeMap, HashSet};

use aurora_core::{meta, Event, EventId, Tag};

use crate::ontology::{latest, Ontology};
use crate::views::*;

impl<'a> Ontology<'a> {
    // =========================================================================
    // Providers
    // =========================================================================

    /// The provider rooted at `id`: a model provider when `id` is a model,
    /// a bare provider for any other stored event.
    pub fn get_property_provider(&self, id: EventId) -> Option<PropertyProvider> {
        if let Some(model) = self.get_model(id) {
            return Some(PropertyProvider::Model(model));
        }
        self.ledger()
            .contains(id)
            .then_some(PropertyProvider::Event(id))
    }

    /// The provider's declaration of `attribute`, nearest model first.
    pub fn provider_attribute(
        &self,
        provider: &PropertyProvider,
        attribute: EventId,
    ) -> Option<AttachedProperty> {
        self.provider_declaration(provider, PropertyKind::Attribute, attribute)
    }

    /// All attribute declarations visible on the provider.
    pub fn provider_attributes(&self, provider: &PropertyProvider) -> Vec<AttachedProperty> {
        self.provider_declarations(provider, PropertyKind::Attribute)
    }

    /// The provider's declaration of `relation`, nearest model first.
    pub fn provider_relation(
        &self,
        provider: &PropertyProvider,
        relation: EventId,
    ) -> Option<AttachedProperty> {
        self.provider_declaration(provider, PropertyKind::Relation, relation)
    }

    /// All relation declarations visible on the provider.
    pub fn provider_relations(&self, provider: &PropertyProvider) -> Vec<AttachedProperty> {
        self.provider_declarations(provider, PropertyKind::Relation)
    }

    // =========================================================================
    // Declaration metadata
    // =========================================================================

    /// The latest value-property record of kind `property` on a declaration.
    pub fn attachment_value_property(
        &self,
        attachment: &AttachedProperty,
        property: EventId,
    ) -> Option<Event> {
        self.get_attr_property(property)?;
        let id = attachment.attachment_id();
        latest(
            self.ledger()
                .iter()
                .filter(|e| e.parent == id && e.tag.event_id() == property),
        )
        .cloned()
    }

    /// Every value-property record on a declaration.
    pub fn attachment_value_properties(&self, attachment: &AttachedProperty) -> Vec<Event> {
        let id = attachment.attachment_id();
        self.ledger()
            .iter()
            .filter(|e| e.parent == id)
            .filter(|e| self.get_attr_property(e.tag.event_id()).is_some())
            .cloned()
            .collect()
    }

    /// Cardinality, required and mutability flags of a declaration.
    pub fn attachment_metadata(&self, attachment: &AttachedProperty) -> PropertyMetadata {
        let flag = |property| {
            self.attachment_value_property(attachment, property)
                .map_or(false, |e| e.payload == meta::FLAG_SET)
        };
        let cardinality = self
            .attachment_value_property(attachment, meta::CARDINALITY)
            .and_then(|e| match e.payload.trim().parse::<u32>() {
                Ok(n) => Some(n),
                Err(_) => {
                    tracing::warn!(
                        target: "aurora::properties",
                        attachment = %attachment.attachment_id(),
                        payload = %e.payload,
                        "Ignoring non-numeric cardinality"
                    );
                    None
                }
            });

        PropertyMetadata {
            cardinality,
            required: flag(meta::REQUIRED),
            mutable: flag(meta::PERMISSION),
        }
    }

    // =========================================================================
    // Containers
    // =========================================================================

    /// The container at `id`, with its resolved provider.
    ///
    /// None unless `id` is an individual or an attribute/relation value and
    /// its condition names a stored event.
    pub fn get_property_container(&self, id: EventId) -> Option<PropertyContainer> {
        let event = self.ledger().get(id)?;
        if !self.is_container_event(event) {
            return None;
        }
        let provider = self.container_provider(id)?;
        Some(PropertyContainer::new(id, provider))
    }

    /// The provider named by the container's condition.
    pub fn container_provider(&self, container: EventId) -> Option<PropertyProvider> {
        let event = self.ledger().get(container)?;
        if !event.is_conditional() {
            tracing::trace!(target: "aurora::properties", container = %container, "Unconditional container");
            return None;
        }
        self.get_property_provider(event.condition)
    }

    /// Current value(s) of `attribute` on `container`.
    pub fn container_attribute(&self, container: EventId, attribute: EventId) -> Vec<BoxedValue> {
        self.resolve(container, PropertyKind::Attribute, attribute)
    }

    /// Current values of every attribute stored on `container`.
    ///
    /// Attributes whose declaration cannot be resolved are omitted.
    pub fn container_attributes(&self, container: EventId) -> BTreeMap<EventId, Vec<BoxedValue>> {
        self.resolve_all(container, PropertyKind::Attribute)
    }

    /// Current target(s) of `relation` on `container`.
    pub fn container_relation(&self, container: EventId, relation: EventId) -> Vec<BoxedValue> {
        self.resolve(container, PropertyKind::Relation, relation)
    }

    /// Current targets of every relation stored on `container`.
    pub fn container_relations(&self, container: EventId) -> BTreeMap<EventId, Vec<BoxedValue>> {
        self.resolve_all(container, PropertyKind::Relation)
    }

    /// Display values of `attribute` on an individual.
    pub fn get_individual_attribute(&self, individual: EventId, attribute: EventId) -> Vec<String> {
        if self.get_individual(individual).is_none() {
            return Vec::new();
        }
        self.container_attribute(individual, attribute)
            .into_iter()
            .map(BoxedValue::into_value)
            .collect()
    }

    /// Display values of every attribute on an individual.
    pub fn get_individual_attributes(&self, individual: EventId) -> BTreeMap<EventId, Vec<String>> {
        if self.get_individual(individual).is_none() {
            return BTreeMap::new();
        }
        self.container_attributes(individual)
            .into_iter()
            .map(|(attribute, values)| {
                (attribute, values.into_iter().map(BoxedValue::into_value).collect())
            })
            .collect()
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn is_container_event(&self, e: &Event) -> bool {
        let tag = e.tag.event_id();
        self.is_individual_event(e)
            || self.is_ancestor(meta::ATTRIBUTE, tag)
            || self.is_ancestor(meta::RELATION, tag)
    }

    fn is_property(&self, kind: PropertyKind, id: EventId) -> bool {
        match kind {
            PropertyKind::Attribute => self.get_attribute(id).is_some(),
            PropertyKind::Relation => self.get_relation(id).is_some(),
        }
    }

    /// Provider ids to search, nearest first.
    fn provider_scope(&self, provider: &PropertyProvider) -> Vec<EventId> {
        match provider {
            PropertyProvider::Event(id) => vec![*id],
            PropertyProvider::Model(model) => {
                self.model_chain(model.id()).iter().map(Model::id).collect()
            }
        }
    }

    fn provider_declaration(
        &self,
        provider: &PropertyProvider,
        kind: PropertyKind,
        property: EventId,
    ) -> Option<AttachedProperty> {
        let tag = Tag::new(kind.meta());
        self.provider_scope(provider).into_iter().find_map(|scope| {
            latest(
                self.ledger()
                    .iter()
                    .filter(|e| e.parent == scope && e.tag == tag)
                    .filter(|e| e.payload_ref() == Some(property)),
            )
            .cloned()
            .map(|e| AttachedProperty::new(e, kind, property))
        })
    }

    fn provider_declarations(
        &self,
        provider: &PropertyProvider,
        kind: PropertyKind,
    ) -> Vec<AttachedProperty> {
        let tag = Tag::new(kind.meta());
        let mut declared: Vec<AttachedProperty> = Vec::new();
        let mut inherited: HashSet<EventId> = HashSet::new();

        for scope in self.provider_scope(provider) {
            let mut local: Vec<AttachedProperty> = Vec::new();
            for e in self.ledger().iter().filter(|e| e.parent == scope && e.tag == tag) {
                let Some(property) = self.reference(e) else {
                    continue;
                };
                if inherited.contains(&property) {
                    continue;
                }
                let attached = AttachedProperty::new(e.clone(), kind, property);
                match local.iter_mut().find(|a| a.property_id() == property) {
                    Some(slot) if slot.event().timestamp <= e.timestamp => *slot = attached,
                    Some(_) => {}
                    None => local.push(attached),
                }
            }
            inherited.extend(local.iter().map(AttachedProperty::property_id));
            declared.extend(local);
        }
        declared
    }

    fn resolve(&self, container: EventId, kind: PropertyKind, property: EventId) -> Vec<BoxedValue> {
        if !self.is_property(kind, property) {
            tracing::trace!(target: "aurora::properties", property = %property, "Not a declared property kind");
            return Vec::new();
        }
        let Some(container) = self.get_property_container(container) else {
            tracing::trace!(target: "aurora::properties", container = %container, "No provider for container");
            return Vec::new();
        };
        let Some(attachment) = self.provider_declaration(container.provider(), kind, property) else {
            tracing::trace!(
                target: "aurora::properties",
                container = %container.id(),
                property = %property,
                "Property not declared by provider"
            );
            return Vec::new();
        };

        let metadata = self.attachment_metadata(&attachment);
        let tag = Tag::new(property);
        let id = container.id();
        let stored = self
            .ledger()
            .iter()
            .filter(|e| e.parent == id && e.tag == tag);

        let current: Vec<&Event> = if metadata.mutable {
            latest(stored).into_iter().collect()
        } else {
            let mut all: Vec<&Event> = stored.collect();
            // Stable sort keeps insertion order on equal timestamps
            all.sort_by_key(|e| e.timestamp);
            all
        };

        let boxed = match kind {
            PropertyKind::Relation => true,
            PropertyKind::Attribute => self.is_attribute_boxed(property),
        };
        current
            .into_iter()
            .filter_map(|e| self.unbox(e, boxed))
            .collect()
    }

    fn resolve_all(&self, container: EventId, kind: PropertyKind) -> BTreeMap<EventId, Vec<BoxedValue>> {
        let mut properties: Vec<EventId> = Vec::new();
        for e in self.ledger().iter().filter(|e| e.parent == container) {
            let property = e.tag.event_id();
            if !properties.contains(&property) && self.is_property(kind, property) {
                properties.push(property);
            }
        }

        properties
            .into_iter()
            .filter_map(|property| {
                let values = self.resolve(container, kind, property);
                (!values.is_empty()).then_some((property, values))
            })
            .collect()
    }

    fn unbox(&self, e: &Event, boxed: bool) -> Option<BoxedValue> {
        if !boxed {
            return Some(BoxedValue::literal(e.clone()));
        }
        match e.payload_ref().and_then(|id| self.ledger().get(id)) {
            Some(target) => Some(BoxedValue::dereferenced(e.clone(), target.payload.clone())),
            None => {
                tracing::warn!(
                    target: "aurora::properties",
                    id = %e.id,
                    payload = %e.payload,
                    "Dropping unresolvable boxed value"
                );
                None
            }
        }
    }
}
