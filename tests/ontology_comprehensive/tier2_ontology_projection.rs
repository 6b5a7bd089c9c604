//! Tier 2: Ontology projection
//!
//! - Views are decided by tag and ancestry alone
//! - Specific kinds overlap only with Individual
//! - Constraints and data types resolve through the registry

use std::sync::Arc;

use aurora::{meta, DataType, Event, EventId, Tag, Validation, ViewKind};

use crate::test_utils::*;

struct Digits;

impl DataType for Digits {
    fn name(&self) -> &str {
        "digits"
    }

    fn validate(&self, literal: &str) -> bool {
        !literal.is_empty() && literal.bytes().all(|b| b.is_ascii_digit())
    }
}

#[test]
fn test_classification_overlaps_only_with_individual() {
    let mut store = store_with_actor();
    store
        .append(Event::new(EventId::new(1001), meta::RELATION, Tag::INDIVIDUAL, "reports_to"))
        .unwrap();
    store
        .append(Event::new(EventId::new(1002), meta::ROLE, Tag::INDIVIDUAL, "Admin"))
        .unwrap();
    let o = store.ontology();

    assert_eq!(o.classify(ACTOR_MAIN), vec![ViewKind::Individual, ViewKind::Actor]);
    assert_eq!(
        o.classify(EventId::new(1001)),
        vec![ViewKind::Individual, ViewKind::Relation]
    );
    assert_eq!(o.classify(EventId::new(1002)), vec![ViewKind::Individual, ViewKind::Role]);
    assert_eq!(o.classify(meta::ACTOR_MODEL), vec![ViewKind::Model]);
    assert_eq!(o.classify(meta::PERMISSION), vec![ViewKind::AttrProperty]);
    assert_eq!(o.classify(meta::DATA_TYPE), vec![ViewKind::AttrConstraint]);
    assert!(o.classify(meta::ACTOR).is_empty());
}

#[test]
fn test_individual_created_under_model() {
    let store = store_with_actor();
    let o = store.ontology();

    let actor = o.get_actor(ACTOR_MAIN).unwrap();
    assert_eq!(actor.kind(), meta::ACTOR);
    assert_eq!(actor.model(), Some(meta::ACTOR_MODEL));
    assert_eq!(o.get_individual(ACTOR_MAIN).unwrap().value(), "Actor_Main");
    assert!(o.get_individuals().iter().any(|i| i.id() == ACTOR_MAIN));
}

#[test]
fn test_custom_entity_schema() {
    let mut store = store();
    let document = EventId::new(1100);
    let model = EventId::new(1101);
    store
        .append_all(vec![
            Event::new(document, meta::ENTITY, Tag::SUB_EVENT, "Document"),
            Event::new(model, document, Tag::MODEL, "Model_Document").with_condition(meta::ENTITY_MODEL),
            Event::new(EventId::new(1102), document, Tag::INDIVIDUAL, "Report").with_condition(model),
        ])
        .unwrap();
    let o = store.ontology();

    assert_eq!(o.get_entity(document).unwrap().value(), "Document");
    assert_eq!(o.get_entity_models(document).len(), 1);
    let chain: Vec<EventId> = o.model_chain(model).iter().map(|m| m.id()).collect();
    assert_eq!(chain, vec![model, meta::ENTITY_MODEL, meta::EVENT_MODEL]);
    assert_eq!(o.get_relation_value_candidates().len(), 1);
}

#[test]
fn test_custom_data_type_validation() {
    let mut store = store();
    let digits = EventId::new(1200);
    let age = EventId::new(1201);
    store
        .append_all(vec![
            Event::new(digits, meta::DATA_TYPE, Tag::INDIVIDUAL, "digits"),
            Event::new(age, meta::ATTRIBUTE, Tag::INDIVIDUAL, "Age").with_condition(meta::ATTRIBUTE_MODEL),
            Event::new(EventId::new(1202), age, Tag::DATA_TYPE, digits.to_ref()),
        ])
        .unwrap();

    assert_eq!(store.ontology().validate_attribute_value(age, "42"), Validation::UnknownType);

    assert!(store.register_type(Arc::new(Digits)).is_none());
    let o = store.ontology();
    assert_eq!(o.validate_attribute_value(age, "42"), Validation::Valid);
    assert_eq!(o.validate_attribute_value(age, "forty"), Validation::Invalid);
    assert!(!o.is_attribute_boxed(age));
    assert_eq!(o.get_attr_constraint_values(meta::DATA_TYPE).len(), 3);
}

#[test]
fn test_enum_attribute_candidates() {
    let store = store();
    let o = store.ontology();

    assert!(o.is_attribute_boxed(meta::DELETE));
    let candidates: Vec<EventId> = o
        .get_attribute_value_candidates(meta::DELETE)
        .iter()
        .map(|e| e.id)
        .collect();
    assert_eq!(candidates, vec![meta::DELETE_TRUE, meta::DELETE_FALSE]);
}
