//! Tier 3: Property resolution
//!
//! - Mutable declarations expose only the latest value
//! - Immutable declarations accumulate in timestamp order
//! - Boxed values and relations resolve to the referenced payload

use aurora::{meta, Event, EventId, Tag};

use crate::test_utils::*;

#[test]
fn test_end_to_end_actor_name() {
    let mut store = store_with_actor();
    name_actor(&mut store, 1001, "Main Actor", 1);
    let o = store.ontology();

    assert_eq!(o.get_individual_attribute(ACTOR_MAIN, meta::NAME), vec!["Main Actor"]);
    assert!(o.get_individual_attribute(ACTOR_MAIN, meta::DELETE).is_empty());

    let all = o.get_individual_attributes(ACTOR_MAIN);
    assert_eq!(all.len(), 1);
    assert_eq!(all[&meta::NAME], vec!["Main Actor".to_string()]);
}

#[test]
fn test_mutable_round_trip() {
    let mut store = store_with_actor();
    make_name_mutable(&mut store);
    name_actor(&mut store, 1001, "v1", 1);
    name_actor(&mut store, 1002, "v2", 2);
    name_actor(&mut store, 1003, "v3", 3);

    assert_eq!(store.ontology().get_individual_attribute(ACTOR_MAIN, meta::NAME), vec!["v3"]);
}

#[test]
fn test_mutable_ignores_arrival_order() {
    let mut store = store_with_actor();
    make_name_mutable(&mut store);
    name_actor(&mut store, 1001, "newest", 9);
    name_actor(&mut store, 1002, "stale", 4);

    assert_eq!(store.ontology().get_individual_attribute(ACTOR_MAIN, meta::NAME), vec!["newest"]);
}

#[test]
fn test_immutable_accumulation() {
    let mut store = store_with_actor();
    name_actor(&mut store, 1001, "second", 2);
    name_actor(&mut store, 1002, "first", 1);

    assert_eq!(
        store.ontology().get_individual_attribute(ACTOR_MAIN, meta::NAME),
        vec!["first", "second"]
    );
}

#[test]
fn test_attachment_metadata_through_inheritance() {
    let mut store = store_with_actor();
    make_name_mutable(&mut store);
    let o = store.ontology();

    let container = o.get_property_container(ACTOR_MAIN).unwrap();
    let attached = o.provider_attribute(container.provider(), meta::NAME).unwrap();
    assert_eq!(attached.attachment_id(), NAME_DECLARATION);

    let metadata = o.attachment_metadata(&attached);
    assert!(metadata.mutable);
    assert!(!metadata.required);
    assert_eq!(metadata.cardinality, None);
}

#[test]
fn test_boxed_value_dereference() {
    let mut store = store_with_actor();
    let label = EventId::new(1100);
    let labelled = EventId::new(1101);
    // A boxed attribute whose values point at events carrying display text
    store
        .append_all(vec![
            Event::new(label, meta::ATTRIBUTE, Tag::INDIVIDUAL, "Label").with_condition(meta::ATTRIBUTE_MODEL),
            Event::new(EventId::new(1102), label, Tag::DATA_TYPE, meta::ENUM_TYPE.to_ref()),
            Event::new(EventId::new(1103), label, Tag::ATTRIBUTE_VALUE, "Main Actor"),
            Event::new(EventId::new(1104), meta::ACTOR_MODEL, Tag::ATTRIBUTE, label.to_ref()),
            Event::new(labelled, ACTOR_MAIN, Tag::new(label), "1103"),
        ])
        .unwrap();
    let o = store.ontology();

    let values = o.container_attribute(ACTOR_MAIN, label);
    assert_eq!(values.len(), 1);
    assert_eq!(values[0].value(), "Main Actor");
    assert_eq!(values[0].raw(), "1103");
    assert_eq!(values[0].event().id, labelled);
    assert_eq!(o.get_individual_attribute(ACTOR_MAIN, label), vec!["Main Actor"]);
}

#[test]
fn test_dangling_boxed_reference_is_dropped() {
    let mut store = store_with_actor();
    store
        .append_all(vec![
            Event::new(EventId::new(1100), meta::ACTOR_MODEL, Tag::ATTRIBUTE, meta::DELETE.to_ref()),
            Event::new(EventId::new(1101), ACTOR_MAIN, Tag::new(meta::DELETE), "424242"),
        ])
        .unwrap();

    assert!(store.ontology().container_attribute(ACTOR_MAIN, meta::DELETE).is_empty());
    assert!(store.ontology().container_attributes(ACTOR_MAIN).is_empty());
}

#[test]
fn test_relation_targets() {
    let mut store = store_with_actor();
    let reports_to = EventId::new(1100);
    let boss = EventId::new(1101);
    store
        .append_all(vec![
            Event::new(reports_to, meta::RELATION, Tag::INDIVIDUAL, "reports_to"),
            Event::new(EventId::new(1102), meta::ACTOR_MODEL, Tag::RELATION, reports_to.to_ref()),
            Event::new(boss, meta::ACTOR, Tag::INDIVIDUAL, "Actor_Boss").with_condition(meta::ACTOR_MODEL),
            Event::new(EventId::new(1103), ACTOR_MAIN, Tag::new(reports_to), boss.to_ref()),
        ])
        .unwrap();
    let o = store.ontology();

    let targets = o.container_relation(ACTOR_MAIN, reports_to);
    assert_eq!(targets.len(), 1);
    assert_eq!(targets[0].value(), "Actor_Boss");
    assert!(targets[0].is_boxed());
    assert_eq!(o.container_relations(ACTOR_MAIN).len(), 1);
    assert!(o.container_relation(boss, reports_to).is_empty());
}

#[test]
fn test_unconditional_individual_has_no_values() {
    let mut store = store();
    let loose = EventId::new(1100);
    store
        .append_all(vec![
            Event::new(loose, meta::ACTOR, Tag::INDIVIDUAL, "loose"),
            Event::new(EventId::new(1101), loose, Tag::new(meta::NAME), "ignored"),
        ])
        .unwrap();
    let o = store.ontology();

    assert!(o.get_property_container(loose).is_none());
    assert!(o.get_individual_attribute(loose, meta::NAME).is_empty());
    assert!(o.get_individual_attributes(loose).is_empty());
}
