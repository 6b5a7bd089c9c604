//! Tier 1: Ledger invariants
//!
//! - Ids are unique; a rejected append changes nothing
//! - Scans page through insertion order
//! - Ancestry is reflexive and always terminates

use aurora::{meta, Event, EventId, Tag};
use proptest::prelude::*;

use crate::test_utils::*;

#[test]
fn test_duplicate_append_leaves_original() {
    let mut store = store_with_actor();
    let before = store.len();

    let err = store
        .append(Event::new(ACTOR_MAIN, meta::ROLE, Tag::INDIVIDUAL, "impostor"))
        .unwrap_err();

    assert!(err.is_duplicate_id());
    assert_eq!(store.len(), before);
    assert_eq!(store.get(ACTOR_MAIN).unwrap().payload, "Actor_Main");
}

#[test]
fn test_scan_pages_in_insertion_order() {
    let store = store_with_actor();
    let total = store.len();

    let all = store.scan(0, Some(total + 10));
    assert_eq!(all.len(), total);
    assert_eq!(all.last().unwrap().id, ACTOR_MAIN);

    let page = store.scan(2, Some(3));
    let ids: Vec<EventId> = page.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![meta::ACTOR, meta::ENTITY, meta::RELATION]);

    assert!(store.scan(total, Some(5)).is_empty());
}

#[test]
fn test_ancestry_of_bootstrap_vocabulary() {
    let store = store();
    let o = store.ontology();

    assert!(o.is_ancestor(meta::ATTRIBUTE_CONSTRAINT, meta::BASIC_TYPE));
    assert!(o.is_ancestor(meta::EVENT, meta::NAME));
    assert!(o.is_ancestor(meta::NAME, meta::NAME));
    assert!(!o.is_ancestor(meta::NAME, meta::ATTRIBUTE));
    assert_eq!(
        o.ancestors(meta::BASIC_TYPE),
        vec![meta::BASIC_TYPE, meta::DATA_TYPE, meta::ATTRIBUTE_CONSTRAINT, meta::EVENT]
    );
}

#[test]
fn test_ancestry_with_cycle_terminates() {
    let mut store = store();
    store
        .append(Event::new(EventId::new(2000), EventId::new(2001), Tag::SUB_EVENT, "a"))
        .unwrap();
    store
        .append(Event::new(EventId::new(2001), EventId::new(2000), Tag::SUB_EVENT, "b"))
        .unwrap();
    let o = store.ontology();

    assert!(!o.is_ancestor(meta::EVENT, EventId::new(2000)));
    assert!(o.is_ancestor(EventId::new(2001), EventId::new(2000)));
}

proptest! {
    #[test]
    fn prop_every_stored_id_is_retrievable(ids in proptest::collection::vec(1000u64..1100, 0..50)) {
        let mut store = aurora::Aurora::open(aurora::AuroraConfig::new().bootstrap(false)).unwrap();
        let mut accepted = Vec::new();
        for raw in ids {
            let id = EventId::new(raw);
            let result = store.append(Event::new(id, meta::EVENT, Tag::SUB_EVENT, raw.to_string()));
            prop_assert_eq!(result.is_ok(), !accepted.contains(&id));
            if result.is_ok() {
                accepted.push(id);
            }
        }
        prop_assert_eq!(store.len(), accepted.len());
        for id in accepted {
            prop_assert_eq!(store.get(id).unwrap().payload.clone(), id.get().to_string());
        }
    }
}
