//! Shared fixtures for the ontology suite.

use aurora::{meta, Aurora, Event, EventId, Tag};

/// The actor used by most scenarios.
pub const ACTOR_MAIN: EventId = EventId::new(1000);

/// EventModel's declaration of `Name` in the bootstrap table.
pub const NAME_DECLARATION: EventId = EventId::new(19);

/// Install a test subscriber once; later calls are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

/// A bootstrapped store.
pub fn store() -> Aurora {
    init_tracing();
    Aurora::in_memory().unwrap()
}

/// A bootstrapped store holding `Actor_Main`, created under the actor model.
pub fn store_with_actor() -> Aurora {
    let mut store = store();
    store
        .append(
            Event::new(ACTOR_MAIN, meta::ACTOR, Tag::INDIVIDUAL, "Actor_Main")
                .with_condition(meta::ACTOR_MODEL),
        )
        .unwrap();
    store
}

/// Append a `Name` value on `Actor_Main`.
pub fn name_actor(store: &mut Aurora, id: u64, value: &str, timestamp: u64) {
    store
        .append(Event::new(EventId::new(id), ACTOR_MAIN, Tag::new(meta::NAME), value).at(timestamp))
        .unwrap();
}

/// Mark the bootstrap `Name` declaration as mutable.
pub fn make_name_mutable(store: &mut Aurora) {
    store
        .append(Event::new(
            EventId::new(5000),
            NAME_DECLARATION,
            Tag::new(meta::PERMISSION),
            meta::FLAG_SET,
        ))
        .unwrap();
}
