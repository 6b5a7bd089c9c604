//! Built-in ontology table.
//!
//! The table defines the meta-event vocabulary plus the minimal data-type
//! and attribute scaffolding (`basic_type`, `enum_type`, `Name`, `Delete`).
//! It is sorted by id and contains no forward references: every `parent`
//! and `condition` is appended before the events that point at it.

use aurora_core::meta::*;
use aurora_core::{AuroraResult, Event, EventId, Tag};
use aurora_storage::Ledger;

/// The bootstrap records, in append order.
pub fn bootstrap_events() -> Vec<Event> {
    vec![
        Event::new(EVENT, EVENT, Tag::new(EVENT), "Event"),
        Event::new(SUB_EVENT, EVENT, Tag::new(EVENT), "SubEvent"),
        sub_event(ACTOR, EVENT, "Actor", EVENT),
        sub_event(ENTITY, EVENT, "Entity", EVENT),
        sub_event(RELATION, EVENT, "Relation", EVENT),
        sub_event(ATTRIBUTE, EVENT, "Attribute", EVENT),
        sub_event(ATTRIBUTE_CONSTRAINT, EVENT, "AttributeConstraint", EVENT),
        sub_event(MODEL, EVENT, "Model", EVENT),
        sub_event(INDIVIDUAL, EVENT, "Individual", EVENT),
        model(EVENT_MODEL, EVENT, "Model_Event", EVENT),
        model(ENTITY_MODEL, ENTITY, "Model_Entity", EVENT_MODEL),
        model(RELATION_MODEL, RELATION, "Model_Relation", EVENT_MODEL),
        sub_event(DATA_TYPE, ATTRIBUTE_CONSTRAINT, "DataType", ATTRIBUTE_CONSTRAINT),
        model(DATA_TYPE_MODEL, DATA_TYPE, "Model_DataType", EVENT_MODEL),
        individual(BASIC_TYPE, DATA_TYPE, "basic_type", DATA_TYPE_MODEL),
        model(ATTRIBUTE_MODEL, ATTRIBUTE, "Model_Attribute", EVENT_MODEL),
        model_constraint(EventId::new(16), ATTRIBUTE_MODEL, DATA_TYPE),
        individual(NAME, ATTRIBUTE, "Name", ATTRIBUTE_MODEL),
        data_type(EventId::new(18), NAME, BASIC_TYPE),
        model_attribute(EventId::new(19), EVENT_MODEL, NAME),
        model(ACTOR_MODEL, ACTOR, "Model_Actor", EVENT_MODEL),
        sub_event(ROLE, EVENT, "Role", EVENT),
        model(ROLE_MODEL, ROLE, "Model_Role", EVENT_MODEL),
        individual(ENUM_TYPE, DATA_TYPE, "enum_type", DATA_TYPE_MODEL),
        sub_event(ATTRIBUTE_VALUE, EVENT, "AttributeValue", ATTRIBUTE_CONSTRAINT),
        sub_event(VALUE_PROPERTY, EVENT, "ValueProperty", EVENT),
        sub_event(CARDINALITY, VALUE_PROPERTY, "Cardinality", VALUE_PROPERTY),
        sub_event(REQUIRED, VALUE_PROPERTY, "Required", VALUE_PROPERTY),
        sub_event(PERMISSION, VALUE_PROPERTY, "Permission", VALUE_PROPERTY),
        individual(DELETE, ATTRIBUTE, "Delete", ATTRIBUTE_MODEL),
        data_type(EventId::new(32), DELETE, ENUM_TYPE),
        attribute_value(DELETE_TRUE, DELETE, "1"),
        attribute_value(DELETE_FALSE, DELETE, "0"),
    ]
}

/// Append the bootstrap table to `ledger`.
///
/// Fails on the first id already present.
pub fn ingest(ledger: &mut Ledger) -> AuroraResult<usize> {
    let count = ledger.append_batch(bootstrap_events())?;
    tracing::debug!(target: "aurora::bootstrap", events = count, "Ingested bootstrap ontology");
    Ok(count)
}

fn sub_event(id: EventId, parent: EventId, name: &str, condition: EventId) -> Event {
    Event::new(id, parent, Tag::SUB_EVENT, name).with_condition(condition)
}

fn model(id: EventId, kind: EventId, name: &str, parent_model: EventId) -> Event {
    Event::new(id, kind, Tag::MODEL, name).with_condition(parent_model)
}

fn individual(id: EventId, kind: EventId, name: &str, model: EventId) -> Event {
    Event::new(id, kind, Tag::INDIVIDUAL, name).with_condition(model)
}

fn model_constraint(id: EventId, model: EventId, constraint: EventId) -> Event {
    Event::new(id, model, Tag::ATTRIBUTE_CONSTRAINT, constraint.to_ref()).with_condition(model)
}

fn data_type(id: EventId, attribute: EventId, data_type: EventId) -> Event {
    Event::new(id, attribute, Tag::DATA_TYPE, data_type.to_ref()).with_condition(attribute)
}

fn model_attribute(id: EventId, model: EventId, attribute: EventId) -> Event {
    Event::new(id, model, Tag::ATTRIBUTE, attribute.to_ref()).with_condition(model)
}

fn attribute_value(id: EventId, attribute: EventId, value: &str) -> Event {
    Event::new(id, attribute, Tag::ATTRIBUTE_VALUE, value).with_condition(attribute)
}
