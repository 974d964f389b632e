use compphys_kmc::{Event, EventCollection, Generator, GeneratorConfig};

#[test]
fn event_serializes_as_named_fields() {
    let event = Event::new(1.5, 4.25, 7);

    let json = serde_json::to_value(event).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "queue_time": 1.5, "execution_time": 4.25, "process_id": 7 })
    );
}

#[test]
fn collection_is_a_plain_array() {
    let events = Generator::from_seed(&GeneratorConfig::default(), 5).generate(10);

    let json = serde_json::to_string(&events).unwrap();
    assert!(json.starts_with('['));

    let restored: EventCollection = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, events);
}
