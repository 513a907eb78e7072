use serde_json::json;
use std::sync::{Arc, Mutex};
use waapi_kit::{
    ClientConfig, Error, connect,
    core::{gateway::endpoint, testing::MockGateway, value::DecodeError},
    prelude::*,
};

const SOUND_ID: &str = "{1C2B3A4D-5E6F-4A1B-9C8D-0E1F2A3B4C5D}";
const BUS_ID: &str = "{AAAAAAAA-BBBB-4CCC-8DDD-EEEEEEEEEEEE}";

fn sound_id() -> Guid {
    Guid::parse(SOUND_ID).unwrap()
}

fn setup(config: ClientConfig) -> (Arc<MockGateway>, Client) {
    let mock = Arc::new(MockGateway::new());
    let client = connect(mock.clone(), config).unwrap();

    (mock, client)
}

#[test]
fn name_round_trips_through_one_call() {
    let (mock, client) = setup(ClientConfig::default());
    mock.respond(
        endpoint::OBJECT_GET,
        json!({
            "return": [{ "id": SOUND_ID, "name": "Foo", "type": "Sound", "path": "\\A\\Foo" }]
        }),
    );

    let sound = client.entity_of::<Sound>(sound_id());
    assert_eq!(sound.name().unwrap(), "Foo");
    assert_eq!(mock.call_count(), 1);

    let info = sound.info().unwrap();
    assert_eq!(info.kind, "Sound");
    assert_eq!(info.path.last_segment(), Some("Foo"));
}

#[test]
fn output_bus_is_set_by_reference() {
    let (mock, client) = setup(ClientConfig::default());
    mock.respond(endpoint::OBJECT_SET_REFERENCE, json!({}));

    let bus = client.entity_of::<Bus>(Guid::parse(BUS_ID).unwrap());
    let sound = client.entity_of::<Sound>(sound_id());

    assert!(sound.set(&Sound::OUTPUT_BUS, &bus.reference()).unwrap());

    let call = mock.last_call().unwrap();
    assert_eq!(call.args["reference"], json!("OutputBus"));
    assert_eq!(call.args["value"], json!(BUS_ID));
}

#[test]
fn enum_properties_decode_by_wire_value() {
    let (mock, client) = setup(ClientConfig::default());
    let sound = client.entity_of::<Sound>(sound_id());

    for member in SpeakerPanning::members() {
        mock.respond_once(
            endpoint::OBJECT_GET,
            json!({ "return": [{ "@SpeakerPanning": member.wire_value() }] }),
        );
        assert_eq!(sound.get(&Sound::SPEAKER_PANNING).unwrap(), *member);
    }

    mock.respond_once(
        endpoint::OBJECT_GET,
        json!({ "return": [{ "@SpeakerPanning": 42 }] }),
    );
    let err = sound.get(&Sound::SPEAKER_PANNING).unwrap_err();
    assert!(matches!(
        err,
        Error::Decode(DecodeError::NoMatchingEnumMember { .. })
    ));
}

#[test]
fn attributes_are_checked_against_the_standard_schema() {
    let (mock, client) = setup(ClientConfig::default());
    let sound = client.entity_of::<Sound>(sound_id());

    let err = sound.get(&Action::DELAY).unwrap_err();
    let Error::UnknownProperty { kind, .. } = err else {
        panic!("unexpected {err:?}");
    };
    assert_eq!(kind, "Sound");
    assert_eq!(mock.call_count(), 0);

    let volume = client.dyn_property("Sound", "Volume").unwrap();
    mock.respond(
        endpoint::OBJECT_GET,
        json!({ "return": [{ "@Volume": -12.0 }] }),
    );
    assert_eq!(
        client.entity(sound_id()).get(&volume).unwrap(),
        waapi_kit::core::value::PropertyValue::Real(-12.0)
    );
}

#[test]
fn raising_client_reports_failed_calls() {
    let config = ClientConfig::from_toml_str("raise_on_failure = true").unwrap();
    let (mock, client) = setup(config);
    let sound = client.entity_of::<Sound>(sound_id());

    let err = sound.set(&Sound::VOLUME, &-6.0).unwrap_err();
    assert!(err.is_remote());

    mock.respond(endpoint::OBJECT_SET_PROPERTY, json!({}));
    assert!(sound.set(&Sound::VOLUME, &-6.0).unwrap());
}

#[test]
fn configured_platform_applies_to_property_access() {
    let config = ClientConfig::from_toml_str(&format!("platform = \"{BUS_ID}\"")).unwrap();
    let (mock, client) = setup(config);
    mock.respond(
        endpoint::OBJECT_GET,
        json!({ "return": [{ "@Pitch": 100 }] }),
    );

    let sound = client.entity_of::<Sound>(sound_id());
    assert_eq!(sound.get(&Sound::PITCH).unwrap(), 100);

    let options = mock.last_call().unwrap().options.unwrap();
    assert_eq!(options["platform"], json!(BUS_ID));
}

#[test]
fn query_results_become_handles() {
    let (mock, client) = setup(ClientConfig::default());
    mock.respond(
        endpoint::OBJECT_GET,
        json!({
            "return": [{ "id": SOUND_ID, "name": "Foo", "type": "Sound", "path": "\\A\\Foo" }]
        }),
    );

    let query = Query::new()
        .from_kinds([Sound::NAME])
        .where_(("Volume", "<", -6.0), false)
        .take(10);
    let found = client.query(&query).unwrap();

    assert_eq!(found.len(), 1);
    assert_eq!(
        mock.last_call().unwrap().args["waql"],
        json!("$ from type Sound where Volume < -6.0 take 10")
    );

    let reference =
        ObjectRef::kind_name(Name::new("Sound").unwrap(), Name::new("Foo").unwrap()).unwrap();
    let resolved = client.resolve(&reference).unwrap().unwrap();
    assert_eq!(resolved.id(), sound_id());
}

#[test]
fn watched_volume_changes_reach_one_listener() {
    let (mock, client) = setup(ClientConfig::default());
    let sound = client.entity_of::<Sound>(sound_id());

    let mut watch = PropertyWatch::new(&client);
    assert!(watch.watch(&sound, &Sound::VOLUME).unwrap());

    let changes = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&changes);
    watch.connect(move |change| {
        sink.lock().unwrap().push(change.new_value.clone());
    });

    mock.emit(
        topic::PROPERTY_CHANGED.name(),
        &json!({
            "object": { "id": SOUND_ID, "name": "Foo" },
            "propertyName": "Volume",
            "oldValue": 0.0,
            "newValue": -3.0,
        }),
    );

    assert_eq!(*changes.lock().unwrap(), vec![json!(-3.0)]);

    drop(watch);
    assert_eq!(mock.subscription_count(), 0);
}
