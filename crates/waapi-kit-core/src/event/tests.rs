use super::*;
use crate::{
    Error,
    client::Client,
    gateway::Args,
    testing::MockGateway,
    types::{Guid, Name, Path},
    value::DecodeError,
};
use serde_json::{Value as JsonValue, json};
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

const ID: &str = "{1C2B3A4D-5E6F-4A1B-9C8D-0E1F2A3B4C5D}";
const OTHER: &str = "{AAAAAAAA-BBBB-4CCC-8DDD-EEEEEEEEEEEE}";

fn payload(value: &JsonValue) -> Args {
    value.as_object().cloned().unwrap_or_default()
}

///
/// MULTICAST
///

#[test]
fn listeners_run_in_registration_order() {
    let event = Event::<u32>::new();
    let seen = Arc::new(Mutex::new(Vec::new()));

    for tag in ["a", "b", "c"] {
        let seen = Arc::clone(&seen);
        event.connect(move |n| seen.lock().unwrap().push(format!("{tag}{n}")));
    }

    assert_eq!(event.emit(&1), 3);
    assert_eq!(*seen.lock().unwrap(), vec!["a1", "b1", "c1"]);
}

#[test]
fn disconnect_removes_only_that_listener() {
    let event = Event::<()>::new();
    let first = event.connect(|_| {});
    let _second = event.connect(|_| {});

    assert!(event.disconnect(first));
    assert!(!event.disconnect(first));
    assert_eq!(event.listener_count(), 1);
}

///
/// DISPATCH
///

#[test]
fn zero_listeners_never_decode() {
    let event = Event::<u32>::new();
    let decodes = AtomicUsize::new(0);

    let outcome = dispatch(&event, &Args::new(), |_| {
        decodes.fetch_add(1, Ordering::SeqCst);
        Ok(7)
    });

    assert_eq!(outcome, Ok(Dispatch::Skipped));
    assert_eq!(decodes.load(Ordering::SeqCst), 0);

    event.connect(|_| {});
    let outcome = dispatch(&event, &Args::new(), |_| {
        decodes.fetch_add(1, Ordering::SeqCst);
        Ok(7)
    });

    assert_eq!(outcome, Ok(Dispatch::Delivered(1)));
    assert_eq!(decodes.load(Ordering::SeqCst), 1);
}

///
/// PAYLOADS
///

#[test]
fn name_changed_decodes_a_fixed_payload() {
    let raw = payload(&json!({
        "object": { "id": ID, "name": "Bar", "type": "Sound", "path": "\\A\\Bar" },
        "oldName": "Foo",
        "newName": "Bar",
    }));

    let decoded = NameChanged::decode(&raw).unwrap();
    assert_eq!(decoded.object.id, Guid::parse(ID).unwrap());
    assert_eq!(decoded.object.kind, "Sound");
    assert_eq!(decoded.object.path, Path::new("\\A\\Bar").unwrap());
    assert_eq!(decoded.old_name, "Foo");
    assert_eq!(decoded.new_name, "Bar");
}

#[test]
fn missing_optional_fields_become_sentinels() {
    let raw = payload(&json!({ "object": { "id": ID } }));

    let decoded = PropertyChanged::decode(&raw).unwrap();
    assert_eq!(decoded.object.name, Name::null());
    assert_eq!(decoded.property, Name::null());
    assert_eq!(decoded.old_value, JsonValue::Null);
    assert_eq!(decoded.platform, Guid::NULL);
}

#[test]
fn malformed_payloads_are_errors() {
    assert_eq!(
        ObjectCreated::decode(&Args::new()),
        Err(DecodeError::MissingField {
            field: "object".to_string()
        })
    );

    let raw = payload(&json!({ "object": { "id": "not-a-guid" } }));
    assert!(matches!(
        ObjectCreated::decode(&raw),
        Err(DecodeError::InvalidIdentifier { .. })
    ));

    let raw = payload(&json!({ "objects": [1, 2] }));
    assert!(SelectionChanged::decode(&raw).is_err());
}

#[test]
fn property_changed_reads_platform_objects() {
    let raw = payload(&json!({
        "object": { "id": ID },
        "propertyName": "Volume",
        "oldValue": 0.0,
        "newValue": -6.0,
        "platform": { "id": OTHER, "name": "Windows" },
    }));

    let decoded = PropertyChanged::decode(&raw).unwrap();
    assert_eq!(decoded.property, "Volume");
    assert_eq!(decoded.new_value, json!(-6.0));
    assert_eq!(decoded.platform, Guid::parse(OTHER).unwrap());
}

///
/// BRIDGE
///

#[test]
fn bridge_delivers_decoded_payloads() {
    let mock = Arc::new(MockGateway::new());
    let client = Client::new(mock.clone());

    let mut bridge = Bridge::new(&client, topic::NAME_CHANGED);
    assert!(!bridge.is_subscribed());
    assert!(bridge.subscribe().unwrap());

    let options = mock.subscriptions()[0].options.clone().unwrap();
    assert_eq!(options["return"], json!(["id", "name", "type", "path"]));

    let names = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&names);
    bridge.connect(move |args: &NameChanged| {
        sink.lock().unwrap().push(args.new_name.to_string());
    });

    let results = mock.emit(
        topic::NAME_CHANGED.name(),
        &json!({ "object": { "id": ID }, "oldName": "A", "newName": "B" }),
    );
    assert!(results.iter().all(Result::is_ok));
    assert_eq!(*names.lock().unwrap(), vec!["B"]);

    let report = client.metrics_report();
    assert_eq!(report.subscriptions, 1);
    assert_eq!(report.payloads_decoded, 1);
}

#[test]
fn bridge_skips_payloads_without_listeners() {
    let mock = Arc::new(MockGateway::new());
    let client = Client::new(mock.clone());

    let mut bridge = Bridge::new(&client, topic::OBJECT_CREATED);
    bridge.subscribe().unwrap();

    // malformed, but never decoded
    let results = mock.emit(topic::OBJECT_CREATED.name(), &json!({}));
    assert!(results[0].is_ok());
    assert_eq!(client.metrics_report().payloads_skipped, 1);
}

#[test]
fn bridge_propagates_decode_errors_to_the_gateway() {
    let mock = Arc::new(MockGateway::new());
    let client = Client::new(mock.clone());

    let mut bridge = Bridge::new(&client, topic::OBJECT_CREATED);
    bridge.subscribe().unwrap();
    bridge.connect(|_| {});

    let results = mock.emit(topic::OBJECT_CREATED.name(), &json!({ "object": 5 }));
    assert!(matches!(
        results[0],
        Err(Error::Decode(DecodeError::UnexpectedShape { .. }))
    ));
}

#[test]
fn double_subscribe_creates_two_registrations() {
    let mock = Arc::new(MockGateway::new());
    let client = Client::new(mock.clone());

    let mut bridge = Bridge::new(&client, topic::PROJECT_SAVED);
    bridge.subscribe().unwrap();
    bridge.subscribe().unwrap();

    let count = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&count);
    bridge.connect(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    mock.emit(topic::PROJECT_SAVED.name(), &json!({}));
    assert_eq!(count.load(Ordering::SeqCst), 2);

    assert_eq!(bridge.unsubscribe(), 2);
    assert_eq!(mock.subscription_count(), 0);
}

#[test]
fn drop_releases_gateway_handles() {
    let mock = Arc::new(MockGateway::new());
    let client = Client::new(mock.clone());

    {
        let mut bridge = Bridge::new(&client, topic::PROJECT_LOADED);
        bridge.subscribe().unwrap();
        assert_eq!(mock.subscription_count(), 1);
    }

    assert_eq!(mock.subscription_count(), 0);
    assert_eq!(client.metrics_report().releases, 1);
}

#[test]
fn refused_subscribe_follows_the_failure_policy() {
    let mock = Arc::new(MockGateway::new());
    mock.fail_subscriptions(true);

    let quiet = Client::new(mock.clone());
    let mut bridge = Bridge::new(&quiet, topic::PROJECT_LOADED);
    assert!(!bridge.subscribe().unwrap());
    assert!(!bridge.is_subscribed());

    let loud = Client::builder(mock.clone()).raise_on_failure(true).build();
    let mut bridge = Bridge::new(&loud, topic::PROJECT_LOADED);
    assert!(matches!(
        bridge.subscribe(),
        Err(Error::SubscribeFailed { .. })
    ));
}

#[test]
fn missing_wiring_is_reported_at_registration() {
    let mock = Arc::new(MockGateway::new());
    let client = Client::new(mock.clone());

    let no_decoder = SubscriptionBuilder::<ProjectSaved>::new("ak.wwise.core.project.saved")
        .dispatch_to(Arc::new(Event::new()))
        .register(&client);
    assert!(matches!(no_decoder, Err(Error::MissingDecoder { .. })));

    let no_target = SubscriptionBuilder::new("ak.wwise.core.project.saved")
        .decoder(ProjectSaved::decode)
        .register(&client);
    assert!(matches!(
        no_target,
        Err(Error::MissingDispatchTarget { .. })
    ));

    assert_eq!(mock.subscription_count(), 0);
}

///
/// WATCH
///

#[test]
fn watches_fan_in_to_one_event() {
    let mock = Arc::new(MockGateway::new());
    let client = Client::new(mock.clone());
    let a = Guid::parse(ID).unwrap();
    let b = Guid::parse(OTHER).unwrap();

    let mut watch = PropertyWatch::new(&client);
    assert_eq!(watch.watch_all([(a, "Volume"), (b, "Pitch")]).unwrap(), 2);
    assert_eq!(watch.len(), 2);

    let narrowed: Vec<_> = mock
        .subscriptions()
        .into_iter()
        .map(|s| s.options.unwrap()["property"].clone())
        .collect();
    assert_eq!(narrowed, vec![json!("Volume"), json!("Pitch")]);

    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    watch.connect(move |change| {
        sink.lock()
            .unwrap()
            .push((change.object.id, change.property.to_string()));
    });

    mock.emit(
        topic::PROPERTY_CHANGED.name(),
        &json!({ "object": { "id": OTHER }, "propertyName": "Pitch", "newValue": 3 }),
    );

    // the mock does not filter, so both registrations deliver the payload
    assert_eq!(
        *seen.lock().unwrap(),
        vec![(b, "Pitch".to_string()), (b, "Pitch".to_string())]
    );

    assert_eq!(watch.clear(), 2);
    assert!(watch.is_empty());
}
