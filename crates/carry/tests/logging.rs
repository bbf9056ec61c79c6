use std::fmt;
use std::sync::{Arc, Mutex};

use carry::prelude::*;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

/// One recorded event: its level and `name=value` fields.
#[derive(Debug, Clone)]
struct Recorded {
    level: Level,
    fields: Vec<(String, String)>,
}

impl Recorded {
    fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

struct Fields<'a>(&'a mut Vec<(String, String)>);

impl Visit for Fields<'_> {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.0.push((field.name().to_string(), value.to_string()));
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.0.push((field.name().to_string(), format!("{value:?}")));
    }
}

#[derive(Clone, Default)]
struct Recorder(Arc<Mutex<Vec<Recorded>>>);

impl<S: Subscriber> Layer<S> for Recorder {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut fields = Vec::new();
        event.record(&mut Fields(&mut fields));
        self.0.lock().expect("recorder lock poisoned").push(Recorded {
            level: *event.metadata().level(),
            fields,
        });
    }
}

fn record<R>(f: impl FnOnce() -> R) -> (R, Vec<Recorded>) {
    let recorder = Recorder::default();
    let subscriber = tracing_subscriber::registry().with(recorder.clone());
    let out = tracing::subscriber::with_default(subscriber, f);
    let events = recorder.0.lock().expect("recorder lock poisoned").clone();
    (out, events)
}

#[test]
fn test_anonymous_transform_logs_run() {
    let inc = Transform::new(|x: i32| data!(x + 1));
    let (out, events) = record(|| inc.call(1));

    assert_eq!(out.value(), 2);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].level, Level::TRACE);
    assert_eq!(events[0].field("step"), Some("<anonymous>"));
    assert_eq!(events[0].field("arity"), Some("1"));
}

#[test]
fn test_named_transform_logs_name_and_arity() {
    let add = Transform::new(|a: i32, b: i32| data!(a + b)).named("add");
    let (_, events) = record(|| add.call(2, 3));

    assert_eq!(events.len(), 1);
    assert_eq!(events[0].field("step"), Some("add"));
    assert_eq!(events[0].field("arity"), Some("2"));
}

#[test]
fn test_failed_step_logs_debug_event() {
    let parse = try_lift(|s: &'static str| s.parse::<u8>().map(|n| (n,)));
    let (out, events) = record(|| parse.call("nope"));

    assert!(out.is_err());
    let failures: Vec<_> = events
        .iter()
        .filter(|event| event.level == Level::DEBUG)
        .collect();
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].field("step"), Some("<anonymous>"));
    assert_eq!(failures[0].field("arity"), Some("1"));
}

#[test]
fn test_successful_step_logs_no_failure() {
    let parse = try_lift(|s: &'static str| s.parse::<u8>().map(|n| (n,))).named("parse");
    let (out, events) = record(|| parse.call("7"));

    assert_eq!(out, Ok(data!(7)));
    assert!(events.iter().all(|event| event.level == Level::TRACE));
    assert!(events
        .iter()
        .any(|event| event.field("step") == Some("parse")));
}
