//! In-memory `tracing` sink for asserting on what the pipeline logs.
//!
//! Installed per test with [`EventLog::install`], which scopes the subscriber
//! to the current thread; `#[tokio::test]` polls everything on that thread.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::{Arc, Mutex};

use tracing::field::{Field, Visit};
use tracing::subscriber::DefaultGuard;
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::{Layer, registry};

#[derive(Debug, Clone, Default)]
pub struct Captured {
    pub message: String,
    pub fields: BTreeMap<String, String>,
}

impl Captured {
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }
}

struct FieldVisitor<'a>(&'a mut Captured);

impl FieldVisitor<'_> {
    fn insert(&mut self, field: &Field, value: String) {
        if field.name() == "message" {
            self.0.message = value;
        } else {
            self.0.fields.insert(field.name().to_string(), value);
        }
    }
}

impl Visit for FieldVisitor<'_> {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.insert(field, value.to_string());
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.insert(field, format!("{value:?}"));
    }
}

/// Records every event. With [`EventLog::panicking_on`] it also panics right
/// after recording the named event, from inside whichever stage emitted it.
#[derive(Clone, Default)]
pub struct EventLog {
    events: Arc<Mutex<Vec<Captured>>>,
    fail_on: Option<&'static str>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn panicking_on(message: &'static str) -> Self {
        Self {
            fail_on: Some(message),
            ..Self::default()
        }
    }

    pub fn install(&self) -> DefaultGuard {
        tracing::subscriber::set_default(registry().with(self.clone()))
    }

    pub fn events(&self) -> Vec<Captured> {
        self.events.lock().unwrap().clone()
    }

    pub fn messages(&self) -> Vec<String> {
        self.events().into_iter().map(|e| e.message).collect()
    }

    pub fn find(&self, message: &str) -> Option<Captured> {
        self.events().into_iter().find(|e| e.message == message)
    }
}

impl<S: Subscriber> Layer<S> for EventLog {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut captured = Captured::default();
        event.record(&mut FieldVisitor(&mut captured));

        let fail = self.fail_on == Some(captured.message.as_str());
        self.events.lock().unwrap().push(captured);

        if fail {
            panic!("log sink rejected event");
        }
    }
}
