//! Recording layer for asserting spans and events in tests.
//!
//! Install a [`RecordingLayer`] on a `tracing_subscriber::registry()` for the
//! duration of a call, then inspect what the call emitted. Spans are captured
//! when they close, so a span that is still open does not appear.

use std::{
    collections::HashMap,
    fmt,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use tracing::{
    Event, Level, Subscriber,
    field::{Field, Visit},
    span::{Attributes, Id, Record},
};
use tracing_subscriber::{Layer, layer::Context, registry::LookupSpan};

/// Field key under which `tracing` stores an event's message.
pub const MESSAGE_FIELD: &str = "message";

/// Captures closed spans and emitted events.
///
/// Clones share storage, so keep one clone for assertions and hand another
/// to the subscriber.
///
/// # Examples
/// ```
/// use spanwalk_test_support::tracing::RecordingLayer;
/// use tracing_subscriber::layer::SubscriberExt;
///
/// let layer = RecordingLayer::default();
/// let subscriber = tracing_subscriber::registry().with(layer.clone());
/// tracing::subscriber::with_default(subscriber, || {
///     let _guard = tracing::info_span!("demo", size = 3).entered();
///     tracing::info!("inside");
/// });
/// let span = layer.span_named("demo").expect("span closed");
/// assert_eq!(span.field("size"), Some("3"));
/// assert!(layer.has_event(tracing::Level::INFO, "inside"));
/// ```
#[derive(Clone, Default)]
pub struct RecordingLayer {
    records: Arc<Mutex<Recorded>>,
}

#[derive(Default)]
struct Recorded {
    spans: Vec<SpanRecord>,
    events: Vec<EventRecord>,
}

impl RecordingLayer {
    fn records(&self) -> MutexGuard<'_, Recorded> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Closed spans in completion order.
    #[must_use]
    pub fn spans(&self) -> Vec<SpanRecord> {
        self.records().spans.clone()
    }

    /// Events in emission order.
    #[must_use]
    pub fn events(&self) -> Vec<EventRecord> {
        self.records().events.clone()
    }

    /// Returns the first closed span called `name`.
    #[must_use]
    pub fn span_named(&self, name: &str) -> Option<SpanRecord> {
        self.records()
            .spans
            .iter()
            .find(|span| span.name == name)
            .cloned()
    }

    /// Returns `true` when an event at `level` carried `message`.
    #[must_use]
    pub fn has_event(&self, level: Level, message: &str) -> bool {
        self.records()
            .events
            .iter()
            .any(|event| event.level == level && event.message() == Some(message))
    }

    /// Counts events emitted at `level`.
    #[must_use]
    pub fn count_at(&self, level: Level) -> usize {
        self.records()
            .events
            .iter()
            .filter(|event| event.level == level)
            .count()
    }
}

/// A span as it looked when it closed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanRecord {
    /// Span name from its metadata.
    pub name: String,
    /// Fields recorded at creation or later through `Span::record`.
    pub fields: HashMap<String, String>,
}

impl SpanRecord {
    /// Returns the rendered value of `key`.
    #[must_use]
    pub fn field(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }
}

/// An emitted event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRecord {
    /// Event level.
    pub level: Level,
    /// Event target, usually the emitting module path.
    pub target: String,
    /// Rendered fields, including [`MESSAGE_FIELD`].
    pub fields: HashMap<String, String>,
}

impl EventRecord {
    /// Returns the event's message, if it had one.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.field(MESSAGE_FIELD)
    }

    /// Returns the rendered value of `key`.
    #[must_use]
    pub fn field(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }
}

struct OpenSpan(SpanRecord);

impl<S> Layer<S> for RecordingLayer
where
    S: Subscriber + for<'lookup> LookupSpan<'lookup>,
{
    fn on_new_span(&self, attrs: &Attributes<'_>, id: &Id, ctx: Context<'_, S>) {
        let Some(span) = ctx.span(id) else {
            return;
        };
        let mut record = SpanRecord {
            name: attrs.metadata().name().to_owned(),
            fields: HashMap::new(),
        };
        attrs.record(&mut FieldRenderer(&mut record.fields));
        span.extensions_mut().insert(OpenSpan(record));
    }

    fn on_record(&self, id: &Id, values: &Record<'_>, ctx: Context<'_, S>) {
        let Some(span) = ctx.span(id) else {
            return;
        };
        if let Some(OpenSpan(record)) = span.extensions_mut().get_mut::<OpenSpan>() {
            values.record(&mut FieldRenderer(&mut record.fields));
        }
    }

    fn on_close(&self, id: Id, ctx: Context<'_, S>) {
        let Some(span) = ctx.span(&id) else {
            return;
        };
        let closed = span.extensions_mut().remove::<OpenSpan>();
        if let Some(OpenSpan(record)) = closed {
            self.records().spans.push(record);
        }
    }

    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut fields = HashMap::new();
        event.record(&mut FieldRenderer(&mut fields));
        let metadata = event.metadata();
        self.records().events.push(EventRecord {
            level: *metadata.level(),
            target: metadata.target().to_owned(),
            fields,
        });
    }
}

/// Renders every field to a string. Integers and booleans use `Display`,
/// `%value` fields arrive through `record_debug` already formatted.
struct FieldRenderer<'a>(&'a mut HashMap<String, String>);

impl FieldRenderer<'_> {
    fn put(&mut self, field: &Field, value: String) {
        self.0.insert(field.name().to_owned(), value);
    }
}

impl Visit for FieldRenderer<'_> {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.put(field, format!("{value:?}"));
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.put(field, value.to_owned());
    }

    fn record_error(&mut self, field: &Field, value: &(dyn std::error::Error + 'static)) {
        self.put(field, value.to_string());
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.put(field, value.to_string());
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.put(field, value.to_string());
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.put(field, value.to_string());
    }
}
