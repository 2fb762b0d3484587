//! In-memory event capture for logging assertions in tests
//!
//! `init_test_capture` installs a global subscriber whose only layer records
//! every event as a flat map of field values. Tests then query the shared
//! handle by operation name, level or field.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex, OnceLock};

use portdelta_core_types::schema::{FIELD_COMPONENT, FIELD_ERR_CODE, FIELD_EVENT, FIELD_OP};
use tracing::field::{Field, Visit};
use tracing::{Level, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

/// One recorded event
///
/// `component`, `op` and `event` are lifted out of `fields` for the
/// canonical operation events; every field stays available in `fields`,
/// including the formatted `message`.
#[derive(Clone, Debug)]
pub struct CapturedEvent {
    pub level: Level,
    pub target: String,
    pub component: Option<String>,
    pub op: Option<String>,
    pub event: Option<String>,
    pub fields: HashMap<String, String>,
}

impl CapturedEvent {
    pub fn field(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// The `err.code` field of error and skip events
    pub fn error_code(&self) -> Option<&str> {
        self.field(FIELD_ERR_CODE)
    }
}

#[derive(Default)]
struct FieldVisitor(HashMap<String, String>);

impl FieldVisitor {
    fn insert(&mut self, field: &Field, value: impl ToString) {
        self.0.insert(field.name().to_string(), value.to_string());
    }
}

impl Visit for FieldVisitor {
    // `%value` and message arguments arrive here; their Debug is their Display
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.insert(field, format!("{value:?}"));
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.insert(field, value);
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.insert(field, value);
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.insert(field, value);
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        self.insert(field, value);
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.insert(field, value);
    }
}

type EventLog = Arc<Mutex<Vec<CapturedEvent>>>;

/// Layer that appends every event to a shared log
pub struct TestCaptureLayer {
    events: EventLog,
}

impl TestCaptureLayer {
    /// A layer plus the handle that reads what it records
    pub fn new() -> (Self, TestCapture) {
        let events = EventLog::default();
        let layer = Self {
            events: Arc::clone(&events),
        };
        (layer, TestCapture { events })
    }
}

impl<S> Layer<S> for TestCaptureLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = FieldVisitor::default();
        event.record(&mut visitor);
        let fields = visitor.0;

        let captured = CapturedEvent {
            level: *event.metadata().level(),
            target: event.metadata().target().to_string(),
            component: fields.get(FIELD_COMPONENT).cloned(),
            op: fields.get(FIELD_OP).cloned(),
            event: fields.get(FIELD_EVENT).cloned(),
            fields,
        };

        if let Ok(mut events) = self.events.lock() {
            events.push(captured);
        }
    }
}

/// Read handle over captured events
#[derive(Clone)]
pub struct TestCapture {
    events: EventLog,
}

impl TestCapture {
    /// Snapshot of everything captured so far
    pub fn events(&self) -> Vec<CapturedEvent> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }

    /// Events emitted for one operation name, in emission order
    pub fn events_for_op(&self, op: &str) -> Vec<CapturedEvent> {
        self.filtered(|e| e.op.as_deref() == Some(op))
    }

    /// WARN events, e.g. skipped month pairs and unreadable snapshot files
    pub fn warnings(&self) -> Vec<CapturedEvent> {
        self.filtered(|e| e.level == Level::WARN)
    }

    /// Count events matching a predicate
    pub fn count_events<F>(&self, predicate: F) -> usize
    where
        F: Fn(&CapturedEvent) -> bool,
    {
        self.filtered(predicate).len()
    }

    /// Assert that `op` emitted an event of kind `event`
    ///
    /// # Panics
    ///
    /// Panics if no such event was captured
    pub fn assert_event_exists(&self, op: &str, event: &str) {
        let ops = self.events_for_op(op);
        assert!(
            ops.iter().any(|e| e.event.as_deref() == Some(event)),
            "Expected event op={} event={}; op has {} events, {} captured in total",
            op,
            event,
            ops.len(),
            self.events().len()
        );
    }

    /// Drop all captured events
    pub fn clear(&self) {
        if let Ok(mut events) = self.events.lock() {
            events.clear();
        }
    }

    fn filtered<F>(&self, predicate: F) -> Vec<CapturedEvent>
    where
        F: Fn(&CapturedEvent) -> bool,
    {
        self.events
            .lock()
            .map(|events| events.iter().filter(|e| predicate(e)).cloned().collect())
            .unwrap_or_default()
    }
}

static GLOBAL_CAPTURE: OnceLock<TestCapture> = OnceLock::new();

/// Install the capture subscriber once and return the shared handle
///
/// All tests of one binary share the capture, so assertions should filter
/// by an `op` or month key no other test uses.
///
/// # Example
///
/// ```
/// use portdelta_core::logging_facility::test_capture::init_test_capture;
/// use portdelta_core::log_op_start;
///
/// let capture = init_test_capture();
/// log_op_start!("doc_example_op", start_month = "January 2024");
/// capture.assert_event_exists("doc_example_op", "start");
/// ```
pub fn init_test_capture() -> TestCapture {
    GLOBAL_CAPTURE
        .get_or_init(|| {
            let (layer, capture) = TestCaptureLayer::new();
            tracing_subscriber::registry().with(layer).try_init().ok();
            capture
        })
        .clone()
}
