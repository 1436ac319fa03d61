//! In-memory trace capture
//!
//! [`TraceCapture`] is a `tracing` layer that keeps every event it sees.
//! [`TraceCapture::scope`] installs it as the thread's default subscriber
//! for the duration of a closure, which keeps the capture local to one test
//! even when tests run in parallel.

use std::fmt::{self, Write as _};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::prelude::*;

/// One captured event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceRecord {
    pub level: Level,
    pub component: String,
    pub file: Option<String>,
    pub line: Option<u32>,
    pub text: String,
}

impl fmt::Display for TraceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}:{}:{} {}",
            self.level,
            self.component,
            self.file.as_deref().unwrap_or("<unknown>"),
            self.line.unwrap_or(0),
            self.text
        )
    }
}

#[derive(Default)]
struct MessageVisitor {
    message: String,
}

impl Visit for MessageVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message.push_str(value);
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            let _ = write!(self.message, "{value:?}");
        }
    }
}

/// Layer collecting [`TraceRecord`]s; clones share the same buffer
#[derive(Debug, Clone, Default)]
pub struct TraceCapture {
    records: Arc<Mutex<Vec<TraceRecord>>>,
}

impl TraceCapture {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<TraceRecord>> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Run `f` with this capture as the current thread's subscriber
    pub fn scope<R>(&self, f: impl FnOnce() -> R) -> R {
        let subscriber = tracing_subscriber::registry().with(self.clone());
        tracing::subscriber::with_default(subscriber, f)
    }

    pub fn records(&self) -> Vec<TraceRecord> {
        self.lock().clone()
    }

    /// Event texts in emission order
    pub fn texts(&self) -> Vec<String> {
        self.lock().iter().map(|r| r.text.clone()).collect()
    }

    /// Event texts emitted by one component
    pub fn texts_for(&self, component: &str) -> Vec<String> {
        self.lock()
            .iter()
            .filter(|r| r.component == component)
            .map(|r| r.text.clone())
            .collect()
    }

    /// Rendered lines, one per record
    pub fn lines(&self) -> Vec<String> {
        self.lock().iter().map(ToString::to_string).collect()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }
}

impl<S: Subscriber> Layer<S> for TraceCapture {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let meta = event.metadata();
        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);

        self.lock().push(TraceRecord {
            level: *meta.level(),
            component: meta.target().to_string(),
            file: meta.file().map(str::to_string),
            line: meta.line(),
            text: visitor.message,
        });
    }
}
