//! Call recording for substituted clients

use crate::client::Operation;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// One recorded call on a substitute
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Construct,
    Connect,
    Send(String),
    Close,
}

impl Call {
    pub fn operation(&self) -> Operation {
        match self {
            Call::Construct => Operation::Construct,
            Call::Connect => Operation::Connect,
            Call::Send(_) => Operation::Send,
            Call::Close => Operation::Close,
        }
    }
}

/// Shared, cloneable history of calls made on substitutes
///
/// Clones share the same history, so a test can keep one handle while the
/// factory hands others to the clients it builds. The `assert_*` helpers
/// panic with the recorded history on mismatch.
#[derive(Debug, Clone, Default)]
pub struct CallLog {
    calls: Arc<Mutex<Vec<Call>>>,
}

impl CallLog {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Call>> {
        // A panicking assertion in another test thread must not hide history.
        self.calls.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn record(&self, call: Call) {
        self.lock().push(call);
    }

    /// Snapshot of all recorded calls, oldest first
    pub fn calls(&self) -> Vec<Call> {
        self.lock().clone()
    }

    /// Recorded operations in call order
    pub fn operations(&self) -> Vec<Operation> {
        self.lock().iter().map(Call::operation).collect()
    }

    pub fn call_count(&self, operation: Operation) -> usize {
        self.lock()
            .iter()
            .filter(|call| call.operation() == operation)
            .count()
    }

    /// Messages passed to `send`, in call order
    pub fn sent_messages(&self) -> Vec<String> {
        self.lock()
            .iter()
            .filter_map(|call| match call {
                Call::Send(message) => Some(message.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    #[track_caller]
    pub fn assert_called(&self, operation: Operation) {
        assert!(
            self.call_count(operation) > 0,
            "expected `{operation}` to have been called; calls: {:?}",
            self.calls()
        );
    }

    #[track_caller]
    pub fn assert_not_called(&self, operation: Operation) {
        assert_eq!(
            self.call_count(operation),
            0,
            "expected `{operation}` not to have been called; calls: {:?}",
            self.calls()
        );
    }

    #[track_caller]
    pub fn assert_called_once(&self, operation: Operation) {
        assert_eq!(
            self.call_count(operation),
            1,
            "expected `{operation}` to have been called once; calls: {:?}",
            self.calls()
        );
    }

    /// The most recent `send` received `message`
    #[track_caller]
    pub fn assert_send_called_with(&self, message: &str) {
        let sent = self.sent_messages();
        assert_eq!(
            sent.last().map(String::as_str),
            Some(message),
            "unexpected last `send` argument; calls: {:?}",
            self.calls()
        );
    }

    /// Exactly one `send` happened and it received `message`
    #[track_caller]
    pub fn assert_send_called_once_with(&self, message: &str) {
        assert_eq!(
            self.sent_messages(),
            vec![message.to_string()],
            "expected a single `send` with {message:?}; calls: {:?}",
            self.calls()
        );
    }
}
