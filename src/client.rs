//! Demo API client
//!
//! Stands in for an external service endpoint. Nothing here talks to a
//! network: every operation emits one DEBUG trace record naming itself and
//! returns. Ordering of operations is up to the caller.

use crate::error::ClientResult;
use std::fmt;
use tracing::debug;

/// Component name attached to every trace record emitted by the client
pub const COMPONENT: &str = "DemoApiClient";

/// The operations a client exposes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Construct,
    Connect,
    Send,
    Close,
}

impl Operation {
    /// Event name used in trace records
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Construct => "construct",
            Operation::Connect => "connect",
            Operation::Send => "send",
            Operation::Close => "close",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Client capability set driven by the orchestrator
///
/// Construction is not part of the trait; it lives behind
/// [`ClientFactory`](crate::factory::ClientFactory) so it can be replaced too.
pub trait ApiClient {
    /// Open the connection
    fn connect(&mut self) -> ClientResult<()>;

    /// Send one message
    fn send(&mut self, message: &str) -> ClientResult<()>;

    /// Close the connection
    fn close(&mut self) -> ClientResult<()>;
}

impl<C: ApiClient + ?Sized> ApiClient for Box<C> {
    fn connect(&mut self) -> ClientResult<()> {
        (**self).connect()
    }

    fn send(&mut self, message: &str) -> ClientResult<()> {
        (**self).send(message)
    }

    fn close(&mut self) -> ClientResult<()> {
        (**self).close()
    }
}

/// Stub client that only traces its own calls
#[derive(Debug)]
pub struct DemoApiClient {
    _private: (),
}

impl DemoApiClient {
    pub fn new() -> Self {
        debug!(target: COMPONENT, "construct");
        Self { _private: () }
    }
}

impl Default for DemoApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient for DemoApiClient {
    fn connect(&mut self) -> ClientResult<()> {
        debug!(target: COMPONENT, "connect");
        Ok(())
    }

    fn send(&mut self, message: &str) -> ClientResult<()> {
        debug!(target: COMPONENT, "send {message}");
        Ok(())
    }

    fn close(&mut self) -> ClientResult<()> {
        debug!(target: COMPONENT, "close");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observability::TraceCapture;

    #[test]
    fn test_operation_names() {
        assert_eq!(Operation::Construct.as_str(), "construct");
        assert_eq!(Operation::Connect.as_str(), "connect");
        assert_eq!(Operation::Send.as_str(), "send");
        assert_eq!(Operation::Close.as_str(), "close");
        assert_eq!(Operation::Send.to_string(), "send");
    }

    #[test]
    fn test_each_operation_emits_one_record() {
        let capture = TraceCapture::new();

        capture.scope(|| {
            let mut client = DemoApiClient::new();
            client.connect().unwrap();
            client.send("hello").unwrap();
            client.close().unwrap();
        });

        assert_eq!(
            capture.texts(),
            vec!["construct", "connect", "send hello", "close"]
        );
        for record in capture.records() {
            assert_eq!(record.component, COMPONENT);
            assert_eq!(record.level, tracing::Level::DEBUG);
        }
    }

    #[test]
    fn test_operations_have_no_ordering_constraints() {
        // Close before connect, send twice: the stub does not care.
        let capture = TraceCapture::new();

        capture.scope(|| {
            let mut client = DemoApiClient::default();
            client.close().unwrap();
            client.send("a").unwrap();
            client.send("a").unwrap();
            client.connect().unwrap();
        });

        assert_eq!(
            capture.texts(),
            vec!["construct", "close", "send a", "send a", "connect"]
        );
    }

    #[test]
    fn test_send_embeds_message_verbatim() {
        let capture = TraceCapture::new();

        capture.scope(|| {
            let mut client = DemoApiClient::new();
            client.send("").unwrap();
            client.send("multi word {braces} ünïcode").unwrap();
        });

        let texts = capture.texts();
        assert_eq!(texts[1], "send ");
        assert_eq!(texts[2], "send multi word {braces} ünïcode");
    }

    #[test]
    fn test_boxed_client_delegates() {
        let capture = TraceCapture::new();

        capture.scope(|| {
            let mut client: Box<dyn ApiClient> = Box::new(DemoApiClient::new());
            client.connect().unwrap();
            client.send("boxed").unwrap();
            client.close().unwrap();
        });

        assert_eq!(
            capture.texts(),
            vec!["construct", "connect", "send boxed", "close"]
        );
    }
}
