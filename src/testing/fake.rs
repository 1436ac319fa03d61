//! Whole-client substitute
//!
//! [`FakeClient`] replaces the demo client entirely: it records every call,
//! construction included, and emits no trace records.

use super::calls::{Call, CallLog};
use crate::client::ApiClient;
use crate::error::{ClientError, ClientResult};
use crate::factory::ClientFactory;

#[derive(Debug, Clone, Default)]
struct Failures {
    connect: Option<String>,
    send: Option<String>,
    close: Option<String>,
}

/// Factory building [`FakeClient`]s that share one [`CallLog`]
#[derive(Debug, Clone, Default)]
pub struct FakeClientFactory {
    log: CallLog,
    failures: Failures,
}

impl FakeClientFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `connect` fail with the given message
    pub fn fail_connect<S: Into<String>>(mut self, message: S) -> Self {
        self.failures.connect = Some(message.into());
        self
    }

    /// Make `send` fail with the given message
    pub fn fail_send<S: Into<String>>(mut self, message: S) -> Self {
        self.failures.send = Some(message.into());
        self
    }

    /// Make `close` fail with the given message
    pub fn fail_close<S: Into<String>>(mut self, message: S) -> Self {
        self.failures.close = Some(message.into());
        self
    }

    pub fn calls(&self) -> &CallLog {
        &self.log
    }
}

impl ClientFactory for FakeClientFactory {
    type Client = FakeClient;

    fn create(&self) -> FakeClient {
        self.log.record(Call::Construct);
        FakeClient {
            log: self.log.clone(),
            failures: self.failures.clone(),
        }
    }
}

/// Silent client that only records what was asked of it
#[derive(Debug)]
pub struct FakeClient {
    log: CallLog,
    failures: Failures,
}

impl ApiClient for FakeClient {
    fn connect(&mut self) -> ClientResult<()> {
        self.log.record(Call::Connect);
        match &self.failures.connect {
            Some(message) => Err(ClientError::connect_failed(message.clone())),
            None => Ok(()),
        }
    }

    fn send(&mut self, message: &str) -> ClientResult<()> {
        self.log.record(Call::Send(message.to_string()));
        match &self.failures.send {
            Some(reason) => Err(ClientError::send_failed(reason.clone())),
            None => Ok(()),
        }
    }

    fn close(&mut self) -> ClientResult<()> {
        self.log.record(Call::Close);
        match &self.failures.close {
            Some(message) => Err(ClientError::close_failed(message.clone())),
            None => Ok(()),
        }
    }
}
