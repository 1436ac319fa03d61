//! Per-operation interception of a real client
//!
//! [`InterceptingFactory`] wraps a real factory. Every client it builds is
//! the real one with selected operations replaced by hooks. Replaced
//! operations are recorded in the factory's [`CallLog`]; everything else,
//! construction included, runs for real and keeps its trace output.

use super::calls::{Call, CallLog};
use crate::client::ApiClient;
use crate::error::ClientResult;
use crate::factory::ClientFactory;
use std::fmt;
use std::sync::Arc;

type UnitHook = Arc<dyn Fn() -> ClientResult<()> + Send + Sync>;
type SendHook = Arc<dyn Fn(&str) -> ClientResult<()> + Send + Sync>;

#[derive(Clone, Default)]
struct Hooks {
    connect: Option<UnitHook>,
    send: Option<SendHook>,
    close: Option<UnitHook>,
}

impl fmt::Debug for Hooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hooks")
            .field("connect", &self.connect.is_some())
            .field("send", &self.send.is_some())
            .field("close", &self.close.is_some())
            .finish()
    }
}

/// Factory whose clients have selected operations replaced
#[derive(Debug, Clone)]
pub struct InterceptingFactory<F> {
    inner: F,
    hooks: Hooks,
    log: CallLog,
}

impl<F: ClientFactory> InterceptingFactory<F> {
    pub fn new(inner: F) -> Self {
        Self {
            inner,
            hooks: Hooks::default(),
            log: CallLog::new(),
        }
    }

    /// Replace `connect` with a no-op that succeeds
    pub fn intercept_connect(self) -> Self {
        self.on_connect(|| Ok(()))
    }

    /// Replace `send` with a no-op that succeeds
    pub fn intercept_send(self) -> Self {
        self.on_send(|_| Ok(()))
    }

    /// Replace `close` with a no-op that succeeds
    pub fn intercept_close(self) -> Self {
        self.on_close(|| Ok(()))
    }

    pub fn on_connect<H>(mut self, hook: H) -> Self
    where
        H: Fn() -> ClientResult<()> + Send + Sync + 'static,
    {
        self.hooks.connect = Some(Arc::new(hook));
        self
    }

    pub fn on_send<H>(mut self, hook: H) -> Self
    where
        H: Fn(&str) -> ClientResult<()> + Send + Sync + 'static,
    {
        self.hooks.send = Some(Arc::new(hook));
        self
    }

    pub fn on_close<H>(mut self, hook: H) -> Self
    where
        H: Fn() -> ClientResult<()> + Send + Sync + 'static,
    {
        self.hooks.close = Some(Arc::new(hook));
        self
    }

    /// Calls made on the replaced operations
    pub fn calls(&self) -> &CallLog {
        &self.log
    }
}

impl<F: ClientFactory> ClientFactory for InterceptingFactory<F> {
    type Client = Intercepted<F::Client>;

    fn create(&self) -> Self::Client {
        Intercepted {
            inner: self.inner.create(),
            hooks: self.hooks.clone(),
            log: self.log.clone(),
        }
    }
}

/// A real client with some operations routed to hooks
#[derive(Debug)]
pub struct Intercepted<C> {
    inner: C,
    hooks: Hooks,
    log: CallLog,
}

impl<C> Intercepted<C> {
    /// Unwrap the real client, dropping the hooks
    pub fn into_inner(self) -> C {
        self.inner
    }
}

impl<C: ApiClient> ApiClient for Intercepted<C> {
    fn connect(&mut self) -> ClientResult<()> {
        match &self.hooks.connect {
            Some(hook) => {
                self.log.record(Call::Connect);
                hook()
            }
            None => self.inner.connect(),
        }
    }

    fn send(&mut self, message: &str) -> ClientResult<()> {
        match &self.hooks.send {
            Some(hook) => {
                self.log.record(Call::Send(message.to_string()));
                hook(message)
            }
            None => self.inner.send(message),
        }
    }

    fn close(&mut self) -> ClientResult<()> {
        match &self.hooks.close {
            Some(hook) => {
                self.log.record(Call::Close);
                hook()
            }
            None => self.inner.close(),
        }
    }
}
