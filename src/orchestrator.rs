//! Request orchestration
//!
//! One call drives one full client lifecycle: construct, connect, send,
//! close. The client never outlives the call.
//!
//! Errors are propagated with `?` and nothing is retried or cleaned up: when
//! `send` fails, `close` is not called.

use crate::client::ApiClient;
use crate::error::ClientResult;
use crate::factory::{ClientFactory, DemoClientFactory};
use crate::request_span;

/// Send one message through a fresh [`DemoApiClient`](crate::DemoApiClient)
pub fn send_message(message: &str) -> ClientResult<()> {
    send_message_with(&DemoClientFactory, message)
}

/// Send one message through a client obtained from `factory`
pub fn send_message_with<F>(factory: &F, message: &str) -> ClientResult<()>
where
    F: ClientFactory + ?Sized,
{
    let _span = request_span!(message = message).entered();

    let mut client = factory.create();
    client.connect()?;
    client.send(message)?;
    client.close()?;

    Ok(())
}

/// Send each message in order through [`DemoApiClient`](crate::DemoApiClient)s
pub fn send_messages<S: AsRef<str>>(messages: &[S]) -> ClientResult<()> {
    send_messages_with(&DemoClientFactory, messages)
}

/// Send each message in order, one fresh client per message
///
/// Stops at the first failing request.
pub fn send_messages_with<F, S>(factory: &F, messages: &[S]) -> ClientResult<()>
where
    F: ClientFactory + ?Sized,
    S: AsRef<str>,
{
    for message in messages {
        send_message_with(factory, message.as_ref())?;
    }
    Ok(())
}
