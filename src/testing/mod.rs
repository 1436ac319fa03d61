//! Testing utilities for intercepting the demo client
//!
//! Substitutes implement the same [`ApiClient`](crate::ApiClient) and
//! [`ClientFactory`](crate::ClientFactory) traits the orchestrator already
//! consumes, so nothing in the orchestrator changes when they are used.
//!
//! - [`InterceptingFactory`]: replace single operations of the real client.
//! - [`FakeClientFactory`]: replace the whole client.
//! - [`CallLog`]: what the substitutes were asked to do.

pub mod calls;
pub mod fake;
pub mod intercept;

pub use calls::{Call, CallLog};
pub use fake::{FakeClient, FakeClientFactory};
pub use intercept::{Intercepted, InterceptingFactory};
