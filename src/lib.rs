//! Demo API client
//!
//! A stub client and an orchestrator that drives it, built so the client can
//! be intercepted in tests without touching the orchestrator.
//!
//! # Overview
//!
//! - [`DemoApiClient`]: stands in for an external service; each operation
//!   only emits a DEBUG trace record.
//! - [`send_message`]: constructs a client, connects, sends one message,
//!   closes.
//! - [`ClientFactory`]: the construction point the orchestrator goes through.
//!   Replace it to replace the client.
//! - [`testing`]: substitutes for the whole client or for single operations.
//!
//! # Quick Start
//!
//! ```rust
//! use demo_api_client::testing::FakeClientFactory;
//! use demo_api_client::{send_message_with, Operation};
//!
//! let factory = FakeClientFactory::new();
//! send_message_with(&factory, "foo").unwrap();
//!
//! factory.calls().assert_called_once(Operation::Connect);
//! factory.calls().assert_send_called_once_with("foo");
//! factory.calls().assert_called_once(Operation::Close);
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod factory;
pub mod observability;
pub mod orchestrator;
pub mod testing;

pub use client::{ApiClient, DemoApiClient, Operation, COMPONENT};
pub use config::{ConfigError, DemoConfig, LoggingSection, RunSection};
pub use error::{ClientError, ClientResult};
pub use factory::{ClientFactory, ClientSlot, DemoClientFactory, PatchGuard};
pub use orchestrator::{send_message, send_message_with, send_messages, send_messages_with};
