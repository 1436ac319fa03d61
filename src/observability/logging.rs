//! Structured logging system using tracing crate
//!
//! The client's trace records are plain `tracing` events with the component
//! name as target. This module installs the process-wide subscriber that
//! renders them.
//!
//! ## Log Format Options
//!
//! - `source` - One line per event: `<LEVEL> <component>:<file>:<line> <text>` (default)
//! - `json` - Structured JSON format for log aggregation systems
//! - `pretty` - Human-readable format with colors and indentation
//! - `compact` - Terminal-friendly format with colors but minimal spacing
//!
//! ## Environment Variables
//!
//! - `LOG_LEVEL`: Log level (ERROR, WARN, INFO, DEBUG, TRACE)
//! - `LOG_FORMAT`: Output format (source, json, pretty, compact)
//! - `LOG_SPANS`: Include span events (true/false)
//! - `RUST_LOG`: Override log filtering (follows env_logger format)
//!
//! Environment variables take precedence over the `[logging]` config section,
//! and a command-line level takes precedence over both.
//!
//! ## Examples
//!
//! ```bash
//! # Default: every client event at DEBUG
//! ./demo-api-client
//!
//! # JSON lines
//! LOG_FORMAT=json ./demo-api-client
//! ```

use super::format::SourceFormat;
use crate::config::LoggingSection;
use std::env;
use tracing::{Level, Subscriber};
use tracing_subscriber::fmt::format::DefaultFields;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// `<LEVEL> <component>:<file>:<line> <text>`
    Source,
    /// JSON format for structured logging (machine-readable)
    Json,
    /// Pretty format with colors and indentation (human-readable)
    Pretty,
    /// Compact format with colors but minimal spacing (terminal-friendly)
    Compact,
}

impl LogFormat {
    /// Parse log format from string, falling back to [`LogFormat::Source`]
    pub fn parse(s: &str) -> Self {
        Self::try_parse(s).unwrap_or(LogFormat::Source)
    }

    /// Parse log format from string, `None` if unrecognized
    pub fn try_parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "source" => Some(LogFormat::Source),
            "json" => Some(LogFormat::Json),
            "pretty" => Some(LogFormat::Pretty),
            "compact" => Some(LogFormat::Compact),
            _ => None,
        }
    }
}

/// Parse a level name, `None` if unrecognized
pub fn try_parse_level(s: &str) -> Option<Level> {
    match s.trim().to_uppercase().as_str() {
        "ERROR" => Some(Level::ERROR),
        "WARN" => Some(Level::WARN),
        "INFO" => Some(Level::INFO),
        "DEBUG" => Some(Level::DEBUG),
        "TRACE" => Some(Level::TRACE),
        _ => None,
    }
}

/// Parse a level name, falling back to DEBUG so client events stay visible
pub fn parse_level(s: &str) -> Level {
    try_parse_level(s).unwrap_or(Level::DEBUG)
}

fn span_events(include_spans: bool) -> fmt::format::FmtSpan {
    if include_spans {
        fmt::format::FmtSpan::NEW | fmt::format::FmtSpan::CLOSE
    } else {
        fmt::format::FmtSpan::NONE
    }
}

/// Build the `source` layout layer writing to `writer`
///
/// Span events are configured before the event format is swapped in, since
/// only the default format exposes them.
pub fn source_layer<S, W>(
    writer: W,
    include_spans: bool,
) -> fmt::Layer<S, DefaultFields, SourceFormat, W>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    W: for<'w> MakeWriter<'w> + 'static,
{
    fmt::layer()
        .with_span_events(span_events(include_spans))
        .event_format(SourceFormat)
        .with_writer(writer)
}

/// Install the process-wide subscriber
///
/// Call once at startup. A second call returns an error and leaves the first
/// subscriber in place.
pub fn init_logging(
    level: Level,
    format: LogFormat,
    include_spans: bool,
) -> Result<(), TryInitError> {
    let mut filter = EnvFilter::new(level.to_string());

    // Allow RUST_LOG to override
    if let Ok(rust_log) = env::var("RUST_LOG") {
        filter = EnvFilter::new(rust_log);
    }

    let subscriber = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Source => subscriber
            .with(source_layer(std::io::stderr, include_spans))
            .try_init(),
        LogFormat::Json => {
            let fmt_layer = fmt::layer()
                .json()
                .with_writer(std::io::stderr)
                .with_span_events(span_events(include_spans));
            subscriber.with(fmt_layer).try_init()
        }
        LogFormat::Pretty => {
            let fmt_layer = fmt::layer()
                .pretty()
                .with_ansi(true)
                .with_writer(std::io::stderr)
                .with_span_events(span_events(include_spans));
            subscriber.with(fmt_layer).try_init()
        }
        LogFormat::Compact => {
            let fmt_layer = fmt::layer()
                .compact()
                .with_ansi(true)
                .with_writer(std::io::stderr)
                .with_span_events(span_events(include_spans));
            subscriber.with(fmt_layer).try_init()
        }
    }
}

/// Effective logging settings
///
/// Precedence, lowest first: `[logging]` config section, `LOG_*`
/// environment variables, command-line level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoggingSettings {
    pub level: Level,
    pub format: LogFormat,
    pub include_spans: bool,
}

impl LoggingSettings {
    /// Resolve settings against the process environment
    pub fn resolve(section: &LoggingSection, cli_level: Option<Level>) -> Self {
        Self::resolve_with(section, cli_level, |key| env::var(key).ok())
    }

    /// Resolve settings with `lookup` standing in for the environment
    pub fn resolve_with<F>(section: &LoggingSection, cli_level: Option<Level>, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let level = lookup("LOG_LEVEL").unwrap_or_else(|| section.level.clone());
        let format = lookup("LOG_FORMAT").unwrap_or_else(|| section.format.clone());
        let include_spans = lookup("LOG_SPANS")
            .map(|v| parse_flag(&v))
            .unwrap_or(section.spans);

        Self {
            level: cli_level.unwrap_or_else(|| parse_level(&level)),
            format: LogFormat::parse(&format),
            include_spans,
        }
    }

    /// Install these settings as the process-wide subscriber
    pub fn init(&self) -> Result<(), TryInitError> {
        init_logging(self.level, self.format, self.include_spans)
    }
}

fn parse_flag(value: &str) -> bool {
    value.trim().to_lowercase() == "true"
}

/// Initialize logging from a config section plus environment overrides
pub fn init_from_config(section: &LoggingSection) -> Result<(), TryInitError> {
    LoggingSettings::resolve(section, None).init()
}

/// Create a span covering one orchestrated request
#[macro_export]
macro_rules! request_span {
    ($($field:tt)*) => {
        tracing::debug_span!("send_message", $($field)*)
    };
}

pub use request_span;
