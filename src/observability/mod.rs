//! Observability: process-wide logging setup and scoped trace capture

pub mod capture;
pub mod format;
pub mod logging;

// Re-export for convenience
pub use capture::{TraceCapture, TraceRecord};
pub use format::SourceFormat;
pub use logging::{
    init_from_config, init_logging, parse_level, source_layer, try_parse_level, LogFormat,
    LoggingSettings,
};

pub use logging::request_span;
