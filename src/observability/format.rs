//! Single-line event layout naming the emitting component and source line

use std::fmt;
use tracing::{Event, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;

/// Renders `<LEVEL> <target>:<file>:<line> <fields>` with no timestamp
#[derive(Debug, Clone, Copy, Default)]
pub struct SourceFormat;

impl<S, N> FormatEvent<S, N> for SourceFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let meta = event.metadata();
        write!(
            writer,
            "{} {}:{}:{} ",
            meta.level(),
            meta.target(),
            meta.file().unwrap_or("<unknown>"),
            meta.line().unwrap_or(0)
        )?;
        ctx.format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}
