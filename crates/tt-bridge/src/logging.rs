//! stderr diagnostics as `LEVEL: message` lines.

use std::fmt;
use tracing::{Event, Subscriber};
use tracing_subscriber::fmt::format::{DefaultFields, Writer};
use tracing_subscriber::fmt::{self as tfmt, FmtContext, FormatEvent, FormatFields, MakeWriter};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{prelude::*, EnvFilter};

/// Overrides the default filter, e.g. `TOKENTRIM_LOG=warn`.
pub const LOG_ENV: &str = "TOKENTRIM_LOG";
const DEFAULT_FILTER: &str = "tt_bridge=debug,tt_lingua=debug,warn";

/// Event format producing `DEBUG: Prompt length: 42 chars`.
pub struct LevelPrefix;

impl<S, N> FormatEvent<S, N> for LevelPrefix
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(&self, ctx: &FmtContext<'_, S, N>, mut writer: Writer<'_>, event: &Event<'_>) -> fmt::Result {
        write!(writer, "{}: ", event.metadata().level())?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

pub fn filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Plain-text `LevelPrefix` layer. Fields are rendered without SGR escapes
/// even when the writer is a terminal.
pub fn layer<S, W>(make_writer: W) -> tfmt::Layer<S, DefaultFields, LevelPrefix, W>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    W: for<'w> MakeWriter<'w> + 'static,
{
    tfmt::layer().event_format(LevelPrefix).with_ansi(false).with_writer(make_writer)
}

/// Install the global subscriber. stdout stays reserved for the envelope.
pub fn init() {
    tracing_subscriber::registry()
        .with(layer(std::io::stderr))
        .with(filter())
        .init();
}
