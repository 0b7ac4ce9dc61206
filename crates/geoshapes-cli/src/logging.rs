//! Logging setup for the CLI.
//!
//! Standard output carries the GeoJSON document, so every log line goes to
//! stderr. The level comes from `RUST_LOG` and defaults to `warn`. Colour
//! codes are only emitted when stderr is a terminal.

use std::io::{self, IsTerminal};
use tracing::Subscriber;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

const DEFAULT_DIRECTIVE: &str = "warn";

/// Install the global stderr subscriber.
///
/// # Errors
///
/// Fails if a global subscriber has already been set.
pub fn init_logging() -> anyhow::Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(diagnostics_layer(io::stderr, io::stderr().is_terminal()))
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialize logging: {e}"))
}

fn diagnostics_layer<S, W>(make_writer: W, ansi: bool) -> impl Layer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a> + 'static,
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    tracing_subscriber::fmt::layer()
        .with_writer(make_writer)
        .with_ansi(ansi)
        .with_target(false)
}
