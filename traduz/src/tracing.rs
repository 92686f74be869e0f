use miette::{IntoDiagnostic, WrapErr};
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{Format, TracingConfig};

/// Initializes the global subscriber, writing log lines to stderr so they never mix with results.
///
/// The filter is read from `RUST_LOG` and falls back to the configured directives.
pub fn try_init(tracing: &TracingConfig) -> miette::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&tracing.filter))
        .into_diagnostic()
        .wrap_err("invalid tracing filter")?;
    let base = tracing_subscriber::registry().with(filter);

    let result = match tracing.format {
        Format::Json => base
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init(),
        Format::Pretty => base
            .with(fmt::layer().pretty().with_writer(std::io::stderr))
            .try_init(),
        Format::Compact => base
            .with(fmt::layer().compact().with_writer(std::io::stderr))
            .try_init(),
    };

    result
        .into_diagnostic()
        .wrap_err("could not init registry")?;

    debug!(format = ?tracing.format, "tracing initialized");

    Ok(())
}
