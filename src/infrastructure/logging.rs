//! Process-wide tracing subscriber
//!
//! Both formats stamp events with an RFC 3339 UTC timestamp. The console
//! format is the single-line development layout with the call site appended;
//! the JSON format flattens event fields into the top-level object.

use tracing_subscriber::{
    fmt::{self, time::ChronoUtc},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

use crate::config::{LogFormat, LoggingConfig};

const FALLBACK_LEVEL: &str = "info";

/// Install the global tracing subscriber. `RUST_LOG` takes precedence over the
/// configured level.
pub fn init_logging(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| configured_filter(config));
    let registry = tracing_subscriber::registry().with(filter);

    match config.format {
        LogFormat::Console => registry
            .with(
                fmt::layer()
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_target(false)
                    .with_file(true)
                    .with_line_number(true),
            )
            .init(),
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .json()
                    .with_timer(ChronoUtc::rfc_3339())
                    .flatten_event(true)
                    .with_current_span(false)
                    .with_span_list(false),
            )
            .init(),
    }

    tracing::debug!(level = %config.level, format = ?config.format, "Logging initialized");
}

/// Filter built from the configured level alone. An unparsable level falls
/// back to `info` rather than silencing the server.
fn configured_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_new(&config.level).unwrap_or_else(|err| {
        eprintln!(
            "invalid log level {:?} ({}), using {}",
            config.level, err, FALLBACK_LEVEL
        );
        EnvFilter::new(FALLBACK_LEVEL)
    })
}
