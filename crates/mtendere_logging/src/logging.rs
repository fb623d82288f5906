use std::io;

use mtendere_error::error::LoggingError;
use tracing_subscriber;
use tracing_subscriber::fmt::time::UtcTime;

const DEFAULT_TIME_PATTERN: &str =
    "[year]-[month]-[day]T[hour repr:24]:[minute]:[second]::[subsecond digits:4]";

/// Install the global tracing subscriber.
///
/// Development gets human-readable output; every other environment logs
/// flattened JSON lines so the platform log collector can ingest them.
pub async fn setup_logging(app_env: &str) -> Result<(), LoggingError> {
    let time_format = time::format_description::parse(DEFAULT_TIME_PATTERN).map_err(|e| {
        LoggingError::Error(format!(
            "Failed to parse time format: {} with error: {}",
            DEFAULT_TIME_PATTERN, e
        ))
    })?;

    let builder = tracing_subscriber::fmt()
        .with_target(false)
        .with_timer(UtcTime::new(time_format))
        .with_writer(io::stdout);

    let result = if app_env == "development" {
        builder.compact().try_init()
    } else {
        builder
            .json()
            .flatten_event(true)
            .with_thread_ids(true)
            .try_init()
    };

    result.map_err(|e| LoggingError::Error(format!("Failed to setup logging with error: {}", e)))
}
