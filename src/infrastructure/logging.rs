use tracing::subscriber::SetGlobalDefaultError;
use tracing::Subscriber;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    EnvFilter,
};

use crate::config::{LogFormat, LoggingConfig};

/// Builds the subscriber described by the logging config without installing it
///
/// `RUST_LOG` takes precedence over the configured level.
pub fn build_subscriber(config: &LoggingConfig) -> Box<dyn Subscriber + Send + Sync> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.level));
    let registry = tracing_subscriber::registry().with(filter);

    match config.format {
        LogFormat::Json => Box::new(registry.with(fmt::layer().json())),
        LogFormat::Pretty => Box::new(
            registry.with(
                fmt::layer()
                    .pretty()
                    .with_target(true)
                    .with_span_events(FmtSpan::CLOSE),
            ),
        ),
    }
}

/// Installs the configured subscriber as the global default
pub fn try_init_logging(config: &LoggingConfig) -> Result<(), SetGlobalDefaultError> {
    tracing::subscriber::set_global_default(build_subscriber(config))?;
    tracing::info!(level = %config.level, format = ?config.format, "Logging initialized");
    Ok(())
}
