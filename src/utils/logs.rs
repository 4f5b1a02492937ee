use tracing_subscriber::EnvFilter;
use crate::core::domain::Configuration;

// RUST_LOG overrides the default `info` level. Dev mode logs human-readable lines,
// otherwise every line is a json object for log aggregation.
pub fn setup_tracing(config: &Configuration) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        // disable printing the name of the module in every log line.
        .with_target(false);
    if config.dev_mode {
        builder.with_ansi(true).init();
    } else {
        builder
            .with_ansi(false)
            .json()
            .init();
    }
}
